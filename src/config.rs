//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::tools::TrimMode;

/// Command line configuration for Toolshed.
#[derive(Debug, Clone, Parser)]
#[command(name = "toolshed", version, about, long_about = None)]
pub struct Config {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Tool to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available tools.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert Markdown to HTML
    Markdown(MarkdownArgs),

    /// Encode or decode Base64
    Base64 {
        /// Conversion direction
        #[arg(value_enum)]
        direction: Direction,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Percent encode or decode a URL component
    Url {
        /// Conversion direction
        #[arg(value_enum)]
        direction: Direction,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Trim whitespace
    Trim {
        /// Trimming strategy
        #[arg(long, value_enum, default_value = "both")]
        mode: TrimMode,

        #[command(flatten)]
        io: IoArgs,
    },
}

/// Encoder direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Encode,
    Decode,
}

/// Input and output locations shared by every tool.
#[derive(Debug, Clone, Default, Args)]
pub struct IoArgs {
    /// Input file (stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl IoArgs {
    /// Returns input file path, or None when reading from stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

/// Markdown tool options.
#[derive(Debug, Clone, Default, Args)]
pub struct MarkdownArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Write a full preview page instead of an HTML fragment
    #[arg(long)]
    pub page: bool,

    /// Preview page title (defaults to input file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Open the written preview page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl MarkdownArgs {
    /// Returns preview title from configuration or input file stem.
    pub fn title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        self.io
            .input_path()
            .and_then(|path| path.file_stem())
            .and_then(|stem| stem.to_str())
            .map(String::from)
            .unwrap_or_else(|| "Preview".to_string())
    }
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns input and output locations of the selected tool.
    pub fn io(&self) -> &IoArgs {
        match &self.command {
            Command::Markdown(args) => &args.io,
            Command::Base64 { io, .. } | Command::Url { io, .. } | Command::Trim { io, .. } => io,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Input path does not exist
    /// - `--open` is used without `--page` and an output file
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.io().input_path()
            && !input.exists()
        {
            bail!("Input path does not exist: {}", input.display());
        }

        if let Command::Markdown(args) = &self.command
            && args.open
        {
            if !args.page {
                bail!("--open requires --page");
            }
            if args.io.output.is_none() {
                bail!("--open requires an output file");
            }
        }

        Ok(())
    }
}

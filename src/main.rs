use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use toolshed::tools::{base64, trim, url};
use toolshed::{Command, Config, Direction, IoArgs, MarkdownArgs};
use tracing::{debug, info};

/// Directory holding page stylesheets, relative to the written page.
const ASSETS_DIR: &str = "assets";

/// Reads tool input from file or stdin.
///
/// # Errors
///
/// Returns error if the file or stdin cannot be read
fn read_input(io: &IoArgs) -> Result<Vec<u8>> {
    match io.input_path() {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            fs::read(path).with_context(|| format!("Failed to read input: {}", path.display()))
        }
        None => {
            debug!("reading stdin");
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Reads tool input as UTF8 text.
///
/// # Errors
///
/// Returns error if input cannot be read or is not valid UTF8
fn read_text(io: &IoArgs) -> Result<String> {
    let bytes = read_input(io)?;
    String::from_utf8(bytes).context("Input contains invalid UTF8")
}

/// Removes the single trailing newline a shell pipe appends to stdin.
///
/// File input is returned unchanged.
fn strip_piped_newline<'a>(io: &IoArgs, input: &'a [u8]) -> &'a [u8] {
    if io.input_path().is_some() {
        return input;
    }

    let input = input.strip_suffix(b"\n").unwrap_or(input);
    input.strip_suffix(b"\r").unwrap_or(input)
}

/// Writes tool output to file or stdout.
///
/// Text written to stdout gets a trailing newline when it lacks one.
///
/// # Errors
///
/// Returns error if the file or stdout cannot be written
fn write_output(io: &IoArgs, content: &[u8], is_text: bool) -> Result<()> {
    match &io.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(path = %path.display(), bytes = content.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content).context("Failed to write stdout")?;
            if is_text && !content.is_empty() && !content.ends_with(b"\n") {
                stdout.write_all(b"\n").context("Failed to write stdout")?;
            }
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

/// Converts Markdown input to an HTML fragment or preview page.
///
/// When writing a page to a file, the preview stylesheet is written to an
/// `assets` directory beside it.
///
/// # Errors
///
/// Returns error if input cannot be read, output or assets cannot be
/// written, or the browser cannot be launched
fn run_markdown(args: &MarkdownArgs) -> Result<()> {
    let markdown = read_text(&args.io)?;

    let html = if args.page {
        let title = args.title();
        info!(title = %title, "generating preview page");
        toolshed::pages::preview::generate(&title, &markdown).into_string()
    } else {
        toolshed::convert(&markdown)
    };

    write_output(&args.io, html.as_bytes(), true)?;

    if args.page
        && let Some(output) = &args.io.output
    {
        let assets_dir = output
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(ASSETS_DIR);
        toolshed::write_css_assets(&assets_dir).context("Failed to write preview assets")?;

        if args.open {
            info!(path = %output.display(), "opening preview");
            open::that(output)
                .with_context(|| format!("Failed to open preview: {}", output.display()))?;
        }
    }

    Ok(())
}

fn run_base64(direction: Direction, io: &IoArgs) -> Result<()> {
    match direction {
        Direction::Encode => {
            let input = read_input(io)?;
            let encoded = base64::encode(strip_piped_newline(io, &input));
            write_output(io, encoded.as_bytes(), true)
        }
        Direction::Decode => {
            let input = read_text(io)?;
            let decoded = base64::decode(&input)?;
            write_output(io, &decoded, false)
        }
    }
}

fn run_url(direction: Direction, io: &IoArgs) -> Result<()> {
    let input = read_input(io)?;
    let input = std::str::from_utf8(strip_piped_newline(io, &input))
        .context("Input contains invalid UTF8")?;

    let output = match direction {
        Direction::Encode => url::encode(input),
        Direction::Decode => url::decode(input)?,
    };

    write_output(io, output.as_bytes(), true)
}

fn main() -> Result<()> {
    let config = Config::parse();
    toolshed::logging::init_logging(config.verbose);
    config.validate().context("Invalid configuration")?;

    debug!(command = ?config.command, "running tool");

    match &config.command {
        Command::Markdown(args) => run_markdown(args),
        Command::Base64 { direction, io } => run_base64(*direction, io),
        Command::Url { direction, io } => run_url(*direction, io),
        Command::Trim { mode, io } => {
            let input = read_text(io)?;
            write_output(io, trim::trim(&input, *mode).as_bytes(), true)
        }
    }
}

//! Whitespace trimming.

use clap::ValueEnum;

/// Trimming strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TrimMode {
    /// Trim leading and trailing whitespace of the whole text
    #[default]
    Both,
    /// Trim leading whitespace of the whole text
    Start,
    /// Trim trailing whitespace of the whole text
    End,
    /// Trim every line and drop trailing blank lines
    Lines,
    /// Collapse every whitespace run into one space
    Collapse,
}

/// Trims text according to mode.
///
/// # Arguments
///
/// * `input`: Text to trim
/// * `mode`: Trimming strategy
///
/// # Returns
///
/// Trimmed copy of input
pub fn trim(input: &str, mode: TrimMode) -> String {
    match mode {
        TrimMode::Both => input.trim().to_string(),
        TrimMode::Start => input.trim_start().to_string(),
        TrimMode::End => input.trim_end().to_string(),
        TrimMode::Lines => {
            let lines: Vec<&str> = input.lines().map(str::trim).collect();
            let end = lines
                .iter()
                .rposition(|line| !line.is_empty())
                .map_or(0, |last| last + 1);
            lines[..end].join("\n")
        }
        TrimMode::Collapse => input.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whole_text_modes() {
        // Arrange
        let input = "  \n padded text \t\n";

        // Act & Assert
        assert_eq!(trim(input, TrimMode::Both), "padded text");
        assert_eq!(trim(input, TrimMode::Start), "padded text \t\n");
        assert_eq!(trim(input, TrimMode::End), "  \n padded text");
    }

    #[test]
    fn test_trim_lines() {
        // Arrange
        let input = "  first  \n\tsecond\n\n   \n";

        // Act
        let trimmed = trim(input, TrimMode::Lines);

        // Assert
        assert_eq!(trimmed, "first\nsecond");
    }

    #[test]
    fn test_trim_lines_keeps_interior_blank_lines() {
        // Arrange
        let input = "a \n   \n b";

        // Act
        let trimmed = trim(input, TrimMode::Lines);

        // Assert
        assert_eq!(trimmed, "a\n\nb");
    }

    #[test]
    fn test_trim_collapse() {
        // Arrange
        let input = "  many   spaces\n\tand\ttabs  ";

        // Act
        let trimmed = trim(input, TrimMode::Collapse);

        // Assert
        assert_eq!(trimmed, "many spaces and tabs");
    }

    #[test]
    fn test_trim_blank_input() {
        for mode in TrimMode::value_variants() {
            assert_eq!(trim(" \n\t ", *mode), "", "Mode {:?} should empty blanks", mode);
        }
    }

    #[test]
    fn test_default_mode_is_both() {
        assert_eq!(TrimMode::default(), TrimMode::Both);
    }
}

//! End-to-end tests for the Toolshed binary.

mod common;

use anyhow::Result;
use std::fs;

/// Tests markdown conversion from stdin to stdout.
#[test]
fn test_markdown_stdin_to_stdout_e2e() -> Result<()> {
    // Act
    let output = common::run_toolshed(&["markdown"], b"**bold** and *italic*")?;

    // Assert
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "<p><strong>bold</strong> and <em>italic</em></p>\n"
    );
    Ok(())
}

/// Tests Windows line endings split paragraphs like Unix ones.
#[test]
fn test_markdown_crlf_input_e2e() -> Result<()> {
    // Act
    let output = common::run_toolshed(&["markdown"], b"# Title\r\n\r\nbody\r\n\r\n---\r\n")?;

    // Assert
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "<h1>Title</h1><p>body</p><hr />\n"
    );
    Ok(())
}

/// Tests preview page generation into an output directory.
#[test]
fn test_markdown_page_e2e() -> Result<()> {
    // Arrange
    let workspace = common::create_workspace()?;
    common::write_file(workspace.path(), "guide.md", "# Guide\n\n---\n\nBody")?;
    let input = workspace.path().join("guide.md");
    let page = workspace.path().join("out/guide.html");

    // Act
    let output = common::run_toolshed(
        &[
            "markdown",
            input.to_str().expect("Temp path should be valid UTF8"),
            "-o",
            page.to_str().expect("Temp path should be valid UTF8"),
            "--page",
        ],
        b"",
    )?;

    // Assert
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let html = fs::read_to_string(&page)?;
    assert!(html.contains("<title>guide - Toolshed</title>"));
    assert!(html.contains("<h1>Guide</h1><hr /><p>Body</p>"), "Got: {}", html);
    assert!(workspace.path().join("out/assets/preview.css").exists());
    Ok(())
}

/// Tests Base64 encoding drops the newline a pipe appends.
#[test]
fn test_base64_encode_e2e() -> Result<()> {
    // Act
    let output = common::run_toolshed(&["base64", "encode"], b"hello\n")?;

    // Assert
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "aGVsbG8=\n");
    Ok(())
}

/// Tests Base64 decoding failure reports context and exits non-zero.
#[test]
fn test_base64_decode_invalid_e2e() -> Result<()> {
    // Act
    let output = common::run_toolshed(&["base64", "decode"], b"%%%")?;

    // Assert
    assert!(!output.status.success(), "Invalid input should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid Base64"), "stderr: {}", stderr);
    Ok(())
}

/// Tests URL encoding and trimming through the binary.
#[test]
fn test_url_and_trim_e2e() -> Result<()> {
    // Act
    let encoded = common::run_toolshed(&["url", "encode"], b"a b/c\n")?;
    let decoded = common::run_toolshed(&["url", "decode"], b"a%20b%2Fc")?;
    let trimmed = common::run_toolshed(&["trim", "--mode", "lines"], b"  x  \n  y\n\n")?;

    // Assert
    assert_eq!(String::from_utf8(encoded.stdout)?, "a%20b%2Fc\n");
    assert_eq!(String::from_utf8(decoded.stdout)?, "a b/c\n");
    assert_eq!(String::from_utf8(trimmed.stdout)?, "x\ny\n");
    Ok(())
}

/// Tests validation rejects a missing input file.
#[test]
fn test_missing_input_e2e() -> Result<()> {
    // Act
    let output = common::run_toolshed(&["markdown", "/nonexistent/input.md"], b"")?;

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"), "stderr: {}", stderr);
    assert!(stderr.contains("Input path does not exist"), "stderr: {}", stderr);
    Ok(())
}

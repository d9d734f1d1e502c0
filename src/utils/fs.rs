// File system utilities

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Decode raw bytes as text, replacing invalid UTF-8 sequences
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("Input is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Read a text file, tolerating invalid UTF-8
pub async fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(decode_lossy(bytes))
}

/// Read all of standard input, tolerating invalid UTF-8
pub async fn read_stdin() -> Result<String> {
    debug!("Reading standard input");

    let mut bytes = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut bytes)
        .await
        .context("Failed to read standard input")?;
    Ok(decode_lossy(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_text_file_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Line one\n\tLine two\n").unwrap();

        let text = read_text_file(file.path()).await.unwrap();
        assert_eq!(text, "Line one\n\tLine two\n");
    }

    #[tokio::test]
    async fn test_read_text_file_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ok \xff end").unwrap();

        let text = read_text_file(file.path()).await.unwrap();
        assert_eq!(text, "ok \u{FFFD} end");
    }

    #[tokio::test]
    async fn test_read_text_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_file(dir.path().join("missing.txt")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Where the text for a one-shot translation comes from.
#[derive(Debug, Clone, Copy)]
pub enum InputSource<'a> {
    /// Given directly on the command line.
    Inline(&'a str),
    File(&'a str),
    Stdin,
}

impl<'a> InputSource<'a> {
    /// Inline text wins over a file; stdin is the fallback.
    pub fn pick(text: Option<&'a str>, file: Option<&'a str>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }
}

pub struct InputReader;

impl InputReader {
    pub fn read(source: InputSource<'_>) -> Result<String> {
        match source {
            InputSource::Inline(text) => {
                check_size(text.len(), "input")?;
                Ok(text.to_string())
            }
            InputSource::File(path) => Self::read_file(path),
            InputSource::Stdin => Self::read_stdin(),
        }
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        check_size(metadata.len() as usize, "file")?;

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            check_size(buffer.len(), "input")?;
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn check_size(size: usize, what: &str) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        bail!(
            "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
             Consider splitting the {what} into smaller parts.",
            size as f64 / 1024.0 / 1024.0
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_pick_prefers_inline_text() {
        assert!(matches!(
            InputSource::pick(Some("hi"), Some("file.txt")),
            InputSource::Inline("hi")
        ));
        assert!(matches!(
            InputSource::pick(None, Some("file.txt")),
            InputSource::File("file.txt")
        ));
        assert!(matches!(InputSource::pick(None, None), InputSource::Stdin));
    }

    #[test]
    fn test_read_inline() {
        let content = InputReader::read(InputSource::Inline("  Hello  ")).unwrap();
        assert_eq!(content, "  Hello  ");
    }

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello, World!").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let content = InputReader::read(InputSource::File(path)).unwrap();
        assert_eq!(content.trim(), "Hello, World!");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(InputSource::File("/nonexistent/path/to/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "नमस्ते दुनिया\n你好";
        write!(temp_file, "{content}").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let result = InputReader::read(InputSource::File(path)).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_file.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE + 1)).unwrap();

        let result = InputReader::read(InputSource::File(file_path.to_str().unwrap()));
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_file_at_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("max_file.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE)).unwrap();

        let result = InputReader::read(InputSource::File(file_path.to_str().unwrap()));
        assert_eq!(result.unwrap().len(), MAX_INPUT_SIZE);
    }
}

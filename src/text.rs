//! Text resources printed by the demos.
//!
//! A [`TextBlob`] is loaded once at startup and never mutated afterwards; clones
//! share the same buffer so every worker thread can hold its own handle.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::config::{TextSourceConfig, TextsConfig};
use crate::error::{DemoError, Result};

/// An immutable, labelled piece of text.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBlob {
    label: Arc<str>,
    title: Arc<str>,
    content: Arc<str>,
}

impl TextBlob {
    /// Wraps already-loaded content. The title defaults to the label.
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        let label: String = label.into();
        Self {
            title: Arc::from(label.as_str()),
            label: Arc::from(label),
            content: Arc::from(content.into()),
        }
    }

    /// Replaces the banner title printed before this text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Arc::from(title.into());
        self
    }

    /// Reads the resource at `path` line by line.
    ///
    /// Every line is terminated with `\n` in the result, including the last one
    /// when the file does not end with a newline. `\r\n` endings become `\n`.
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::ResourceLoad`] when the file cannot be opened or read.
    pub fn load(label: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let label = label.into();
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DemoError::resource_load(path.display().to_string(), e))?;

        let mut reader = BufReader::new(file);
        let mut content = String::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| DemoError::resource_load(path.display().to_string(), e))?;
            if read == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
            }
            content.push_str(&String::from_utf8_lossy(&line));
            content.push('\n');
        }

        log::info!(
            "Loaded text '{}' from {} ({} chars)",
            label,
            path.display(),
            content.chars().count()
        );
        Ok(Self::new(label, content))
    }

    /// Loads the resource described by a config entry, banner included.
    pub fn from_source(source: &TextSourceConfig) -> Result<Self> {
        Ok(Self::load(source.label.clone(), &source.path)?.with_title(source.title.clone()))
    }

    /// Short label used in logs.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The banner line exactly as printed before the text.
    pub fn banner(&self) -> String {
        format!("{}\n", self.title)
    }

    /// The text itself.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of characters (not bytes) in the text.
    pub fn len_chars(&self) -> usize {
        self.content.chars().count()
    }
}

impl fmt::Debug for TextBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBlob")
            .field("label", &self.label)
            .field("chars", &self.len_chars())
            .finish()
    }
}

/// The two texts every demo prints.
#[derive(Debug, Clone)]
pub struct TextPair {
    /// Printed by the first worker.
    pub first: TextBlob,
    /// Printed by the second worker.
    pub second: TextBlob,
}

impl TextPair {
    /// Pairs two already-loaded texts.
    pub fn new(first: TextBlob, second: TextBlob) -> Self {
        Self { first, second }
    }

    /// Loads both configured resources. Either failure is returned as is.
    pub fn load(config: &TextsConfig) -> Result<Self> {
        Ok(Self {
            first: TextBlob::from_source(&config.first)?,
            second: TextBlob::from_source(&config.second)?,
        })
    }

    /// Combined character count of both texts.
    pub fn total_chars(&self) -> usize {
        self.first.len_chars() + self.second.len_chars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_terminates_every_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poem.txt");
        fs::write(&path, "first line\nsecond line\n").unwrap();

        let blob = TextBlob::load("poem", &path).unwrap();
        assert_eq!(blob.content(), "first line\nsecond line\n");
        assert_eq!(blob.label(), "poem");
    }

    #[test]
    fn load_appends_missing_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.txt");
        fs::write(&path, "no newline at end").unwrap();

        let blob = TextBlob::load("short", &path).unwrap();
        assert_eq!(blob.content(), "no newline at end\n");
    }

    #[test]
    fn load_normalises_crlf_and_keeps_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        fs::write(&path, "a\r\n\r\nb").unwrap();

        let blob = TextBlob::load("crlf", &path).unwrap();
        assert_eq!(blob.content(), "a\n\nb\n");
    }

    #[test]
    fn load_replaces_invalid_utf8_instead_of_failing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\r\nna\xefve").unwrap();

        let blob = TextBlob::load("latin1", &path).unwrap();
        assert_eq!(blob.content(), "caf\u{FFFD}\nna\u{FFFD}ve\n");
        assert_eq!(blob.len_chars(), 11);
    }

    #[test]
    fn load_empty_file_gives_empty_blob() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let blob = TextBlob::load("empty", &path).unwrap();
        assert_eq!(blob.content(), "");
    }

    #[test]
    fn load_missing_file_is_resource_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = TextBlob::load("nope", &path).unwrap_err();
        assert_matches!(err, DemoError::ResourceLoad { ref name, .. } if name.ends_with("nope.txt"));
    }

    #[test]
    fn pair_load_fails_on_second_resource() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("one.txt");
        fs::write(&first, "one").unwrap();

        let config = TextsConfig {
            first: TextSourceConfig::new("one", first.to_string_lossy(), "One:"),
            second: TextSourceConfig::new("two", dir.path().join("two.txt").to_string_lossy(), "Two:"),
        };
        assert!(TextPair::load(&config).unwrap_err().is_resource_load());
    }

    #[test]
    fn pair_counts_characters_not_bytes() {
        let pair = TextPair::new(TextBlob::new("a", "héllo"), TextBlob::new("b", "wörld\n"));
        assert_eq!(pair.total_chars(), 11);
        assert_eq!(pair.first.banner(), "a\n");
    }
}

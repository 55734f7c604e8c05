//! Input loading.
//!
//! Produces the text blob a parser works on. Input is always read in full.

use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use tracing::{debug, warn};

use dbox_core::{Error, Result};

/// Where input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read a file
    File(PathBuf),
    /// Raw text supplied directly
    Text(String),
    /// Read standard input
    Stdin,
}

impl InputSource {
    /// Pick a source from an optional path and optional raw text.
    ///
    /// Raw text wins when both are given. A path of `-` means stdin.
    pub fn from_parts(path: Option<&Path>, text: Option<String>) -> Result<Self> {
        match (path, text) {
            (_, Some(text)) => Ok(InputSource::Text(text)),
            (Some(path), None) if path == Path::new("-") => Ok(InputSource::Stdin),
            (Some(path), None) => Ok(InputSource::File(path.to_path_buf())),
            (None, None) => Err(Error::MissingInput),
        }
    }
}

/// Reads and decodes input text.
#[derive(Debug, Clone, Copy)]
pub struct Loader {
    encoding: &'static Encoding,
}

impl Loader {
    /// Create a UTF-8 loader.
    pub fn new() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Create a loader for an encoding label such as `latin1` or `utf-16le`.
    pub fn for_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;
        Ok(Self { encoding })
    }

    /// Name of the configured encoding.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Load text from a source.
    pub fn load(&self, source: &InputSource) -> Result<String> {
        match source {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => {
                let bytes = std::fs::read(path)?;
                debug!(path = %path.display(), bytes = bytes.len(), "read input file");
                Ok(self.decode(&bytes))
            }
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin().lock().read_to_end(&mut bytes)?;
                debug!(bytes = bytes.len(), "read standard input");
                Ok(self.decode(&bytes))
            }
        }
    }

    /// Decode bytes, honouring a byte order mark.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, used, had_errors) = self.encoding.decode(bytes);
        if used != self.encoding {
            debug!(encoding = used.name(), "byte order mark overrides encoding");
        }
        if had_errors {
            warn!(
                encoding = used.name(),
                "input contains malformed sequences; replaced with U+FFFD"
            );
        }
        text.into_owned()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

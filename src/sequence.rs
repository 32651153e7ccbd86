//! Code-point sequences: the input type every engine operates on.
//!
//! A position in any result always means an index into the code points of
//! the decoded text, never a byte offset. Decoding from raw bytes is the
//! only fallible boundary; `&str` input is already valid UTF-8 and converts
//! infallibly.

use crate::error::{Error, Result};

/// An immutable, 0-indexed sequence of Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    codes: Vec<u32>,
}

impl Sequence {
    /// Decode raw bytes as UTF-8 into a sequence of code points.
    ///
    /// Fails with [`Error::Decode`] when the bytes are not valid UTF-8.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(Error::from)?;
        Ok(Self::from(text))
    }

    /// Number of code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true when the sequence holds no code points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The underlying code points.
    #[inline]
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self {
            codes: text.chars().map(|c| c as u32).collect(),
        }
    }
}

impl From<&String> for Sequence {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}

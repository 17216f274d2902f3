//! Delimiter pair used to find balanced regions without parsing

use serde::{Deserialize, Serialize};

/// Opening and closing delimiters of a block body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    /// Opening delimiter (default `{`)
    #[serde(default = "default_open")]
    pub open: char,

    /// Closing delimiter (default `}`)
    #[serde(default = "default_close")]
    pub close: char,
}

impl Delimiters {
    /// Create a delimiter pair
    pub fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Count opening and closing delimiters in `text`
    pub fn counts(&self, text: &str) -> (usize, usize) {
        text.chars().fold((0, 0), |(open, close), c| {
            if c == self.open {
                (open + 1, close)
            } else if c == self.close {
                (open, close + 1)
            } else {
                (open, close)
            }
        })
    }

    /// Whether `text` holds as many opening as closing delimiters
    pub fn is_balanced(&self, text: &str) -> bool {
        let (open, close) = self.counts(text);
        open == close
    }

    /// Validate the pair
    pub fn validate(&self) -> Result<(), String> {
        if self.open == self.close {
            return Err(format!(
                "open and close delimiters must differ (both '{}')",
                self.open
            ));
        }
        Ok(())
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(default_open(), default_close())
    }
}

fn default_open() -> char {
    '{'
}

fn default_close() -> char {
    '}'
}

//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::scanner::{find_open, is_ident_char, line_of, matching_close};
use crate::types::{DocumentExtraction, ExtractionMode};
use regex::Regex;
use regroup_domain::Block;
use tracing::{debug, warn};

/// The Extractor lifts units out of raw text
///
/// Stateless: every method is a pure function of its input text, so running
/// it twice on the same text yields the same blocks.
#[derive(Debug, Clone)]
pub struct BlockExtractor {
    config: ExtractorConfig,
}

impl BlockExtractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// Create an Extractor with default Kotlin markers
    pub fn default_config() -> Self {
        Self {
            config: ExtractorConfig::default(),
        }
    }

    /// Get the extractor configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Lazily iterate the units of `text` in flat mode
    ///
    /// The iterator stops after yielding its first error.
    pub fn blocks<'a>(&'a self, text: &'a str) -> Blocks<'a> {
        Blocks::new(&self.config, text, 0, text.len(), None)
    }

    /// Extract every unit of `text` in flat mode
    pub fn extract_flat(&self, text: &str) -> Result<Vec<Block>, ExtractorError> {
        self.blocks(text).collect()
    }

    /// Extract the units nested in the grouping called `grouping`
    pub fn extract_grouping(&self, text: &str, grouping: &str) -> Result<Vec<Block>, ExtractorError> {
        let (start, end) = self.locate_grouping(text, grouping)?;
        Blocks::new(&self.config, text, start, end, Some(grouping)).collect()
    }

    /// Extract a whole document in the given mode
    ///
    /// Any unbalanced construct aborts the document: no block from it is
    /// returned. Groupings the document does not declare are reported in
    /// [`DocumentExtraction::missing_groupings`] and do not abort it.
    pub fn extract(&self, text: &str, mode: &ExtractionMode) -> Result<DocumentExtraction, ExtractorError> {
        let mut extraction = DocumentExtraction::default();

        match mode {
            ExtractionMode::Flat => {
                extraction.blocks = self.extract_flat(text)?;
            }
            ExtractionMode::Grouped(groupings) => {
                for grouping in groupings {
                    match self.extract_grouping(text, grouping) {
                        Ok(blocks) => {
                            debug!("Grouping {}: {} unit(s)", grouping, blocks.len());
                            extraction.blocks.extend(blocks);
                        }
                        Err(ExtractorError::GroupingNotFound(name)) => {
                            warn!("Grouping {} not found", name);
                            extraction.missing_groupings.push(name);
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        Ok(extraction)
    }

    /// Byte span `(start, end)` of a grouping's body, delimiters included
    fn locate_grouping(&self, text: &str, grouping: &str) -> Result<(usize, usize), ExtractorError> {
        let pattern = self.grouping_pattern(grouping)?;
        let header = pattern
            .find(text)
            .ok_or_else(|| ExtractorError::GroupingNotFound(grouping.to_string()))?;

        let unbalanced = || ExtractorError::Unbalanced {
            construct: grouping.to_string(),
            line: line_of(text, header.start()),
        };

        let open = find_open(text, header.end(), text.len(), self.config.delimiters)
            .ok_or_else(unbalanced)?;
        let close = matching_close(text, open, self.config.delimiters).ok_or_else(unbalanced)?;
        Ok((open, close))
    }

    /// Regex matching `<grouping keyword> <name>` on word boundaries
    fn grouping_pattern(&self, grouping: &str) -> Result<Regex, ExtractorError> {
        let keyword = self
            .config
            .grouping_keyword
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s+");
        let pattern = format!(r"\b{}\s+{}\b", keyword, regex::escape(grouping));
        Regex::new(&pattern).map_err(|e| ExtractorError::Config(e.to_string()))
    }
}

/// Lazy iterator over the units of a text span
///
/// Finite and restartable: create a new one from the same text to scan again.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    config: &'a ExtractorConfig,
    text: &'a str,
    cursor: usize,
    end: usize,
    grouping: Option<&'a str>,
    done: bool,
}

/// Name and position of a unit declaration following a marker
struct UnitHeader {
    name: String,
    name_end: usize,
}

impl<'a> Blocks<'a> {
    fn new(
        config: &'a ExtractorConfig,
        text: &'a str,
        start: usize,
        end: usize,
        grouping: Option<&'a str>,
    ) -> Self {
        Self {
            config,
            text,
            cursor: start,
            end,
            grouping,
            done: false,
        }
    }

    /// Whether the marker at `at` stands alone (`@Test`, not `@TestFactory`)
    fn is_marker_boundary(&self, at: usize) -> bool {
        let marker = &self.config.unit_marker;
        let after = at + marker.len();
        let before_ok = !marker.starts_with(is_ident_char)
            || self.text[..at].chars().next_back().map_or(true, |c| !is_ident_char(c));
        let after_ok = self.text[after..]
            .chars()
            .next()
            .map_or(true, |c| !is_ident_char(c));
        before_ok && after_ok
    }

    /// Parse `<keyword> <name>` starting at `from`
    fn parse_header(&self, from: usize) -> Option<UnitHeader> {
        let keyword = self.config.unit_keyword.as_str();
        let rest = &self.text[from..self.end];
        let trimmed = rest.trim_start();
        let keyword_at = from + (rest.len() - trimmed.len());

        let after_keyword = trimmed.strip_prefix(keyword)?;
        if !after_keyword.starts_with(char::is_whitespace) {
            return None;
        }
        let name_part = after_keyword.trim_start();
        let name_at = keyword_at + keyword.len() + (after_keyword.len() - name_part.len());

        let quote = self.config.name_quote;
        if let Some(quoted) = name_part.strip_prefix(quote) {
            let close = quoted.find(|c: char| c == quote || c == '\n')?;
            if !quoted[close..].starts_with(quote) {
                return None;
            }
            let name = &quoted[..close];
            if name.trim().is_empty() {
                return None;
            }
            Some(UnitHeader {
                name: name.to_string(),
                name_end: name_at + quote.len_utf8() + close + quote.len_utf8(),
            })
        } else {
            let len = name_part
                .find(|c: char| !is_ident_char(c))
                .unwrap_or(name_part.len());
            if len == 0 {
                return None;
            }
            Some(UnitHeader {
                name: name_part[..len].to_string(),
                name_end: name_at + len,
            })
        }
    }

    fn unbalanced(&self, name: &str, at: usize) -> ExtractorError {
        ExtractorError::Unbalanced {
            construct: format!("unit '{}'", name),
            line: line_of(self.text, at),
        }
    }

    fn next_block(&mut self) -> Option<Result<Block, ExtractorError>> {
        let marker = self.config.unit_marker.as_str();
        let delimiters = self.config.delimiters;

        loop {
            let found = self.text.get(self.cursor..self.end)?.find(marker)?;
            let marker_at = self.cursor + found;
            let after_marker = marker_at + marker.len();

            if !self.is_marker_boundary(marker_at) {
                self.cursor = after_marker;
                continue;
            }

            let Some(header) = self.parse_header(after_marker) else {
                debug!(
                    "Marker at line {} is not followed by a unit declaration",
                    line_of(self.text, marker_at)
                );
                self.cursor = after_marker;
                continue;
            };

            let Some(open) = find_open(self.text, header.name_end, self.end, delimiters) else {
                return Some(Err(self.unbalanced(&header.name, marker_at)));
            };
            let close = match matching_close(&self.text[..self.end], open, delimiters) {
                Some(close) => close,
                None => return Some(Err(self.unbalanced(&header.name, marker_at))),
            };

            let full_text = &self.text[marker_at..close];
            if !delimiters.is_balanced(full_text) {
                return Some(Err(ExtractorError::UnbalancedName {
                    name: header.name,
                    line: line_of(self.text, marker_at),
                }));
            }

            self.cursor = close;
            return Some(Ok(Block {
                name: header.name,
                signature: self.text[header.name_end..open].trim().to_string(),
                body: self.text[open..close].to_string(),
                full_text: full_text.to_string(),
                grouping: self.grouping.map(str::to_string),
            }));
        }
    }
}

impl Iterator for Blocks<'_> {
    type Item = Result<Block, ExtractorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_block();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

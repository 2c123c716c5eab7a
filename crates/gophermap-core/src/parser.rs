//! Lenient gophermap line parser.
//!
//! A gophermap is a sequence of CRLF-terminated lines. Each line starts with
//! a single type character followed by tab-separated fields:
//!
//! ```text
//! 1Phlog<TAB>/phlog<TAB>octotherp.org<TAB>70<CR><LF>
//! ```
//!
//! Listings found in the wild are frequently hand-edited and partially
//! broken, so the parser never fails: any line that does not fit the grammar
//! is skipped and reported at `trace` level on the
//! [`PARSER`](crate::logging::targets::PARSER) target.
//!
//! # Example
//!
//! ```
//! use gophermap_core::{ItemType, MenuParser};
//!
//! let items = MenuParser::new().parse(b"iWelcome\t\r\n1Phlog\t/phlog\r\nbroken line\n");
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].item_type(), ItemType::Informational);
//! assert_eq!(items[1].selector(), "/phlog");
//! ```

use std::fmt;

use crate::item_type::ItemType;
use crate::logging::{span_names, targets, PerfSpan};
use crate::menu::MenuItem;

/// Why a line was not turned into a [`MenuItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than two bytes: no room for a type character and a terminator.
    TooShort,
    /// The line does not end in a carriage return.
    MissingCarriageReturn,
    /// The line has a title but no selector.
    TooFewFields,
    /// The type character is not a known item type.
    UnknownType(u8),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "line too short"),
            Self::MissingCarriageReturn => write!(f, "line not terminated by CR"),
            Self::TooFewFields => write!(f, "line has no selector field"),
            Self::UnknownType(b) if b.is_ascii_graphic() => {
                write!(f, "unknown item type '{}'", *b as char)
            }
            Self::UnknownType(b) => write!(f, "unknown item type byte 0x{b:02X}"),
        }
    }
}

/// Counts from a single parse, logged at `debug` level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Number of candidate lines (pieces between `\n` separators).
    pub lines: usize,
    /// Lines that produced an item.
    pub accepted: usize,
    /// Lines that were dropped.
    pub skipped: usize,
}

/// Turns raw gophermap bytes into menu items.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuParser;

impl MenuParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole gophermap.
    ///
    /// Items come back in input order. Malformed lines are dropped; this
    /// never fails.
    pub fn parse(&self, raw: &[u8]) -> Vec<MenuItem> {
        self.parse_with_summary(raw).0
    }

    /// Parse a whole gophermap and report how many lines were kept.
    pub fn parse_with_summary(&self, raw: &[u8]) -> (Vec<MenuItem>, ParseSummary) {
        let _perf = PerfSpan::new(span_names::PARSE);

        let mut summary = ParseSummary::default();
        let mut items = Vec::new();

        for (index, line) in raw.split(|&b| b == b'\n').enumerate() {
            summary.lines += 1;
            match Self::parse_line(line) {
                Ok(item) => {
                    summary.accepted += 1;
                    items.push(item);
                }
                Err(reason) => {
                    summary.skipped += 1;
                    tracing::trace!(
                        target: targets::PARSER,
                        line = index + 1,
                        %reason,
                        "skipping gophermap line"
                    );
                }
            }
        }

        tracing::debug!(
            target: targets::PARSER,
            lines = summary.lines,
            accepted = summary.accepted,
            skipped = summary.skipped,
            "parsed gophermap"
        );

        (items, summary)
    }

    /// Lazily parse a gophermap, yielding valid items only.
    pub fn items<'a>(&self, raw: &'a [u8]) -> impl Iterator<Item = MenuItem> + 'a {
        raw.split(|&b| b == b'\n')
            .filter_map(|line| Self::parse_line(line).ok())
    }

    /// Parse a single line, without its trailing `\n`.
    ///
    /// The checks run in a fixed order: length, CR terminator, field count,
    /// then the type character. The first failing check is reported.
    pub fn parse_line(line: &[u8]) -> Result<MenuItem, SkipReason> {
        let [type_byte, body @ .., last] = line else {
            return Err(SkipReason::TooShort);
        };

        if *last != b'\r' {
            return Err(SkipReason::MissingCarriageReturn);
        }

        let fields: Vec<_> = body
            .split(|&b| b == b'\t')
            .map(String::from_utf8_lossy)
            .collect();
        if fields.len() < 2 {
            return Err(SkipReason::TooFewFields);
        }

        let item_type = ItemType::from_byte(*type_byte).ok_or(SkipReason::UnknownType(*type_byte))?;

        MenuItem::from_fields(item_type, &fields).ok_or(SkipReason::TooFewFields)
    }
}

/// Parse a gophermap with the default parser.
pub fn parse(raw: &[u8]) -> Vec<MenuItem> {
    MenuParser::new().parse(raw)
}

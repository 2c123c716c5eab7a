//! Core gophermap grammar.
//!
//! This crate turns the bytes of a Gopher directory listing into typed menu
//! entries:
//!
//! - **Item types**: the closed set of canonical and non-canonical gopher
//!   types, with their type characters and icons
//! - **Menu items**: one valid listing entry, with the destination shape
//!   derived from how many fields the server sent
//! - **Parser**: a lenient line parser that drops malformed lines instead of
//!   failing
//! - **Logging**: `tracing` targets and span names shared by the gophermap
//!   crates
//!
//! # Example
//!
//! ```
//! use gophermap_core::{Destination, GopherIcon, ItemType, MenuParser};
//!
//! let raw = b"1Phlog\t/phlog\toctotherp.org\t70\r\n";
//! let items = MenuParser::new().parse(raw);
//!
//! let item = &items[0];
//! assert_eq!(item.item_type(), ItemType::Directory);
//! assert_eq!(item.item_type().icon(), Some(GopherIcon::Directory));
//! assert!(matches!(
//!     item.destination(),
//!     Destination::RemoteWithPort { host: "octotherp.org", port: "70", .. }
//! ));
//! ```

#![warn(missing_docs)]

mod error;
mod icon;
mod item_type;
pub mod logging;
mod menu;
pub mod parser;

pub use error::{GopherError, Result};
pub use icon::GopherIcon;
pub use item_type::ItemType;
pub use logging::PerfSpan;
pub use menu::{Destination, MenuItem};
pub use parser::{parse, MenuParser, ParseSummary, SkipReason};

//! Error types for the gophermap core.
//!
//! Parsing a gophermap never fails; these errors only surface from the
//! strict conversion APIs on [`ItemType`](crate::ItemType).

use thiserror::Error;

/// Errors produced by strict item type conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GopherError {
    /// The character is not a recognized item type.
    #[error("unrecognized gopher item type '{0}'")]
    InvalidItemType(char),

    /// The byte is not a recognized item type.
    #[error("unrecognized gopher item type byte 0x{0:02X}")]
    InvalidTypeByte(u8),
}

/// Result type for gophermap core operations.
pub type Result<T> = std::result::Result<T, GopherError>;

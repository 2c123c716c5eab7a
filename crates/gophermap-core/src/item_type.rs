//! Gopher item types and the type-to-icon table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GopherError;
use crate::icon::GopherIcon;

/// The type of a gophermap entry, selected by the first character of a line.
///
/// Unrecognized type characters have no variant: [`ItemType::from_char`]
/// returns `None` for them and the parser drops the line.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    // Canonical types
    /// `0` text file.
    Text,
    /// `1` submenu or link to another gopher server.
    Directory,
    /// `2` CCSO nameserver.
    CCSONameserver,
    /// `3` error returned by a server.
    Error,
    /// `4` BinHex-encoded file.
    BinHex,
    /// `5` DOS file.
    DOSFile,
    /// `6` uuencoded file.
    UUEncoded,
    /// `7` full-text search.
    Search,
    /// `8` telnet session.
    Telnet,
    /// `9` binary file.
    Binary,
    /// `+` mirror or alternate server.
    Mirror,
    /// `g` GIF file.
    GIF,
    /// `I` image file.
    Image,
    /// `T` telnet 3270 session.
    Telnet3270,

    // Non-canonical types
    /// `h` HTML file.
    HTML,
    /// `i` informational message.
    Informational,
    /// `s` sound file.
    Sound,
}

impl ItemType {
    /// Every item type, canonical types first.
    pub const ALL: [ItemType; 17] = [
        ItemType::Text,
        ItemType::Directory,
        ItemType::CCSONameserver,
        ItemType::Error,
        ItemType::BinHex,
        ItemType::DOSFile,
        ItemType::UUEncoded,
        ItemType::Search,
        ItemType::Telnet,
        ItemType::Binary,
        ItemType::Mirror,
        ItemType::GIF,
        ItemType::Image,
        ItemType::Telnet3270,
        ItemType::HTML,
        ItemType::Informational,
        ItemType::Sound,
    ];

    /// Map a type character to its item type.
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '0' => ItemType::Text,
            '1' => ItemType::Directory,
            '2' => ItemType::CCSONameserver,
            '3' => ItemType::Error,
            '4' => ItemType::BinHex,
            '5' => ItemType::DOSFile,
            '6' => ItemType::UUEncoded,
            '7' => ItemType::Search,
            '8' => ItemType::Telnet,
            '9' => ItemType::Binary,
            '+' => ItemType::Mirror,
            'g' => ItemType::GIF,
            'I' => ItemType::Image,
            'T' => ItemType::Telnet3270,
            'h' => ItemType::HTML,
            'i' => ItemType::Informational,
            's' => ItemType::Sound,
            _ => return None,
        })
    }

    /// Map the first byte of a gophermap line to its item type.
    ///
    /// Every type character is ASCII, so non-ASCII bytes never match.
    pub const fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii() {
            Self::from_char(b as char)
        } else {
            None
        }
    }

    /// The type character that selects this item type.
    ///
    /// This is re-embedded in the path of remote gopher URLs.
    pub const fn to_char(self) -> char {
        match self {
            ItemType::Text => '0',
            ItemType::Directory => '1',
            ItemType::CCSONameserver => '2',
            ItemType::Error => '3',
            ItemType::BinHex => '4',
            ItemType::DOSFile => '5',
            ItemType::UUEncoded => '6',
            ItemType::Search => '7',
            ItemType::Telnet => '8',
            ItemType::Binary => '9',
            ItemType::Mirror => '+',
            ItemType::GIF => 'g',
            ItemType::Image => 'I',
            ItemType::Telnet3270 => 'T',
            ItemType::HTML => 'h',
            ItemType::Informational => 'i',
            ItemType::Sound => 's',
        }
    }

    /// The icon shown next to entries of this type.
    ///
    /// Informational lines are not links and carry no icon.
    pub const fn icon(self) -> Option<GopherIcon> {
        Some(match self {
            ItemType::Text => GopherIcon::Text,
            ItemType::Directory => GopherIcon::Directory,
            ItemType::CCSONameserver => GopherIcon::Dns,
            ItemType::Error => GopherIcon::Error,
            ItemType::BinHex | ItemType::DOSFile | ItemType::UUEncoded | ItemType::Binary => {
                GopherIcon::Binary
            }
            ItemType::Search => GopherIcon::Search,
            ItemType::Telnet | ItemType::Telnet3270 => GopherIcon::Telnet,
            ItemType::Mirror => GopherIcon::Mirror,
            ItemType::GIF => GopherIcon::Gif,
            ItemType::Image => GopherIcon::Image,
            ItemType::HTML => GopherIcon::Html,
            ItemType::Sound => GopherIcon::Sound,
            ItemType::Informational => return None,
        })
    }

    /// Whether this type is part of the original gopher protocol.
    pub const fn is_canonical(self) -> bool {
        !matches!(
            self,
            ItemType::HTML | ItemType::Informational | ItemType::Sound
        )
    }

    /// Whether entries of this type are rendered as links.
    pub const fn is_interactive(self) -> bool {
        !matches!(self, ItemType::Informational)
    }

    /// A human-readable description of the type.
    pub const fn description(self) -> &'static str {
        match self {
            ItemType::Text => "Text file",
            ItemType::Directory => "Gopher submenu",
            ItemType::CCSONameserver => "CCSO nameserver",
            ItemType::Error => "Error",
            ItemType::BinHex => "BinHex-encoded file",
            ItemType::DOSFile => "DOS file",
            ItemType::UUEncoded => "uuencoded file",
            ItemType::Search => "Full-text search",
            ItemType::Telnet => "Telnet session",
            ItemType::Binary => "Binary file",
            ItemType::Mirror => "Mirror server",
            ItemType::GIF => "GIF image",
            ItemType::Image => "Image file",
            ItemType::Telnet3270 => "Telnet 3270 session",
            ItemType::HTML => "HTML file",
            ItemType::Informational => "Informational message",
            ItemType::Sound => "Sound file",
        }
    }
}

impl TryFrom<char> for ItemType {
    type Error = GopherError;

    fn try_from(c: char) -> Result<Self, GopherError> {
        Self::from_char(c).ok_or(GopherError::InvalidItemType(c))
    }
}

impl TryFrom<u8> for ItemType {
    type Error = GopherError;

    fn try_from(b: u8) -> Result<Self, GopherError> {
        Self::from_byte(b).ok_or(GopherError::InvalidTypeByte(b))
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

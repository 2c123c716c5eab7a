//! Symbolic icons for gophermap entries.
//!
//! Icons are names only. The GUI layer resolves them to pixels through the
//! resource keys returned by [`GopherIcon::resource_key`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the icons a gophermap entry can be decorated with.
///
/// # Examples
///
/// ```
/// use gophermap_core::GopherIcon;
///
/// assert_eq!(GopherIcon::Directory.name(), "directory");
/// assert_eq!(GopherIcon::Directory.resource_key(), "gopher/directory");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GopherIcon {
    /// Binary, BinHex, DOS and uuencoded files.
    Binary,
    /// Gopher submenus.
    Directory,
    /// CCSO nameservers.
    Dns,
    /// Server error entries.
    Error,
    /// GIF images.
    Gif,
    /// HTML documents.
    Html,
    /// Other images.
    Image,
    /// Mirror servers.
    Mirror,
    /// Full-text search.
    Search,
    /// Sound files.
    Sound,
    /// Telnet and telnet 3270 sessions.
    Telnet,
    /// Text files.
    Text,
}

impl GopherIcon {
    /// Every icon, in resource registration order.
    pub const ALL: [GopherIcon; 12] = [
        GopherIcon::Binary,
        GopherIcon::Directory,
        GopherIcon::Dns,
        GopherIcon::Error,
        GopherIcon::Gif,
        GopherIcon::Html,
        GopherIcon::Image,
        GopherIcon::Mirror,
        GopherIcon::Search,
        GopherIcon::Sound,
        GopherIcon::Telnet,
        GopherIcon::Text,
    ];

    /// Prefix shared by every icon resource key.
    pub const RESOURCE_PREFIX: &'static str = "gopher/";

    /// The symbolic icon name.
    pub const fn name(self) -> &'static str {
        match self {
            GopherIcon::Binary => "binary",
            GopherIcon::Directory => "directory",
            GopherIcon::Dns => "dns",
            GopherIcon::Error => "error",
            GopherIcon::Gif => "gif",
            GopherIcon::Html => "html",
            GopherIcon::Image => "image",
            GopherIcon::Mirror => "mirror",
            GopherIcon::Search => "search",
            GopherIcon::Sound => "sound",
            GopherIcon::Telnet => "telnet",
            GopherIcon::Text => "text",
        }
    }

    /// The key under which the icon image is registered in a resource store.
    pub fn resource_key(self) -> String {
        format!("{}{}", Self::RESOURCE_PREFIX, self.name())
    }

    /// File name of the icon asset inside an icon directory.
    pub fn asset_file(self) -> String {
        format!("{}.svg", self.name())
    }

    /// Look up an icon by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }
}

impl fmt::Display for GopherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

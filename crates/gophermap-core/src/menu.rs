//! Parsed gophermap entries.

use serde::{Deserialize, Serialize};

use crate::item_type::ItemType;

/// One valid entry of a gophermap.
///
/// A menu item always has a title and a selector; host and port are stored
/// only when the line provided them. The number of stored fields decides how
/// the destination of the entry is built, see [`MenuItem::destination`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    item_type: ItemType,
    title: String,
    selector: String,
    host: Option<String>,
    port: Option<String>,
}

/// Where a menu item points, derived from which fields the line carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Only a selector: resolved against the URL of the current menu.
    Local {
        /// The selector to resolve.
        selector: &'a str,
    },
    /// Selector and host, no port.
    RemoteNoPort {
        /// Remote host name.
        host: &'a str,
        /// Selector on the remote host.
        selector: &'a str,
    },
    /// Selector, host and port.
    RemoteWithPort {
        /// Remote host name.
        host: &'a str,
        /// Port, kept exactly as the server wrote it.
        port: &'a str,
        /// Selector on the remote host.
        selector: &'a str,
    },
}

impl MenuItem {
    /// Create an item that only has a title and a selector.
    pub fn new(item_type: ItemType, title: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            item_type,
            title: title.into(),
            selector: selector.into(),
            host: None,
            port: None,
        }
    }

    /// Builder method to set the remote host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Builder method to set the remote port.
    ///
    /// A port is only meaningful together with a host; without one the item
    /// is still resolved locally.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Build an item from the tab-separated fields of a line.
    ///
    /// Returns `None` when fewer than two fields are present. Fields past the
    /// port (such as the Gopher+ marker) are ignored.
    pub fn from_fields<S: AsRef<str>>(item_type: ItemType, fields: &[S]) -> Option<Self> {
        let [title, selector, rest @ ..] = fields else {
            return None;
        };

        let mut item = Self::new(item_type, title.as_ref(), selector.as_ref());
        if let Some(host) = rest.first() {
            item = item.with_host(host.as_ref());
        }
        if let Some(port) = rest.get(1) {
            item = item.with_port(port.as_ref());
        }
        if rest.len() > 2 {
            crate::gophermap_trace!(extra = rest.len() - 2, "ignoring fields past the port");
        }
        Some(item)
    }

    /// The item type.
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The selector on the server. May be empty.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The remote host, if the line named one.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The remote port, if the line named one.
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Number of fields this item was built from (2 to 4).
    pub fn field_count(&self) -> usize {
        match (&self.host, &self.port) {
            (None, _) => 2,
            (Some(_), None) => 3,
            (Some(_), Some(_)) => 4,
        }
    }

    /// Whether this item is rendered as a link.
    pub fn is_interactive(&self) -> bool {
        self.item_type.is_interactive()
    }

    /// Classify where this item points.
    pub fn destination(&self) -> Destination<'_> {
        let selector = self.selector.as_str();
        match (self.host.as_deref(), self.port.as_deref()) {
            (None, _) => Destination::Local { selector },
            (Some(host), None) => Destination::RemoteNoPort { host, selector },
            (Some(host), Some(port)) => Destination::RemoteWithPort {
                host,
                port,
                selector,
            },
        }
    }
}

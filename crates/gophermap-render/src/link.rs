//! Link target construction for menu items.
//!
//! How an entry's URL is built depends on how many fields the server sent:
//!
//! | Fields                         | URL                                     |
//! |--------------------------------|-----------------------------------------|
//! | title, selector                | selector resolved against the menu URL  |
//! | title, selector, host          | `gopher://{host}/{type}{selector}`      |
//! | title, selector, host, port, … | `gopher://{host}:{port}/{type}{selector}` |
//!
//! Host and port are concatenated as given. A malformed result is still
//! returned (flagged as invalid) so the caller can attach it anyway and
//! leave the decision to fail to whoever follows the link.

use gophermap_core::{Destination, MenuItem};
use url::Url;

/// A constructed link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Href {
    url: String,
    valid: bool,
}

impl Href {
    /// The URL string to attach to the anchor.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Whether the URL parsed as a well-formed absolute URL.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Consume into the URL string.
    pub fn into_string(self) -> String {
        self.url
    }
}

/// Build the link target for `item`, resolving local selectors against `base`.
pub fn href_for(item: &MenuItem, base: &Url) -> Href {
    let type_char = item.item_type().to_char();

    match item.destination() {
        Destination::Local { selector } => match base.join(selector) {
            Ok(url) => Href {
                url: url.into(),
                valid: true,
            },
            Err(_) => Href {
                url: selector.to_owned(),
                valid: false,
            },
        },
        Destination::RemoteNoPort { host, selector } => {
            checked(format!("gopher://{host}/{type_char}{selector}"))
        }
        Destination::RemoteWithPort {
            host,
            port,
            selector,
        } => checked(format!("gopher://{host}:{port}/{type_char}{selector}")),
    }
}

fn checked(url: String) -> Href {
    let valid = Url::parse(&url).is_ok();
    Href { url, valid }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gophermap_core::ItemType;

    fn base() -> Url {
        Url::parse("gopher://example.org/").unwrap()
    }

    #[test]
    fn test_local_absolute_selector() {
        let item = MenuItem::new(ItemType::Directory, "Phlog", "/phlog");
        let href = href_for(&item, &base());
        assert_eq!(href.as_str(), "gopher://example.org/phlog");
        assert!(href.is_valid());
    }

    #[test]
    fn test_local_selector_replaces_base_path() {
        let base = Url::parse("gopher://example.org/1/users/alice/").unwrap();

        let absolute = MenuItem::new(ItemType::Text, "Root", "/about.txt");
        assert_eq!(
            href_for(&absolute, &base).as_str(),
            "gopher://example.org/about.txt"
        );

        let relative = MenuItem::new(ItemType::Text, "Notes", "notes.txt");
        assert_eq!(
            href_for(&relative, &base).as_str(),
            "gopher://example.org/1/users/alice/notes.txt"
        );
    }

    #[test]
    fn test_local_full_url_selector() {
        let item = MenuItem::new(ItemType::HTML, "Web", "https://example.com/page");
        assert_eq!(
            href_for(&item, &base()).as_str(),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_local_selector_percent_encoded() {
        let item = MenuItem::new(ItemType::Text, "Spaced", "/my file.txt");
        let href = href_for(&item, &base());
        assert_eq!(href.as_str(), "gopher://example.org/my%20file.txt");
        assert!(href.is_valid());
    }

    #[test]
    fn test_remote_without_port() {
        let item = MenuItem::new(ItemType::Directory, "Phlog", "/phlog").with_host("octotherp.org");
        let href = href_for(&item, &base());
        assert_eq!(href.as_str(), "gopher://octotherp.org/1/phlog");
        assert!(href.is_valid());
    }

    #[test]
    fn test_remote_with_port() {
        let item = MenuItem::new(ItemType::Directory, "Phlog", "/phlog")
            .with_host("octotherp.org")
            .with_port("70");
        assert_eq!(
            href_for(&item, &base()).as_str(),
            "gopher://octotherp.org:70/1/phlog"
        );
    }

    #[test]
    fn test_type_character_embedded() {
        let item = MenuItem::new(ItemType::GIF, "Cat", "/cat.gif").with_host("example.org");
        assert_eq!(href_for(&item, &base()).as_str(), "gopher://example.org/g/cat.gif");
    }

    #[test]
    fn test_invalid_port_kept_but_flagged() {
        let item = MenuItem::new(ItemType::Text, "Broken", "/x")
            .with_host("example.org")
            .with_port("seventy");
        let href = href_for(&item, &base());
        assert_eq!(href.as_str(), "gopher://example.org:seventy/0/x");
        assert!(!href.is_valid());
    }

    #[test]
    fn test_invalid_host_kept_but_flagged() {
        let item = MenuItem::new(ItemType::Text, "Broken", "/x").with_host("bad host");
        let href = href_for(&item, &base());
        assert_eq!(href.into_string(), "gopher://bad host/0/x");
    }
}

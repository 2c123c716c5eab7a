//! Gophermap - Gopher directory listings as styled documents.
//!
//! This is the umbrella crate that re-exports the public APIs of the
//! gophermap crates. The parser and item model live at the crate root, the
//! document model and renderer under [`render`].
//!
//! # Example
//!
//! ```
//! use gophermap::prelude::*;
//!
//! let renderer = GophermapRenderer::new(RenderConfig::new().display_setting("text"));
//! let mut store = ResourceMap::new();
//! let doc = renderer
//!     .render_str(b"0About\tabout.txt\r\n", "gopher://example.org/", &mut store)
//!     .unwrap();
//!
//! assert_eq!(doc.plain_text(), "[text] About\n");
//! ```

pub use gophermap_core::*;

/// Document model, styling and rendering.
pub mod render {
    pub use gophermap_render::*;
}

pub mod prelude;

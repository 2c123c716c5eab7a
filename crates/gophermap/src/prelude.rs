//! Prelude module for gophermap.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use gophermap::prelude::*;
//! ```

// ============================================================================
// Parsing
// ============================================================================

pub use gophermap_core::{parse, Destination, GopherIcon, ItemType, MenuItem, MenuParser};

// ============================================================================
// Document Model
// ============================================================================

pub use gophermap_render::{Document, IconAlignment, IconGlyph, RenderNode, TextRun};

// ============================================================================
// Styling
// ============================================================================

pub use gophermap_render::{Color, DocumentStyle, FontFamily, FontSpec, StyleId, TextFormat};

// ============================================================================
// Rendering
// ============================================================================

pub use gophermap_render::{
    render_gophermap, DisplayMode, DocumentBuilder, GophermapRenderer, RenderConfig,
};

// ============================================================================
// Icon Resources
// ============================================================================

pub use gophermap_render::{
    IconAssets, IconDirectory, ImageFormat, ImageResource, ResourceMap, ResourceStore,
    StaticIcons,
};

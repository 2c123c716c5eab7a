//! Icon resource registration.
//!
//! In graphical mode the icons referenced by a document must be available in
//! the caller's resource store before the text layout engine resolves the
//! document's [`IconGlyph`](crate::IconGlyph)s. The renderer registers every
//! gopher icon once per render under its `gopher/<name>` key. The image bytes
//! come from an [`IconAssets`] source; this crate never decodes them.
//!
//! # Example
//!
//! ```
//! use gophermap_core::GopherIcon;
//! use gophermap_render::{register_gopher_icons, ImageFormat, ResourceMap, StaticIcons};
//!
//! let assets = StaticIcons::new().with_icon(GopherIcon::Text, b"<svg/>".to_vec(), ImageFormat::Svg);
//! let mut store = ResourceMap::new();
//!
//! assert_eq!(register_gopher_icons(&mut store, &assets), 1);
//! assert!(store.contains("gopher/text"));
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use gophermap_core::logging::targets;
use gophermap_core::GopherIcon;

use crate::error::{AssetError, RenderResult};

/// Image format of an icon resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// SVG vector image (the format of the bundled gopher icons)
    Svg,
    /// PNG format
    Png,
    /// GIF format
    Gif,
    /// Unknown format - left to the image decoder to detect
    Unknown,
}

impl ImageFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "svg" => ImageFormat::Svg,
            "png" => ImageFormat::Png,
            "gif" => ImageFormat::Gif,
            _ => ImageFormat::Unknown,
        }
    }

    /// Detect format from file magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Self {
        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return ImageFormat::Png;
        }

        // GIF: GIF87a or GIF89a
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return ImageFormat::Gif;
        }

        let head = &data[..data.len().min(256)];
        let text = String::from_utf8_lossy(head);
        let text = text.trim_start();
        if text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg")) {
            return ImageFormat::Svg;
        }

        ImageFormat::Unknown
    }

    /// Get the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Unknown => "application/octet-stream",
        }
    }
}

/// Encoded image bytes handed to a resource store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResource {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// Format hint for the decoder.
    pub format: ImageFormat,
}

impl ImageResource {
    /// Create a new image resource.
    pub fn new(data: Vec<u8>, format: ImageFormat) -> Self {
        Self { data, format }
    }

    /// Create an image resource, detecting the format from the bytes.
    pub fn with_auto_format(data: Vec<u8>) -> Self {
        let format = ImageFormat::from_magic_bytes(&data);
        Self { data, format }
    }
}

/// A store of named resources a text layout engine can resolve.
pub trait ResourceStore {
    /// Register an image under `key`, replacing any previous image.
    fn add_image_resource(&mut self, key: &str, image: ImageResource);

    /// Whether a resource is registered under `key`.
    fn has_resource(&self, key: &str) -> bool;
}

/// A source of icon image bytes.
pub trait IconAssets {
    /// Load the image for `icon`.
    fn load_icon(&self, icon: GopherIcon) -> Result<ImageResource, AssetError>;
}

/// In-memory resource store.
#[derive(Debug, Clone, Default)]
pub struct ResourceMap {
    images: HashMap<String, ImageResource>,
}

impl ResourceMap {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the image registered under `key`.
    pub fn get(&self, key: &str) -> Option<&ImageResource> {
        self.images.get(key)
    }

    /// Whether an image is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.images.contains_key(key)
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Iterate over the registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }
}

impl ResourceStore for ResourceMap {
    fn add_image_resource(&mut self, key: &str, image: ImageResource) {
        self.images.insert(key.to_owned(), image);
    }

    fn has_resource(&self, key: &str) -> bool {
        self.contains(key)
    }
}

/// Icons loaded from `<name>.svg` files in a directory.
#[derive(Debug, Clone)]
pub struct IconDirectory {
    root: PathBuf,
}

impl IconDirectory {
    /// Use the icons under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory icons are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the asset file for `icon`.
    pub fn icon_path(&self, icon: GopherIcon) -> PathBuf {
        self.root.join(icon.asset_file())
    }
}

impl IconAssets for IconDirectory {
    fn load_icon(&self, icon: GopherIcon) -> Result<ImageResource, AssetError> {
        let path = self.icon_path(icon);
        let data = std::fs::read(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(ImageFormat::from_extension)
            .unwrap_or(ImageFormat::Unknown);
        Ok(ImageResource::new(data, format))
    }
}

/// Icons supplied directly by the caller, such as bytes embedded with
/// `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct StaticIcons {
    icons: HashMap<GopherIcon, ImageResource>,
}

impl StaticIcons {
    /// Create an empty icon set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add the image for an icon.
    pub fn with_icon(mut self, icon: GopherIcon, data: Vec<u8>, format: ImageFormat) -> Self {
        self.icons.insert(icon, ImageResource::new(data, format));
        self
    }

    /// Builder method to add the image for an icon, detecting the format
    /// from the bytes.
    pub fn with_icon_bytes(mut self, icon: GopherIcon, data: Vec<u8>) -> Self {
        self.icons.insert(icon, ImageResource::with_auto_format(data));
        self
    }
}

impl IconAssets for StaticIcons {
    fn load_icon(&self, icon: GopherIcon) -> Result<ImageResource, AssetError> {
        self.icons
            .get(&icon)
            .cloned()
            .ok_or(AssetError::Missing(icon))
    }
}

/// Register every gopher icon from `assets` into `store`.
///
/// Icons that fail to load are logged and skipped; a missing icon never
/// stops a render. Returns the number of icons registered.
pub fn register_gopher_icons<S, A>(store: &mut S, assets: &A) -> usize
where
    S: ResourceStore + ?Sized,
    A: IconAssets + ?Sized,
{
    let mut registered = 0;

    for icon in GopherIcon::ALL {
        match assets.load_icon(icon) {
            Ok(image) => {
                tracing::trace!(
                    target: targets::RESOURCES,
                    %icon,
                    mime = image.format.mime_type(),
                    bytes = image.data.len(),
                    "registering icon"
                );
                store.add_image_resource(&icon.resource_key(), image);
                registered += 1;
            }
            Err(err) => {
                tracing::warn!(target: targets::RESOURCES, %icon, "skipping icon: {}", err);
            }
        }
    }

    tracing::trace!(target: targets::RESOURCES, registered, "registered gopher icons");
    registered
}

/// Register every gopher icon from `assets` into `store`, stopping at the
/// first icon that cannot be loaded.
///
/// Icons registered before the failure stay in `store`.
pub fn try_register_gopher_icons<S, A>(store: &mut S, assets: &A) -> RenderResult<usize>
where
    S: ResourceStore + ?Sized,
    A: IconAssets + ?Sized,
{
    for icon in GopherIcon::ALL {
        let image = assets.load_icon(icon)?;
        store.add_image_resource(&icon.resource_key(), image);
    }
    Ok(GopherIcon::ALL.len())
}

//! Style profiles for rendered gophermaps.
//!
//! The renderer never interprets fonts or colors. A [`DocumentStyle`] is the
//! theme the caller hands in; [`DocumentStyle::profiles`] derives the three
//! text formats that document nodes refer to by [`StyleId`], and the
//! document carries them through to the text layout engine unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Convert to 8-bit RGBA components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// Format as a hex string. The alpha byte is omitted when opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color '{hex}'")))
    }
}

/// A font family, either generic or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

impl FontFamily {
    /// Create a named font family.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

/// A font family and pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// The font family.
    pub family: FontFamily,
    /// Font size in pixels.
    pub size: f32,
}

impl FontSpec {
    /// Create a new font spec.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }

    /// Default monospace font used for menu listings.
    pub fn preformatted() -> Self {
        Self::new(FontFamily::Monospace, 14.0)
    }

    /// Default proportional font.
    pub fn standard() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}

/// Which style profile a text run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleId {
    /// Plain listing text.
    Standard,
    /// Links to gopher resources.
    InternalLink,
    /// Links leaving gopherspace.
    ExternalLink,
}

/// A resolved text format: font plus foreground color.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormat {
    /// Font to draw with.
    pub font: FontSpec,
    /// Foreground color.
    pub color: Color,
}

impl TextFormat {
    /// Create a new text format.
    pub fn new(font: FontSpec, color: Color) -> Self {
        Self { font, color }
    }
}

/// The three text formats a rendered gophermap uses.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfiles {
    /// Format for [`StyleId::Standard`].
    pub standard: TextFormat,
    /// Format for [`StyleId::InternalLink`].
    pub internal_link: TextFormat,
    /// Format for [`StyleId::ExternalLink`].
    pub external_link: TextFormat,
}

impl StyleProfiles {
    /// Look up the format for a style id.
    pub fn get(&self, id: StyleId) -> &TextFormat {
        match id {
            StyleId::Standard => &self.standard,
            StyleId::InternalLink => &self.internal_link,
            StyleId::ExternalLink => &self.external_link,
        }
    }
}

/// Theme values a gophermap is rendered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyle {
    /// Monospace font for listing text and gopher links.
    pub preformatted_font: FontSpec,
    /// Proportional font for external links.
    pub standard_font: FontSpec,
    /// Color of plain listing text.
    pub preformatted_color: Color,
    /// Color of links to gopher resources.
    pub internal_link_color: Color,
    /// Color of links leaving gopherspace.
    pub external_link_color: Color,
    /// Document margin in pixels.
    pub margin: f32,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            preformatted_font: FontSpec::preformatted(),
            standard_font: FontSpec::standard(),
            preformatted_color: Color::BLACK,
            internal_link_color: Color::from_rgb8(0x00, 0x56, 0xB3),
            external_link_color: Color::from_rgb8(0x6F, 0x42, 0xC1),
            margin: 55.0,
        }
    }
}

impl DocumentStyle {
    /// Builder method to set the document margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Builder method to set the internal link color.
    pub fn with_internal_link_color(mut self, color: Color) -> Self {
        self.internal_link_color = color;
        self
    }

    /// Builder method to set the plain text color.
    pub fn with_preformatted_color(mut self, color: Color) -> Self {
        self.preformatted_color = color;
        self
    }

    /// Derive the text formats used by document nodes.
    ///
    /// Plain text and internal links share the preformatted font; external
    /// links use the standard font.
    pub fn profiles(&self) -> StyleProfiles {
        StyleProfiles {
            standard: TextFormat::new(self.preformatted_font.clone(), self.preformatted_color),
            internal_link: TextFormat::new(
                self.preformatted_font.clone(),
                self.internal_link_color,
            ),
            external_link: TextFormat::new(self.standard_font.clone(), self.external_link_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::from_hex("#0056B3").unwrap();
        assert_eq!(color.to_rgba8(), [0x00, 0x56, 0xB3, 0xFF]);
        assert_eq!(color.to_hex(), "#0056B3");

        let translucent = Color::from_hex("11223380").unwrap();
        assert_eq!(translucent.to_hex(), "#11223380");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GGHHII").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn test_profiles_follow_theme() {
        let style = DocumentStyle::default()
            .with_internal_link_color(Color::from_rgb8(255, 0, 0))
            .with_preformatted_color(Color::from_rgb8(10, 10, 10));
        let profiles = style.profiles();

        assert_eq!(profiles.standard.font, style.preformatted_font);
        assert_eq!(profiles.standard.color, style.preformatted_color);
        assert_eq!(profiles.internal_link.font, style.preformatted_font);
        assert_eq!(profiles.internal_link.color, Color::from_rgb8(255, 0, 0));
        assert_eq!(profiles.external_link.font, style.standard_font);
        assert_eq!(
            profiles.get(StyleId::ExternalLink).color,
            style.external_link_color
        );
    }

    #[test]
    fn test_style_json() {
        let style = DocumentStyle::default().with_margin(12.0);
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"#0056B3\""));

        let back: DocumentStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.margin, 12.0);
        assert_eq!(back.internal_link_color.to_hex(), "#0056B3");
    }

    #[test]
    fn test_partial_style_uses_defaults() {
        let style: DocumentStyle = serde_json::from_str(r##"{"margin": 4.0}"##).unwrap();
        assert_eq!(style.margin, 4.0);
        assert_eq!(style.preformatted_font, FontSpec::preformatted());
    }
}

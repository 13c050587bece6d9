//! Classification of the polymorphic `image` field.
//!
//! A record's image is one of: an absolute URL, a self-describing
//! `data:image/...` string, bare base64 (assumed JPEG), or a relative asset
//! path. [`ImageRef::display_src`] turns any of them into something a browser
//! or preview can load.

use std::borrow::Cow;

/// Prefix of the embedded images produced by the admin upload pipeline.
pub const EMBEDDED_JPEG_PREFIX: &str = "data:image/jpeg;base64,";

/// Shortest string treated as bare base64 rather than a path.
const RAW_BASE64_MIN_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// Blank; nothing to display.
    Empty,
    /// `http://` or `https://` URL.
    Url(&'a str),
    /// `data:image/...` string.
    Embedded(&'a str),
    /// Base64 payload without a `data:` prefix.
    RawBase64(&'a str),
    /// Anything else, passed through as a site-relative path.
    AssetPath(&'a str),
}

impl<'a> ImageRef<'a> {
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        if raw.trim().is_empty() {
            return Self::Empty;
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Self::Url(raw);
        }
        if raw.starts_with("data:image/") {
            return Self::Embedded(raw);
        }
        if raw.len() > RAW_BASE64_MIN_LEN && !raw.contains('/') && !raw.contains('\\') {
            return Self::RawBase64(raw);
        }
        Self::AssetPath(raw)
    }

    /// Loadable source string. Empty for [`ImageRef::Empty`].
    #[must_use]
    pub fn display_src(&self) -> Cow<'a, str> {
        match *self {
            Self::Empty => Cow::Borrowed(""),
            Self::Url(src) | Self::Embedded(src) | Self::AssetPath(src) => Cow::Borrowed(src),
            Self::RawBase64(data) => Cow::Owned(format!("{EMBEDDED_JPEG_PREFIX}{data}")),
        }
    }

    #[must_use]
    pub const fn is_displayable(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Whether the admin form can show a live preview (URLs and embedded data).
    #[must_use]
    pub const fn is_previewable(&self) -> bool {
        matches!(self, Self::Url(_) | Self::Embedded(_) | Self::RawBase64(_))
    }
}

//! Artwork records as seen by the browse layer.
//!
//! Both upstream providers are normalized into these types. A summary is
//! what a result card needs; a detail adds the fields shown in the detail
//! view and the public-domain flag used by the filter stage.

use serde::{Deserialize, Serialize};

/// Upstream identifier of an artwork.
pub type ArtworkId = u64;

/// Reference to a renderable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageRef {
    /// A direct image URL supplied by the provider.
    Direct {
        /// Image URL
        url: String,
    },
    /// An opaque image id, templated into an IIIF URL by the adapter.
    Iiif {
        /// Provider image identifier
        image_id: String,
        /// Resolved IIIF URL
        url: String,
    },
}

impl ImageRef {
    /// Create a direct image reference.
    pub fn direct(url: impl Into<String>) -> Self {
        Self::Direct { url: url.into() }
    }

    /// Create an IIIF image reference with an already resolved URL.
    pub fn iiif(image_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Iiif {
            image_id: image_id.into(),
            url: url.into(),
        }
    }

    /// The URL to render.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Direct { url } | Self::Iiif { url, .. } => url,
        }
    }

    /// Whether this reference resolves to something renderable.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.url().trim().is_empty()
    }
}

/// Card-level metadata for one artwork.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtworkSummary {
    /// Upstream identifier
    pub id: ArtworkId,
    /// Title
    pub title: Option<String>,
    /// Artist display name
    pub artist: Option<String>,
    /// Free-form date string (e.g. "ca. 1850")
    pub date_display: Option<String>,
    /// Image reference, if the provider has one
    pub image: Option<ImageRef>,
    /// Medium description
    pub medium: Option<String>,
    /// Culture of origin
    pub culture: Option<String>,
    /// Canonical human-browsable page for this artwork
    pub web_url: Option<String>,
}

impl ArtworkSummary {
    /// Create a summary that carries nothing but its identifier.
    #[must_use]
    pub fn from_id(id: ArtworkId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Whether the summary has an image that can be rendered.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.as_ref().is_some_and(ImageRef::is_usable)
    }

    /// Resolved image URL, if usable.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .filter(|image| image.is_usable())
            .map(ImageRef::url)
    }
}

/// Full metadata for one artwork.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtworkDetail {
    /// Card-level fields
    #[serde(flatten)]
    pub summary: ArtworkSummary,
    /// Provenance text
    pub provenance: Option<String>,
    /// Physical dimensions
    pub dimensions: Option<String>,
    /// Classification (e.g. "Prints")
    pub classification: Option<String>,
    /// Place of origin
    pub place_of_origin: Option<String>,
    /// Credit line
    pub credit_line: Option<String>,
    /// Public-domain flag; `None` when the provider did not say
    pub is_public_domain: Option<bool>,
}

impl ArtworkDetail {
    /// Identifier of the underlying artwork.
    #[must_use]
    pub const fn id(&self) -> ArtworkId {
        self.summary.id
    }

    /// Whether the artwork is explicitly marked public domain.
    ///
    /// An absent flag counts as not public domain.
    #[must_use]
    pub fn is_public_domain(&self) -> bool {
        self.is_public_domain == Some(true)
    }
}

impl From<ArtworkSummary> for ArtworkDetail {
    fn from(summary: ArtworkSummary) -> Self {
        Self {
            summary,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_ref_usable() {
        assert!(ImageRef::direct("https://img/1.jpg").is_usable());
        assert!(!ImageRef::direct("").is_usable());
        assert!(!ImageRef::direct("   ").is_usable());
        assert!(ImageRef::iiif("abc", "https://iiif/abc/full/843,/0/default.jpg").is_usable());
    }

    #[test]
    fn test_summary_image_url_skips_empty() {
        let mut summary = ArtworkSummary::from_id(7);
        assert!(!summary.has_image());
        assert_eq!(summary.image_url(), None);

        summary.image = Some(ImageRef::direct(""));
        assert!(!summary.has_image());
        assert_eq!(summary.image_url(), None);

        summary.image = Some(ImageRef::direct("https://img/7.jpg"));
        assert_eq!(summary.image_url(), Some("https://img/7.jpg"));
    }

    #[test]
    fn test_public_domain_absent_is_false() {
        let mut detail = ArtworkDetail::from(ArtworkSummary::from_id(1));
        assert!(!detail.is_public_domain());

        detail.is_public_domain = Some(false);
        assert!(!detail.is_public_domain());

        detail.is_public_domain = Some(true);
        assert!(detail.is_public_domain());
    }

    #[test]
    fn test_detail_serializes_flat() {
        let detail = ArtworkDetail {
            summary: ArtworkSummary {
                id: 42,
                title: Some("Heron".to_string()),
                ..ArtworkSummary::default()
            },
            is_public_domain: Some(true),
            ..ArtworkDetail::default()
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["title"], "Heron");
        assert_eq!(json["is_public_domain"], true);
    }
}

//! Native Ads request markup (Native Ads 1.2, section 4).
//!
//! This is the payload carried as an opaque string in the `request` field of
//! the impression-level [`Native`](crate::request::Native) object. The
//! top-level object may be wrapped in a root `{"native": {...}}` envelope by
//! some exchanges; this module models the unwrapped object.

use crate::enums::Protocol;
use crate::native::{
    AdUnit, ContextSubType, ContextType, DataAssetType, EventTrackingMethod, EventType,
    ImageAssetType, Layout, PlacementType,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Native markup request object.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeRequest {
    /// Version of the Native Markup in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// Layout ID of the native ad unit. Native 1.0 only, removed in 1.2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Ad unit ID of the native ad unit. Native 1.0 only, removed in 1.2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adunit: Option<AdUnit>,

    /// The context in which the ad appears.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextType>,

    /// A more detailed context in which the ad appears.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextsubtype: Option<ContextSubType>,

    /// The design/format/layout of the ad unit being offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plcmttype: Option<PlacementType>,

    /// The number of identical placements in this layout. Spec default 1;
    /// the decoder does not apply it, absent stays absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plcmtcnt: Option<i64>,

    /// 0 for the first ad, 1 for the second ad, and so on. Generally not
    /// combined with `plcmtcnt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// An array of Asset Objects. Any bid response must comply with the
    /// array of elements expressed in the bid request.
    pub assets: Vec<Asset>,

    /// Whether the supply source supports returning an `assetsurl` instead
    /// of asset objects. 0 or absent means no support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aurlsupport: Option<i64>,

    /// Whether the supply source supports returning a `dcourl` instead of
    /// asset objects. 0 or absent means no support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durlsupport: Option<i64>,

    /// Event tracking the publisher is willing to support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<EventTracker>>,

    /// Set to 1 when the native ad supports buyer-specific privacy notice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

impl Validate for NativeRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.assets.is_empty() {
            let mut error = ValidationError::new("required");
            error.message = Some("assets must contain at least one element".into());
            errors.add("assets", error);
        }
        if self.assets.iter().any(|a| a.validate().is_err()) {
            let mut error = ValidationError::new("one_of");
            error.message =
                Some("every asset requires exactly one of title, img, video or data".into());
            errors.add("assets", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A request for one component of the native ad: a title, image, video or
/// data element. Exactly one of the four must be present.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique asset ID, assigned by the exchange. Typically a counter for
    /// the asset array.
    pub id: i64,

    /// Set to 1 if the asset is required (the exchange will not accept a
    /// bid response without it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<Image>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

impl Validate for Asset {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let variants = usize::from(self.title.is_some())
            + usize::from(self.img.is_some())
            + usize::from(self.video.is_some())
            + usize::from(self.data.is_some());
        if variants == 1 {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("one_of");
        error.message = Some("asset requires exactly one of title, img, video or data".into());
        errors.add("asset", error);
        Err(errors)
    }
}

/// Title element of the native ad.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Maximum length of the text in the title element. Recommended lengths
    /// are 25, 90 or 140.
    pub len: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Image element of the native ad, such as the icon or main image.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<ImageAssetType>,

    /// Width of the image in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    /// Minimum requested width in pixels. Either `w` or `wmin` should be
    /// transmitted; `wmin` implies flexible sizes at the given aspect ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wmin: Option<i64>,

    /// Height of the image in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    /// Minimum requested height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hmin: Option<i64>,

    /// Whitelist of content MIME types supported. Absent means all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Video element of the native ad. Follows the same conventions as the
/// impression-level video object but only carries the fields that make
/// sense for an in-ad video asset.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Content MIME types supported, e.g. "video/mp4".
    pub mimes: Vec<String>,

    /// Minimum video ad duration in seconds.
    pub minduration: i64,

    /// Maximum video ad duration in seconds.
    pub maxduration: i64,

    /// Video protocols the publisher can accept in the bid response.
    pub protocols: Vec<Protocol>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Data element of the native ad: brand name, descriptive text, rating,
/// price and similar.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    #[serde(rename = "type")]
    pub asset_type: DataAssetType,

    /// Maximum length of the text in the element's response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Specifies the event and tracking methods the publisher is willing to
/// support for this impression.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTracker {
    /// Type of event available for tracking.
    pub event: EventType,

    /// Array of tracking methods available for the event.
    pub methods: Vec<EventTrackingMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_with_no_variant_is_invalid() {
        let asset = Asset {
            id: 1,
            ..Default::default()
        };
        assert!(asset.validate().is_err());
    }

    #[test]
    fn asset_with_two_variants_is_invalid() {
        let asset = Asset {
            id: 1,
            title: Some(Title {
                len: 90,
                ..Default::default()
            }),
            data: Some(Data {
                asset_type: DataAssetType::SPONSORED,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(asset.validate().is_err());
    }

    #[test]
    fn title_asset_is_valid() {
        let asset = Asset {
            id: 1,
            required: Some(1),
            title: Some(Title {
                len: 25,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(asset.validate().is_ok());
    }
}

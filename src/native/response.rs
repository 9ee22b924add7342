//! Native Ads response markup (Native Ads 1.2, section 5).
//!
//! The bid response counterpart of [`request`](crate::native::request):
//! carried as a string in `Bid.adm` (or at a URL named by `assetsurl`).

use crate::native::{DataAssetType, EventTrackingMethod, EventType, ImageAssetType};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Native markup response object.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeResponse {
    /// Version of the Native Markup in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// List of native ad's assets. Required unless `assetsurl` or `dcourl`
    /// is provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,

    /// URL of an alternate source for the assets object and its subordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assetsurl: Option<String>,

    /// URL where a dynamic creative specification may be found for populating
    /// this ad. Beta feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcourl: Option<String>,

    /// Destination link. This is default link object for the ad; individual
    /// assets can also have a link object which applies if the asset is
    /// activated.
    pub link: Link,

    /// Array of impression tracking URLs, expected to return a 1x1 image or
    /// 204 response. Deprecated in 1.2 in favor of `eventtrackers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imptrackers: Option<Vec<String>>,

    /// Optional javascript impression tracker, HTML code fragment.
    /// Deprecated in 1.2 in favor of `eventtrackers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jstracker: Option<String>,

    /// Array of tracking objects to run with the ad, in response to the
    /// declared supported methods in the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<EventTracker>>,

    /// URL of a page informing the user about the buyer's targeting activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

impl Validate for NativeResponse {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let has_assets = self.assets.as_ref().is_some_and(|a| !a.is_empty());
        if !has_assets && self.assetsurl.is_none() && self.dcourl.is_none() {
            let mut error = ValidationError::new("required");
            error.message = Some("response requires assets, assetsurl or dcourl".into());
            errors.add("assets", error);
        }
        if self.link.url.is_empty() {
            let mut error = ValidationError::new("required");
            error.message = Some("link.url must be non-empty".into());
            errors.add("link", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// One filled component of the native ad, answering a request asset with
/// the same `id`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Optional if `assetsurl`/`dcourl` is being used; required if embedded
    /// asset is being used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Set to 1 if the asset is required (bidder requires it to be displayed).
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

    /// Link object for call to actions; applies if the asset item is
    /// activated (clicked). If absent, the parent object's link applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

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

/// Title element of the filled ad.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// The text associated with the text element.
    pub text: String,

    /// The length of the title being provided. Required if using assetsurl
    /// or dcourl representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Image element of the filled ad.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Required if using assetsurl or dcourl representation.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<ImageAssetType>,

    /// URL of the image asset.
    pub url: String,

    /// Width of the image. Recommended, and required if using assetsurl or
    /// dcourl representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    /// Height of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Video element of the filled ad. Corresponds to the Video Object in the
/// request, yet containing a value of a conforming VAST tag as a value.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// VAST XML.
    pub vasttag: String,
}

/// Data element of the filled ad: response to ratings, prices, review
/// counts, downloads and similar data type requests.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    /// Required if using assetsurl or dcourl representation.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<DataAssetType>,

    /// Required if using assetsurl or dcourl representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,

    /// The formatted string of data to be displayed, e.g. "5 stars" or
    /// "$10" or "3.4 stars out of 5".
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Destination link and trackers for the ad or one of its assets.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Landing URL of the clickable link.
    pub url: String,

    /// List of third-party tracker URLs to be fired on click of the URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicktrackers: Option<Vec<String>>,

    /// Fallback URL for deeplink: to be used if the URL given in `url` is
    /// not supported by the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// A tracker fired for the given event with the given method.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTracker {
    /// Type of event to track.
    pub event: EventType,

    /// Type of tracking requested.
    pub method: EventTrackingMethod,

    /// The URL of the image or js. Required for image or js, optional for
    /// custom methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// To be agreed individually with the exchange, an array of key:value
    /// objects for custom tracking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customdata: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

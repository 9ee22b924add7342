//! Bid request objects (OpenRTB 2.5, section 3.2).
//!
//! `BidRequest` is the top-level object; one `Imp` per offered impression,
//! each carrying the media objects (`Banner`, `Video`, `Audio`, `Native`)
//! describing the forms in which the impression may be filled.

use crate::context::{App, Device, Regs, Site, Source, User};
use crate::enums::{
    AdPosition, ApiFramework, AuctionType, BannerAdType, CompanionType, ContentDeliveryMethod,
    CreativeAttribute, ExpandableDirection, FeedType, PlaybackCessationMode, PlaybackMethod,
    Protocol, StartDelay, VideoLinearity, VideoPlacementType, VolumeNormalizationMode,
};
use crate::error::Error;
use crate::native::request::NativeRequest;
use crate::native::{AdUnit, ContextSubType, ContextType, Layout, PlacementType};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Top-level bid request object.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BidRequest {
    /// Unique ID of the bid request, provided by the exchange.
    #[validate(length(min = 1))]
    pub id: String,

    /// At least one impression is required.
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub imp: Vec<Imp>,

    /// Details about the publisher's website. Only applicable and
    /// recommended for websites; mutually exclusive with `app`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,

    /// Details about the publisher's app. Mutually exclusive with `site`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Indicator of test mode (1 = test, auctions are not billable).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<i64>,

    /// Auction type. Spec default is second price plus (2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<AuctionType>,

    /// Maximum time in milliseconds the exchange allows for bids to be
    /// received, to avoid timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmax: Option<i64>,

    /// Whitelist of buyer seats allowed to bid. Mutually exclusive with
    /// `bseat`; omission implies no restrictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wseat: Option<Vec<String>>,

    /// Blocklist of buyer seats restricted from bidding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bseat: Option<Vec<String>>,

    /// 1 means all impressions in this request are offered, and every
    /// impression object represents the full context of the page or app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allimps: Option<i64>,

    /// Allowed currencies using ISO-4217 alpha codes. Recommended if the
    /// exchange accepts multiple currencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cur: Option<Vec<String>>,

    /// Whitelist of languages for creatives using ISO-639-1-alpha-2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wlang: Option<Vec<String>>,

    /// Blocked advertiser categories using IAB content categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcat: Option<Vec<String>>,

    /// Blocklist of advertisers by their domains, e.g. "ford.com".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badv: Option<Vec<String>>,

    /// Blocklist of applications by their platform-specific exchange-
    /// independent identifiers (bundle or package names).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bapp: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regs: Option<Regs>,

    /// Placeholder for exchange-specific extensions to OpenRTB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// One impression being offered. An impression with none of the media
/// objects set is meaningless, so validation requires at least one of
/// `banner`, `video`, `audio` or `native`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imp {
    /// Unique ID of the impression within the bid request, typically
    /// starting with 1 and increasing.
    pub id: String,

    /// An array of Metric objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<Vec<Metric>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native: Option<Native>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmp: Option<Pmp>,

    /// Name of the ad mediation partner, SDK technology or player
    /// responsible for rendering the ad.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displaymanager: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displaymanagerver: Option<String>,

    /// 1 = the ad is interstitial or full screen, 0 = not interstitial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instl: Option<i64>,

    /// Identifier for the specific ad placement or ad tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagid: Option<String>,

    /// Minimum bid for this impression expressed in CPM. Spec default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidfloor: Option<f64>,

    /// Currency of `bidfloor` using ISO-4217 alpha codes. Spec default "USD".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidfloorcur: Option<String>,

    /// Indicates the type of browser opened upon clicking the creative in
    /// an app: 0 = embedded, 1 = native.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickbrowser: Option<i64>,

    /// Flag to indicate if the impression requires secure HTTPS URL
    /// creative assets and markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<i64>,

    /// Array of exchange-specific names of supported iframe busters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iframebuster: Option<Vec<String>>,

    /// Advisory as to the number of seconds that may elapse between the
    /// auction and the actual impression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

impl Validate for Imp {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.id.trim().is_empty() {
            let mut error = ValidationError::new("required");
            error.message = Some("imp.id must be non-empty".into());
            errors.add("id", error);
        }

        let has_media = self.banner.is_some()
            || self.video.is_some()
            || self.audio.is_some()
            || self.native.is_some();
        if !has_media {
            let mut error = ValidationError::new("missing_media");
            error.message = Some(
                "imp requires at least one creative object (banner/video/audio/native)".into(),
            );
            errors.add("media", error);
        }

        if self.native.as_ref().is_some_and(|n| n.validate().is_err()) {
            let mut error = ValidationError::new("required");
            error.message = Some("native requires a non-empty request and assets".into());
            errors.add("native", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Quantified metric offered with the impression, e.g. viewability.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Type of metric being presented using exchange-curated string names.
    #[serde(rename = "type")]
    pub metric_type: String,

    /// Number representing the value of the metric. Probabilities must be
    /// in the range 0.0 - 1.0.
    pub value: f64,

    /// Source of the value. "EXCHANGE" is recommended if the exchange is
    /// the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Banner impression. May appear inside `Imp` directly, or inside `Video`
/// as a companion ad.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    /// Array of format objects representing the banner sizes permitted.
    /// Recommended if no `w`/`h` are specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Vec<Format>>,

    /// Exact width in device-independent pixels (DIPS); recommended if no
    /// format objects are specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    /// Exact height in DIPS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    /// Blocked banner ad types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btype: Option<Vec<BannerAdType>>,

    /// Blocked creative attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battr: Option<Vec<CreativeAttribute>>,

    /// Ad position on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<AdPosition>,

    /// Content MIME types supported, e.g. "image/jpg".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimes: Option<Vec<String>>,

    /// Indicates if the banner is in the top frame as opposed to an iframe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topframe: Option<i64>,

    /// Directions in which the banner may expand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expdir: Option<Vec<ExpandableDirection>>,

    /// List of supported API frameworks for this impression. An API not
    /// explicitly listed is assumed not to be supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,

    /// Unique identifier for this banner object. Recommended when `Banner`
    /// objects are used with a `Video` object to represent companion ads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Relevant only for companion banners: 0 = concurrent, 1 = end-card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcm: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Allowed size (height and width combination) or flex ad parameters for a
/// banner impression.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Format {
    /// Width in device-independent pixels.
    #[validate(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    /// Height in device-independent pixels.
    #[validate(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    /// Relative width when expressing size as a ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wratio: Option<i64>,

    /// Relative height when expressing size as a ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hratio: Option<i64>,

    /// Minimum width in DIPS at which the ad will be displayed when the
    /// size is expressed as a ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wmin: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// In-stream video impression.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Content MIME types supported, e.g. "video/mp4".
    pub mimes: Vec<String>,

    /// Minimum video ad duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minduration: Option<i64>,

    /// Maximum video ad duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxduration: Option<i64>,

    /// Array of supported video protocols. At least one supported protocol
    /// must be specified in either `protocol` or `protocols`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<Protocol>>,

    /// Width of the video player in DIPS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    /// Height of the video player in DIPS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    /// Indicates the start delay in seconds for pre-roll, mid-roll, or
    /// post-roll ad placements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startdelay: Option<StartDelay>,

    /// Placement type for the impression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<VideoPlacementType>,

    /// Indicates if the impression must be linear, nonlinear, etc. Absent
    /// means all are assumed to be allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linearity: Option<VideoLinearity>,

    /// Indicates if the player will allow the video to be skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,

    /// Videos of total duration greater than this number of seconds can be
    /// skippable; only applicable if the ad is skippable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipmin: Option<i64>,

    /// Number of seconds a video must play before skipping is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipafter: Option<i64>,

    /// If multiple ad impressions are offered in the same bid request, the
    /// sequence number allows for coordinated delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,

    /// Blocked creative attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battr: Option<Vec<CreativeAttribute>>,

    /// Maximum extended ad duration if extension is allowed. -1 means
    /// extension is allowed with no time limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxextended: Option<i64>,

    /// Minimum bit rate in Kbps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minbitrate: Option<i64>,

    /// Maximum bit rate in Kbps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxbitrate: Option<i64>,

    /// Indicates if letter-boxing of 4:3 content into a 16:9 window is
    /// allowed. Spec default 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boxingallowed: Option<i64>,

    /// Playback methods that may be in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbackmethod: Option<Vec<PlaybackMethod>>,

    /// The event that causes playback to end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbackend: Option<PlaybackCessationMode>,

    /// Supported delivery methods; absent means all are supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Vec<ContentDeliveryMethod>>,

    /// Ad position on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<AdPosition>,

    /// Array of Banner objects if companion ads are available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companionad: Option<Vec<Banner>>,

    /// List of supported API frameworks for this impression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,

    /// Supported VAST companion ad types. Recommended if `companionad` is
    /// filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companiontype: Option<Vec<CompanionType>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Audio impression. Mirrors `Video` except for attributes unique to each.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    /// Content MIME types supported, e.g. "audio/mp4".
    pub mimes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minduration: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxduration: Option<i64>,

    /// Array of supported audio protocols.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<Protocol>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startdelay: Option<StartDelay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battr: Option<Vec<CreativeAttribute>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxextended: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minbitrate: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxbitrate: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Vec<ContentDeliveryMethod>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companionad: Option<Vec<Banner>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companiontype: Option<Vec<CompanionType>>,

    /// The maximum number of ads that can be played in an ad pod.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxseq: Option<i64>,

    /// Type of audio feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<FeedType>,

    /// Indicates if the ad is stitched with audio content or delivered
    /// independently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stitched: Option<i64>,

    /// Volume normalization mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nvol: Option<VolumeNormalizationMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Native type impression.
///
/// The Dynamic Native Ads API defines the actual request parameters and
/// response markup; this object transports the request parameters as an
/// opaque string (`request`) so they can evolve separately. The presence of
/// a `Native` as a subordinate of `Imp` indicates the impression is offered
/// as a native type impression.
///
/// Alongside the transport fields, this object carries the Native 1.0/1.2
/// placement fields (`layout` through `privacy`) that some SDKs populate
/// directly on the impression instead of inside the encoded payload.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Native {
    /// Request payload complying with the Native Ad Specification.
    pub request: String,

    /// Version of the Dynamic Native Ads API to which `request` complies;
    /// highly recommended for efficient parsing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// List of supported API frameworks for this impression. An API not
    /// explicitly listed is assumed not to be supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,

    /// Blocked creative attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battr: Option<Vec<CreativeAttribute>>,

    /// Placeholder for exchange-specific extensions to OpenRTB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,

    /// Layout ID of the native ad unit. Recommended in Native 1.0,
    /// deprecated/removed in 1.2; superseded by `context`/`plcmttype`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Ad unit ID of the native ad unit. Recommended in Native 1.0,
    /// deprecated/removed in 1.2.
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
    /// absent stays absent, consumers apply the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plcmtcnt: Option<i64>,

    /// 0 for the first ad, 1 for the second ad, and so on. Generally not
    /// used in combination with `plcmtcnt`: either multiple identical
    /// placements are auctioned (plcmtcnt > 1, seq = 0) or distinct feed
    /// items get separate auctions (plcmtcnt = 1, seq >= 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// An array of Asset Objects. Any bid response must comply with the
    /// array of elements expressed in the bid request.
    pub assets: Vec<crate::native::request::Asset>,

    /// Whether the supply source supports returning an `assetsurl` instead
    /// of an asset object. 0 or absence indicates no support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aurlsupport: Option<i64>,

    /// Whether the supply source supports returning a DCO URL instead of an
    /// asset object. 0 or absence indicates no support. Beta feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durlsupport: Option<i64>,

    /// Specifies what type of event tracking is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<crate::native::request::EventTracker>>,

    /// Set to 1 when the native ad supports buyer-specific privacy notice,
    /// 0 or absent when it does not or support is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<i64>,
}

impl Native {
    /// Parses the opaque `request` string into the native markup object.
    ///
    /// Some exchanges wrap the markup in a root `{"native": {...}}`
    /// envelope; both forms are accepted.
    pub fn request_payload(&self) -> Result<NativeRequest, Error> {
        #[derive(Deserialize)]
        struct Enveloped {
            native: NativeRequest,
        }

        if let Ok(Enveloped { native }) = serde_json::from_str(&self.request) {
            return Ok(native);
        }
        Ok(serde_json::from_str(&self.request)?)
    }
}

impl Validate for Native {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.request.trim().is_empty() {
            let mut error = ValidationError::new("required");
            error.message = Some("native.request must be non-empty".into());
            errors.add("request", error);
        }
        if self.assets.is_empty() {
            let mut error = ValidationError::new("required");
            error.message = Some("native.assets must contain at least one element".into());
            errors.add("assets", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Private marketplace container for direct deals between buyers and
/// sellers that may pertain to the impression.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pmp {
    /// Indicator of auction eligibility to seats named in the direct deals
    /// object: 1 = bids restricted to the deals and terms specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_auction: Option<i64>,

    /// Array of Deal objects that convey the specific deals applicable to
    /// this impression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deals: Option<Vec<Deal>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Specific deal struck a priori between a buyer and a seller.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Unique identifier for the direct deal.
    pub id: String,

    /// Minimum bid for this impression expressed in CPM. Spec default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidfloor: Option<f64>,

    /// Currency of `bidfloor`. Spec default "USD".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidfloorcur: Option<String>,

    /// Optional override of the overall auction type of the bid request:
    /// 3 means the value passed in `bidfloor` is the agreed-upon deal price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<AuctionType>,

    /// Whitelist of buyer seats allowed to bid on this deal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wseat: Option<Vec<String>>,

    /// Array of advertiser domains allowed to bid on this deal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wadomain: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

//! Bid response objects (OpenRTB 2.5, section 4.2).

use crate::enums::{ApiFramework, CreativeAttribute, NoBidReason, Protocol, QagMediaRating};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Top-level bid response object.
///
/// An empty `seatbid` array together with `nbr` is the well-formed way to
/// signal no-bid; HTTP 204 with no body is the other.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BidResponse {
    /// ID of the bid request to which this is a response.
    #[validate(length(min = 1))]
    pub id: String,

    /// Array of seatbid objects; required if a bid is made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seatbid: Option<Vec<SeatBid>>,

    /// Bidder generated response ID to assist with logging/tracking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidid: Option<String>,

    /// Bid currency using ISO-4217 alpha codes. Spec default "USD".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cur: Option<String>,

    /// Optional feature to allow a bidder to set data in the exchange's
    /// cookie, in base85 cookie safe characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customdata: Option<String>,

    /// Reason for not bidding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbr: Option<NoBidReason>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Set of bids on behalf of a specific bidder seat. A bid response can
/// contain multiple `SeatBid` objects, each with one or more individual
/// bids.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatBid {
    /// At least one bid is required in a seatbid.
    pub bid: Vec<Bid>,

    /// ID of the buyer seat on whose behalf this bid is made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,

    /// 0 = impressions can be won individually, 1 = impressions must be won
    /// or lost as a group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// An offer to buy a specific impression under certain business terms.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    /// Bidder generated bid ID to assist with logging/tracking.
    pub id: String,

    /// ID of the `Imp` object in the related bid request.
    pub impid: String,

    /// Bid price expressed as CPM. Although this value is a float, integer
    /// math is highly recommended when handling currencies.
    pub price: f64,

    /// Win notice URL; supports substitution macros and can serve as the
    /// ad markup carrier if markup is not included directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nurl: Option<String>,

    /// Billing notice URL called by the exchange when a winning bid becomes
    /// billable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burl: Option<String>,

    /// Loss notice URL called by the exchange when a bid is known to have
    /// been lost; the `${AUCTION_LOSS}` macro carries a `LossReason` code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lurl: Option<String>,

    /// Ad markup. May be the markup itself, or for native ads the encoded
    /// native response payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,

    /// ID of a preloaded ad to be served if the bid wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adid: Option<String>,

    /// Advertiser domain for block list checking, e.g. "ford.com".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adomain: Option<Vec<String>>,

    /// Platform-specific application identifier of the advertised app,
    /// intended to be unique and independent of the exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,

    /// URL without cache-busting to an image representative of the content
    /// of the campaign, for ad quality checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iurl: Option<String>,

    /// Campaign ID to assist with ad quality checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,

    /// Creative ID to assist with ad quality checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crid: Option<String>,

    /// IAB content categories of the creative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,

    /// Set of attributes describing the creative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<Vec<CreativeAttribute>>,

    /// API required by the markup if applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiFramework>,

    /// Video response protocol of the markup if applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,

    /// Creative media rating per IQG guidelines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qagmediarating: Option<QagMediaRating>,

    /// Language of the creative using ISO-639-1-alpha-2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Reference to the deal from the bid request if this bid pertains to a
    /// private marketplace direct deal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealid: Option<String>,

    /// Width of the creative in DIPS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    /// Height of the creative in DIPS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    /// Relative width of the creative when adapting to different sizes, for
    /// flex ads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wratio: Option<i64>,

    /// Relative height of the creative for flex ads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hratio: Option<i64>,

    /// Advisory as to the number of seconds the bidder is willing to wait
    /// between the auction and the actual impression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

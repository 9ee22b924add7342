//! Controlled vocabularies from OpenRTB 2.5 section 5.
//!
//! Every code set here is an open integer domain: the spec assigns meanings
//! to some values and reserves the rest (typically 500+) for exchange
//! extensions. Each type is therefore a transparent newtype over `i64` with
//! named constants for the documented points. Unknown codes decode and
//! re-encode verbatim.

use serde::{Deserialize, Serialize};

macro_rules! code_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$cmeta:meta])*
                $const_name:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            $(
                $(#[$cmeta])*
                pub const $const_name: Self = Self($value);
            )*
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(code: $name) -> i64 {
                code.0
            }
        }
    };
}

pub(crate) use code_set;

code_set! {
    /// Auction price basis (`BidRequest.at`). Values greater than 500 are
    /// exchange-specific; 3 appears on `Deal.at` for fixed-price deals.
    AuctionType {
        FIRST_PRICE = 1,
        SECOND_PRICE_PLUS = 2,
    }
}

code_set! {
    /// Types of ads that can be accepted by the exchange (List 5.2).
    BannerAdType {
        XHTML_TEXT = 1,
        XHTML_BANNER = 2,
        JAVASCRIPT = 3,
        IFRAME = 4,
    }
}

code_set! {
    /// Creative attributes that can be blocked or described (List 5.3).
    CreativeAttribute {
        AUDIO_AUTO_PLAY = 1,
        AUDIO_USER_INITIATED = 2,
        EXPANDABLE_AUTOMATIC = 3,
        EXPANDABLE_USER_CLICK = 4,
        EXPANDABLE_USER_ROLLOVER = 5,
        BANNER_VIDEO_AUTO_PLAY = 6,
        BANNER_VIDEO_USER_INITIATED = 7,
        POP = 8,
        PROVOCATIVE_OR_SUGGESTIVE = 9,
        ANNOYING = 10,
        SURVEYS = 11,
        TEXT_ONLY = 12,
        USER_INTERACTIVE = 13,
        WINDOWS_DIALOG_OR_ALERT = 14,
        HAS_AUDIO_ON_OFF_BUTTON = 15,
        AD_CAN_BE_SKIPPED = 16,
        ADOBE_FLASH = 17,
    }
}

code_set! {
    /// Ad position on screen (List 5.4).
    AdPosition {
        UNKNOWN = 0,
        ABOVE_THE_FOLD = 1,
        /// May or may not be initially visible depending on screen size.
        /// Deprecated in 2.5.
        LIKELY_BELOW_THE_FOLD = 2,
        BELOW_THE_FOLD = 3,
        HEADER = 4,
        FOOTER = 5,
        SIDEBAR = 6,
        FULL_SCREEN = 7,
    }
}

code_set! {
    /// Directions in which an expandable ad may expand (List 5.5).
    ExpandableDirection {
        LEFT = 1,
        RIGHT = 2,
        UP = 3,
        DOWN = 4,
        FULL_SCREEN = 5,
    }
}

code_set! {
    /// API frameworks supported by the publisher (List 5.6).
    ApiFramework {
        VPAID_1_0 = 1,
        VPAID_2_0 = 2,
        MRAID_1 = 3,
        ORMMA = 4,
        MRAID_2 = 5,
        MRAID_3 = 6,
    }
}

code_set! {
    /// Video linearity (List 5.7): in-stream vs overlay.
    VideoLinearity {
        LINEAR = 1,
        NON_LINEAR = 2,
    }
}

code_set! {
    /// Supported bid response protocols (List 5.8).
    Protocol {
        VAST_1_0 = 1,
        VAST_2_0 = 2,
        VAST_3_0 = 3,
        VAST_1_0_WRAPPER = 4,
        VAST_2_0_WRAPPER = 5,
        VAST_3_0_WRAPPER = 6,
        VAST_4_0 = 7,
        VAST_4_0_WRAPPER = 8,
        DAAST_1_0 = 9,
        DAAST_1_0_WRAPPER = 10,
    }
}

code_set! {
    /// Video placement subtypes (List 5.9).
    VideoPlacementType {
        IN_STREAM = 1,
        IN_BANNER = 2,
        IN_ARTICLE = 3,
        IN_FEED = 4,
        INTERSTITIAL_SLIDER_FLOATING = 5,
    }
}

code_set! {
    /// Media playback methods (List 5.10).
    PlaybackMethod {
        PAGE_LOAD_SOUND_ON = 1,
        PAGE_LOAD_SOUND_OFF = 2,
        CLICK_SOUND_ON = 3,
        MOUSE_OVER_SOUND_ON = 4,
        ENTER_VIEWPORT_SOUND_ON = 5,
        ENTER_VIEWPORT_SOUND_OFF = 6,
    }
}

code_set! {
    /// Event that causes playback to end (List 5.11).
    PlaybackCessationMode {
        ON_COMPLETION = 1,
        ON_LEAVING_VIEWPORT = 2,
        ON_LEAVING_VIEWPORT_UNTIL_COMPLETION = 3,
    }
}

code_set! {
    /// Video/audio start delay (List 5.12). Values above zero are the
    /// mid-roll start delay in seconds.
    StartDelay {
        PRE_ROLL = 0,
        GENERIC_MID_ROLL = -1,
        GENERIC_POST_ROLL = -2,
    }
}

code_set! {
    /// Content production quality (List 5.13).
    ProductionQuality {
        UNKNOWN = 0,
        PROFESSIONAL = 1,
        PROSUMER = 2,
        USER_GENERATED = 3,
    }
}

code_set! {
    /// Markup types allowed for companion ads (List 5.14).
    CompanionType {
        STATIC_RESOURCE = 1,
        HTML_RESOURCE = 2,
        IFRAME_RESOURCE = 3,
    }
}

code_set! {
    /// Media delivery methods (List 5.15).
    ContentDeliveryMethod {
        STREAMING = 1,
        PROGRESSIVE = 2,
        DOWNLOAD = 3,
    }
}

code_set! {
    /// Audio feed types (List 5.16).
    FeedType {
        MUSIC_SERVICE = 1,
        FM_AM_BROADCAST = 2,
        PODCAST = 3,
    }
}

code_set! {
    /// Volume normalization modes (List 5.17).
    VolumeNormalizationMode {
        NONE = 0,
        AVERAGE_VOLUME = 1,
        PEAK_VOLUME = 2,
        LOUDNESS = 3,
        CUSTOM_VOLUME = 4,
    }
}

code_set! {
    /// Content context (List 5.18): the type of content in which the
    /// impression appears.
    ContentContext {
        VIDEO = 1,
        GAME = 2,
        MUSIC = 3,
        APPLICATION = 4,
        TEXT = 5,
        OTHER = 6,
        UNKNOWN = 7,
    }
}

code_set! {
    /// IQG media ratings (List 5.19).
    QagMediaRating {
        ALL_AUDIENCES = 1,
        EVERYONE_OVER_12 = 2,
        MATURE_AUDIENCES = 3,
    }
}

code_set! {
    /// How the geographic location was determined (List 5.20).
    LocationType {
        GPS = 1,
        IP_ADDRESS = 2,
        USER_PROVIDED = 3,
    }
}

code_set! {
    /// Device types (List 5.21).
    DeviceType {
        /// Mobile or tablet, version 2.0 compatibility.
        MOBILE_OR_TABLET = 1,
        PERSONAL_COMPUTER = 2,
        CONNECTED_TV = 3,
        PHONE = 4,
        TABLET = 5,
        CONNECTED_DEVICE = 6,
        SET_TOP_BOX = 7,
    }
}

code_set! {
    /// Network connection types (List 5.22).
    ConnectionType {
        UNKNOWN = 0,
        ETHERNET = 1,
        WIFI = 2,
        CELLULAR_UNKNOWN = 3,
        CELLULAR_2G = 4,
        CELLULAR_3G = 5,
        CELLULAR_4G = 6,
    }
}

code_set! {
    /// Services for resolving IP addresses to locations (List 5.23).
    IpLocationService {
        IP2LOCATION = 1,
        NEUSTAR = 2,
        MAXMIND = 3,
        NETACUITY = 4,
    }
}

code_set! {
    /// Reasons for not bidding (List 5.24), `BidResponse.nbr`.
    NoBidReason {
        UNKNOWN_ERROR = 0,
        TECHNICAL_ERROR = 1,
        INVALID_REQUEST = 2,
        KNOWN_WEB_SPIDER = 3,
        SUSPECTED_NON_HUMAN_TRAFFIC = 4,
        CLOUD_DATA_CENTER_OR_PROXY_IP = 5,
        UNSUPPORTED_DEVICE = 6,
        BLOCKED_PUBLISHER_OR_SITE = 7,
        UNMATCHED_USER = 8,
    }
}

code_set! {
    /// Loss reasons communicated via `Bid.lurl` macros (List 5.25).
    LossReason {
        BID_WON = 0,
        INTERNAL_ERROR = 1,
        IMPRESSION_OPPORTUNITY_EXPIRED = 2,
        INVALID_BID_RESPONSE = 3,
        INVALID_DEAL_ID = 4,
        INVALID_AUCTION_ID = 5,
        INVALID_ADVERTISER_DOMAIN = 6,
        MISSING_MARKUP = 7,
        MISSING_CREATIVE_ID = 8,
        MISSING_BID_PRICE = 9,
        MISSING_MINIMUM_CREATIVE_APPROVAL_DATA = 10,
        BID_BELOW_AUCTION_FLOOR = 100,
        BID_BELOW_DEAL_FLOOR = 101,
        LOST_TO_HIGHER_BID = 102,
        LOST_TO_A_BID_FOR_A_PMP_DEAL = 103,
        BUYER_SEAT_BLOCKED = 104,
        CREATIVE_FILTERED_GENERAL = 200,
        CREATIVE_FILTERED_PENDING_PROCESSING = 201,
        CREATIVE_FILTERED_DISAPPROVED = 202,
        CREATIVE_FILTERED_SIZE_NOT_ALLOWED = 203,
        CREATIVE_FILTERED_INCORRECT_FORMAT = 204,
        CREATIVE_FILTERED_ADVERTISER_EXCLUSIONS = 205,
        CREATIVE_FILTERED_APP_BUNDLE_EXCLUSIONS = 206,
        CREATIVE_FILTERED_NOT_SECURE = 207,
        CREATIVE_FILTERED_LANGUAGE_EXCLUSIONS = 208,
        CREATIVE_FILTERED_CATEGORY_EXCLUSIONS = 209,
        CREATIVE_FILTERED_CREATIVE_ATTRIBUTE_EXCLUSIONS = 210,
        CREATIVE_FILTERED_AD_TYPE_EXCLUSIONS = 211,
        CREATIVE_FILTERED_ANIMATION_TOO_LONG = 212,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_transparent_integers() {
        let json = serde_json::to_string(&ApiFramework::MRAID_2).unwrap();
        assert_eq!(json, "5");
        let back: ApiFramework = serde_json::from_str("5").unwrap();
        assert_eq!(back, ApiFramework::MRAID_2);
    }

    #[test]
    fn unknown_code_survives_round_trip() {
        let code: CreativeAttribute = serde_json::from_str("999").unwrap();
        assert_eq!(code, CreativeAttribute(999));
        assert_eq!(serde_json::to_string(&code).unwrap(), "999");
    }

    #[test]
    fn negative_start_delay() {
        assert_eq!(StartDelay::GENERIC_POST_ROLL, StartDelay(-2));
    }
}

//! Dynamic Native Ads API types.
//!
//! The native companion spec defines its own request/response markup (the
//! payload carried as an opaque string in `Native.request` / `Bid.adm`) and
//! its own code tables. Codes follow the same open-domain rule as the core
//! lists: 500+ is reserved for exchange-specific values, so every type here
//! accepts arbitrary integers.

use crate::enums::code_set;
use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

code_set! {
    /// Native layout IDs from Native Ads 1.0.
    ///
    /// Recommended in 1.0, deprecated and removed in 1.2 in favor of
    /// [`ContextType`] and [`PlacementType`]. Kept because 1.0 producers
    /// still populate it.
    Layout {
        CONTENT_WALL = 1,
        APP_WALL = 2,
        NEWS_FEED = 3,
        CHAT_LIST = 4,
        CAROUSEL = 5,
        CONTENT_STREAM = 6,
        GRID_ADJOINING_THE_CONTENT = 7,
    }
}

code_set! {
    /// Native ad unit IDs from Native Ads 1.0.
    ///
    /// Recommended in 1.0, deprecated and removed in 1.2. Kept for the same
    /// compatibility reason as [`Layout`].
    AdUnit {
        PAID_SEARCH_UNIT = 1,
        RECOMMENDATION_WIDGET = 2,
        PROMOTED_LISTING = 3,
        IAB_IN_AD_NATIVE = 4,
        /// "Can't be contained": does not fit the other categories.
        CUSTOM = 5,
    }
}

code_set! {
    /// The context in which the ad appears (Native Ads 1.2, 7.1).
    ContextType {
        /// Newsfeed, article, image gallery, video gallery, etc.
        CONTENT = 1,
        /// Social feeds, email, chat.
        SOCIAL = 2,
        /// Product listings, details, reviews.
        PRODUCT = 3,
    }
}

code_set! {
    /// Finer-grained context (Native Ads 1.2, 7.2). The hundreds digit
    /// matches the parent [`ContextType`] group.
    ContextSubType {
        GENERAL_OR_MIXED_CONTENT = 10,
        ARTICLE = 11,
        VIDEO = 12,
        AUDIO = 13,
        IMAGE = 14,
        USER_GENERATED_CONTENT = 15,
        GENERAL_SOCIAL = 20,
        EMAIL = 21,
        CHAT_OR_IM = 22,
        SELLING_PRODUCTS = 30,
        APPLICATION_STORE = 31,
        PRODUCT_REVIEWS = 32,
    }
}

code_set! {
    /// Design/format/layout of the ad unit being offered (Native Ads 1.2, 7.3).
    PlacementType {
        /// In the feed of content, e.g. as an item inside the organic
        /// feed/grid/listing/carousel.
        IN_FEED = 1,
        /// In the atomic unit of the content, e.g. in the article page or
        /// single image page.
        ATOMIC_UNIT = 2,
        /// Outside the core content, e.g. in the ads section on the right
        /// rail, as a banner-style placement near the content.
        OUTSIDE_CORE_CONTENT = 3,
        /// Recommendation widget, most commonly presented below the article
        /// content.
        RECOMMENDATION_WIDGET = 4,
    }
}

code_set! {
    /// Common asset element types of native advertising (Native Ads 1.2, 7.4).
    DataAssetType {
        /// Sponsored-by message where response should contain the brand name.
        SPONSORED = 1,
        DESC = 2,
        RATING = 3,
        LIKES = 4,
        DOWNLOADS = 5,
        PRICE = 6,
        SALE_PRICE = 7,
        PHONE = 8,
        ADDRESS = 9,
        DESC_2 = 10,
        DISPLAY_URL = 11,
        /// Call-to-action text, e.g. "Install".
        CTA_TEXT = 12,
    }
}

code_set! {
    /// Common image asset types (Native Ads 1.2, 7.5).
    ImageAssetType {
        /// Icon image. Optional; max height 1, aspect ratio 1:1.
        ICON = 1,
        /// Logo image for the brand/app. Deprecated in 1.2 in favor of
        /// the `SPONSORED` data asset.
        LOGO = 2,
        /// Large image preview for the ad.
        MAIN = 3,
    }
}

code_set! {
    /// Types of events that can be tracked (Native Ads 1.2, 7.6).
    EventType {
        IMPRESSION = 1,
        /// Visible impression using MRC definition at 50% in view for 1 second.
        VIEWABLE_MRC_50 = 2,
        /// 100% in view for 1 second (GroupM standard).
        VIEWABLE_MRC_100 = 3,
        /// Visible impression for video using MRC definition at 50% in view
        /// for 2 seconds.
        VIEWABLE_VIDEO_50 = 4,
    }
}

code_set! {
    /// Available methods of tracking (Native Ads 1.2, 7.7).
    EventTrackingMethod {
        /// Image-pixel tracking: URL provided will be inserted as a 1x1
        /// pixel at the time of the event.
        IMG = 1,
        /// Javascript-based tracking: URL provided will be inserted as a
        /// js tag at the time of the event.
        JS = 2,
    }
}

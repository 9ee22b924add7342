//! Distribution-channel and audience objects (OpenRTB 2.5, section 3.2):
//! where the impression appears (`Site`/`App` and their `Publisher` /
//! `Content` / `Producer`), what it appears on (`Device`, `Geo`), who sees
//! it (`User`, `Data`, `Segment`), and request provenance (`Source`, `Regs`).

use crate::enums::{
    ConnectionType, ContentContext, DeviceType, IpLocationService, LocationType,
    ProductionQuality, QagMediaRating,
};
use serde::{Deserialize, Serialize};

/// Website in which the ad will be shown. Either `Site` or `App` should be
/// present in a bid request, not both.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Exchange-specific site ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Domain of the site, e.g. "mysite.foo.com".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// IAB content categories of the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,

    /// IAB content categories of the current section of the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sectioncat: Option<Vec<String>>,

    /// IAB content categories of the current page or view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagecat: Option<Vec<String>>,

    /// URL of the page where the impression will be shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    /// Referrer URL that caused navigation to the current page.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,

    /// Search string that caused navigation to the current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Indicates if the site has been programmed to optimize layout when
    /// viewed on mobile devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<i64>,

    /// Indicates if the site has a privacy policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacypolicy: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Comma-separated list of keywords about the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Non-browser application in which the ad will be shown.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// Exchange-specific app ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Platform-specific application identifier intended to be unique to
    /// the app and independent of the exchange: a bundle or package name on
    /// Android, a numeric ID on iOS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,

    /// Domain of the app, e.g. "mygame.foo.com".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// App store URL for an installed app; for IQG 2.1 compliance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storeurl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sectioncat: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagecat: Option<Vec<String>>,

    /// Application version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacypolicy: Option<i64>,

    /// 0 = app is free, 1 = the app is a paid version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Publisher of the media in which the ad will be displayed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    /// Exchange-specific publisher ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// IAB content categories that describe the publisher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,

    /// Highest level domain of the publisher, e.g. "publisher.com".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Content in which the impression will appear, which may be syndicated or
/// non-syndicated. Useful when the ad is contained in certain content, e.g.
/// a video or audio stream.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// ID uniquely identifying the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Episode number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<i64>,

    /// Content title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Content series, e.g. "The Office" (the series).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    /// Content season, e.g. "Season 3".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    /// Artist credited with the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Genre that best describes the content, e.g. rock, pop, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Album to which the content belongs; typically for audio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// International Standard Recording Code conforming to ISO-3901.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<Producer>,

    /// URL of the content, for buy-side contextualization or review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,

    /// Production quality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prodq: Option<ProductionQuality>,

    /// Type of content (game, video, text, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContentContext>,

    /// Content rating, e.g. MPAA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contentrating: Option<String>,

    /// User rating of the content, e.g. number of stars, likes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userrating: Option<String>,

    /// Media rating per IQG guidelines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qagmediarating: Option<QagMediaRating>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// 0 = not live, 1 = content is live, e.g. a stream or live blog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub livestream: Option<i64>,

    /// 0 = indirect, 1 = direct source relationship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourcerelationship: Option<i64>,

    /// Length of content in seconds; appropriate for video or audio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,

    /// Content language using ISO-639-1-alpha-2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Indicator of whether the content is embeddable, e.g. an embeddable
    /// video player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddable: Option<i64>,

    /// Additional content data, each `Data` object representing a different
    /// data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Data>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Producer of the content; useful when the content is syndicated and
/// distributed through different publishers.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    /// Content producer or originator ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,

    /// Highest level domain of the content producer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Device through which the user is interacting.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Browser user agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ua: Option<String>,

    /// Location of the device assumed to be the user's current location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,

    /// Standard "Do Not Track" flag as set in the header by the browser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnt: Option<i64>,

    /// "Limit Ad Tracking" signal commercially endorsed (e.g. iOS, Android).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lmt: Option<i64>,

    /// IPv4 address closest to the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// IP address closest to the device as IPv6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,

    /// The general type of device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devicetype: Option<DeviceType>,

    /// Device make, e.g. "Apple".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    /// Device model, e.g. "iPhone".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Device operating system, e.g. "iOS".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    /// Device operating system version, e.g. "3.1.2".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osv: Option<String>,

    /// Hardware version of the device, e.g. "5S" for iPhone 5S.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hwv: Option<String>,

    /// Physical height of the screen in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    /// Physical width of the screen in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    /// Screen size as pixels per linear inch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppi: Option<i64>,

    /// The ratio of physical pixels to device independent pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pxratio: Option<f64>,

    /// Support for JavaScript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<i64>,

    /// Indicates if the geolocation API will be available to JavaScript
    /// code running in the banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geofetch: Option<i64>,

    /// Version of Flash supported by the browser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flashver: Option<String>,

    /// Browser language using ISO-639-1-alpha-2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Carrier or ISP, e.g. "VERIZON", using exchange-curated names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// Mobile carrier as the concatenated MCC-MNC code, e.g. "310-005".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mccmnc: Option<String>,

    /// Network connection type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectiontype: Option<ConnectionType>,

    /// ID sanctioned for advertiser use in the clear (not hashed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ifa: Option<String>,

    /// Hardware device ID (e.g. IMEI), hashed via SHA1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub didsha1: Option<String>,

    /// Hardware device ID, hashed via MD5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub didmd5: Option<String>,

    /// Platform device ID (e.g. Android ID), hashed via SHA1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpidsha1: Option<String>,

    /// Platform device ID, hashed via MD5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpidmd5: Option<String>,

    /// MAC address of the device, hashed via SHA1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macsha1: Option<String>,

    /// MAC address of the device, hashed via MD5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macmd5: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Geographic location of the device or the user's home base, depending on
/// the parent object.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    /// Latitude from -90.0 to +90.0, where negative is south.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude from -180.0 to +180.0, where negative is west.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,

    /// Source of the location data; recommended when passing lat/lon.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,

    /// Estimated location accuracy in meters; recommended when lat/lon are
    /// derived from a device's location services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<i64>,

    /// Number of seconds since this geolocation fix was established.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastfix: Option<i64>,

    /// Service or provider used to determine geolocation from IP address,
    /// if applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipservice: Option<IpLocationService>,

    /// Country code using ISO-3166-1-alpha-3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Region code using ISO-3166-2; 2-letter state code if USA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Region of a country using FIPS 10-4 notation. Withdrawn by NIST in
    /// 2008 but still used here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regionfips104: Option<String>,

    /// Google metro code; similar to but not exactly Nielsen DMAs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro: Option<String>,

    /// City using United Nations Code for Trade and Transport Locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Zip or postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Local time as the number of +/- minutes from UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utcoffset: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Human user of the device; the advertising audience.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Exchange-specific ID for the user. At least one of `id` or
    /// `buyeruid` is recommended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Buyer-specific ID for the user as mapped by the exchange for the
    /// buyer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyeruid: Option<String>,

    /// Year of birth as a 4-digit integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yob: Option<i64>,

    /// Gender: "M" = male, "F" = female, "O" = known to be other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Comma-separated list of keywords, interests, or intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Optional feature to pass bidder data that was set in the exchange's
    /// cookie, in base85 cookie safe characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customdata: Option<String>,

    /// Location of the user's home base; not necessarily their current
    /// location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,

    /// Additional user data, each `Data` object representing a different
    /// data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Data>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Additional data about the related object (user or content) from a
/// specific data source.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    /// Exchange-specific ID for the data provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Array of `Segment` objects that contain the actual data values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<Vec<Segment>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Key-value data point from a data provider; the names and values are
/// entirely provider-specific.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// ID of the data segment specific to the data provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// String representation of the data segment value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Describes the nature and behavior of the entity that is the source of
/// the bid request upstream from the exchange.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Entity responsible for the final impression sale decision:
    /// 0 = exchange, 1 = upstream source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fd: Option<i64>,

    /// Transaction ID common across all participants in this bid request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,

    /// Payment ID chain string containing embedded syntax described in the
    /// TAG Payment ID Protocol v1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pchain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

/// Legal, governmental or industry regulations in force for the request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regs {
    /// Flag indicating if this request is subject to the COPPA regulations
    /// established by the USA FTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coppa: Option<i64>,

    /// Extensions such as GDPR applicability and US privacy signals land
    /// here per the IAB extension specs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

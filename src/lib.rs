//! Wire-model types for OpenRTB 2.5 and the Dynamic Native Ads API.
//!
//! This crate is the data model only: serde-annotated records matching the
//! published field lists key-for-key, plus the controlled-vocabulary code
//! sets. Transport, auction logic and spec-conformance policy live in the
//! consumer.
//!
//! Conventions, applied uniformly:
//!
//! - Optional fields are `Option<T>` and are omitted from the encoded form
//!   entirely when `None`, never emitted as `null` or zero.
//! - Spec defaults (e.g. `plcmtcnt` = 1) are documented, not applied by the
//!   decoder. Absent input stays absent through a round-trip.
//! - Code sets are open: transparent newtypes over `i64` with named
//!   constants. Unknown codes decode and re-encode verbatim.
//! - Unknown JSON keys are ignored on decode.
//! - `ext` fields are opaque `serde_json::Value` pass-throughs.
//! - [`validator::Validate`] implementations cover the rules the type
//!   system cannot express; they run only when asked (see
//!   [`decode_validated`]).

pub mod context;
pub mod enums;
pub mod error;
pub mod native;
pub mod request;
pub mod response;

pub use context::{
    App, Content, Data, Device, Geo, Producer, Publisher, Regs, Segment, Site, Source, User,
};
pub use error::{decode_validated, encode, Error};
pub use request::{Audio, Banner, BidRequest, Deal, Format, Imp, Metric, Native, Pmp, Video};
pub use response::{Bid, BidResponse, SeatBid};

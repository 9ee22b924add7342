use openrtb_model::enums::{
    AdPosition, ApiFramework, AuctionType, ConnectionType, DeviceType, NoBidReason,
};
use openrtb_model::{
    decode_validated, Banner, Bid, BidRequest, BidResponse, Error, Format, Imp, SeatBid,
};
use serde_json::json;
use validator::Validate;

#[test]
fn minimal_bid_request_encodes_only_required_keys() {
    let req = BidRequest {
        id: "r1".to_string(),
        imp: vec![Imp {
            id: "1".to_string(),
            banner: Some(Banner {
                w: Some(300),
                h: Some(250),
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    };
    let v = serde_json::to_value(&req).unwrap();
    let mut keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "imp"]);

    let imp = &v["imp"][0];
    let mut imp_keys: Vec<&str> = imp.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    imp_keys.sort_unstable();
    assert_eq!(imp_keys, vec!["banner", "id"]);
}

#[test]
fn full_bid_request_round_trips_without_extra_keys() {
    let payload = json!({
        "id": "80ce30c53c16e6ede735f123ef6e32361bfc7b22",
        "at": 1,
        "cur": ["USD"],
        "imp": [{
            "id": "1",
            "bidfloor": 0.5,
            "bidfloorcur": "USD",
            "secure": 1,
            "banner": {
                "w": 300,
                "h": 250,
                "pos": 1,
                "format": [{"w": 300, "h": 250}, {"w": 320, "h": 50}],
                "api": [3, 5],
                "battr": [8, 9]
            },
            "pmp": {
                "private_auction": 1,
                "deals": [{"id": "deal-1", "bidfloor": 2.5, "at": 3}]
            }
        }],
        "site": {
            "id": "102855",
            "domain": "example.com",
            "page": "https://example.com/article",
            "ref": "https://referrer.example.com/",
            "publisher": {"id": "8953", "name": "example"},
            "content": {"context": 5, "language": "en"}
        },
        "device": {
            "ua": "Mozilla/5.0",
            "ip": "123.145.167.10",
            "devicetype": 4,
            "connectiontype": 2,
            "geo": {"lat": 51.5, "lon": -0.125, "type": 2, "country": "GBR"}
        },
        "user": {"id": "55816b39711f9b5acf3b90e313ed29e51665623f"},
        "regs": {"coppa": 0},
        "source": {"fd": 0, "tid": "tx-1"},
        "tmax": 120
    });

    let req: BidRequest = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(req.at, Some(AuctionType::FIRST_PRICE));
    let device = req.device.as_ref().unwrap();
    assert_eq!(device.devicetype, Some(DeviceType::PHONE));
    assert_eq!(device.connectiontype, Some(ConnectionType::WIFI));
    let banner = req.imp[0].banner.as_ref().unwrap();
    assert_eq!(banner.pos, Some(AdPosition::ABOVE_THE_FOLD));
    assert_eq!(
        banner.api.as_deref(),
        Some(&[ApiFramework::MRAID_1, ApiFramework::MRAID_2][..])
    );
    assert_eq!(
        req.site.as_ref().unwrap().referrer.as_deref(),
        Some("https://referrer.example.com/")
    );

    // Every key in the input is modeled, so the re-encoded tree is equal:
    // nothing defaulted in, nothing dropped, nothing emitted as null.
    assert_eq!(serde_json::to_value(&req).unwrap(), payload);

    // And struct-level equality holds across a full encode/decode cycle.
    let cycled: BidRequest =
        serde_json::from_str(&serde_json::to_string(&req).unwrap()).unwrap();
    assert_eq!(cycled, req);
}

#[test]
fn validation_is_opt_in() {
    // Structurally fine, semantically empty: plain decoding accepts it.
    let req: BidRequest = serde_json::from_value(json!({"id": "r1", "imp": []})).unwrap();
    assert!(req.imp.is_empty());

    // The boundary helper rejects it.
    let err = decode_validated::<BidRequest>(br#"{"id":"r1","imp":[]}"#).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn imp_without_media_object_fails_validation() {
    let req = BidRequest {
        id: "r1".to_string(),
        imp: vec![Imp {
            id: "1".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };
    assert!(req.validate().is_err());
}

#[test]
fn format_rejects_non_positive_dimensions() {
    let format = Format {
        w: Some(0),
        h: Some(250),
        ..Default::default()
    };
    assert!(format.validate().is_err());

    let format = Format {
        wratio: Some(16),
        hratio: Some(9),
        wmin: Some(320),
        ..Default::default()
    };
    assert!(format.validate().is_ok());
}

#[test]
fn bid_response_round_trips() {
    let resp = BidResponse {
        id: "r1".to_string(),
        cur: Some("USD".to_string()),
        seatbid: Some(vec![SeatBid {
            seat: Some("seat-42".to_string()),
            bid: vec![Bid {
                id: "b1".to_string(),
                impid: "1".to_string(),
                price: 1.25,
                adm: Some("<div>ad</div>".to_string()),
                adomain: Some(vec!["advertiser.com".to_string()]),
                crid: Some("cr-9".to_string()),
                w: Some(300),
                h: Some(250),
                ..Default::default()
            }],
            ..Default::default()
        }]),
        ..Default::default()
    };
    let encoded = serde_json::to_string(&resp).unwrap();
    let decoded: BidResponse = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, resp);
}

#[test]
fn no_bid_with_unknown_reason_code_is_preserved() {
    let payload = json!({"id": "r1", "nbr": 8004});
    let resp: BidResponse = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(resp.nbr, Some(NoBidReason(8004)));
    assert!(resp.seatbid.is_none());
    assert_eq!(serde_json::to_value(&resp).unwrap(), payload);
}

#[test]
fn unknown_top_level_keys_are_discarded() {
    let req: BidRequest = serde_json::from_value(json!({
        "id": "r1",
        "imp": [{"id": "1", "banner": {}}],
        "fromthefuture": true
    }))
    .unwrap();
    assert_eq!(req.id, "r1");
    assert!(serde_json::to_value(&req)
        .unwrap()
        .get("fromthefuture")
        .is_none());
}

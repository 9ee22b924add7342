use openrtb_model::native::request::{Asset, Data, NativeRequest, Title};
use openrtb_model::native::{ContextType, DataAssetType, EventType, PlacementType};
use openrtb_model::{decode_validated, Error, Native};
use serde_json::json;
use validator::Validate;

fn minimal_native() -> Native {
    Native {
        request: r#"{"ver":"1.2","assets":[{"id":1,"title":{"len":90}}]}"#.to_string(),
        assets: vec![Asset {
            id: 1,
            title: Some(Title {
                len: 90,
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[test]
fn minimal_instance_encodes_only_required_keys() {
    let native = minimal_native();
    let v = serde_json::to_value(&native).unwrap();
    let mut keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["assets", "request"]);
}

#[test]
fn decoding_spec_example_yields_request_and_one_asset() {
    let payload = json!({
        "request": "{\"assets\":[{\"id\":1}]}",
        "assets": [{"id": 1}]
    });
    let native: Native = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(native.request, "{\"assets\":[{\"id\":1}]}");
    assert_eq!(native.assets.len(), 1);
    assert_eq!(native.assets[0].id, 1);

    // Re-encoding yields the same two keys with no extra fields present.
    let reencoded = serde_json::to_value(&native).unwrap();
    assert_eq!(reencoded, payload);
}

#[test]
fn absent_plcmtcnt_emits_no_key_and_explicit_zero_survives() {
    let mut native = minimal_native();
    let v = serde_json::to_value(&native).unwrap();
    assert!(v.get("plcmtcnt").is_none());
    assert!(v.get("seq").is_none());

    // Unlike the flattened omit-on-zero wire convention, an explicit zero
    // is representable and round-trips.
    native.plcmtcnt = Some(0);
    let v = serde_json::to_value(&native).unwrap();
    assert_eq!(v["plcmtcnt"], json!(0));
    let back: Native = serde_json::from_value(v).unwrap();
    assert_eq!(back.plcmtcnt, Some(0));
}

#[test]
fn populated_instance_round_trips_equal() {
    let native = Native {
        ver: Some("1.2".to_string()),
        api: Some(vec![openrtb_model::enums::ApiFramework::MRAID_2]),
        battr: Some(vec![openrtb_model::enums::CreativeAttribute(8)]),
        context: Some(ContextType::SOCIAL),
        plcmttype: Some(PlacementType::IN_FEED),
        plcmtcnt: Some(1),
        seq: Some(0),
        aurlsupport: Some(1),
        privacy: Some(1),
        ext: Some(json!({"vendor": {"flag": true}})),
        ..minimal_native()
    };
    let encoded = serde_json::to_string(&native).unwrap();
    let decoded: Native = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, native);
}

#[test]
fn unknown_enum_codes_are_preserved_verbatim() {
    let payload = json!({
        "request": "{}",
        "assets": [{"id": 1}],
        "context": 987,
        "plcmttype": 512
    });
    let native: Native = serde_json::from_value(payload).unwrap();
    assert_eq!(native.context, Some(ContextType(987)));
    assert_eq!(native.plcmttype, Some(PlacementType(512)));

    let reencoded = serde_json::to_value(&native).unwrap();
    assert_eq!(reencoded["context"], json!(987));
    assert_eq!(reencoded["plcmttype"], json!(512));
}

#[test]
fn unknown_keys_are_ignored_without_affecting_known_fields() {
    let payload = json!({
        "request": "{}",
        "assets": [{"id": 7}],
        "somefuturefield": {"nested": [1, 2, 3]},
        "ver": "1.2"
    });
    let native: Native = serde_json::from_value(payload).unwrap();
    assert_eq!(native.ver.as_deref(), Some("1.2"));
    assert_eq!(native.assets[0].id, 7);
    assert!(serde_json::to_value(&native)
        .unwrap()
        .get("somefuturefield")
        .is_none());
}

#[test]
fn deprecated_layout_coexists_with_context() {
    // A 1.0 producer populates layout/adunit, a 1.2 producer populates
    // context/plcmttype; both decode side by side without collapsing.
    let payload = json!({
        "request": "{}",
        "assets": [{"id": 1}],
        "layout": 3,
        "adunit": 2,
        "context": 1
    });
    let native: Native = serde_json::from_value(payload).unwrap();
    assert_eq!(native.layout, Some(openrtb_model::native::Layout::NEWS_FEED));
    assert_eq!(native.adunit, Some(openrtb_model::native::AdUnit(2)));
    assert_eq!(native.context, Some(ContextType::CONTENT));
}

#[test]
fn request_payload_parses_plain_and_enveloped_markup() {
    let mut native = minimal_native();
    let markup = native.request_payload().unwrap();
    assert_eq!(markup.ver.as_deref(), Some("1.2"));
    assert_eq!(markup.assets.len(), 1);

    native.request = r#"{"native":{"assets":[{"id":2,"data":{"type":2}}]}}"#.to_string();
    let markup = native.request_payload().unwrap();
    assert_eq!(markup.assets[0].id, 2);
    assert_eq!(
        markup.assets[0].data.as_ref().unwrap().asset_type,
        DataAssetType::DESC
    );

    native.request = "not json".to_string();
    assert!(matches!(native.request_payload(), Err(Error::Json(_))));
}

#[test]
fn validation_requires_request_and_assets() {
    let mut native = minimal_native();
    assert!(native.validate().is_ok());

    native.request = String::new();
    assert!(native.validate().is_err());

    let mut native = minimal_native();
    native.assets.clear();
    assert!(native.validate().is_err());
}

#[test]
fn markup_asset_requires_exactly_one_variant() {
    let markup = NativeRequest {
        assets: vec![Asset {
            id: 1,
            title: Some(Title {
                len: 25,
                ..Default::default()
            }),
            data: Some(Data {
                asset_type: DataAssetType::CTA_TEXT,
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    };
    assert!(markup.validate().is_err());
}

#[test]
fn markup_event_trackers_round_trip() {
    let payload = json!({
        "ver": "1.2",
        "assets": [{"id": 1, "img": {"type": 3, "wmin": 300, "hmin": 250}}],
        "eventtrackers": [{"event": 1, "methods": [1, 2]}],
        "privacy": 1
    });
    let markup: NativeRequest = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(markup.eventtrackers.as_ref().unwrap()[0].event, EventType::IMPRESSION);
    assert_eq!(serde_json::to_value(&markup).unwrap(), payload);
}

#[test]
fn response_markup_requires_link() {
    use openrtb_model::native::response::NativeResponse;

    // `link` is a required key; decoding without it is a structural failure.
    let err = serde_json::from_value::<NativeResponse>(json!({"assets": []})).unwrap_err();
    assert!(err.to_string().contains("link"));

    let resp: NativeResponse = serde_json::from_value(json!({
        "link": {"url": "https://example.com/click"},
        "assets": [{"id": 1, "title": {"text": "Sponsored"}}]
    }))
    .unwrap();
    assert_eq!(resp.link.url, "https://example.com/click");
    assert!(resp.validate().is_ok());
}

#[test]
fn decode_validated_combines_structure_and_rules() {
    let ok = decode_validated::<Native>(
        br#"{"request":"{}","assets":[{"id":1,"title":{"len":25}}]}"#,
    );
    assert!(ok.is_ok());

    let err = decode_validated::<Native>(br#"{"request":"{}","assets":[]}"#).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = decode_validated::<Native>(br#"{"assets":[]}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

use saved_views::{
    parse_legacy_saved_view, to_json_string, LegacyView, ParseError, TransformParameters,
    ViewMode,
};
use serde_json::json;

fn legacy_view(record: serde_json::Value) -> LegacyView {
    serde_json::from_value(record).expect("record must deserialize")
}

#[test]
fn full_record_maps_every_field() {
    let record = json!({
        "categorySelectorProps": { "categories": "+1+4+1*2" },
        "modelSelectorProps": { "models": ["0x20000000002"] },
        "displayStyleProps": {
            "jsonProperties": {
                "styles": {
                    "subCategoryOvr": [
                        { "subCategory": "0x5c", "color": 16711680 }
                    ]
                }
            }
        },
        "viewDefinitionProps": {
            "jsonProperties": {
                "viewDetails": {
                    "clip": [
                        { "shape": { "points": [[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [5.0, 5.0, 0.0]], "zlow": -2.0, "zhigh": 2.0 } },
                        { "planes": [{ "normal": [0.0, 0.0, 1.0], "dist": 1.25, "interior": true }] },
                        { "ellipsoid": { "center": [0.0, 0.0, 0.0] } }
                    ]
                }
            }
        },
        "emphasizeElementsProps": {
            "alwaysDrawn": ["0xa1"],
            "isAlwaysDrawnExclusive": false
        },
        "perModelCategoryVisibility": [
            { "modelId": "0x30", "categoryId": "0x31", "visible": true }
        ],
        "hiddenCategories": ["0x7e"]
    });

    let params = parse_legacy_saved_view(&legacy_view(record), ViewMode::FilterContent).unwrap();
    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(
        value,
        json!({
            "categories": ["0x1", "0x5", "0x6", "0x7"],
            "models": ["0x20000000002"],
            "alwaysDrawn": ["0xa1"],
            "isAlwaysDrawnExclusive": false,
            "subCategoryOvr": [ { "subCategory": "0x5c", "color": 16711680 } ],
            "clip": {
                "shapes": [
                    {
                        "points": [[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [5.0, 5.0, 0.0]],
                        "zlow": -2.0,
                        "zhigh": 2.0
                    }
                ],
                "planes": [
                    [ { "normal": [0.0, 0.0, 1.0], "dist": 1.25, "interior": true } ]
                ]
            },
            "perModelCategoryVisibility": [
                { "modelId": "0x30", "categoryId": "0x31", "visible": true }
            ],
            "hiddenCategories": ["0x7e"],
            "viewMode": "FilterContent"
        })
    );

    // Output key order is fixed regardless of which fields are present.
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "categories",
            "models",
            "alwaysDrawn",
            "isAlwaysDrawnExclusive",
            "subCategoryOvr",
            "clip",
            "perModelCategoryVisibility",
            "hiddenCategories",
            "viewMode",
        ]
    );
}

#[test]
fn minimal_record_yields_empty_lists_only() {
    let record = json!({
        "categorySelectorProps": {},
        "displayStyleProps": {},
        "viewDefinitionProps": {}
    });
    let params = parse_legacy_saved_view(&legacy_view(record), ViewMode::IncludeNewContent).unwrap();
    let json = to_json_string(&params, false).unwrap();
    assert_eq!(
        json,
        r#"{"categories":[],"models":[],"viewMode":"IncludeNewContent"}"#
    );
}

#[test]
fn only_unrecognized_clip_primitives_yield_no_clip() {
    let record = json!({
        "categorySelectorProps": {},
        "displayStyleProps": {},
        "viewDefinitionProps": {
            "jsonProperties": {
                "viewDetails": {
                    "clip": [ { "ellipsoid": {} }, { "planes": null } ]
                }
            }
        }
    });
    let params = parse_legacy_saved_view(&legacy_view(record), ViewMode::FilterContent).unwrap();
    assert!(params.clip.is_none());
}

#[test]
fn hidden_collections_track_source_presence() {
    let record = json!({
        "categorySelectorProps": {},
        "displayStyleProps": {},
        "viewDefinitionProps": {},
        "hiddenModels": []
    });
    let params = parse_legacy_saved_view(&legacy_view(record), ViewMode::FilterContent).unwrap();
    assert!(params.hidden_categories.is_none());
    assert_eq!(params.hidden_models, Some(Vec::new()));
}

#[test]
fn compressed_selector_decode_errors_propagate() {
    let record = json!({
        "categorySelectorProps": {},
        "modelSelectorProps": { "models": "+1+0" },
        "displayStyleProps": {},
        "viewDefinitionProps": {}
    });
    let err = parse_legacy_saved_view(&legacy_view(record), ViewMode::FilterContent).unwrap_err();
    assert!(matches!(err, ParseError::CompressedIds(_)));
}

#[test]
fn emphasize_fields_read_directly_from_the_record() {
    let record = json!({
        "categorySelectorProps": {},
        "displayStyleProps": {},
        "viewDefinitionProps": {},
        "emphasizeElementsProps": { "neverDrawn": ["0x9"] }
    });
    let params = parse_legacy_saved_view(&legacy_view(record), ViewMode::FilterContent).unwrap();
    assert_eq!(params.never_drawn, Some(vec!["0x9".to_string()]));
    assert!(params.always_drawn.is_none());
    assert!(params.is_always_drawn_exclusive.is_none());
    assert!(params.per_model_category_visibility.is_none());
}

#[test]
fn parsing_is_idempotent() {
    let record = json!({
        "categorySelectorProps": { "categories": "+1+4+1*2" },
        "modelSelectorProps": { "models": ["0x20000000002"] },
        "displayStyleProps": {
            "jsonProperties": {
                "styles": {
                    "subCategoryOvr": [ { "subCategory": "0x5c", "invisible": true } ]
                }
            }
        },
        "viewDefinitionProps": {
            "jsonProperties": {
                "viewDetails": {
                    "clip": [
                        { "planes": [{ "normal": [0.0, 0.0, 1.0], "dist": 1.25 }] },
                        { "shape": { "points": [[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [5.0, 5.0, 0.0]] } }
                    ]
                }
            }
        },
        "emphasizeElementsProps": {
            "neverDrawn": ["0x111"],
            "alwaysDrawn": ["0xa1"],
            "isAlwaysDrawnExclusive": true
        },
        "hiddenCategories": ["0x7e"],
        "hiddenModels": "+5"
    });
    let view = legacy_view(record);
    let first = parse_legacy_saved_view(&view, ViewMode::FilterContent).unwrap();
    let second = parse_legacy_saved_view(&view, ViewMode::FilterContent).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        to_json_string(&first, false).unwrap(),
        to_json_string(&second, false).unwrap()
    );
}

#[test]
fn rendered_parameters_round_trip() {
    let record = json!({
        "categorySelectorProps": { "categories": ["0x17"] },
        "displayStyleProps": {},
        "viewDefinitionProps": {},
        "hiddenCategories": "+5"
    });
    let params = parse_legacy_saved_view(&legacy_view(record), ViewMode::IncludeNewContent).unwrap();
    let json = to_json_string(&params, false).unwrap();
    let reparsed: TransformParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, params);
}

#[test]
fn escape_flag_prepares_parameters_for_embedding() {
    let record = json!({
        "categorySelectorProps": { "categories": ["0x17"] },
        "displayStyleProps": {},
        "viewDefinitionProps": {}
    });
    let params = parse_legacy_saved_view(&legacy_view(record), ViewMode::FilterContent).unwrap();
    let escaped = to_json_string(&params, true).unwrap();
    assert!(escaped.starts_with(r#"{\"categories\":"#));

    // Embedding the escaped text inside a quoted field produces valid JSON.
    let request = format!(r#"{{"comment":"x","params":"{escaped}"}}"#);
    let outer: serde_json::Value = serde_json::from_str(&request).unwrap();
    let inner: TransformParameters =
        serde_json::from_str(outer["params"].as_str().unwrap()).unwrap();
    assert_eq!(inner, params);
}

use live_document_core::store::seed::default_document;
use live_document_core::{
    BlockPatch, BlockType, Document, DocumentKind, NewDocument, NewSource, SourceKind,
    StoreConfig,
};
use serde_json::{json, Value};

#[test]
fn golden_document_field_names() {
    let doc = default_document();
    let value: Value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["id"], "1");
    assert_eq!(value["type"], "Live Document");
    assert_eq!(value["blocks"][0]["type"], "heading1");
    assert_eq!(value["blocks"][3]["type"], "bulletList");
    assert_eq!(value["blocks"][9]["properties"], json!({"author": "Market Analysis Team"}));
    assert_eq!(value["sources"][0]["citationNumber"], 1);
    assert_eq!(value["sources"][0]["usageCount"], 3);
    assert_eq!(value["sources"][1]["type"], "private");
    assert!(value["sources"][1].get("url").is_none());
    assert_eq!(value["metadata"]["folderId"], "folder-1");
    assert_eq!(value["metadata"]["lastModified"], "2025-10-18T00:00:00Z");
}

#[test]
fn golden_document_key_order() {
    let json_str = serde_json::to_string(&default_document()).unwrap();

    // "id" -> "title" -> "type" -> "blocks" -> "sources" -> "metadata"
    let keys = ["\"id\":", "\"title\":", "\"type\":", "\"blocks\":", "\"sources\":", "\"metadata\":"];
    let positions: Vec<usize> = keys.iter().map(|k| json_str.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn document_survives_json() {
    let doc = default_document();
    let back: Document = serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn ui_shaped_inputs_deserialize() {
    let input: NewDocument = serde_json::from_value(json!({
        "title": "Acquisition memo",
        "type": "M&A Profile",
        "blocks": [],
        "sources": []
    }))
    .unwrap();
    assert_eq!(input.kind, Some(DocumentKind::MandaProfile));

    let untyped: NewDocument = serde_json::from_value(json!({"title": "No type"})).unwrap();
    assert_eq!(untyped.kind, None);

    let source: NewSource = serde_json::from_value(json!({
        "title": "10-K",
        "type": "public",
        "url": "https://sec.gov/x"
    }))
    .unwrap();
    assert_eq!(source.kind, SourceKind::Public);
    assert_eq!(source.usage_count, None);

    let patch: BlockPatch = serde_json::from_value(json!({
        "type": "code",
        "properties": {"language": "rust", "lineNumbers": true, "indent": 4}
    }))
    .unwrap();
    assert_eq!(patch.block_type, Some(BlockType::Code));
    assert_eq!(patch.content, None);
    assert_eq!(patch.properties.unwrap().len(), 3);

    for properties in [
        json!({"width": 0.5}),
        json!({"rows": [["a", "b"]]}),
        json!({"caption": null}),
        json!({"crop": {"x": 0, "y": 12.25}}),
    ] {
        let patch: BlockPatch =
            serde_json::from_value(json!({ "properties": properties.clone() })).unwrap();
        let stored = patch.properties.unwrap();
        assert_eq!(serde_json::to_value(&stored).unwrap(), properties);
    }
}

#[test]
fn golden_config_serialization() {
    let value = serde_json::to_value(StoreConfig::v0()).unwrap();
    assert_eq!(
        value,
        json!({
            "default_folder_id": "default",
            "default_gradient": "from-blue-500 to-purple-600",
            "reorder_policy": "reject"
        })
    );
}

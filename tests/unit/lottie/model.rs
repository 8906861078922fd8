use super::*;

fn two_frame_doc() -> Animation {
    let names = [("a.png", "png"), ("b.jpg", "jpg")];
    Animation {
        version: FORMAT_VERSION.to_string(),
        frame_rate: Num(60.0),
        in_point: 0,
        out_point: 2,
        width: 4,
        height: 2,
        name: SEQUENCE_NAME.to_string(),
        three_d: 0,
        assets: names
            .iter()
            .enumerate()
            .map(|(i, (n, _))| ImageAsset {
                id: image_id(i),
                width: 4,
                height: 2,
                url_prefix: "images/".to_string(),
                file_name: n.to_string(),
                embedded: 0,
            })
            .collect(),
        layers: names
            .iter()
            .enumerate()
            .map(|(i, (n, ext))| ImageLayer {
                three_d: 0,
                index: i as u64 + 1,
                layer_type: IMAGE_LAYER_TYPE,
                name: n.to_string(),
                class: ext.to_string(),
                ref_id: image_id(i),
                stretch: 1,
                transform: LayerTransform {
                    position: StaticValue::point(2.0, 1.0),
                    anchor: StaticValue::point(2.0, 1.0),
                },
                auto_orient: 0,
                in_point: i as u64,
                out_point: i as u64 + 1,
                start_time: i as u64,
                blend_mode: 0,
            })
            .collect(),
    }
}

#[test]
fn serializes_with_fixed_keys_and_order() {
    let json = String::from_utf8(two_frame_doc().to_json_bytes(false).unwrap()).unwrap();
    let expected = concat!(
        r#"{"v":"5.5.9","fr":60,"ip":0,"op":2,"w":4,"h":2,"nm":"image-sequence","ddd":0,"#,
        r#""assets":[{"id":"image_0","w":4,"h":2,"u":"images/","p":"a.png","e":0},"#,
        r#"{"id":"image_1","w":4,"h":2,"u":"images/","p":"b.jpg","e":0}],"#,
        r#""layers":[{"ddd":0,"ind":1,"ty":2,"nm":"a.png","cl":"png","refId":"image_0","sr":1,"#,
        r#""ks":{"p":{"a":0,"k":[2,1,0]},"a":{"a":0,"k":[2,1,0]}},"ao":0,"ip":0,"op":1,"st":0,"bm":0},"#,
        r#"{"ddd":0,"ind":2,"ty":2,"nm":"b.jpg","cl":"jpg","refId":"image_1","sr":1,"#,
        r#""ks":{"p":{"a":0,"k":[2,1,0]},"a":{"a":0,"k":[2,1,0]}},"ao":0,"ip":1,"op":2,"st":1,"bm":0}]}"#,
    );
    assert_eq!(json, expected);
}

#[test]
fn num_prints_whole_values_as_integers() {
    assert_eq!(serde_json::to_string(&Num(940.0)).unwrap(), "940");
    assert_eq!(serde_json::to_string(&Num(940.5)).unwrap(), "940.5");
    assert_eq!(serde_json::to_string(&Num(29.97)).unwrap(), "29.97");
    let back: Num = serde_json::from_str("60").unwrap();
    assert_eq!(back, Num(60.0));
}

#[test]
fn json_round_trips_into_equal_model() {
    let doc = two_frame_doc();
    let pretty = doc.to_json_bytes(true).unwrap();
    let back = Animation::from_reader(pretty.as_slice()).unwrap();
    assert_eq!(back, doc);
    back.validate().unwrap();
}

#[test]
fn layer_at_finds_the_single_visible_layer() {
    let doc = two_frame_doc();
    assert_eq!(doc.layer_at(FrameIndex(0)).unwrap().name, "a.png");
    assert_eq!(doc.layer_at(FrameIndex(1)).unwrap().name, "b.jpg");
    assert!(doc.layer_at(FrameIndex(2)).is_none());
}

#[test]
fn validate_rejects_count_mismatch() {
    let mut doc = two_frame_doc();
    doc.out_point = 3;
    assert!(matches!(doc.validate(), Err(SeqError::Validation(_))));

    let mut doc = two_frame_doc();
    doc.assets.pop();
    assert!(doc.validate().is_err());
}

#[test]
fn validate_rejects_overlapping_or_gapped_intervals() {
    let mut doc = two_frame_doc();
    doc.layers[1].in_point = 0;
    assert!(doc.validate().is_err());

    let mut doc = two_frame_doc();
    doc.layers[0].out_point = 2;
    assert!(doc.validate().is_err());
}

#[test]
fn validate_rejects_broken_references() {
    let mut doc = two_frame_doc();
    doc.layers[0].ref_id = "image_1".to_string();
    assert!(doc.validate().is_err());

    let mut doc = two_frame_doc();
    doc.layers[1].index = 5;
    assert!(doc.validate().is_err());
}

#[test]
fn parse_error_is_serde() {
    let err = Animation::from_reader(&b"{\"v\":"[..]).unwrap_err();
    assert!(matches!(err, SeqError::Serde(_)));
}

#[test]
fn missing_file_is_a_read_error_with_source() {
    use std::error::Error as _;

    let path = std::path::PathBuf::from("target")
        .join("unit_model")
        .join("no_such_anim.json");
    let err = Animation::from_path(&path).unwrap_err();
    assert!(matches!(
        &err,
        SeqError::Read { path: p, source } if *p == path && source.kind() == std::io::ErrorKind::NotFound
    ));
    assert!(err.to_string().contains("no_such_anim.json"));
    assert!(err.source().is_some());
}

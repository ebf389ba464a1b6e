//! Tests for documents and host configuration

use std::io::{Read, Write};

use flate2::{Compression, read::GzDecoder, write::GzEncoder};
use nbt_edit::{
    Compound, Config, Document, Endian, Error, ErrorKind, NamedTag, TagID, Value, encode_binary,
};

fn level() -> Document {
    Document::from_text(
        r#"{Data: {LevelName: "World", Time: 24000L, SpawnX: 8, GameRules: {doDaylightCycle: "true"}}}"#,
    )
    .unwrap()
}

#[test]
fn test_from_text() {
    let doc = level();
    assert_eq!(doc.name, "");
    assert!(doc.has("Data"));
    assert_eq!(*doc.get_path("Data.Time").unwrap(), Value::Long(24000));
}

#[test]
fn test_root_must_be_compound() {
    let err = Document::from_text("[1, 2]").unwrap_err();
    assert!(matches!(err, Error::InvalidDocument(TagID::List)));
    assert_eq!(err.kind(), ErrorKind::InvalidDocument);

    let tag = NamedTag::new("x", Value::Int(1));
    let bytes = encode_binary(&tag).unwrap();
    assert_eq!(
        Document::from_binary(&bytes, &Config::default())
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidDocument
    );
    assert!(Document::try_from(tag).is_err());
}

#[test]
fn test_binary_round_trip() {
    let mut doc = level();
    doc.name = "level".into();
    for endian in [Endian::Big, Endian::Little] {
        let config = Config {
            endian,
            ..Config::default()
        };
        let bytes = doc.to_binary(&config).unwrap();
        assert_eq!(Document::from_binary(&bytes, &config).unwrap(), doc);
    }
}

#[test]
fn test_binary_matches_named_tag() {
    let mut doc = level();
    doc.name = "root".into();
    let bytes = doc.to_binary(&Config::default()).unwrap();
    let tag: NamedTag = doc.clone().into();
    assert_eq!(bytes, encode_binary(&tag).unwrap());
    assert_eq!(&bytes[..7], [10, 0, 4, b'r', b'o', b'o', b't']);
    assert_eq!(Document::try_from(tag).unwrap(), doc);
}

#[test]
fn test_little_endian_layout() {
    let mut root = Compound::new();
    root.add("v", Value::Short(0x0102)).unwrap();
    let doc = Document::new("", root);
    let config = Config {
        endian: Endian::Little,
        pretty: false,
    };
    let bytes = doc.to_binary(&config).unwrap();
    assert_eq!(bytes, [10, 0, 0, 2, 1, 0, b'v', 2, 1, 0]);
}

#[test]
fn test_text_output() {
    let doc = Document::from_text("{a: 1b, b: {c: [I; 1]}}").unwrap();
    let compact = Config {
        pretty: false,
        ..Config::default()
    };
    assert_eq!(doc.to_text(&compact), "{a:1b,b:{c:[I;1]}}");
    assert_eq!(
        doc.to_text(&Config::default()),
        "{\n  a: 1b,\n  b: {\n    c: [I;\n      1\n    ]\n  }\n}"
    );
    assert_eq!(Document::from_text(&doc.to_text(&Config::default())).unwrap(), doc);
}

#[test]
fn test_edit_through_deref() {
    let mut doc = level();
    doc.set_path("Data.SpawnX", Value::Int(-16)).unwrap();
    doc.add("Version", Value::Int(19133)).unwrap();
    doc.get_compound_mut("Data").unwrap().remove("GameRules").unwrap();
    assert_eq!(
        doc.get_path("Data.GameRules").unwrap_err().kind(),
        ErrorKind::KeyError
    );
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.into_tag().id(), TagID::Compound);
}

#[test]
fn test_gzip_file() {
    let doc = level();
    let config = Config::default();

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&doc.to_binary(&config).unwrap()).unwrap();
    let compressed = encoder.finish().unwrap();
    assert_eq!(&compressed[..2], [0x1f, 0x8b]);

    let mut raw = Vec::new();
    GzDecoder::new(&compressed[..]).read_to_end(&mut raw).unwrap();
    assert_eq!(Document::from_binary(&raw, &config).unwrap(), doc);
}

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(config.pretty);
    assert_eq!(config.endian, Endian::Big);
}

#[cfg(feature = "serde")]
#[test]
fn test_config_from_json() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());

    let config: Config = serde_json::from_str(r#"{"pretty": false, "endian": "little"}"#).unwrap();
    assert_eq!(
        config,
        Config {
            pretty: false,
            endian: Endian::Little
        }
    );
    assert!(serde_json::from_str::<Config>(r#"{"endian": "middle"}"#).is_err());
    assert_eq!(
        serde_json::to_string(&Config::default()).unwrap(),
        r#"{"pretty":true,"endian":"big"}"#
    );
}

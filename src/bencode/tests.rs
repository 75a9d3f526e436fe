use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

#[test]
fn decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
}

#[test]
fn decode_integer_rejects_non_canonical() {
    assert!(decode(b"i-0e").is_err());
    assert!(decode(b"i03e").is_err());
    assert!(decode(b"i-03e").is_err());
    assert!(decode(b"ie").is_err());
    assert!(decode(b"i1.5e").is_err());
}

#[test]
fn decode_byte_string() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(decode(b"0:").unwrap(), Value::Bytes(Bytes::new()));
}

#[test]
fn decode_byte_string_truncated() {
    assert_eq!(decode(b"10:short"), Err(BencodeError::UnexpectedEof(8)));
    assert!(decode(b"4spam").is_err());
}

#[test]
fn decode_list() {
    let value = decode(b"l4:spami42ee").unwrap();
    let list = value.as_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].as_str(), Some("spam"));
    assert_eq!(list[1].as_integer(), Some(42));
}

#[test]
fn decode_dict() {
    let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    let dict = value.as_dict().unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(
        value.get(b"cow").and_then(Value::as_str),
        Some("moo")
    );
}

#[test]
fn decode_unterminated_containers() {
    assert!(decode(b"l4:spam").is_err());
    assert!(decode(b"d3:cow3:moo").is_err());
    assert!(decode(b"d").is_err());
}

#[test]
fn decode_rejects_non_string_dict_key() {
    assert_eq!(decode(b"di1e3:mooe"), Err(BencodeError::NonStringKey(1)));
}

#[test]
fn decode_rejects_trailing_data() {
    assert_eq!(decode(b"i42ei0e"), Err(BencodeError::TrailingData(4)));
}

#[test]
fn decode_rejects_deep_nesting() {
    let mut data = Vec::new();
    data.extend(std::iter::repeat(b'l').take(200));
    data.extend(std::iter::repeat(b'e').take(200));
    assert_eq!(decode(&data), Err(BencodeError::NestingTooDeep(64)));
}

#[test]
fn encode_scalars() {
    assert_eq!(encode(&Value::Integer(42)), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)), b"i-42e");
    assert_eq!(encode(&Value::string("spam")), b"4:spam");
    assert_eq!(encode(&Value::Bytes(Bytes::new())), b"0:");
}

#[test]
fn encode_dict_sorts_keys() {
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"zz"), Value::Integer(2));
    dict.insert(Bytes::from_static(b"aa"), Value::Integer(1));
    assert_eq!(encode(&Value::Dict(dict)), b"d2:aai1e2:zzi2ee");
}

#[test]
fn round_trip_is_byte_exact() {
    // Shaped like a real fastresume file: known path keys plus fields this
    // crate never interprets, including binary data.
    let samples: &[&[u8]] = &[
        b"d12:qBt-savePath8:/mnt/old9:save_path8:/mnt/olde",
        b"d4:infod5:filesl4:a.fl4:b.gzee9:save_path3:/tme",
        b"d4:blob4:\x00\x01\xfe\xff6:pieces2:ok5:zdictd1:xli1ei2eeee",
        b"li1ei-2e4:spamld0:0:eee",
    ];

    for sample in samples {
        let value = decode(sample).unwrap();
        assert_eq!(encode(&value), *sample);
    }
}

#[test]
fn value_mutation_helpers() {
    let mut value = decode(b"d4:keep2:ok9:save_path4:/olde").unwrap();

    let old = value.insert("save_path", Value::string("/new"));
    assert_eq!(old.and_then(|v| v.as_str().map(String::from)), Some("/old".into()));
    assert_eq!(value.get(b"save_path").and_then(Value::as_str), Some("/new"));

    // Untouched keys survive the edit.
    assert_eq!(value.get(b"keep").and_then(Value::as_str), Some("ok"));

    // insert on a non-dictionary is a no-op.
    let mut int = Value::Integer(1);
    assert_eq!(int.insert("k", Value::Integer(2)), None);
    assert_eq!(int, Value::Integer(1));
}

use super::value::Value;

/// Encodes a bencode value into a byte vector.
///
/// Encoding cannot fail: every [`Value`] has exactly one canonical wire
/// form, and dictionaries iterate in sorted key order straight out of the
/// backing map. For any value produced by [`super::decode`], encoding
/// reproduces the original bytes.
///
/// # Examples
///
/// ```
/// use qbtmv::bencode::{encode, Value};
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("spam")), b"4:spam");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(value, &mut buf);
    buf
}

fn encode_into(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => {
            buf.push(b'i');
            buf.extend_from_slice(i.to_string().as_bytes());
            buf.push(b'e');
        }
        Value::Bytes(b) => {
            buf.extend_from_slice(b.len().to_string().as_bytes());
            buf.push(b':');
            buf.extend_from_slice(b);
        }
        Value::List(items) => {
            buf.push(b'l');
            for item in items {
                encode_into(item, buf);
            }
            buf.push(b'e');
        }
        Value::Dict(entries) => {
            buf.push(b'd');
            for (key, val) in entries {
                buf.extend_from_slice(key.len().to_string().as_bytes());
                buf.push(b':');
                buf.extend_from_slice(key);
                encode_into(val, buf);
            }
            buf.push(b'e');
        }
    }
}

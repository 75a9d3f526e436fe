use bytes::Bytes;
use std::collections::BTreeMap;

/// A bencode value.
///
/// Dictionaries are backed by a [`BTreeMap`], so keys are always held in the
/// sorted order bencode mandates on the wire. Decoding and re-encoding a
/// canonical document is therefore byte-stable.
///
/// # Examples
///
/// ```
/// use qbtmv::bencode::Value;
///
/// let mut root = Value::Dict(Default::default());
/// root.insert("save_path", Value::string("/mnt/data"));
///
/// assert_eq!(root.get(b"save_path").and_then(Value::as_str), Some("/mnt/data"));
/// assert_eq!(root.get(b"missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string; not necessarily valid UTF-8.
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte-string keys, sorted by key.
    Dict(BTreeMap<Bytes, Value>),
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Returns the value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string.
    ///
    /// `None` if the value is not a byte string or the bytes are not UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a mutable list, if it is one.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary, if it is one.
    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the value as a mutable dictionary, if it is one.
    pub fn as_dict_mut(&mut self) -> Option<&mut BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key, if this value is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Looks up a key mutably, if this value is a dictionary.
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut Value> {
        self.as_dict_mut()?.get_mut(key)
    }

    /// Inserts a key into this value if it is a dictionary.
    ///
    /// Returns the previous value for the key, or `None` if the key was
    /// absent or this value is not a dictionary (non-dictionaries are left
    /// untouched).
    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        self.as_dict_mut()?
            .insert(Bytes::copy_from_slice(key.as_bytes()), value)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<Bytes, Value>> for Value {
    fn from(d: BTreeMap<Bytes, Value>) -> Self {
        Value::Dict(d)
    }
}

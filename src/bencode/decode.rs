use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Resume files nest a handful of levels at most; anything deeper is either
/// corrupt or hostile.
const MAX_DEPTH: usize = 64;

/// Decodes a single bencode value from `data`.
///
/// The whole input must be consumed; trailing bytes after the value are an
/// error, since a resume file is exactly one dictionary.
///
/// # Errors
///
/// Returns a [`BencodeError`] describing what went wrong and at which byte
/// offset: truncation, non-canonical integers (leading zeros, `-0`),
/// unterminated containers, non-string dictionary keys, or excessive nesting.
///
/// # Examples
///
/// ```
/// use qbtmv::bencode::{decode, Value};
///
/// let value = decode(b"l4:spami42ee").unwrap();
/// assert_eq!(value.as_list().map(|l| l.len()), Some(2));
///
/// assert!(decode(b"i42e junk").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut decoder = Decoder { data, pos: 0 };
    let value = decoder.value(0)?;

    if decoder.pos != data.len() {
        return Err(BencodeError::TrailingData(decoder.pos));
    }

    Ok(value)
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Decoder<'_> {
    fn peek(&self) -> Result<u8, BencodeError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(BencodeError::UnexpectedEof(self.pos))
    }

    fn value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        if depth > MAX_DEPTH {
            return Err(BencodeError::NestingTooDeep(MAX_DEPTH));
        }

        match self.peek()? {
            b'i' => self.integer(),
            b'l' => self.list(depth),
            b'd' => self.dict(depth),
            b'0'..=b'9' => self.byte_string().map(Value::Bytes),
            byte => Err(BencodeError::UnexpectedByte {
                offset: self.pos,
                byte,
            }),
        }
    }

    /// Consumes bytes up to (not including) the next occurrence of `stop`.
    fn take_until(&mut self, stop: u8) -> Result<&[u8], BencodeError> {
        let start = self.pos;
        while self.peek()? != stop {
            self.pos += 1;
        }
        Ok(&self.data[start..self.pos])
    }

    fn integer(&mut self) -> Result<Value, BencodeError> {
        let offset = self.pos;
        self.pos += 1;

        let digits = self.take_until(b'e')?;
        let text = std::str::from_utf8(digits).map_err(|_| BencodeError::InvalidInteger {
            offset,
            reason: "not ascii".into(),
        })?;

        if text.is_empty() {
            return Err(BencodeError::InvalidInteger {
                offset,
                reason: "empty".into(),
            });
        }

        // Canonical form only: no leading zeros, no negative zero.
        if text == "-0" || (text.len() > 1 && (text.starts_with('0') || text.starts_with("-0"))) {
            return Err(BencodeError::InvalidInteger {
                offset,
                reason: "leading zeros".into(),
            });
        }

        let value: i64 = text.parse().map_err(|_| BencodeError::InvalidInteger {
            offset,
            reason: text.into(),
        })?;

        self.pos += 1; // consume 'e'
        Ok(Value::Integer(value))
    }

    fn byte_string(&mut self) -> Result<Bytes, BencodeError> {
        let offset = self.pos;

        let digits = self.take_until(b':')?;
        let len: usize = std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(BencodeError::InvalidStringLength(offset))?;

        self.pos += 1; // consume ':'

        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(BencodeError::UnexpectedEof(self.data.len()))?;

        let bytes = Bytes::copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(bytes)
    }

    fn list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut items = Vec::new();

        while self.peek()? != b'e' {
            items.push(self.value(depth + 1)?);
        }

        self.pos += 1;
        Ok(Value::List(items))
    }

    fn dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut entries = BTreeMap::new();

        while self.peek()? != b'e' {
            if !self.peek()?.is_ascii_digit() {
                return Err(BencodeError::NonStringKey(self.pos));
            }
            let key = self.byte_string()?;
            let value = self.value(depth + 1)?;
            entries.insert(key, value);
        }

        self.pos += 1;
        Ok(Value::Dict(entries))
    }
}

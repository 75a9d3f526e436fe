//! Bencode encoding and decoding (BEP-3).
//!
//! `.fastresume` files are bencode dictionaries, the same serialization
//! BitTorrent uses for `.torrent` files and tracker responses. Four types
//! exist: integers (`i42e`), byte strings (`4:spam`), lists (`l...e`) and
//! dictionaries (`d...e`, keys sorted lexicographically).
//!
//! The codec here is deliberately dumb about key names: domain knowledge
//! (which keys hold save paths) lives in [`crate::resume`]. What matters at
//! this layer is fidelity - for canonical input, `encode(&decode(data)?)`
//! reproduces `data` byte for byte, so fields we never touch survive a
//! load/rewrite/save cycle unchanged.
//!
//! # Examples
//!
//! ```
//! use qbtmv::bencode::{decode, encode, Value};
//!
//! let value = decode(b"d9:save_path8:/mnt/olde").unwrap();
//! assert_eq!(value.get(b"save_path").and_then(Value::as_str), Some("/mnt/old"));
//! assert_eq!(encode(&value), b"d9:save_path8:/mnt/olde");
//! ```

mod decode;
mod encode;
mod error;
mod value;

pub use decode::decode;
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;

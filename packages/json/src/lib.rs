//! JSON codec for confreg
//!
//! Install a [`JsonCodec`] on a registry before loading or saving any type
//! whose descriptor declares `Format::JSON`.
//!
//! ```rust
//! use confreg_core::FormatCodec;
//! use confreg_json::JsonCodec;
//! use serde_json::json;
//!
//! let codec = JsonCodec::pretty();
//! let text = codec.encode(&json!({"volume": 7})).unwrap();
//! assert_eq!(codec.decode(&text).unwrap(), json!({"volume": 7}));
//! ```

mod codec;

pub use codec::JsonCodec;

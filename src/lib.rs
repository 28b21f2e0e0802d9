//! Validation and lossless conversion between UTF-8, [WTF-8] and UTF-16.
//!
//! WTF-8 is UTF-8 extended to also encode surrogate code points on their own.
//! That makes it a byte representation for *any* sequence of 16-bit units,
//! including the ill-formed UTF-16 that shows up in platform wide strings
//! (Windows paths, JavaScript strings) where a surrogate may lack its partner.
//! Converting such a sequence to WTF-8 and back is always lossless, and when
//! the units happen to be well-formed UTF-16 the WTF-8 bytes are plain UTF-8.
//!
//! The crate has three layers, all plain functions over borrowed slices:
//!
//! - validators ([`is_utf8`], [`is_wtf8`], [`is_utf16`] and their `check_*`
//!   forms reporting where validation stopped),
//! - size estimators ([`convert_size`], [`narrow_len`], [`wide_len`]) giving
//!   the exact length of a conversion without allocating,
//! - transcoders, either writing into a caller-sized buffer
//!   ([`convert_to_narrow`], [`convert_to_wide`]) or allocating the result
//!   ([`to_narrow_string`], [`to_wide_string`], [`to_wtf8`], [`to_utf16`]).
//!
//! Every function is generic over the storage type of its units, see
//! [`NarrowUnit`] and [`WideUnit`].
//!
//! ```
//! use wtf8_codec::{is_utf8, is_wtf8, to_utf16, to_wtf8};
//!
//! let units = [0x61, 0xD800, 0x62];
//! let bytes = to_wtf8(&units);
//! assert_eq!(bytes, b"a\xed\xa0\x80b");
//! assert!(is_wtf8(&bytes) && !is_utf8(&bytes));
//! assert_eq!(to_utf16(&bytes).unwrap(), units);
//! ```
//!
//! [WTF-8]: https://simonsapin.github.io/wtf-8

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::precedence)]

extern crate alloc;

mod code_point;
pub mod error;
pub mod size;
pub mod transcode;
pub mod unit;
pub mod validate;

pub use error::{Encoding, InvalidSequence};
pub use size::{ConvertSize, convert_size, narrow_len, wide_len};
pub use transcode::{
    convert_to_narrow, convert_to_wide, to_narrow_string, to_utf16, to_wide_string, to_wtf8,
};
pub use unit::{NarrowUnit, WideUnit};
pub use validate::{check_utf8, check_utf16, check_wtf8, is_utf8, is_utf16, is_wtf8};

//! A sort-preserving numeric codec.
//!
//! Encodes numeric strings (decimal or base-36) into opaque tokens such
//! that byte-wise lexicographic comparison of two tokens matches numeric
//! comparison of the two original numbers, and decodes tokens back into
//! a canonical numeric string. A mixed-text convenience encoder applies
//! the same transform to every digit run found in free-form text, so
//! that the containing strings sort by the numbers' natural values.
//!
//! The crate is purely computational: no I/O, no network surface, no
//! wire format. Every public item is a pure function or a small struct
//! that owns its own scratch state; nothing here is reentrant across
//! threads (see [`codec::Codec`]'s docs).
#![deny(clippy::all)]

mod alphabet;
mod classify;
mod codec;
mod float_base;
mod mixed_text;

pub use alphabet::{flip, forward, is_digit, reverse, value, MAX_DIGIT, MAX_MAG_DIGIT};
pub use classify::NumericView;
pub use codec::{
    decode, encode, Codec, Orientation, Sign, GREATER_THAN_ANY, INTEXT_SEPARATOR, LESS_THAN_ANY,
    NEG_TERMINATOR, ZERO_TOKEN,
};
pub use float_base::{FloatBaseConverter, DEFAULT_DEC_DECIMALS};
pub use mixed_text::encode_mixed_text;

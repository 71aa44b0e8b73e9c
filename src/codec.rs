//! The encoder and decoder: the sortable-token codec itself.
//!
//! See `spec.md` §4.C/§4.D for the algorithms and §6 for the token
//! grammar. The sign-byte assignment below follows `SPEC_FULL.md` §2,
//! which resolves a prose inconsistency in `spec.md` against its own
//! worked examples.

use crate::alphabet::{flip, is_digit, value, MAX_DIGIT, MAX_MAG_DIGIT};
use crate::classify::NumericView;

/// The single-byte token for numeric zero.
pub const ZERO_TOKEN: &str = "5";

/// A bare byte string strictly less than every encoded token.
pub const LESS_THAN_ANY: &str = "3";

/// A bare byte string strictly greater than every encoded token.
pub const GREATER_THAN_ANY: &str = "7";

/// Appended to every negative token; sorts greater than every digit.
pub const NEG_TERMINATOR: u8 = b'~';

/// Emitted by the mixed-text encoder to fence tokens from surrounding
/// text; sorts less than every digit.
pub const INTEXT_SEPARATOR: u8 = b' ';

/// The four sign bytes, ordered exactly as they must sort:
/// `NegMagPos < NegMagNeg < PosMagNeg < PosMagPos` around `ZERO_TOKEN`.
///
/// Modelled as a `#[repr(u8)]` enum with [`num_enum::TryFromPrimitive`],
/// the same idiom the teacher crate uses for `Alphabet` and `Opcode`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, num_enum::TryFromPrimitive)]
#[repr(u8)]
pub enum Sign {
    /// Negative number, `|x| >= 1`. Doubles as [`LESS_THAN_ANY`] when
    /// used alone.
    NegMagPos = b'3',

    /// Negative number, `|x| < 1`.
    NegMagNeg = b'4',

    /// Positive number, `|x| < 1`.
    PosMagNeg = b'6',

    /// Positive number, `|x| >= 1`. Doubles as [`GREATER_THAN_ANY`] when
    /// used alone.
    PosMagPos = b'7',
}

impl Sign {
    /// Selects the sign byte for a given `(positive, magnitude_positive)`
    /// pair, per `SPEC_FULL.md` §2.
    pub const fn select(positive: bool, magnitude_positive: bool) -> Self {
        match (positive, magnitude_positive) {
            (true, true) => Sign::PosMagPos,
            (true, false) => Sign::PosMagNeg,
            (false, false) => Sign::NegMagNeg,
            (false, true) => Sign::NegMagPos,
        }
    }

    pub const fn byte(self) -> u8 {
        self as u8
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Sign::PosMagNeg | Sign::PosMagPos)
    }

    pub const fn magnitude_positive(self) -> bool {
        matches!(self, Sign::NegMagPos | Sign::PosMagPos)
    }

    /// Magnitude digit orientation: `Forward` iff sign and magnitude
    /// signs agree.
    pub const fn orientation(self) -> Orientation {
        if self.is_positive() == self.magnitude_positive() {
            Orientation::Forward
        } else {
            Orientation::Reverse
        }
    }
}

/// Which alphabet direction a magnitude digit is emitted/read in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    fn emit(self, raw: u8) -> u8 {
        match self {
            Orientation::Forward => crate::alphabet::forward(raw),
            Orientation::Reverse => crate::alphabet::reverse(raw),
        }
    }

    fn read(self, byte: u8) -> u8 {
        let v = value(byte);
        match self {
            Orientation::Forward => v,
            Orientation::Reverse => MAX_DIGIT - v,
        }
    }
}

/// A reusable encoder/decoder instance.
///
/// Owns one growable scratch buffer, reused across calls (`spec.md` §5);
/// not reentrant — one instance must not be shared across concurrent
/// calls. Use the free functions [`encode`]/[`decode`] for one-off calls.
#[derive(Default)]
pub struct Codec {
    buf: Vec<u8>,
}

impl Codec {
    pub fn new() -> Self {
        Codec { buf: Vec::new() }
    }

    /// Encodes `input` into a sortable token. See `spec.md` §4.C.
    pub fn encode(&mut self, input: &str) -> Option<String> {
        let view = NumericView::classify(input)?;
        self.buf.clear();

        if view.empty {
            return Some(String::new());
        }
        if view.zero {
            return Some(ZERO_TOKEN.to_string());
        }

        let sign = Sign::select(view.positive, view.magnitude_positive);
        let negative = !view.positive;
        let int_sig = view.int_sig();
        let frac_sig = view.frac_sig();

        self.buf
            .reserve(estimated_encoded_len(view.magnitude, int_sig.len(), frac_sig.len(), negative));
        self.buf.push(sign.byte());
        push_magnitude(&mut self.buf, view.magnitude, sign.orientation());
        push_digits(&mut self.buf, int_sig, negative);
        push_digits(&mut self.buf, frac_sig, negative);
        if negative {
            self.buf.push(NEG_TERMINATOR);
        }

        String::from_utf8(self.buf.clone()).ok()
    }

    /// Decodes `token` back into its canonical numeric string. See
    /// `spec.md` §4.D.
    pub fn decode(&mut self, token: &str) -> Option<String> {
        let bytes = token.as_bytes();

        if bytes.is_empty() {
            return Some(String::new());
        }
        if token == ZERO_TOKEN {
            return Some("0".to_string());
        }
        if bytes.len() < 3 {
            return None;
        }

        let sign = Sign::try_from(bytes[0]).ok()?;
        let negative = !sign.is_positive();

        let body = if negative {
            if *bytes.last()? != NEG_TERMINATOR {
                return None;
            }
            &bytes[1..bytes.len() - 1]
        } else {
            &bytes[1..]
        };

        let (magnitude, consumed) = read_magnitude(body, sign.orientation())?;
        let sig = &body[consumed..];
        if sig.iter().any(|&b| !is_digit(b)) {
            return None;
        }

        self.buf.clear();
        if negative {
            self.buf.push(b'-');
        }

        if sign.magnitude_positive() {
            let len = sig.len();
            if magnitude >= len {
                push_digits(&mut self.buf, sig, negative);
                self.buf.extend(std::iter::repeat(b'0').take(magnitude - len));
            } else {
                push_digits(&mut self.buf, &sig[..magnitude], negative);
                self.buf.push(b'.');
                push_digits(&mut self.buf, &sig[magnitude..], negative);
            }
        } else {
            self.buf.extend_from_slice(b"0.");
            self.buf.extend(std::iter::repeat(b'0').take(magnitude));
            push_digits(&mut self.buf, sig, negative);
        }

        String::from_utf8(self.buf.clone()).ok()
    }
}

fn estimated_encoded_len(magnitude: usize, int_len: usize, frac_len: usize, negative: bool) -> usize {
    let mag_bytes = magnitude / MAX_MAG_DIGIT as usize + 1;
    1 + mag_bytes + int_len + frac_len + usize::from(negative)
}

fn push_magnitude(buf: &mut Vec<u8>, magnitude: usize, orientation: Orientation) {
    let mut m = magnitude;
    while m >= MAX_MAG_DIGIT as usize {
        buf.push(orientation.emit(MAX_DIGIT));
        m -= MAX_MAG_DIGIT as usize;
    }
    buf.push(orientation.emit(m as u8));
}

/// Returns `(magnitude, bytes_consumed)`, or `None` if no terminator
/// byte is found before `body` ends.
fn read_magnitude(body: &[u8], orientation: Orientation) -> Option<(usize, usize)> {
    let mut total = 0usize;
    let mut i = 0usize;
    loop {
        let byte = *body.get(i)?;
        let raw = orientation.read(byte);
        i += 1;
        if raw == MAX_DIGIT {
            total += MAX_MAG_DIGIT as usize;
            continue;
        }
        total += raw as usize;
        return Some((total, i));
    }
}

fn push_digits(buf: &mut Vec<u8>, digits: &[u8], flip_digits: bool) {
    if flip_digits {
        buf.extend(digits.iter().map(|&b| flip(b)));
    } else {
        buf.extend_from_slice(digits);
    }
}

/// Encodes `input` into a sortable token.
///
/// Returns `None` iff `input` is malformed. Returns `Some("")` for empty
/// input and `Some(ZERO_TOKEN)` for numeric zero.
pub fn encode(input: &str) -> Option<String> {
    Codec::new().encode(input)
}

/// Decodes `token` back into its canonical numeric string.
///
/// Returns `None` iff `token` is malformed.
pub fn decode(token: &str) -> Option<String> {
    Codec::new().decode(token)
}

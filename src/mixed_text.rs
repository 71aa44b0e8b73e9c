//! Scans arbitrary text and replaces every maximal run of decimal digits
//! with its encoded token, fencing each token with [`INTEXT_SEPARATOR`]
//! bytes so that lexicographic comparison of the surrounding text still
//! matches numeric comparison of the replaced runs. See `spec.md` §4.E.

use crate::codec::{encode, INTEXT_SEPARATOR};

/// Encodes every maximal run of ASCII decimal digits in `input` in
/// place.
///
/// Returns `(result, true)` if every run encoded successfully, or
/// `(result, false)` if at least one run was malformed — a malformed run
/// is passed through verbatim and scanning continues (`spec.md` §7).
pub fn encode_mixed_text(input: &str) -> (String, bool) {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut ok = true;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let run = &input[start..i];

            match encode(run) {
                Some(token) => {
                    if start == 0 || bytes[start - 1] != INTEXT_SEPARATOR {
                        out.push(INTEXT_SEPARATOR);
                    }
                    out.extend_from_slice(token.as_bytes());
                    if i == bytes.len() || bytes[i] != INTEXT_SEPARATOR {
                        out.push(INTEXT_SEPARATOR);
                    }
                }
                None => {
                    out.extend_from_slice(run.as_bytes());
                    ok = false;
                }
            }
        } else {
            let start = i;
            while i < bytes.len() && !bytes[i].is_ascii_digit() {
                i += 1;
            }
            out.extend_from_slice(&bytes[start..i]);
        }
    }

    (String::from_utf8(out).expect("only ASCII bytes were inserted or re-sliced from a str"), ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fences_a_single_run() {
        let (out, ok) = encode_mixed_text("Canon EOS D300");
        assert!(ok);
        assert!(out.starts_with("Canon EOS D"));
        assert!(out.contains(&format!("{}{}{}", ' ', encode("300").unwrap(), ' ')));
    }

    #[test]
    fn does_not_double_fence_existing_separators() {
        let (out, ok) = encode_mixed_text("a 300 b");
        assert!(ok);
        assert_eq!(out, format!("a {} b", encode("300").unwrap()));
    }

    #[test]
    fn no_digits_is_passthrough() {
        let (out, ok) = encode_mixed_text("no digits here");
        assert!(ok);
        assert_eq!(out, "no digits here");
    }

    #[test]
    fn orders_by_numeric_value_of_the_run() {
        let (a, _) = encode_mixed_text("Canon EOS D300");
        let (b, _) = encode_mixed_text("Canon EOS D1000");
        assert!(a < b, "{a:?} should sort before {b:?}");
    }

    #[test]
    fn multiple_runs_each_get_fenced() {
        let (out, ok) = encode_mixed_text("v1.2 build300");
        assert!(ok);
        assert!(out.contains(&format!("{} ", encode("1").unwrap())));
        assert!(out.contains(&format!("{} ", encode("2").unwrap())));
        assert!(out.contains(&format!("{} ", encode("300").unwrap())));
    }

    #[test]
    fn non_ascii_text_passes_through_unchanged() {
        let (out, ok) = encode_mixed_text("café 300 déjà vu");
        assert!(ok);
        assert!(out.starts_with("café "));
        assert!(out.ends_with(" déjà vu"));
        assert!(out.contains(&encode("300").unwrap()));
    }
}

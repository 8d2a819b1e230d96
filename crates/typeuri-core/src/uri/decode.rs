//! Percent-decoding for query components and paths.

use percent_encoding::{percent_decode, percent_decode_str};

use crate::error::{DecodeFailure, InvalidArgument};

/// Decodes a query key or value with form rules: `+` is a space and every
/// `%` must start a two-digit hex escape. The result must be UTF-8.
pub(crate) fn decode_form_component(input: &str) -> Result<String, InvalidArgument> {
    if let Some(offset) = find_malformed_escape(input) {
        return Err(InvalidArgument::decode(
            input,
            DecodeFailure::MalformedEscape(offset),
        ));
    }

    let bytes: Vec<u8> = input
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();

    percent_decode(&bytes)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| InvalidArgument::decode(input, DecodeFailure::InvalidUtf8))
}

/// Percent-decodes the whole query before it is split into parameters.
///
/// Malformed escapes pass through untouched and are caught later by
/// [`decode_form_component`]; the decoded bytes must be UTF-8.
pub(crate) fn decode_query_text(input: &str) -> Result<String, InvalidArgument> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| InvalidArgument::decode(input, DecodeFailure::InvalidUtf8))
}

/// Percent-decodes path or query text for display; never fails.
pub(crate) fn decode_lossy(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

fn find_malformed_escape(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Some(i);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidArgumentKind;

    fn failure(input: &str) -> DecodeFailure {
        match decode_form_component(input).unwrap_err().kind {
            InvalidArgumentKind::Decode { reason, .. } => reason,
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(decode_form_component("java").unwrap(), "java");
        assert_eq!(decode_form_component("").unwrap(), "");
    }

    #[test]
    fn plus_and_escapes() {
        assert_eq!(decode_form_component("a+b").unwrap(), "a b");
        assert_eq!(decode_form_component("a%2Bb").unwrap(), "a+b");
        assert_eq!(decode_form_component("caf%C3%A9").unwrap(), "café");
        assert_eq!(decode_form_component("x%3dy").unwrap(), "x=y");
    }

    #[test]
    fn malformed_escape_rejected() {
        assert_eq!(failure("%"), DecodeFailure::MalformedEscape(0));
        assert_eq!(failure("ab%4"), DecodeFailure::MalformedEscape(2));
        assert_eq!(failure("%41%zz"), DecodeFailure::MalformedEscape(3));
    }

    #[test]
    fn non_utf8_rejected() {
        assert_eq!(failure("%FF"), DecodeFailure::InvalidUtf8);
    }

    #[test]
    fn query_text_decodes_escapes_but_keeps_plus_and_bad_escapes() {
        assert_eq!(decode_query_text("k%3Dv&a=%26b").unwrap(), "k=v&a=&b");
        assert_eq!(decode_query_text("q=100%25").unwrap(), "q=100%");
        assert_eq!(decode_query_text("a+b=%zz").unwrap(), "a+b=%zz");
        assert!(decode_query_text("l=%E0%A4").is_err());
    }

    #[test]
    fn lossy_keeps_plus_and_replaces_bad_bytes() {
        assert_eq!(decode_lossy("a+b%20c"), "a+b c");
        assert_eq!(decode_lossy("%FF"), "\u{FFFD}");
    }
}

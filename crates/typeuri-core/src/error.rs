//! Error type for building a [`TypeUri`](crate::uri::TypeUri).

use thiserror::Error;

/// Returned when a URI cannot be wrapped: the text is not a valid URI, or a
/// query key/value cannot be decoded. Accessors never fail once a facade
/// has been built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument: {kind}")]
pub struct InvalidArgument {
    pub kind: InvalidArgumentKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgumentKind {
    /// The URI parser rejected the text.
    #[error("malformed URI: {0}")]
    Parse(url::ParseError),
    /// A query key or value could not be percent-decoded.
    #[error("cannot decode query component `{input}`: {reason}")]
    Decode { input: String, reason: DecodeFailure },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// `%` not followed by two hex digits, at the given byte offset.
    #[error("malformed percent-escape at byte {0}")]
    MalformedEscape(usize),
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

impl InvalidArgument {
    pub(crate) fn decode(input: &str, reason: DecodeFailure) -> Self {
        Self {
            kind: InvalidArgumentKind::Decode {
                input: input.to_string(),
                reason,
            },
        }
    }

    /// The parser diagnostic, when construction failed while parsing text.
    pub fn parse_error(&self) -> Option<url::ParseError> {
        match self.kind {
            InvalidArgumentKind::Parse(e) => Some(e),
            InvalidArgumentKind::Decode { .. } => None,
        }
    }
}

impl From<url::ParseError> for InvalidArgument {
    fn from(e: url::ParseError) -> Self {
        Self {
            kind: InvalidArgumentKind::Parse(e),
        }
    }
}

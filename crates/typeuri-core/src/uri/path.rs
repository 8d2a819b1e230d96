//! Path segment extraction.

use url::Url;

use super::decode::decode_lossy;

/// Splits the decoded path of `url` into its non-empty segments.
///
/// Leading, trailing and repeated `/` produce no segments. URIs without a
/// hierarchical path (e.g. `mailto:`) yield an empty list.
pub(crate) fn path_segments(url: &Url) -> Vec<String> {
    if url.cannot_be_a_base() || url.path().is_empty() {
        return Vec::new();
    }
    decode_lossy(url.path())
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::RhetoricTag;

/// Any `fr-` opening marker, known to the vocabulary or not.
static MARKUP_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<fr-[a-z]+>").unwrap());

/// Inner text of every `<tag>...</tag>` span in `text`, untrimmed.
///
/// Spans are non-overlapping and shortest-match: each open marker closes at
/// the first following close marker, and scanning resumes after it. Nested
/// same-tag markup is not recognised, so `<t>a<t>b</t>c</t>` yields `a<t>b`.
/// An open marker with no close after it ends the scan.
pub fn tagged_spans(text: &str, tag: RhetoricTag) -> Vec<&str> {
    let open = tag.open_marker();
    let close = tag.close_marker();

    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(start) = text[pos..].find(&open) {
        let inner_start = pos + start + open.len();
        let Some(len) = text[inner_start..].find(&close) else {
            break;
        };
        spans.push(&text[inner_start..inner_start + len]);
        pos = inner_start + len + close.len();
    }
    spans
}

/// Number of `<fr-...>` opening markers in `text`.
pub fn count_markup_tags(text: &str) -> usize {
    MARKUP_OPEN.find_iter(text).count()
}

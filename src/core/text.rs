// src/core/text.rs
//
// Marker scanning primitives. Spans are byte offsets into an immutable
// document; reported sizes are character counts.

/// (start, end) byte offsets of one marker occurrence.
pub type Span = (usize, usize);

/// First occurrence of `marker` at or after `from`. Case-sensitive, exact
/// substring match — no tag or nesting awareness.
pub fn marker_span(doc: &str, marker: &str, from: usize) -> Option<Span> {
    let start = doc.get(from..)?.find(marker)? + from;
    Some((start, start + marker.len()))
}

/// Last occurrence of `marker`.
pub fn last_span(doc: &str, marker: &str) -> Option<Span> {
    let start = doc.rfind(marker)?;
    Some((start, start + marker.len()))
}

/// Character count, not bytes. Sizes are reported the way a person
/// counting the document would count them.
pub fn count_chars(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_span_finds_leftmost_from_offset() {
        let doc = "a</x>b</x>c";
        assert_eq!(marker_span(doc, "</x>", 0), Some((1, 5)));
        assert_eq!(marker_span(doc, "</x>", 5), Some((6, 10)));
        assert_eq!(marker_span(doc, "</x>", 7), None);
    }

    #[test]
    fn marker_span_out_of_range_start_is_none() {
        assert_eq!(marker_span("abc", "b", 99), None);
    }

    #[test]
    fn last_span_picks_final_occurrence() {
        let doc = "a</x>b</x>c";
        assert_eq!(last_span(doc, "</x>"), Some((6, 10)));
        assert_eq!(last_span(doc, "</y>"), None);
    }

    #[test]
    fn count_chars_is_not_byte_length() {
        assert_eq!(count_chars("abc"), 3);
        assert_eq!(count_chars("αβγ"), 3);
        assert_ne!("αβγ".len(), 3);
    }
}

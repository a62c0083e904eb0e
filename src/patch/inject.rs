// src/patch/inject.rs

use std::error::Error;

use super::{require_marker, Outcome, PatchResult};
use crate::core::text::{count_chars, last_span, marker_span, Span};

/// Which side of the anchor the snippet lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Place {
    Before,
    After,
}

/// Which occurrence of the anchor to splice at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occurrence {
    First,
    Last,
}

/// One snippet splice, anchored on a literal substring.
pub struct Insertion<'a> {
    /// Short name for log lines.
    pub label: &'a str,
    pub anchor: &'a str,
    pub place: Place,
    pub occurrence: Occurrence,
    pub snippet: &'a str,
    /// Substring whose presence proves the snippet is already in place.
    /// Empty disables the check.
    pub guard: &'a str,
}

/// Splice `ins.snippet` into `doc` at the selected side of the selected
/// anchor occurrence. A document that already carries the guard substring
/// is reported canonical and left untouched, so re-running a batch never
/// doubles a snippet.
pub fn insert(doc: &str, ins: &Insertion) -> Result<PatchResult, Box<dyn Error>> {
    require_marker(ins.anchor, "anchor")?;

    if !ins.guard.is_empty() && doc.contains(ins.guard) {
        return Ok(PatchResult::unchanged(Outcome::AlreadyCanonical));
    }

    let span: Option<Span> = match ins.occurrence {
        Occurrence::First => marker_span(doc, ins.anchor, 0),
        Occurrence::Last => last_span(doc, ins.anchor),
    };
    let Some((start, end)) = span else {
        logd!("insert {}: anchor {:?} absent", ins.label, ins.anchor);
        return Ok(PatchResult::unchanged(Outcome::NoMarker));
    };

    let at = match ins.place {
        Place::Before => start,
        Place::After => end,
    };
    let out = join!(&doc[..at], ins.snippet, &doc[at..]);

    Ok(PatchResult {
        text: Some(out),
        outcome: Outcome::Inserted { added: count_chars(ins.snippet) },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ins<'a>(anchor: &'a str, place: Place, occurrence: Occurrence, guard: &'a str) -> Insertion<'a> {
        Insertion { label: "test", anchor, place, occurrence, snippet: "+X+", guard }
    }

    #[test]
    fn before_first_occurrence() {
        let r = insert("a<hr>b<hr>c", &ins("<hr>", Place::Before, Occurrence::First, "")).unwrap();
        assert_eq!(r.text.as_deref(), Some("a+X+<hr>b<hr>c"));
        assert_eq!(r.outcome, Outcome::Inserted { added: 3 });
    }

    #[test]
    fn after_first_occurrence() {
        let r = insert("a<hr>b<hr>c", &ins("<hr>", Place::After, Occurrence::First, "")).unwrap();
        assert_eq!(r.text.as_deref(), Some("a<hr>+X+b<hr>c"));
    }

    #[test]
    fn before_last_occurrence() {
        let r = insert("a<hr>b<hr>c", &ins("<hr>", Place::Before, Occurrence::Last, "")).unwrap();
        assert_eq!(r.text.as_deref(), Some("a<hr>b+X+<hr>c"));
    }

    #[test]
    fn guard_present_means_already_canonical() {
        let r = insert("a+X+<hr>b", &ins("<hr>", Place::Before, Occurrence::First, "+X+")).unwrap();
        assert_eq!(r.outcome, Outcome::AlreadyCanonical);
        assert!(r.text.is_none());
    }

    #[test]
    fn missing_anchor_reports_no_marker() {
        let r = insert("plain text", &ins("</body>", Place::Before, Occurrence::Last, "")).unwrap();
        assert_eq!(r.outcome, Outcome::NoMarker);
        assert!(r.text.is_none());
    }

    #[test]
    fn added_count_is_characters_not_bytes() {
        let mut i = ins("<hr>", Place::After, Occurrence::First, "");
        i.snippet = "αβγ";
        let r = insert("a<hr>b", &i).unwrap();
        assert_eq!(r.outcome, Outcome::Inserted { added: 3 });
        assert_eq!(r.text.as_deref(), Some("a<hr>αβγb"));
    }

    #[test]
    fn empty_anchor_is_an_error() {
        assert!(insert("doc", &ins("", Place::Before, Occurrence::First, "")).is_err());
    }
}

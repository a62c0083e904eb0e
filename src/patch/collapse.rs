// src/patch/collapse.rs

use std::error::Error;

use super::{require_marker, Outcome, PatchResult};
use crate::core::text::{count_chars, marker_span};

/// Remove everything between the first and second occurrences of `marker`,
/// second occurrence included. Everything up to and including the first
/// occurrence, and everything after the second occurrence's end, is carried
/// over byte for byte. Only the first pair is considered; a third or later
/// occurrence stays in the output untouched.
///
/// A result shorter than `min_len` characters is discarded and the original
/// kept — the guard against truncating a page to near-zero size. Pass 0 to
/// disable the guard.
pub fn collapse(doc: &str, marker: &str, min_len: usize) -> Result<PatchResult, Box<dyn Error>> {
    require_marker(marker, "marker")?;

    let Some(first) = marker_span(doc, marker, 0) else {
        return Ok(PatchResult::unchanged(Outcome::NoMarker));
    };
    let Some(second) = marker_span(doc, marker, first.1) else {
        // A single occurrence is the desired end state.
        return Ok(PatchResult::unchanged(Outcome::AlreadyCanonical));
    };

    let removed = count_chars(&doc[first.1..second.0]);
    let out = join!(&doc[..first.1], &doc[second.1..]);

    let len = count_chars(&out);
    if len < min_len {
        return Ok(PatchResult::unchanged(Outcome::Rejected { len }));
    }

    Ok(PatchResult {
        text: Some(out),
        outcome: Outcome::Fixed { removed },
    })
}

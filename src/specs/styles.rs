// src/specs/styles.rs

use std::error::Error;

use crate::config::consts::STYLE_CLOSE;
use crate::patch::{self, PatchResult};

/// Pages that shipped with a duplicated style block: an orphaned run of
/// CSS rules between the real `</style>` and a stray second one.
pub const PAGES: &[&str] = &["about.html", "contact.html", "experience.html", "stack.html"];

/// Collapse the duplicate: everything between the first two `</style>`
/// tags goes, stray tag included. Pages with zero or one tag are already
/// in the desired state.
pub fn apply(doc: &str, min_len: usize) -> Result<PatchResult, Box<dyn Error>> {
    patch::collapse(doc, STYLE_CLOSE, min_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Outcome;

    #[test]
    fn collapses_orphaned_css_between_style_tags() {
        let doc = "<style>body { margin: 0; }</style>.ghost { opacity: 0; }</style><body>x</body>";
        let r = apply(doc, 0).unwrap();
        assert_eq!(r.outcome, Outcome::Fixed { removed: 22 });
        assert_eq!(
            r.text.as_deref(),
            Some("<style>body { margin: 0; }</style><body>x</body>")
        );
    }

    #[test]
    fn canonical_page_is_untouched() {
        let doc = "<style>body { margin: 0; }</style><body>x</body>";
        let r = apply(doc, 0).unwrap();
        assert_eq!(r.outcome, Outcome::AlreadyCanonical);
    }
}

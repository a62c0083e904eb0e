// src/specs/scroll_top.rs

use std::error::Error;

use crate::config::consts::{BODY_CLOSE, STYLE_CLOSE};
use crate::patch::{self, Insertion, Occurrence, Outcome, PatchResult, Place};

/// The one page the floating button ships on.
pub const PAGES: &[&str] = &["index.html"];

/// Button styling, spliced into the page's stylesheet.
const BUTTON_CSS: &str = r#"
        /* ===== FLOATING SCROLL TO TOP BUTTON ===== */
        .scroll-top-btn {
            position: fixed;
            bottom: 30px;
            right: 30px;
            width: 50px;
            height: 50px;
            border-radius: 50%;
            background: linear-gradient(135deg, #3b82f6 0%, #1e40af 100%);
            border: 2px solid rgba(255, 255, 255, 0.1);
            color: white;
            cursor: pointer;
            display: flex;
            align-items: center;
            justify-content: center;
            opacity: 0;
            visibility: hidden;
            transform: translateY(20px);
            transition: all 0.3s ease;
            z-index: 999;
            box-shadow: 0 8px 32px rgba(59, 130, 246, 0.3);
            backdrop-filter: blur(10px);
        }

        .scroll-top-btn:hover {
            transform: translateY(-5px);
            box-shadow: 0 12px 40px rgba(59, 130, 246, 0.5);
            background: linear-gradient(135deg, #2563eb 0%, #1e3a8a 100%);
        }

        .scroll-top-btn:active {
            transform: translateY(-2px);
        }

        .scroll-top-btn.show {
            opacity: 1;
            visibility: visible;
            transform: translateY(0);
        }

        .scroll-top-btn .arrow-icon {
            width: 24px;
            height: 24px;
            animation: bounceArrow 1.5s ease-in-out infinite;
        }

        @keyframes bounceArrow {
            0%, 100% {
                transform: translateY(0);
            }
            50% {
                transform: translateY(-6px);
            }
        }

        @media (max-width: 767px) {
            .scroll-top-btn {
                bottom: 20px;
                right: 20px;
                width: 45px;
                height: 45px;
            }

            .scroll-top-btn .arrow-icon {
                width: 20px;
                height: 20px;
            }
        }
"#;

/// The button element itself, parked just before `</body>`.
const BUTTON_HTML: &str = r#"
    <!-- Floating Scroll To Top Button -->
    <button id="scrollTopBtn" class="scroll-top-btn" title="Scroll to top">
        <svg class="arrow-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <polyline points="18 15 12 9 6 15"></polyline>
        </svg>
    </button>
"#;

/// Show-on-scroll and smooth-scroll behavior.
const BUTTON_JS: &str = r#"
    <script>
        const scrollTopBtn = document.getElementById('scrollTopBtn');

        window.addEventListener('scroll', () => {
            if (window.pageYOffset > 300) {
                scrollTopBtn.classList.add('show');
            } else {
                scrollTopBtn.classList.remove('show');
            }
        });

        scrollTopBtn.addEventListener('click', () => {
            window.scrollTo({
                top: 0,
                behavior: 'smooth'
            });
        });
    </script>
"#;

/// The three splices, in application order. CSS anchors on the *last*
/// `</style>` so a page whose duplicate block is still uncollapsed can't
/// end up with the button styles inside the span the styles task removes.
/// Markup goes in before `</body>`, then the script lands between the
/// button and `</body>`.
fn insertions() -> [Insertion<'static>; 3] {
    [
        Insertion {
            label: "button-css",
            anchor: STYLE_CLOSE,
            place: Place::Before,
            occurrence: Occurrence::Last,
            snippet: BUTTON_CSS,
            guard: ".scroll-top-btn {",
        },
        Insertion {
            label: "button-html",
            anchor: BODY_CLOSE,
            place: Place::Before,
            occurrence: Occurrence::Last,
            snippet: BUTTON_HTML,
            guard: r#"id="scrollTopBtn""#,
        },
        Insertion {
            label: "button-js",
            anchor: BODY_CLOSE,
            place: Place::Before,
            occurrence: Occurrence::Last,
            snippet: BUTTON_JS,
            guard: "getElementById('scrollTopBtn')",
        },
    ]
}

/// Run all three splices against one document. Any missing anchor leaves
/// the page untouched rather than half-patched; a page already carrying
/// every snippet is canonical. Otherwise the outcome reports the summed
/// character count of what went in.
pub fn apply(doc: &str) -> Result<PatchResult, Box<dyn Error>> {
    let mut text: Option<String> = None;
    let mut added = 0usize;

    for ins in insertions() {
        let current = text.as_deref().unwrap_or(doc);
        let PatchResult { text: new_text, outcome } = patch::insert(current, &ins)?;
        match outcome {
            Outcome::Inserted { added: n } => {
                added += n;
                text = new_text;
            }
            Outcome::AlreadyCanonical => {}
            Outcome::NoMarker => {
                return Ok(PatchResult::unchanged(Outcome::NoMarker));
            }
            other => return Ok(PatchResult::unchanged(other)),
        }
    }

    match text {
        Some(out) => Ok(PatchResult {
            text: Some(out),
            outcome: Outcome::Inserted { added },
        }),
        // Every splice was guarded off: the button is fully in place.
        None => Ok(PatchResult::unchanged(Outcome::AlreadyCanonical)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> String {
        s!("<html><head>\n    <style>\n        body { margin: 0; }\n    </style>\n</head>\n<body>\n    <main>portfolio</main>\n</body>\n</html>\n")
    }

    #[test]
    fn injects_css_markup_and_script() {
        let r = apply(&sample_page()).unwrap();
        let out = r.text.unwrap();

        assert!(matches!(r.outcome, Outcome::Inserted { .. }));
        assert!(out.contains(".scroll-top-btn {"));
        assert!(out.contains(r#"id="scrollTopBtn""#));
        assert!(out.contains("getElementById('scrollTopBtn')"));

        // CSS inside the stylesheet, button and script inside the body,
        // script after the button.
        assert!(out.find(".scroll-top-btn {").unwrap() < out.find("</style>").unwrap());
        let body_close = out.rfind("</body>").unwrap();
        let button = out.find(r#"id="scrollTopBtn""#).unwrap();
        let script = out.find("<script>").unwrap();
        assert!(button < script && script < body_close);
    }

    #[test]
    fn second_application_is_canonical() {
        let once = apply(&sample_page()).unwrap().text.unwrap();
        let again = apply(&once).unwrap();
        assert_eq!(again.outcome, Outcome::AlreadyCanonical);
        assert!(again.text.is_none());
    }

    #[test]
    fn added_count_sums_all_three_snippets() {
        let r = apply(&sample_page()).unwrap();
        let want = BUTTON_CSS.chars().count()
            + BUTTON_HTML.chars().count()
            + BUTTON_JS.chars().count();
        assert_eq!(r.outcome, Outcome::Inserted { added: want });
    }

    #[test]
    fn page_without_body_tag_is_left_untouched() {
        let r = apply("<style>body { margin: 0; }</style>no body close").unwrap();
        assert_eq!(r.outcome, Outcome::NoMarker);
        assert!(r.text.is_none());
    }

    #[test]
    fn page_without_stylesheet_is_left_untouched() {
        let r = apply("<html><body>content</body></html>").unwrap();
        assert_eq!(r.outcome, Outcome::NoMarker);
        assert!(r.text.is_none());
    }
}

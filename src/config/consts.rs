// src/config/consts.rs

// Site layout
pub const DEFAULT_SITE_DIR: &str = ".";

// Markers
pub const STYLE_CLOSE: &str = "</style>";
pub const BODY_CLOSE: &str = "</body>";

// Safety: a rewrite shorter than this many characters is discarded.
// The real pages are tens of kilobytes; anything under this is a page
// that lost its body, not a page that lost a duplicate block.
pub const MIN_OUTPUT_CHARS: usize = 100;

// Local debug log
pub const LOG_FILE: &str = ".site_patch/debug.log";

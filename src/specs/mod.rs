// src/specs/mod.rs
//! # Patch "specs" module
//!
//! This module hosts the **page-specific patch specifications** for the
//! site. Each spec focuses on one fix and encodes *where the patch lands
//! in its pages*: which files it applies to, which literal anchors locate
//! the splice points, and the snippet/threshold constants involved.
//!
//! ## What lives here
//! - **Pure text transforms** built on the `patch` operations (collapse,
//!   insert) and the `core::text` scanning helpers.
//! - **Anchor choice** (e.g., splice CSS before the *last* `</style>` so a
//!   still-duplicated page can't swallow the addition into the block the
//!   styles task is about to remove).
//! - The **built-in page lists** each fix shipped against.
//!
//! ## What does **not** live here
//! - **File I/O and batch sequencing** — `runner` owns reading, writing and
//!   per-page outcome isolation.
//! - **Console reporting** — the `Progress` implementations.
//!
//! Specs transform one in-memory document and report a structured
//! `Outcome`; everything else is someone else's job.

pub mod scroll_top;
pub mod styles;

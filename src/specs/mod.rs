// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the movie site: *where the ground truth lives in the
//! HTML* and *how to pull it out*.
//!
//! ## What lives here
//! - **Search results** (`search`): the `/find/` listing → ordered [`Candidate`]s,
//!   plus the rule for picking one (exact year first, else the first result).
//! - **Title pages** (`title`): the detail page → description text, through two
//!   named [`title::DescriptionStrategy`]s (full plot summary, then meta description).
//!
//! ## What does **not** live here
//! - **Pacing, progress, output** – that's `runner`.
//! - **Transport** – specs only see the [`Fetch`] trait, never a concrete client.
//!
//! ## Typical call chain
//! ```text
//! runner → specs::search::resolve() → Fetch::get(/find/?q=…)
//!        → specs::title::describe() → Fetch::get(/title/tt…/)
//! ```
//!
//! ## Conventions
//! - Misses are values (`None`, placeholder text), not errors. A failed request is
//!   logged and treated as "no data" for that record.
//! - Selectors are listed newest layout first; older layouts are fallbacks.
//! - Parsing functions take `&str` documents so they can be tested offline.
//!
//! [`Candidate`]: crate::data::Candidate
//! [`Fetch`]: crate::core::Fetch
pub mod search;
pub mod title;

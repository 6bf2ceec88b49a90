//! BARKEDLOGY - literature search front end for the space biology knowledge
//! engine.
//!
//! A Dioxus web application with three pages (home, search results, article
//! detail) backed by the search API. Pure client logic lives in
//! `barkedlogy_core`; this crate owns the components and the browser glue.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: the shipping target; `localStorage` persists state
//!   between pages and navigation goes through `window.location`
//! - **Native**: host builds for tests, with an in-memory store and no-op
//!   DOM hooks

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod storage;

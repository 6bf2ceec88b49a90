//! # BARKEDLOGY Core
//!
//! Platform-independent client logic for the BARKEDLOGY literature search
//! front end.
//!
//! Everything that does not touch the DOM lives here so it can be compiled
//! and tested on the host as well as on `wasm32`. The web application in the
//! `barkedlogy` crate wires these pieces to Dioxus components.
//!
//! ## Modules
//!
//! - [`api`] - HTTP client for the article, cluster and association endpoints
//! - [`models`] - Article, cluster and association records as served by the API
//! - [`clusters`] - Cluster id normalization, thumbnails and suggested filters
//! - [`state`] - Search term, cluster filter and pagination offset
//! - [`session`] - Search and "load more" transitions over [`state::SearchState`]
//! - [`storage`] - Durable key-value storage contract and typed accessors
//! - [`autocomplete`] - Debounced suggestion widget state machine
//! - [`routing`] - Page detection from the current location
//! - [`config`] - Production configuration constants
//! - [`error`] - Error types for API and storage operations

#![forbid(unsafe_code)]

pub mod api;
pub mod autocomplete;
pub mod clusters;
pub mod config;
pub mod error;
pub mod models;
pub mod routing;
pub mod session;
pub mod state;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::{ApiClient, ReqwestTransport, Transport};
pub use error::{ApiError, StoreError};
pub use models::{Article, ArticlesPage, Cluster};
pub use routing::Page;
pub use state::SearchState;

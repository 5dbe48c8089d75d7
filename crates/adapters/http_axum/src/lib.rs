//! # navhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API**: admin routes under `/api/admin`, the public
//!   search, click and settings routes under `/api`
//! - Guard admin routes with a bearer-token check that runs before any body
//!   parsing or validation
//! - Wrap results in the `{success, data, message}` envelope and map errors
//!   to `{success: false, error}` with the right status code
//! - Optionally serve the compiled dashboard from a directory on disk
//!
//! ## Dependency rule
//! Depends on `navhub-app` (for port traits and services) and `navhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;

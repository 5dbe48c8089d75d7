//! # navhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CategoryRepository` — create, get, list, count categories
//!   - `ServiceRepository` — create, update, list, search, count, click tracking
//!   - `SettingsRepository` — read the site settings table
//!   - `AdminVerifier` — decide whether a request carries admin credentials
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DirectoryService` — admin listing/creation, public search, stats, clicks
//!   - `CategoryService` — category management
//!   - `SettingsService` — site settings with degraded-mode fallback
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `navhub-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

//! # navhub-domain
//!
//! Pure domain model for the navhub web directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Categories** (named groupings with a linkable slug)
//! - Define **Services** (directory entries) and their validated create payload
//! - Define **Site settings** (key/value rows resolved over built-in defaults)
//! - Define the **search query** and **directory statistics** value objects
//! - Define the **listing card** icon-loading state machine used by the front-end
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod category;
pub mod listing_card;
pub mod search;
pub mod service;
pub mod setting;
pub mod stats;

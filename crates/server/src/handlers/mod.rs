//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `promptdoc-server`.
//! `general` holds the service endpoints and `documents` the generation endpoints.

pub mod documents;
pub mod general;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use documents::*;
pub use general::*;

// Shared items used by multiple handler modules.
use super::{
    errors::AppError,
    state::AppState,
    types::{AppJson, MessageResponse},
};

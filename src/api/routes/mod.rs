//! API Route Handlers
//!
//! Each submodule contains handlers for a group of endpoints.

pub mod entries;
pub mod health;
pub mod markers;

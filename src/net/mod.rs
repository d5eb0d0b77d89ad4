//! Network layer: wire types and HTTP helpers for the generation service.

pub mod api;
pub mod types;

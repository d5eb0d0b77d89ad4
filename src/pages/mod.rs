//! Routed pages: landing, inference workspace, and about.

pub mod about;
pub mod home;
pub mod inference;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `history`, `health`) so individual
//! components can depend on small focused models. Each struct is plain data
//! mutated only through its reducer methods; Leptos signals wrap whole
//! structs at the app level.

pub mod health;
pub mod history;
pub mod session;

//! Presentation-free helpers: formatters and the contact mailto builder.

pub mod format;
pub mod mailto;
#[cfg(feature = "csr")]
pub mod time;

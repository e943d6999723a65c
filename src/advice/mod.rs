//! Reading classification and canned advice.
//!
//! Shared by the server's chat endpoint and the dashboard's local fallback so
//! both sides answer with the same thresholds and templates.

pub mod bands;
pub mod fallback;
pub mod prompt;
pub mod translations;

pub use bands::{classify, StatusLabel};
pub use fallback::generate_fallback;

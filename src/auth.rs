//! Authentication domain: long-lived credentials and one-time WSSE tokens.

pub mod credential;
pub mod wsse;

pub use credential::*;
pub use wsse::*;

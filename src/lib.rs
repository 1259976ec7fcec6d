//! Taskhint - similar-item suggestions for task, habit and bucket-list apps
//!
//! The HTTP service (`server`) ranks a caller's existing items against the
//! text being typed; `client` is the consuming side of that contract.

pub mod client;
pub mod server;

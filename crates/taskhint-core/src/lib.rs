//! Taskhint Core Library
//!
//! Text normalization, similarity scoring and ranking behind the taskhint
//! suggestion service.

pub mod candidate;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod logging;
pub mod ranking;
pub mod request;
pub mod service;
pub mod similarity;
pub mod text;

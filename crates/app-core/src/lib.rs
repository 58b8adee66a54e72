//! Core application logic for Artdeck
//!
//! This crate contains the business logic behind the two screens:
//! credential validation and sign-in, and the post-card feed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod feeds;

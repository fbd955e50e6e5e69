//! Core types and trait definitions for the pessoas service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage and cache backends implement the traits defined here; the HTTP
//! layer talks only to [`service::PessoaService`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod cache;
pub mod error;
pub mod pessoa;
pub mod service;
pub mod store;

pub use error::{Error, Result};

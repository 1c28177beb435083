//! HTTP API server for the IssueTrack issue store
//!
//! This crate wires the `issuetrack` library to an axum router: request
//! handlers, boundary validation of query parameters and JSON bodies, and
//! the mapping from library errors to HTTP responses. The binary in
//! `main.rs` adds argument parsing and logging bootstrap around it.

/// HTTP router, handlers, and error mapping
pub mod api;

/// Command line argument definitions
pub mod cli;

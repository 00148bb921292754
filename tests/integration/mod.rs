//! Integration test suite for docweave
//!
//! End-to-end tests against real temporary directories through the public
//! [`Loader`](docweave::Loader) API.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! RUST_LOG=docweave=debug cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **scenarios**: Basic loading, frontmatter and nested imports
//! - **cycles**: Circular import detection and the warning it produces
//! - **sandbox**: Path traversal and symlink handling
//! - **caching**: Read-once behavior and shared results
//! - **concurrency**: One loader shared across threads
//! - **config**: TOML configuration, custom extensions, document listing

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod caching;
mod concurrency;
mod config;
mod scenarios;

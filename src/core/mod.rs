//! core
//!
//! Core domain types, path resolution, and configuration.
//!
//! # Modules
//!
//! - [`types`] - Handles, result values, validated target names
//! - [`resolve`] - Path string to [`types::RepositoryHandle`]
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Results are values; failures are encoded, not thrown
//! - Handles are immutable snapshots

pub mod config;
pub mod resolve;
pub mod types;

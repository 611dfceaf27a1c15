//! dropmark: a deterministic resource-cleanup demo
//!
//! Pairs a two-phase release guard (explicit idempotent release plus a
//! guaranteed Drop fallback) with a trivial file-creation task: create a
//! marker file in the desktop directory on first run, append one marker
//! line on every run after that.
//!
//! # Architecture
//!
//! ## Safety & Cleanup ([`safety`])
//! - [`safety::release`]: two-phase release guard and the inert demo resource
//!
//! ## File Initializer ([`initializer`])
//! - [`initializer::FileInitializer`]: create-or-append of the marker file
//!
//! ## Core Types ([`types`])
//! - [`types::DropmarkError`], [`types::RunOutcome`]
//!
//! # Design Principles
//!
//! 1. **Cleanup runs exactly once** - explicit path and drop fallback share
//!    one flag-guarded release path
//! 2. **One recognized failure** - only `AlreadyExists` at creation time is
//!    redirected; everything else propagates unchanged

// Safety & Cleanup
pub mod safety;

// File Initializer
pub mod initializer;

// Core Types
pub mod types;

// CLI entrypoint wiring for the dropmark binary
pub mod cli;

// Re-export commonly used types for convenience
pub use initializer::FileInitializer;
pub use safety::release::{InertResource, ReleaseGuard, Releasable};
pub use types::{DropmarkError, Result, RunOutcome};

//! Safety and cleanup
//!
//! Two-phase disposal: explicit idempotent release backed by a Drop fallback.

pub mod release;

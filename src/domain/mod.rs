//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`clock`] - Injectable time source
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Storage contracts are implemented in `crate::infrastructure::persistence`.
//!
//! # Record Lifecycle
//!
//! 1. Created by a successful `POST /shorturls`
//! 2. Mutated only by click appends on redirect
//! 3. Removed lazily by the first redirect that observes it expired

pub mod clock;
pub mod entities;
pub mod repositories;

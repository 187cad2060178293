//! Storage implementations of the domain repository traits.
//!
//! - [`InMemoryUrlRepository`] - Sharded in-memory map, no durability

pub mod memory_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;

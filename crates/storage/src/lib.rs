//! Storage abstraction and implementations for EcoLearn.
//!
//! This crate provides a trait-based key-value record store with a JSON file
//! implementation and an in-memory one.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory_storage;

pub use trait_::{load_json, save_json, Storage, StorageError, Result};
pub use json_storage::JsonStorage;
pub use memory_storage::MemoryStorage;

//! In-memory storage backend.
//!
//! Stores articles in a `BTreeMap` behind an `Arc<RwLock<_>>`. Used by the
//! test suite and for running the service without a database.
//!
//! # Example
//!
//! ```rust,ignore
//! use articles::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;

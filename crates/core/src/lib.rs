//! Core domain for the articles service.
//!
//! Pure data types, the repository contract and the error taxonomy shared by
//! every storage backend and by the HTTP layer. Nothing in this crate performs
//! I/O.

pub mod article;
pub mod storage;

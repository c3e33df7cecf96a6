//! Functional core of the contacts service.
//!
//! Pure data types, validation rules and the storage contract. Nothing in
//! this crate performs I/O; backends and HTTP handlers live in `contacts`.

pub mod contact;
pub mod serde;
pub mod storage;

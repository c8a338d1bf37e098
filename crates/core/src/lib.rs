//! Domain layer for the preset store.
//!
//! Holds the preset catalog and its validation rules, independent of the
//! HTTP transport so the same rules apply to every caller.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod preset;
pub mod types;
pub mod validation;

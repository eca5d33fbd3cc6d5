//! Type-ahead book title search
//!
//! An autocomplete widget bound to a single text input: input changes are
//! debounced into lookups against a remote suggestion endpoint, stale lookups
//! are cancelled, and the results are shown in a dropdown driven by keyboard
//! and mouse.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod input;
pub mod layout;
pub mod selection;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;

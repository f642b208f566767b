//! Paste request options and upload results.

pub mod paste;

//! Flutter-facing FFI surface for the contact book core.

pub mod api;

//! Cross-cutting HTTP middleware.

pub mod content_type;

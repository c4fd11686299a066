//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser lookups (element ids, `<meta>` configuration) are isolated here so
//! pages and components stay testable on native builds.

pub mod dom;

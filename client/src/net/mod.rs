//! Networking for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements [`records::ExpenseApi`] over `gloo-net`. Native builds
//! compile the same type, but every request fails with
//! [`records::ApiError::Unavailable`].

pub mod api;

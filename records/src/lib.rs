//! Shared record model and REST contract for the expense tracker clients.
//!
//! This crate owns the wire representation used by both `client` (browser)
//! and `cli` (terminal). Transports live in those crates; everything here is
//! plain data plus the [`ExpenseApi`] seam they implement.
//!
//! LAYOUT
//! ======
//! - `types`: `Expense`, `Income`, `Amount`, `FormPayload`, `ChartSummary`.
//! - `filter`: list filter criteria and query-string construction.
//! - `endpoints`: path builders for every consumed endpoint.
//! - `session`: identity/credential context handed to transports.
//! - `error`: `ApiError` taxonomy and server error-body extraction.
//! - `api`: the transport trait plus shared response decoding.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod session;
pub mod types;

pub use api::ExpenseApi;
pub use error::ApiError;
pub use filter::{ExpenseFilter, SortOrder};
pub use session::ApiSession;
pub use types::{Amount, ChartSummary, Expense, FormPayload, Income};

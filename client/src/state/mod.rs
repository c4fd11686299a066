//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`expenses`, `incomes`, `summary`) so each
//! controller and its components depend on one small model. `store` abstracts
//! where a model lives (a Leptos signal in the browser, a `RefCell` in tests).

pub mod expenses;
pub mod incomes;
pub mod modal;
pub mod notice;
pub mod store;
pub mod summary;

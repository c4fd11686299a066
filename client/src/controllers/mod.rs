//! Async orchestration between the REST API and client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers are generic over the transport ([`records::ExpenseApi`]) and
//! over where their state lives ([`crate::state::store::Store`]). Pages build
//! them with `HttpApi` and `RwSignal`s; tests build them with `FakeApi` and
//! `RefCell`s and drive them with `futures::executor::block_on`.

pub mod expense_list;
pub mod income_list;
pub mod summary;

#[cfg(test)]
pub(crate) mod fake_api;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Expense components read and write the page's `RwSignal<ExpenseBoardState>`
//! from Leptos context and report user intent through callbacks, so network
//! work stays in the controllers.

pub mod expense_modal;
pub mod expense_table;
pub mod filter_bar;
pub mod income_list;
pub mod notice_banner;
pub mod summary_panel;

//! Browser client for the expense tracker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the page shell; this crate mounts Leptos views into the
//! containers it finds there and talks to the REST API through `gloo-net`.
//! Native builds (tests, tooling) compile every module, but the transport
//! reports [`records::ApiError::Unavailable`] and nothing is mounted.
//!
//! LAYOUT
//! ======
//! - `state`: plain data models and their synchronous transitions.
//! - `controllers`: async request orchestration over `ExpenseApi` + `Store`.
//! - `net`: the `gloo-net` transport.
//! - `components` / `pages`: Leptos views.
//! - `config` / `util`: page configuration and DOM ids.

pub mod components;
pub mod config;
pub mod controllers;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, read configuration, mount what the page contains.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::components::income_list::IncomeList;
    use crate::config::PageConfig;
    use crate::controllers::income_list::IncomeListController;
    use crate::net::api::HttpApi;
    use crate::pages::expenses::ExpensesPage;
    use crate::state::incomes::IncomesState;
    use crate::util::dom;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = PageConfig::from_document();

    if let Some(container) = dom::html_element_by_id(dom::EXPENSES_APP) {
        match config.expense_session() {
            Ok(session) => {
                log::info!("mounting expense page for user {}", session.user_id());
                leptos::mount::mount_to(container, move || view! { <ExpensesPage session=session.clone() /> }).forget();
            }
            Err(err) => log::error!("expense page not mounted: {err}"),
        }
    }

    let incomes = RwSignal::new(IncomesState::default());
    let api = HttpApi::new(config.income_session());
    leptos::task::spawn_local(async move {
        IncomeListController::new(api, incomes)
            .activate(dom::html_element_by_id(dom::INCOME_LIST), |container| {
                leptos::mount::mount_to(container, move || view! { <IncomeList incomes=incomes /> }).forget();
            })
            .await;
    });
}

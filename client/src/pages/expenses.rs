//! Expense page: filter, table, add/edit dialogs, notices and summaries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted into `expenses-app`. The page creates the board and summary
//! signals once, provides the board through context, and runs every request
//! as a `spawn_local` future through the controllers. The table is fetched on
//! mount, on filter, and after each successful write.

use leptos::prelude::*;
use leptos::task::spawn_local;
use records::ApiSession;

use crate::components::expense_modal::ExpenseModal;
use crate::components::expense_table::ExpenseTable;
use crate::components::filter_bar::FilterBar;
use crate::components::notice_banner::NoticeBanner;
use crate::components::summary_panel::SummaryPanel;
use crate::controllers::expense_list::ExpenseListController;
use crate::controllers::summary::SummaryController;
use crate::net::api::HttpApi;
use crate::state::expenses::ExpenseBoardState;
use crate::state::modal::ModalKind;
use crate::state::summary::SummaryState;
use crate::util::dom;

#[component]
pub fn ExpensesPage(session: ApiSession) -> impl IntoView {
    let board = RwSignal::new(ExpenseBoardState::default());
    let summary = RwSignal::new(SummaryState::default());
    let api = StoredValue::new(HttpApi::new(session));
    provide_context(board);

    let refresh_summary = move || {
        let year = board.with_untracked(|s| s.filter.summary_year().map(str::to_owned));
        let api = api.get_value();
        spawn_local(async move {
            SummaryController::new(api, summary).refresh(year.as_deref()).await;
        });
    };

    let reload = move || {
        let api = api.get_value();
        spawn_local(async move {
            ExpenseListController::new(api, board).fetch_expenses().await;
        });
        refresh_summary();
    };
    reload();

    let on_filter = Callback::new(move |()| reload());

    let on_edit = Callback::new(move |expense_id: String| {
        let api = api.get_value();
        spawn_local(async move {
            ExpenseListController::new(api, board).open_edit_modal(&expense_id).await;
        });
    });

    let on_submit = Callback::new(move |kind: ModalKind| {
        let api = api.get_value();
        spawn_local(async move {
            let controller = ExpenseListController::new(api, board);
            let saved = match kind {
                ModalKind::Add => controller.submit_add().await,
                ModalKind::Edit => controller.submit_edit().await,
            };
            if saved {
                refresh_summary();
            }
        });
    });

    view! {
        <section class="expenses">
            <NoticeBanner />
            <div class="expenses__toolbar">
                <button
                    id=dom::ADD_EXPENSE_BTN
                    type="button"
                    class="btn btn--primary"
                    on:click=move |_| board.update(ExpenseBoardState::open_add_modal)
                >
                    "Add Expense"
                </button>
            </div>
            <FilterBar on_filter=on_filter />
            <ExpenseTable on_edit=on_edit />
            <SummaryPanel summary=summary />
            <ExpenseModal kind=ModalKind::Add on_submit=on_submit />
            <ExpenseModal kind=ModalKind::Edit on_submit=on_submit />
        </section>
    }
}

//! Dismissible status line for the expense page.

use leptos::prelude::*;

use crate::state::expenses::ExpenseBoardState;
use crate::util::dom;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let board = expect_context::<RwSignal<ExpenseBoardState>>();
    let notice = move || board.with(|s| s.notice.clone());

    view! {
        <div id=dom::EXPENSE_NOTICE role="status" aria-live="polite">
            {move || {
                notice()
                    .map(|notice| {
                        view! {
                            <div class=notice.level.css_class()>
                                <span class="notice__message">{notice.message}</span>
                                <button
                                    type="button"
                                    class="notice__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| board.update(ExpenseBoardState::dismiss_notice)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

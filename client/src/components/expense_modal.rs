//! Add and edit expense dialogs.
//!
//! Both dialogs are always in the DOM and toggled with `display`, so the ids
//! stay addressable by the page stylesheet. A click on the backdrop closes
//! only the dialog it belongs to; clicks inside the content never reach it.

#[cfg(test)]
#[path = "expense_modal_test.rs"]
mod expense_modal_test;

use leptos::prelude::*;

use crate::state::expenses::{ExpenseBoardState, FormField};
use crate::state::modal::ModalKind;
use crate::util::dom;

#[component]
pub fn ExpenseModal(kind: ModalKind, on_submit: Callback<ModalKind>) -> impl IntoView {
    let board = expect_context::<RwSignal<ExpenseBoardState>>();
    let display = move || board.with(|s| s.modal(kind).display());
    let pending = move || board.with(|s| s.is_pending(kind));

    view! {
        <div
            id=dom::modal_id(kind)
            class="modal"
            style:display=display
            on:click=move |_| {
                board.update(|s| {
                    s.dismiss_from_backdrop(kind);
                });
            }
        >
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <button
                    id=dom::close_button_id(kind)
                    type="button"
                    class="modal__close"
                    title="Close"
                    on:click=move |_| board.update(|s| s.close_modal(kind))
                >
                    "✕"
                </button>
                <h2>{title(kind)}</h2>
                <form
                    id=dom::form_id(kind)
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(kind);
                    }
                >
                    {(kind == ModalKind::Edit)
                        .then(|| {
                            view! {
                                <input
                                    id=dom::EDIT_EXPENSE_ID
                                    type="hidden"
                                    name="id"
                                    prop:value=move || board.with(|s| s.editing_id.clone())
                                />
                            }
                        })}
                    {FormField::ALL.into_iter().map(|field| view! { <FieldInput kind=kind field=field /> }).collect_view()}
                    <button type="submit" class="btn btn--primary" disabled=pending>
                        {submit_label(kind)}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FieldInput(kind: ModalKind, field: FormField) -> impl IntoView {
    let board = expect_context::<RwSignal<ExpenseBoardState>>();
    let id = dom::field_id(kind, field);

    view! {
        <label class="modal__label">
            {label(field)}
            <input
                id=id
                name=field.name(kind)
                type=input_type(field)
                step=(field == FormField::Amount).then_some("0.01")
                required=is_required(field)
                class="modal__input"
                prop:value=move || board.with(|s| s.form(kind).field(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    board.update(|s| s.form_mut(kind).set_field(field, value));
                }
            />
        </label>
    }
}

fn title(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Add => "Add Expense",
        ModalKind::Edit => "Edit Expense",
    }
}

fn submit_label(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Add => "Add",
        ModalKind::Edit => "Save",
    }
}

fn label(field: FormField) -> &'static str {
    match field {
        FormField::Amount => "Amount",
        FormField::Description => "Description",
        FormField::Category => "Category",
        FormField::ExpenseDate => "Date",
        FormField::Location => "Location",
    }
}

fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::Amount => "number",
        FormField::ExpenseDate => "date",
        FormField::Description | FormField::Category | FormField::Location => "text",
    }
}

fn is_required(field: FormField) -> bool {
    matches!(field, FormField::Amount | FormField::Category | FormField::ExpenseDate)
}

use crate::{
    api::{Employee, RequestError, UpdateEmployee},
    components::{layout::ErrorMessage, modal::Modal},
    pages::employees::utils::EmployeeFormState,
};
use leptos::{ev, *};

#[component]
pub fn EditEmployeeModal(
    editing: RwSignal<Option<Employee>>,
    form_state: RwSignal<EmployeeFormState>,
    error: RwSignal<Option<String>>,
    update_action: Action<(i64, UpdateEmployee), Result<Employee, RequestError>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || editing.get().is_some());
    let pending = update_action.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(target) = editing.get_untracked() else {
            return;
        };
        let current = form_state.get_untracked();
        if !current.is_valid() {
            error.set(Some("All fields are required.".to_string()));
            return;
        }
        error.set(None);
        update_action.dispatch((target.id, current.to_update()));
    };

    let cancel = on_close;

    view! {
        <Modal
            is_open=is_open
            title="Edit Employee"
            description="Update the employee's details."
            on_close=on_close
        >
            <Show when=move || error.get().is_some()>
                <ErrorMessage message={error.get().unwrap_or_default()} />
            </Show>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Employee ID"}</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || form_state.get().employee_id
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.employee_id = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Full Name"}</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || form_state.get().full_name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.full_name = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Email"}</label>
                    <input
                        type="email"
                        class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || form_state.get().email
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.email = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Department"}</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || form_state.get().department
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.department = value);
                        }
                    />
                </div>
                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| cancel.call(())
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn sample_employee() -> Employee {
        Employee {
            id: 1,
            employee_id: "EMP001".into(),
            full_name: "Alice Smith".into(),
            email: "alice@example.com".into(),
            department: "Engineering".into(),
        }
    }

    #[test]
    fn edit_modal_renders_seeded_values() {
        let html = render_to_string(move || {
            let employee = sample_employee();
            let editing = create_rw_signal(Some(employee.clone()));
            let form_state = create_rw_signal(EmployeeFormState::from_employee(&employee));
            let error = create_rw_signal(None::<String>);
            let action = create_action(|_input: &(i64, UpdateEmployee)| async move {
                Err::<Employee, _>(RequestError::new("unused"))
            });
            view! {
                <EditEmployeeModal
                    editing=editing
                    form_state=form_state
                    error=error
                    update_action=action
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Edit Employee"));
        assert!(html.contains("Save Changes"));
    }

    #[test]
    fn edit_modal_hidden_without_target() {
        let html = render_to_string(move || {
            let editing = create_rw_signal(None::<Employee>);
            let form_state = create_rw_signal(EmployeeFormState::default());
            let error = create_rw_signal(None::<String>);
            let action = create_action(|_input: &(i64, UpdateEmployee)| async move {
                Err::<Employee, _>(RequestError::new("unused"))
            });
            view! {
                <EditEmployeeModal
                    editing=editing
                    form_state=form_state
                    error=error
                    update_action=action
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Save Changes"));
    }
}

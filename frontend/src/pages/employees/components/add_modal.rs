use crate::{
    api::{CreateEmployee, Employee, RequestError},
    components::{layout::ErrorMessage, modal::Modal},
    pages::employees::utils::EmployeeFormState,
};
use leptos::{ev, *};

#[component]
pub fn AddEmployeeModal(
    is_open: Signal<bool>,
    form_state: RwSignal<EmployeeFormState>,
    error: RwSignal<Option<String>>,
    create_action: Action<CreateEmployee, Result<Employee, RequestError>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let pending = create_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let current = form_state.get_untracked();
        if !current.is_valid() {
            error.set(Some("All fields are required.".to_string()));
            return;
        }
        error.set(None);
        create_action.dispatch(current.to_create());
    };

    let cancel = on_close;

    view! {
        <Modal
            is_open=is_open
            title="Add New Employee"
            description="Enter the details of the new employee."
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
                        placeholder="EMP001"
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
                        placeholder="Jane Doe"
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
                        placeholder="jane@company.com"
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
                        placeholder="Engineering"
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
                        {move || if pending.get() { "Saving..." } else { "Save Employee" }}
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

    #[test]
    fn add_modal_renders_all_fields() {
        let html = render_to_string(move || {
            let form_state = create_rw_signal(EmployeeFormState::default());
            let error = create_rw_signal(None::<String>);
            let action = create_action(|_payload: &CreateEmployee| async move {
                Err::<Employee, _>(RequestError::new("unused"))
            });
            view! {
                <AddEmployeeModal
                    is_open=Signal::derive(|| true)
                    form_state=form_state
                    error=error
                    create_action=action
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Add New Employee"));
        assert!(html.contains("Employee ID"));
        assert!(html.contains("Full Name"));
        assert!(html.contains("Email"));
        assert!(html.contains("Department"));
        assert!(html.contains("Save Employee"));
    }

    #[test]
    fn add_modal_shows_validation_error() {
        let html = render_to_string(move || {
            let form_state = create_rw_signal(EmployeeFormState::default());
            let error = create_rw_signal(Some("All fields are required.".to_string()));
            let action = create_action(|_payload: &CreateEmployee| async move {
                Err::<Employee, _>(RequestError::new("unused"))
            });
            view! {
                <AddEmployeeModal
                    is_open=Signal::derive(|| true)
                    form_state=form_state
                    error=error
                    create_action=action
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("All fields are required."));
    }
}

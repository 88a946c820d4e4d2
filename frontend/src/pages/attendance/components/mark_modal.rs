use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee, MarkAttendance, RequestError},
    components::{layout::ErrorMessage, modal::Modal},
    pages::attendance::utils::MarkAttendanceFormState,
};
use leptos::{ev, *};

#[component]
pub fn MarkAttendanceModal(
    is_open: Signal<bool>,
    form_state: RwSignal<MarkAttendanceFormState>,
    error: RwSignal<Option<String>>,
    employees: Signal<Vec<Employee>>,
    mark_action: Action<MarkAttendance, Result<AttendanceRecord, RequestError>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let pending = mark_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form_state.get_untracked().to_payload() {
            Ok(payload) => {
                error.set(None);
                mark_action.dispatch(payload);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let cancel = on_close;

    view! {
        <Modal
            is_open=is_open
            title="Mark Attendance"
            description="Record attendance for an employee."
            on_close=on_close
        >
            <Show when=move || error.get().is_some()>
                <ErrorMessage message={error.get().unwrap_or_default()} />
            </Show>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Employee"}</label>
                    <select
                        class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || form_state.get().employee_id
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.employee_id = value);
                        }
                    >
                        <option value="">{"Select an employee"}</option>
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id
                            children=move |employee: Employee| {
                                let code = employee.employee_id.clone();
                                let label = format!("{} ({})", employee.full_name, employee.employee_id);
                                view! { <option value=code>{label}</option> }
                            }
                        />
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Date"}</label>
                    <input
                        type="date"
                        class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || form_state.get().date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.date = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Status"}</label>
                    <select
                        class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface text-fg"
                        prop:value=move || form_state.get().status.as_str().to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(status) = AttendanceStatus::parse(&value) {
                                form_state.update(|state| state.status = status);
                            }
                        }
                    >
                        <option value="Present">{"Present"}</option>
                        <option value="Absent">{"Absent"}</option>
                    </select>
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
                        {move || if pending.get() { "Saving..." } else { "Save" }}
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
    fn mark_modal_renders_picker_and_status_options() {
        let html = render_to_string(move || {
            let form_state = create_rw_signal(MarkAttendanceFormState::new());
            let error = create_rw_signal(None::<String>);
            let employees = Signal::derive(|| {
                vec![Employee {
                    id: 1,
                    employee_id: "EMP001".into(),
                    full_name: "Alice Smith".into(),
                    email: "alice@example.com".into(),
                    department: "Engineering".into(),
                }]
            });
            let action = create_action(|_payload: &MarkAttendance| async move {
                Err::<AttendanceRecord, _>(RequestError::new("unused"))
            });
            view! {
                <MarkAttendanceModal
                    is_open=Signal::derive(|| true)
                    form_state=form_state
                    error=error
                    employees=employees
                    mark_action=action
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Mark Attendance"));
        assert!(html.contains("Alice Smith (EMP001)"));
        assert!(html.contains("Select an employee"));
        assert!(html.contains("Present"));
        assert!(html.contains("Absent"));
    }
}

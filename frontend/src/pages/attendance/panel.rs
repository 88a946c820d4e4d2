use crate::{
    api::{AttendanceRecord, Employee},
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, FetchErrorCard, LoadingSkeleton, SuccessMessage},
        status_badge::StatusBadge,
    },
    pages::attendance::{
        components::mark_modal::MarkAttendanceModal, utils::status_counts,
        view_model::use_attendance_view_model,
    },
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();

    let records = Signal::derive(move || {
        vm.records_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || {
        vm.records_resource
            .get()
            .and_then(|result| result.err().map(|err| err.to_string()))
    });
    let loading = vm.records_resource.loading();
    let employees = Signal::derive(move || vm.employees_resource.get().unwrap_or_default());
    let counts = Signal::derive(move || status_counts(&records.get()));

    let on_retry = Callback::new(move |_| vm.retry_fetch());
    let close_mark = Callback::new(move |_| vm.close_mark_modal());
    let cancel_delete = Callback::new(move |_| vm.delete_target.set(None));
    let confirm_delete = Callback::new(move |_| vm.confirm_delete());

    view! {
        <div class="space-y-6 px-4 sm:px-0">
            <div class="flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h2 class="text-2xl font-bold text-fg">{"Attendance"}</h2>
                    <p class="text-sm text-fg-muted">
                        {move || {
                            let counts = counts.get();
                            format!(
                                "{} present, {} absent, {} total",
                                counts.present,
                                counts.absent,
                                counts.total()
                            )
                        }}
                    </p>
                </div>
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| vm.open_mark_modal()
                >
                    {"Mark Attendance"}
                </button>
            </div>

            <Show when=move || vm.page_messages.get().error.is_some()>
                <ErrorMessage message={vm.page_messages.get().error.unwrap_or_default()} />
            </Show>
            <Show when=move || vm.page_messages.get().success.is_some()>
                <SuccessMessage message={vm.page_messages.get().success.unwrap_or_default()} />
            </Show>

            <div class="flex flex-col gap-3 sm:flex-row sm:items-end">
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Date"}</label>
                    <input
                        type="date"
                        class="mt-1 border border-border rounded px-3 py-2 bg-surface text-fg"
                        prop:value=move || vm.date_input.get()
                        on:input=move |ev| vm.set_date_filter(event_target_value(&ev))
                    />
                </div>
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-3 py-2 text-sm font-medium bg-surface-muted text-fg hover:bg-surface-elevated"
                    on:click=move |_| vm.clear_date_filter()
                >
                    {"Clear Date"}
                </button>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Employee"}</label>
                    <select
                        class="mt-1 w-full sm:w-64 border border-border rounded px-3 py-2 bg-surface text-fg"
                        prop:value=move || vm.employee_input.get()
                        on:change=move |ev| vm.set_employee_filter(event_target_value(&ev))
                    >
                        <option value="">{"All Employees"}</option>
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
            </div>

            <Show when=move || fetch_error.get().is_some()>
                <FetchErrorCard
                    message=Signal::derive(move || fetch_error.get().unwrap_or_default())
                    on_retry=on_retry
                    retrying=Signal::derive(move || loading.get())
                />
            </Show>
            <Show when=move || loading.get() && fetch_error.get().is_none()>
                <LoadingSkeleton />
            </Show>
            <Show when=move || {
                !loading.get() && fetch_error.get().is_none() && records.get().is_empty()
            }>
                <EmptyState
                    title="No attendance records"
                    description="No records match the selected filters."
                />
            </Show>

            <Show when=move || {
                !loading.get() && fetch_error.get().is_none() && !records.get().is_empty()
            }>
                <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Employee"}
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Date"}
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Status"}
                                </th>
                                <th class="px-6 py-3 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Actions"}
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || records.get()
                                key=|record| record.id
                                children=move |record: AttendanceRecord| {
                                    let employee_label = record
                                        .employee
                                        .as_ref()
                                        .map(|employee| {
                                            format!("{} ({})", employee.full_name, employee.employee_id)
                                        })
                                        .unwrap_or_else(|| format!("#{}", record.employee_id));
                                    let for_toggle = record.clone();
                                    let for_delete = record.clone();
                                    view! {
                                        <tr class="hover:bg-surface-muted">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {employee_label}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">
                                                {record.date.format("%Y-%m-%d").to_string()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <StatusBadge status=record.status />
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-2">
                                                <button
                                                    type="button"
                                                    class="text-action-primary-bg hover:underline font-medium"
                                                    on:click=move |_| vm.toggle_status(&for_toggle)
                                                >
                                                    {"Toggle"}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-status-error-text hover:underline font-medium"
                                                    on:click=move |_| vm.delete_target.set(Some(for_delete.clone()))
                                                >
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>

            <MarkAttendanceModal
                is_open=Signal::derive(move || vm.show_mark_modal.get())
                form_state=vm.mark_form
                error=vm.mark_error
                employees=employees
                mark_action=vm.mark_action
                on_close=close_mark
            />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete Attendance Record"
                message="Are you sure you want to delete this attendance record?"
                on_confirm=confirm_delete
                on_cancel=cancel_delete
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                destructive=true
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::ssr::render_to_string;
    use httpmock::prelude::*;

    #[test]
    fn attendance_page_renders_filters_and_counts() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/");
            then.status(200).json_body(serde_json::json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/");
            then.status(200).json_body(serde_json::json!([]));
        });

        let base_url = server.base_url();
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url(&base_url));
            view! { <AttendancePage /> }
        });
        assert!(html.contains("Attendance"));
        assert!(html.contains("Mark Attendance"));
        assert!(html.contains("Clear Date"));
        assert!(html.contains("All Employees"));
        assert!(html.contains("0 present, 0 absent, 0 total"));
    }
}

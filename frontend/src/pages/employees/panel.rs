use crate::{
    api::Employee,
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, FetchErrorCard, LoadingSkeleton, SuccessMessage},
    },
    pages::employees::{
        components::{
            add_modal::AddEmployeeModal, details_modal::EmployeeDetailsModal,
            edit_modal::EditEmployeeModal,
        },
        utils::{department_options, filter_employees, initials},
        view_model::use_employees_view_model,
    },
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();

    let employees = Signal::derive(move || {
        vm.employees_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || {
        vm.employees_resource
            .get()
            .and_then(|result| result.err().map(|err| err.to_string()))
    });
    let loading = vm.employees_resource.loading();

    let filtered = Signal::derive(move || {
        filter_employees(
            &employees.get(),
            &vm.search.get(),
            &vm.department_filter.get(),
        )
    });
    let departments = Signal::derive(move || department_options(&employees.get()));

    let on_retry = Callback::new(move |_| vm.retry_fetch());
    let close_add = Callback::new(move |_| vm.close_add_modal());
    let close_edit = Callback::new(move |_| vm.close_edit_modal());
    let close_details = Callback::new(move |_| vm.details.set(None));
    let cancel_delete = Callback::new(move |_| vm.delete_target.set(None));
    let confirm_delete = Callback::new(move |_| vm.confirm_delete());

    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|employee| {
                format!(
                    "Are you sure you want to delete {}? This will also remove their attendance records.",
                    employee.full_name
                )
            })
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6 px-4 sm:px-0">
            <div class="flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h2 class="text-2xl font-bold text-fg">{"Employees"}</h2>
                    <p class="text-sm text-fg-muted">
                        {move || format!("{} of {} employees", filtered.get().len(), employees.get().len())}
                    </p>
                </div>
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| vm.open_add_modal()
                >
                    {"Add Employee"}
                </button>
            </div>

            <Show when=move || vm.page_messages.get().error.is_some()>
                <ErrorMessage message={vm.page_messages.get().error.unwrap_or_default()} />
            </Show>
            <Show when=move || vm.page_messages.get().success.is_some()>
                <SuccessMessage message={vm.page_messages.get().success.unwrap_or_default()} />
            </Show>

            <div class="flex flex-col gap-3 sm:flex-row">
                <input
                    class="w-full sm:max-w-xs border border-border rounded px-3 py-2 bg-surface text-fg"
                    placeholder="Search employees..."
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
                <select
                    class="w-full sm:w-48 border border-border rounded px-3 py-2 bg-surface text-fg"
                    prop:value=move || vm.department_filter.get()
                    on:change=move |ev| vm.department_filter.set(event_target_value(&ev))
                >
                    <option value="">{"All Departments"}</option>
                    <For
                        each=move || departments.get()
                        key=|department| department.clone()
                        children=move |department: String| {
                            let value = department.clone();
                            view! { <option value=value>{department}</option> }
                        }
                    />
                </select>
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
                !loading.get() && fetch_error.get().is_none() && employees.get().is_empty()
            }>
                <EmptyState
                    title="No employees found"
                    description="Add your first employee to get started."
                />
            </Show>

            <Show when=move || {
                !loading.get() && fetch_error.get().is_none() && !employees.get().is_empty()
            }>
                <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Name"}
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Employee ID"}
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Email"}
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Department"}
                                </th>
                                <th class="px-6 py-3 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {"Actions"}
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || filtered.get()
                                key=|employee| employee.id
                                children=move |employee: Employee| {
                                    let monogram = initials(&employee.full_name);
                                    let for_details = employee.clone();
                                    let for_edit = employee.clone();
                                    let for_delete = employee.clone();
                                    view! {
                                        <tr class="hover:bg-surface-muted">
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <div class="flex items-center gap-3">
                                                    <span class="flex h-9 w-9 items-center justify-center rounded-full bg-action-primary-bg text-action-primary-text text-sm font-semibold">
                                                        {monogram}
                                                    </span>
                                                    <span class="text-sm font-medium text-fg">
                                                        {employee.full_name.clone()}
                                                    </span>
                                                </div>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">
                                                {employee.employee_id.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">
                                                {employee.email.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">
                                                {employee.department.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-2">
                                                <button
                                                    type="button"
                                                    class="text-fg-muted hover:text-fg font-medium"
                                                    on:click=move |_| vm.details.set(Some(for_details.clone()))
                                                >
                                                    {"View"}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-action-primary-bg hover:underline font-medium"
                                                    on:click=move |_| vm.editing.set(Some(for_edit.clone()))
                                                >
                                                    {"Edit"}
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

            <AddEmployeeModal
                is_open=Signal::derive(move || vm.show_add_modal.get())
                form_state=vm.add_form
                error=vm.add_error
                create_action=vm.create_action
                on_close=close_add
            />
            <EditEmployeeModal
                editing=vm.editing
                form_state=vm.edit_form
                error=vm.edit_error
                update_action=vm.update_action
                on_close=close_edit
            />
            <EmployeeDetailsModal details=vm.details on_close=close_details />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete Employee"
                message=delete_message
                on_confirm=confirm_delete
                on_cancel=cancel_delete
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                destructive=true
            />
        </div>
    }
}

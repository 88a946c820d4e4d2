use crate::{
    api::DashboardSummary,
    components::layout::{ErrorMessage, FetchErrorCard, LoadingSkeleton, SuccessMessage},
    pages::{
        dashboard::view_model::use_dashboard_view_model,
        employees::components::add_modal::AddEmployeeModal,
    },
};
use leptos::*;

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: Signal<i64>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class="mt-1 text-3xl font-semibold text-fg">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn SummarySection(summary: Signal<DashboardSummary>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <StatCard label="Total Employees" value=Signal::derive(move || summary.get().total_employees) />
            <StatCard label="Present Today" value=Signal::derive(move || summary.get().present_today) />
            <StatCard label="Absent Today" value=Signal::derive(move || summary.get().absent_today) />
            <StatCard label="Departments" value=Signal::derive(move || summary.get().total_departments) />
        </div>
    }
}

#[component]
fn RecentAttendanceSection(summary: Signal<DashboardSummary>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
            <h3 class="text-lg font-medium text-fg">{"Recent Attendance"}</h3>
            <Show
                when=move || !summary.get().recent_attendance.is_empty()
                fallback=|| view! {
                    <p class="text-sm text-fg-muted">{"No recent attendance data."}</p>
                }
            >
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead>
                        <tr>
                            <th class="py-2 text-left font-medium text-fg-muted">{"Date"}</th>
                            <th class="py-2 text-right font-medium text-fg-muted">{"Present"}</th>
                            <th class="py-2 text-right font-medium text-fg-muted">{"Absent"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || summary.get().recent_attendance
                            key=|day| day.date.clone()
                            children=move |day: crate::api::RecentAttendanceDay| {
                                view! {
                                    <tr>
                                        <td class="py-2 text-fg">{day.date.clone()}</td>
                                        <td class="py-2 text-right text-fg">{day.present}</td>
                                        <td class="py-2 text-right text-fg">{day.absent}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn DepartmentSection(summary: Signal<DashboardSummary>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
            <h3 class="text-lg font-medium text-fg">{"Department Distribution"}</h3>
            <Show
                when=move || !summary.get().department_distribution.is_empty()
                fallback=|| view! {
                    <p class="text-sm text-fg-muted">{"No departments yet."}</p>
                }
            >
                <ul class="space-y-2">
                    <For
                        each=move || summary.get().department_distribution
                        key=|slice| slice.name.clone()
                        children=move |slice: crate::api::DepartmentSlice| {
                            view! {
                                <li class="flex items-center justify-between text-sm">
                                    <span class="text-fg">{slice.name.clone()}</span>
                                    <span class="text-fg-muted">{slice.value}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    let summary = Signal::derive(move || {
        vm.summary_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || {
        vm.summary_resource
            .get()
            .and_then(|result| result.err().map(|err| err.to_string()))
    });
    let loading = vm.summary_resource.loading();

    let on_retry = Callback::new(move |_| vm.retry_fetch());
    let close_add = Callback::new(move |_| vm.close_add_modal());

    view! {
        <div class="space-y-6 px-4 sm:px-0">
            <div class="flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
                <h2 class="text-2xl font-bold text-fg">{"Dashboard"}</h2>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| vm.open_add_modal()
                    >
                        {"Add Employee"}
                    </button>
                    <a
                        href="/attendance"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    >
                        {"Mark Attendance"}
                    </a>
                    <a
                        href="/employees"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    >
                        {"View Employees"}
                    </a>
                </div>
            </div>

            <Show when=move || vm.page_messages.get().error.is_some()>
                <ErrorMessage message={vm.page_messages.get().error.unwrap_or_default()} />
            </Show>
            <Show when=move || vm.page_messages.get().success.is_some()>
                <SuccessMessage message={vm.page_messages.get().success.unwrap_or_default()} />
            </Show>

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

            <Show when=move || !loading.get() && fetch_error.get().is_none()>
                <div class="space-y-6">
                    <SummarySection summary=summary />
                    <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                        <RecentAttendanceSection summary=summary />
                        <DepartmentSection summary=summary />
                    </div>
                </div>
            </Show>

            <AddEmployeeModal
                is_open=Signal::derive(move || vm.show_add_modal.get())
                form_state=vm.add_form
                error=vm.add_error
                create_action=vm.create_action
                on_close=close_add
            />
        </div>
    }
}

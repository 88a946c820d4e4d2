use crate::{
    api::Employee,
    components::modal::Modal,
    pages::employees::utils::initials,
};
use leptos::*;

#[component]
pub fn EmployeeDetailsModal(
    details: RwSignal<Option<Employee>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || details.get().is_some());

    view! {
        <Modal is_open=is_open title="Employee Details" on_close=on_close>
            {move || details.get().map(|employee| {
                let monogram = initials(&employee.full_name);
                view! {
                    <div class="space-y-4">
                        <div class="flex items-center gap-3">
                            <span class="flex h-12 w-12 items-center justify-center rounded-full bg-action-primary-bg text-action-primary-text font-semibold">
                                {monogram}
                            </span>
                            <div>
                                <p class="text-base font-semibold text-fg">{employee.full_name.clone()}</p>
                                <p class="text-sm text-fg-muted">{employee.employee_id.clone()}</p>
                            </div>
                        </div>
                        <dl class="grid grid-cols-1 gap-3 text-sm">
                            <div>
                                <dt class="text-fg-muted">{"Email"}</dt>
                                <dd class="text-fg">{employee.email.clone()}</dd>
                            </div>
                            <div>
                                <dt class="text-fg-muted">{"Department"}</dt>
                                <dd class="text-fg">{employee.department.clone()}</dd>
                            </div>
                        </dl>
                    </div>
                }
            })}
        </Modal>
    }
}

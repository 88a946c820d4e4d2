use crate::{
    api::{ApiClient, CreateEmployee, DashboardSummary, Employee, RequestError},
    pages::{dashboard::repository::DashboardRepository, employees::utils::EmployeeFormState},
    utils::messages::MessageState,
};
use leptos::*;
use std::rc::Rc;

/// Resource key for the summary; bumped after a quick-action save or a
/// manual retry so stale responses never land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryQuery {
    token: u32,
}

impl SummaryQuery {
    pub fn refreshed(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
        }
    }
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub summary_query: RwSignal<SummaryQuery>,
    pub summary_resource: Resource<SummaryQuery, Result<DashboardSummary, RequestError>>,

    pub show_add_modal: RwSignal<bool>,
    pub add_form: RwSignal<EmployeeFormState>,
    pub add_error: RwSignal<Option<String>>,
    pub create_action: Action<CreateEmployee, Result<Employee, RequestError>>,

    pub page_messages: RwSignal<MessageState>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = DashboardRepository::with_client(Rc::new(api));

        let summary_query = create_rw_signal(SummaryQuery::default());
        let repo_for_summary = repository.clone();
        let summary_resource = create_resource(
            move || summary_query.get(),
            move |_query| {
                let repo = repo_for_summary.clone();
                async move { repo.fetch_summary().await }
            },
        );

        let show_add_modal = create_rw_signal(false);
        let add_form = create_rw_signal(EmployeeFormState::default());
        let add_error = create_rw_signal(None::<String>);
        let page_messages = create_rw_signal(MessageState::default());

        let repo_for_create = repository.clone();
        let create_action = create_action(move |payload: &CreateEmployee| {
            let repo = repo_for_create.clone();
            let payload = payload.clone();
            async move { repo.add_employee(payload).await }
        });

        {
            create_effect(move |_| {
                if let Some(result) = create_action.value().get() {
                    match result {
                        Ok(employee) => {
                            page_messages.update(|state| {
                                state.set_success(format!(
                                    "Employee '{}' added.",
                                    employee.full_name
                                ));
                            });
                            show_add_modal.set(false);
                            add_form.update(|state| state.reset());
                            add_error.set(None);
                            summary_query.update(|query| *query = query.refreshed());
                        }
                        Err(err) => add_error.set(Some(err.to_string())),
                    }
                }
            });
        }

        Self {
            summary_query,
            summary_resource,
            show_add_modal,
            add_form,
            add_error,
            create_action,
            page_messages,
        }
    }

    pub fn retry_fetch(&self) {
        self.summary_query.update(|query| *query = query.refreshed());
    }

    pub fn open_add_modal(&self) {
        self.add_form.update(|state| state.reset());
        self.add_error.set(None);
        self.show_add_modal.set(true);
    }

    pub fn close_add_modal(&self) {
        self.show_add_modal.set(false);
        self.add_form.update(|state| state.reset());
        self.add_error.set(None);
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

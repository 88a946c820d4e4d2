use crate::{
    api::{ApiClient, CreateEmployee, Employee, RequestError, UpdateEmployee},
    pages::employees::{repository::EmployeesRepository, utils::EmployeeFormState},
    utils::messages::MessageState,
};
use leptos::*;
use std::rc::Rc;

/// Resource key for the roster. The token makes every reload a distinct
/// key, so a response for a superseded fetch can never replace the
/// current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterQuery {
    token: u32,
}

impl RosterQuery {
    pub fn refreshed(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
        }
    }
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub roster_query: RwSignal<RosterQuery>,
    pub employees_resource: Resource<RosterQuery, Result<Vec<Employee>, RequestError>>,

    pub search: RwSignal<String>,
    pub department_filter: RwSignal<String>,

    pub show_add_modal: RwSignal<bool>,
    pub add_form: RwSignal<EmployeeFormState>,
    pub add_error: RwSignal<Option<String>>,
    pub create_action: Action<CreateEmployee, Result<Employee, RequestError>>,

    pub editing: RwSignal<Option<Employee>>,
    pub edit_form: RwSignal<EmployeeFormState>,
    pub edit_error: RwSignal<Option<String>>,
    pub update_action: Action<(i64, UpdateEmployee), Result<Employee, RequestError>>,

    pub details: RwSignal<Option<Employee>>,

    pub delete_target: RwSignal<Option<Employee>>,
    pub delete_action: Action<i64, Result<Employee, RequestError>>,

    pub page_messages: RwSignal<MessageState>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = EmployeesRepository::with_client(Rc::new(api));

        let roster_query = create_rw_signal(RosterQuery::default());
        let repo_for_resource = repository.clone();
        let employees_resource = create_resource(
            move || roster_query.get(),
            move |_query| {
                let repo = repo_for_resource.clone();
                async move { repo.fetch_employees().await }
            },
        );

        let search = create_rw_signal(String::new());
        let department_filter = create_rw_signal(String::new());

        let show_add_modal = create_rw_signal(false);
        let add_form = create_rw_signal(EmployeeFormState::default());
        let add_error = create_rw_signal(None::<String>);

        let editing = create_rw_signal(None::<Employee>);
        let edit_form = create_rw_signal(EmployeeFormState::default());
        let edit_error = create_rw_signal(None::<String>);

        let details = create_rw_signal(None::<Employee>);

        let delete_target = create_rw_signal(None::<Employee>);
        let page_messages = create_rw_signal(MessageState::default());

        let repo_for_create = repository.clone();
        let create_action = create_action(move |payload: &CreateEmployee| {
            let repo = repo_for_create.clone();
            let payload = payload.clone();
            async move { repo.create(payload).await }
        });

        let repo_for_update = repository.clone();
        let update_action = leptos::create_action(move |input: &(i64, UpdateEmployee)| {
            let repo = repo_for_update.clone();
            let (id, payload) = input.clone();
            async move { repo.update(id, payload).await }
        });

        let repo_for_delete = repository.clone();
        let delete_action = leptos::create_action(move |id: &i64| {
            let repo = repo_for_delete.clone();
            let id = *id;
            async move { repo.delete(id).await }
        });

        // Every successful mutation re-fetches the roster; the list is
        // never patched locally.
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
                            roster_query.update(|query| *query = query.refreshed());
                        }
                        Err(err) => add_error.set(Some(err.to_string())),
                    }
                }
            });
        }

        {
            create_effect(move |_| {
                if let Some(result) = update_action.value().get() {
                    match result {
                        Ok(employee) => {
                            page_messages.update(|state| {
                                state.set_success(format!(
                                    "Employee '{}' updated.",
                                    employee.full_name
                                ));
                            });
                            editing.set(None);
                            edit_error.set(None);
                            roster_query.update(|query| *query = query.refreshed());
                        }
                        Err(err) => edit_error.set(Some(err.to_string())),
                    }
                }
            });
        }

        {
            create_effect(move |_| {
                if let Some(result) = delete_action.value().get() {
                    delete_target.set(None);
                    match result {
                        Ok(employee) => {
                            page_messages.update(|state| {
                                state.set_success(format!(
                                    "Employee '{}' deleted.",
                                    employee.full_name
                                ));
                            });
                            roster_query.update(|query| *query = query.refreshed());
                        }
                        Err(err) => {
                            page_messages.update(|state| state.set_error(err.to_string()));
                        }
                    }
                }
            });
        }

        // Re-seed the edit form whenever a different row enters editing.
        {
            create_effect(move |_| {
                if let Some(employee) = editing.get() {
                    edit_form.set(EmployeeFormState::from_employee(&employee));
                    edit_error.set(None);
                }
            });
        }

        Self {
            roster_query,
            employees_resource,
            search,
            department_filter,
            show_add_modal,
            add_form,
            add_error,
            create_action,
            editing,
            edit_form,
            edit_error,
            update_action,
            details,
            delete_target,
            delete_action,
            page_messages,
        }
    }

    pub fn retry_fetch(&self) {
        self.roster_query.update(|query| *query = query.refreshed());
    }

    pub fn open_add_modal(&self) {
        self.add_form.update(|state| state.reset());
        self.add_error.set(None);
        self.show_add_modal.set(true);
    }

    /// Closing without a successful save drops entered values.
    pub fn close_add_modal(&self) {
        self.show_add_modal.set(false);
        self.add_form.update(|state| state.reset());
        self.add_error.set(None);
    }

    pub fn close_edit_modal(&self) {
        self.editing.set(None);
        self.edit_form.update(|state| state.reset());
        self.edit_error.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(employee) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(employee.id);
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

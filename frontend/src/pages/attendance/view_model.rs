use crate::{
    api::{
        ApiClient, AttendanceRecord, AttendanceStatus, Employee, MarkAttendance, RequestError,
    },
    pages::attendance::{repository::AttendanceRepository, utils::MarkAttendanceFormState},
    utils::{
        messages::MessageState,
        time::{parse_input_date, today_iso},
    },
};
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

/// Resource key for the attendance list. Carries the active filters plus
/// a token that changes on every filter edit or manual refresh, so a
/// response for a superseded key is simply discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
    token: u32,
}

impl AttendanceQuery {
    pub fn initial(date: Option<NaiveDate>) -> Self {
        Self {
            employee_id: None,
            date,
            token: 0,
        }
    }

    pub fn with_filters(&self, employee_id: Option<String>, date: Option<NaiveDate>) -> Self {
        Self {
            employee_id,
            date,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn refreshed(&self) -> Self {
        self.with_filters(self.employee_id.clone(), self.date)
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub query: RwSignal<AttendanceQuery>,
    pub records_resource: Resource<AttendanceQuery, Result<Vec<AttendanceRecord>, RequestError>>,
    /// Picker roster; failures are logged and leave the list empty.
    pub employees_resource: Resource<(), Vec<Employee>>,

    /// Raw input values backing the filter controls.
    pub date_input: RwSignal<String>,
    pub employee_input: RwSignal<String>,

    pub show_mark_modal: RwSignal<bool>,
    pub mark_form: RwSignal<MarkAttendanceFormState>,
    pub mark_error: RwSignal<Option<String>>,
    pub mark_action: Action<MarkAttendance, Result<AttendanceRecord, RequestError>>,

    pub toggle_action: Action<(i64, AttendanceStatus), Result<AttendanceRecord, RequestError>>,
    pub delete_target: RwSignal<Option<AttendanceRecord>>,
    pub delete_action: Action<i64, Result<(), RequestError>>,

    pub page_messages: RwSignal<MessageState>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = AttendanceRepository::with_client(Rc::new(api));

        // The date filter starts at today; the employee filter starts
        // unset ("all employees").
        let date_input = create_rw_signal(today_iso());
        let employee_input = create_rw_signal(String::new());
        let query = create_rw_signal(AttendanceQuery::initial(parse_input_date(&today_iso())));

        let repo_for_records = repository.clone();
        let records_resource = create_resource(
            move || query.get(),
            move |current: AttendanceQuery| {
                let repo = repo_for_records.clone();
                async move {
                    repo.fetch_records(current.employee_id.as_deref(), current.date)
                        .await
                }
            },
        );

        let repo_for_employees = repository.clone();
        let employees_resource = create_resource(
            || (),
            move |_| {
                let repo = repo_for_employees.clone();
                async move {
                    match repo.fetch_employees().await {
                        Ok(employees) => employees,
                        Err(err) => {
                            log::warn!("Employee picker fetch failed: {err}");
                            Vec::new()
                        }
                    }
                }
            },
        );

        let show_mark_modal = create_rw_signal(false);
        let mark_form = create_rw_signal(MarkAttendanceFormState::new());
        let mark_error = create_rw_signal(None::<String>);

        let delete_target = create_rw_signal(None::<AttendanceRecord>);
        let page_messages = create_rw_signal(MessageState::default());

        let repo_for_mark = repository.clone();
        let mark_action = create_action(move |payload: &MarkAttendance| {
            let repo = repo_for_mark.clone();
            let payload = payload.clone();
            async move { repo.mark(payload).await }
        });

        let repo_for_toggle = repository.clone();
        let toggle_action = create_action(move |input: &(i64, AttendanceStatus)| {
            let repo = repo_for_toggle.clone();
            let (id, status) = *input;
            async move { repo.set_status(id, status).await }
        });

        let repo_for_delete = repository.clone();
        let delete_action = create_action(move |id: &i64| {
            let repo = repo_for_delete.clone();
            let id = *id;
            async move { repo.delete(id).await }
        });

        {
            create_effect(move |_| {
                if let Some(result) = mark_action.value().get() {
                    match result {
                        Ok(_) => {
                            page_messages.update(|state| state.set_success("Attendance marked."));
                            show_mark_modal.set(false);
                            mark_form.update(|state| state.reset());
                            mark_error.set(None);
                            query.update(|current| *current = current.refreshed());
                        }
                        Err(err) => mark_error.set(Some(err.to_string())),
                    }
                }
            });
        }

        {
            create_effect(move |_| {
                if let Some(result) = toggle_action.value().get() {
                    match result {
                        Ok(_) => {
                            page_messages.update(MessageState::clear);
                            query.update(|current| *current = current.refreshed());
                        }
                        Err(err) => {
                            page_messages.update(|state| state.set_error(err.to_string()));
                        }
                    }
                }
            });
        }

        {
            create_effect(move |_| {
                if let Some(result) = delete_action.value().get() {
                    delete_target.set(None);
                    match result {
                        Ok(()) => {
                            page_messages
                                .update(|state| state.set_success("Attendance record deleted."));
                            query.update(|current| *current = current.refreshed());
                        }
                        Err(err) => {
                            page_messages.update(|state| state.set_error(err.to_string()));
                        }
                    }
                }
            });
        }

        Self {
            query,
            records_resource,
            employees_resource,
            date_input,
            employee_input,
            show_mark_modal,
            mark_form,
            mark_error,
            mark_action,
            toggle_action,
            delete_target,
            delete_action,
            page_messages,
        }
    }

    fn apply_filters(&self) {
        let employee = {
            let raw = self.employee_input.get_untracked();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        let date = parse_input_date(&self.date_input.get_untracked());
        self.query
            .update(|current| *current = current.with_filters(employee, date));
    }

    pub fn set_date_filter(&self, value: String) {
        self.date_input.set(value);
        self.apply_filters();
    }

    /// Clearing the date means "no date constraint", not "today".
    pub fn clear_date_filter(&self) {
        self.set_date_filter(String::new());
    }

    pub fn set_employee_filter(&self, value: String) {
        self.employee_input.set(value);
        self.apply_filters();
    }

    pub fn retry_fetch(&self) {
        self.query.update(|current| *current = current.refreshed());
    }

    pub fn open_mark_modal(&self) {
        self.mark_form.update(|state| state.reset());
        self.mark_error.set(None);
        self.show_mark_modal.set(true);
    }

    pub fn close_mark_modal(&self) {
        self.show_mark_modal.set(false);
        self.mark_form.update(|state| state.reset());
        self.mark_error.set(None);
    }

    pub fn toggle_status(&self, record: &AttendanceRecord) {
        if self.toggle_action.pending().get_untracked() {
            return;
        }
        self.toggle_action
            .dispatch((record.id, record.status.toggled()));
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(record) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(record.id);
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

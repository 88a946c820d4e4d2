use crate::api::{
    ApiClient, AttendanceRecord, AttendanceStatus, Employee, MarkAttendance, RequestError,
};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::with_client(Rc::new(ApiClient::new()))
    }

    pub fn with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_records(
        &self,
        employee_id: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, RequestError> {
        self.client.list_attendance(employee_id, date).await
    }

    /// Picker roster. Failures are the caller's to ignore.
    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, RequestError> {
        self.client.list_employees().await
    }

    pub async fn mark(&self, payload: MarkAttendance) -> Result<AttendanceRecord, RequestError> {
        self.client.mark_attendance(&payload).await
    }

    pub async fn set_status(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, RequestError> {
        self.client.update_attendance_status(id, status).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RequestError> {
        self.client.delete_attendance(id).await
    }
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

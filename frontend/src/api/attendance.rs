use super::{
    client::ApiClient,
    error::RequestError,
    types::{AttendanceRecord, AttendanceStatus, MarkAttendance, UpdateAttendanceStatus},
};
use chrono::NaiveDate;

/// Builds the query string pairs for the attendance list endpoint.
/// Absent or blank filters are omitted entirely, never sent as empty
/// parameters. `employee_id` is the external employee code.
pub fn attendance_query_params(
    employee_id: Option<&str>,
    date: Option<NaiveDate>,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(code) = employee_id {
        let code = code.trim();
        if !code.is_empty() {
            params.push(("employee_id", code.to_string()));
        }
    }
    if let Some(date) = date {
        params.push(("date", date.format("%Y-%m-%d").to_string()));
    }
    params
}

impl ApiClient {
    pub async fn list_attendance(
        &self,
        employee_id: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, RequestError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self
            .http_client()
            .get(format!("{base_url}/api/attendance/"));
        let params = attendance_query_params(employee_id, date);
        if !params.is_empty() {
            request = request.query(&params);
        }
        Self::read_json(request.send().await?).await
    }

    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendance,
    ) -> Result<AttendanceRecord, RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{base_url}/api/attendance/"))
            .json(payload)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{base_url}/api/attendance/{id}"))
            .json(&UpdateAttendanceStatus { status })
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<(), RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{base_url}/api/attendance/{id}"))
            .send()
            .await?;
        // Body is an acknowledgement object we have no use for.
        let _: serde_json::Value = Self::read_json(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_filters_yields_no_params() {
        assert!(attendance_query_params(None, None).is_empty());
    }

    #[test]
    fn date_only() {
        assert_eq!(
            attendance_query_params(None, Some(date(2024, 1, 10))),
            vec![("date", "2024-01-10".to_string())]
        );
    }

    #[test]
    fn employee_only() {
        assert_eq!(
            attendance_query_params(Some("EMP001"), None),
            vec![("employee_id", "EMP001".to_string())]
        );
    }

    #[test]
    fn both_filters() {
        assert_eq!(
            attendance_query_params(Some("EMP001"), Some(date(2024, 1, 10))),
            vec![
                ("employee_id", "EMP001".to_string()),
                ("date", "2024-01-10".to_string()),
            ]
        );
    }

    #[test]
    fn blank_employee_code_is_omitted() {
        assert!(attendance_query_params(Some("   "), None).is_empty());
        assert!(attendance_query_params(Some(""), None).is_empty());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    /// External employee code (e.g. "EMP001"), distinct from the row id.
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Present => Self::Absent,
            Self::Absent => Self::Present,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(Self::Present),
            "Absent" => Some(Self::Absent),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    /// Row id of the employee this record belongs to.
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// Joined employee, present when the backend expands it.
    #[serde(default)]
    pub employee: Option<Employee>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentAttendanceDay {
    pub date: String,
    pub present: i64,
    pub absent: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSlice {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub present_today: i64,
    pub absent_today: i64,
    pub total_departments: i64,
    #[serde(default)]
    pub recent_attendance: Vec<RecentAttendanceDay>,
    #[serde(default)]
    pub department_distribution: Vec<DepartmentSlice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Partial update; `None` fields are omitted from the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAttendance {
    /// External employee code; the backend resolves it to the row id.
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAttendanceStatus {
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_toggles_both_ways() {
        assert_eq!(AttendanceStatus::Present.toggled(), AttendanceStatus::Absent);
        assert_eq!(AttendanceStatus::Absent.toggled(), AttendanceStatus::Present);
    }

    #[test]
    fn status_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_value(AttendanceStatus::Present).unwrap(),
            json!("Present")
        );
        assert_eq!(AttendanceStatus::parse("Absent"), Some(AttendanceStatus::Absent));
        assert_eq!(AttendanceStatus::parse("present"), None);
    }

    #[test]
    fn update_employee_omits_unset_fields() {
        let payload = UpdateEmployee {
            full_name: Some("Jane Doe".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "full_name": "Jane Doe" })
        );
    }

    #[test]
    fn attendance_record_tolerates_missing_employee() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 1,
            "employee_id": 7,
            "date": "2024-01-10",
            "status": "Present"
        }))
        .unwrap();
        assert!(record.employee.is_none());
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }
}

use crate::api::{AttendanceRecord, AttendanceStatus, MarkAttendance};
use crate::utils::time::{parse_input_date, today_iso};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendanceFormState {
    /// External employee code from the picker; empty means none selected.
    pub employee_id: String,
    /// Raw `<input type="date">` value.
    pub date: String,
    pub status: AttendanceStatus,
}

impl MarkAttendanceFormState {
    pub fn new() -> Self {
        Self {
            employee_id: String::new(),
            date: today_iso(),
            status: AttendanceStatus::Present,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validates and converts to the request payload. A missing employee
    /// or unparsable date is a validation failure, not a request.
    pub fn to_payload(&self) -> Result<MarkAttendance, String> {
        let employee_id = self.employee_id.trim();
        if employee_id.is_empty() {
            return Err("Please select an employee and date.".to_string());
        }
        let Some(date) = parse_input_date(&self.date) else {
            return Err("Please select an employee and date.".to_string());
        };
        Ok(MarkAttendance {
            employee_id: employee_id.to_string(),
            date,
            status: self.status,
        })
    }
}

impl Default for MarkAttendanceFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub present: usize,
    pub absent: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.present + self.absent
    }
}

/// Derived fresh from the current collection on every render.
pub fn status_counts(records: &[AttendanceRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for record in records {
        match record.status {
            AttendanceStatus::Present => counts.present += 1,
            AttendanceStatus::Absent => counts.absent += 1,
        }
    }
    counts
}

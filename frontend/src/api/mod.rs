mod attendance;
mod client;
mod dashboard;
mod employees;
mod error;
mod types;

pub use attendance::attendance_query_params;
pub use client::ApiClient;
pub use error::RequestError;
pub use types::{
    AttendanceRecord, AttendanceStatus, CreateEmployee, DashboardSummary, DepartmentSlice,
    Employee, MarkAttendance, RecentAttendanceDay, UpdateAttendanceStatus, UpdateEmployee,
};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

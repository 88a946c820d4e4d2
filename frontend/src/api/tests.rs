use super::*;
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

fn employee_json(id: i64, code: &str, name: &str, department: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": code,
        "full_name": name,
        "email": format!("{}@example.com", code.to_lowercase()),
        "department": department
    })
}

#[tokio::test]
async fn lists_employees() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/employees/");
        then.status(200).json_body(json!([
            employee_json(1, "EMP001", "Alice Smith", "Engineering"),
            employee_json(2, "EMP002", "Bob Jones", "Sales"),
        ]));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let employees = client.list_employees().await.unwrap();

    mock.assert();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].employee_id, "EMP001");
    assert_eq!(employees[1].department, "Sales");
}

#[tokio::test]
async fn fetches_a_single_employee() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/employees/7");
        then.status(200)
            .json_body(employee_json(7, "EMP007", "Dana Black", "Finance"));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let employee = client.get_employee(7).await.unwrap();

    mock.assert();
    assert_eq!(employee.id, 7);
    assert_eq!(employee.full_name, "Dana Black");
}

#[tokio::test]
async fn created_employee_shows_up_in_next_fetch() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/employees/")
            .json_body(json!({
                "employee_id": "EMP003",
                "full_name": "Carol White",
                "email": "carol@example.com",
                "department": "HR"
            }));
        then.status(200).json_body(json!({
            "id": 3,
            "employee_id": "EMP003",
            "full_name": "Carol White",
            "email": "carol@example.com",
            "department": "HR"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/");
        then.status(200)
            .json_body(json!([employee_json(3, "EMP003", "Carol White", "HR")]));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let created = client
        .create_employee(&CreateEmployee {
            employee_id: "EMP003".into(),
            full_name: "Carol White".into(),
            email: "carol@example.com".into(),
            department: "HR".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);

    let roster = client.list_employees().await.unwrap();
    assert!(roster.iter().any(|e| e.id == created.id));
}

#[tokio::test]
async fn update_employee_sends_only_set_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/employees/5")
            .json_body(json!({ "department": "Finance" }));
        then.status(200)
            .json_body(employee_json(5, "EMP005", "Dan Green", "Finance"));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let updated = client
        .update_employee(
            5,
            &UpdateEmployee {
                department: Some("Finance".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(updated.department, "Finance");
}

#[tokio::test]
async fn delete_employee_returns_the_deleted_row() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/2");
        then.status(200)
            .json_body(employee_json(2, "EMP002", "Bob Jones", "Sales"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/");
        then.status(200).json_body(json!([]));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let deleted = client.delete_employee(2).await.unwrap();
    assert_eq!(deleted.full_name, "Bob Jones");

    let roster = client.list_employees().await.unwrap();
    assert!(roster.is_empty());
}

#[tokio::test]
async fn delete_failure_surfaces_backend_detail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/42");
        then.status(500).json_body(json!({ "detail": "db locked" }));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let err = client.delete_employee(42).await.unwrap_err();
    assert_eq!(err.to_string(), "db locked");
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/");
        then.status(500).body("Internal Server Error");
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed (500)");
}

#[tokio::test]
async fn attendance_filters_are_encoded_as_query_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/attendance/")
            .query_param("employee_id", "EMP001")
            .query_param("date", "2024-01-10");
        then.status(200).json_body(json!([{
            "id": 9,
            "employee_id": 1,
            "date": "2024-01-10",
            "status": "Present",
            "employee": employee_json(1, "EMP001", "Alice Smith", "Engineering")
        }]));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let records = client
        .list_attendance(
            Some("EMP001"),
            Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Present);
    assert_eq!(
        records[0].employee.as_ref().map(|e| e.employee_id.as_str()),
        Some("EMP001")
    );
}

#[tokio::test]
async fn marks_attendance_and_refetches() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance/").json_body(json!({
            "employee_id": "EMP001",
            "date": "2024-01-10",
            "status": "Present"
        }));
        then.status(200).json_body(json!({
            "id": 11,
            "employee_id": 1,
            "date": "2024-01-10",
            "status": "Present"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance/");
        then.status(200).json_body(json!([{
            "id": 11,
            "employee_id": 1,
            "date": "2024-01-10",
            "status": "Present"
        }]));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let created = client
        .mark_attendance(&MarkAttendance {
            employee_id: "EMP001".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            status: AttendanceStatus::Present,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 11);

    let records = client.list_attendance(None, None).await.unwrap();
    assert!(records.iter().any(|r| r.id == created.id));
}

#[tokio::test]
async fn toggles_attendance_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/attendance/11")
            .json_body(json!({ "status": "Absent" }));
        then.status(200).json_body(json!({
            "id": 11,
            "employee_id": 1,
            "date": "2024-01-10",
            "status": "Absent"
        }));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let updated = client
        .update_attendance_status(11, AttendanceStatus::Present.toggled())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(updated.status, AttendanceStatus::Absent);
}

#[tokio::test]
async fn deletes_attendance_record() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/attendance/11");
        then.status(200).json_body(json!({ "ok": true }));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    client.delete_attendance(11).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn fetches_dashboard_summary() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/summary");
        then.status(200).json_body(json!({
            "total_employees": 10,
            "present_today": 6,
            "absent_today": 2,
            "total_departments": 3,
            "recent_attendance": [
                { "date": "2024-01-10", "present": 6, "absent": 2 }
            ],
            "department_distribution": [
                { "name": "Engineering", "value": 5 },
                { "name": "Sales", "value": 3 },
                { "name": "HR", "value": 2 }
            ]
        }));
    });

    let client = ApiClient::new_with_base_url(&server.base_url());
    let summary = client.dashboard_summary().await.unwrap();
    assert_eq!(summary.total_employees, 10);
    assert_eq!(summary.recent_attendance.len(), 1);
    assert_eq!(summary.department_distribution[0].name, "Engineering");
}

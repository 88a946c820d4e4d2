use crate::api::{ApiClient, CreateEmployee, DashboardSummary, Employee, RequestError};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::with_client(Rc::new(ApiClient::new()))
    }

    pub fn with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_summary(&self) -> Result<DashboardSummary, RequestError> {
        self.client.dashboard_summary().await
    }

    /// The quick action on the dashboard creates an employee directly.
    pub async fn add_employee(
        &self,
        payload: CreateEmployee,
    ) -> Result<Employee, RequestError> {
        self.client.create_employee(&payload).await
    }
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

use crate::api::{ApiClient, CreateEmployee, Employee, RequestError, UpdateEmployee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::with_client(Rc::new(ApiClient::new()))
    }

    pub fn with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, RequestError> {
        self.client.list_employees().await
    }

    pub async fn create(&self, payload: CreateEmployee) -> Result<Employee, RequestError> {
        self.client.create_employee(&payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: UpdateEmployee,
    ) -> Result<Employee, RequestError> {
        self.client.update_employee(id, &payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<Employee, RequestError> {
        self.client.delete_employee(id).await
    }
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

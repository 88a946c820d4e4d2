use super::{
    client::ApiClient,
    error::RequestError,
    types::{CreateEmployee, Employee, UpdateEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{base_url}/api/employees/"))
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{base_url}/api/employees/{id}"))
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn create_employee(
        &self,
        payload: &CreateEmployee,
    ) -> Result<Employee, RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{base_url}/api/employees/"))
            .json(payload)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &UpdateEmployee,
    ) -> Result<Employee, RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{base_url}/api/employees/{id}"))
            .json(payload)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Returns the deleted employee. The backend cascades the delete to
    /// the employee's attendance records.
    pub async fn delete_employee(&self, id: i64) -> Result<Employee, RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{base_url}/api/employees/{id}"))
            .send()
            .await?;
        Self::read_json(response).await
    }
}

use super::{client::ApiClient, error::RequestError, types::DashboardSummary};

impl ApiClient {
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, RequestError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{base_url}/api/dashboard/summary"))
            .send()
            .await?;
        Self::read_json(response).await
    }
}

use async_trait::async_trait;
use tracing::debug;

use super::HttpApiClient;
use crate::clients::HomeworkClient;
use crate::errors::Result;
use crate::models::homeworks::entities::Homework;

#[async_trait]
impl HomeworkClient for HttpApiClient {
    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>> {
        debug!("Fetching homework {}", homework_id);
        self.get_optional(&format!("/homeworks/{homework_id}"), &[])
            .await
    }
}

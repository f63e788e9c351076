use async_trait::async_trait;
use tracing::debug;

use super::HttpApiClient;
use crate::clients::SubmissionClient;
use crate::errors::Result;
use crate::models::{
    files::responses::SignedFileUrl,
    grades::{entities::Grade, requests::UpdateGradeRequest},
    submissions::{entities::Submission, responses::SubmissionListResponse},
};

#[async_trait]
impl SubmissionClient for HttpApiClient {
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        debug!("Fetching submission {}", submission_id);
        self.get_optional(&format!("/submissions/{submission_id}"), &[])
            .await
    }

    async fn list_homework_submissions(
        &self,
        homework_id: i64,
        page: i64,
        size: i64,
    ) -> Result<SubmissionListResponse> {
        self.get_required(
            &format!("/homeworks/{homework_id}/submissions"),
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    async fn update_submission_grade(
        &self,
        submission_id: i64,
        request: UpdateGradeRequest,
    ) -> Result<Grade> {
        debug!("Saving grade for submission {}", submission_id);
        self.put_json(&format!("/submissions/{submission_id}/grade"), &request)
            .await
    }

    async fn get_signed_display_url(
        &self,
        submission_id: i64,
        file_key: &str,
    ) -> Result<SignedFileUrl> {
        // s3 键可能包含斜杠，作为查询参数传递
        self.get_required(
            &format!("/submissions/{submission_id}/files/display-url"),
            &[("key", file_key.to_string())],
        )
        .await
    }

    async fn get_signed_download_url(
        &self,
        submission_id: i64,
        file_key: &str,
    ) -> Result<SignedFileUrl> {
        self.get_required(
            &format!("/submissions/{submission_id}/files/download-url"),
            &[("key", file_key.to_string())],
        )
        .await
    }
}

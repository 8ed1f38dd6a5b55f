use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, Questionnaire, QuestionnaireList, QuestionnairePayload, QuestionnaireResponseList,
};
use crate::state::query::QueryParams;

const BASE: &str = "/questionnaire-templates";

impl ApiClient {
    pub async fn list_questionnaires(
        &self,
        params: &QueryParams,
    ) -> Result<QuestionnaireList, ApiError> {
        self.get_json(&format!("{}/", BASE), params.as_pairs()).await
    }

    pub async fn get_questionnaire(&self, id: &str) -> Result<Questionnaire, ApiError> {
        self.get_json(&format!("{}/{}", BASE, id), &[]).await
    }

    pub async fn create_questionnaire(
        &self,
        payload: &QuestionnairePayload,
    ) -> Result<Questionnaire, ApiError> {
        self.post_json(&format!("{}/", BASE), payload).await
    }

    pub async fn update_questionnaire(
        &self,
        id: &str,
        payload: &QuestionnairePayload,
    ) -> Result<Questionnaire, ApiError> {
        self.put_json(&format!("{}/{}", BASE, id), payload).await
    }

    pub async fn delete_questionnaire(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", BASE, id)).await
    }

    pub async fn set_questionnaire_active(&self, id: &str, is_active: bool) -> Result<(), ApiError> {
        self.put_action(
            &format!("{}/{}/active", BASE, id),
            &json!({ "is_active": is_active }),
        )
        .await
    }

    pub async fn questionnaire_responses(
        &self,
        id: &str,
    ) -> Result<QuestionnaireResponseList, ApiError> {
        self.get_json(&format!("{}/{}/responses", BASE, id), &[]).await
    }
}

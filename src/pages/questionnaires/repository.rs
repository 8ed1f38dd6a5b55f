use std::rc::Rc;

use crate::api::types::{
    ApiError, Questionnaire, QuestionnaireList, QuestionnairePayload, QuestionnaireResponseList,
};
use crate::api::ApiClient;
use crate::state::query::{resources, QueryClient, QueryParams};

#[derive(Clone)]
pub struct QuestionnairesRepository {
    client: Rc<ApiClient>,
    queries: QueryClient,
}

impl QuestionnairesRepository {
    pub fn new(client: Rc<ApiClient>, queries: QueryClient) -> Self {
        Self { client, queries }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<QuestionnaireList, ApiError> {
        self.queries
            .fetch(resources::QUESTIONNAIRES, params, || {
                self.client.list_questionnaires(params)
            })
            .await
    }

    /// The editor always wants the latest template, so this skips the cache.
    pub async fn get(&self, id: String) -> Result<Questionnaire, ApiError> {
        self.client.get_questionnaire(&id).await
    }

    pub async fn responses(&self, id: String) -> Result<QuestionnaireResponseList, ApiError> {
        self.client.questionnaire_responses(&id).await
    }

    pub async fn save(
        &self,
        id: Option<String>,
        payload: QuestionnairePayload,
    ) -> Result<Questionnaire, ApiError> {
        let operation = async {
            match &id {
                Some(id) => self.client.update_questionnaire(id, &payload).await,
                None => self.client.create_questionnaire(&payload).await,
            }
        };
        self.queries.mutate(resources::QUESTIONNAIRES, operation).await
    }

    pub async fn set_active(&self, id: String, is_active: bool) -> Result<(), ApiError> {
        self.queries
            .mutate(
                resources::QUESTIONNAIRES,
                self.client.set_questionnaire_active(&id, is_active),
            )
            .await
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.queries
            .mutate(resources::QUESTIONNAIRES, self.client.delete_questionnaire(&id))
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::types::Question;
    use crate::pages::questionnaires::utils::list_params;
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;
    use leptos::create_runtime;
    use serde_json::json;

    #[tokio::test]
    async fn list_pages_and_filters_by_active_flag() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/questionnaire-templates/")
                .query_param("offset", "20")
                .query_param("limit", "20")
                .query_param("is_active", "true");
            then.status(200).json_body(json!({
                "questionnaires": [{
                    "id": "qst-1",
                    "title": "Intake",
                    "questions": [],
                    "is_active": true
                }],
                "total": 21
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = QuestionnairesRepository::new(Rc::new(api), QueryClient::new());
        let list = repo.list(&list_params(2, "true")).await.unwrap();
        assert_eq!(list.questionnaires[0].title, "Intake");
        assert_eq!(list.total, 21);
        mock.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn create_posts_the_full_question_list() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/questionnaire-templates/")
                .json_body_partial(r#"{"title": "Intake"}"#);
            then.status(201).json_body(json!({
                "id": "qst-1",
                "title": "Intake",
                "questions": [{
                    "id": "q-1",
                    "question_text": "How are you sleeping?",
                    "question_type": "text",
                    "order": 1
                }],
                "is_active": false
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = QuestionnairesRepository::new(Rc::new(api), QueryClient::new());
        let payload = QuestionnairePayload {
            title: "Intake".into(),
            description: String::new(),
            questions: vec![Question {
                id: "q-1".into(),
                question_text: "How are you sleeping?".into(),
                question_type: "text".into(),
                options: None,
                order: 1,
            }],
        };
        let saved = repo.save(None, payload).await.unwrap();
        assert_eq!(saved.id, "qst-1");
        mock.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn responses_come_from_the_template_subresource() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/questionnaire-templates/qst-1/responses");
            then.status(200).json_body(json!({
                "responses": [{
                    "id": "rsp-1",
                    "questionnaire_id": "qst-1",
                    "patient_id": "pat-1",
                    "answers": { "q-1": "Badly" },
                    "completed_at": "2026-08-20T10:00:00Z"
                }],
                "total": 1
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = QuestionnairesRepository::new(Rc::new(api), QueryClient::new());
        let list = repo.responses("qst-1".into()).await.unwrap();
        assert_eq!(list.responses[0].patient_id, "pat-1");
        mock.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn toggling_active_puts_the_flag() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/v1/questionnaire-templates/qst-1/active")
                .json_body(json!({ "is_active": false }));
            then.status(200).json_body(json!({ "message": "updated" }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = QuestionnairesRepository::new(Rc::new(api), QueryClient::new());
        repo.set_active("qst-1".into(), false).await.unwrap();
        mock.assert_async().await;
        runtime.dispose();
    }
}

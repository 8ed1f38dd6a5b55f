use std::rc::Rc;

use leptos::*;

use super::repository::QuestionnairesRepository;
use super::utils::{list_params, QuestionnaireFormState};
use crate::api::types::{
    ApiError, Questionnaire, QuestionnaireList, QuestionnairePayload, QuestionnaireResponseList,
};
use crate::state::auth::{use_api, use_queries};
use crate::state::query::resources;
use crate::utils::storage::navigate_to;

type ListKey = (u64, usize, String);
type SavePayload = (Option<String>, QuestionnairePayload);

#[derive(Clone, Copy)]
pub struct QuestionnairesViewModel {
    pub page: RwSignal<usize>,
    pub active_filter: RwSignal<String>,
    pub list_resource: Resource<ListKey, Result<QuestionnaireList, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<Questionnaire>>,
    pub responses_for: RwSignal<Option<Questionnaire>>,
    pub responses_resource:
        Resource<Option<String>, Option<Result<QuestionnaireResponseList, ApiError>>>,
    pub toggle_action: Action<(String, bool), Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl QuestionnairesViewModel {
    pub fn set_active_filter(&self, value: String) {
        self.active_filter.set(value);
        self.page.set(1);
    }
}

pub fn use_questionnaires_view_model() -> QuestionnairesViewModel {
    let queries = use_queries();
    let repository = QuestionnairesRepository::new(Rc::new(use_api()), queries.clone());
    let version = queries.version(resources::QUESTIONNAIRES);

    let page = create_rw_signal(1usize);
    let active_filter = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let pending_delete = create_rw_signal(None::<Questionnaire>);
    let responses_for = create_rw_signal(None::<Questionnaire>);

    let repo_for_list = repository.clone();
    let list_resource = create_resource(
        move || (version.get(), page.get(), active_filter.get()),
        move |(_version, page, active)| {
            let repo = repo_for_list.clone();
            async move { repo.list(&list_params(page, &active)).await }
        },
    );

    let repo_for_responses = repository.clone();
    let responses_resource = create_resource(
        move || responses_for.get().map(|q| q.id),
        move |id| {
            let repo = repo_for_responses.clone();
            async move {
                match id {
                    Some(id) => Some(repo.responses(id).await),
                    None => None,
                }
            }
        },
    );

    let repo_for_toggle = repository.clone();
    let toggle_action = create_action(move |(id, is_active): &(String, bool)| {
        let repo = repo_for_toggle.clone();
        let id = id.clone();
        let is_active = *is_active;
        async move { repo.set_active(id, is_active).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete(id).await }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = toggle_action.value().get() {
            error.set(Some(err));
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    pending_delete.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    QuestionnairesViewModel {
        page,
        active_filter,
        list_resource,
        error,
        pending_delete,
        responses_for,
        responses_resource,
        toggle_action,
        delete_action,
    }
}

#[derive(Clone, Copy)]
pub struct QuestionnaireEditorViewModel {
    pub editing_id: StoredValue<Option<String>>,
    pub form: QuestionnaireFormState,
    pub load_resource: Resource<(), Option<Result<Questionnaire, ApiError>>>,
    pub error: RwSignal<Option<ApiError>>,
    pub save_action: Action<SavePayload, Result<Questionnaire, ApiError>>,
}

impl QuestionnaireEditorViewModel {
    pub fn is_edit(&self) -> bool {
        self.editing_id.with_value(|id| id.is_some())
    }

    pub fn submit(&self) {
        match self.form.to_payload() {
            Ok(payload) => {
                let id = self.editing_id.get_value();
                self.save_action.dispatch((id, payload));
            }
            Err(msg) => self.error.set(Some(ApiError::unknown(msg))),
        }
    }
}

pub fn use_questionnaire_editor_view_model(id: Option<String>) -> QuestionnaireEditorViewModel {
    let queries = use_queries();
    let repository = QuestionnairesRepository::new(Rc::new(use_api()), queries);

    let editing_id = store_value(id.clone());
    let form = QuestionnaireFormState::new();
    let error = create_rw_signal(None::<ApiError>);
    let loaded = create_rw_signal(false);

    let repo_for_load = repository.clone();
    let load_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_for_load.clone();
            let id = id.clone();
            async move {
                match id {
                    Some(id) => Some(repo.get(id).await),
                    None => None,
                }
            }
        },
    );

    create_effect(move |_| {
        if loaded.get() {
            return;
        }
        match load_resource.get() {
            Some(Some(Ok(record))) => {
                form.load_record(&record);
                loaded.set(true);
            }
            Some(Some(Err(err))) => {
                error.set(Some(err));
                loaded.set(true);
            }
            _ => {}
        }
    });

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(id, payload): &SavePayload| {
        let repo = repo_for_save.clone();
        let id = id.clone();
        let payload = payload.clone();
        async move { repo.save(id, payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => navigate_to("/questionnaires"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    QuestionnaireEditorViewModel {
        editing_id,
        form,
        load_resource,
        error,
        save_action,
    }
}

use std::rc::Rc;

use leptos::*;

use super::repository::MatchesRepository;
use super::utils::{list_params, MatchFormState};
use crate::api::types::{ApiError, MatchList, MatchPayload, MatchRecord};
use crate::state::auth::{use_api, use_queries};
use crate::state::query::resources;

type ListKey = (u64, String, String, String, String);
type SavePayload = (Option<String>, MatchPayload);

#[derive(Clone, Copy)]
pub struct MatchesViewModel {
    pub patient_filter: RwSignal<String>,
    pub therapist_filter: RwSignal<String>,
    pub min_score_filter: RwSignal<String>,
    pub max_score_filter: RwSignal<String>,
    pub list_resource: Resource<ListKey, Result<MatchList, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub form: MatchFormState,
    pub editing: RwSignal<Option<Option<String>>>,
    pub pending_delete: RwSignal<Option<MatchRecord>>,
    pub save_action: Action<SavePayload, Result<MatchRecord, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl MatchesViewModel {
    pub fn open_create(&self) {
        self.form.reset();
        self.editing.set(Some(None));
    }

    pub fn open_edit(&self, record: &MatchRecord) {
        self.form.load_record(record);
        self.editing.set(Some(Some(record.id.clone())));
    }

    pub fn close_editor(&self) {
        self.editing.set(None);
    }
}

pub fn use_matches_view_model() -> MatchesViewModel {
    let queries = use_queries();
    let repository = MatchesRepository::new(Rc::new(use_api()), queries.clone());
    let version = queries.version(resources::MATCHES);

    let patient_filter = create_rw_signal(String::new());
    let therapist_filter = create_rw_signal(String::new());
    let min_score_filter = create_rw_signal(String::new());
    let max_score_filter = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let form = MatchFormState::new();
    let editing = create_rw_signal(None::<Option<String>>);
    let pending_delete = create_rw_signal(None::<MatchRecord>);

    let repo_for_list = repository.clone();
    let list_resource = create_resource(
        move || {
            (
                version.get(),
                patient_filter.get(),
                therapist_filter.get(),
                min_score_filter.get(),
                max_score_filter.get(),
            )
        },
        move |(_version, patient, therapist, min, max)| {
            let repo = repo_for_list.clone();
            async move { repo.list(&list_params(&patient, &therapist, &min, &max)).await }
        },
    );

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(id, payload): &SavePayload| {
        let repo = repo_for_save.clone();
        let id = id.clone();
        let payload = payload.clone();
        async move { repo.save(id, payload).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.reset();
                    editing.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
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

    MatchesViewModel {
        patient_filter,
        therapist_filter,
        min_score_filter,
        max_score_filter,
        list_resource,
        error,
        form,
        editing,
        pending_delete,
        save_action,
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn edit_loads_the_record_into_the_form() {
        with_runtime(|| {
            let vm = use_matches_view_model();
            let record = MatchRecord {
                id: "mat-1".into(),
                patient_id: "pat-1".into(),
                therapist_id: "the-1".into(),
                match_score: 82,
                language_match: true,
                specialization_match: false,
                created_at: None,
            };
            vm.open_edit(&record);
            assert_eq!(vm.editing.get(), Some(Some("mat-1".to_string())));
            assert_eq!(vm.form.match_score.get(), "82");
            assert!(vm.form.language_match.get());
        });
    }
}

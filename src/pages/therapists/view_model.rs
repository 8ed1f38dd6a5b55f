use std::rc::Rc;

use leptos::*;

use super::repository::TherapistsRepository;
use super::utils::{list_params, TherapistFormState};
use crate::api::types::{ApiError, Therapist, TherapistDraft, TherapistList};
use crate::state::auth::{use_api, use_queries};
use crate::state::query::resources;

type ListKey = (u64, usize, String, String, String);
type SavePayload = (Option<String>, TherapistDraft);

#[derive(Clone, Copy)]
pub struct TherapistsViewModel {
    pub page: RwSignal<usize>,
    pub query_filter: RwSignal<String>,
    pub verified_filter: RwSignal<String>,
    pub accepting_filter: RwSignal<String>,
    pub list_resource: Resource<ListKey, Result<TherapistList, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub form: TherapistFormState,
    /// `Some(None)` means the create modal, `Some(Some(id))` the edit modal.
    pub editing: RwSignal<Option<Option<String>>>,
    pub pending_delete: RwSignal<Option<Therapist>>,
    pub save_action: Action<SavePayload, Result<Therapist, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub verification_action: Action<(String, bool), Result<(), ApiError>>,
    pub accepting_action: Action<(String, bool), Result<(), ApiError>>,
}

impl TherapistsViewModel {
    pub fn set_query_filter(&self, value: String) {
        self.query_filter.set(value);
        self.page.set(1);
    }

    pub fn set_verified_filter(&self, value: String) {
        self.verified_filter.set(value);
        self.page.set(1);
    }

    pub fn set_accepting_filter(&self, value: String) {
        self.accepting_filter.set(value);
        self.page.set(1);
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.editing.set(Some(None));
    }

    pub fn open_edit(&self, record: &Therapist) {
        self.form.load_record(record);
        self.editing.set(Some(Some(record.id.clone())));
    }

    pub fn close_editor(&self) {
        self.editing.set(None);
    }
}

pub fn use_therapists_view_model() -> TherapistsViewModel {
    let queries = use_queries();
    let repository = TherapistsRepository::new(Rc::new(use_api()), queries.clone());
    let version = queries.version(resources::THERAPISTS);

    let page = create_rw_signal(1usize);
    let query_filter = create_rw_signal(String::new());
    let verified_filter = create_rw_signal(String::new());
    let accepting_filter = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let form = TherapistFormState::new();
    let editing = create_rw_signal(None::<Option<String>>);
    let pending_delete = create_rw_signal(None::<Therapist>);

    let repo_for_list = repository.clone();
    let list_resource = create_resource(
        move || {
            (
                version.get(),
                page.get(),
                query_filter.get(),
                verified_filter.get(),
                accepting_filter.get(),
            )
        },
        move |(_version, page, query, verified, accepting)| {
            let repo = repo_for_list.clone();
            async move {
                repo.list(&list_params(page, &query, &verified, &accepting))
                    .await
            }
        },
    );

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(id, draft): &SavePayload| {
        let repo = repo_for_save.clone();
        let id = id.clone();
        let draft = draft.clone();
        async move { repo.save(id, draft).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete(id).await }
    });

    let repo_for_verification = repository.clone();
    let verification_action = create_action(move |(id, verified): &(String, bool)| {
        let repo = repo_for_verification.clone();
        let id = id.clone();
        let verified = *verified;
        async move { repo.set_verification(id, verified).await }
    });

    let repo_for_accepting = repository.clone();
    let accepting_action = create_action(move |(id, accepting): &(String, bool)| {
        let repo = repo_for_accepting.clone();
        let id = id.clone();
        let accepting = *accepting;
        async move { repo.set_accepting(id, accepting).await }
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

    create_effect(move |_| {
        if let Some(Err(err)) = verification_action.value().get() {
            error.set(Some(err));
        }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = accepting_action.value().get() {
            error.set(Some(err));
        }
    });

    TherapistsViewModel {
        page,
        query_filter,
        verified_filter,
        accepting_filter,
        list_resource,
        error,
        form,
        editing,
        pending_delete,
        save_action,
        delete_action,
        verification_action,
        accepting_action,
    }
}

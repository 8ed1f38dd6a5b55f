use std::rc::Rc;

use leptos::*;

use super::repository::PatientsRepository;
use super::utils::{list_params, PatientFormState};
use crate::api::types::{ApiError, Patient, PatientDraft, PatientList};
use crate::state::auth::{use_api, use_queries};
use crate::state::query::resources;

type SavePayload = (Option<String>, PatientDraft);

#[derive(Clone, Copy)]
pub struct PatientsViewModel {
    pub page: RwSignal<usize>,
    pub list_resource: Resource<(u64, usize), Result<PatientList, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub form: PatientFormState,
    pub editing: RwSignal<Option<Option<String>>>,
    pub pending_delete: RwSignal<Option<Patient>>,
    pub save_action: Action<SavePayload, Result<Patient, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl PatientsViewModel {
    pub fn open_create(&self) {
        self.form.reset();
        self.editing.set(Some(None));
    }

    pub fn open_edit(&self, record: &Patient) {
        self.form.load_record(record);
        self.editing.set(Some(Some(record.id.clone())));
    }

    pub fn close_editor(&self) {
        self.editing.set(None);
    }
}

pub fn use_patients_view_model() -> PatientsViewModel {
    let queries = use_queries();
    let repository = PatientsRepository::new(Rc::new(use_api()), queries.clone());
    let version = queries.version(resources::PATIENTS);

    let page = create_rw_signal(1usize);
    let error = create_rw_signal(None::<ApiError>);
    let form = PatientFormState::new();
    let editing = create_rw_signal(None::<Option<String>>);
    let pending_delete = create_rw_signal(None::<Patient>);

    let repo_for_list = repository.clone();
    let list_resource = create_resource(
        move || (version.get(), page.get()),
        move |(_version, page)| {
            let repo = repo_for_list.clone();
            async move { repo.list(&list_params(page)).await }
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

    PatientsViewModel {
        page,
        list_resource,
        error,
        form,
        editing,
        pending_delete,
        save_action,
        delete_action,
    }
}

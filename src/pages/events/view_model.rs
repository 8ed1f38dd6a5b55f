use std::rc::Rc;

use leptos::*;

use super::repository::EventsRepository;
use super::utils::{list_params, EventFormState};
use crate::api::types::{ApiError, Event, EventList, EventPayload};
use crate::state::auth::{use_api, use_queries};
use crate::state::query::resources;

type ListKey = (u64, String, String, String, String);
type SavePayload = (Option<String>, EventPayload);

#[derive(Clone, Copy)]
pub struct EventsViewModel {
    pub title_filter: RwSignal<String>,
    pub time_filter: RwSignal<String>,
    pub start_date_filter: RwSignal<String>,
    pub end_date_filter: RwSignal<String>,
    pub list_resource: Resource<ListKey, Result<EventList, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub form: EventFormState,
    pub editing: RwSignal<Option<Option<String>>>,
    pub pending_delete: RwSignal<Option<Event>>,
    pub save_action: Action<SavePayload, Result<Event, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl EventsViewModel {
    pub fn open_create(&self) {
        self.form.reset();
        self.editing.set(Some(None));
    }

    pub fn open_edit(&self, record: &Event) {
        self.form.load_record(record);
        self.editing.set(Some(Some(record.id.clone())));
    }

    pub fn close_editor(&self) {
        self.editing.set(None);
    }
}

pub fn use_events_view_model() -> EventsViewModel {
    let queries = use_queries();
    let repository = EventsRepository::new(Rc::new(use_api()), queries.clone());
    let version = queries.version(resources::EVENTS);

    let title_filter = create_rw_signal(String::new());
    let time_filter = create_rw_signal(String::new());
    let start_date_filter = create_rw_signal(String::new());
    let end_date_filter = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let form = EventFormState::new();
    let editing = create_rw_signal(None::<Option<String>>);
    let pending_delete = create_rw_signal(None::<Event>);

    let repo_for_list = repository.clone();
    let list_resource = create_resource(
        move || {
            (
                version.get(),
                title_filter.get(),
                time_filter.get(),
                start_date_filter.get(),
                end_date_filter.get(),
            )
        },
        move |(_version, title, time, start, end)| {
            let repo = repo_for_list.clone();
            async move { repo.list(&list_params(&title, &time, &start, &end)).await }
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

    EventsViewModel {
        title_filter,
        time_filter,
        start_date_filter,
        end_date_filter,
        list_resource,
        error,
        form,
        editing,
        pending_delete,
        save_action,
        delete_action,
    }
}

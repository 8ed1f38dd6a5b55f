use std::rc::Rc;

use leptos::*;

use super::repository::CertificatesRepository;
use super::utils::list_params;
use crate::api::types::{ApiError, Certificate, CertificateList};
use crate::state::auth::{use_api, use_queries};
use crate::state::query::resources;

type ListKey = (u64, String, String, String);

#[derive(Clone, Copy)]
pub struct CertificatesViewModel {
    pub therapist_filter: RwSignal<String>,
    pub type_filter: RwSignal<String>,
    pub status_filter: RwSignal<String>,
    pub list_resource: Resource<ListKey, Result<CertificateList, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub pending_reject: RwSignal<Option<Certificate>>,
    pub rejection_reason: RwSignal<String>,
    pub approve_action: Action<String, Result<(), ApiError>>,
    pub reject_action: Action<(String, String), Result<(), ApiError>>,
}

pub fn use_certificates_view_model() -> CertificatesViewModel {
    let queries = use_queries();
    let repository = CertificatesRepository::new(Rc::new(use_api()), queries.clone());
    let version = queries.version(resources::CERTIFICATES);

    let therapist_filter = create_rw_signal(String::new());
    let type_filter = create_rw_signal(String::new());
    let status_filter = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let pending_reject = create_rw_signal(None::<Certificate>);
    let rejection_reason = create_rw_signal(String::new());

    let repo_for_list = repository.clone();
    let list_resource = create_resource(
        move || {
            (
                version.get(),
                therapist_filter.get(),
                type_filter.get(),
                status_filter.get(),
            )
        },
        move |(_version, therapist, kind, status)| {
            let repo = repo_for_list.clone();
            async move { repo.list(&list_params(&therapist, &kind, &status)).await }
        },
    );

    let repo_for_approve = repository.clone();
    let approve_action = create_action(move |id: &String| {
        let repo = repo_for_approve.clone();
        let id = id.clone();
        async move { repo.approve(id).await }
    });

    let repo_for_reject = repository.clone();
    let reject_action = create_action(move |(id, reason): &(String, String)| {
        let repo = repo_for_reject.clone();
        let id = id.clone();
        let reason = reason.clone();
        async move { repo.reject(id, reason).await }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = approve_action.value().get() {
            error.set(Some(err));
        }
    });

    create_effect(move |_| {
        if let Some(result) = reject_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    pending_reject.set(None);
                    rejection_reason.set(String::new());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    CertificatesViewModel {
        therapist_filter,
        type_filter,
        status_filter,
        list_resource,
        error,
        pending_reject,
        rejection_reason,
        approve_action,
        reject_action,
    }
}

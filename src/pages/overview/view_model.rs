use std::rc::Rc;

use leptos::*;

use super::repository::OverviewRepository;
use super::utils::OverviewStats;
use crate::api::types::ApiError;
use crate::state::auth::{use_api, use_queries};
use crate::state::query::resources;

#[derive(Clone, Copy)]
pub struct OverviewViewModel {
    pub stats_resource: Resource<(u64, u64, u64, u64), Result<OverviewStats, ApiError>>,
}

pub fn use_overview_view_model() -> OverviewViewModel {
    let queries = use_queries();
    let repository = OverviewRepository::new(Rc::new(use_api()), queries.clone());

    let accounts_version = queries.version(resources::ACCOUNTS);
    let therapists_version = queries.version(resources::THERAPISTS);
    let patients_version = queries.version(resources::PATIENTS);
    let events_version = queries.version(resources::EVENTS);

    let stats_resource = create_resource(
        move || {
            (
                accounts_version.get(),
                therapists_version.get(),
                patients_version.get(),
                events_version.get(),
            )
        },
        move |_versions| {
            let repo = repository.clone();
            async move { repo.load().await }
        },
    );

    OverviewViewModel { stats_resource }
}

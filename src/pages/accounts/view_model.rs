use std::rc::Rc;

use leptos::*;

use super::repository::AccountsRepository;
use super::utils::list_params;
use crate::api::types::{Account, AccountList, ApiError};
use crate::state::auth::{use_api, use_queries};
use crate::state::query::resources;

type ListKey = (u64, usize, String, String, String);

#[derive(Clone, Copy)]
pub struct AccountsViewModel {
    pub page: RwSignal<usize>,
    pub email_filter: RwSignal<String>,
    pub role_filter: RwSignal<String>,
    pub active_filter: RwSignal<String>,
    pub list_resource: Resource<ListKey, Result<AccountList, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub create_open: RwSignal<bool>,
    pub create_email: RwSignal<String>,
    pub pending_delete: RwSignal<Option<Account>>,
    pub pending_role: RwSignal<Option<(Account, String)>>,
    pub create_action: Action<String, Result<Account, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub set_active_action: Action<(String, bool), Result<(), ApiError>>,
    pub set_role_action: Action<(String, String), Result<(), ApiError>>,
}

impl AccountsViewModel {
    /// Filter edits always jump back to the first page.
    pub fn set_email_filter(&self, value: String) {
        self.email_filter.set(value);
        self.page.set(1);
    }

    pub fn set_role_filter(&self, value: String) {
        self.role_filter.set(value);
        self.page.set(1);
    }

    pub fn set_active_filter(&self, value: String) {
        self.active_filter.set(value);
        self.page.set(1);
    }
}

pub fn use_accounts_view_model() -> AccountsViewModel {
    let queries = use_queries();
    let repository = AccountsRepository::new(Rc::new(use_api()), queries.clone());
    let version = queries.version(resources::ACCOUNTS);

    let page = create_rw_signal(1usize);
    let email_filter = create_rw_signal(String::new());
    let role_filter = create_rw_signal(String::new());
    let active_filter = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let create_open = create_rw_signal(false);
    let create_email = create_rw_signal(String::new());
    let pending_delete = create_rw_signal(None::<Account>);
    let pending_role = create_rw_signal(None::<(Account, String)>);

    let repo_for_list = repository.clone();
    let list_resource = create_resource(
        move || {
            (
                version.get(),
                page.get(),
                email_filter.get(),
                role_filter.get(),
                active_filter.get(),
            )
        },
        move |(_version, page, email, role, active)| {
            let repo = repo_for_list.clone();
            async move { repo.list(&list_params(page, &email, &role, &active)).await }
        },
    );

    let repo_for_create = repository.clone();
    let create_action = create_action(move |email: &String| {
        let repo = repo_for_create.clone();
        let email = email.clone();
        async move { repo.create(email).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = leptos::create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete(id).await }
    });

    let repo_for_active = repository.clone();
    let set_active_action = leptos::create_action(move |(id, active): &(String, bool)| {
        let repo = repo_for_active.clone();
        let id = id.clone();
        let active = *active;
        async move { repo.set_active(id, active).await }
    });

    let repo_for_role = repository.clone();
    let set_role_action = leptos::create_action(move |(id, role): &(String, String)| {
        let repo = repo_for_role.clone();
        let id = id.clone();
        let role = role.clone();
        async move { repo.set_role(id, role).await }
    });

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    create_email.set(String::new());
                    create_open.set(false);
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
        if let Some(Err(err)) = set_active_action.value().get() {
            error.set(Some(err));
        }
    });

    create_effect(move |_| {
        if let Some(result) = set_role_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    pending_role.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    AccountsViewModel {
        page,
        email_filter,
        role_filter,
        active_filter,
        list_resource,
        error,
        create_open,
        create_email,
        pending_delete,
        pending_role,
        create_action,
        delete_action,
        set_active_action,
        set_role_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn defaults_start_on_page_one_with_no_filters() {
        with_runtime(|| {
            let vm = use_accounts_view_model();
            assert_eq!(vm.page.get(), 1);
            assert!(vm.email_filter.get().is_empty());
            assert!(vm.error.get().is_none());
            assert!(!vm.create_open.get());
        });
    }

    #[test]
    fn changing_a_filter_resets_to_page_one() {
        with_runtime(|| {
            let vm = use_accounts_view_model();
            vm.page.set(3);
            vm.set_role_filter("therapist".into());
            assert_eq!(vm.page.get(), 1);

            vm.page.set(2);
            vm.set_email_filter("ana".into());
            assert_eq!(vm.page.get(), 1);

            vm.page.set(4);
            vm.set_active_filter("true".into());
            assert_eq!(vm.page.get(), 1);
        });
    }
}

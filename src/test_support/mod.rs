#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::types::{Account, Patient, Therapist};
    use crate::state::auth::SessionState;
    use leptos::*;

    pub fn admin_account() -> Account {
        Account {
            id: "acc-admin".into(),
            email: "admin@menta.io".into(),
            role: "admin".into(),
            is_active: true,
            email_verified: true,
            auth_provider: "email".into(),
            last_login_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn sample_therapist() -> Therapist {
        Therapist {
            id: "ther-1".into(),
            account_id: "acc-ther".into(),
            first_name: "Maya".into(),
            last_name: "Okafor".into(),
            license_number: "LIC-4821".into(),
            specializations: vec!["anxiety".into(), "depression".into()],
            years_of_experience: 7,
            education: "PsyD".into(),
            languages: vec!["en".into(), "fr".into()],
            hourly_rate: 120.0,
            bio: "Trauma-informed practice".into(),
            is_verified: true,
            is_accepting_patients: true,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn sample_patient() -> Patient {
        Patient {
            id: "pat-1".into(),
            account_id: "acc-pat".into(),
            first_name: "Jordan".into(),
            last_name: "Lee".into(),
            phone: Some("+15550100".into()),
            birth_date: None,
            gender: None,
            timezone: "America/New_York".into(),
            language: "en".into(),
            bio: None,
            profile_picture: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Installs a session context the guard and layout components read.
    pub fn provide_session(
        account: Option<Account>,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let is_authenticated = account.is_some();
        let (state, set_state) = create_signal(SessionState {
            account,
            is_authenticated,
        });
        provide_context((state, set_state));
        (state, set_state)
    }
}

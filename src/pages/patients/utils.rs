use leptos::*;

use crate::api::types::{FileUpload, Patient, PatientDraft};
use crate::state::query::QueryParams;

pub fn list_params(page: usize) -> QueryParams {
    QueryParams::paged(page)
}

#[derive(Clone, Copy)]
pub struct PatientFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub birth_date: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub timezone: RwSignal<String>,
    pub language: RwSignal<String>,
    pub bio: RwSignal<String>,
    pub profile_picture: RwSignal<Option<FileUpload>>,
}

impl PatientFormState {
    pub fn new() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            birth_date: create_rw_signal(String::new()),
            gender: create_rw_signal(String::new()),
            timezone: create_rw_signal(String::new()),
            language: create_rw_signal(String::new()),
            bio: create_rw_signal(String::new()),
            profile_picture: create_rw_signal(None),
        }
    }

    pub fn reset(&self) {
        self.load(&PatientDraft::default());
    }

    pub fn load_record(&self, record: &Patient) {
        self.load(&PatientDraft::from_record(record));
    }

    fn load(&self, draft: &PatientDraft) {
        self.first_name.set(draft.first_name.clone());
        self.last_name.set(draft.last_name.clone());
        self.phone.set(draft.phone.clone());
        self.birth_date.set(draft.birth_date.clone());
        self.gender.set(draft.gender.clone());
        self.timezone.set(draft.timezone.clone());
        self.language.set(draft.language.clone());
        self.bio.set(draft.bio.clone());
        self.profile_picture.set(None);
    }

    pub fn to_draft(&self) -> Result<PatientDraft, String> {
        let first_name = self.first_name.get_untracked().trim().to_string();
        let last_name = self.last_name.get_untracked().trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err("First and last name are required".into());
        }
        Ok(PatientDraft {
            first_name,
            last_name,
            phone: self.phone.get_untracked().trim().to_string(),
            birth_date: self.birth_date.get_untracked().trim().to_string(),
            gender: self.gender.get_untracked().trim().to_string(),
            timezone: self.timezone.get_untracked().trim().to_string(),
            language: self.language.get_untracked().trim().to_string(),
            bio: self.bio.get_untracked().trim().to_string(),
            profile_picture: self.profile_picture.get_untracked(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_are_pagination_only() {
        assert_eq!(list_params(1).to_query_string(), "offset=0&limit=20");
        assert_eq!(list_params(4).to_query_string(), "offset=60&limit=20");
    }
}

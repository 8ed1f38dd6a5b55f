use leptos::*;

use crate::api::types::{FileUpload, Therapist, TherapistDraft};
use crate::state::query::QueryParams;

pub fn list_params(page: usize, query: &str, verified: &str, accepting: &str) -> QueryParams {
    let mut params = QueryParams::paged(page);
    params.push_non_empty("query", query.trim());
    params.push_non_empty("is_verified", verified);
    params.push_non_empty("is_accepting_patients", accepting);
    params
}

/// Form field signals for the create/edit modal. Numeric fields stay as
/// strings until submit so partial input never panics.
#[derive(Clone, Copy)]
pub struct TherapistFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub license_number: RwSignal<String>,
    pub specializations: RwSignal<String>,
    pub years_of_experience: RwSignal<String>,
    pub education: RwSignal<String>,
    pub languages: RwSignal<String>,
    pub hourly_rate: RwSignal<String>,
    pub bio: RwSignal<String>,
    pub document: RwSignal<Option<FileUpload>>,
}

impl TherapistFormState {
    pub fn new() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            license_number: create_rw_signal(String::new()),
            specializations: create_rw_signal(String::new()),
            years_of_experience: create_rw_signal(String::new()),
            education: create_rw_signal(String::new()),
            languages: create_rw_signal(String::new()),
            hourly_rate: create_rw_signal(String::new()),
            bio: create_rw_signal(String::new()),
            document: create_rw_signal(None),
        }
    }

    pub fn reset(&self) {
        self.load(&TherapistDraft::default());
    }

    pub fn load_record(&self, record: &Therapist) {
        self.load(&TherapistDraft::from_record(record));
    }

    fn load(&self, draft: &TherapistDraft) {
        self.first_name.set(draft.first_name.clone());
        self.last_name.set(draft.last_name.clone());
        self.license_number.set(draft.license_number.clone());
        self.specializations.set(draft.specializations.clone());
        self.years_of_experience.set(if draft.years_of_experience == 0 {
            String::new()
        } else {
            draft.years_of_experience.to_string()
        });
        self.education.set(draft.education.clone());
        self.languages.set(draft.languages.clone());
        self.hourly_rate.set(if draft.hourly_rate == 0.0 {
            String::new()
        } else {
            draft.hourly_rate.to_string()
        });
        self.bio.set(draft.bio.clone());
        self.document.set(None);
    }

    /// Validates and assembles the draft sent to the backend.
    pub fn to_draft(&self) -> Result<TherapistDraft, String> {
        let first_name = self.first_name.get_untracked().trim().to_string();
        let last_name = self.last_name.get_untracked().trim().to_string();
        let license_number = self.license_number.get_untracked().trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err("First and last name are required".into());
        }
        if license_number.is_empty() {
            return Err("License number is required".into());
        }
        let years_of_experience = parse_years(&self.years_of_experience.get_untracked())?;
        let hourly_rate = parse_rate(&self.hourly_rate.get_untracked())?;
        Ok(TherapistDraft {
            first_name,
            last_name,
            license_number,
            specializations: self.specializations.get_untracked().trim().to_string(),
            years_of_experience,
            education: self.education.get_untracked().trim().to_string(),
            languages: self.languages.get_untracked().trim().to_string(),
            hourly_rate,
            bio: self.bio.get_untracked().trim().to_string(),
            document: self.document.get_untracked(),
        })
    }
}

pub fn parse_years(raw: &str) -> Result<i32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i32>()
        .ok()
        .filter(|years| *years >= 0)
        .ok_or_else(|| "Years of experience must be a whole number".into())
}

pub fn parse_rate(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|rate| *rate >= 0.0)
        .ok_or_else(|| "Hourly rate must be a number".into())
}

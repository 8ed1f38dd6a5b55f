use leptos::*;

use crate::api::types::{MatchPayload, MatchRecord};
use crate::state::query::QueryParams;

pub fn list_params(
    patient_id: &str,
    therapist_id: &str,
    min_score: &str,
    max_score: &str,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push_non_empty("patient_id", patient_id.trim());
    params.push_non_empty("therapist_id", therapist_id.trim());
    params.push_non_empty("min_score", min_score.trim());
    params.push_non_empty("max_score", max_score.trim());
    params
}

#[derive(Clone, Copy)]
pub struct MatchFormState {
    pub patient_id: RwSignal<String>,
    pub therapist_id: RwSignal<String>,
    pub match_score: RwSignal<String>,
    pub language_match: RwSignal<bool>,
    pub specialization_match: RwSignal<bool>,
}

impl MatchFormState {
    pub fn new() -> Self {
        Self {
            patient_id: create_rw_signal(String::new()),
            therapist_id: create_rw_signal(String::new()),
            match_score: create_rw_signal(String::new()),
            language_match: create_rw_signal(false),
            specialization_match: create_rw_signal(false),
        }
    }

    pub fn reset(&self) {
        self.patient_id.set(String::new());
        self.therapist_id.set(String::new());
        self.match_score.set(String::new());
        self.language_match.set(false);
        self.specialization_match.set(false);
    }

    pub fn load_record(&self, record: &MatchRecord) {
        self.patient_id.set(record.patient_id.clone());
        self.therapist_id.set(record.therapist_id.clone());
        self.match_score.set(record.match_score.to_string());
        self.language_match.set(record.language_match);
        self.specialization_match.set(record.specialization_match);
    }

    pub fn to_payload(&self) -> Result<MatchPayload, String> {
        let patient_id = self.patient_id.get_untracked().trim().to_string();
        if patient_id.is_empty() {
            return Err("A patient id is required".into());
        }
        let therapist_id = self.therapist_id.get_untracked().trim().to_string();
        if therapist_id.is_empty() {
            return Err("A therapist id is required".into());
        }
        let match_score = self
            .match_score
            .get_untracked()
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|score| (0..=100).contains(score))
            .ok_or_else(|| "Match score must be between 0 and 100".to_string())?;
        Ok(MatchPayload {
            patient_id,
            therapist_id,
            match_score,
            language_match: Some(self.language_match.get_untracked()),
            specialization_match: Some(self.specialization_match.get_untracked()),
        })
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn payload_requires_both_parties_and_a_score_in_range() {
        with_runtime(|| {
            let form = MatchFormState::new();
            assert!(form.to_payload().is_err());

            form.patient_id.set("pat-1".into());
            form.therapist_id.set("the-1".into());
            form.match_score.set("140".into());
            assert!(form.to_payload().is_err(), "score out of range");

            form.match_score.set("87".into());
            form.language_match.set(true);
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.match_score, 87);
            assert_eq!(payload.language_match, Some(true));
            assert_eq!(payload.specialization_match, Some(false));
        });
    }
}

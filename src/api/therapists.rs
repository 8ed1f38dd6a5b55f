use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, FileUpload, Therapist, TherapistDraft, TherapistList, TherapistStats};
use crate::state::query::QueryParams;

impl ApiClient {
    pub async fn list_therapists(&self, params: &QueryParams) -> Result<TherapistList, ApiError> {
        self.get_json("/therapists/", params.as_pairs()).await
    }

    pub async fn therapist_stats(&self) -> Result<TherapistStats, ApiError> {
        self.get_json("/therapists/stats", &[]).await
    }

    /// Multipart because the draft may carry a certificate document.
    pub async fn create_therapist(&self, draft: &TherapistDraft) -> Result<Therapist, ApiError> {
        let form = therapist_form(draft)?;
        self.post_multipart("/therapists/", form).await
    }

    pub async fn update_therapist(
        &self,
        id: &str,
        draft: &TherapistDraft,
    ) -> Result<Therapist, ApiError> {
        let form = therapist_form(draft)?;
        self.put_multipart(&format!("/therapists/{}", id), form).await
    }

    pub async fn delete_therapist(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/therapists/{}", id)).await
    }

    pub async fn set_therapist_verification(
        &self,
        id: &str,
        is_verified: bool,
    ) -> Result<(), ApiError> {
        self.put_action(
            &format!("/therapists/{}/verification", id),
            &json!({ "is_verified": is_verified }),
        )
        .await
    }

    pub async fn set_therapist_accepting(
        &self,
        id: &str,
        is_accepting_patients: bool,
    ) -> Result<(), ApiError> {
        self.put_action(
            &format!("/therapists/{}/accepting", id),
            &json!({ "is_accepting_patients": is_accepting_patients }),
        )
        .await
    }
}

pub(crate) fn file_part(upload: &FileUpload) -> Result<Part, ApiError> {
    Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(&upload.content_type)
        .map_err(|e| ApiError::unknown(format!("Invalid attachment type: {}", e)))
}

fn therapist_form(draft: &TherapistDraft) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("first_name", draft.first_name.clone())
        .text("last_name", draft.last_name.clone())
        .text("license_number", draft.license_number.clone())
        .text("specializations", draft.specializations.clone())
        .text("years_of_experience", draft.years_of_experience.to_string())
        .text("education", draft.education.clone())
        .text("languages", draft.languages.clone())
        .text("hourly_rate", draft.hourly_rate.to_string())
        .text("bio", draft.bio.clone());
    if let Some(upload) = &draft.document {
        form = form.part("document", file_part(upload)?);
    }
    Ok(form)
}

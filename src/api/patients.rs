use reqwest::multipart::Form;

use crate::api::client::ApiClient;
use crate::api::therapists::file_part;
use crate::api::types::{ApiError, Patient, PatientDraft, PatientList, PatientStats};
use crate::state::query::QueryParams;

impl ApiClient {
    pub async fn list_patients(&self, params: &QueryParams) -> Result<PatientList, ApiError> {
        self.get_json("/patients/", params.as_pairs()).await
    }

    pub async fn patient_stats(&self) -> Result<PatientStats, ApiError> {
        self.get_json("/patients/stats", &[]).await
    }

    pub async fn create_patient(&self, draft: &PatientDraft) -> Result<Patient, ApiError> {
        let form = patient_form(draft)?;
        self.post_multipart("/patients/", form).await
    }

    pub async fn update_patient(&self, id: &str, draft: &PatientDraft) -> Result<Patient, ApiError> {
        let form = patient_form(draft)?;
        self.put_multipart(&format!("/patients/{}", id), form).await
    }

    pub async fn delete_patient(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/patients/{}", id)).await
    }
}

fn patient_form(draft: &PatientDraft) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("first_name", draft.first_name.clone())
        .text("last_name", draft.last_name.clone())
        .text("phone", draft.phone.clone())
        .text("birth_date", draft.birth_date.clone())
        .text("gender", draft.gender.clone())
        .text("timezone", draft.timezone.clone())
        .text("language", draft.language.clone())
        .text("bio", draft.bio.clone());
    if let Some(upload) = &draft.profile_picture {
        form = form.part("profile_picture", file_part(upload)?);
    }
    Ok(form)
}

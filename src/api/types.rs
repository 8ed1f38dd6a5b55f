use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

fn default_error_code() -> String {
    "UNKNOWN".to_string()
}

/// Error shape shared by every fallible API call. Backend bodies arrive as
/// `{ "message": "..." }` or `{ "error": "...", "code": "..." }`; anything
/// unparseable is mapped through the constructors below.
#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq)]
#[error("{error}")]
pub struct ApiError {
    #[serde(alias = "message")]
    pub error: String,
    #[serde(default = "default_error_code")]
    pub code: String,
    #[serde(default)]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNKNOWN".into(),
            details: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NETWORK".into(),
            details: None,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "PARSE".into(),
            details: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            error: format!("Request failed with status {}", status),
            code: "HTTP_STATUS".into(),
            details: None,
        }
    }

    /// A response that resolved after a newer request for the same resource
    /// superseded it. Never rendered; error presentation suppresses it.
    pub fn superseded() -> Self {
        Self {
            error: "Response superseded by a newer request".into(),
            code: "SUPERSEDED".into(),
            details: None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        self.code == "SUPERSEDED"
    }
}

/// Envelope used by the auth and accounts endpoints: `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enveloped<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub email_verified: bool,
    #[serde(default)]
    pub auth_provider: String,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountList {
    pub accounts: Vec<Account>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccountStats {
    pub total_count: i64,
    pub active_count: i64,
    pub inactive_count: i64,
    pub admin_count: i64,
    pub therapist_count: i64,
    pub patient_count: i64,
    #[serde(default)]
    pub support_count: i64,
    pub email_verified_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Therapist {
    pub id: String,
    pub account_id: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub years_of_experience: i32,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub hourly_rate: f64,
    #[serde(default)]
    pub bio: String,
    pub is_verified: bool,
    pub is_accepting_patients: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Therapist {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapistList {
    pub therapists: Vec<Therapist>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TherapistStats {
    pub total_therapists: i64,
    pub verified_therapists: i64,
    pub accepting_patients: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub account_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    pub timezone: String,
    pub language: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientList {
    pub patients: Vec<Patient>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PatientStats {
    pub total_patients: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub id: String,
    pub therapist_id: String,
    pub certificate_type: String,
    pub document_url: String,
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub issued_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateList {
    pub certificates: Vec<Certificate>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    pub max_participants: i32,
    #[serde(default)]
    pub current_participants: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<Event>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EventStats {
    pub total_events: i64,
    pub upcoming_events: i64,
    pub past_events: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub max_participants: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub id: String,
    pub patient_id: String,
    pub therapist_id: String,
    pub match_score: i32,
    #[serde(default)]
    pub language_match: bool,
    #[serde(default)]
    pub specialization_match: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchList {
    pub matches: Vec<MatchRecord>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPayload {
    pub patient_id: String,
    pub therapist_id: String,
    pub match_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization_match: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub question_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub order: i32,
}

pub const QUESTION_TYPES: &[&str] = &["text", "multiple_choice", "scale", "yes_no"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Questionnaire {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireList {
    pub questionnaires: Vec<Questionnaire>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnairePayload {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub id: String,
    pub questionnaire_id: String,
    pub patient_id: String,
    #[serde(default)]
    pub answers: Value,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponseList {
    pub responses: Vec<QuestionnaireResponse>,
    pub total: i64,
}

/// Opaque session issued by the backend after OTP verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub account: Account,
}

/// In-memory file attachment collected by a form, destined for a
/// multipart request body.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Draft collected by the therapist modal; serialized as multipart because
/// of the optional certificate document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TherapistDraft {
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub specializations: String,
    pub years_of_experience: i32,
    pub education: String,
    pub languages: String,
    pub hourly_rate: f64,
    pub bio: String,
    pub document: Option<FileUpload>,
}

impl TherapistDraft {
    pub fn from_record(record: &Therapist) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            license_number: record.license_number.clone(),
            specializations: record.specializations.join(", "),
            years_of_experience: record.years_of_experience,
            education: record.education.clone(),
            languages: record.languages.join(", "),
            hourly_rate: record.hourly_rate,
            bio: record.bio.clone(),
            document: None,
        }
    }
}

/// Draft collected by the patient modal; multipart because of the optional
/// profile picture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub birth_date: String,
    pub gender: String,
    pub timezone: String,
    pub language: String,
    pub bio: String,
    pub profile_picture: Option<FileUpload>,
}

impl PatientDraft {
    pub fn from_record(record: &Patient) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            phone: record.phone.clone().unwrap_or_default(),
            birth_date: record
                .birth_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            gender: record.gender.clone().unwrap_or_default(),
            timezone: record.timezone.clone(),
            language: record.language.clone(),
            bio: record.bio.clone().unwrap_or_default(),
            profile_picture: None,
        }
    }
}

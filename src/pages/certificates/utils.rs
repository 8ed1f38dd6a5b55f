use crate::state::query::QueryParams;

pub const STATUSES: &[&str] = &["pending", "approved", "rejected"];

/// The certificates endpoint is filter-only; the review queue is expected
/// to stay small enough not to page.
pub fn list_params(therapist_id: &str, certificate_type: &str, status: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push_non_empty("therapist_id", therapist_id.trim());
    params.push_non_empty("certificate_type", certificate_type.trim());
    params.push_non_empty("status", status);
    params
}

pub fn validate_rejection_reason(reason: &str) -> Result<String, String> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        Err("A rejection reason is required".into())
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_have_no_pagination() {
        assert_eq!(list_params("", "", "").to_query_string(), "");
        assert_eq!(
            list_params("ther-1", "", "pending").to_query_string(),
            "therapist_id=ther-1&status=pending"
        );
    }

    #[test]
    fn rejection_needs_a_reason() {
        assert!(validate_rejection_reason("   ").is_err());
        assert_eq!(
            validate_rejection_reason(" expired license "),
            Ok("expired license".to_string())
        );
    }
}

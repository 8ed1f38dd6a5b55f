use crate::state::query::QueryParams;

pub const ROLES: &[&str] = &["admin", "therapist", "patient"];

/// Wire parameters for the accounts list: pagination first, then only the
/// filters the operator actually set.
pub fn list_params(page: usize, email: &str, role: &str, is_active: &str) -> QueryParams {
    let mut params = QueryParams::paged(page);
    params.push_non_empty("email", email.trim());
    params.push_non_empty("role", role);
    params.push_non_empty("is_active", is_active);
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_two_with_role_filter() {
        let params = list_params(2, "", "therapist", "");
        assert_eq!(params.to_query_string(), "offset=20&limit=20&role=therapist");
    }

    #[test]
    fn unset_filters_stay_off_the_wire() {
        let params = list_params(1, "", "", "");
        assert_eq!(params.to_query_string(), "offset=0&limit=20");
    }

    #[test]
    fn email_filter_is_trimmed() {
        let params = list_params(1, "  ana@menta.io  ", "", "true");
        assert_eq!(
            params.to_query_string(),
            "offset=0&limit=20&email=ana@menta.io&is_active=true"
        );
    }
}

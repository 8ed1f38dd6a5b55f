use crate::api::types::{AccountStats, EventStats, PatientStats, TherapistStats};

/// Everything the dashboard cards need, loaded in one resource pass.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverviewStats {
    pub accounts: AccountStats,
    pub therapists: TherapistStats,
    pub patients: PatientStats,
    pub events: EventStats,
}

/// `(label, count)` pairs for the role breakdown card, in display order.
pub fn role_breakdown(stats: &AccountStats) -> Vec<(&'static str, i64)> {
    vec![
        ("Admins", stats.admin_count),
        ("Therapists", stats.therapist_count),
        ("Patients", stats.patient_count),
        ("Support", stats.support_count),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_breakdown_keeps_display_order() {
        let stats = AccountStats {
            admin_count: 2,
            therapist_count: 10,
            patient_count: 40,
            support_count: 1,
            ..Default::default()
        };
        let rows = role_breakdown(&stats);
        assert_eq!(rows[0], ("Admins", 2));
        assert_eq!(rows[1], ("Therapists", 10));
        assert_eq!(rows[2], ("Patients", 40));
        assert_eq!(rows[3], ("Support", 1));
    }
}

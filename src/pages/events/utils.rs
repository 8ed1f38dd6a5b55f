use chrono::{DateTime, NaiveDateTime, Utc};
use leptos::*;

use crate::api::types::{Event, EventPayload};
use crate::state::query::QueryParams;

pub const TIME_FILTERS: &[(&str, &str)] = &[("upcoming", "Upcoming"), ("past", "Past")];

pub fn list_params(title: &str, time_filter: &str, start_date: &str, end_date: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push_non_empty("title", title.trim());
    params.push_non_empty("time_filter", time_filter);
    params.push_non_empty("start_date", start_date);
    params.push_non_empty("end_date", end_date);
    params
}

/// Parses the value of a `datetime-local` input as UTC.
pub fn parse_event_date(raw: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M")
        .map(|naive| naive.and_utc())
        .map_err(|_| "Enter a valid date and time".to_string())
}

pub fn event_date_input_value(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

#[derive(Clone, Copy)]
pub struct EventFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub event_date: RwSignal<String>,
    pub location: RwSignal<String>,
    pub max_participants: RwSignal<String>,
}

impl EventFormState {
    pub fn new() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            event_date: create_rw_signal(String::new()),
            location: create_rw_signal(String::new()),
            max_participants: create_rw_signal(String::new()),
        }
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.event_date.set(String::new());
        self.location.set(String::new());
        self.max_participants.set(String::new());
    }

    pub fn load_record(&self, record: &Event) {
        self.title.set(record.title.clone());
        self.description.set(record.description.clone());
        self.event_date.set(event_date_input_value(&record.event_date));
        self.location.set(record.location.clone());
        self.max_participants.set(record.max_participants.to_string());
    }

    pub fn to_payload(&self) -> Result<EventPayload, String> {
        let title = self.title.get_untracked().trim().to_string();
        if title.is_empty() {
            return Err("A title is required".into());
        }
        let event_date = parse_event_date(&self.event_date.get_untracked())?;
        let max_raw = self.max_participants.get_untracked();
        let max_participants = max_raw
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|max| *max > 0)
            .ok_or_else(|| "Max participants must be a positive number".to_string())?;
        Ok(EventPayload {
            title,
            description: self.description.get_untracked().trim().to_string(),
            event_date,
            location: self.location.get_untracked().trim().to_string(),
            max_participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn list_params_carry_only_set_filters() {
        assert_eq!(list_params("", "", "", "").to_query_string(), "");
        assert_eq!(
            list_params("yoga", "upcoming", "2026-01-01", "").to_query_string(),
            "title=yoga&time_filter=upcoming&start_date=2026-01-01"
        );
    }

    #[test]
    fn event_dates_round_trip_through_the_input_format() {
        let at = Utc.with_ymd_and_hms(2026, 9, 12, 18, 30, 0).unwrap();
        let raw = event_date_input_value(&at);
        assert_eq!(raw, "2026-09-12T18:30");
        assert_eq!(parse_event_date(&raw), Ok(at));
        assert!(parse_event_date("next tuesday").is_err());
    }
}

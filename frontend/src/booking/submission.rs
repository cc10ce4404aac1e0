use gloo_net::http::Request;
use log::info;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::booking::form::{LocationType, ValidLead};
use crate::config;
use crate::storage::{BoundedLog, BrowserStore, KeyValueStore};
use crate::tracking::attribution::AttributionSnapshot;

pub const RETRY_PROMPT: &str = "Something went wrong. Please try again.";

/// Row sent to the spreadsheet webhook: the lead plus flattened attribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub city: String,
    pub location_type: LocationType,
    pub timestamp: String,
    pub source: String,
    pub medium: String,
    pub campaign: String,
    pub referrer: String,
    pub visitor_country: String,
    pub visitor_city: String,
    pub visitor_region: String,
}

impl LeadSubmission {
    /// Absent attribution becomes `"direct"` for the source and `""` elsewhere.
    pub fn merge(lead: &ValidLead, snapshot: Option<&AttributionSnapshot>, timestamp: String) -> Self {
        let text = |value: Option<&str>| value.unwrap_or_default().to_string();
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            city: lead.city.clone(),
            location_type: lead.location_type,
            timestamp,
            source: snapshot
                .and_then(|s| s.source.as_deref())
                .unwrap_or("direct")
                .to_string(),
            medium: text(snapshot.and_then(|s| s.medium.as_deref())),
            campaign: text(snapshot.and_then(|s| s.campaign.as_deref())),
            referrer: text(snapshot.and_then(|s| s.referrer.as_deref())),
            visitor_country: text(snapshot.and_then(|s| s.country())),
            visitor_city: text(snapshot.and_then(|s| s.city())),
            visitor_region: text(snapshot.and_then(|s| s.region())),
        }
    }
}

/// How far a lead got once it is safely in the local booking log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The webhook answered with a success status.
    Confirmed,
    /// No webhook is configured; the local log is the only copy.
    LocalOnly,
}

impl Delivery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delivery::Confirmed => "confirmed",
            Delivery::LocalOnly => "local_only",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("could not encode submission: {0}")]
    Encode(String),
    #[error("webhook unreachable: {0}")]
    Transport(String),
    #[error("webhook answered {0}")]
    Rejected(u16),
}

pub fn classify_status(status: u16) -> Result<Delivery, SubmitError> {
    if (200..300).contains(&status) {
        Ok(Delivery::Confirmed)
    } else {
        Err(SubmitError::Rejected(status))
    }
}

/// Event recorded when a valid lead is handed off for delivery.
pub fn submit_event(lead: &ValidLead) -> (&'static str, Value) {
    (
        "booking_form_submit",
        json!({
            "city": lead.city,
            "locationType": lead.location_type,
        }),
    )
}

/// Event recorded once a submission settles, success or not.
pub fn outcome_event(outcome: &Result<Delivery, SubmitError>, email: &str) -> (&'static str, Value) {
    match outcome {
        Ok(delivery) => (
            "booking_form_success",
            json!({
                "email": email,
                "delivery": delivery.as_str(),
            }),
        ),
        Err(e) => ("booking_form_error", json!({ "error": e.to_string() })),
    }
}

/// Appends to the local booking log. Never fails the caller.
pub fn keep_locally<S: KeyValueStore + ?Sized>(store: &S, submission: &LeadSubmission) -> bool {
    BoundedLog::new(store, config::BOOKINGS_KEY, config::BOOKING_LOG_CAP).append_or_warn(submission)
}

pub async fn dispatch(webhook: Option<&str>, submission: &LeadSubmission) -> Result<Delivery, SubmitError> {
    let Some(url) = webhook else {
        info!("No MOVEVR_WEBHOOK_URL configured, booking kept locally for {}", submission.email);
        return Ok(Delivery::LocalOnly);
    };

    let request = Request::post(url)
        .json(submission)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    classify_status(response.status())
}

/// Stores the lead locally first, then sends it to `webhook`.
pub async fn submit_to<S: KeyValueStore + ?Sized>(
    store: &S,
    webhook: Option<&str>,
    submission: &LeadSubmission,
) -> Result<Delivery, SubmitError> {
    keep_locally(store, submission);
    dispatch(webhook, submission).await
}

pub async fn submit(submission: LeadSubmission) -> Result<Delivery, SubmitError> {
    submit_to(&BrowserStore::Local, config::webhook_url(), &submission).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::booking::state::{Field, LeadFormState, Phase};
    use crate::storage::MemoryStore;
    use crate::tracking::attribution::{CampaignParams, Geolocation};
    use crate::tracking::provider::Tracker;

    fn lead() -> ValidLead {
        ValidLead {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            city: "NYC".into(),
            location_type: LocationType::PrivateEvent,
        }
    }

    #[test]
    fn missing_attribution_uses_placeholders() {
        let submission = LeadSubmission::merge(&lead(), None, "t".into());
        assert_eq!(submission.source, "direct");
        assert_eq!(submission.medium, "");
        assert_eq!(submission.referrer, "");
        assert_eq!(submission.visitor_country, "");
    }

    #[test]
    fn attribution_is_flattened() {
        let snapshot = AttributionSnapshot::assemble(
            CampaignParams::from_query("utm_source=ig&utm_medium=social&utm_campaign=summer"),
            Some("https://instagram.com/".into()),
            Some(Geolocation {
                country: Some("Finland".into()),
                city: None,
                region: Some("Uusimaa".into()),
            }),
            "t0".into(),
            "session_1_a".into(),
        );
        let submission = LeadSubmission::merge(&lead(), Some(&snapshot), "t1".into());
        assert_eq!(submission.source, "ig");
        assert_eq!(submission.campaign, "summer");
        assert_eq!(submission.referrer, "https://instagram.com/");
        assert_eq!(submission.visitor_country, "Finland");
        assert_eq!(submission.visitor_city, "");
        assert_eq!(submission.visitor_region, "Uusimaa");
        assert_eq!(submission.timestamp, "t1");
    }

    #[test]
    fn wire_fields_match_the_sheet_columns() {
        let value = serde_json::to_value(LeadSubmission::merge(&lead(), None, "t".into())).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "campaign", "city", "email", "locationType", "medium", "name", "referrer",
                "source", "timestamp", "visitorCity", "visitorCountry", "visitorRegion",
            ]
        );
        assert_eq!(value["locationType"], "private_event");
    }

    #[test]
    fn only_2xx_counts_as_confirmed() {
        assert_eq!(classify_status(200), Ok(Delivery::Confirmed));
        assert_eq!(classify_status(204), Ok(Delivery::Confirmed));
        assert_eq!(classify_status(302), Err(SubmitError::Rejected(302)));
        assert_eq!(classify_status(500), Err(SubmitError::Rejected(500)));
    }

    #[test]
    fn identical_submissions_are_not_deduplicated() {
        let store = MemoryStore::default();
        let submission = LeadSubmission::merge(&lead(), None, "t".into());
        assert!(keep_locally(&store, &submission));
        assert!(keep_locally(&store, &submission));
        let stored = BoundedLog::new(&store, config::BOOKINGS_KEY, config::BOOKING_LOG_CAP)
            .entries()
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0], stored[1]);
    }

    fn logged(store: &MemoryStore, key: &'static str) -> Vec<serde_json::Value> {
        BoundedLog::new(store, key, usize::MAX)
            .entries()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn without_webhook_the_local_copy_is_the_delivery() {
        let store = MemoryStore::default();
        let submission = LeadSubmission::merge(&lead(), None, "t".into());
        let outcome = block_on(submit_to(&store, None, &submission));
        assert_eq!(outcome, Ok(Delivery::LocalOnly));
        assert_eq!(logged(&store, config::BOOKINGS_KEY).len(), 1);
    }

    #[test]
    fn unwritable_storage_does_not_fail_submission() {
        let store = MemoryStore::rejecting_writes();
        let submission = LeadSubmission::merge(&lead(), None, "t".into());
        assert_eq!(block_on(submit_to(&store, None, &submission)), Ok(Delivery::LocalOnly));
    }

    #[test]
    fn valid_lead_records_one_booking_and_one_success_event() {
        let store = MemoryStore::default();
        let tracker = Tracker::default();
        let mut form = LeadFormState::default();
        form.edit(Field::Name, " Jo ".into());
        form.edit(Field::Email, "jo@example.com ".into());
        form.edit(Field::City, "NYC".into());
        form.select_location(LocationType::FindLocation);

        let lead = form.begin_submit().unwrap();
        let (name, payload) = submit_event(&lead);
        tracker.record_in(&store, name, Some(payload), None);

        let submission = LeadSubmission::merge(&lead, tracker.snapshot(), "t".into());
        let outcome = block_on(submit_to(&store, None, &submission));
        let (name, payload) = outcome_event(&outcome, form.draft.email.trim());
        tracker.record_in(&store, name, Some(payload), None);
        form.settle(&outcome);

        assert_eq!(form.phase, Phase::Success(Delivery::LocalOnly));

        let bookings = logged(&store, config::BOOKINGS_KEY);
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0]["name"], "Jo");
        assert_eq!(bookings[0]["source"], "direct");

        let events = logged(&store, config::EVENTS_KEY);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["eventName"], "booking_form_submit");
        assert_eq!(events[0]["eventData"]["city"], "NYC");
        assert_eq!(events[0]["eventData"]["locationType"], "find_location");
        assert_eq!(events[1]["eventName"], "booking_form_success");
        assert_eq!(events[1]["eventData"]["email"], "jo@example.com");
        assert_eq!(events[1]["eventData"]["delivery"], "local_only");
        assert!(events[1]["trackingData"].is_null());
    }

    #[test]
    fn failed_delivery_emits_error_event_and_returns_to_editing() {
        let outcome = Err(SubmitError::Rejected(500));
        let (name, payload) = outcome_event(&outcome, "jo@example.com");
        assert_eq!(name, "booking_form_error");
        assert_eq!(payload["error"], "webhook answered 500");

        let mut form = LeadFormState::default();
        form.settle(&outcome);
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.error.as_deref(), Some(RETRY_PROMPT));
    }
}

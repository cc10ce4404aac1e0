use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::storage::{BoundedLog, KeyValueStore};
use crate::tracking::attribution::{AttributionSnapshot, TrackingState};

#[derive(Clone, Debug, Serialize)]
pub struct VisitRecord {
    #[serde(flatten)]
    pub snapshot: AttributionSnapshot,
    pub page: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub event_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_data: Option<Value>,
    /// Whatever was published when the event fired; `None` while tracking is pending.
    pub tracking_data: Option<AttributionSnapshot>,
    pub timestamp: String,
    pub page: Option<String>,
}

pub fn record_visit<S: KeyValueStore + ?Sized>(
    store: &S,
    snapshot: &AttributionSnapshot,
    page: &str,
) -> VisitRecord {
    let visit = VisitRecord {
        snapshot: snapshot.clone(),
        page: page.to_string(),
    };
    BoundedLog::new(store, config::VISITS_KEY, config::VISIT_LOG_CAP).append_or_warn(&visit);
    visit
}

pub fn record_event<S: KeyValueStore + ?Sized>(
    store: &S,
    state: &TrackingState,
    name: &str,
    payload: Option<Value>,
    timestamp: String,
    page: Option<String>,
) -> EventRecord {
    let event = EventRecord {
        event_name: name.to_string(),
        event_data: payload,
        tracking_data: state.snapshot().cloned(),
        timestamp,
        page,
    };
    BoundedLog::new(store, config::EVENTS_KEY, config::EVENT_LOG_CAP).append_or_warn(&event);
    event
}

use std::rc::Rc;

use chrono::Utc;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;
use yew::prelude::*;

use crate::storage::{BrowserStore, KeyValueStore};
use crate::tracking::attribution::{iso_now, AttributionSnapshot, CampaignParams, TrackingState};
use crate::tracking::records::{self, EventRecord};
use crate::tracking::{geo, session};

/// Handle on the page's attribution state, handed to components through context
/// or props. Emitting never fails observably.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tracker {
    state: TrackingState,
}

impl Tracker {
    pub fn new(state: TrackingState) -> Self {
        Self { state }
    }

    pub fn snapshot(&self) -> Option<&AttributionSnapshot> {
        self.state.snapshot()
    }

    pub fn emit_event(&self, name: &str, payload: Option<Value>) {
        let event = self.record_in(&BrowserStore::Local, name, payload, current_path());
        console_dump("📊 Event Tracked:", &event);
    }

    /// Appends the event to `store`'s event log, stamped with the current state.
    pub fn record_in<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        name: &str,
        payload: Option<Value>,
        page: Option<String>,
    ) -> EventRecord {
        records::record_event(store, &self.state, name, payload, iso_now(), page)
    }
}

pub fn current_path() -> Option<String> {
    web_sys::window().and_then(|w| w.location().pathname().ok())
}

fn console_dump<T: Serialize>(label: &str, record: &T) {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match record.serialize(&serializer) {
        Ok(value) => gloo_console::log!(label, value),
        Err(e) => warn!("{} (not serializable: {})", label, e),
    }
}

async fn resolve_snapshot() -> AttributionSnapshot {
    let window = web_sys::window();
    let query = window
        .as_ref()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let campaign = CampaignParams::from_query(&query);

    let location = geo::lookup_or_none().await;

    let now_ms = Utc::now().timestamp_millis();
    let entropy = js_sys::Math::random();
    let session_id = session::resolve_session_id(&BrowserStore::Session, now_ms, entropy)
        .unwrap_or_else(|e| {
            warn!("Session storage unavailable, using a page-scoped id: {}", e);
            session::mint_session_id(now_ms, entropy)
        });

    let referrer = window.and_then(|w| w.document()).map(|d| d.referrer());

    AttributionSnapshot::assemble(campaign, referrer, location, iso_now(), session_id)
}

#[derive(Properties, PartialEq)]
pub struct TrackingProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TrackingProvider)]
pub fn tracking_provider(props: &TrackingProviderProps) -> Html {
    let state = use_state(TrackingState::default);

    // Runs once per page load.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let snapshot = resolve_snapshot().await;
                    let page = current_path().unwrap_or_else(|| "/".to_string());
                    let visit = records::record_visit(&BrowserStore::Local, &snapshot, &page);
                    console_dump("📊 Page View Tracked:", &visit);
                    info!("Tracking ready for {}", snapshot.session_id);
                    state.set(TrackingState::Ready(Rc::new(snapshot)));
                });
                || ()
            },
            (),
        );
    }

    let tracker = Tracker::new((*state).clone());

    html! {
        <ContextProvider<Tracker> context={tracker}>
            { props.children.clone() }
        </ContextProvider<Tracker>>
    }
}

/// The tracker from the nearest [`TrackingProvider`]. Outside one, a pending
/// tracker is returned so emission still lands in the event log.
#[hook]
pub fn use_tracker() -> Tracker {
    use_context::<Tracker>().unwrap_or_default()
}

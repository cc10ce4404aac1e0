use std::rc::Rc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignParams {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
}

impl CampaignParams {
    /// Reads `utm_source`, `utm_medium` and `utm_campaign` from a query string
    /// (with or without the leading `?`). The first occurrence of a key wins and
    /// empty values count as absent.
    pub fn from_query(query: &str) -> Self {
        let mut params = CampaignParams::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "utm_source" => &mut params.source,
                "utm_medium" => &mut params.medium,
                "utm_campaign" => &mut params.campaign,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geolocation {
    pub country: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
}

/// How the visitor arrived, resolved once per page load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionSnapshot {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub referrer: Option<String>,
    pub location: Option<Geolocation>,
    pub timestamp: String,
    pub session_id: String,
}

impl AttributionSnapshot {
    pub fn assemble(
        campaign: CampaignParams,
        referrer: Option<String>,
        location: Option<Geolocation>,
        timestamp: String,
        session_id: String,
    ) -> Self {
        Self {
            source: campaign.source,
            medium: campaign.medium,
            campaign: campaign.campaign,
            referrer: referrer.filter(|r| !r.is_empty()),
            location,
            timestamp,
            session_id,
        }
    }

    pub fn country(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.country.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.city.as_deref())
    }

    pub fn region(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.region.as_deref())
    }
}

/// Lifecycle of the page's attribution: `Pending` until initialization
/// publishes a snapshot, `Ready` for the rest of the page's life.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TrackingState {
    #[default]
    Pending,
    Ready(Rc<AttributionSnapshot>),
}

impl TrackingState {
    pub fn snapshot(&self) -> Option<&AttributionSnapshot> {
        match self {
            TrackingState::Pending => None,
            TrackingState::Ready(snapshot) => Some(snapshot),
        }
    }
}

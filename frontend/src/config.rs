/// Brand and head metadata. Every page element that names the business reads it from here.
pub struct SiteMeta {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub social_description: &'static str,
    pub keywords: &'static str,
    pub locale: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
    name: "Move VR",
    title: "Move VR | Interactive Team Experiences",
    tagline: "Immersive experiences for teams",
    description: "Step into the future of entertainment. Experience fully immersive VR adventures with friends, colleagues, and teams. Book your session today.",
    social_description: "Step into the future of entertainment. Experience fully immersive VR adventures with friends, colleagues, and teams.",
    keywords: "VR experience, virtual reality, team building, corporate events, VR games, immersive entertainment, Move VR",
    locale: "en_US",
};

pub const BOOKING_LINK: &str = "https://calendly.com/your-booking-link";
pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/PVyaj4fWhDc?rel=0&modestbranding=1";
pub const GEOLOCATION_URL: &str = "https://ipapi.co/json/";

pub const SESSION_ID_KEY: &str = "vr_session_id";
pub const VISITS_KEY: &str = "vr_visits";
pub const EVENTS_KEY: &str = "vr_events";
pub const BOOKINGS_KEY: &str = "vr_bookings";

pub const VISIT_LOG_CAP: usize = 50;
pub const EVENT_LOG_CAP: usize = 100;
pub const BOOKING_LOG_CAP: usize = 500;

pub const CAROUSEL_INTERVAL_MS: u32 = 5000;
pub const CAROUSEL_RESUME_MS: u32 = 8000;

/// Spreadsheet webhook set at build time through `MOVEVR_WEBHOOK_URL`.
/// Unset or blank means submissions stay in the local booking log only.
pub fn webhook_url() -> Option<&'static str> {
    option_env!("MOVEVR_WEBHOOK_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

/// Head `<meta>` tags as (attribute, key, content), all derived from [`SITE`].
pub fn meta_tags() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("name", "description", SITE.description),
        ("name", "keywords", SITE.keywords),
        ("property", "og:title", SITE.title),
        ("property", "og:description", SITE.social_description),
        ("property", "og:type", "website"),
        ("property", "og:locale", SITE.locale),
        ("name", "twitter:card", "summary_large_image"),
        ("name", "twitter:title", SITE.title),
        ("name", "twitter:description", SITE.social_description),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_come_from_one_place() {
        for (_, key, content) in meta_tags() {
            if key.ends_with(":title") {
                assert_eq!(content, SITE.title);
            }
        }
        assert!(SITE.title.starts_with(SITE.name));
    }

    #[test]
    fn meta_keys_are_unique() {
        let mut keys: Vec<_> = meta_tags().into_iter().map(|(_, key, _)| key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}

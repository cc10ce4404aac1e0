use log::warn;
use serde_json::{json, Value};
use yew::prelude::*;

use crate::config;
use crate::tracking::provider::use_tracker;

/// What a call-to-action does after it has been tracked.
#[derive(Clone, PartialEq)]
pub enum CtaAction {
    /// Open the external scheduler in a new browsing context.
    Schedule,
    /// Open the on-page booking form.
    Inquire(Callback<()>),
}

impl CtaAction {
    fn target(&self) -> &'static str {
        match self {
            CtaAction::Schedule => "scheduler",
            CtaAction::Inquire(_) => "booking_form",
        }
    }
}

fn click_payload(location: &str, action: &CtaAction) -> Value {
    json!({
        "location": location,
        "target": action.target(),
    })
}

pub fn open_booking_link() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(config::BOOKING_LINK, "_blank") {
        warn!("Could not open booking link: {:?}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub action: CtaAction,
    #[prop_or("landing_page")]
    pub location: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let tracker = use_tracker();

    let onclick = {
        let action = props.action.clone();
        let location = props.location;
        Callback::from(move |_: MouseEvent| {
            tracker.emit_event("cta_click", Some(click_payload(location, &action)));
            match &action {
                CtaAction::Schedule => open_booking_link(),
                CtaAction::Inquire(open) => open.emit(()),
            }
        })
    };

    html! {
        <button class={classes!("cta-button", props.class.clone())} {onclick}>
            { props.children.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_names_location_and_target() {
        let payload = click_payload("landing_page", &CtaAction::Schedule);
        assert_eq!(payload["location"], "landing_page");
        assert_eq!(payload["target"], "scheduler");

        let payload = click_payload("hero", &CtaAction::Inquire(Callback::noop()));
        assert_eq!(payload["target"], "booking_form");
    }
}

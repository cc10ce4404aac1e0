use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Sections start revealing 100px after their top edge crosses the viewport bottom.
const REVEAL_MARGIN: &str = "0px 0px -100px 0px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches `element` until it first intersects the viewport, then calls
/// `on_visible` and stops watching. The returned closure must outlive the observer.
fn observe_once(element: &Element, on_visible: UseStateSetter<bool>) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let entered = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if entered {
            on_visible.set(true);
            observer.disconnect();
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A `<section>` whose children fade up, staggered, the first time it scrolls
/// into view. Once shown it stays shown.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let watch = match node.cast::<Element>() {
                    Some(element) => observe_once(&element, revealed.setter()),
                    None => None,
                };
                if watch.is_none() {
                    // Without an observer the content is shown straight away.
                    revealed.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), (*revealed).then_some("visible"))}
        >
            { props.children.clone() }
        </section>
    }
}

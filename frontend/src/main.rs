use log::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::{window, Document};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod storage;
mod tracking {
    pub mod attribution;
    pub mod geo;
    pub mod provider;
    pub mod records;
    pub mod session;
}
mod booking {
    pub mod form;
    pub mod modal;
    pub mod state;
    pub mod submission;
}
mod components {
    pub mod carousel;
    pub mod cta;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use tracking::provider::TrackingProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

fn upsert_meta(document: &Document, attr: &str, key: &str, content: &str) -> Result<(), JsValue> {
    let selector = format!("meta[{}=\"{}\"]", attr, key);
    let meta = match document.query_selector(&selector)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta")?;
            created.set_attribute(attr, key)?;
            if let Some(head) = document.head() {
                head.append_child(&created)?;
            }
            created
        }
    };
    meta.set_attribute("content", content)
}

fn apply_site_metadata() -> Result<(), JsValue> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Ok(());
    };
    document.set_title(config::SITE.title);
    for (attr, key, content) in config::meta_tags() {
        upsert_meta(&document, attr, key, content)?;
    }
    Ok(())
}

#[function_component]
fn App() -> Html {
    html! {
        <TrackingProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </TrackingProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    if let Err(e) = apply_site_metadata() {
        warn!("Could not apply site metadata: {:?}", e);
    }

    info!("Starting {}", config::SITE.name);
    yew::Renderer::<App>::new().render();
}

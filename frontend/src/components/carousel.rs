use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

/// Slides shown side by side at a given viewport width.
pub fn slides_per_view(viewport_width: f64) -> usize {
    if viewport_width >= 1024.0 {
        3
    } else if viewport_width >= 640.0 {
        2
    } else {
        1
    }
}

/// Number of positions where a full view of slides fits.
pub fn page_count(len: usize, per_view: usize) -> usize {
    if len == 0 {
        0
    } else {
        len - per_view.clamp(1, len) + 1
    }
}

/// Autoplay step; rewinds to the first position after the last one.
pub fn next_index(current: usize, len: usize, per_view: usize) -> usize {
    match page_count(len, per_view) {
        0 => 0,
        pages => (current + 1) % pages,
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(1024.0)
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub items: Vec<Testimonial>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let per_view = use_state(|| slides_per_view(viewport_width()));
    let hovered = use_state(|| false);
    let held = use_state(|| false);
    let resume = use_mut_ref(|| None::<Timeout>);

    // Track the breakpoint.
    {
        let per_view = per_view.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let on_resize = Closure::wrap(Box::new(move || {
                    per_view.set(slides_per_view(viewport_width()));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let len = props.items.len();
    let pages = page_count(len, *per_view);
    let current = (*index).min(pages.saturating_sub(1));

    {
        let index = index.clone();
        let per_view = *per_view;
        let paused = *hovered || *held || pages < 2;
        use_interval(
            move || index.set(next_index(current, len, per_view)),
            if paused { 0 } else { config::CAROUSEL_INTERVAL_MS },
        );
    }

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    // Choosing a page holds autoplay for a while; a newer choice restarts the hold.
    let go_to = {
        let index = index.clone();
        let held = held.clone();
        let resume = resume.clone();
        move |page: usize| {
            let index = index.clone();
            let held = held.clone();
            let resume = resume.clone();
            Callback::from(move |_: MouseEvent| {
                index.set(page);
                held.set(true);
                let held = held.clone();
                *resume.borrow_mut() = Some(Timeout::new(config::CAROUSEL_RESUME_MS, move || held.set(false)));
            })
        }
    };

    let slide_width = 100.0 / (*per_view).clamp(1, len.max(1)) as f64;
    let track_style = format!("transform: translateX(-{}%);", current as f64 * slide_width);

    html! {
        <div class="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="carousel-viewport">
                <div class="carousel-track" style={track_style}>
                    { for props.items.iter().map(|item| html! {
                        <div class="carousel-slide" style={format!("flex: 0 0 {}%;", slide_width)}>
                            <div class="glass testimonial-card">
                                <div class="testimonial-stars">
                                    { for (0..item.rating).map(|_| html! { <span class="star">{"★"}</span> }) }
                                </div>
                                <p class="testimonial-content">{format!("“{}”", item.content)}</p>
                                <div class="testimonial-author">
                                    <p class="testimonial-name">{item.name}</p>
                                    <p class="testimonial-role">{item.role}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            if pages > 1 {
                <div class="carousel-dots">
                    { for (0..pages).map(|page| html! {
                        <button
                            class={classes!("carousel-dot", (page == current).then_some("active"))}
                            aria-label={format!("Go to slide {}", page + 1)}
                            onclick={go_to(page)}
                        />
                    }) }
                </div>
            }
        </div>
    }
}

use log::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::booking::form::LocationType;
use crate::booking::state::{Field, LeadFormState};
use crate::booking::submission::{self, Delivery, LeadSubmission, SubmitError};
use crate::tracking::attribution::iso_now;
use crate::tracking::provider::Tracker;

pub enum BookingModalMsg {
    Edit(Field, String),
    SelectLocation(LocationType),
    Submit,
    Settled(Result<Delivery, SubmitError>),
    Close,
    GoBack,
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub tracker: Tracker,
}

pub struct BookingModal {
    form: LeadFormState,
}

impl Component for BookingModal {
    type Message = BookingModalMsg;
    type Properties = BookingModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LeadFormState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let tracker = &ctx.props().tracker;
        match msg {
            BookingModalMsg::Edit(field, value) => {
                self.form.edit(field, value);
                true
            }
            BookingModalMsg::SelectLocation(location_type) => {
                self.form.select_location(location_type);
                true
            }
            BookingModalMsg::Submit => {
                let Some(lead) = self.form.begin_submit() else {
                    return true;
                };

                let (name, payload) = submission::submit_event(&lead);
                tracker.emit_event(name, Some(payload));

                let submission = LeadSubmission::merge(&lead, tracker.snapshot(), iso_now());
                ctx.link().send_future(async move {
                    BookingModalMsg::Settled(submission::submit(submission).await)
                });
                true
            }
            BookingModalMsg::Settled(outcome) => {
                if let Err(e) = &outcome {
                    error!("Submission error: {}", e);
                }
                let (name, payload) = submission::outcome_event(&outcome, self.form.draft.email.trim());
                tracker.emit_event(name, Some(payload));
                self.form.settle(&outcome);
                true
            }
            BookingModalMsg::Close => {
                if self.form.can_dismiss() {
                    ctx.props().on_close.emit(());
                }
                false
            }
            BookingModalMsg::GoBack => {
                self.form.reset();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return html! {};
        }

        let link = ctx.link();
        let close = link.callback(|_: MouseEvent| BookingModalMsg::Close);
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="booking-backdrop" onclick={close.clone()}>
                <style>{BOOKING_MODAL_CSS}</style>
                <div class="booking-panel" onclick={keep_open}>
                    <div class="booking-accent"></div>
                    if !self.form.is_success() {
                        <button class="booking-close" aria-label="Close" onclick={close}>{"✕"}</button>
                    }
                    <div class="booking-content">
                        if self.form.is_success() {
                            { self.view_success(ctx) }
                        } else {
                            { self.view_form(ctx) }
                        }
                    </div>
                </div>
            </div>
        }
    }
}

impl BookingModal {
    fn text_input(&self, ctx: &Context<Self>, field: Field, kind: &'static str, icon: &'static str, placeholder: &'static str) -> Html {
        let value = match field {
            Field::Name => self.form.draft.name.clone(),
            Field::Email => self.form.draft.email.clone(),
            Field::City => self.form.draft.city.clone(),
        };
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            BookingModalMsg::Edit(field, input.value())
        });

        html! {
            <div class="booking-field">
                <span class="booking-field-icon">{icon}</span>
                <input type={kind} {value} {oninput} {placeholder} required=true />
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.form.is_submitting();
        let selected = self.form.draft.location_type;

        html! {
            <>
                <div class="booking-header">
                    <h2>{"Book Your "}<span class="gradient-text">{"VR Experience"}</span></h2>
                    <p>{"Tell us a bit about yourself and we'll get back to you shortly"}</p>
                </div>
                <div class="booking-form">
                    { self.text_input(ctx, Field::Name, "text", "👤", "Your name *") }
                    { self.text_input(ctx, Field::Email, "email", "✉️", "Email address *") }
                    { self.text_input(ctx, Field::City, "text", "📍", "Your city *") }

                    <div>
                        <p class="booking-question">
                            {"Where would you like the experience? "}<span class="booking-required">{"*"}</span>
                        </p>
                        <div class="booking-options">
                            { for LocationType::ALL.iter().map(|&option| {
                                let onclick = ctx.link().callback(move |_: MouseEvent| BookingModalMsg::SelectLocation(option));
                                html! {
                                    <button
                                        type="button"
                                        key={option.as_str()}
                                        class={classes!("booking-option", (selected == Some(option)).then_some("selected"))}
                                        {onclick}
                                    >
                                        <span class="booking-option-icon">{option.icon()}</span>
                                        <span>{option.label()}</span>
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    if let Some(error) = &self.form.error {
                        <p class="booking-error">{error}</p>
                    }

                    <button
                        class="booking-submit"
                        disabled={submitting}
                        onclick={ctx.link().callback(|_: MouseEvent| BookingModalMsg::Submit)}
                    >
                        if submitting {
                            <span class="booking-spinner"></span>{"Sending..."}
                        } else {
                            {"Continue →"}
                        }
                    </button>
                </div>
                <p class="booking-footnote"><span class="booking-required">{"*"}</span>{" All fields are required"}</p>
            </>
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="booking-success">
                <div class="booking-success-badge">{"✓"}</div>
                <h3>{"Thanks for your inquiry"}</h3>
                <p>{"We will get in touch with you shortly."}</p>
                <button class="booking-back" onclick={ctx.link().callback(|_: MouseEvent| BookingModalMsg::GoBack)}>
                    {"Go Back"}
                </button>
            </div>
        }
    }
}

const BOOKING_MODAL_CSS: &str = r#"
.booking-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background-color: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(8px);
    animation: bookingFade 0.3s ease-out;
}
.booking-panel {
    position: relative;
    width: 100%;
    max-width: 32rem;
    border-radius: 1.5rem;
    overflow: hidden;
    background: rgba(20, 20, 28, 0.85);
    border: 1px solid rgba(255, 255, 255, 0.08);
    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
    animation: bookingRise 0.3s ease-out;
}
.booking-accent {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    background: linear-gradient(to right, transparent, #ff6b35, transparent);
}
.booking-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    padding: 0.5rem;
    border: none;
    border-radius: 9999px;
    background: transparent;
    color: #9ca3af;
    cursor: pointer;
}
.booking-close:hover { background: rgba(255, 255, 255, 0.1); }
.booking-content { padding: 2.5rem; }
.booking-header { text-align: center; margin-bottom: 2rem; }
.booking-header h2 { font-family: 'Space Grotesk', sans-serif; font-size: 1.75rem; margin-bottom: 0.5rem; }
.booking-header p { color: #9ca3af; }
.booking-form { display: flex; flex-direction: column; gap: 1.25rem; }
.booking-field { position: relative; }
.booking-field-icon {
    position: absolute;
    left: 1rem;
    top: 50%;
    transform: translateY(-50%);
}
.booking-field input {
    width: 100%;
    box-sizing: border-box;
    padding: 1rem 1rem 1rem 3rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    color: #fff;
    font-size: 1rem;
}
.booking-field input:focus { outline: none; border-color: rgba(255, 107, 53, 0.5); }
.booking-question { font-size: 0.875rem; color: #9ca3af; margin-bottom: 0.75rem; }
.booking-required { color: #ff6b35; }
.booking-options { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
@media (max-width: 640px) {
    .booking-options { grid-template-columns: 1fr; }
}
.booking-option {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    color: #9ca3af;
    cursor: pointer;
    transition: all 0.2s;
}
.booking-option:hover { border-color: rgba(255, 255, 255, 0.2); }
.booking-option.selected {
    background: rgba(255, 107, 53, 0.2);
    border-color: #ff6b35;
    color: #fff;
}
.booking-error { color: #f87171; font-size: 0.875rem; text-align: center; animation: bookingFade 0.2s; }
.booking-submit {
    width: 100%;
    padding: 1rem;
    border: none;
    border-radius: 0.75rem;
    background: #ff6b35;
    color: #fff;
    font-family: 'Space Grotesk', sans-serif;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    box-shadow: 0 0 24px rgba(255, 107, 53, 0.35);
    transition: transform 0.2s, background 0.2s;
}
.booking-submit:hover:not(:disabled) { background: #ff8555; transform: scale(1.02); }
.booking-submit:disabled { opacity: 0.7; cursor: not-allowed; }
.booking-spinner {
    width: 1rem;
    height: 1rem;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: #fff;
    border-radius: 50%;
    animation: bookingSpin 0.8s linear infinite;
}
.booking-footnote { text-align: center; color: rgba(156, 163, 175, 0.5); font-size: 0.75rem; margin-top: 1.5rem; }
.booking-success { text-align: center; padding: 2rem 0; animation: bookingRise 0.3s ease-out; }
.booking-success-badge {
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    background: rgba(34, 197, 94, 0.2);
    color: #22c55e;
    font-size: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.booking-success h3 { font-family: 'Space Grotesk', sans-serif; font-size: 1.5rem; margin-bottom: 0.75rem; }
.booking-success p { color: #9ca3af; font-size: 1.125rem; margin-bottom: 2rem; }
.booking-back {
    padding: 0.75rem 2rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.2);
    background: transparent;
    color: #fff;
    cursor: pointer;
}
.booking-back:hover { background: rgba(255, 255, 255, 0.05); }
@keyframes bookingFade { from { opacity: 0; } to { opacity: 1; } }
@keyframes bookingRise {
    from { opacity: 0; transform: translateY(20px) scale(0.95); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}
@keyframes bookingSpin { to { transform: rotate(360deg); } }
"#;

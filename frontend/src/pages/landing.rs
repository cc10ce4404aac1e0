use chrono::{Datelike, Utc};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::booking::modal::BookingModal;
use crate::components::carousel::{Testimonial, TestimonialCarousel};
use crate::components::cta::{CtaAction, CtaButton};
use crate::components::reveal::AnimatedSection;
use crate::config::{self, SITE};
use crate::tracking::provider::use_tracker;

/// Hero offset in px and opacity for a given page scroll: it drifts down
/// 150px over the first 500px and fades out over the first 300px.
pub fn hero_parallax(scroll_y: f64) -> (f64, f64) {
    let scroll_y = scroll_y.max(0.0);
    let offset = (scroll_y / 500.0).min(1.0) * 150.0;
    let opacity = 1.0 - (scroll_y / 300.0).min(1.0);
    (offset, opacity)
}

struct Offering {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const OFFERINGS: [Offering; 3] = [
    Offering {
        icon: "🏢",
        title: "At Your Office",
        description: "We bring the full VR setup directly to your workplace. Perfect for team building days, corporate events, and company celebrations.",
    },
    Offering {
        icon: "🎉",
        title: "Private Events",
        description: "Birthday parties, stag dos, family gatherings. We set up everything for an unforgettable VR party at your chosen venue.",
    },
    Offering {
        icon: "🎮",
        title: "At Our Shop",
        description: "Visit our dedicated VR space for the ultimate immersive experience. Fully equipped with premium headsets and plenty of room to move.",
    },
];

const GAMES: [&str; 6] = [
    "Competitive Shooters",
    "Puzzle Adventures",
    "Team Escape Rooms",
    "Sports Games",
    "Creative Experiences",
    "Horror Thrillers",
];

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

const BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: "✨",
        title: "Fun & Entertaining",
        description: "Forget boring team events. VR creates unforgettable memories with laughter, excitement, and friendly competition that everyone will be talking about.",
        gradient: "linear-gradient(135deg, #ec4899, #f43f5e)",
    },
    Benefit {
        icon: "🚀",
        title: "Innovative Technology",
        description: "Experience cutting-edge VR with the latest headsets and games. Be at the forefront of entertainment technology that most people have never tried.",
        gradient: "linear-gradient(135deg, #3b82f6, #06b6d4)",
    },
    Benefit {
        icon: "👥",
        title: "Team Building",
        description: "Nothing builds team spirit like conquering challenges together. VR creates natural collaboration, communication, and trust between team members.",
        gradient: "linear-gradient(135deg, #ff6b35, #fb923c)",
    },
];

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sarah Mitchell",
            role: "HR Director, TechCorp",
            content: "Our team building day was transformed by VR. The setup was seamless, the games were incredible, and our team hasn't stopped talking about it. Best corporate event we've had in years!",
            rating: 5,
        },
        Testimonial {
            name: "James Patterson",
            role: "Birthday Party Host",
            content: "Hired them for my son's 16th birthday. Every single kid was blown away. They handled everything professionally and the variety of games kept everyone entertained for hours.",
            rating: 5,
        },
        Testimonial {
            name: "Emma Rodriguez",
            role: "Marketing Manager, StartupXYZ",
            content: "We wanted something different for our quarterly team meetup and they delivered beyond expectations. Watching our remote team finally connect in virtual reality was magical.",
            rating: 5,
        },
        Testimonial {
            name: "Michael Chen",
            role: "Operations Lead, Finance Plus",
            content: "The team building aspect was genuine. Working together in VR puzzles revealed new strengths in our team members. Plus, the competitive games added the perfect amount of fun rivalry!",
            rating: 5,
        },
        Testimonial {
            name: "Lisa Thompson",
            role: "Event Coordinator",
            content: "I've organized countless corporate events, and this was by far the most engaging. Staff were professional, equipment was top-notch, and guests were absolutely thrilled.",
            rating: 5,
        },
    ]
}

#[derive(Properties, PartialEq)]
struct InquireProps {
    on_inquire: Callback<()>,
}

#[function_component(HeroSection)]
fn hero_section(props: &InquireProps) -> Html {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let on_scroll = Closure::wrap(Box::new(move || {
                    if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        scroll_y.set(y);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let (offset, opacity) = hero_parallax(*scroll_y);
    let content_style = format!("transform: translateY({}px); opacity: {};", offset, opacity);

    html! {
        <section class="hero grid-bg">
            <div class="hero-glow">
                <div class="glow glow-orange"></div>
                <div class="glow glow-purple"></div>
            </div>

            <div class="hero-content container" style={content_style}>
                <span class="hero-badge intro intro-1">
                    <span class="accent">{"✦"}</span>{" Now accepting bookings"}
                </span>
                <h1 class="hero-title intro intro-2">
                    {"Step Into"}
                    <span class="gradient-text">{"Another World"}</span>
                </h1>
                <p class="hero-subtitle intro intro-3">
                    {"Experience fully immersive VR adventures with friends, colleagues, and teams. From competitive games to cooperative puzzles, we bring virtual reality to you."}
                </p>
                <div class="hero-actions intro intro-4">
                    <CtaButton action={CtaAction::Inquire(props.on_inquire.clone())} location="hero">
                        {"📅 Book Your Experience"}
                    </CtaButton>
                    <a href="#video" class="hero-preview">
                        <span class="hero-play">{"▶"}</span>
                        {"Watch Preview"}
                    </a>
                </div>
            </div>

            <div class="scroll-indicator">{"⌄"}</div>
        </section>
    }
}

#[function_component(VideoSection)]
fn video_section(props: &InquireProps) -> Html {
    html! {
        <AnimatedSection class="section" id="video">
            <div class="container narrow">
                <div class="fade-up section-heading">
                    <h2>{"See It In Action"}</h2>
                    <p class="muted">{"Watch how teams transform their bonding experience with VR"}</p>
                </div>
                <div class="fade-up video-frame glass">
                    <iframe
                        src={config::VIDEO_EMBED_URL}
                        title="VR Experience Preview"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    />
                </div>
                <div class="fade-up centered">
                    <CtaButton action={CtaAction::Inquire(props.on_inquire.clone())} location="video">
                        {"📅 Book Now →"}
                    </CtaButton>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    html! {
        <AnimatedSection class="section">
            <div class="container">
                <div class="fade-up section-heading">
                    <span class="eyebrow">{"How It Works"}</span>
                    <h2>{"Your VR Adventure, "}<span class="gradient-text">{"Anywhere"}</span></h2>
                    <p class="muted">
                        {"We provide 10-20 premium VR headsets with a variety of games, from heart-pumping shooters to mind-bending puzzles. Everything you need for an epic group experience."}
                    </p>
                </div>
                <div class="card-grid">
                    { for OFFERINGS.iter().map(|offering| html! {
                        <div class="fade-up glass card lift">
                            <div class="card-icon">{offering.icon}</div>
                            <h3>{offering.title}</h3>
                            <p class="muted">{offering.description}</p>
                        </div>
                    }) }
                </div>
                <div class="fade-up centered games">
                    <div class="glass games-panel">
                        <h3>{"Games For Every Team"}</h3>
                        <div class="chips">
                            { for GAMES.iter().map(|game| html! { <span class="chip">{*game}</span> }) }
                        </div>
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(BenefitsSection)]
fn benefits_section() -> Html {
    html! {
        <AnimatedSection class="section">
            <div class="container">
                <div class="fade-up section-heading">
                    <span class="eyebrow">{"Why Choose VR"}</span>
                    <h2>{"Three Reasons Teams "}<span class="gradient-text">{"Love Us"}</span></h2>
                </div>
                <div class="card-grid">
                    { for BENEFITS.iter().map(|benefit| html! {
                        <div class="fade-up glass card tall">
                            <div class="benefit-icon" style={format!("background: {};", benefit.gradient)}>{benefit.icon}</div>
                            <h3>{benefit.title}</h3>
                            <p class="muted large">{benefit.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(ReviewsSection)]
fn reviews_section() -> Html {
    html! {
        <AnimatedSection class="section clip">
            <div class="container">
                <div class="fade-up section-heading">
                    <span class="eyebrow">{"Testimonials"}</span>
                    <h2>{"What Teams Are "}<span class="gradient-text">{"Saying"}</span></h2>
                    <p class="muted">{"Real experiences from real teams"}</p>
                </div>
                <div class="fade-up">
                    <TestimonialCarousel items={testimonials()} />
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(FinalCtaSection)]
fn final_cta_section() -> Html {
    html! {
        <AnimatedSection class="section">
            <div class="final-glow"></div>
            <div class="container narrow">
                <div class="fade-up glass final-panel">
                    <div class="panel-accent"></div>
                    <div class="final-badge">{"⚡"}</div>
                    <h2>{"Ready to "}<span class="gradient-text">{"Experience VR?"}</span></h2>
                    <p class="muted large">
                        {"Book your session today and give your team an experience they'll never forget. Limited slots available each week."}
                    </p>
                    <CtaButton action={CtaAction::Schedule} class="centered-cta">
                        {"📅 Book Your Session Now →"}
                    </CtaButton>
                    <p class="fine-print">{"No payment required to book • Free consultation call"}</p>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div>
                    <h3 class="gradient-text">{SITE.name}</h3>
                    <p class="muted small">{SITE.tagline}</p>
                </div>
                <div class="footer-links">
                    <a href="#">{"Instagram"}</a>
                    <a href="#">{"TikTok"}</a>
                    <a href="#">{"LinkedIn"}</a>
                    <a href="#">{"Contact"}</a>
                </div>
            </div>
            <div class="container footer-legal">
                <p>{format!("© {} {}. All rights reserved.", Utc::now().year(), SITE.name)}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let tracker = use_tracker();
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <main class="landing-page">
            <style>{LANDING_CSS}</style>
            <HeroSection on_inquire={open_modal.clone()} />
            <VideoSection on_inquire={open_modal} />
            <ExperienceSection />
            <BenefitsSection />
            <ReviewsSection />
            <FinalCtaSection />
            <Footer />
            <BookingModal open={*modal_open} on_close={close_modal} {tracker} />
        </main>
    }
}

const LANDING_CSS: &str = r#"
:root {
    --vr-dark: #0a0a0f;
    --vr-gray: #9ca3af;
    --vr-cta: #ff6b35;
    --vr-cta-hover: #ff8555;
}
body {
    margin: 0;
    background: var(--vr-dark);
    color: #fff;
    font-family: 'Outfit', sans-serif;
    -webkit-font-smoothing: antialiased;
}
h1, h2, h3 { font-family: 'Space Grotesk', sans-serif; }
.landing-page { overflow: hidden; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; position: relative; z-index: 1; }
.container.narrow { max-width: 64rem; }
.muted { color: var(--vr-gray); }
.muted.large { font-size: 1.125rem; line-height: 1.7; }
.muted.small { font-size: 0.875rem; margin-top: 0.25rem; }
.centered { text-align: center; margin-top: 3rem; display: flex; justify-content: center; }
.gradient-text {
    background: linear-gradient(135deg, #ff6b35, #f7c59f);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.glass {
    background: rgba(255, 255, 255, 0.04);
    border: 1px solid rgba(255, 255, 255, 0.08);
    backdrop-filter: blur(12px);
}
.grid-bg {
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
    background-size: 60px 60px;
}

.cta-button {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 2rem;
    border: none;
    border-radius: 9999px;
    background: var(--vr-cta);
    color: #fff;
    font-family: 'Space Grotesk', sans-serif;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    box-shadow: 0 0 32px rgba(255, 107, 53, 0.4);
    transition: transform 0.3s, background 0.3s;
}
.cta-button:hover { background: var(--vr-cta-hover); transform: scale(1.05); }
.cta-button:active { transform: scale(0.98); }
.centered-cta { font-size: 1.125rem; }

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    text-align: center;
}
.hero-glow { position: absolute; inset: 0; overflow: hidden; }
.glow { position: absolute; border-radius: 50%; filter: blur(64px); }
.glow-orange {
    top: 25%; left: 25%; width: 24rem; height: 24rem;
    background: rgba(255, 107, 53, 0.1);
    animation: pulseA 8s infinite;
}
.glow-purple {
    bottom: 25%; right: 25%; width: 20rem; height: 20rem;
    background: rgba(168, 85, 247, 0.1);
    animation: pulseB 10s infinite;
}
@keyframes pulseA {
    0%, 100% { transform: scale(1); opacity: 0.3; }
    50% { transform: scale(1.2); opacity: 0.5; }
}
@keyframes pulseB {
    0%, 100% { transform: scale(1.2); opacity: 0.4; }
    50% { transform: scale(1); opacity: 0.2; }
}
.hero-content { will-change: transform, opacity; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    margin-bottom: 2rem;
    border-radius: 9999px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    color: var(--vr-gray);
    font-size: 0.875rem;
}
.accent { color: var(--vr-cta); }
.hero-title { font-size: clamp(3rem, 8vw, 6rem); font-weight: 700; letter-spacing: -0.02em; margin: 0 0 1.5rem; }
.hero-title .gradient-text { display: block; }
.hero-subtitle { font-size: 1.375rem; color: var(--vr-gray); max-width: 48rem; margin: 0 auto 3rem; line-height: 1.6; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; align-items: center; }
.hero-preview { display: inline-flex; align-items: center; gap: 0.5rem; color: rgba(255, 255, 255, 0.7); text-decoration: none; }
.hero-preview:hover { color: #fff; }
.hero-play {
    width: 3rem; height: 3rem;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.2);
    display: flex; align-items: center; justify-content: center;
}
.hero-preview:hover .hero-play { border-color: var(--vr-cta); background: rgba(255, 107, 53, 0.1); }
.intro { opacity: 0; animation: introUp 1s ease-out forwards; }
.intro-1 { animation-delay: 0.2s; }
.intro-2 { animation-delay: 0.4s; }
.intro-3 { animation-delay: 0.6s; }
.intro-4 { animation-delay: 0.8s; }
@keyframes introUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    color: var(--vr-gray);
    font-size: 2rem;
    animation: bob 2s infinite;
}
@keyframes bob {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, 10px); }
}

.section { position: relative; padding: 6rem 1.5rem; }
.section.clip { overflow: hidden; }
.section-heading { text-align: center; margin-bottom: 4rem; }
.section-heading h2 { font-size: clamp(2rem, 4vw, 3rem); margin: 0 0 1rem; }
.section-heading p { max-width: 42rem; margin: 0 auto; font-size: 1.125rem; }
.eyebrow {
    display: block;
    margin-bottom: 1rem;
    color: var(--vr-cta);
    font-size: 0.875rem;
    font-weight: 500;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}

.reveal .fade-up {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}
.reveal.visible .fade-up { opacity: 1; transform: translateY(0); }
.reveal.visible .fade-up:nth-child(2) { transition-delay: 0.15s; }
.reveal.visible .fade-up:nth-child(3) { transition-delay: 0.3s; }
.reveal.visible .fade-up:nth-child(4) { transition-delay: 0.45s; }

.video-frame { position: relative; padding-top: 56.25%; border-radius: 1rem; overflow: hidden; }
.video-frame iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }

.card-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
@media (max-width: 768px) {
    .card-grid { grid-template-columns: 1fr; }
}
.card { border-radius: 1rem; padding: 2rem; }
.card.tall { border-radius: 1.5rem; height: 100%; box-sizing: border-box; }
.card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
.lift:hover { transform: translateY(-8px); }
.card-icon {
    width: 3.5rem; height: 3.5rem;
    margin-bottom: 1.5rem;
    border-radius: 0.75rem;
    background: rgba(255, 107, 53, 0.1);
    display: flex; align-items: center; justify-content: center;
    font-size: 1.75rem;
}
.benefit-icon {
    width: 4rem; height: 4rem;
    margin-bottom: 1.5rem;
    border-radius: 1rem;
    display: flex; align-items: center; justify-content: center;
    font-size: 2rem;
}
.games-panel { display: inline-block; border-radius: 1rem; padding: 2rem 3rem; }
.chips { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; }
.chip {
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    color: var(--vr-gray);
    font-size: 0.875rem;
}

.carousel { padding-bottom: 3rem; }
.carousel-viewport { overflow: hidden; }
.carousel-track { display: flex; transition: transform 0.6s ease; }
.carousel-slide { box-sizing: border-box; padding: 0 0.75rem; }
.testimonial-card { border-radius: 1rem; padding: 2rem; height: 100%; box-sizing: border-box; }
.testimonial-stars { display: flex; gap: 0.25rem; margin-bottom: 1rem; color: var(--vr-cta); }
.testimonial-content { color: rgba(255, 255, 255, 0.9); line-height: 1.7; font-size: 1.125rem; margin-bottom: 1.5rem; }
.testimonial-author { border-top: 1px solid rgba(255, 255, 255, 0.1); padding-top: 1rem; }
.testimonial-name { font-family: 'Space Grotesk', sans-serif; font-weight: 600; margin: 0; }
.testimonial-role { color: var(--vr-gray); font-size: 0.875rem; margin: 0; }
.carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1.5rem; }
.carousel-dot {
    width: 0.625rem; height: 0.625rem;
    border: none;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    cursor: pointer;
}
.carousel-dot.active { background: var(--vr-cta); }

.final-glow {
    position: absolute;
    top: 50%; left: 50%;
    width: 600px; height: 600px;
    transform: translate(-50%, -50%);
    border-radius: 50%;
    background: rgba(255, 107, 53, 0.2);
    filter: blur(64px);
}
.final-panel { position: relative; overflow: hidden; border-radius: 1.5rem; padding: 4rem; text-align: center; }
.final-panel h2 { font-size: clamp(2rem, 4vw, 3rem); margin: 0 0 1.5rem; }
.final-panel .muted { max-width: 42rem; margin: 0 auto 2.5rem; }
.panel-accent {
    position: absolute;
    top: 0; left: 0;
    width: 100%; height: 4px;
    background: linear-gradient(to right, transparent, var(--vr-cta), transparent);
}
.final-badge {
    width: 5rem; height: 5rem;
    margin: 0 auto 2rem;
    border-radius: 50%;
    background: rgba(255, 107, 53, 0.2);
    display: flex; align-items: center; justify-content: center;
    font-size: 2.5rem;
    transform: scale(0);
    transition: transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) 0.2s;
}
.reveal.visible .final-badge { transform: scale(1); }
.fine-print { color: rgba(156, 163, 175, 0.6); font-size: 0.875rem; margin-top: 1.5rem; }

.site-footer { padding: 3rem 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); }
.footer-row { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1.5rem; }
.footer-row h3 { font-size: 1.5rem; margin: 0; }
.footer-links { display: flex; gap: 1.5rem; }
.footer-links a { color: var(--vr-gray); text-decoration: none; transition: color 0.2s; }
.footer-links a:hover { color: var(--vr-cta); }
.footer-legal {
    margin-top: 2rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    text-align: center;
    color: var(--vr-gray);
    font-size: 0.875rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_is_untouched_at_top() {
        assert_eq!(hero_parallax(0.0), (0.0, 1.0));
    }

    #[test]
    fn hero_fades_before_it_finishes_drifting() {
        let (offset, opacity) = hero_parallax(300.0);
        assert!((offset - 90.0).abs() < 1e-9);
        assert_eq!(opacity, 0.0);
    }

    #[test]
    fn hero_motion_is_clamped() {
        assert_eq!(hero_parallax(2000.0), (150.0, 0.0));
        assert_eq!(hero_parallax(-50.0), (0.0, 1.0));
    }
}

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::use_animation_asset;
use crate::components::lottie_player::LottiePlayer;
use crate::config;
use crate::Route;

const FEATURES: [&str; 6] = [
    "AI Clinical Documentation",
    "Predictive No-Show Intelligence",
    "Revenue Optimization Engine",
    "HIPAA-Ready Infrastructure",
    "Multi-Location Control Center",
    "Real-Time Analytics",
];

const BENEFITS: [&str; 4] = [
    "Reduce patient no-shows by 35%",
    "Automate repetitive admin tasks",
    "Increase revenue efficiency",
    "Improve patient experience",
];

// Heights (px) the equalizer bars pulse up to.
const BAR_PEAKS: [u32; 4] = [40, 80, 60, 100];

#[function_component(FloatingDashboard)]
fn floating_dashboard() -> Html {
    html! {
        <div class="floating-dashboard">
            <div class="dashboard-glow"></div>
            <div class="dashboard-chip top">{"🤖 AI booked appointment"}</div>
            <div class="dashboard-bars">
                {
                    for BAR_PEAKS.iter().enumerate().map(|(i, peak)| html! {
                        <div
                            class="dashboard-bar"
                            style={format!("--peak: {}px; animation-delay: {:.1}s;", peak, i as f64 * 0.2)}
                        ></div>
                    })
                }
            </div>
            <div class="dashboard-chip bottom">{"+35% efficiency"}</div>
        </div>
    }
}

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Class list for a `.reveal` element once it has scrolled into view, or
/// `None` if it is already showing.
fn revealed_class(current: &str) -> Option<String> {
    if current.split_whitespace().any(|class| class == "visible") {
        None
    } else {
        Some(format!("{} visible", current))
    }
}

fn reveal(element: &Element) {
    if let Some(class) = revealed_class(&element.class_name()) {
        element.set_class_name(&class);
    }
}

fn reveal_targets() -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(".reveal") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Each `.reveal` section animates in the first time it enters the viewport.
/// The callback has to outlive the observer, so both are handed back.
fn observe_reveals() -> Result<(IntersectionObserver, RevealCallback), wasm_bindgen::JsValue> {
    let callback: RevealCallback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                reveal(&target);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    for target in reveal_targets() {
        observer.observe(&target);
    }
    Ok((observer, callback))
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_animation = use_animation_asset(config::HERO_ANIMATION_URL);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            let observed = match observe_reveals() {
                Ok(observed) => Some(observed),
                Err(e) => {
                    warn!("No IntersectionObserver, showing sections at once: {:?}", e);
                    reveal_targets().iter().for_each(reveal);
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        },
        (),
    );

    html! {
        <div class="landing-page">
            <nav class="landing-nav">
                <h1 class="brand">{"MenPrac"}</h1>
                <Link<Route> to={Route::Waitlist} classes="cta small">
                    {"Join Waitlist"}
                </Link<Route>>
            </nav>

            <header class="hero">
                <div class="hero-copy reveal">
                    <h2>{"Intelligence for the modern clinic."}</h2>
                    <p>{"Scheduling, telehealth, analytics and AI workflows built for modern healthcare teams."}</p>
                    <Link<Route> to={Route::Waitlist} classes="cta">
                        {"Request Early Access"}
                    </Link<Route>>
                </div>
                <div class="hero-animation">
                    {
                        match hero_animation {
                            Some(asset) => html! { <LottiePlayer {asset} /> },
                            None => html! {},
                        }
                    }
                </div>
            </header>

            <section class="features reveal">
                <h3>{"Precision Engineering"}</h3>
                <div class="feature-grid">
                    {
                        for FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <h4>{*feature}</h4>
                                <p>{"Designed to reduce operational friction and improve outcomes."}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="benefits reveal">
                <div class="benefits-inner">
                    <FloatingDashboard />
                    <div>
                        <h3>{"Empowering clinics with AI"}</h3>
                        <ul>
                            { for BENEFITS.iter().map(|benefit| html! { <li>{format!("✔ {}", benefit)}</li> }) }
                        </ul>
                    </div>
                </div>
            </section>

            <section class="final-cta">
                <h3>{"Ready for the upgrade?"}</h3>
                <Link<Route> to={Route::Waitlist} classes="cta large">
                    {"Join the Waitlist"}
                </Link<Route>>
            </section>

            <footer class="landing-footer">
                {"© 2026 MenPrac. All rights reserved."}
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #0B0F2F;
                    color: white;
                    font-family: Inter, sans-serif;
                    min-height: 100vh;
                }
                .landing-nav {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 24px;
                    max-width: 1200px;
                    margin: auto;
                }
                .landing-nav .brand {
                    font-size: 24px;
                    font-weight: 700;
                }
                .cta {
                    display: inline-block;
                    margin-top: 40px;
                    padding: 18px 36px;
                    border-radius: 16px;
                    font-size: 18px;
                    font-weight: 700;
                    background: linear-gradient(90deg, #4F2DFF, #6C63FF);
                    color: white;
                    text-decoration: none;
                }
                .cta.small {
                    margin-top: 0;
                    padding: 10px 22px;
                    border-radius: 12px;
                    font-size: 16px;
                    font-weight: 600;
                }
                .cta.large {
                    padding: 20px 40px;
                    border-radius: 18px;
                    font-size: 20px;
                }
                .hero {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 60px;
                    align-items: center;
                    padding: 80px 24px;
                    max-width: 1200px;
                    margin: auto;
                }
                .hero-copy h2 {
                    font-size: 52px;
                    font-weight: 800;
                    line-height: 1.2;
                }
                .hero-copy p {
                    opacity: 0.7;
                    font-size: 20px;
                    margin-top: 20px;
                    max-width: 520px;
                }
                .hero-animation {
                    animation: heroZoom 1s ease-out;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .features {
                    padding: 100px 24px;
                    max-width: 1200px;
                    margin: auto;
                }
                .features h3 {
                    font-size: 36px;
                    font-weight: 700;
                    text-align: center;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 30px;
                    margin-top: 60px;
                }
                .feature-card {
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 24px;
                    padding: 28px;
                    transition: transform 0.3s ease;
                }
                .feature-card:hover {
                    transform: translateY(-10px);
                }
                .feature-card h4 {
                    font-size: 20px;
                    font-weight: 600;
                }
                .feature-card p {
                    opacity: 0.6;
                    margin-top: 10px;
                }
                .benefits {
                    background: rgba(255, 255, 255, 0.06);
                    padding: 100px 24px;
                }
                .benefits-inner {
                    max-width: 1100px;
                    margin: auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 50px;
                    align-items: center;
                }
                .benefits h3 {
                    font-size: 40px;
                    font-weight: 800;
                }
                .benefits ul {
                    margin-top: 20px;
                    line-height: 2;
                    opacity: 0.8;
                    list-style: none;
                    padding: 0;
                }
                .floating-dashboard {
                    position: relative;
                    height: 320px;
                    border-radius: 30px;
                    overflow: hidden;
                    background: linear-gradient(135deg, #4F2DFF33, #6C63FF33);
                }
                .dashboard-glow {
                    position: absolute;
                    width: 200px;
                    height: 200px;
                    background: #6C63FF55;
                    filter: blur(80px);
                    border-radius: 50%;
                    animation: drift 10s infinite;
                }
                .dashboard-chip {
                    position: absolute;
                    padding: 12px 18px;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(10px);
                }
                .dashboard-chip.top {
                    top: 40px;
                    left: 40px;
                    animation: bob 3s infinite;
                }
                .dashboard-chip.bottom {
                    right: 30px;
                    bottom: 30px;
                    animation: bobSmall 4s infinite;
                }
                .dashboard-bars {
                    position: absolute;
                    bottom: 40px;
                    left: 40px;
                    display: flex;
                    align-items: flex-end;
                    gap: 6px;
                }
                .dashboard-bar {
                    width: 6px;
                    height: 20px;
                    background: white;
                    border-radius: 4px;
                    animation: pulseBar 3s infinite;
                }
                .final-cta {
                    text-align: center;
                    padding: 120px 20px;
                }
                .final-cta h3 {
                    font-size: 42px;
                    font-weight: 800;
                }
                .landing-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.12);
                    padding: 30px;
                    text-align: center;
                    opacity: 0.5;
                }
                @keyframes heroZoom {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes drift {
                    0%, 100% { transform: translate(0, 0); }
                    33% { transform: translate(40px, -30px); }
                    66% { transform: translate(-40px, 30px); }
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }
                @keyframes bobSmall {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-15px); }
                }
                @keyframes pulseBar {
                    0%, 100% { height: 20px; }
                    50% { height: var(--peak); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealed_class_appends_visible_once() {
        assert_eq!(revealed_class("features reveal").as_deref(), Some("features reveal visible"));
        assert_eq!(revealed_class("features reveal visible"), None);
    }

    #[test]
    fn revealed_class_matches_whole_class_names() {
        assert_eq!(
            revealed_class("reveal invisible").as_deref(),
            Some("reveal invisible visible")
        );
    }
}

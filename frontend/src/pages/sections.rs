use yew::prelude::*;

use crate::clock::HubClocks;
use crate::reveal::Reveal;

pub const SITE_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@300;400;500;700&display=swap');

body {
    margin: 0;
    background-color: #FFFFFF;
    color: #000000;
    font-family: 'Space Grotesk', sans-serif;
    -webkit-font-smoothing: antialiased;
}
::selection { background: #000; color: #fff; }
.site { min-height: 100vh; text-transform: lowercase; }
.accent { color: #dc2626; }

.unified-heading {
    font-size: clamp(2.5rem, 8vw, 7rem);
    font-weight: 700;
    line-height: 0.95;
    letter-spacing: -0.04em;
    margin: 0;
}
.standard-body {
    font-size: clamp(1.1rem, 2vw, 1.5rem);
    line-height: 1.4;
    letter-spacing: -0.02em;
}
.eyebrow {
    display: block;
    font-size: 10px;
    letter-spacing: 0.4em;
    font-weight: 700;
    text-transform: uppercase;
    color: #dc2626;
    margin-bottom: 2rem;
}

.top-nav {
    position: fixed;
    width: 100%;
    z-index: 100;
    padding: 2rem;
    box-sizing: border-box;
    transition: all 0.7s;
}
.top-nav.scrolled {
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(12px);
    padding: 1.25rem 2rem;
    border-bottom: 1px solid #f4f4f5;
}
.nav-content {
    max-width: 1600px;
    margin: 0 auto;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo { display: flex; flex-direction: column; cursor: pointer; }
.nav-logo .brand { font-size: 1.25rem; font-weight: 900; text-transform: uppercase; letter-spacing: -0.05em; }
.nav-logo .tagline { font-size: 10px; text-transform: uppercase; letter-spacing: 0.3em; color: #a1a1aa; font-weight: 700; white-space: nowrap; }
.nav-right { display: flex; align-items: center; gap: 3rem; }
.nav-link {
    background: none;
    border: none;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.4em;
    font-weight: 700;
    color: #a1a1aa;
    cursor: pointer;
}
.nav-link:hover { color: #000; }
.nav-initiate, .signal-button {
    background: #000;
    color: #fff;
    border: none;
    border-radius: 9999px;
    padding: 0.75rem 1.75rem;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-weight: 700;
    cursor: pointer;
    transition: background 0.3s;
}
.nav-initiate:hover, .signal-button:hover { background: #dc2626; }
@media (max-width: 768px) {
    .nav-right { display: none; }
}

.hero {
    position: relative;
    height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    padding: 12rem 1.5rem 0;
    overflow: hidden;
    box-sizing: border-box;
}
.hero-media { position: absolute; inset: 0; z-index: 0; overflow: hidden; background: #f4f4f5; }
.hero-video { width: 100%; height: 100%; object-fit: cover; opacity: 0.9; pointer-events: none; }
.video-mask {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at center, rgba(255,255,255,0) 0%, rgba(255,255,255,0.2) 60%, rgba(255,255,255,1) 100%);
}
.hero-copy { position: relative; z-index: 10; text-align: center; max-width: 95vw; }
@keyframes fadeInScale {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}
.animate-entrance { animation: fadeInScale 1.2s cubic-bezier(0.23, 1, 0.32, 1) forwards; }

.mission { padding: 18rem 2rem; text-align: center; border-top: 1px solid #fafafa; }
.mission-inner { max-width: 1200px; margin: 0 auto; }
.mission-lead { font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 700; letter-spacing: -0.05em; line-height: 1.2; }
.muted { color: #71717a; }

.engine { background: #000; color: #fff; padding: 16rem 2rem; overflow: hidden; }
.engine-inner { max-width: 1400px; margin: 0 auto; text-align: center; }
.engine-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    border-top: 1px solid #27272a;
    text-align: left;
    margin-top: 8rem;
}
.engine-panel { padding: 6rem 3rem; border-right: 1px solid #27272a; }
.engine-panel:last-child { border-right: none; }
.engine-panel p { font-weight: 700; transition: color 0.3s; }
.engine-panel:hover p { color: #dc2626; }
@media (max-width: 1024px) {
    .engine-grid { grid-template-columns: 1fr; }
    .engine-panel { border-right: none; border-bottom: 1px solid #27272a; }
}

.relay { padding: 12rem 2rem; text-align: center; border-bottom: 1px solid #fafafa; }
.relay-stats {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 3rem;
    max-width: 42rem;
    margin: 8rem auto 0;
}
.stat { display: flex; flex-direction: column; align-items: center; padding: 3rem; border: 1px solid #f4f4f5; border-radius: 40px; }
.stat-value { font-size: 4.5rem; font-weight: 700; letter-spacing: -0.05em; }
.stat-label { font-size: 10px; letter-spacing: 0.4em; color: #a1a1aa; font-weight: 700; text-transform: uppercase; }

.brand-wall { padding: 10rem 2rem; text-align: center; }
.brand-grid {
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 6rem 3rem;
    align-items: center;
    opacity: 0.7;
    max-width: 1400px;
    margin: 0 auto;
    font-weight: 700;
}
@media (max-width: 1024px) { .brand-grid { grid-template-columns: repeat(2, 1fr); } }

.footer { padding: 16rem 2rem; text-align: center; background: #000; color: #fff; }
.footer-cta {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    margin: 5rem auto 0;
    background: none;
    color: #fff;
    border: 1px solid #27272a;
    border-radius: 9999px;
    padding: 2rem 4rem;
    font-size: 10px;
    letter-spacing: 0.6em;
    font-weight: 700;
    text-transform: uppercase;
    cursor: pointer;
    transition: all 0.3s;
}
.footer-cta:hover { background: #fff; color: #000; }
.hub-list {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 3rem;
    padding-top: 12rem;
    font-size: 10px;
    letter-spacing: 0.5em;
    color: #52525b;
    font-weight: 700;
    text-transform: uppercase;
}
.hub { display: flex; flex-direction: column; gap: 0.75rem; white-space: nowrap; }
.hub-time { color: #a1a1aa; letter-spacing: 0.2em; }
@media (max-width: 768px) { .hub-list { grid-template-columns: 1fr; } }

.modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 200;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(24px);
}
.modal-close {
    position: absolute;
    top: 3rem;
    right: 3rem;
    background: none;
    border: none;
    font-size: 2rem;
    color: #a1a1aa;
    cursor: pointer;
}
.modal-close:hover { color: #000; }
.modal-body { max-width: 36rem; width: 100%; }
.modal-title { font-size: 3rem; font-weight: 700; letter-spacing: -0.05em; margin-bottom: 3rem; }
.inquiry-form { display: flex; flex-direction: column; gap: 2rem; }
.inquiry-form .field { display: flex; flex-direction: column; gap: 0.5rem; }
.inquiry-form label { font-size: 10px; text-transform: uppercase; letter-spacing: 0.1em; font-weight: 700; color: #a1a1aa; }
.inquiry-form input, .inquiry-form textarea {
    background: transparent;
    border: none;
    border-bottom: 1px solid #e4e4e7;
    padding: 1rem 0;
    outline: none;
    font: inherit;
    font-size: clamp(1.1rem, 2vw, 1.5rem);
    resize: vertical;
}
.inquiry-form input:focus, .inquiry-form textarea:focus { border-color: #000; }
.inquiry-form input:invalid:not(:placeholder-shown), .inquiry-form textarea:invalid:not(:placeholder-shown) { border-color: #dc2626; }
.signal-button { width: 100%; padding: 1.5rem; letter-spacing: 0.4em; }
"#;

#[function_component(Mission)]
pub fn mission() -> Html {
    html! {
        <section class="mission">
            <Reveal class="mission-inner">
                <h2 class="unified-heading">
                    {"scale "}<span class="accent">{"without stretching."}</span>
                </h2>
                <p class="mission-lead">
                    {"zero bridge is an end-to-end media studio helping publishers solve the content velocity problem."}
                </p>
                <p class="standard-body muted">
                    {"a seamless creative extension for the world's most ambitious media publishers and brands. bridging the gap between ideation and massive-scale execution."}
                </p>
            </Reveal>
        </section>
    }
}

const ENGINE_PANELS: [(&str, &str); 3] = [
    (
        "CONNECT",
        "zerobridge connects publishers and media companies with global creatives and dedicated teams to produce and package content at optimised costs.",
    ),
    (
        "EMPOWER",
        "zerobridge helps brands scale new heights with our world-class platform-agnostic production engine powered by talent, technology and experience.",
    ),
    (
        "EXECUTE",
        "zerobridge does the heavy lifting for you, works as your extended team, enables you to produce and publish high volume content daily across diverse formats.",
    ),
];

#[function_component(Engine)]
pub fn engine() -> Html {
    html! {
        <section id="process" class="engine">
            <Reveal class="engine-inner">
                <span class="eyebrow">{"WHAT WE DO"}</span>
                <h3 class="unified-heading">{"our engine"}<span class="accent">{"."}</span></h3>
                <div class="engine-grid">
                    { ENGINE_PANELS.iter().map(|(title, copy)| html! {
                        <div class="engine-panel">
                            <span class="eyebrow">{*title}</span>
                            <p class="standard-body">{*copy}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </Reveal>
        </section>
    }
}

const RELAY_STATS: [(&str, &str); 2] = [("24/7", "UPTIME"), ("60%", "EFFICIENCY")];

#[function_component(GlobalRelay)]
pub fn global_relay() -> Html {
    html! {
        <section class="relay">
            <Reveal>
                <h3 class="unified-heading">
                    {"while you sleep,"}<br />
                    <span class="accent">{"we execute."}</span>
                </h3>
                <p class="standard-body muted">{"our hubs in india act as a 24/7 extension of your team."}</p>
                <div class="relay-stats">
                    { RELAY_STATS.iter().map(|(value, label)| html! {
                        <div class="stat">
                            <span class="stat-value">{*value}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    }).collect::<Html>() }
                </div>
            </Reveal>
        </section>
    }
}

const BRANDS: [&str; 15] = [
    "bbc", "shell", "discovery", "booking.com", "itv", "copa90", "zomato", "carlsberg",
    "future plc", "lost in", "bigger bang", "swns", "re:", "sbx | cars", "news uk",
];

#[function_component(BrandWall)]
pub fn brand_wall() -> Html {
    html! {
        <section class="brand-wall">
            <Reveal>
                <h3 class="eyebrow">{"WHO WE WORK WITH"}</h3>
                <div class="brand-grid">
                    { BRANDS.iter().map(|brand| html! { <span class="brand-mark">{*brand}</span> }).collect::<Html>() }
                </div>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_initiate: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let initiate = {
        let on_initiate = props.on_initiate.clone();
        Callback::from(move |_: MouseEvent| on_initiate.emit(()))
    };

    html! {
        <footer class="footer">
            <Reveal>
                <h2 class="unified-heading">
                    {"the bridge"}<br /><span class="accent">{"is open."}</span>
                </h2>
                <button class="footer-cta" onclick={initiate}>
                    <span>{"INITIATE THE SIGNAL"}</span>
                    <span class="arrow">{"→"}</span>
                </button>
                <HubClocks />
            </Reveal>
        </footer>
    }
}

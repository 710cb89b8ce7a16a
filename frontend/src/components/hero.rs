use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::AUTOPLAY_RETRY_MS;

// Browsers only allow unprompted playback for muted media, and some ignore
// the muted attribute until it is set on the element itself.
fn attempt_play(video: &NodeRef) {
    let Some(video) = video.cast::<HtmlVideoElement>() else {
        return;
    };
    video.set_muted(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!("Autoplay waiting for interaction: {:?}", e);
            }
        }),
        Err(e) => debug!("Autoplay refused: {:?}", e),
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroVideoProps {
    pub src: AttrValue,
}

#[function_component(HeroVideo)]
pub fn hero_video(props: &HeroVideoProps) -> Html {
    let video = use_node_ref();

    {
        let video = video.clone();
        use_effect_once(move || {
            attempt_play(&video);
            // Retry once the DOM has settled
            let retry = Timeout::new(AUTOPLAY_RETRY_MS, move || attempt_play(&video));
            move || drop(retry)
        });
    }

    html! {
        <div class="hero-media">
            <video
                ref={video}
                class="hero-video"
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            >
                <source src={props.src.clone()} type="video/mp4" />
                {"your browser does not support the video tag."}
            </video>
            <div class="video-mask"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeadlineProps {
    #[prop_or_default]
    pub entrance: bool,
}

#[function_component(Headline)]
pub fn headline(props: &HeadlineProps) -> Html {
    html! {
        <div class={classes!("hero-copy", props.entrance.then(|| "animate-entrance"))}>
            <h1 class="unified-heading">
                {"always-on content"}<br />
                {"operations for brands"}<br />
                {"that "}<span class="accent">{"publish daily"}</span>
            </h1>
        </div>
    }
}

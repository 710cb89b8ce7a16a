use yew::prelude::*;

use crate::components::hero::{Headline, HeroVideo};
use crate::components::nav::Nav;
use crate::config::HERO_VIDEO_URL;
use crate::inquiry::{InquiryModal, ModalAction, ModalState};
use crate::pages::sections::{BrandWall, Engine, Footer, GlobalRelay, Mission, SITE_STYLES};

/// Which flavour of the landing page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Video hero, no brand wall.
    Production,
    /// Animated headline over the video, with the brand wall.
    Studio,
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: Variant,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let modal = use_reducer(ModalState::default);

    let initiate = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Initiate))
    };
    let close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    let studio = props.variant == Variant::Studio;

    html! {
        <div class="site">
            <style>{SITE_STYLES}</style>
            <Nav on_initiate={initiate.clone()} />
            <section class="hero">
                <HeroVideo src={HERO_VIDEO_URL} />
                <Headline entrance={studio} />
            </section>
            <Mission />
            <Engine />
            <GlobalRelay />
            if studio {
                <BrandWall />
            }
            <Footer on_initiate={initiate} />
            <InquiryModal open={modal.is_open()} on_close={close} />
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! { <Landing variant={Variant::Production} /> }
}

#[function_component(Studio)]
pub fn studio() -> Html {
    html! { <Landing variant={Variant::Studio} /> }
}

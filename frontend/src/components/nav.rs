use yew::prelude::*;

use crate::anchor::{scroll_to_section, scroll_to_top};
use crate::scroll::use_header_scrolled;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_initiate: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_header_scrolled();

    let to_top = Callback::from(|_: MouseEvent| scroll_to_top());
    let to_process = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("process");
    });
    let initiate = {
        let on_initiate = props.on_initiate.clone();
        Callback::from(move |_: MouseEvent| on_initiate.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo" onclick={to_top}>
                    <span class="brand">{"ZERO BRIDGE"}<span class="accent">{"."}</span></span>
                    <span class="tagline">{"GLOBAL CONTENT INFRASTRUCTURE"}</span>
                </div>
                <div class="nav-right">
                    <button class="nav-link" onclick={to_process}>{"PROCESS"}</button>
                    <button class="nav-initiate" onclick={initiate}>{"INITIATE"}</button>
                </div>
            </div>
        </nav>
    }
}

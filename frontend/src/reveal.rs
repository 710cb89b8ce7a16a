//! Scroll-triggered reveal of content blocks.
//!
//! A block starts out suppressed (transparent and displaced) and settles into
//! its resting state the first time enough of it enters the viewport. The
//! transition happens at most once per mount and never reverses.
//!
//! Viewport observation is a capability ([`ViewportObserver`]) so the latch
//! logic does not depend on a particular host API. [`DomViewportObserver`]
//! backs it with the browser's `IntersectionObserver`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_DURATION_MS, REVEAL_EASING, REVEAL_OFFSET_PX, REVEAL_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationToken(u64);

impl ObservationToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("viewport intersection observation is not available")]
pub struct ObserverUnavailable;

/// Receives `true` when the target meets the visibility threshold.
pub type IntersectionCallback = Box<dyn FnMut(bool)>;

pub trait ViewportObserver {
    type Target;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        callback: IntersectionCallback,
    ) -> Result<ObservationToken, ObserverUnavailable>;

    /// Stops delivery for `token`. Unknown or already cancelled tokens are ignored.
    fn cancel(&self, token: ObservationToken);
}

/// Whether an intersection report counts as the block having entered the
/// viewport. `is_intersecting` alone is true for any overlap at all, so the
/// visible share of the block must also reach `threshold`.
pub fn has_entered(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// One-way visibility latch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true only for the call that flips the latch.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.visible {
            self.visible = true;
            return true;
        }
        false
    }
}

struct RevealSlot {
    latch: RevealLatch,
    token: Option<ObservationToken>,
    mounted: bool,
}

/// Reveal state of one mounted block. Dropping it is the unmount.
pub struct RevealController<O: ViewportObserver> {
    observer: Rc<O>,
    slot: Rc<RefCell<RevealSlot>>,
}

impl<O: ViewportObserver + 'static> RevealController<O> {
    pub fn mount(
        observer: Rc<O>,
        target: &O::Target,
        threshold: f64,
        on_reveal: impl Fn() + 'static,
    ) -> Self {
        let on_reveal: Rc<dyn Fn()> = Rc::new(on_reveal);
        let slot = Rc::new(RefCell::new(RevealSlot {
            latch: RevealLatch::default(),
            token: None,
            mounted: true,
        }));

        let callback: IntersectionCallback = {
            let slot = Rc::downgrade(&slot);
            let observer = Rc::downgrade(&observer);
            let on_reveal = on_reveal.clone();
            Box::new(move |intersecting| {
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                let token = {
                    let mut slot = slot.borrow_mut();
                    if !slot.mounted || !slot.latch.on_intersection(intersecting) {
                        return;
                    }
                    slot.token.take()
                };
                on_reveal();
                if let (Some(token), Some(observer)) = (token, observer.upgrade()) {
                    observer.cancel(token);
                }
            })
        };

        match observer.observe(target, threshold, callback) {
            Ok(token) => {
                // Some hosts report the first crossing synchronously.
                let already_visible = slot.borrow().latch.is_visible();
                if already_visible {
                    observer.cancel(token);
                } else {
                    slot.borrow_mut().token = Some(token);
                }
            }
            Err(ObserverUnavailable) => {
                debug!("Viewport observation unavailable, showing block immediately");
                slot.borrow_mut().latch.on_intersection(true);
                on_reveal();
            }
        }

        Self { observer, slot }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.slot.borrow().latch.is_visible()
    }
}

impl<O: ViewportObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        let token = {
            let mut slot = self.slot.borrow_mut();
            slot.mounted = false;
            slot.token.take()
        };
        if let Some(token) = token {
            self.observer.cancel(token);
        }
    }
}

struct Registration {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// `IntersectionObserver`-backed observation, one host observer per token.
#[derive(Default)]
pub struct DomViewportObserver {
    next_token: Cell<u64>,
    active: RefCell<HashMap<ObservationToken, Registration>>,
}

impl DomViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn supported() -> bool {
        web_sys::window()
            .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
            .unwrap_or(false)
    }
}

impl ViewportObserver for DomViewportObserver {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        mut callback: IntersectionCallback,
    ) -> Result<ObservationToken, ObserverUnavailable> {
        if !Self::supported() {
            return Err(ObserverUnavailable);
        }

        let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    callback(has_entered(entry.is_intersecting(), entry.intersection_ratio(), threshold));
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .map_err(|_| ObserverUnavailable)?;
        observer.observe(target);

        let token = ObservationToken::new(self.next_token.get());
        self.next_token.set(self.next_token.get() + 1);
        self.active.borrow_mut().insert(
            token,
            Registration {
                observer,
                _callback: closure,
            },
        );
        Ok(token)
    }

    fn cancel(&self, token: ObservationToken) {
        let registration = self.active.borrow_mut().remove(&token);
        if let Some(registration) = registration {
            registration.observer.disconnect();
            // We may be running inside this registration's closure; free it on the next turn.
            Timeout::new(0, move || drop(registration)).forget();
        }
    }
}

/// Inline style for a block in the given reveal state.
pub fn reveal_style(visible: bool) -> String {
    let transition = format!(
        "transition: opacity {ms}ms {easing}, transform {ms}ms {easing};",
        ms = REVEAL_DURATION_MS,
        easing = REVEAL_EASING,
    );
    if visible {
        format!("opacity: 1; transform: none; {}", transition)
    } else {
        format!("opacity: 0; transform: translateY({}px); {}", REVEAL_OFFSET_PX, transition)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let controller = node.cast::<Element>().map(|element| {
                    let visible = visible.clone();
                    RevealController::mount(
                        Rc::new(DomViewportObserver::new()),
                        &element,
                        REVEAL_THRESHOLD,
                        move || visible.set(true),
                    )
                });
                if controller.is_none() {
                    visible.set(true);
                }
                move || drop(controller)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(*visible)}>
            { for props.children.iter() }
        </div>
    }
}

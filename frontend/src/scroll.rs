use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;
use crate::state::{use_observable, Observable, ReadOnly};

/// Owns the "header has crossed the scroll threshold" flag.
pub struct ScrollController {
    threshold: f64,
    scrolled: Observable<bool>,
}

impl ScrollController {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: Observable::new(false),
        }
    }

    /// Feeds a sampled vertical scroll position. Unlike the reveal latch this
    /// flag follows the position both ways.
    pub fn sample(&self, scroll_y: f64) {
        self.scrolled.set(scroll_y > self.threshold);
    }

    pub fn scrolled(&self) -> ReadOnly<bool> {
        self.scrolled.reader()
    }
}

/// Window `scroll` listener feeding a [`ScrollController`]. Removed on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    pub fn attach(controller: Rc<ScrollController>) -> Option<Self> {
        let window = web_sys::window()?;

        let callback = Closure::<dyn Fn()>::new({
            let window = window.clone();
            let controller = controller.clone();
            move || {
                if let Ok(scroll_y) = window.scroll_y() {
                    controller.sample(scroll_y);
                }
            }
        });

        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_err()
        {
            debug!("Could not attach scroll listener");
            return None;
        }

        // The page may be restored mid-scroll, so take one reading right away.
        if let Ok(scroll_y) = window.scroll_y() {
            controller.sample(scroll_y);
        }

        debug!("Scroll listener attached");
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            debug!("Could not detach scroll listener");
            return;
        }
        debug!("Scroll listener detached");
    }
}

/// Read-only view of the scroll flag handed down through context.
#[derive(Clone, PartialEq)]
pub struct HeaderScroll(pub ReadOnly<bool>);

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub children: Children,
}

#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let controller = use_memo(|_| ScrollController::new(SCROLL_THRESHOLD_PX), ());

    {
        let controller = controller.clone();
        use_effect_once(move || {
            let listener = ScrollListener::attach(controller);
            move || drop(listener)
        });
    }

    let context = HeaderScroll(controller.scrolled());

    html! {
        <ContextProvider<HeaderScroll> context={context}>
            { for props.children.iter() }
        </ContextProvider<HeaderScroll>>
    }
}

/// Whether the header should switch to its scrolled look. Stays false when
/// rendered outside a [`ScrollProvider`].
#[hook]
pub fn use_header_scrolled() -> bool {
    let context = use_context::<HeaderScroll>();
    let detached = use_memo(|_| Observable::new(false).reader(), ());
    let source = context
        .map(|HeaderScroll(flag)| flag)
        .unwrap_or_else(|| (*detached).clone());
    use_observable(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_flag_follows_position() {
        let controller = ScrollController::new(SCROLL_THRESHOLD_PX);
        let flag = controller.scrolled();

        controller.sample(0.0);
        assert!(!flag.get());

        controller.sample(200.0);
        assert!(flag.get());

        controller.sample(10.0);
        assert!(!flag.get());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let controller = ScrollController::new(50.0);
        controller.sample(50.0);
        assert!(!controller.scrolled().get());
        controller.sample(50.5);
        assert!(controller.scrolled().get());
    }

    #[test]
    fn test_subscribers_see_only_crossings() {
        let controller = ScrollController::new(SCROLL_THRESHOLD_PX);
        let crossings = Rc::new(RefCell::new(Vec::new()));
        let _subscription = controller.scrolled().subscribe({
            let crossings = crossings.clone();
            move |scrolled: &bool| crossings.borrow_mut().push(*scrolled)
        });

        for y in [0.0, 20.0, 120.0, 300.0, 800.0, 40.0, 0.0] {
            controller.sample(y);
        }

        assert_eq!(*crossings.borrow(), vec![true, false]);
    }
}

use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::config::ANCHOR_OFFSET_PX;

/// Document offset to scroll to so an element lands just below the fixed
/// header. `element_top` is relative to the viewport.
pub fn anchor_target_top(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_offset - header_offset).max(0.0)
}

pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|document| document.get_element_by_id(id)) else {
        debug!("No section with id {} to scroll to", id);
        return;
    };

    let element_top = element.get_bounding_client_rect().top();
    let page_offset = window.scroll_y().unwrap_or(0.0);
    smooth_scroll(&window, anchor_target_top(element_top, page_offset, ANCHOR_OFFSET_PX));
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        smooth_scroll(&window, 0.0);
    }
}

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(500.0, 0.0, 420.0)]
    #[case(500.0, 1200.0, 1620.0)]
    #[case(-300.0, 1200.0, 820.0)]
    #[case(40.0, 0.0, 0.0)]
    fn test_anchor_target_clears_header(
        #[case] element_top: f64,
        #[case] page_offset: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(anchor_target_top(element_top, page_offset, ANCHOR_OFFSET_PX), expected);
    }
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event};
use yew::prelude::*;

use crate::view::{PageView, ScrollAlign, ViewHandle};

const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Fragment of a same-page link, `None` for anything else.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Scrolls to the target of a same-page link. Returns true when the click
/// belongs to us and default navigation must be suppressed, whether or not
/// the target exists.
pub fn follow_fragment(view: &dyn PageView, href: &str) -> bool {
    let Some(id) = fragment_target(href) else {
        return false;
    };
    if !id.is_empty() {
        view.scroll_to(id, ScrollAlign::Start);
    }
    true
}

/// Intercepts clicks on any `<a href="#...">` in the document.
#[hook]
pub fn use_anchor_scroll(view: ViewHandle) {
    use_effect_with_deps(
        move |view| {
            let view = view.clone();
            let document = window().and_then(|w| w.document());

            let click_callback = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
                let link = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(FRAGMENT_LINK_SELECTOR).ok().flatten());
                let Some(href) = link.and_then(|a| a.get_attribute("href")) else {
                    return;
                };
                if follow_fragment(&*view, &href) {
                    e.prevent_default();
                }
            });

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                }
            }
        },
        view,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::{RecordingView, ViewEvent};

    #[test]
    fn fragment_links_scroll_to_top_of_target() {
        let view = RecordingView::with_elements(&["projects"]);
        assert!(follow_fragment(&view, "#projects"));
        assert_eq!(view.events(), vec![ViewEvent::Scrolled("projects".into(), ScrollAlign::Start)]);
    }

    #[test]
    fn missing_target_is_still_intercepted() {
        let view = RecordingView::with_elements(&["projects"]);
        assert!(follow_fragment(&view, "#nowhere"));
        assert!(follow_fragment(&view, "#"));
        assert!(view.events().is_empty());
    }

    #[test]
    fn other_links_are_left_alone() {
        let view = RecordingView::with_elements(&["projects"]);
        assert!(!follow_fragment(&view, "https://example.com/#projects"));
        assert!(!follow_fragment(&view, "/projects"));
        assert_eq!(fragment_target("/about#team"), None);
        assert!(view.events().is_empty());
    }
}

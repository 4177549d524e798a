//! Page-level side effects that sit outside the component tree.
//!
//! Widgets never touch `document.body`, the root style or `window.alert`
//! directly. They go through [`PageView`], which keeps their logic testable
//! without a browser.

use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
}

pub trait PageView {
    fn set_active_theme(&self, theme: &str);
    fn set_global_accent(&self, accent: &str);
    /// Smoothly scrolls the element with `id` into view. Returns false when
    /// no such element exists.
    fn scroll_to(&self, id: &str, align: ScrollAlign) -> bool;
    fn notify(&self, message: &str);
}

/// Shared handle so a view can travel through component properties.
#[derive(Clone)]
pub struct ViewHandle(pub Rc<dyn PageView>);

impl ViewHandle {
    pub fn new(view: impl PageView + 'static) -> Self {
        Self(Rc::new(view))
    }

    pub fn dom() -> Self {
        Self::new(DomView)
    }
}

impl PartialEq for ViewHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for ViewHandle {
    type Target = dyn PageView;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// [`PageView`] backed by the live document.
pub struct DomView;

impl PageView for DomView {
    fn set_active_theme(&self, theme: &str) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(e) = body.set_attribute(config::ACTIVE_THEME_ATTRIBUTE, theme) {
            warn!("Failed to set active theme: {:?}", e);
        }
    }

    fn set_global_accent(&self, accent: &str) {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(root) = root {
            if let Err(e) = root.style().set_property(config::GLOBAL_ACCENT_PROPERTY, accent) {
                warn!("Failed to set global accent: {:?}", e);
            }
        }
    }

    fn scroll_to(&self, id: &str, align: ScrollAlign) -> bool {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(match align {
                    ScrollAlign::Start => ScrollLogicalPosition::Start,
                    ScrollAlign::Center => ScrollLogicalPosition::Center,
                });
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }

    fn notify(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }
}

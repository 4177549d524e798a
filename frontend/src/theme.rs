use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::view::PageView;

/// Theme currently presented by the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub active_theme: String,
    pub global_accent: Option<String>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            active_theme: config::DEFAULT_THEME.to_string(),
            global_accent: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ThemeAction {
    /// A section crossed the visibility threshold.
    SectionEntered {
        theme: Option<String>,
        accent: Option<String>,
    },
    /// A project card asked for its theme.
    CardOpened { theme: Option<String> },
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ThemeAction::SectionEntered { theme, accent } => {
                next.active_theme = theme
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| config::DEFAULT_THEME.to_string());
                if let Some(accent) = accent.map(|a| a.trim().to_string()).filter(|a| !a.is_empty()) {
                    next.global_accent = Some(accent);
                }
            }
            ThemeAction::CardOpened { theme } => match theme.filter(|t| !t.is_empty()) {
                Some(theme) => next.active_theme = theme,
                None => return self,
            },
        }
        debug!("Active theme is now {}", next.active_theme);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Publishes the state as the body marker and the root accent variable.
pub fn render_theme(view: &dyn PageView, state: &ThemeState) {
    view.set_active_theme(&state.active_theme);
    if let Some(accent) = &state.global_accent {
        view.set_global_accent(accent);
    }
}

fn section_entered(element: &Element) -> ThemeAction {
    let accent = window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value(config::SECTION_ACCENT_PROPERTY).ok());
    ThemeAction::SectionEntered {
        theme: element.get_attribute("data-theme"),
        accent,
    }
}

/// Watches every `.section` and dispatches its theme once enough of it is
/// on screen. Entries are dispatched in the order the observer reports them.
#[hook]
pub fn use_theme_observer(dispatcher: UseReducerDispatcher<ThemeState>) {
    use_effect_with_deps(
        move |_| {
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            dispatcher.dispatch(section_entered(&entry.target()));
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(config::SECTION_VISIBILITY_THRESHOLD));
            let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    error!("Failed to create section observer: {:?}", e);
                    None
                }
            };

            if let Some(observer) = &observer {
                let sections = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.query_selector_all(config::SECTION_SELECTOR).ok());
                if let Some(sections) = sections {
                    for i in 0..sections.length() {
                        if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                            observer.observe(&section);
                        }
                    }
                }
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        },
        (),
    );
}

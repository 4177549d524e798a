use std::rc::Rc;

use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Reflect};
use web_sys::window;

use crate::config;

/// Tween options in the shape GSAP expects for `gsap.to(target, vars)`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    pub duration: f64,
    pub x_percent: f64,
    pub repeat: i32,
    pub yoyo: bool,
    pub ease: &'static str,
}

impl TweenVars {
    /// Slow endless left/right drift of the hero background.
    pub fn hero_drift() -> Self {
        Self {
            duration: 20.0,
            x_percent: -15.0,
            repeat: -1,
            yoyo: true,
            ease: "sine.inOut",
        }
    }
}

pub trait BackgroundAnimation {
    fn animate(&self, target: &str, vars: &TweenVars) -> Result<(), String>;
}

#[derive(Clone)]
pub struct AnimationHandle(pub Rc<dyn BackgroundAnimation>);

impl PartialEq for AnimationHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// GSAP loaded as a page global.
pub struct GsapAnimation {
    gsap: JsValue,
}

impl GsapAnimation {
    pub fn detect() -> Option<Self> {
        let window = window()?;
        let gsap = Reflect::get(&window, &JsValue::from_str("gsap")).ok()?;
        if gsap.is_undefined() || gsap.is_null() {
            return None;
        }
        Some(Self { gsap })
    }

    pub fn handle() -> Option<AnimationHandle> {
        Self::detect().map(|gsap| AnimationHandle(Rc::new(gsap)))
    }
}

impl BackgroundAnimation for GsapAnimation {
    fn animate(&self, target: &str, vars: &TweenVars) -> Result<(), String> {
        let to = Reflect::get(&self.gsap, &JsValue::from_str("to"))
            .map_err(|e| format!("{:?}", e))?
            .dyn_into::<Function>()
            .map_err(|_| "gsap.to is not a function".to_string())?;
        let vars = serde_wasm_bindgen::to_value(vars).map_err(|e| e.to_string())?;
        to.call2(&self.gsap, &JsValue::from_str(target), &vars)
            .map_err(|e| format!("{:?}", e))?;
        Ok(())
    }
}

/// Starts the hero drift when an animation capability is available.
/// Returns whether an animation was started.
pub fn start_hero_animation(animation: Option<&dyn BackgroundAnimation>) -> bool {
    let Some(animation) = animation else {
        info!("No animation library present, hero background stays still");
        return false;
    };
    match animation.animate(config::HERO_BACKGROUND_SELECTOR, &TweenVars::hero_drift()) {
        Ok(()) => true,
        Err(e) => {
            warn!("Hero animation failed to start: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingAnimation {
        calls: RefCell<Vec<(String, TweenVars)>>,
    }

    impl BackgroundAnimation for RecordingAnimation {
        fn animate(&self, target: &str, vars: &TweenVars) -> Result<(), String> {
            self.calls.borrow_mut().push((target.to_string(), vars.clone()));
            Ok(())
        }
    }

    struct BrokenAnimation;

    impl BackgroundAnimation for BrokenAnimation {
        fn animate(&self, _target: &str, _vars: &TweenVars) -> Result<(), String> {
            Err("no tween engine".into())
        }
    }

    #[test]
    fn missing_capability_is_skipped() {
        assert!(!start_hero_animation(None));
    }

    #[test]
    fn drifts_hero_background_forever() {
        let animation = RecordingAnimation::default();
        assert!(start_hero_animation(Some(&animation)));

        let calls = animation.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "#hero-bg");
        assert_eq!(calls[0].1.repeat, -1);
        assert!(calls[0].1.yoyo);
    }

    #[test]
    fn failing_capability_does_not_start() {
        assert!(!start_hero_animation(Some(&BrokenAnimation)));
    }

    #[test]
    fn tween_vars_use_gsap_names() {
        let json = serde_json::to_value(TweenVars::hero_drift()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "duration": 20.0,
                "xPercent": -15.0,
                "repeat": -1,
                "yoyo": true,
                "ease": "sine.inOut"
            })
        );
    }
}

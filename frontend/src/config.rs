
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000"  // Development URL when the API runs locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, same origin
}

pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const RECOMMEND_ENDPOINT: &str = "/api/recommend";

/// Fraction of a section that has to be visible before its theme is applied.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.45;
pub const DEFAULT_THEME: &str = "dark";

pub const SECTION_SELECTOR: &str = ".section";
pub const HERO_BACKGROUND_SELECTOR: &str = "#hero-bg";
pub const ACTIVE_THEME_ATTRIBUTE: &str = "data-active-theme";
pub const SECTION_ACCENT_PROPERTY: &str = "--accent";
pub const GLOBAL_ACCENT_PROPERTY: &str = "--global-accent";

pub const OWNER_NAME: &str = "Ujwal Hiredesai";
pub const OWNER_TAGLINE: &str = "AI Engineer | Data Science | Automation | ML Ops";

pub fn endpoint(path: &str) -> String {
    format!("{}{}", get_backend_url(), path)
}

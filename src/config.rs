use log::Level;
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` block a host page can
/// use to override any of the defaults below.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Every tunable the page enhancements read. `Default` holds the values the
/// site ships with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub anchor_offset: f64,
    pub nav_shadow_after: f64,
    pub parallax_factor: f64,
    pub active_link_offset: f64,
    pub mobile_breakpoint: f64,
    pub resize_debounce_ms: u32,
    pub load_fade_delay_ms: u32,
    pub easter_egg_duration_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            counter_duration_ms: 2000,
            counter_steps: 60,
            anchor_offset: 70.0,
            nav_shadow_after: 100.0,
            parallax_factor: 0.5,
            active_link_offset: 100.0,
            mobile_breakpoint: 768.0,
            resize_debounce_ms: 250,
            load_fade_delay_ms: 100,
            easter_egg_duration_ms: 5000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Milliseconds between two counter ticks, truncated like a browser interval.
    pub fn counter_tick_ms(&self) -> u32 {
        self.counter_duration_ms / self.counter_steps.max(1)
    }

    /// Reads the override block from the page, falling back to defaults when it
    /// is missing or malformed.
    pub fn load(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|script| script.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("Loaded site config override: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed #{} block: {}", CONFIG_SCRIPT_ID, e);
                Self::default()
            }
        }
    }
}

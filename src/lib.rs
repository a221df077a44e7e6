//! Client-side enhancements for the InstaJob preview site: smooth in-page
//! navigation, reveal-on-scroll with counting stats, hero parallax, a mobile
//! menu toggle and a small easter egg.

pub mod config;
pub mod controller;
pub mod counter;
pub mod display_value;
pub mod konami;
pub mod mobile_menu;
pub mod nav;
pub mod observer;
pub mod page;
pub mod surface;
pub mod trackable;

use log::info;

use config::SiteConfig;
use controller::PageController;

pub fn run() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!(format!("error initializing log: {}", e));
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = SiteConfig::load(&document);
    info!("Enhancing page");
    // Listeners hold the controller for the rest of the page's life.
    if let Err(e) = PageController::new(config).start(window, document) {
        log::error!("Failed to wire page enhancements: {:?}", e);
    }

    gloo_console::log!("InstaJob Preview Website loaded successfully");
    gloo_console::log!("Created by Basilis Fikioris - Diploma Thesis Project");
}

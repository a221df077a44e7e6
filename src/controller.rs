use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, IntersectionObserver, KeyboardEvent, Window};

use crate::config::SiteConfig;
use crate::konami::{self, KeySequence};
use crate::{mobile_menu, nav, observer, page};

/// Owns all state that lives as long as the page. Built once in `run`.
pub struct PageController {
    config: SiteConfig,
    keys: KeySequence,
    last_scroll: f64,
    rainbow_injected: bool,
    resize_timer: Option<Timeout>,
    reveal_observer: Option<IntersectionObserver>,
}

impl PageController {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            keys: KeySequence::default(),
            last_scroll: 0.0,
            rainbow_injected: false,
            resize_timer: None,
            reveal_observer: None,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    pub fn record_scroll(&mut self, position: f64) {
        self.last_scroll = position;
    }

    /// Feeds a key press to the easter egg. On a match returns whether the
    /// keyframes still have to be injected, which is true only the first time.
    pub fn record_key(&mut self, key: &str) -> Option<bool> {
        if !self.keys.push(key) {
            return None;
        }
        let inject = !self.rainbow_injected;
        self.rainbow_injected = true;
        Some(inject)
    }

    /// Wires every listener on the page and hands back the shared controller.
    pub fn start(self, window: Window, document: Document) -> Result<Rc<RefCell<Self>>, JsValue> {
        let controller = Rc::new(RefCell::new(self));
        let config = controller.borrow().config.clone();

        install_anchor_scrolling(&window, &document, &config)?;
        install_scroll_handlers(&controller, &window, &document, &config)?;

        match observer::install(&document, &config) {
            Ok(reveal) => controller.borrow_mut().reveal_observer = Some(reveal),
            Err(e) => log::warn!("Scroll reveal unavailable: {:?}", e),
        }

        page::install_card_hover(&document)?;
        mobile_menu::ensure_toggle(&window, &document, config.mobile_breakpoint);
        install_resize_handler(&controller, &window, &document, &config)?;
        install_load_fade(&window, &document, &config)?;
        install_easter_egg(&controller, &document, &config)?;

        Ok(controller)
    }
}

fn install_anchor_scrolling(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    let window_clone = window.clone();
    let document_clone = document.clone();
    let anchor_offset = config.anchor_offset;
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        nav::handle_anchor_click(&event, &window_clone, &document_clone, anchor_offset);
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn install_scroll_handlers(
    controller: &Rc<RefCell<PageController>>,
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    let shadow = {
        let controller = controller.clone();
        let window = window.clone();
        let document = document.clone();
        let threshold = config.nav_shadow_after;
        Closure::<dyn FnMut()>::new(move || {
            let position = nav::update_nav_shadow(&window, &document, threshold);
            controller.borrow_mut().record_scroll(position);
        })
    };

    let parallax = {
        let window = window.clone();
        let document = document.clone();
        let factor = config.parallax_factor;
        Closure::<dyn FnMut()>::new(move || {
            nav::update_parallax(&window, &document, factor);
        })
    };

    let active_link = {
        let window = window.clone();
        let document = document.clone();
        let offset = config.active_link_offset;
        Closure::<dyn FnMut()>::new(move || {
            nav::update_active_link(&window, &document, offset);
        })
    };

    for handler in [shadow, parallax, active_link] {
        window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    Ok(())
}

fn install_resize_handler(
    controller: &Rc<RefCell<PageController>>,
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    let controller = controller.clone();
    let window_clone = window.clone();
    let document = document.clone();
    let debounce_ms = config.resize_debounce_ms;
    let breakpoint = config.mobile_breakpoint;

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let window = window_clone.clone();
        let document = document.clone();
        let timeout = Timeout::new(debounce_ms, move || {
            mobile_menu::ensure_toggle(&window, &document, breakpoint);
        });
        // Replacing the pending timeout cancels it.
        controller.borrow_mut().resize_timer = Some(timeout);
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn install_load_fade(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    let document = document.clone();
    let delay_ms = config.load_fade_delay_ms;
    let on_load = Closure::<dyn FnMut()>::new(move || {
        page::fade_in_body(&document, delay_ms);
    });
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

fn install_easter_egg(
    controller: &Rc<RefCell<PageController>>,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    let controller = controller.clone();
    let document_clone = document.clone();
    let duration_ms = config.easter_egg_duration_ms;

    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let matched = controller.borrow_mut().record_key(&event.key());
        if let Some(inject_keyframes) = matched {
            konami::play_rainbow(&document_clone, inject_keyframes, duration_ms);
        }
    });
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::konami::SEQUENCE;

    #[test]
    fn starts_with_empty_state() {
        let controller = PageController::new(SiteConfig::default());
        assert_eq!(controller.last_scroll(), 0.0);
        assert!(controller.keys.is_empty());
        assert!(controller.resize_timer.is_none());
    }

    #[test]
    fn remembers_last_scroll() {
        let mut controller = PageController::new(SiteConfig::default());
        controller.record_scroll(420.0);
        controller.record_scroll(380.0);
        assert_eq!(controller.last_scroll(), 380.0);
    }

    #[test]
    fn keyframes_are_injected_only_on_the_first_match() {
        let mut controller = PageController::new(SiteConfig::default());
        let first: Vec<_> = SEQUENCE.iter().map(|key| controller.record_key(key)).collect();
        assert_eq!(first[9], Some(true));
        assert!(first[..9].iter().all(Option::is_none));

        let second: Vec<_> = SEQUENCE.iter().map(|key| controller.record_key(key)).collect();
        assert_eq!(second[9], Some(false));
    }
}

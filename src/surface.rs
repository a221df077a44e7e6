use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::trackable::NUMERIC_CHILD_SELECTOR;

const ANIMATED_KEY: &str = "animated";

/// The text node a counter writes into.
pub trait CounterSurface {
    fn is_animated(&self) -> bool;
    fn mark_animated(&self);
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// A page region that can be concealed, revealed and may hold a counter.
pub trait RevealSurface {
    type Counter: CounterSurface;

    fn set_style(&self, property: &str, value: &str);
    fn counter(&self) -> Option<Self::Counter>;
}

impl CounterSurface for HtmlElement {
    fn is_animated(&self) -> bool {
        self.dataset().get(ANIMATED_KEY).as_deref() == Some("true")
    }

    fn mark_animated(&self) {
        let _ = self.dataset().set(ANIMATED_KEY, "true");
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

impl RevealSurface for HtmlElement {
    type Counter = HtmlElement;

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            log::debug!("Could not set {} on element: {:?}", property, e);
        }
    }

    fn counter(&self) -> Option<HtmlElement> {
        self.query_selector(NUMERIC_CHILD_SELECTOR)
            .ok()
            .flatten()
            .and_then(|child| child.dyn_into::<HtmlElement>().ok())
    }
}

use std::collections::VecDeque;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

pub const SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

const RAINBOW_ANIMATION: &str = "rainbow 2s linear infinite";
const RAINBOW_KEYFRAMES: &str = r#"
    @keyframes rainbow {
        0% { filter: hue-rotate(0deg); }
        100% { filter: hue-rotate(360deg); }
    }
"#;

/// The most recent key presses, capped at the sequence length.
#[derive(Debug, Default)]
pub struct KeySequence {
    keys: VecDeque<String>,
}

impl KeySequence {
    /// Records a key and reports whether the last keys spell the sequence.
    pub fn push(&mut self, key: &str) -> bool {
        self.keys.push_back(key.to_string());
        while self.keys.len() > SEQUENCE.len() {
            self.keys.pop_front();
        }
        self.keys.len() == SEQUENCE.len()
            && self
                .keys
                .iter()
                .zip(SEQUENCE)
                .all(|(seen, expected)| seen.as_str() == expected)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Spins the page hue for `duration_ms`. The keyframes are appended to the head
/// only when `inject_keyframes` is set.
pub fn play_rainbow(document: &Document, inject_keyframes: bool, duration_ms: u32) {
    let Some(body) = document.body() else {
        return;
    };

    let _ = body.style().set_property("animation", RAINBOW_ANIMATION);
    if inject_keyframes {
        if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
            style.set_text_content(Some(RAINBOW_KEYFRAMES));
            let _ = head.append_child(&style);
        }
    }
    log::info!("Easter egg unlocked");

    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        let _ = body.style().set_property("animation", "");
    });
}

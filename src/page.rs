use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::trackable::HOVER_CARD_SELECTOR;

const CARD_HOVER_TRANSITION: &str = "transform 0.3s ease, box-shadow 0.3s ease";

/// Hides the body and fades it back in after `delay_ms`.
pub fn fade_in_body(document: &Document, delay_ms: u32) {
    let Some(body) = document.body() else {
        return;
    };
    let style = body.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transition", "opacity 0.5s ease");

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let _ = body.style().set_property("opacity", "1");
    });
}

pub fn install_card_hover(document: &Document) -> Result<(), JsValue> {
    let cards = document.query_selector_all(HOVER_CARD_SELECTOR)?;
    for card in (0..cards.length())
        .filter_map(|i| cards.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
    {
        let target = card.clone();
        let on_enter = Closure::<dyn FnMut()>::new(move || {
            let _ = target
                .style()
                .set_property("transition", CARD_HOVER_TRANSITION);
        });
        card.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
        on_enter.forget();
    }
    Ok(())
}

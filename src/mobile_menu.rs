use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};
use yew::prelude::*;

const HOST_CLASS: &str = "mobile-menu-host";
const NAV_LINKS_SELECTOR: &str = ".nav-links";

const BUTTON_STYLE: &str = "display: block; background: none; border: none; font-size: 1.5rem; cursor: pointer; color: var(--text-dark); padding: 0.5rem;";

/// Inline layout the links take while opened as a dropdown.
const DROPDOWN_LAYOUT: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("right", "0"),
    ("background-color", "white"),
    ("flex-direction", "column"),
    ("padding", "1rem"),
    ("box-shadow", crate::nav::SHADOW_RAISED),
];

pub fn needs_toggle(inner_width: f64, breakpoint: f64, already_present: bool) -> bool {
    !already_present && inner_width <= breakpoint
}

/// `display` value the links switch to on a click.
pub fn next_links_display(current: &str) -> &'static str {
    if current == "flex" {
        "none"
    } else {
        "flex"
    }
}

fn toggle_nav_links() {
    let Some(links) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(NAV_LINKS_SELECTOR).ok().flatten())
        .and_then(|links| links.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let style = links.style();
    let current = style.get_property_value("display").unwrap_or_default();
    let next = next_links_display(&current);
    let _ = style.set_property("display", next);
    if next == "flex" {
        for (property, value) in DROPDOWN_LAYOUT {
            let _ = style.set_property(property, value);
        }
    }
}

#[function_component(MenuToggle)]
pub fn menu_toggle() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        toggle_nav_links();
    });

    html! {
        <button class="mobile-menu-btn" style={BUTTON_STYLE} {onclick}>
            {"☰"}
        </button>
    }
}

/// Mounts the menu toggle into the nav when the viewport is narrow enough and
/// no toggle exists yet.
pub fn ensure_toggle(window: &Window, document: &Document, breakpoint: f64) {
    let inner_width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX);
    let already_present = document
        .query_selector(&format!(".{}", HOST_CLASS))
        .ok()
        .flatten()
        .is_some();
    if !needs_toggle(inner_width, breakpoint, already_present) {
        return;
    }

    let Some(container) = document.query_selector("nav .container").ok().flatten() else {
        return;
    };
    let Ok(host) = document.create_element("div") else {
        return;
    };
    host.set_class_name(HOST_CLASS);
    if container.append_child(&host).is_err() {
        return;
    }

    log::info!("Viewport is {}px wide, adding menu toggle", inner_width);
    yew::Renderer::<MenuToggle>::with_root(host).render();
}

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub const SHADOW_RAISED: &str = "0 4px 6px -1px rgb(0 0 0 / 0.1)";
pub const SHADOW_RESTING: &str = "0 1px 3px 0 rgb(0 0 0 / 0.1)";

const LOCAL_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const NAV_LINK_SELECTOR: &str = ".nav-links a";

/// Vertical extent of a `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub fn nav_shadow(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        SHADOW_RAISED
    } else {
        SHADOW_RESTING
    }
}

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

/// Where the window should scroll so the target lands below the fixed nav.
pub fn anchor_scroll_top(target_offset_top: f64, anchor_offset: f64) -> f64 {
    target_offset_top - anchor_offset
}

/// The section whose span holds `scroll_y + offset`. When spans overlap the
/// last one in document order wins.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<&str> {
    let position = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Intercepts clicks on in-page anchors and scrolls smoothly instead.
pub fn handle_anchor_click(event: &Event, window: &Window, document: &Document, anchor_offset: f64) {
    let Some(anchor) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(LOCAL_ANCHOR_SELECTOR).ok().flatten())
    else {
        return;
    };
    event.prevent_default();

    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    // A bare "#" is not a valid selector.
    let Some(target) = document
        .query_selector(&href)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No scroll target for {}", href);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(target.offset_top()), anchor_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Applies the nav shadow for the current scroll position and returns it.
pub fn update_nav_shadow(window: &Window, document: &Document, threshold: f64) -> f64 {
    let current = scroll_y(window);
    if let Some(nav) = document
        .query_selector("nav")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
    {
        let _ = nav
            .style()
            .set_property("box-shadow", nav_shadow(current, threshold));
    }
    current
}

pub fn update_parallax(window: &Window, document: &Document, factor: f64) {
    if let Some(hero) = document
        .query_selector(".hero")
        .ok()
        .flatten()
        .and_then(|hero| hero.dyn_into::<HtmlElement>().ok())
    {
        let _ = hero
            .style()
            .set_property("transform", &parallax_transform(scroll_y(window), factor));
    }
}

pub fn update_active_link(window: &Window, document: &Document, offset: f64) {
    let sections: Vec<SectionSpan> = html_elements(document, "section[id]")
        .iter()
        .filter_map(|section| {
            Some(SectionSpan {
                id: section.get_attribute("id")?,
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
        })
        .collect();

    let Some(active_id) = active_section(&sections, scroll_y(window), offset) else {
        return;
    };
    let active_href = format!("#{}", active_id);

    for link in html_elements(document, NAV_LINK_SELECTOR) {
        let class_list = link.class_list();
        let _ = class_list.remove_1("active");
        if link.get_attribute("href").as_deref() == Some(active_href.as_str()) {
            let _ = class_list.add_1("active");
        }
    }
}

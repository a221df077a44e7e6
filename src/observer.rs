use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::SiteConfig;
use crate::counter::{CounterAnimator, IntervalDriver, TickDriver};
use crate::surface::RevealSurface;
use crate::trackable::{TrackableKind, TRACKED_SELECTOR};

pub struct Trackable<S> {
    surface: S,
    kind: TrackableKind,
    revealed: Cell<bool>,
}

impl<S> Trackable<S> {
    pub fn new(surface: S, kind: TrackableKind) -> Self {
        Self {
            surface,
            kind,
            revealed: Cell::new(false),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn kind(&self) -> TrackableKind {
        self.kind
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }
}

/// Reveals tracked elements as they scroll into view and starts the counters
/// of stat-like ones.
pub struct VisibilityObserver<S, D> {
    tracked: Vec<Trackable<S>>,
    animator: CounterAnimator<D>,
}

impl<S, D> VisibilityObserver<S, D>
where
    S: RevealSurface + PartialEq,
    D: TickDriver<S::Counter>,
{
    /// Takes ownership of the discovered elements and conceals each one.
    pub fn new(tracked: Vec<Trackable<S>>, animator: CounterAnimator<D>) -> Self {
        for trackable in &tracked {
            let surface = &trackable.surface;
            surface.set_style("opacity", "0");
            surface.set_style("transform", "translateY(30px)");
            surface.set_style("transition", "opacity 0.6s ease, transform 0.6s ease");
        }
        Self { tracked, animator }
    }

    pub fn tracked(&self) -> &[Trackable<S>] {
        &self.tracked
    }

    pub fn animator(&self) -> &CounterAnimator<D> {
        &self.animator
    }

    /// Handles the elements currently intersecting. Unknown elements are
    /// skipped and repeated notifications are harmless.
    pub fn on_intersect<'a, I>(&self, intersecting: I)
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        for target in intersecting {
            let Some(trackable) = self.tracked.iter().find(|t| &t.surface == target) else {
                continue;
            };

            if !trackable.revealed.replace(true) {
                trackable.surface.set_style("opacity", "1");
                trackable.surface.set_style("transform", "translateY(0)");
            }

            if trackable.kind.has_counter() {
                self.animator.animate(&trackable.surface);
            }
        }
    }
}

/// Finds every tracked element on the page, conceals it and registers it with
/// an `IntersectionObserver`. The caller keeps the observer for the page
/// lifetime.
pub fn install(document: &Document, config: &SiteConfig) -> Result<IntersectionObserver, JsValue> {
    let nodes = document.query_selector_all(TRACKED_SELECTOR)?;
    let elements: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();

    let tracked = elements
        .iter()
        .map(|element| Trackable::new(element.clone(), TrackableKind::classify(element)))
        .collect();
    let animator = CounterAnimator::new(
        IntervalDriver,
        config.counter_steps,
        config.counter_tick_ms(),
    );
    let visibility = VisibilityObserver::new(tracked, animator);
    log::debug!("Tracking {} elements for reveal", elements.len());

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let hits: Vec<HtmlElement> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(|entry| entry.is_intersecting())
                .filter_map(|entry| entry.target().dyn_into::<HtmlElement>().ok())
                .collect();
            visibility.on_intersect(hits.iter());
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for element in &elements {
        observer.observe(element);
    }

    callback.forget();
    Ok(observer)
}

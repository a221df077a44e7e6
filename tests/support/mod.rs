#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use instajob_preview::counter::{AnimationRun, CancelToken, CounterAnimator, TickDriver};
use instajob_preview::surface::{CounterSurface, RevealSurface};

#[derive(Debug, Default)]
pub struct CounterState {
    pub text: String,
    pub animated: bool,
    pub frames: Vec<String>,
}

/// In-memory numeric child.
#[derive(Debug, Clone, Default)]
pub struct FakeCounter(pub Rc<RefCell<CounterState>>);

impl FakeCounter {
    pub fn with_text(text: &str) -> Self {
        let counter = Self::default();
        counter.0.borrow_mut().text = text.to_string();
        counter
    }

    pub fn shown(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn frames(&self) -> Vec<String> {
        self.0.borrow().frames.clone()
    }
}

impl CounterSurface for FakeCounter {
    fn is_animated(&self) -> bool {
        self.0.borrow().animated
    }

    fn mark_animated(&self) {
        self.0.borrow_mut().animated = true;
    }

    fn text(&self) -> String {
        self.shown()
    }

    fn set_text(&self, text: &str) {
        let mut state = self.0.borrow_mut();
        state.text = text.to_string();
        state.frames.push(text.to_string());
    }
}

/// In-memory tracked element, compared by id like DOM node identity.
#[derive(Debug, Clone)]
pub struct FakeCard {
    pub id: u32,
    pub styles: Rc<RefCell<HashMap<String, String>>>,
    pub style_writes: Rc<RefCell<usize>>,
    pub counter: Option<FakeCounter>,
}

impl FakeCard {
    pub fn plain(id: u32) -> Self {
        Self {
            id,
            styles: Rc::default(),
            style_writes: Rc::default(),
            counter: None,
        }
    }

    pub fn with_counter(id: u32, text: &str) -> Self {
        Self {
            counter: Some(FakeCounter::with_text(text)),
            ..Self::plain(id)
        }
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub fn style_writes(&self) -> usize {
        *self.style_writes.borrow()
    }
}

impl PartialEq for FakeCard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl RevealSurface for FakeCard {
    type Counter = FakeCounter;

    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
        *self.style_writes.borrow_mut() += 1;
    }

    fn counter(&self) -> Option<FakeCounter> {
        self.counter.clone()
    }
}

/// Collects started runs so a test decides when each tick happens.
#[derive(Default)]
pub struct ManualDriver {
    runs: RefCell<Vec<(AnimationRun, FakeCounter, CancelToken)>>,
}

impl ManualDriver {
    pub fn started(&self) -> usize {
        self.runs.borrow().len()
    }

    /// One tick for every run still going. Returns how many ticked.
    pub fn tick_all(&self) -> usize {
        let mut ticked = 0;
        for (run, counter, token) in self.runs.borrow_mut().iter_mut() {
            if token.is_cancelled() {
                run.abort();
            } else if let Some(frame) = run.tick() {
                counter.set_text(&frame);
                ticked += 1;
            }
        }
        ticked
    }

    pub fn flush(&self) {
        while self.tick_all() > 0 {}
    }

    pub fn all_complete(&self) -> bool {
        self.runs.borrow().iter().all(|(run, _, _)| run.is_complete())
    }
}

impl TickDriver<FakeCounter> for ManualDriver {
    fn drive(&self, run: AnimationRun, counter: FakeCounter, _interval_ms: u32, token: CancelToken) {
        self.runs.borrow_mut().push((run, counter, token));
    }
}

pub fn animator() -> CounterAnimator<ManualDriver> {
    CounterAnimator::new(ManualDriver::default(), 60, 33)
}

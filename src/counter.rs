use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::display_value::DisplayValue;
use crate::surface::{CounterSurface, RevealSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Complete,
}

/// One counter counting from 0 up to its display value in equal increments.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    value: DisplayValue,
    increment: f64,
    current: f64,
    ticks: u32,
    state: RunState,
}

impl AnimationRun {
    pub fn new(value: DisplayValue, steps: u32) -> Self {
        Self {
            value,
            increment: value.magnitude / f64::from(steps.max(1)),
            current: 0.0,
            ticks: 0,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn target(&self) -> f64 {
        self.value.magnitude
    }

    pub fn is_complete(&self) -> bool {
        self.state == RunState::Complete
    }

    /// Moves an idle run to running and returns the text shown before the
    /// first tick.
    pub fn start(&mut self) -> String {
        if self.state == RunState::Idle {
            self.state = RunState::Running;
        }
        "0".to_string()
    }

    /// Advances one step and returns the frame to display, or `None` when the
    /// run is not running.
    pub fn tick(&mut self) -> Option<String> {
        if self.state != RunState::Running {
            return None;
        }

        self.ticks += 1;
        self.current += self.increment;
        if self.current >= self.value.magnitude {
            self.current = self.value.magnitude;
            self.state = RunState::Complete;
        }
        Some(self.value.render(self.current))
    }

    /// Ticks until complete and returns the last frame rendered.
    pub fn fast_forward(&mut self) -> Option<String> {
        let mut last = None;
        while let Some(frame) = self.tick() {
            last = Some(frame);
        }
        last
    }

    pub fn abort(&mut self) {
        self.state = RunState::Complete;
    }
}

/// Shared stop flag for a scheduled run. The page itself never cancels a
/// counter; drivers check it so a harness can.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Schedules the ticks of a started run.
pub trait TickDriver<C: CounterSurface> {
    fn drive(&self, run: AnimationRun, counter: C, interval_ms: u32, token: CancelToken);
}

/// Drives runs with a repeating browser interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalDriver;

impl<C: CounterSurface + 'static> TickDriver<C> for IntervalDriver {
    fn drive(&self, mut run: AnimationRun, counter: C, interval_ms: u32, token: CancelToken) {
        let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let handle_clone = handle.clone();

        let interval = Interval::new(interval_ms, move || {
            if token.is_cancelled() {
                run.abort();
            } else if let Some(frame) = run.tick() {
                counter.set_text(&frame);
            }

            if run.is_complete() {
                // Dropped outside its own callback.
                if let Some(interval) = handle_clone.borrow_mut().take() {
                    spawn_local(async move {
                        drop(interval);
                    });
                }
            }
        });

        *handle.borrow_mut() = Some(interval);
    }
}

#[derive(Debug, Clone)]
pub struct CounterAnimator<D> {
    driver: D,
    steps: u32,
    tick_ms: u32,
}

impl<D> CounterAnimator<D> {
    pub fn new(driver: D, steps: u32, tick_ms: u32) -> Self {
        Self {
            driver,
            steps,
            tick_ms,
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Starts a counter on the numeric child of `element`. Returns `None` when
    /// there is no child, it already ran, or its text holds no number.
    pub fn animate<S>(&self, element: &S) -> Option<CancelToken>
    where
        S: RevealSurface,
        D: TickDriver<S::Counter>,
    {
        let counter = element.counter()?;
        if counter.is_animated() {
            return None;
        }
        counter.mark_animated();

        let text = counter.text();
        let value = DisplayValue::parse(&text)?;

        let mut run = AnimationRun::new(value, self.steps);
        counter.set_text(&run.start());
        log::debug!("Counting up to {:?} from \"{}\"", value.magnitude, text);

        let token = CancelToken::default();
        self.driver.drive(run, counter, self.tick_ms, token.clone());
        Some(token)
    }
}

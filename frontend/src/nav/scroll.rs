use std::cell::Cell;
use std::ops::Deref;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Header treatment derived from the page scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    AtTop,
    Scrolled,
}

impl ScrollState {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::AtTop
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == ScrollState::Scrolled
    }
}

/// Something that reports the page scroll offset and notifies listeners when it changes.
pub trait ScrollSource {
    fn offset(&self) -> f64;

    /// Registers `listener`. It stays attached until the returned subscription is dropped.
    fn subscribe(&self, listener: Rc<dyn Fn(f64)>) -> ScrollSubscription;
}

/// Keeps a scroll listener attached. Dropping it detaches the listener, once.
#[must_use = "the listener is detached as soon as the subscription is dropped"]
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription with nothing to detach, for sources that could not attach.
    pub fn inert() -> Self {
        Self { detach: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Shared handle to a scroll source, cheap to clone and comparable so it can travel in props.
#[derive(Clone)]
pub struct ScrollSignal(Rc<dyn ScrollSource>);

impl ScrollSignal {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn window() -> Self {
        Self::new(WindowScroll)
    }
}

impl PartialEq for ScrollSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ScrollSignal {
    type Target = dyn ScrollSource;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The browser window's vertical scroll position.
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn subscribe(&self, listener: Rc<dyn Fn(f64)>) -> ScrollSubscription {
        let Some(window) = window() else {
            warn!("No window available, scroll listener not attached");
            return ScrollSubscription::inert();
        };

        let reader = window.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            listener(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        if let Err(err) = window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        {
            warn!("Failed to attach scroll listener: {:?}", err);
            return ScrollSubscription::inert();
        }

        // The closure moves into the detach handler so it lives exactly as long as the registration.
        ScrollSubscription::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            ) {
                warn!("Failed to detach scroll listener: {:?}", err);
            }
        })
    }
}

/// Follows `source` and reports the scroll state: once immediately for the current offset,
/// then on every notification that changes it.
pub fn track_scroll(
    source: &dyn ScrollSource,
    threshold: f64,
    on_change: impl Fn(ScrollState) + 'static,
) -> ScrollSubscription {
    let initial = ScrollState::from_offset(source.offset(), threshold);
    on_change(initial);

    let last = Cell::new(initial);
    source.subscribe(Rc::new(move |offset| {
        let next = ScrollState::from_offset(offset, threshold);
        if last.replace(next) != next {
            on_change(next);
        }
    }))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{ScrollSource, ScrollSubscription};

    type Listeners = Rc<RefCell<Vec<(usize, Rc<dyn Fn(f64)>)>>>;

    /// Scroll source driven by hand from tests.
    #[derive(Default)]
    pub struct ManualScroll {
        offset: Cell<f64>,
        next_id: Cell<usize>,
        listeners: Listeners,
    }

    impl ManualScroll {
        pub fn at(offset: f64) -> Self {
            let source = Self::default();
            source.offset.set(offset);
            source
        }

        pub fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            let snapshot: Vec<_> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect();
            for listener in snapshot {
                listener(offset);
            }
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSource for ManualScroll {
        fn offset(&self) -> f64 {
            self.offset.get()
        }

        fn subscribe(&self, listener: Rc<dyn Fn(f64)>) -> ScrollSubscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, listener));

            let listeners = self.listeners.clone();
            ScrollSubscription::new(move || {
                listeners.borrow_mut().retain(|(existing, _)| *existing != id);
            })
        }
    }
}

//! Process-wide `prefers-reduced-motion` signal.
//!
//! The media query is bound when the first subscriber arrives and released
//! when the last one leaves. Without `matchMedia` the signal stays `false`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, MediaQueryListEvent};
use yew::prelude::*;

use super::listener::EventListener;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

thread_local! {
    static SIGNAL: Rc<MotionSignal> = Rc::new(MotionSignal::default());
}

#[derive(Default)]
pub struct MotionSignal {
    reduced: Cell<bool>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Callback<bool>)>>,
    binding: RefCell<Option<EventListener>>,
}

impl MotionSignal {
    pub fn get(&self) -> bool {
        self.reduced.get()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Whether the media query listener is currently attached.
    pub fn is_bound(&self) -> bool {
        self.binding.borrow().is_some()
    }

    fn add(&self, callback: Callback<bool>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, callback));
        id
    }

    /// Returns true once nobody is listening any more.
    fn remove(&self, id: u64) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.is_empty()
    }

    /// Store a new value and notify subscribers if it changed.
    pub fn publish(&self, reduced: bool) {
        if self.reduced.replace(reduced) == reduced {
            return;
        }
        log::debug!("Reduced motion preference is now {}", reduced);
        // Subscribers may unsubscribe while being notified.
        let subscribers: Vec<Callback<bool>> =
            self.subscribers.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for callback in subscribers {
            callback.emit(reduced);
        }
    }

    fn bind(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let query = match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => query,
            Ok(None) => return,
            Err(e) => {
                log::warn!("matchMedia unavailable, assuming motion is fine: {:?}", e);
                return;
            }
        };
        self.reduced.set(query.matches());

        let listener = EventListener::new(query.as_ref(), "change", true, |event: Event| {
            if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                let matches = event.matches();
                SIGNAL.with(|signal| signal.publish(matches));
            }
        });
        match listener {
            Ok(listener) => *self.binding.borrow_mut() = Some(listener),
            Err(e) => log::warn!("Failed to watch reduced motion preference: {}", e),
        }
    }

    fn unbind(&self) {
        self.binding.borrow_mut().take();
    }
}

/// Keeps a subscriber registered until dropped.
pub struct MotionSubscription {
    id: u64,
}

impl Drop for MotionSubscription {
    fn drop(&mut self) {
        SIGNAL.with(|signal| {
            if signal.remove(self.id) {
                signal.unbind();
            }
        });
    }
}

/// Current preference plus a handle that keeps `callback` subscribed.
pub fn subscribe(callback: Callback<bool>) -> (bool, MotionSubscription) {
    SIGNAL.with(|signal| {
        if signal.subscriber_count() == 0 {
            signal.bind();
        }
        let id = signal.add(callback);
        (signal.get(), MotionSubscription { id })
    })
}

pub fn prefers_reduced_motion() -> bool {
    SIGNAL.with(|signal| signal.get())
}

pub fn subscriber_count() -> usize {
    SIGNAL.with(|signal| signal.subscriber_count())
}

pub fn is_bound() -> bool {
    SIGNAL.with(|signal| signal.is_bound())
}

#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(prefers_reduced_motion);
    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let (initial, subscription) = subscribe({
                    let reduced = reduced.clone();
                    Callback::from(move |value: bool| reduced.set(value))
                });
                reduced.set(initial);
                move || drop(subscription)
            },
            (),
        );
    }
    *reduced
}

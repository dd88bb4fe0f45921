//! Binds a [`ScrollController`] to the page: window input listeners feed the
//! arbiters, accepted navigations get a completion timer, a history write and
//! a focus move, and `hashchange` drives deep-link jumps.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, FocusOptions, HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent,
    TouchEvent, WheelEvent,
};
use yew::prelude::*;

use super::listener::EventListener;
use super::use_reduced_motion::use_reduced_motion;
use super::use_scroll_lock::use_scroll_lock;
use crate::config::ScrollConfig;
use crate::error::DomError;
use crate::scroll::fragment;
use crate::scroll::keyboard;
use crate::scroll::touch::TouchArbiter;
use crate::scroll::wheel::WheelArbiter;
use crate::scroll::{
    ArbiterOutcome, Completion, HistoryMode, Intent, Navigation, NavigationSource,
    NavigationState, ScrollController,
};

/// A navigation request sent through [`FullPageScrollHandle::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    pub intent: Intent,
    pub source: NavigationSource,
    /// Skip the animated transition. Only meaningful for `Intent::GoTo`.
    pub immediate: bool,
}

impl NavRequest {
    pub fn new(intent: Intent, source: NavigationSource) -> Self {
        Self {
            intent,
            source,
            immediate: false,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct FullPageScrollOptions {
    pub config: ScrollConfig,
    pub on_section_change: Option<Callback<usize>>,
}

#[derive(Clone, PartialEq)]
pub struct FullPageScrollHandle {
    pub state: NavigationState,
    pub total_sections: usize,
    pub reduced_motion: bool,
    /// Transition length the shell should animate with; zero under reduced motion.
    pub transition_duration_ms: u32,
    pub navigate: Callback<NavRequest>,
    pub register: Callback<(AttrValue, usize)>,
}

fn current_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

fn write_fragment(fragment: &str, mode: HistoryMode) -> Result<(), DomError> {
    if mode == HistoryMode::Skip {
        return Ok(());
    }
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let current = window.location().hash()?;
    if !fragment::needs_write(&current, fragment) {
        return Ok(());
    }
    let history = window.history()?;
    let url = format!("#{}", fragment);
    match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&url))?,
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&url))?,
        HistoryMode::Skip => {}
    }
    Ok(())
}

fn focus_section(index: usize) -> Result<(), DomError> {
    let document = web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)?;
    let selector = format!("[data-section-index=\"{}\"]", index);
    if let Some(element) = document.query_selector(&selector)? {
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            let options = FocusOptions::new();
            options.set_prevent_scroll(true);
            element.focus_with_options(&options)?;
        }
    }
    Ok(())
}

fn is_text_field(event: &Event) -> bool {
    event
        .target()
        .map(|target| {
            target.dyn_ref::<HtmlInputElement>().is_some()
                || target.dyn_ref::<HtmlTextAreaElement>().is_some()
        })
        .unwrap_or(false)
}

/// The registry starts empty; panels fill it from their mount effects.
fn build_controller(config: &ScrollConfig) -> ScrollController {
    if let Err(e) = config.validate() {
        log::warn!("Full-page scroll config: {}", e);
    }
    ScrollController::new(
        config.total_sections,
        config.transition_duration_ms,
        config.initial_section,
    )
    .with_hash_format(config.hash_format)
}

/// Everything the listeners and timers need, shared behind one `Rc`.
struct Dispatcher {
    controller: Rc<RefCell<ScrollController>>,
    snapshot: UseStateHandle<NavigationState>,
    // The timer that last fired stays here until replaced; dropping it inside
    // its own callback would free the closure that is running.
    timer: Rc<RefCell<Option<Timeout>>>,
    on_section_change: Rc<RefCell<Option<Callback<usize>>>>,
    unresolved_hash: RefCell<Option<String>>,
}

impl Dispatcher {
    fn is_idle(&self) -> bool {
        self.controller.borrow().is_idle()
    }

    fn request(&self, request: NavRequest) {
        let navigation = {
            let mut controller = self.controller.borrow_mut();
            match request.intent {
                Intent::GoTo(index) => {
                    controller.go_to_section(index, request.immediate, request.source)
                }
                intent => controller.apply(intent, request.source),
            }
        };
        self.perform(navigation);
    }

    fn handle(&self, outcome: ArbiterOutcome, event: &Event, source: NavigationSource) {
        if outcome.suppress {
            event.prevent_default();
        }
        if let Some(intent) = outcome.intent {
            self.request(NavRequest::new(intent, source));
        }
    }

    fn perform(&self, navigation: Option<Navigation>) {
        let Some(navigation) = navigation else {
            return;
        };
        self.snapshot.set(self.controller.borrow().state());

        if let Err(e) = write_fragment(&navigation.fragment, navigation.history) {
            log::warn!("Failed to update URL fragment: {}", e);
        }

        match navigation.completion {
            Completion::Scheduled { token, after_ms } => {
                let controller = self.controller.clone();
                let snapshot = self.snapshot.clone();
                let timeout = Timeout::new(after_ms, move || {
                    let settled = controller.borrow_mut().complete_transition(token);
                    if let Some(index) = settled {
                        snapshot.set(controller.borrow().state());
                        if let Err(e) = focus_section(index) {
                            log::warn!("Failed to focus section {}: {}", index, e);
                        }
                    }
                });
                // Replacing the old Timeout cancels it.
                *self.timer.borrow_mut() = Some(timeout);
            }
            Completion::Immediate => {
                self.timer.borrow_mut().take();
                if let Err(e) = focus_section(navigation.to) {
                    log::warn!("Failed to focus section {}: {}", navigation.to, e);
                }
            }
        }

        let on_section_change = self.on_section_change.borrow().clone();
        if let Some(callback) = on_section_change {
            callback.emit(navigation.to);
        }
    }

    fn sync_hash(&self, hash: &str) {
        let resolved = self.controller.borrow().resolve_hash(hash);
        if resolved.is_none() {
            if !fragment::strip_hash(hash).is_empty() {
                *self.unresolved_hash.borrow_mut() = Some(hash.to_string());
            }
            return;
        }
        self.unresolved_hash.borrow_mut().take();
        let navigation = self.controller.borrow_mut().sync_from_hash(hash);
        self.perform(navigation);
    }

    fn register(&self, id: &str, index: usize) {
        if let Err(e) = self.controller.borrow_mut().register_section(id, index) {
            log::warn!("Section registration: {}", e);
            return;
        }
        // A deep link that arrived before its panel registered.
        let pending = self.unresolved_hash.borrow().clone();
        if let Some(hash) = pending {
            if self.controller.borrow().resolve_hash(&hash).is_some() {
                self.sync_hash(&hash);
            }
        }
    }

    fn teardown(&self) {
        self.timer.borrow_mut().take();
        self.controller.borrow_mut().cancel_pending();
    }
}

fn attach_listeners(dispatcher: &Rc<Dispatcher>, config: &ScrollConfig) -> Vec<EventListener> {
    let wheel = Rc::new(RefCell::new(WheelArbiter::new(
        config.wheel_threshold,
        config.wheel_cooldown_ms,
    )));
    let touch = Rc::new(RefCell::new(TouchArbiter::new(
        config.touch_threshold,
        config.touch_max_duration_ms,
    )));

    let mut listeners = Vec::new();
    let mut attach = |event: &'static str, passive: bool, handler: Box<dyn FnMut(Event)>| {
        match EventListener::on_window(event, passive, handler) {
            Ok(listener) => listeners.push(listener),
            Err(e) => log::warn!("Failed to listen for {}: {}", event, e),
        }
    };

    attach("wheel", false, {
        let dispatcher = dispatcher.clone();
        let wheel = wheel.clone();
        Box::new(move |event: Event| {
            let Some(wheel_event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let (enabled, cooldown) = {
                let controller = dispatcher.controller.borrow();
                (controller.is_idle(), controller.wheel_cooldown_ms())
            };
            let outcome = {
                let mut wheel = wheel.borrow_mut();
                wheel.set_cooldown_ms(cooldown as f64);
                wheel.ingest(wheel_event.delta_y(), js_sys::Date::now(), enabled)
            };
            dispatcher.handle(outcome, &event, NavigationSource::Wheel);
        })
    });

    attach("touchstart", true, {
        let dispatcher = dispatcher.clone();
        let touch = touch.clone();
        Box::new(move |event: Event| {
            let Some(y) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| e.touches().get(0))
                .map(|t| t.client_y() as f64)
            else {
                return;
            };
            touch
                .borrow_mut()
                .start(y, js_sys::Date::now(), dispatcher.is_idle());
        })
    });

    attach("touchmove", false, {
        let dispatcher = dispatcher.clone();
        let touch = touch.clone();
        Box::new(move |event: Event| {
            let Some(y) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| e.touches().get(0))
                .map(|t| t.client_y() as f64)
            else {
                return;
            };
            let enabled = dispatcher.is_idle();
            let outcome = touch.borrow_mut().moved(y, js_sys::Date::now(), enabled);
            dispatcher.handle(outcome, &event, NavigationSource::Touch);
        })
    });

    attach("touchend", true, {
        let touch = touch.clone();
        Box::new(move |_: Event| touch.borrow_mut().end())
    });

    attach("keydown", false, {
        let dispatcher = dispatcher.clone();
        Box::new(move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let outcome = keyboard::ingest(
                &key_event.key(),
                is_text_field(&event),
                dispatcher.is_idle(),
            );
            dispatcher.handle(outcome, &event, NavigationSource::Keyboard);
        })
    });

    attach("hashchange", true, {
        let dispatcher = dispatcher.clone();
        Box::new(move |_: Event| {
            if let Some(hash) = current_hash() {
                dispatcher.sync_hash(&hash);
            }
        })
    });

    listeners
}

#[hook]
pub fn use_full_page_scroll(options: FullPageScrollOptions) -> FullPageScrollHandle {
    let reduced_motion = use_reduced_motion();
    use_scroll_lock(true);

    let controller = {
        let config = options.config.clone();
        use_mut_ref(move || build_controller(&config))
    };
    let snapshot = {
        let controller = controller.clone();
        use_state(move || controller.borrow().state())
    };
    let timer = use_mut_ref(|| None::<Timeout>);
    let on_section_change = use_mut_ref(|| None::<Callback<usize>>);
    *on_section_change.borrow_mut() = options.on_section_change.clone();

    // Read by the controller at navigation time, so a preference change
    // applies to the next navigation without re-binding anything.
    controller.borrow_mut().set_reduced_motion(reduced_motion);

    let dispatcher = {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        let timer = timer.clone();
        let on_section_change = on_section_change.clone();
        use_memo(
            move |_| Dispatcher {
                controller,
                snapshot,
                timer,
                on_section_change,
                unresolved_hash: RefCell::new(None),
            },
            (),
        )
    };

    {
        let dispatcher = dispatcher.clone();
        let config = options.config.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = attach_listeners(&dispatcher, &config);
                if let Some(hash) = current_hash() {
                    dispatcher.sync_hash(&hash);
                }
                move || {
                    drop(listeners);
                    dispatcher.teardown();
                }
            },
            (),
        );
    }

    let navigate = {
        let dispatcher = dispatcher.clone();
        use_memo(
            move |_| Callback::from(move |request: NavRequest| dispatcher.request(request)),
            (),
        )
    };
    let register = {
        let dispatcher = dispatcher.clone();
        use_memo(
            move |_| {
                Callback::from(move |(id, index): (AttrValue, usize)| {
                    dispatcher.register(&id, index)
                })
            },
            (),
        )
    };

    let controller = controller.borrow();
    FullPageScrollHandle {
        state: *snapshot,
        total_sections: controller.total_sections(),
        reduced_motion,
        transition_duration_ms: controller.effective_duration_ms(),
        navigate: (*navigate).clone(),
        register: (*register).clone(),
    }
}

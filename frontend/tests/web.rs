#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use neural_landing::components::full_page_scroll::{FullPageScrollProps, Panel};
use neural_landing::components::FullPageScroll;
use neural_landing::hooks::listener::EventListener;
use neural_landing::hooks::use_reduced_motion::{
    is_bound, prefers_reduced_motion, subscribe, subscriber_count,
};
use neural_landing::hooks::use_scroll_lock::ScrollLock;
use neural_landing::scroll::HashFormat;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit, Window};
use yew::{html, AppHandle, Callback, Renderer};

wasm_bindgen_test_configure!(run_in_browser);

fn body_style() -> web_sys::CssStyleDeclaration {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .expect("test page has a body")
        .style()
}

#[wasm_bindgen_test]
fn scroll_lock_restores_previous_body_styles() {
    let style = body_style();
    style.set_property("overflow", "auto").unwrap();
    style.remove_property("padding-right").unwrap();

    let lock = ScrollLock::acquire().unwrap();
    assert_eq!(style.get_property_value("overflow").unwrap(), "hidden");
    assert!(style.get_property_value("padding-right").unwrap().ends_with("px"));

    drop(lock);
    assert_eq!(style.get_property_value("overflow").unwrap(), "auto");
    assert_eq!(style.get_property_value("padding-right").unwrap(), "");
    style.remove_property("overflow").unwrap();
}

#[wasm_bindgen_test]
fn dropped_listener_stops_receiving() {
    let window = web_sys::window().unwrap();
    let hits = Rc::new(Cell::new(0));
    let listener = EventListener::on_window("neural-test", true, {
        let hits = hits.clone();
        move |_| hits.set(hits.get() + 1)
    })
    .unwrap();

    window.dispatch_event(&Event::new("neural-test").unwrap()).unwrap();
    drop(listener);
    window.dispatch_event(&Event::new("neural-test").unwrap()).unwrap();

    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn reduced_motion_binding_follows_subscribers() {
    let before = subscriber_count();

    let (initial, first) = subscribe(Callback::from(|_: bool| ()));
    assert_eq!(initial, prefers_reduced_motion());
    assert_eq!(subscriber_count(), before + 1);
    assert!(is_bound());

    let (_, second) = subscribe(Callback::from(|_: bool| ()));
    assert_eq!(subscriber_count(), before + 2);

    drop(first);
    assert_eq!(subscriber_count(), before + 1);
    assert!(is_bound());

    drop(second);
    assert_eq!(subscriber_count(), before);
    if before == 0 {
        assert!(!is_bound());
    }
}

const DURATION_MS: u32 = 300;
const SECTION_IDS: [&str; 5] = ["hero", "features", "stats", "pricing", "cta"];

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn hash() -> String {
    window().location().hash().unwrap()
}

fn history_length() -> u32 {
    window().history().unwrap().length().unwrap()
}

/// Rewrite the fragment without firing `hashchange`.
fn set_hash_silently(fragment: &str) {
    let location = window().location();
    let url = format!(
        "{}{}{}",
        location.pathname().unwrap(),
        location.search().unwrap(),
        fragment
    );
    window()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .unwrap();
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    window().dispatch_event(&event).unwrap();
}

fn section(index: usize) -> Element {
    document()
        .query_selector(&format!("[data-section-index=\"{}\"]", index))
        .unwrap()
        .expect("section is rendered")
}

fn is_shown(index: usize) -> bool {
    section(index).get_attribute("aria-hidden").as_deref() == Some("false")
}

fn track_transition() -> String {
    document()
        .query_selector(".full-page-track")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("transition")
        .unwrap()
}

fn click_dot(index: u32) {
    document()
        .query_selector_all(".section-dot")
        .unwrap()
        .item(index)
        .expect("dot is rendered")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn focused_index() -> Option<String> {
    document()
        .active_element()
        .and_then(|element| element.get_attribute("data-section-index"))
}

struct Mounted {
    app: AppHandle<FullPageScroll>,
    root: Element,
    changes: Rc<RefCell<Vec<usize>>>,
}

impl Mounted {
    async fn new() -> Self {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();

        let changes = Rc::new(RefCell::new(Vec::new()));
        let on_section_change = {
            let changes = changes.clone();
            Callback::from(move |index: usize| changes.borrow_mut().push(index))
        };
        let props = FullPageScrollProps {
            panels: SECTION_IDS
                .iter()
                .map(|id| Panel::new(*id, *id, html! { <p>{*id}</p> }))
                .collect(),
            transition_duration_ms: DURATION_MS,
            initial_section: 0,
            hash_format: HashFormat::Identifier,
            on_section_change: Some(on_section_change),
            show_navigation: true,
        };
        let app = Renderer::<FullPageScroll>::with_root_and_props(root.clone(), props).render();
        settle().await;
        Self { app, root, changes }
    }

    fn changes(&self) -> Vec<usize> {
        self.changes.borrow().clone()
    }

    async fn unmount(self) {
        self.app.destroy();
        settle().await;
        self.root.remove();
    }
}

/// Let Yew re-render and queued browser events run.
async fn settle() {
    TimeoutFuture::new(20).await;
}

async fn after_transition() {
    TimeoutFuture::new(DURATION_MS + 100).await;
}

#[wasm_bindgen_test]
async fn keyboard_navigation_replaces_history_and_focuses_on_completion() {
    set_hash_silently("");
    let page = Mounted::new().await;
    let reduced = prefers_reduced_motion();
    let length = history_length();

    press("ArrowDown");
    if !reduced {
        // Dropped while the first transition is in flight.
        press("ArrowDown");
    }
    settle().await;

    assert!(is_shown(1));
    assert!(!is_shown(2));
    assert_eq!(hash(), "#features");
    assert_eq!(history_length(), length);
    if !reduced {
        assert_ne!(track_transition(), "none");
    }

    after_transition().await;
    assert_eq!(track_transition(), "none");
    assert_eq!(focused_index().as_deref(), Some("1"));
    assert_eq!(page.changes(), vec![1]);

    // The completed timer no longer blocks input.
    press("ArrowDown");
    settle().await;
    assert!(is_shown(2));
    assert_eq!(hash(), "#stats");
    after_transition().await;
    assert_eq!(focused_index().as_deref(), Some("2"));
    assert_eq!(page.changes(), vec![1, 2]);

    page.unmount().await;
    set_hash_silently("");
}

#[wasm_bindgen_test]
async fn indicator_pushes_history_and_keys_replace_it() {
    set_hash_silently("");
    let page = Mounted::new().await;
    let length = history_length();

    click_dot(2);
    settle().await;
    assert!(is_shown(2));
    assert_eq!(hash(), "#stats");
    assert_eq!(history_length(), length + 1);

    after_transition().await;
    press("Home");
    settle().await;
    assert!(is_shown(0));
    assert_eq!(hash(), "#hero");
    assert_eq!(history_length(), length + 1);
    assert_eq!(page.changes(), vec![2, 0]);

    after_transition().await;
    page.unmount().await;
    set_hash_silently("");
}

#[wasm_bindgen_test]
async fn matching_fragment_adds_no_history_entry() {
    set_hash_silently("");
    let page = Mounted::new().await;

    set_hash_silently("#stats");
    let length = history_length();
    click_dot(2);
    settle().await;

    assert!(is_shown(2));
    assert_eq!(hash(), "#stats");
    assert_eq!(history_length(), length);

    after_transition().await;
    page.unmount().await;
    set_hash_silently("");
}

#[wasm_bindgen_test]
async fn hashchange_jumps_without_animation() {
    set_hash_silently("");
    let page = Mounted::new().await;

    window().location().set_hash("pricing").unwrap();
    settle().await;

    assert!(is_shown(3));
    assert_eq!(track_transition(), "none");
    assert_eq!(focused_index().as_deref(), Some("3"));
    assert_eq!(page.changes(), vec![3]);

    // Unknown fragments leave the position alone.
    window().location().set_hash("nowhere").unwrap();
    settle().await;
    assert!(is_shown(3));
    assert_eq!(page.changes(), vec![3]);

    page.unmount().await;
    set_hash_silently("");
}

#[wasm_bindgen_test]
async fn deep_link_resolves_once_panels_register() {
    set_hash_silently("#cta");
    let page = Mounted::new().await;

    assert!(is_shown(4));
    assert_eq!(track_transition(), "none");
    assert_eq!(hash(), "#cta");
    assert_eq!(page.changes(), vec![4]);

    page.unmount().await;
    set_hash_silently("");
}

#[wasm_bindgen_test]
async fn unmount_mid_transition_restores_body() {
    set_hash_silently("");
    let style = body_style();
    style.set_property("overflow", "auto").unwrap();
    style.remove_property("padding-right").unwrap();

    let page = Mounted::new().await;
    assert_eq!(style.get_property_value("overflow").unwrap(), "hidden");

    press("ArrowDown");
    let changes = page.changes.clone();
    page.unmount().await;

    assert_eq!(style.get_property_value("overflow").unwrap(), "auto");
    assert_eq!(style.get_property_value("padding-right").unwrap(), "");

    // Waiting out the cancelled transition changes nothing.
    after_transition().await;
    assert_eq!(*changes.borrow(), vec![1]);
    assert!(document().query_selector(".full-page-track").unwrap().is_none());

    style.remove_property("overflow").unwrap();
    set_hash_silently("");
}

use yew::prelude::*;

use super::listener::EventListener;

fn inner_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// `window.innerHeight` in px, refreshed on resize. Zero when unknown.
///
/// Mobile browsers size `100vh` to the largest viewport, so panels are offset
/// by the measured height instead.
#[hook]
pub fn use_viewport_height() -> f64 {
    let height = use_state(|| 0.0);
    {
        let height = height.clone();
        use_effect_with_deps(
            move |_| {
                height.set(inner_height());
                let listener = EventListener::on_window("resize", true, {
                    let height = height.clone();
                    move |_| height.set(inner_height())
                })
                .map_err(|e| log::warn!("Resize tracking unavailable: {}", e))
                .ok();
                move || drop(listener)
            },
            (),
        );
    }
    *height
}

use web_sys::{CssStyleDeclaration, HtmlElement};
use yew::prelude::*;

use crate::error::DomError;

/// Padding that keeps the layout from shifting when the scrollbar goes away.
pub fn scrollbar_compensation(inner_width: f64, client_width: f64) -> f64 {
    (inner_width - client_width).max(0.0)
}

fn restore(style: &CssStyleDeclaration, property: &str, previous: &str) -> Result<(), DomError> {
    if previous.is_empty() {
        style.remove_property(property)?;
    } else {
        style.set_property(property, previous)?;
    }
    Ok(())
}

/// Native document scrolling stays off while this is alive. Dropping it puts
/// back whatever the body had before.
pub struct ScrollLock {
    body: HtmlElement,
    previous_overflow: String,
    previous_padding_right: String,
}

impl ScrollLock {
    pub fn acquire() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let body = document.body().ok_or(DomError::NoBody)?;
        let style = body.style();

        let previous_overflow = style.get_property_value("overflow")?;
        let previous_padding_right = style.get_property_value("padding-right")?;

        // Measure before hiding overflow, the scrollbar is gone afterwards.
        let inner_width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let client_width = document
            .document_element()
            .map(|root| root.client_width() as f64)
            .unwrap_or(inner_width);
        let padding = scrollbar_compensation(inner_width, client_width);

        style.set_property("overflow", "hidden")?;
        style.set_property("padding-right", &format!("{}px", padding))?;

        log::debug!("Scroll lock acquired, compensating {}px", padding);
        Ok(Self {
            body,
            previous_overflow,
            previous_padding_right,
        })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let restored = restore(&style, "overflow", &self.previous_overflow)
            .and_then(|_| restore(&style, "padding-right", &self.previous_padding_right));
        if let Err(e) = restored {
            log::warn!("Failed to restore body scroll: {}", e);
        }
    }
}

#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            let lock = if *locked {
                ScrollLock::acquire()
                    .map_err(|e| log::warn!("Scroll lock unavailable: {}", e))
                    .ok()
            } else {
                None
            };
            move || drop(lock)
        },
        locked,
    );
}

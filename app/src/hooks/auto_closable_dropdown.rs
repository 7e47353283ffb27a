//! Dropdown visibility that closes itself on outside clicks and `Escape`.

use leptos::{ev, html, prelude::*, wasm_bindgen::JsCast};

use crate::components::dropdown::{self, DropdownItem};

#[derive(Debug, Clone, Copy)]
pub struct AutoClosableDropdown {
    items: Signal<Vec<DropdownItem>>,
    visible: RwSignal<bool>,
}

impl AutoClosableDropdown {
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    pub fn show_dropdown(&self, show: bool) {
        self.visible.set(show);
    }

    pub fn render_dropdown(&self) -> impl IntoView + use<> {
        dropdown::component(self.items, self.visible.into())
    }
}

/// Whether a document click should close an open dropdown.
#[must_use]
pub const fn closes_on_click(visible: bool, inside_anchor: bool) -> bool {
    visible && !inside_anchor
}

#[must_use]
pub fn closes_on_key(visible: bool, key: &str) -> bool {
    visible && key == "Escape"
}

/// Dropdown state anchored to the button in `anchor`.
///
/// Clicks on the anchor itself are left to the button's own handler so that
/// it can toggle visibility.
pub fn use_auto_closable_dropdown(
    items: Signal<Vec<DropdownItem>>,
    anchor: NodeRef<html::Button>,
) -> AutoClosableDropdown {
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        let on_click = window_event_listener(ev::click, move |event| {
            let inside_anchor = match (anchor.get_untracked(), event.target()) {
                (Some(button), Some(target)) => button.contains(target.dyn_ref::<web_sys::Node>()),
                _ => false,
            };
            if closes_on_click(visible.get_untracked(), inside_anchor) {
                visible.set(false);
            }
        });
        let on_key = window_event_listener(ev::keydown, move |event| {
            if closes_on_key(visible.get_untracked(), &event.key()) {
                visible.set(false);
            }
        });
        on_cleanup(move || {
            on_click.remove();
            on_key.remove();
        });
    });

    AutoClosableDropdown { items, visible }
}

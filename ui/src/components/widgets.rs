//! Small presentational primitives shared by the storefront views.
//!
//! Overlays (dialog, tooltip) are driven through a handle so a view only
//! needs `show`/`hide` and the content it wants rendered.

use dioxus::prelude::*;

/// Open/closed state of a [`Dialog`].
#[derive(Clone, Copy, PartialEq)]
pub struct DialogHandle {
    open: Signal<bool>,
}

impl DialogHandle {
    pub fn show(&mut self) {
        self.open.set(true);
    }

    pub fn hide(&mut self) {
        self.open.set(false);
    }

    pub fn is_open(&self) -> bool {
        *self.open.read()
    }
}

pub fn use_dialog() -> DialogHandle {
    DialogHandle {
        open: use_signal(|| false),
    }
}

/// Modal dialog; clicking the backdrop or the close button hides it.
#[component]
pub fn Dialog(handle: DialogHandle, title: String, children: Element) -> Element {
    if !handle.is_open() {
        return rsx! {};
    }
    let mut backdrop = handle;
    let mut close = handle;

    rsx! {
        div { class: "dialog-overlay",
            onclick: move |_| backdrop.hide(),
            div { class: "dialog-content",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "dialog-header",
                    h2 { class: "dialog-title", "{title}" }
                    button {
                        class: "dialog-close",
                        r#type: "button",
                        onclick: move |_| close.hide(),
                        "×"
                    }
                }
                div { class: "dialog-description", {children} }
            }
        }
    }
}

/// Shows `text` in a floating bubble while the pointer is over the children.
#[component]
pub fn Tooltip(text: String, children: Element) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        span { class: "tooltip",
            onmouseenter: move |_| visible.set(true),
            onmouseleave: move |_| visible.set(false),
            {children}
            if visible() {
                span { class: "tooltip-content", role: "tooltip", "{text}" }
            }
        }
    }
}

/// Read-only star rating, rounded to the nearest whole star.
#[component]
pub fn Rating(value: f64, #[props(default = 5)] max: u8) -> Element {
    let filled = value.round().clamp(0.0, max as f64) as u8;

    rsx! {
        span { class: "rating",
            title: "{value}",
            for i in 0..max {
                span {
                    class: if i < filled { "star star-filled" } else { "star" },
                    if i < filled { "★" } else { "☆" }
                }
            }
        }
    }
}

#[component]
pub fn Separator(#[props(default)] vertical: bool) -> Element {
    rsx! {
        div { class: if vertical { "separator separator-vertical" } else { "separator" } }
    }
}

/// Horizontally scrollable strip.
#[component]
pub fn ScrollArea(children: Element) -> Element {
    rsx! {
        div { class: "scroll-area scroll-area-horizontal", {children} }
    }
}

//! Viewport switcher for responsive testing

use dioxus::prelude::*;

/// Breakpoint definition
#[derive(Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub width: u32, // 0 = full width
}

impl Breakpoint {
    pub const fn new(name: &'static str, width: u32) -> Self {
        Self { name, width }
    }
}

/// Default breakpoints. "Narrow" sits just under the 576px point where the
/// card's action buttons stack.
pub const DEFAULT_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new("Mobile", 375),
    Breakpoint::new("Narrow", 560),
    Breakpoint::new("Tablet", 768),
    Breakpoint::new("Full", 0),
];

/// Viewport container with a breakpoint switcher above it
#[component]
pub fn MockViewport(breakpoints: Vec<Breakpoint>, children: Element) -> Element {
    let mut selected = use_signal(|| 0usize);
    let width = breakpoints
        .get(selected())
        .map(|b| b.width)
        .unwrap_or_default();

    // Width 0 (Full) expands; otherwise pin the frame to the breakpoint
    let style = if width > 0 {
        format!("width: {}px; margin: 0 auto;", width)
    } else {
        String::new()
    };

    rsx! {
        div { class: "flex gap-2 mb-4",
            for (index , breakpoint) in breakpoints.iter().enumerate() {
                button {
                    class: if selected() == index { "px-2 py-1 text-xs rounded bg-indigo-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: move |_| selected.set(index),
                    if breakpoint.width > 0 {
                        "{breakpoint.name} ({breakpoint.width}px)"
                    } else {
                        "{breakpoint.name}"
                    }
                }
            }
        }
        div { class: "rounded-lg overflow-hidden bg-gray-100 p-4", style, {children} }
    }
}

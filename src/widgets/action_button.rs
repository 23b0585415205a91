use dioxus::prelude::*;

use crate::theme::AppColors;

/// Shared filled button; label comes in as children.
#[component]
pub fn ActionButton(is_dark: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let primary = AppColors::primary(is_dark);
    rsx! {
        button {
            onclick: move |ev| onclick.call(ev),
            style: "padding: 8px 24px; border-radius: 8px; background: {primary}; color: #33251B; font-weight: 600; border: none; cursor: pointer;",
            {children}
        }
    }
}

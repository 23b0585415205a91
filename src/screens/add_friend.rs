use dioxus::prelude::*;

use crate::models::{Friend, DEFAULT_AVATAR_URL};
use crate::theme::AppColors;
use crate::widgets::GradientCard;

#[component]
pub fn AddFriendForm(is_dark: bool, on_add: EventHandler<Friend>) -> Element {
    let mut name = use_signal(String::new);
    let mut image = use_signal(|| DEFAULT_AVATAR_URL.to_string());

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);

    rsx! {
        GradientCard { is_dark,
            form {
                onsubmit: move |ev| {
                    ev.prevent_default();
                    // Empty name or image: ignore the submit, form stays as-is.
                    let friend = match Friend::create(&name(), &image()) {
                        Some(f) => f,
                        None => return,
                    };
                    on_add.call(friend);
                    name.set(String::new());
                    image.set(DEFAULT_AVATAR_URL.to_string());
                },
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "👯 Friend name" }
                    input {
                        r#type: "text",
                        value: "{name()}",
                        oninput: move |ev| name.set(ev.value().clone()),
                        style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #B8A890; background: transparent; color: {on_surface}; box-sizing: border-box;",
                    }
                }
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "📸 Image URL" }
                    input {
                        r#type: "text",
                        value: "{image()}",
                        oninput: move |ev| image.set(ev.value().clone()),
                        style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #B8A890; background: transparent; color: {on_surface}; box-sizing: border-box;",
                    }
                }
                button {
                    r#type: "submit",
                    style: "padding: 8px 24px; border-radius: 8px; background: {primary}; color: #33251B; font-weight: 600; border: none; cursor: pointer;",
                    "Add"
                }
            }
        }
    }
}

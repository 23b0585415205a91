use dioxus::prelude::*;

use crate::models::Friend;
use crate::theme::AppColors;
use crate::widgets::GradientCard;

/// Input collection for splitting a bill with the selected friend.
/// The friend's share is not computed yet; the field stays disabled and the
/// submit is a no-op.
#[component]
pub fn SplitBillForm(is_dark: bool, friend: Friend) -> Element {
    let mut bill = use_signal(String::new);
    let mut user_expense = use_signal(String::new);
    let mut payer = use_signal(|| "user".to_string());

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);

    rsx! {
        GradientCard { is_dark,
            form {
                // TODO: apply the split to the friend's balance on submit
                onsubmit: move |ev| { ev.prevent_default(); },
                h2 { style: "margin: 0 0 16px; color: {on_surface};", "Split a bill with {friend.name}" }
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "💵 Bill value" }
                    input {
                        r#type: "text",
                        value: "{bill()}",
                        oninput: move |ev| bill.set(ev.value().clone()),
                        style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #B8A890; background: transparent; color: {on_surface}; box-sizing: border-box;",
                    }
                }
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "🧑 Your expense" }
                    input {
                        r#type: "text",
                        value: "{user_expense()}",
                        oninput: move |ev| user_expense.set(ev.value().clone()),
                        style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #B8A890; background: transparent; color: {on_surface}; box-sizing: border-box;",
                    }
                }
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "🥲 {friend.name}'s expense" }
                    input {
                        r#type: "text",
                        disabled: true,
                        value: "",
                        style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #B8A890; background: transparent; color: {on_surface}; box-sizing: border-box; opacity: 0.6;",
                    }
                }
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "🤑 Who is paying the bill" }
                    select {
                        value: "{payer()}",
                        onchange: move |ev| payer.set(ev.value().clone()),
                        style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #B8A890; background: transparent; color: {on_surface}; box-sizing: border-box;",
                        option { value: "user", "You" }
                        option { value: "friend", "{friend.name}" }
                    }
                }
                button {
                    r#type: "submit",
                    style: "padding: 8px 24px; border-radius: 8px; background: {primary}; color: #33251B; font-weight: 600; border: none; cursor: pointer;",
                    "Split bill"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::models::{Friend, FriendId};
use crate::theme::AppColors;
use crate::widgets::{ActionButton, GradientCard};

fn balance_color(balance: i64, is_dark: bool) -> &'static str {
    if balance < 0 {
        AppColors::error(is_dark)
    } else if balance > 0 {
        AppColors::success(is_dark)
    } else {
        AppColors::on_surface(is_dark)
    }
}

/// Pure projection of the roster plus the current selection into rows.
#[component]
pub fn FriendsList(
    is_dark: bool,
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    on_select: EventHandler<FriendId>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);

    rsx! {
        if friends.is_empty() {
            GradientCard { is_dark,
                p { style: "color: {on_surface}; opacity: 0.8;", "No friends yet. Add one below." }
            }
        } else {
            ul { style: "list-style: none; padding: 0; margin: 0;",
                for friend in friends.iter() {
                    FriendRow {
                        key: "{friend.id}",
                        is_dark,
                        friend: friend.clone(),
                        selected: selected.as_ref() == Some(&friend.id),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
pub fn FriendRow(
    is_dark: bool,
    friend: Friend,
    selected: bool,
    on_select: EventHandler<FriendId>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let message_color = balance_color(friend.balance, is_dark);
    let highlight = if selected {
        if is_dark { "rgba(255,169,77,0.18)" } else { "#FFE8CC" }
    } else {
        "transparent"
    };
    let id = friend.id.clone();

    rsx! {
        li {
            style: "display: flex; align-items: center; gap: 12px; padding: 12px; border-radius: 8px; background: {highlight};",
            img {
                src: "{friend.image}",
                alt: "{friend.name}",
                style: "width: 48px; height: 48px; border-radius: 50%;",
            }
            div { style: "flex: 1;",
                h3 { style: "margin: 0 0 4px; color: {on_surface};", "{friend.name}" }
                p { style: "margin: 0; color: {message_color}; font-size: 0.9rem;",
                    "{friend.balance_message()}"
                }
            }
            ActionButton {
                is_dark,
                onclick: move |_| on_select.call(id.clone()),
                if selected { "Close" } else { "Select" }
            }
        }
    }
}

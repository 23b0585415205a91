use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::demo;
use crate::models::{Friend, FriendId};
use crate::screens::{AddFriendForm, FriendsList, SplitBillForm};
use crate::state::AppState;
use crate::theme::AppColors;
use crate::widgets::{ActionButton, GradientBackground};

/// Root view. Owns the app state; children only see clones and report back
/// through callbacks.
#[component]
pub fn App() -> Element {
    let mut state = use_signal(|| AppState::new(demo::demo_friends()));
    let mut is_dark = use_signal(|| false);

    let snapshot = state();
    let on_surface = AppColors::on_surface(is_dark());
    let primary = AppColors::primary(is_dark());

    rsx! {
        GradientBackground { is_dark: is_dark(),
            div { style: "font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 24px;",
                div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 24px;",
                    h1 { style: "margin: 0; color: {primary};", "🍽️ Evenly" }
                    div { style: "flex: 1;" }
                    button {
                        onclick: move |_| {
                            let dark = is_dark();
                            is_dark.set(!dark);
                        },
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #B8A890; background: transparent; color: {on_surface}; cursor: pointer;",
                        if is_dark() { "☀️ Light" } else { "🌙 Dark" }
                    }
                }
                div { style: "display: flex; gap: 24px; align-items: flex-start;",
                    div { style: "flex: 1;",
                        FriendsList {
                            is_dark: is_dark(),
                            friends: snapshot.friends.clone(),
                            selected: snapshot.selected.clone(),
                            on_select: move |id: FriendId| {
                                tracing::debug!("select friend {}", id);
                                state.write().select_friend(&id);
                            },
                        }
                        if snapshot.show_add_friend {
                            AddFriendForm {
                                is_dark: is_dark(),
                                on_add: move |friend: Friend| {
                                    tracing::info!("add friend: {}", friend.name);
                                    state.write().add_friend(friend);
                                },
                            }
                        }
                        div { style: "display: flex; justify-content: flex-end; margin: 8px;",
                            ActionButton {
                                is_dark: is_dark(),
                                onclick: move |_| state.write().toggle_add_friend(),
                                if snapshot.show_add_friend { "Close" } else { "Add friend" }
                            }
                        }
                    }
                    div { style: "flex: 1.2;",
                        if let Some(friend) = snapshot.selected_friend() {
                            SplitBillForm {
                                key: "{friend.id}",
                                is_dark: is_dark(),
                                friend: friend.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

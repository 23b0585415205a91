//! Selection and roster transitions (no Dioxus/desktop required for logic).

use chrono::Utc;
use evenly::models::{Friend, FriendId};
use evenly::state::AppState;

fn friend(name: &str, balance: i64) -> Friend {
    Friend {
        id: FriendId::generate(),
        name: name.to_string(),
        image: format!("https://i.pravatar.cc/48?u={}", name),
        balance,
        created_at: Utc::now(),
    }
}

#[test]
fn new_state_has_no_selection_and_hidden_add_form() {
    let state = AppState::new(vec![friend("Clark", -7)]);
    assert_eq!(state.selected, None);
    assert!(!state.show_add_friend);
    assert_eq!(state.friends.len(), 1);
}

#[test]
fn select_sets_selection_when_nothing_selected() {
    let a = friend("Clark", -7);
    let id = a.id.clone();
    let mut state = AppState::new(vec![a]);

    state.select_friend(&id);

    assert_eq!(state.selected, Some(id.clone()));
    assert!(state.is_selected(&id));
}

#[test]
fn selecting_selected_friend_clears_selection() {
    let a = friend("Clark", -7);
    let id = a.id.clone();
    let before = AppState::new(vec![a]);
    let mut state = before.clone();

    state.select_friend(&id);
    state.select_friend(&id);

    // two applications from a clean state are a no-op
    assert_eq!(state, before);
}

#[test]
fn selecting_other_friend_switches_selection() {
    let sarah = friend("Sarah", 20);
    let anthony = friend("Anthony", 0);
    let sarah_id = sarah.id.clone();
    let anthony_id = anthony.id.clone();
    let mut state = AppState::new(vec![friend("Clark", -7), sarah, anthony]);

    state.select_friend(&sarah_id);
    state.select_friend(&anthony_id);
    assert_eq!(state.selected, Some(anthony_id.clone()));

    state.select_friend(&anthony_id);
    assert_eq!(state.selected, None);
}

#[test]
fn selecting_unknown_id_is_ignored() {
    let a = friend("Clark", -7);
    let id = a.id.clone();
    let mut state = AppState::new(vec![a]);
    let stranger = FriendId::generate();

    state.select_friend(&stranger);
    assert_eq!(state.selected, None);

    // an established selection survives an unknown id too
    state.select_friend(&id);
    state.select_friend(&stranger);
    assert_eq!(state.selected, Some(id));
}

#[test]
fn selected_friend_resolves_roster_member() {
    let sarah = friend("Sarah", 20);
    let sarah_id = sarah.id.clone();
    let mut state = AppState::new(vec![friend("Clark", -7), sarah]);

    assert!(state.selected_friend().is_none());

    state.select_friend(&sarah_id);
    let selected = state.selected_friend().expect("selection should resolve");
    assert_eq!(selected.name, "Sarah");
    assert_eq!(selected.id, sarah_id);
}

#[test]
fn add_friend_appends_one_and_closes_form() {
    let mut state = AppState::new(vec![friend("Clark", -7)]);
    state.toggle_add_friend();
    assert!(state.show_add_friend);

    let new_friend = Friend::create("Sarah", "https://i.pravatar.cc/48").unwrap();
    state.add_friend(new_friend.clone());

    assert_eq!(state.friends.len(), 2);
    assert_eq!(state.friends[1], new_friend);
    assert_eq!(state.friends[1].balance, 0);
    assert!(!state.show_add_friend);
}

#[test]
fn add_friend_keeps_current_selection() {
    let a = friend("Clark", -7);
    let id = a.id.clone();
    let mut state = AppState::new(vec![a]);
    state.select_friend(&id);

    state.add_friend(Friend::create("Sarah", "https://i.pravatar.cc/48").unwrap());

    assert_eq!(state.selected, Some(id));
}

#[test]
fn toggle_add_friend_flips_visibility() {
    let mut state = AppState::default();
    state.toggle_add_friend();
    assert!(state.show_add_friend);
    state.toggle_add_friend();
    assert!(!state.show_add_friend);
}

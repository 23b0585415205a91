//! UI state owned by the root view, with its transitions.
//! No side effects, easy to test.

use crate::models::{Friend, FriendId};

/// Everything the root view owns: the friend roster, the single selection,
/// and the add-form visibility. Children get clones and request changes
/// through callbacks; nothing mutates this directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub friends: Vec<Friend>,
    pub selected: Option<FriendId>,
    pub show_add_friend: bool,
}

impl AppState {
    pub fn new(friends: Vec<Friend>) -> Self {
        AppState {
            friends,
            selected: None,
            show_add_friend: false,
        }
    }

    /// Show/hide the add-friend form.
    pub fn toggle_add_friend(&mut self) {
        self.show_add_friend = !self.show_add_friend;
    }

    /// Append to the roster and close the add form. Friends are never removed.
    pub fn add_friend(&mut self, friend: Friend) {
        self.friends.push(friend);
        self.show_add_friend = false;
    }

    /// Select a friend, or clear the selection when the same friend is
    /// selected again. Ids not present in the roster are ignored, so a
    /// non-null selection always references a roster member.
    pub fn select_friend(&mut self, id: &FriendId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
            return;
        }
        if self.friends.iter().any(|f| f.id == *id) {
            self.selected = Some(id.clone());
        }
    }

    /// Resolve the selection against the roster.
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected
            .as_ref()
            .and_then(|id| self.friends.iter().find(|f| f.id == *id))
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}

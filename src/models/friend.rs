use serde::{Deserialize, Serialize};

use crate::models::FriendId;

/// Placeholder avatar used until the user supplies an image URL.
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    /// Net balance: positive = they owe you, negative = you owe them.
    #[serde(default)]
    pub balance: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Friend {
    /// Builds a friend from the add form's fields, or `None` when either
    /// field is empty (submission is silently ignored in that case).
    ///
    /// The image URL gets the fresh id appended as a query suffix so each
    /// friend renders a distinct avatar even when URLs collide.
    pub fn create(name: &str, image: &str) -> Option<Self> {
        if name.is_empty() || image.is_empty() {
            return None;
        }
        let id = FriendId::generate();
        Some(Friend {
            image: format!("{}?={}", image, id),
            id,
            name: name.to_string(),
            balance: 0,
            created_at: chrono::Utc::now(),
        })
    }

    /// One of three mutually exclusive standing messages, keyed on balance sign.
    pub fn balance_message(&self) -> String {
        if self.balance < 0 {
            format!("You owe {} {}", self.name, self.formatted_balance())
        } else if self.balance > 0 {
            format!("{} owes you {}", self.name, self.formatted_balance())
        } else {
            format!("You and {} are even.", self.name)
        }
    }

    /// Absolute balance as a dollar amount with thousands separators.
    pub fn formatted_balance(&self) -> String {
        format!("${}", format_number_with_commas(&self.balance.abs().to_string()))
    }
}

fn format_number_with_commas(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    for (i, c) in chars.into_iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

//! Friend construction, standing messages, ids, and the demo roster.

use chrono::Utc;
use evenly::demo;
use evenly::models::{Friend, FriendId, DEFAULT_AVATAR_URL};
use pretty_assertions::assert_eq;

fn friend_with_balance(name: &str, balance: i64) -> Friend {
    Friend {
        id: FriendId::generate(),
        name: name.to_string(),
        image: DEFAULT_AVATAR_URL.to_string(),
        balance,
        created_at: Utc::now(),
    }
}

#[test]
fn create_with_empty_name_returns_none() {
    assert_eq!(Friend::create("", DEFAULT_AVATAR_URL), None);
}

#[test]
fn create_with_empty_image_returns_none() {
    assert_eq!(Friend::create("Sarah", ""), None);
    assert_eq!(Friend::create("", ""), None);
}

#[test]
fn create_builds_zero_balance_friend_with_cache_busted_image() {
    let f = Friend::create("Sarah", DEFAULT_AVATAR_URL).unwrap();
    assert_eq!(f.name, "Sarah");
    assert_eq!(f.balance, 0);
    assert_eq!(f.image, format!("{}?={}", DEFAULT_AVATAR_URL, f.id));
}

#[test]
fn create_generates_unique_ids() {
    let a = Friend::create("Sarah", DEFAULT_AVATAR_URL).unwrap();
    let b = Friend::create("Sarah", DEFAULT_AVATAR_URL).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn negative_balance_means_you_owe() {
    let f = friend_with_balance("Clark", -7);
    assert_eq!(f.balance_message(), "You owe Clark $7");
}

#[test]
fn positive_balance_means_they_owe_you() {
    let f = friend_with_balance("Sarah", 20);
    assert_eq!(f.balance_message(), "Sarah owes you $20");
}

#[test]
fn zero_balance_means_even() {
    let f = friend_with_balance("Anthony", 0);
    assert_eq!(f.balance_message(), "You and Anthony are even.");
}

#[test]
fn formatted_balance_is_absolute_with_thousands_separators() {
    assert_eq!(friend_with_balance("Clark", -1234567).formatted_balance(), "$1,234,567");
    assert_eq!(friend_with_balance("Sarah", 900).formatted_balance(), "$900");
}

#[test]
fn friend_id_parse_rejects_non_uuid() {
    assert!(FriendId::parse("933372").is_err());
    assert!(FriendId::parse("").is_err());
    assert!(FriendId::parse(FriendId::generate().as_str()).is_ok());
}

#[test]
fn friend_id_serde_round_trips_and_validates() {
    let id = FriendId::generate();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(serde_json::from_str::<FriendId>(&json).unwrap(), id);

    assert!(serde_json::from_str::<FriendId>("\"not-a-uuid\"").is_err());
}

#[test]
fn demo_roster_covers_all_three_standings() {
    let friends = demo::demo_friends();
    assert_eq!(friends.len(), 3);
    assert!(friends.iter().any(|f| f.balance < 0));
    assert!(friends.iter().any(|f| f.balance > 0));
    assert!(friends.iter().any(|f| f.balance == 0));

    let mut ids: Vec<_> = friends.iter().map(|f| f.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

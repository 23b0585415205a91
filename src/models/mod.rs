mod friend;
mod ids;

pub use friend::{Friend, DEFAULT_AVATAR_URL};
pub use ids::FriendId;

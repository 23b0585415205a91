mod add_friend;
mod friends;
mod split_bill;

pub use add_friend::AddFriendForm;
pub use friends::{FriendRow, FriendsList};
pub use split_bill::SplitBillForm;

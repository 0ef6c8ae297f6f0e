mod meta;
pub use self::meta::{RepliesPage, ResponseMetadata, Status, UsersInfo};

mod block;
pub use self::block::{Block, RichTextElement};

mod message;
pub use self::message::Message;

mod user;
pub use self::user::{Profile, User, UserID};

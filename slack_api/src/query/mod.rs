mod common;
pub use self::common::Query;

mod replies;
pub use self::replies::RepliesQuery;

mod users;
pub use self::users::UsersInfoQuery;

use serde::{Deserialize, Serialize};

use super::{Block, UserID};

/// A message in a conversation or thread.
///
/// `user` is absent for bot and system messages.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    #[serde(default)]
    pub user: Option<UserID>,
    pub ts: String,
    #[serde(default)]
    pub thread_ts: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

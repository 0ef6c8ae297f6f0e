use url::Url;

use super::Query;

/// Parameters for a batched `users.info` lookup.
#[derive(Clone, Debug, Default)]
pub struct UsersInfoQuery {
    pub users: Vec<String>,
}

impl Query for UsersInfoQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("users", &self.users.join(","));
        url
    }
}

impl UsersInfoQuery {
    pub fn with_users(mut self, users: &[String]) -> Self {
        self.users.extend_from_slice(users);
        self
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn stub() -> UserId {
        UserId(String::from("user-stub"))
    }
}

/// Users are embedded by value in the posts and comments they author, as they
/// were at creation time.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar_url: String,
}

impl User {
    pub fn stub() -> User {
        User {
            id: UserId::stub(),
            name: String::from("stub"),
            avatar_url: String::new(),
        }
    }
}

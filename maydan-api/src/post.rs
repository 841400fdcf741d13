use crate::{Comment, Error, User};

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PostId(pub String);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,

    /// May only be empty if there is an image
    pub text: String,
    pub image_url: Option<String>,
    pub author: User,

    /// Display label, opaque to the feed
    pub timestamp: String,

    pub likes: u64,

    /// Whether the person looking at the feed likes this post
    pub is_liked: bool,

    /// In insertion order, append-only
    pub comments: Vec<Comment>,
}

/// Post as typed in the post form, before it reaches the feed
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewPost {
    pub text: String,
    pub image_url: Option<String>,
}

impl NewPost {
    pub fn new(text: &str, image_url: Option<String>) -> NewPost {
        NewPost {
            text: String::from(text.trim()),
            image_url,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.text.trim().is_empty() && self.image_url.is_none() {
            return Err(Error::EmptyPost);
        }
        Ok(())
    }
}

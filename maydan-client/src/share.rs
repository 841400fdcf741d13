use crate::api::Post;

/// What gets handed to the platform share sheet for a post
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_post(post: &Post, url: &str) -> SharePayload {
        SharePayload {
            title: format!("منشور من {} في ميدان", post.author.name),
            text: post.text.clone(),
            url: String::from(url),
        }
    }
}

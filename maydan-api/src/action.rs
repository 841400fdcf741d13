use crate::{NewComment, NewPost, PostId, User};

/// Something the local user asked the feed to do
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    CreatePost { post: NewPost, author: User },
    ToggleLike { post_id: PostId },
    AddComment { post_id: PostId, comment: NewComment, author: User },
}

impl Action {
    /// Runs the caller-side guard for this action
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            Action::CreatePost { post, .. } => post.validate(),
            Action::ToggleLike { .. } => Ok(()),
            Action::AddComment { comment, .. } => comment.validate(),
        }
    }

    pub fn post_id(&self) -> Option<&PostId> {
        match self {
            Action::CreatePost { .. } => None,
            Action::ToggleLike { post_id } | Action::AddComment { post_id, .. } => Some(post_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_json() {
        let actions: Vec<Action> = serde_json::from_str(
            r#"[
                {"toggle_like": {"post_id": "post-1"}},
                {"add_comment": {
                    "post_id": "post-1",
                    "comment": {"text": "رائع"},
                    "author": {"id": "user-0", "name": "أنت", "avatar_url": ""}
                }},
                {"create_post": {
                    "post": {"text": "hello", "image_url": null},
                    "author": {"id": "user-0", "name": "أنت", "avatar_url": ""}
                }}
            ]"#,
        )
        .unwrap();
        assert_eq!(actions.len(), 3);
        assert_eq!(
            actions[0],
            Action::ToggleLike {
                post_id: PostId(String::from("post-1"))
            }
        );
        assert_eq!(actions[1].post_id(), Some(&PostId(String::from("post-1"))));
        assert_eq!(actions[2].post_id(), None);
        assert!(actions.iter().all(|a| a.validate().is_ok()));
    }

    #[test]
    fn validate_uses_the_draft_guards() {
        let a = Action::AddComment {
            post_id: PostId(String::from("post-1")),
            comment: NewComment::new("   "),
            author: User::stub(),
        };
        assert_eq!(a.validate(), Err(crate::Error::EmptyComment));
        let a = Action::CreatePost {
            post: NewPost::new("", None),
            author: User::stub(),
        };
        assert_eq!(a.validate(), Err(crate::Error::EmptyPost));
    }
}

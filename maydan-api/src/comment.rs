use crate::{Error, User};

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub String);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub author: User,

    /// Display label, opaque to the feed
    pub timestamp: String,
}

/// Comment as typed by the user, before it reaches the feed
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub text: String,
}

impl NewComment {
    pub fn new(text: &str) -> NewComment {
        NewComment {
            text: String::from(text.trim()),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.text.trim().is_empty() {
            return Err(Error::EmptyComment);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_comment_is_trimmed() {
        assert_eq!(NewComment::new("  رائع \n").text, "رائع");
    }

    #[test]
    fn blank_comment_is_rejected() {
        assert_eq!(NewComment::new(" \t ").validate(), Err(Error::EmptyComment));
        assert_eq!(NewComment::new("ok").validate(), Ok(()));
    }
}

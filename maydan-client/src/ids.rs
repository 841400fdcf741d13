use crate::api::{CommentId, PostId, Uuid};

/// Source of fresh post and comment identifiers
///
/// Identifiers must not repeat within the lifetime of the generator. The store
/// additionally skips any identifier already present in the feed.
pub trait IdGen {
    fn next_post_id(&mut self) -> PostId;
    fn next_comment_id(&mut self) -> CommentId;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdGen for UuidIds {
    fn next_post_id(&mut self) -> PostId {
        PostId(format!("post-{}", Uuid::new_v4()))
    }

    fn next_comment_id(&mut self) -> CommentId {
        CommentId(format!("comment-{}", Uuid::new_v4()))
    }
}

/// Monotonic counter, for reproducible feeds
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> SequentialIds {
        SequentialIds { next }
    }

    fn bump(&mut self) -> u64 {
        let res = self.next;
        self.next += 1;
        res
    }
}

impl IdGen for SequentialIds {
    fn next_post_id(&mut self) -> PostId {
        PostId(format!("post-{}", self.bump()))
    }

    fn next_comment_id(&mut self) -> CommentId {
        CommentId(format!("comment-{}", self.bump()))
    }
}

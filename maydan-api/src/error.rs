#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("A post needs either some text or an image")]
    EmptyPost,

    #[error("A comment cannot be empty")]
    EmptyComment,

    #[error("Post id {0:?} appears more than once in the feed")]
    DuplicatePost(String),

    #[error("Post {0:?} is liked by the viewer but has no likes")]
    InconsistentLikes(String),
}

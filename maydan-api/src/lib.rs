mod action;
pub use action::Action;

mod comment;
pub use comment::{Comment, CommentId, NewComment};

mod error;
pub use error::Error;

mod post;
pub use post::{NewPost, Post, PostId};

mod user;
pub use user::{User, UserId};

pub use uuid::Uuid;

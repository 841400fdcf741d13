mod app;
pub use app::{App, AppMsg};

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::CommentItem;

mod header;
pub use header::Header;

mod post_card;
pub use post_card::PostCard;

mod post_form;
pub use post_form::PostForm;

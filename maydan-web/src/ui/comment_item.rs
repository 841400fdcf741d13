use maydan_client::api::Comment;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub comment: Comment,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let author = &p.comment.author;
    html! {
        <div class="d-flex align-items-start gap-2 mt-3">
            <img src={ author.avatar_url.clone() } alt={ author.name.clone() } class="avatar-sm rounded-circle" />
            <div class="flex-fill bg-light rounded p-2">
                <p class="fw-semibold small m-0">{ &author.name }</p>
                <p class="small m-0 pre-wrap">{ &p.comment.text }</p>
            </div>
        </div>
    }
}

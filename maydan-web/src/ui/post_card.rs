use std::sync::Arc;

use maydan_client::api::{Action, NewComment, Post, User};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct PostCardProps {
    pub post: Arc<Post>,
    pub current_user: User,
    pub on_action: Callback<Action>,
}

fn likes_label(likes: u64) -> Option<String> {
    (likes > 0).then(|| format!("❤️ {likes} إعجاب"))
}

fn comments_label(count: usize) -> Option<String> {
    (count > 0).then(|| format!("{count} تعليقات"))
}

#[function_component(PostCard)]
pub fn post_card(p: &PostCardProps) -> Html {
    let show_comments = use_state(|| false);
    let post = &p.post;

    let on_like = {
        let post_id = post.id.clone();
        p.on_action.reform(move |_: MouseEvent| Action::ToggleLike {
            post_id: post_id.clone(),
        })
    };
    let on_comment = {
        let post_id = post.id.clone();
        let author = p.current_user.clone();
        p.on_action
            .reform(move |comment: NewComment| Action::AddComment {
                post_id: post_id.clone(),
                comment,
                author: author.clone(),
            })
    };
    let on_share = {
        let post = post.clone();
        Callback::from(move |_: MouseEvent| util::share_post(&post))
    };
    let open_comments = {
        let show_comments = show_comments.clone();
        Callback::from(move |_: MouseEvent| show_comments.set(true))
    };
    let toggle_comments = {
        let show_comments = show_comments.clone();
        Callback::from(move |_: MouseEvent| show_comments.set(!*show_comments))
    };

    let image = post.image_url.clone().map(|url| {
        html! {
            <div class="my-3">
                <img src={ url } alt="محتوى المنشور" class="w-100 rounded post-image" />
            </div>
        }
    });
    let like_icon = match post.is_liked {
        true => "bi-heart-fill",
        false => "bi-heart",
    };
    let comment_panel = show_comments.then(|| {
        html! {
            <div class="pt-3 mt-2 border-top">
                <ui::CommentForm
                    current_user_avatar={ p.current_user.avatar_url.clone() }
                    on_submit={ on_comment }
                />
                <div class="mt-3">
                    { for post.comments.iter().map(|c| html! {
                        <ui::CommentItem key={ c.id.0.clone() } comment={ c.clone() } />
                    }) }
                </div>
            </div>
        }
    });

    html! {
        <div class="bg-white p-3 rounded shadow-sm">
            <div class="d-flex align-items-center gap-3 mb-3">
                <img src={ post.author.avatar_url.clone() } alt={ post.author.name.clone() } class="avatar rounded-circle" />
                <div>
                    <p class="fw-bold m-0">{ &post.author.name }</p>
                    <p class="small text-muted m-0">{ &post.timestamp }</p>
                </div>
            </div>

            <p class="fs-5 mb-3 pre-wrap">{ &post.text }</p>

            { for image }

            <div class="d-flex justify-content-between align-items-center text-muted small mb-2 px-2">
                <div>{ for likes_label(post.likes) }</div>
                <button type="button" class="btn btn-link btn-sm text-muted p-0" onclick={ open_comments }>
                    { for comments_label(post.comments.len()) }
                </button>
            </div>

            <hr class="my-1" />

            <div class="d-flex justify-content-around align-items-center pt-2 fw-semibold">
                <button
                    type="button"
                    class={ classes!("btn", "w-100", post.is_liked.then(|| "text-danger")) }
                    onclick={ on_like }
                >
                    <span class={ classes!("bi-btn", like_icon, "me-2") }></span>
                    <span>{ "أعجبني" }</span>
                </button>
                <button type="button" class="btn w-100" onclick={ toggle_comments }>
                    <span class="bi-btn bi-chat me-2"></span>
                    <span>{ "تعليق" }</span>
                </button>
                <button type="button" class="btn w-100" onclick={ on_share }>
                    <span class="bi-btn bi-share me-2"></span>
                    <span>{ "مشاركة" }</span>
                </button>
            </div>

            { for comment_panel }
        </div>
    }
}

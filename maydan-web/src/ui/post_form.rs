use maydan_client::api::{Action, NewPost, User};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct PostFormProps {
    pub current_user: User,
    pub on_action: Callback<Action>,
}

#[function_component(PostForm)]
pub fn post_form(p: &PostFormProps) -> Html {
    let text = use_state(String::new);
    let image_preview = use_state(|| None::<String>);
    let file_ref = use_node_ref();
    let can_submit = NewPost::new(&text, (*image_preview).clone())
        .validate()
        .is_ok();

    let on_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            text.set(area.value());
        })
    };
    let remove_image = {
        let image_preview = image_preview.clone();
        let file_ref = file_ref.clone();
        Callback::from(move |()| {
            image_preview.set(None);
            if let Some(input) = file_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
        })
    };
    let on_image_change = {
        let image_preview = image_preview.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                let image_preview = image_preview.clone();
                util::read_as_data_url(
                    file,
                    Callback::from(move |url| image_preview.set(Some(url))),
                );
            }
        })
    };
    let pick_image = {
        let file_ref = file_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_submit = {
        let text = text.clone();
        let image_preview = image_preview.clone();
        let remove_image = remove_image.clone();
        let author = p.current_user.clone();
        let on_action = p.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let post = NewPost::new(&text, (*image_preview).clone());
            if post.validate().is_ok() {
                on_action.emit(Action::CreatePost {
                    post,
                    author: author.clone(),
                });
                text.set(String::new());
                remove_image.emit(());
            }
        })
    };

    let preview = (*image_preview).clone().map(|url| {
        html! {
            <div class="mt-3 position-relative">
                <img src={ url } alt="معاينة" class="rounded w-100 border preview-image" />
                <button
                    type="button"
                    class="btn btn-dark btn-circle bi-btn bi-x-lg position-absolute top-0 end-0 m-2"
                    aria-label="إزالة الصورة"
                    onclick={ remove_image.reform(|_: MouseEvent| ()) }
                >
                </button>
            </div>
        }
    });

    html! {
        <div class="bg-white p-3 rounded shadow-sm mb-4">
            <form onsubmit={ on_submit }>
                <div class="d-flex align-items-start gap-3">
                    <img
                        src={ p.current_user.avatar_url.clone() }
                        alt={ p.current_user.name.clone() }
                        class="avatar rounded-circle"
                    />
                    <div class="flex-fill">
                        <textarea
                            value={ (*text).clone() }
                            oninput={ on_input }
                            placeholder="بم تفكر؟"
                            class="form-control"
                            rows="3"
                        />
                        { for preview }
                    </div>
                </div>

                <div class="d-flex justify-content-between align-items-center mt-2 ms-5 ps-3">
                    <input
                        ref={ file_ref }
                        type="file"
                        accept="image/*"
                        class="d-none"
                        onchange={ on_image_change }
                    />
                    <button
                        type="button"
                        class="btn bi-btn bi-image fs-5"
                        aria-label="إضافة صورة"
                        onclick={ pick_image }
                    >
                    </button>
                    <button
                        type="submit"
                        class="btn btn-success d-flex align-items-center gap-2"
                        disabled={ !can_submit }
                    >
                        <span>{ "نشر" }</span>
                        <span class="bi-btn bi-send"></span>
                    </button>
                </div>
            </form>
        </div>
    }
}

use maydan_client::api::NewComment;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub current_user_avatar: String,
    pub on_submit: Callback<NewComment>,
}

#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let text = use_state(String::new);
    let can_submit = NewComment::new(&text).validate().is_ok();

    let on_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };
    let on_submit = {
        let text = text.clone();
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = NewComment::new(&text);
            if draft.validate().is_ok() {
                on_submit.emit(draft);
                text.set(String::new());
            }
        })
    };

    html! {
        <form onsubmit={ on_submit } class="d-flex align-items-center gap-2 mt-3">
            <img src={ p.current_user_avatar.clone() } alt="Your Avatar" class="avatar-sm rounded-circle" />
            <div class="position-relative flex-fill">
                <input
                    type="text"
                    value={ (*text).clone() }
                    oninput={ on_input }
                    placeholder="اكتب تعليقاً..."
                    class="form-control rounded-pill bg-light pe-5"
                />
                <button
                    type="submit"
                    class="btn bi-btn bi-send position-absolute top-50 end-0 translate-middle-y"
                    aria-label="إرسال"
                    disabled={ !can_submit }
                >
                </button>
            </div>
        </form>
    }
}

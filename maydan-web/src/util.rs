use maydan_client::{api::Post, SharePayload};
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

const SHARE_UNSUPPORTED: &str = "خاصية المشاركة غير مدعومة في متصفحك.";

#[wasm_bindgen(inline_js = "
    export function can_share() {
        return typeof navigator.share === 'function';
    }
    export async function share(title, text, url) {
        await navigator.share({ title, text, url });
    }
    export function current_url() {
        return window.location.href;
    }
    export function alert_user(msg) {
        window.alert(msg);
    }
")]
extern "C" {
    fn can_share() -> bool;
    #[wasm_bindgen(catch)]
    async fn share(title: &str, text: &str, url: &str) -> Result<JsValue, JsValue>;
    fn current_url() -> String;
    fn alert_user(msg: &str);
}

/// Opens the platform share sheet for `post`
///
/// Cancellation and failures only end up in the logs.
pub fn share_post(post: &Post) {
    if !can_share() {
        alert_user(SHARE_UNSUPPORTED);
        return;
    }
    let payload = SharePayload::for_post(post, &current_url());
    spawn_local(async move {
        if let Err(err) = share(&payload.title, &payload.text, &payload.url).await {
            tracing::error!(?err, "error sharing post");
        }
    });
}

/// Reads `file` into a `data:` URL and hands it to `on_done`
pub fn read_as_data_url(file: web_sys::File, on_done: Callback<String>) {
    let reader = match web_sys::FileReader::new() {
        Ok(r) => r,
        Err(err) => {
            tracing::error!(?err, "failed creating file reader");
            return;
        }
    };
    let on_load_end = {
        let reader = reader.clone();
        Closure::once_into_js(move |_: web_sys::ProgressEvent| {
            match reader.result().ok().and_then(|r| r.as_string()) {
                Some(url) => on_done.emit(url),
                None => tracing::error!("file reader finished without a data url"),
            }
        })
    };
    reader.set_onloadend(Some(on_load_end.unchecked_ref()));
    if let Err(err) = reader.read_as_data_url(&file) {
        tracing::error!(?err, "failed reading image file");
    }
}

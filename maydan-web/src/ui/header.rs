use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="bg-white shadow-sm sticky-top">
            <div class="container px-3 py-2">
                <h1 class="fs-2 fw-bold text-success m-0">{ "ميدان" }</h1>
            </div>
        </header>
    }
}

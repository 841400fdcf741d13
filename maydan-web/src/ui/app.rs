use maydan_client::{
    api::{Action, User},
    seed, FeedStore,
};
use yew::prelude::*;

use crate::ui;

pub enum AppMsg {
    NewUserAction(Action),
}

pub struct App {
    store: FeedStore,
    current_user: User,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            store: FeedStore::new(seed::initial_feed()),
            current_user: seed::current_user(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::NewUserAction(a) => {
                tracing::debug!("got new user action {a:?}");
                if let Err(err) = a.validate() {
                    tracing::warn!(%err, "submitted user action that does not pass validation, the form should have been disabled");
                    return false;
                }
                let changed = self.store.apply(a);
                tracing::trace!(changed, "handled new user action");
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_action = ctx.link().callback(AppMsg::NewUserAction);
        let posts = self.store.feed().iter().map(|post| {
            html! {
                <ui::PostCard
                    key={ post.id.0.clone() }
                    post={ post.clone() }
                    current_user={ self.current_user.clone() }
                    on_action={ on_action.clone() }
                />
            }
        });
        html! {
            <div class="min-vh-100">
                <ui::Header />
                <main class="container p-3 p-md-4">
                    <div class="mx-auto" style="max-width: 42rem;">
                        <ui::PostForm
                            current_user={ self.current_user.clone() }
                            on_action={ on_action.clone() }
                        />
                        <div class="d-flex flex-column gap-4">
                            { for posts }
                        </div>
                    </div>
                </main>
            </div>
        }
    }
}

mod clock;
pub use clock::{Clock, FixedClock, NowLabel, UtcClock};

mod feed;
pub use feed::Feed;

mod ids;
pub use ids::{IdGen, SequentialIds, UuidIds};

pub mod seed;

mod share;
pub use share::SharePayload;

mod store;
pub use store::FeedStore;

pub mod api {
    pub use maydan_api::*;
}

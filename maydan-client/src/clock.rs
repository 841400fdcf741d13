use chrono::{SecondsFormat, Utc};

/// Label shown for posts and comments created "now"
pub const NOW_LABEL: &str = "الآن";

/// Produces the timestamp label of something being created right now
///
/// Formatting older timestamps relative to the present is up to whoever
/// displays them.
pub trait Clock {
    fn now_label(&self) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NowLabel;

impl Clock for NowLabel {
    fn now_label(&self) -> String {
        String::from(NOW_LABEL)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn now_label(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[derive(Clone, Debug)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.0.clone()
    }
}

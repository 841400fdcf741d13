use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{anyhow, Context};
use maydan_client::{api::Action, seed, Clock, Feed, FeedStore, NowLabel, UtcClock, UuidIds};

#[derive(structopt::StructOpt)]
struct Opt {
    /// Start from an empty feed instead of the demo posts
    #[structopt(long, conflicts_with = "feed")]
    empty: bool,

    /// Start from the feed dumped in this JSON file
    #[structopt(long, parse(from_os_str))]
    feed: Option<PathBuf>,

    /// Label for new posts and comments: "now" or "utc"
    #[structopt(long, env = "MAYDAN_CLOCK", default_value = "now")]
    clock: ClockKind,

    /// Print the resulting feed on a single line
    #[structopt(long)]
    compact: bool,

    /// JSON list of actions to apply, "-" for stdin
    #[structopt(parse(from_os_str))]
    script: PathBuf,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ClockKind {
    Now,
    Utc,
}

impl FromStr for ClockKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<ClockKind> {
        match s {
            "now" => Ok(ClockKind::Now),
            "utc" => Ok(ClockKind::Utc),
            _ => Err(anyhow!("unknown clock {s:?}, expected \"now\" or \"utc\"")),
        }
    }
}

impl Clock for ClockKind {
    fn now_label(&self) -> String {
        match self {
            ClockKind::Now => NowLabel.now_label(),
            ClockKind::Utc => UtcClock.now_label(),
        }
    }
}

fn open(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(std::io::stdin()));
    }
    Ok(Box::new(
        File::open(path).with_context(|| format!("opening {path:?}"))?,
    ))
}

fn initial_feed(opt: &Opt) -> anyhow::Result<Feed> {
    match (&opt.feed, opt.empty) {
        (Some(path), _) => serde_json::from_reader(open(path)?)
            .with_context(|| format!("parsing feed from {path:?}")),
        (None, true) => Ok(Feed::default()),
        (None, false) => Ok(seed::initial_feed()),
    }
}

/// Applies `actions` in order, skipping over the ones that turn out to be no-ops
fn replay(feed: Feed, clock: ClockKind, actions: Vec<Action>) -> Feed {
    let mut store = FeedStore::with_collaborators(feed, clock, UuidIds);
    for (i, a) in actions.into_iter().enumerate() {
        if let Err(err) = a.validate() {
            tracing::info!(action = i, %err, "skipping invalid action");
            continue;
        }
        let post_id = a.post_id().cloned();
        if !store.apply(a) {
            tracing::info!(action = i, post = ?post_id, "action did not change the feed");
        }
    }
    store.snapshot()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let feed = initial_feed(&opt)?;
    let actions: Vec<Action> = serde_json::from_reader(open(&opt.script)?)
        .with_context(|| format!("parsing actions from {:?}", opt.script))?;
    tracing::debug!(num_actions = actions.len(), "replaying script");

    let feed = replay(feed, opt.clock, actions);
    let out = match opt.compact {
        true => serde_json::to_string(&feed),
        false => serde_json::to_string_pretty(&feed),
    }
    .context("serializing resulting feed")?;
    println!("{out}");

    Ok(())
}

use std::sync::Arc;

use crate::{
    api::{Action, Comment, CommentId, NewComment, NewPost, Post, PostId, User},
    Clock, Feed, IdGen, NowLabel, UuidIds,
};

/// Owner of the canonical feed
///
/// Every operation replaces the current snapshot with a new one; snapshots
/// handed out earlier by [`FeedStore::snapshot`] never change. Invalid input
/// and unknown post ids are no-ops, reported through the return value and a
/// debug log rather than an error.
#[derive(Debug)]
pub struct FeedStore<C = NowLabel, I = UuidIds> {
    feed: Feed,
    clock: C,
    ids: I,
}

impl FeedStore {
    pub fn new(feed: Feed) -> FeedStore {
        FeedStore::with_collaborators(feed, NowLabel, UuidIds)
    }
}

impl<C: Clock, I: IdGen> FeedStore<C, I> {
    pub fn with_collaborators(feed: Feed, clock: C, ids: I) -> FeedStore<C, I> {
        FeedStore { feed, clock, ids }
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn snapshot(&self) -> Feed {
        self.feed.clone()
    }

    fn fresh_post_id(&mut self) -> PostId {
        loop {
            let id = self.ids.next_post_id();
            if !self.feed.contains(&id) {
                return id;
            }
            tracing::warn!(?id, "generated post id is already in the feed, retrying");
        }
    }

    fn fresh_comment_id(&mut self, post: &Post) -> CommentId {
        loop {
            let id = self.ids.next_comment_id();
            if post.comments.iter().all(|c| c.id != id) {
                return id;
            }
            tracing::warn!(?id, post = ?post.id, "generated comment id is already in the post, retrying");
        }
    }

    /// Prepends a new post to the feed
    ///
    /// Returns `None` without touching the feed if `text` is blank and there
    /// is no image.
    pub fn create_post(
        &mut self,
        text: &str,
        image_url: Option<String>,
        author: &User,
    ) -> Option<Arc<Post>> {
        let draft = NewPost::new(text, image_url);
        if let Err(err) = draft.validate() {
            tracing::debug!(%err, "ignoring post creation");
            return None;
        }
        let post = Post {
            id: self.fresh_post_id(),
            text: draft.text,
            image_url: draft.image_url,
            author: author.clone(),
            timestamp: self.clock.now_label(),
            likes: 0,
            is_liked: false,
            comments: Vec::new(),
        };
        tracing::trace!(id = ?post.id, "creating post");
        Some(self.feed.prepend(post))
    }

    /// Flips the viewer's like on post `id`, returns whether there was such a
    /// post
    pub fn toggle_like(&mut self, id: &PostId) -> bool {
        let res = self.feed.update_post(id, |p| {
            if p.is_liked {
                p.likes -= 1;
            } else {
                p.likes += 1;
            }
            p.is_liked = !p.is_liked;
        });
        if res.is_none() {
            tracing::debug!(?id, "toggling like on post not in feed");
        }
        res.is_some()
    }

    /// Appends a comment to post `id`
    ///
    /// Returns `None` without touching the feed if `text` is blank or there
    /// is no such post.
    pub fn add_comment(&mut self, id: &PostId, text: &str, author: &User) -> Option<Comment> {
        let draft = NewComment::new(text);
        if let Err(err) = draft.validate() {
            tracing::debug!(%err, ?id, "ignoring comment");
            return None;
        }
        let post = match self.feed.get(id) {
            Some(p) => p.clone(),
            None => {
                tracing::debug!(?id, "commenting on post not in feed");
                return None;
            }
        };
        let comment = Comment {
            id: self.fresh_comment_id(&post),
            text: draft.text,
            author: author.clone(),
            timestamp: self.clock.now_label(),
        };
        tracing::trace!(?id, comment = ?comment.id, "adding comment");
        self.feed
            .update_post(id, |p| p.comments.push(comment.clone()))
            .map(|()| comment)
    }

    /// Returns whether the feed changed
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::CreatePost { post, author } => {
                self.create_post(&post.text, post.image_url, &author).is_some()
            }
            Action::ToggleLike { post_id } => self.toggle_like(&post_id),
            Action::AddComment {
                post_id,
                comment,
                author,
            } => self.add_comment(&post_id, &comment.text, &author).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::UserId, seed, FixedClock, SequentialIds};

    type TestStore = FeedStore<FixedClock, SequentialIds>;

    fn store(feed: Feed) -> TestStore {
        FeedStore::with_collaborators(
            feed,
            FixedClock(String::from("now")),
            SequentialIds::starting_at(100),
        )
    }

    fn pid(s: &str) -> PostId {
        PostId(String::from(s))
    }

    fn values(feed: &Feed) -> Vec<Post> {
        feed.iter().map(|p| (**p).clone()).collect()
    }

    #[test]
    fn create_post_prepends_a_fresh_post() {
        let mut s = store(seed::initial_feed());
        let before = s.snapshot();
        let me = seed::current_user();
        let p = s.create_post("  hello  ", None, &me).unwrap();
        assert_eq!(s.feed().len(), before.len() + 1);
        assert!(Arc::ptr_eq(&s.feed().posts()[0], &p));
        assert!(!before.contains(&p.id));
        assert_eq!(p.text, "hello");
        assert_eq!(p.author, me);
        assert_eq!(p.timestamp, "now");
        assert_eq!(p.likes, 0);
        assert!(!p.is_liked);
        assert!(p.comments.is_empty());
        assert_eq!(values(&before), values(&seed::initial_feed()));
    }

    #[test]
    fn image_only_post_is_fine() {
        let mut s = store(Feed::default());
        let img = String::from("data:image/png;base64,iVBORw0KGgo=");
        let p = s.create_post("", Some(img.clone()), &User::stub()).unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.image_url, Some(img));
    }

    #[test]
    fn empty_post_is_ignored() {
        let mut s = store(seed::initial_feed());
        let before = s.snapshot();
        assert!(s.create_post(" \n ", None, &User::stub()).is_none());
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn generated_ids_skip_existing_posts() {
        let mut s = FeedStore::with_collaborators(
            seed::initial_feed(),
            FixedClock(String::from("now")),
            SequentialIds::starting_at(1),
        );
        let p = s.create_post("x", None, &User::stub()).unwrap();
        assert_eq!(p.id, pid("post-3"));
        let c = s.add_comment(&pid("post-1"), "y", &User::stub()).unwrap();
        assert_eq!(c.id, CommentId(String::from("comment-4")));
    }

    #[test]
    fn toggle_like_twice_restores_the_post() {
        let mut s = store(seed::initial_feed());
        let before = s.snapshot();
        for id in ["post-1", "post-2"] {
            assert!(s.toggle_like(&pid(id)));
            assert_ne!(s.feed().get(&pid(id)), before.get(&pid(id)));
            assert!(s.toggle_like(&pid(id)));
            assert_eq!(s.feed().get(&pid(id)), before.get(&pid(id)));
        }
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn toggle_like_twice_restores_a_loaded_post_with_one_like() {
        let mut posts = seed::initial_posts();
        posts[1].likes = 1;
        let json = serde_json::to_string(&posts).unwrap();
        let mut s = store(serde_json::from_str(&json).unwrap());
        let before = s.snapshot();
        assert!(s.toggle_like(&pid("post-2")));
        let p2 = s.feed().get(&pid("post-2")).unwrap();
        assert_eq!((p2.likes, p2.is_liked), (0, false));
        assert!(s.toggle_like(&pid("post-2")));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn toggle_like_only_replaces_one_post() {
        let mut s = store(seed::initial_feed());
        let before = s.snapshot();
        s.toggle_like(&pid("post-2"));
        let after = s.snapshot();
        assert!(Arc::ptr_eq(&before.posts()[0], &after.posts()[0]));
        assert_eq!(after.posts()[1].likes, 31);
        assert!(!after.posts()[1].is_liked);
        assert_eq!(before.posts()[1].likes, 32);
        assert!(before.posts()[1].is_liked);
    }

    #[test]
    fn add_comment_appends_to_one_post() {
        let mut s = store(seed::initial_feed());
        let before = s.snapshot();
        let me = seed::current_user();
        let c = s.add_comment(&pid("post-2"), " +1 ", &me).unwrap();
        assert_eq!(c.text, "+1");
        assert_eq!(c.author, me);
        assert_eq!(c.timestamp, "now");
        let after = s.feed().get(&pid("post-2")).unwrap();
        let old = before.get(&pid("post-2")).unwrap();
        assert_eq!(after.comments.len(), old.comments.len() + 1);
        assert_eq!(after.comments[..old.comments.len()], old.comments[..]);
        assert_eq!(after.comments.last(), Some(&c));
        assert!(Arc::ptr_eq(
            s.feed().get(&pid("post-1")).unwrap(),
            before.get(&pid("post-1")).unwrap()
        ));
    }

    #[test]
    fn blank_comment_is_ignored() {
        let mut s = store(seed::initial_feed());
        let before = s.snapshot();
        assert!(s.add_comment(&pid("post-1"), "   ", &User::stub()).is_none());
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn unknown_post_ids_are_noops() {
        let mut s = store(seed::initial_feed());
        let before = s.snapshot();
        assert!(!s.toggle_like(&pid("nonexistent-id")));
        assert!(s
            .add_comment(&pid("nonexistent-id"), "x", &User::stub())
            .is_none());
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut s = store(seed::initial_feed());
        let me = seed::current_user();
        assert!(s.apply(Action::ToggleLike {
            post_id: pid("post-1")
        }));
        assert!(s.apply(Action::AddComment {
            post_id: pid("post-1"),
            comment: NewComment::new("ok"),
            author: me.clone(),
        }));
        assert!(s.apply(Action::CreatePost {
            post: NewPost::new("hi", None),
            author: me.clone(),
        }));
        assert!(!s.apply(Action::CreatePost {
            post: NewPost::new("", None),
            author: me,
        }));
        assert!(!s.apply(Action::ToggleLike {
            post_id: pid("gone")
        }));
        assert_eq!(s.feed().len(), 3);
    }

    #[test]
    fn end_to_end() {
        let mut posts = seed::initial_posts();
        posts.truncate(1);
        let mut s = store(Feed::new(posts));
        let u = User {
            id: UserId(String::from("user-9")),
            name: String::from("U"),
            avatar_url: String::from("https://example.org/u.png"),
        };

        assert!(s.toggle_like(&pid("post-1")));
        let p1 = s.feed().get(&pid("post-1")).unwrap();
        assert!(p1.is_liked);
        assert_eq!(p1.likes, 16);

        s.add_comment(&pid("post-1"), "رائع", &u).unwrap();
        let p1 = s.feed().get(&pid("post-1")).unwrap();
        assert_eq!(p1.comments.len(), 2);
        let last = p1.comments.last().unwrap();
        assert_eq!(last.text, "رائع");
        assert_eq!(last.author, u);

        let new = s.create_post("منشور جديد", None, &u).unwrap();
        let feed = s.snapshot();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.posts()[0], new);
        assert_eq!(feed.posts()[1].id, pid("post-1"));
        assert_eq!(new.likes, 0);
    }

    #[test]
    fn random_action_sequences_keep_invariants() {
        bolero::check!()
            .with_type::<Vec<(u8, u8)>>()
            .cloned()
            .for_each(|ops| {
                let mut s = store(seed::initial_feed());
                let initial = seed::initial_feed();
                let me = seed::current_user();
                let mut snapshots = vec![(s.snapshot(), values(s.feed()))];
                for (op, target) in ops {
                    let ids = s.feed().iter().map(|p| p.id.clone()).collect::<Vec<_>>();
                    let id = match (target as usize) < ids.len() {
                        true => ids[target as usize].clone(),
                        false => pid("missing"),
                    };
                    match op % 4 {
                        0 => {
                            s.create_post(&format!("post {target}"), None, &me);
                        }
                        1 | 2 => {
                            s.toggle_like(&id);
                        }
                        _ => {
                            s.add_comment(&id, "c", &me);
                        }
                    }
                    snapshots.push((s.snapshot(), values(s.feed())));
                }

                // likes only ever move with is_liked
                for p in s.feed() {
                    let (likes, liked) = initial
                        .get(&p.id)
                        .map(|o| (o.likes, o.is_liked))
                        .unwrap_or((0, false));
                    assert_eq!(
                        p.likes as i64 - likes as i64,
                        p.is_liked as i64 - liked as i64,
                    );
                }

                // ids stay unique
                let mut ids = s.feed().iter().map(|p| &p.id).collect::<Vec<_>>();
                let n = ids.len();
                ids.sort_by(|a, b| a.0.cmp(&b.0));
                ids.dedup();
                assert_eq!(ids.len(), n);

                // old snapshots never moved
                for (snap, vals) in snapshots {
                    assert_eq!(values(&snap), vals);
                }
            });
    }
}

use std::sync::Arc;

use crate::api::{Error, Post, PostId};

/// Snapshot of every post the viewer can see, newest first
///
/// Cloning is cheap. Mutating methods go through `Arc::make_mut`, so any
/// clone taken before a change keeps its old contents, and posts the change
/// did not touch remain shared (`Arc::ptr_eq`) between the two snapshots.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "Vec<Post>", into = "Vec<Post>")]
pub struct Feed {
    posts: Arc<Vec<Arc<Post>>>,
}

impl Feed {
    /// Panics if two posts share an id
    pub(crate) fn new(posts: Vec<Post>) -> Feed {
        let mut res = Feed::default();
        for p in posts.into_iter().rev() {
            res.prepend(p);
        }
        res
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn posts(&self) -> &[Arc<Post>] {
        &self.posts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Post>> {
        self.posts.iter()
    }

    pub fn get(&self, id: &PostId) -> Option<&Arc<Post>> {
        self.posts.iter().find(|p| p.id == *id)
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.get(id).is_some()
    }

    /// Panics if a post with the same id is already in the feed
    pub(crate) fn prepend(&mut self, post: Post) -> Arc<Post> {
        assert!(
            !self.contains(&post.id),
            "inserting post {:?} that is already in the feed",
            post.id
        );
        let post = Arc::new(post);
        Arc::make_mut(&mut self.posts).insert(0, post.clone());
        post
    }

    /// Runs `f` on a private copy of post `id`, returns `None` if there is no
    /// such post
    pub(crate) fn update_post<R>(&mut self, id: &PostId, f: impl FnOnce(&mut Post) -> R) -> Option<R> {
        let idx = self.posts.iter().position(|p| p.id == *id)?;
        let posts = Arc::make_mut(&mut self.posts);
        Some(f(Arc::make_mut(&mut posts[idx])))
    }
}

impl TryFrom<Vec<Post>> for Feed {
    type Error = Error;

    fn try_from(posts: Vec<Post>) -> Result<Feed, Error> {
        for (i, p) in posts.iter().enumerate() {
            if posts[..i].iter().any(|q| q.id == p.id) {
                return Err(Error::DuplicatePost(p.id.0.clone()));
            }
            if p.is_liked && p.likes == 0 {
                return Err(Error::InconsistentLikes(p.id.0.clone()));
            }
        }
        Ok(Feed::new(posts))
    }
}

impl From<Feed> for Vec<Post> {
    fn from(feed: Feed) -> Vec<Post> {
        feed.posts.iter().map(|p| (**p).clone()).collect()
    }
}

impl<'a> IntoIterator for &'a Feed {
    type Item = &'a Arc<Post>;
    type IntoIter = std::slice::Iter<'a, Arc<Post>>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

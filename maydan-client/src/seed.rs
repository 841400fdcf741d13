//! Demo content the feed starts with

use crate::{
    api::{Comment, CommentId, Post, PostId, User, UserId},
    Feed,
};

fn user(id: &str, name: &str, picture: u32) -> User {
    User {
        id: UserId(String::from(id)),
        name: String::from(name),
        avatar_url: format!("https://picsum.photos/id/{picture}/100/100"),
    }
}

fn comment(id: &str, text: &str, author: User, timestamp: &str) -> Comment {
    Comment {
        id: CommentId(String::from(id)),
        text: String::from(text),
        author,
        timestamp: String::from(timestamp),
    }
}

/// The person looking at the feed
pub fn current_user() -> User {
    user("user-0", "أنت", 1005)
}

pub fn initial_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId(String::from("post-1")),
            text: String::from(
                "مرحباً بكم في ميدان! منصة جديدة للتعبير ومشاركة الأفكار. أتمنى أن ينال إعجابكم.",
            ),
            image_url: Some(String::from("https://picsum.photos/id/10/800/600")),
            author: user("user-1", "علي محمد", 1011),
            timestamp: String::from("منذ 5 دقائق"),
            likes: 15,
            is_liked: false,
            comments: vec![comment(
                "comment-1",
                "فكرة رائعة! بالتوفيق.",
                user("user-2", "فاطمة الزهراء", 1027),
                "منذ 3 دقائق",
            )],
        },
        Post {
            id: PostId(String::from("post-2")),
            text: String::from("ما هو أفضل كتاب قرأتموه هذا العام؟ أبحث عن توصيات جديدة."),
            image_url: None,
            author: user("user-3", "خالد عبد الله", 1012),
            timestamp: String::from("منذ ساعتين"),
            likes: 32,
            is_liked: true,
            comments: vec![
                comment(
                    "comment-2",
                    "أنصحك بكتاب \"فن اللامبالاة\".",
                    user("user-4", "سارة أحمد", 1025),
                    "منذ ساعة",
                ),
                comment(
                    "comment-3",
                    "ثلاثية غرناطة لرضوى عاشور، عمل خالد.",
                    user("user-1", "علي محمد", 1011),
                    "منذ 30 دقيقة",
                ),
            ],
        },
    ]
}

pub fn initial_feed() -> Feed {
    Feed::new(initial_posts())
}

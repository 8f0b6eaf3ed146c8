use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::document::{Identified, Versioned};

/// Name shown on posts whose author deleted their account.
pub const DELETED_AUTHOR_NAME: &str = "[deleted]";

/// One like per user: the user id doubles as the entry id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: Uuid,
}

impl Identified for Like {
    fn id(&self) -> Uuid {
        self.user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar_url: String,
    pub date: DateTime<Utc>,
}

impl Identified for Comment {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar_url: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub version: i64,
}

impl Post {
    pub fn likes_mut(&mut self) -> &mut Vec<Like> {
        &mut self.likes
    }

    pub fn comments_mut(&mut self) -> &mut Vec<Comment> {
        &mut self.comments
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Rewrites name and avatar on every comment by `user_id`, returning how many changed.
    pub fn rename_commenter(&mut self, user_id: Uuid, name: &str, avatar_url: &str) -> u64 {
        let mut renamed = 0;
        for comment in self.comments.iter_mut().filter(|c| c.user_id == user_id) {
            comment.name = name.to_string();
            comment.avatar_url = avatar_url.to_string();
            renamed += 1;
        }
        renamed
    }
}

impl Versioned for Post {
    fn version(&self) -> i64 {
        self.version
    }
}

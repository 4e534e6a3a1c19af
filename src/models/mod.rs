use serde::Deserialize;

/// Title and content of the post form. Absent fields decode as empty strings.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PostDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub created: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentView {
    pub id: String,
    #[serde(default)]
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub created: String,

    /// Server decides whether the viewer owns this comment.
    #[serde(default)]
    pub can_edit: bool,
}

/// Everything the server embeds under `window.PAGE`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PageData {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub post: Option<PostView>,

    /// Front page listing.
    #[serde(default)]
    pub posts: Vec<PostView>,
    #[serde(default)]
    pub comments: Vec<CommentView>,
    #[serde(default)]
    pub draft: PostDraft,

    /// Validation message from the last submission, if any.
    #[serde(default)]
    pub error: Option<String>,
}

impl PostDraft {
    /// Edit form prefilled with the stored post.
    pub fn from_post(post: &PostView) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }
}

impl PageData {
    /// True when the signed-in user wrote the current post.
    pub fn owns_post(&self) -> bool {
        match (&self.username, &self.post) {
            (Some(user), Some(post)) => !user.is_empty() && *user == post.author,
            _ => false,
        }
    }

    /// Front page order: newest `created` first. Timestamps are ISO-8601, so
    /// string order is time order; ties keep server order.
    pub fn posts_newest_first(&self) -> Vec<PostView> {
        let mut posts = self.posts.clone();
        posts.sort_by(|a, b| b.created.cmp(&a.created));
        posts
    }
}

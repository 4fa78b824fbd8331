//! Human-readable rendering of bookmarks.

use crate::error::AppError;
use crate::filter::{apply_filters, FilterSpec};
use crate::models::Bookmark;
use crate::platform::PostLookup;
use crate::store::{Bookmarks, Labels};

/// Marker prefixed to listings whose title is derived from the post message.
pub const TITLE_FROM_POST_MARKER: &str = "`TitleFromPost`";

/// Message shown when a listing has nothing to render.
pub const EMPTY_LIST_MESSAGE: &str = "You do not have any saved bookmarks";

/// Renders bookmarks into one-line and detailed text.
///
/// Rendering never mutates state. Post lookups can fail; single-bookmark
/// renderers propagate that failure, while [`Renderer::list_text`] degrades
/// the affected line instead of aborting the whole listing.
pub struct Renderer<'a> {
    posts: &'a dyn PostLookup,
    site_url: String,
}

impl<'a> Renderer<'a> {
    /// Build a renderer over the given post lookup and site base URL.
    pub fn new(posts: &'a dyn PostLookup, site_url: impl Into<String>) -> Self {
        Self {
            posts,
            site_url: site_url.into(),
        }
    }

    /// One-line bookmark text: icon link, code-quoted labels, then title.
    ///
    /// User titles render bold-italic. Without a user title the post message
    /// stands in and the line carries [`TITLE_FROM_POST_MARKER`].
    ///
    /// # Errors
    /// Propagates a post-lookup failure.
    pub fn one_line_text(
        &self,
        bookmark: &Bookmark,
        label_names: &[String],
    ) -> Result<String, AppError> {
        let post = self.posts.get_post(&bookmark.post_id)?;
        let mut code_blocked = code_blocked_labels(label_names);

        let title = if bookmark.has_user_title() {
            format!("**_{}_**", bookmark.title)
        } else {
            code_blocked = format!(" {}{}", TITLE_FROM_POST_MARKER, code_blocked);
            post.message
        };

        Ok(format!(
            "{}{} {}\n",
            self.icon_link(&bookmark.post_id),
            code_blocked,
            title
        ))
    }

    /// Multi-line bookmark text with label list, title, and post message.
    ///
    /// # Errors
    /// Propagates a post-lookup failure.
    pub fn detailed_text(
        &self,
        bookmark: &Bookmark,
        label_names: &[String],
    ) -> Result<String, AppError> {
        let post = self.posts.get_post(&bookmark.post_id)?;

        let title = if bookmark.has_user_title() {
            bookmark.title.clone()
        } else {
            post.message.clone()
        };

        let mut text = format!(
            "{}\n#### Bookmark Title {}\n",
            code_blocked_labels(label_names),
            self.icon_link(&bookmark.post_id)
        );
        text += &format!("**{}**\n", title);
        text += "##### Post Message \n";
        text += &post.message;

        Ok(text)
    }

    /// Markdown icon link deep-linking to the bookmarked post.
    pub fn icon_link(&self, post_id: &str) -> String {
        format!("[:link:]({})", perma_link(&self.site_url, post_id))
    }

    /// Full listing text: legend, section header, one line per bookmark.
    ///
    /// Lines are ordered by the referenced post's creation time; bookmarks
    /// whose post cannot be resolved sort last and render a placeholder line
    /// instead of failing the listing. With `filters` supplied, only matching
    /// bookmarks are listed.
    ///
    /// # Errors
    /// Returns an error only for an invalid filter pattern.
    pub fn list_text(
        &self,
        bookmarks: &Bookmarks<'_>,
        labels: &Labels<'_>,
        filters: Option<&FilterSpec>,
    ) -> Result<String, AppError> {
        let selected: Vec<Bookmark> = match filters {
            Some(spec) => apply_filters(bookmarks, labels, spec)?,
            None => bookmarks.iter().cloned().collect(),
        };

        if selected.is_empty() {
            return Ok(EMPTY_LIST_MESSAGE.to_string());
        }

        let mut keyed: Vec<(i64, Bookmark)> = selected
            .into_iter()
            .map(|bmark| {
                let key = self
                    .posts
                    .get_post(&bmark.post_id)
                    .map(|post| post.create_at)
                    .unwrap_or(i64::MAX);
                (key, bmark)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.post_id.cmp(&b.1.post_id)));

        let mut text = legend_text();
        text += "#### Bookmarks\n";
        for (_, bmark) in keyed {
            let names = labels.names_for(&bmark);
            match self.one_line_text(&bmark, &names) {
                Ok(line) => text += &line,
                Err(_) => {
                    text += &format!(
                        "{} _unable to load post message_\n",
                        self.icon_link(&bmark.post_id)
                    );
                }
            }
        }

        Ok(text)
    }
}

/// Deep link to a post under the configured site URL.
fn perma_link(site_url: &str, post_id: &str) -> String {
    format!("{}/_redirect/pl/{}", site_url, post_id)
}

/// Lexicographically sorted, individually code-quoted label names.
///
/// Each name is prefixed with a space, so the result drops straight into the
/// one-line layout.
pub fn code_blocked_labels(names: &[String]) -> String {
    let mut sorted = names.to_vec();
    sorted.sort();
    sorted
        .iter()
        .map(|name| format!(" `{}`", name))
        .collect::<String>()
}

/// Legend preceding full listings.
pub fn legend_text() -> String {
    format!(
        "*Legend*: [:link:] opens the post | labels appear `code-quoted` | {} marks a title taken from the post message\n",
        TITLE_FROM_POST_MARKER
    )
}

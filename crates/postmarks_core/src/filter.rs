//! Pure filtering of bookmark collections.

use crate::error::AppError;
use crate::models::Bookmark;
use crate::store::{Bookmarks, Labels};
use regex::Regex;

/// Criteria for narrowing a bookmark collection.
///
/// Empty fields are absent criteria. Each non-empty criterion is an
/// independent gate a bookmark must pass; within a criterion's own set the
/// semantics are OR. A spec with no criteria at all matches nothing, which
/// keeps "filter by nothing" distinct from "view all" at the call site.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Regular expression searched against the user-supplied title.
    pub title_text: String,
    /// Label ids; a bookmark passes when it carries any of them.
    pub label_ids: Vec<String>,
    /// Label names; a bookmark passes when any of its labels resolves to one.
    pub label_names: Vec<String>,
}

impl FilterSpec {
    /// Whether no criteria were supplied.
    pub fn is_empty(&self) -> bool {
        self.title_text.is_empty() && self.label_ids.is_empty() && self.label_names.is_empty()
    }
}

/// Apply `filters` to a bookmark collection.
///
/// Referentially transparent: no persistence, no mutation, and identical
/// inputs always produce the identical result. Output is sorted by post id
/// purely for deterministic ordering.
///
/// A bookmark with an empty title never matches a non-empty title pattern;
/// the pattern is searched against the stored title only, never against a
/// derived display title.
///
/// # Errors
/// Returns [`AppError::Pattern`] when the title pattern is not a valid
/// regular expression.
pub fn apply_filters(
    bookmarks: &Bookmarks<'_>,
    labels: &Labels<'_>,
    filters: &FilterSpec,
) -> Result<Vec<Bookmark>, AppError> {
    if filters.is_empty() {
        return Ok(Vec::new());
    }

    let title_re = if filters.title_text.is_empty() {
        None
    } else {
        Some(Regex::new(&filters.title_text)?)
    };

    let mut matched = Vec::new();
    for bmark in bookmarks.iter() {
        if !filters.label_ids.is_empty()
            && !bmark
                .label_ids
                .iter()
                .any(|id| filters.label_ids.contains(id))
        {
            continue;
        }

        if !filters.label_names.is_empty() {
            let any_name = bmark.label_ids.iter().any(|id| {
                let name = labels.name_of(id);
                !name.is_empty() && filters.label_names.contains(&name)
            });
            if !any_name {
                continue;
            }
        }

        if let Some(re) = &title_re {
            if bmark.title.is_empty() || !re.is_match(&bmark.title) {
                continue;
            }
        }

        matched.push(bmark.clone());
    }

    matched.sort_by(|a, b| a.post_id.cmp(&b.post_id));
    Ok(matched)
}

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A URL, either as originally captured or in normalised form.
pub type Url = String;

/// Free-form label attached to a visit for categorization and search.
pub type Tag = String;

/// Whole seconds, as reported by the capture side.
pub type Second = u64;

/// Point in time a visit was recorded, on the browser's local clock.
pub type Dt = DateTime<Local>;

/// A displayable reference to a point of interest on or about a page,
/// such as a heading or an anchor. The link target may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub title: String,
    pub href: Option<String>,
}

impl Locator {
    pub fn new(title: impl Into<String>, href: Option<String>) -> Self {
        Self {
            title: title.into(),
            href,
        }
    }
}

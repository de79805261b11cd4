use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::format_dt;
use crate::types::{Dt, Locator, Second, Tag, Url};

/// One recorded browsing event.
///
/// Constructed once by the capture side and read-only everywhere else. Tag
/// order is meaningful for display and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub original_url: Url,
    pub normalised_url: Url,
    pub time: Dt,
    pub tags: Vec<Tag>,
    pub context: Option<String>,
    pub locator: Option<Locator>,
    pub duration: Option<Second>,
}

impl Visit {
    /// Creates a visit with the optional fields absent.
    pub fn new(
        original_url: impl Into<Url>,
        normalised_url: impl Into<Url>,
        time: Dt,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            original_url: original_url.into(),
            normalised_url: normalised_url.into(),
            time,
            tags,
            context: None,
            locator: None,
            duration: None,
        }
    }

    /// Attaches the free-text context captured alongside the visit.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = Some(locator);
        self
    }

    pub fn with_duration(mut self, duration: Second) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Debug form shown in traces: formatted timestamp, one space, then the
/// tags as `[tag1,tag2]`. A pure function of `(time, tags)`.
impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", format_dt(&self.time), self.tags.join(","))
    }
}

/// The visit history for one key, in the order the store supplied it.
///
/// Owns its visits; nothing mutates a visit once it is in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Visits {
    pub visits: Vec<Visit>,
}

impl Visits {
    pub fn new(visits: Vec<Visit>) -> Self {
        Self { visits }
    }

    /// Locators of every visit that carries context, in visit order.
    ///
    /// A visit without context is skipped even when it has a locator, and a
    /// contextful visit without one still yields `None`; the sidebar relies
    /// on both.
    pub fn contexts(&self) -> Vec<Option<&Locator>> {
        self.visits
            .iter()
            .filter(|visit| visit.context.is_some())
            .map(|visit| visit.locator.as_ref())
            .collect()
    }
}

/// Visit histories keyed by normalised URL; ordered map so iteration over
/// the keys is deterministic.
pub type VisitsMap = BTreeMap<Url, Visits>;

/// A URL excluded from tracking, with the rule or source that excluded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blacklisted {
    pub url: Url,
    pub reason: String,
}

impl Blacklisted {
    pub fn new(url: impl Into<Url>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Blacklisted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.url, self.reason)
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Message-type discriminators shared by every page of the extension.
///
/// The wire strings are load-bearing: the background dispatcher and the
/// content scripts match on them verbatim, so they must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Fetch the active tab's visits for the sidebar.
    #[serde(rename = "getActiveTabVisitsForSidebar")]
    GetSidebarVisits,
    /// Search visits around a point in time.
    #[serde(rename = "searchVisitsAround")]
    SearchVisitsAround,
    /// Toggle the per-link indicator dots on the current page.
    #[serde(rename = "showDots")]
    ShowDots,
    /// Open the search UI.
    #[serde(rename = "openSearch")]
    OpenSearch,
}

impl Method {
    /// The exact string carried in a message's `method` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::GetSidebarVisits => "getActiveTabVisitsForSidebar",
            Method::SearchVisitsAround => "searchVisitsAround",
            Method::ShowDots => "showDots",
            Method::OpenSearch => "openSearch",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message `method` string outside the shared vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getActiveTabVisitsForSidebar" => Ok(Method::GetSidebarVisits),
            "searchVisitsAround" => Ok(Method::SearchVisitsAround),
            "showDots" => Ok(Method::ShowDots),
            "openSearch" => Ok(Method::OpenSearch),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

//! Retrace core: shared visit model and formatting helpers.
//!
//! The background page, sidebar and search UI exchange the values defined
//! here; nothing in this crate performs IO.
mod format;
mod method;
mod normalise;
mod require;
mod types;
mod visit;

pub use format::{format_dt, format_duration};
pub use method::{Method, UnknownMethod};
pub use normalise::normalise_url;
pub use require::{require, EmptyValue};
pub use types::{Dt, Locator, Second, Tag, Url};
pub use visit::{Blacklisted, Visit, Visits, VisitsMap};

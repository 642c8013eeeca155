//! Repo-review results for the guide's review page.
//!
//! The review itself runs elsewhere; this crate models its output
//! ([`ReviewReport`]), normalizes its failures ([`ReviewError`]) and renders
//! the results grouped by family ([`render_report`]).

mod error;
mod families;
mod model;
mod view;

pub use error::ReviewError;
pub use families::default_families;
pub use model::{CheckResult, CheckState, Family, FamilyResults, RepoTarget, ReviewReport};
pub use view::{render_error, render_report};

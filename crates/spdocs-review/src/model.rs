//! Review results as produced by a repo-review run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::ReviewError;

/// Display metadata of a check family.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Family {
    /// Display name; the family key when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sort order; lower first.
    pub order: i32,
    /// Markdown notes about the repository, e.g. the detected build backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Outcome of one check.
///
/// Serialized as `true`, `false` or `null` under the `result` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum CheckState {
    Passed,
    Failed,
    Skipped,
}

impl From<Option<bool>> for CheckState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Passed,
            Some(false) => Self::Failed,
            None => Self::Skipped,
        }
    }
}

impl From<CheckState> for Option<bool> {
    fn from(state: CheckState) -> Self {
        match state {
            CheckState::Passed => Some(true),
            CheckState::Failed => Some(false),
            CheckState::Skipped => None,
        }
    }
}

impl CheckState {
    /// Material icon name shown next to the result.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Passed => "check_box",
            Self::Failed => "report",
            Self::Skipped => "info",
        }
    }

    /// CSS modifier for the result row.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Passed => "rr-passed",
            Self::Failed => "rr-failed",
            Self::Skipped => "rr-skipped",
        }
    }
}

/// Result of a single check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check code, e.g. `PY001`.
    pub name: String,
    /// Key of the family the check belongs to.
    pub family: String,
    pub description: String,
    #[serde(rename = "result", default = "skipped")]
    pub state: CheckState,
    /// HTML explaining a failure.
    #[serde(default)]
    pub err_msg: String,
    #[serde(default)]
    pub skip_reason: String,
    /// Documentation link for the check; empty when there is none.
    #[serde(default)]
    pub url: String,
}

fn skipped() -> CheckState {
    CheckState::Skipped
}

/// Families and results of one review run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewReport {
    pub families: BTreeMap<String, Family>,
    /// Results in the order the checks ran.
    pub results: Vec<CheckResult>,
}

/// Results of one family, ready for display.
#[derive(Debug, PartialEq, Eq)]
pub struct FamilyResults<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub results: Vec<&'a CheckResult>,
}

impl ReviewReport {
    /// Parse saved review output.
    ///
    /// The JSON is either a report or `{"error": "..."}` from a failed run;
    /// the latter is classified with [`ReviewError::from_message`].
    ///
    /// # Errors
    ///
    /// Returns the normalized failure, or [`ReviewError::Json`] when the
    /// input is neither shape.
    pub fn from_json(json: &str) -> Result<Self, ReviewError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        // Any `error` key marks a failed run; a non-string message is malformed.
        if let Some(error) = value.get("error") {
            let message = String::deserialize(error)?;
            return Err(ReviewError::from_message(&message));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Results grouped by family in `(order, key)` order.
    ///
    /// Every known family appears, even without results. Results naming an
    /// unknown family are grouped under that key with order 0.
    #[must_use]
    pub fn grouped(&self) -> Vec<FamilyResults<'_>> {
        let mut groups: Vec<(i32, FamilyResults<'_>)> = self
            .families
            .iter()
            .map(|(key, family)| {
                (
                    family.order,
                    FamilyResults {
                        key,
                        name: family.name.as_deref().unwrap_or(key),
                        description: family.description.as_deref(),
                        results: Vec::new(),
                    },
                )
            })
            .collect();

        for result in &self.results {
            if let Some((_, group)) = groups.iter_mut().find(|(_, g)| g.key == result.family) {
                group.results.push(result);
            } else {
                groups.push((
                    0,
                    FamilyResults {
                        key: &result.family,
                        name: &result.family,
                        description: None,
                        results: vec![result],
                    },
                ));
            }
        }

        groups.sort_by(|(a_order, a), (b_order, b)| a_order.cmp(b_order).then(a.key.cmp(b.key)));
        groups.into_iter().map(|(_, group)| group).collect()
    }
}

/// Repository and branch a review was run against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoTarget {
    /// `org/repo` on GitHub.
    pub repo: String,
    pub branch: String,
}

impl RepoTarget {
    /// Create a target; both parts must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingTarget`] when either part is blank.
    pub fn new(repo: impl Into<String>, branch: impl Into<String>) -> Result<Self, ReviewError> {
        let (repo, branch) = (repo.into(), branch.into());
        if repo.trim().is_empty() || branch.trim().is_empty() {
            return Err(ReviewError::MissingTarget { repo, branch });
        }
        Ok(Self { repo, branch })
    }

    /// Read `repo` and `branch` from a query string.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingTarget`] when either is absent or blank.
    pub fn from_query(query: &str) -> Result<Self, ReviewError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let (mut repo, mut branch) = (String::new(), String::new());
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "repo" => repo = value.into_owned(),
                "branch" => branch = value.into_owned(),
                _ => {}
            }
        }
        Self::new(repo, branch)
    }

    /// Query string that reopens the review for this target.
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("repo", &self.repo)
            .append_pair("branch", &self.branch)
            .finish()
    }
}

impl std::fmt::Display for RepoTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.repo, self.branch)
    }
}

//! Built-in check families.

use std::collections::BTreeMap;

use crate::Family;

/// Families of the guide's checks, keyed by family id.
///
/// General and `PyProject` sort first; the rest keep order 0 and sort by key.
#[must_use]
pub fn default_families() -> BTreeMap<String, Family> {
    [
        ("general", "General", -3),
        ("pyproject", "PyProject", -2),
        ("github", "GitHub Actions", 0),
        ("pre-commit", "Pre-commit", 0),
        ("mypy", "MyPy", 0),
        ("ruff", "Ruff", 0),
        ("docs", "Documentation", 0),
    ]
    .into_iter()
    .map(|(key, name, order)| {
        (
            key.to_owned(),
            Family {
                name: Some(name.to_owned()),
                order,
                description: None,
            },
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReviewReport;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_family_order() {
        let report = ReviewReport {
            families: default_families(),
            results: Vec::new(),
        };
        let names: Vec<String> = report
            .grouped()
            .iter()
            .map(|g| g.name.to_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "General",
                "PyProject",
                "Documentation",
                "GitHub Actions",
                "MyPy",
                "Pre-commit",
                "Ruff"
            ]
        );
    }
}

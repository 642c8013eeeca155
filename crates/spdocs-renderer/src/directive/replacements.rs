//! Batched string replacement over rendered HTML.

/// Collects string replacements and applies them in registration order.
///
/// Used to rewrite the opening tags of rendered blocks after the fact, e.g.
/// when a query string changes which tab starts out visible.
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::Replacements;
///
/// let mut html = r#"<div class="sp-tab" hidden>x</div>"#.to_owned();
/// let mut replacements = Replacements::new();
/// replacements.add(r#"<div class="sp-tab" hidden>"#, r#"<div class="sp-tab">"#);
/// replacements.apply(&mut html);
///
/// assert_eq!(html, r#"<div class="sp-tab">x</div>"#);
/// ```
#[derive(Debug, Default)]
pub struct Replacements {
    items: Vec<(String, String)>,
}

impl Replacements {
    /// Create a new empty replacements collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a replacement: all occurrences of `from` will be replaced with `to`.
    ///
    /// Identical `from`/`to` pairs are ignored.
    pub fn add(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let (from, to) = (from.into(), to.into());
        if from != to {
            self.items.push((from, to));
        }
    }

    /// Apply all registered replacements, consuming the collector.
    pub fn apply(self, html: &mut String) {
        for (from, to) in self.items {
            if html.contains(&from) {
                *html = html.replace(&from, &to);
            }
        }
    }

    /// Check if there are any replacements registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of registered replacements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_replacements() {
        let mut html = "unchanged".to_owned();
        Replacements::new().apply(&mut html);
        assert_eq!(html, "unchanged");
    }

    #[test]
    fn test_noop_pairs_are_dropped() {
        let mut replacements = Replacements::new();
        replacements.add("same", "same");
        replacements.add("a", "b");
        assert_eq!(replacements.len(), 1);
    }

    #[test]
    fn test_replacements_apply_in_order() {
        let mut html = "one two".to_owned();
        let mut replacements = Replacements::new();
        replacements.add("one", "two");
        replacements.add("two", "three");
        replacements.apply(&mut html);
        assert_eq!(html, "three three");
    }
}

//! Code fence tracking.
//!
//! Directive syntax inside fenced code blocks is content, not markup.

/// Tracks code fence state during line-by-line processing.
///
/// Fences use three or more backticks or tildes. A fence closes on a line of
/// the same character that is at least as long as the opening run.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Character and length of the open fence.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the last line left us inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line. Returns `true` if the line opened or closed a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();

        match self.open {
            Some((fence_char, fence_len)) => {
                if is_closing_fence(trimmed, fence_char, fence_len) {
                    self.open = None;
                    return true;
                }
                false
            }
            None => {
                self.open = detect_fence(trimmed);
                self.open.is_some()
            }
        }
    }
}

/// Detect an opening fence; returns its character and length.
fn detect_fence(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }

    let count = trimmed.chars().take_while(|&c| c == first).count();
    (count >= 3).then_some((first, count))
}

/// A closing fence: same character, at least as long, nothing but
/// whitespace after it.
fn is_closing_fence(trimmed: &str, expected: char, min_len: usize) -> bool {
    let count = trimmed.chars().take_while(|&c| c == expected).count();
    count >= min_len && trimmed[count..].chars().all(char::is_whitespace)
}

//! Hero title typing effect and the catalog cursor-follow glow.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

/// Reveals a string one character at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), shown: 0 }
    }

    /// Reveal one more character. Returns the visible prefix, or `None` once
    /// the full text is already shown.
    pub fn tick(&mut self) -> Option<String> {
        if self.shown >= self.chars.len() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

/// Pointer position relative to an element's top-left corner, as CSS
/// `(--mouse-x, --mouse-y)` values.
#[must_use]
pub fn pointer_offset(client: (f64, f64), rect_origin: (f64, f64)) -> (String, String) {
    (format!("{}px", client.0 - rect_origin.0), format!("{}px", client.1 - rect_origin.1))
}

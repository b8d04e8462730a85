//! Stat counter animation.
//!
//! A stat reads like `150` or `150+`. Once visible it counts up from zero in
//! [`COUNTER_STEPS`] equal increments, one per tick, showing the floored
//! running value with the suffix preserved. The final frame shows the exact
//! target text and the animation reports itself done.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::COUNTER_STEPS;
use crate::error::FolioError;

/// Parsed stat text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub plus: bool,
}

impl CounterTarget {
    /// Parse stat text, stripping a single trailing `+`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidCounter`] if the remaining text is not a
    /// non-negative integer.
    pub fn parse(text: &str) -> Result<Self, FolioError> {
        let trimmed = text.trim();
        let (digits, plus) = match trimmed.strip_suffix('+') {
            Some(rest) => (rest.trim_end(), true),
            None => (trimmed, false),
        };
        let value = digits
            .parse::<u64>()
            .map_err(|_| FolioError::InvalidCounter(text.to_owned()))?;
        Ok(Self { value, plus })
    }

    /// Display text for `value` with this target's suffix.
    #[must_use]
    pub fn render(self, value: u64) -> String {
        if self.plus { format!("{value}+") } else { value.to_string() }
    }
}

/// One rendered frame of a counter animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Running counter state, advanced by [`CounterAnimation::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: CounterTarget,
    current: f64,
    increment: f64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: CounterTarget) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let increment = target.value as f64 / COUNTER_STEPS;
        Self { target, current: 0.0, increment }
    }

    #[must_use]
    pub fn target(&self) -> CounterTarget {
        self.target
    }

    /// Advance one step and return the text to display.
    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        #[allow(clippy::cast_precision_loss)]
        let final_value = self.target.value as f64;
        if self.current >= final_value {
            return CounterFrame { text: self.target.render(self.target.value), done: true };
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shown = self.current.floor() as u64;
        CounterFrame { text: self.target.render(shown.min(self.target.value)), done: false }
    }
}

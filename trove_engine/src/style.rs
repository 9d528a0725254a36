//! Terminal styling helpers.
//!
//! [`GameStyle`] wraps the `colored` crate behind named styles so call sites
//! say what a string *is* (a hunter, an item, a gold amount) rather than
//! picking colors inline. Implemented for `&str` and `String` so literals can
//! be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn hunter_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn gold_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn hunter_style(&self) -> ColoredString {
        self.truecolor(95, 175, 220)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(190, 150, 90)
    }
    fn gold_style(&self) -> ColoredString {
        self.truecolor(235, 195, 50).bold()
    }
}

impl GameStyle for String {
    fn hunter_style(&self) -> ColoredString {
        self.as_str().hunter_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn gold_style(&self) -> ColoredString {
        self.as_str().gold_style()
    }
}

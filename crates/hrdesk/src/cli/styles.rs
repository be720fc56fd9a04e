//! Terminal styles.
//!
//! `console` drops the escape codes when stdout is not a terminal, so piped
//! output and tests see plain text.

use console::Style;

pub fn header() -> Style {
    Style::new().bold()
}

pub fn muted() -> Style {
    Style::new().dim()
}

pub fn warning() -> Style {
    Style::new().yellow()
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn locked() -> Style {
    Style::new().dim().italic()
}

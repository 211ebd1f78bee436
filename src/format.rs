//! Display helpers: pure value formatting plus a decorated terminal writer.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};

const DIVIDER_WIDTH: usize = 50;

/// Turns an ISO-8601 duration such as `PT1H30M` into a short phrase.
///
/// Only the hour and minute components are shown; seconds are dropped.
/// Input without a `PT` marker is returned unchanged.
///
/// ```
/// use recipe_api_cli::format::format_duration;
///
/// assert_eq!(format_duration("PT1H30M"), "1h 30m");
/// assert_eq!(format_duration("PT45M"), "45 min");
/// ```
pub fn format_duration(iso_duration: &str) -> String {
    let Some(start) = iso_duration.find("PT") else {
        return iso_duration.to_string();
    };
    let mut rest = &iso_duration[start + 2..];

    let hours = take_component(&mut rest, 'H').unwrap_or(0);
    let minutes = take_component(&mut rest, 'M').unwrap_or(0);

    match (hours, minutes) {
        (0, 0) => "instant".to_string(),
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Consumes `<digits><designator>` from the front of `rest` if present.
fn take_component(rest: &mut &str, designator: char) -> Option<u64> {
    let s = *rest;
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 || !s[end..].starts_with(designator) {
        return None;
    }

    let value = s[..end].parse().unwrap_or(u64::MAX);
    *rest = &s[end + designator.len_utf8()..];
    Some(value)
}

/// Shortens `text` to at most `max_length` characters, ending in `...`.
///
/// Below three characters only the dots that fit are kept.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    if max_length < 3 {
        return ".".repeat(max_length);
    }

    let mut out: String = text.chars().take(max_length.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Formats an integer with `,` thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rounds to a whole number for display (`12.5` → `13`).
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Bar proportional to a cuisine's recipe count, one block per 20 recipes,
/// capped at 20 blocks.
pub fn cuisine_bar(count: u64) -> String {
    "█".repeat((count / 20).min(20) as usize)
}

/// Writes decorated lines to an output stream and an error stream.
///
/// Commands render everything through this so their output can be captured
/// in tests. Styling goes through `colored`, which also honors `NO_COLOR`
/// and drops colors when stdout is not a terminal.
pub struct Terminal<W: Write, E: Write> {
    out: W,
    err: E,
    color: bool,
}

impl Terminal<io::Stdout, io::Stderr> {
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<W: Write, E: Write> Terminal<W, E> {
    pub fn new(out: W, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn error_line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.err, "{}", text.as_ref())
    }

    pub fn header(&mut self, text: &str) -> io::Result<()> {
        let title = self.paint(&format!("=== {} ===", text), |t| t.cyan().bold());
        writeln!(self.out, "\n{}\n", title)
    }

    pub fn subheader(&mut self, text: &str) -> io::Result<()> {
        let text = self.paint(text, |t| t.bold());
        writeln!(self.out, "{}", text)
    }

    pub fn label(&mut self, name: &str, value: impl std::fmt::Display) -> io::Result<()> {
        let name = self.paint(&format!("{}:", name), |t| t.dimmed());
        writeln!(self.out, "  {} {}", name, value)
    }

    pub fn list_item(&mut self, text: &str, indent: usize) -> io::Result<()> {
        let bullet = self.paint("*", |t| t.green());
        writeln!(self.out, "{}{} {}", "  ".repeat(indent), bullet, text)
    }

    pub fn divider(&mut self) -> io::Result<()> {
        let rule = self.paint(&"─".repeat(DIVIDER_WIDTH), |t| t.dimmed());
        writeln!(self.out, "{}", rule)
    }

    pub fn highlight(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        let text = self.paint(text, |t| t.yellow());
        writeln!(self.out, "{}", text)
    }
}

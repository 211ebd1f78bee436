//! `--key=value` flag parsing.
//!
//! Commands take loose flags rather than a fixed grammar: anything that does
//! not start with `--` is ignored, `--key` on its own means `"true"`, and a
//! repeated key keeps its last value.

/// Flat, insertion-ordered mapping of flag name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    entries: Vec<(String, String)>,
}

impl ArgMap {
    /// Parses command-line tokens (without the program name).
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = Self::default();

        for token in tokens {
            let Some(flag) = token.as_ref().strip_prefix("--") else {
                continue;
            };

            let (key, value) = match flag.split_once('=') {
                Some((key, value)) if !value.is_empty() => (key, value),
                Some((key, _)) => (key, "true"),
                None => (flag, "true"),
            };

            args.insert(key, value);
        }

        args
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Reads the leading integer of a value, so `"12abc"` gives 12 and
    /// `"abc"` gives `None`.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(leading_int)
    }

    /// Page-style number: missing, unparsable, zero or negative falls back
    /// to `default`.
    pub fn page_or(&self, key: &str, default: u32) -> u32 {
        self.get_int(key)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

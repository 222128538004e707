use std::collections::HashMap;

/// Key holding the build variant (e.g. `bios-x86`).
pub const VARIANT_KEY: &str = "CONFIG";

/// Key holding the cross-toolchain prefix (e.g. `x86_64-elf-`).
pub const PREFIX_KEY: &str = "CROSS_COMPILE";

/// Values read from the build system's `.options.cache`.
///
/// The file is a list of Python-style `NAME = value` assignments. Quoted
/// values are unquoted; bare values are kept as written. Lines that are not
/// assignments are ignored, and a later assignment overrides an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsCache {
    values: HashMap<String, String>,
}

impl OptionsCache {
    pub fn parse(text: &str) -> Self {
        let values = text.lines().filter_map(parse_assignment).collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn variant(&self) -> Option<&str> {
        self.get(VARIANT_KEY)
    }

    pub fn cross_compile(&self) -> Option<&str> {
        self.get(PREFIX_KEY)
    }
}

fn parse_assignment(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (name, value) = line.split_once('=')?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            return inner;
        }
    }
    value
}

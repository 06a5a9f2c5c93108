//! # Name Format Conversion
//!
//! Converts between the store's member naming convention (usually camelCase,
//! sometimes with module paths or underscores mixed in) and the wire
//! channel's naming convention. All functions are pure and total over
//! strings; empty input yields empty output.

use super::errors::BindError;

/// Normalize a name for matching: strip every non-alphanumeric character
/// (underscores included) and lowercase the remainder.
///
/// `"module/socketOn_Message"` → `"modulesocketonmessage"`. Idempotent.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Replace each non-alphanumeric character with a space and split camel/Pascal
/// runs by inserting a space between a lowercase letter and the uppercase
/// letter that follows it.
///
/// Consecutive separators produce consecutive spaces; collapsing is left to
/// the downstream converters.
pub fn to_space_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if !c.is_alphanumeric() {
            out.push(' ');
            prev_lower = false;
            continue;
        }
        if prev_lower && c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
        prev_lower = c.is_lowercase();
    }
    out
}

/// `SCREAMING_SNAKE` form: space-case, whitespace runs collapsed to a single
/// underscore, trimmed, uppercased.
pub fn to_upper_snake(s: &str) -> String {
    snake(s).to_uppercase()
}

/// `lower_snake` form.
pub fn to_lower_snake(s: &str) -> String {
    snake(s).to_lowercase()
}

fn snake(s: &str) -> String {
    let spaced = to_space_case(s);
    let mut out = String::with_capacity(spaced.len());
    for token in spaced.split_whitespace() {
        if !out.is_empty() {
            out.push('_');
        }
        out.push_str(token);
    }
    out
}

/// `PascalCase` form: space-case, each token title-cased, concatenated.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for token in to_space_case(s).split_whitespace() {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

/// `camelCase` form: Pascal with the very first character lowercased.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}

/// The formatter registry: maps a configuration key to a wire-name converter.
///
/// An unknown key is a caller configuration error and fails fast at binder
/// construction; there is no silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelFormat {
    CamelCase,
    PascalCase,
    UppSnakeCase,
    LowSnakeCase,
}

impl ChannelFormat {
    /// Resolve a configuration key to a formatter.
    pub fn from_key(key: &str) -> Result<Self, BindError> {
        match key {
            "CamelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "UppSnakeCase" => Ok(Self::UppSnakeCase),
            "LowSnakeCase" => Ok(Self::LowSnakeCase),
            _ => Err(BindError::UnknownFormat {
                key: key.to_string(),
            }),
        }
    }

    /// The configuration key this formatter is registered under.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CamelCase => "CamelCase",
            Self::PascalCase => "PascalCase",
            Self::UppSnakeCase => "UppSnakeCase",
            Self::LowSnakeCase => "LowSnakeCase",
        }
    }

    /// Convert a bare channel name to the wire format.
    #[must_use]
    pub fn apply(&self, s: &str) -> String {
        match self {
            Self::CamelCase => to_camel_case(s),
            Self::PascalCase => to_pascal_case(s),
            Self::UppSnakeCase => to_upper_snake(s),
            Self::LowSnakeCase => to_lower_snake(s),
        }
    }
}

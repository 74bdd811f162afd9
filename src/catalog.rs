//! Bilingual display strings for attribute keys, category names and UI text.
//!
//! The tables are immutable process-wide statics built on first use. Every
//! lookup is permissive: unknown keys fall back to a readable rendering
//! instead of failing.

mod tables;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Deserialize;

use tables::{ATTRIBUTES, CATEGORIES, UI_STRINGS, WELCOME_EN, WELCOME_ZH};

/// A supported display language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Parse a language code. Anything unrecognized selects English.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" | "zh-hans" | "chinese" | "中文" => Locale::Zh,
            _ => Locale::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// The next locale in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }

    fn index(self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Zh => 1,
        }
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Locale::parse(&code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

type Table = HashMap<&'static str, &'static str>;

fn build(rows: &'static [(&'static str, &'static str, &'static str)]) -> [Table; 2] {
    let mut en = HashMap::with_capacity(rows.len());
    let mut zh = HashMap::with_capacity(rows.len());
    for &(key, en_text, zh_text) in rows {
        en.insert(key, en_text);
        zh.insert(key, zh_text);
    }
    [en, zh]
}

static ATTRIBUTE_TABLES: LazyLock<[Table; 2]> = LazyLock::new(|| build(ATTRIBUTES));
static CATEGORY_TABLES: LazyLock<[Table; 2]> = LazyLock::new(|| build(CATEGORIES));
static UI_TABLES: LazyLock<[Table; 2]> = LazyLock::new(|| build(UI_STRINGS));

/// Display name of an attribute key in `locale`.
///
/// Keys without an entry are rendered mechanically: separators become spaces
/// and every word is title-cased (`custom_tag` -> `Custom Tag`).
pub fn translate_attribute(key: &str, locale: Locale) -> String {
    match ATTRIBUTE_TABLES[locale.index()].get(key) {
        Some(text) => (*text).to_string(),
        None => title_case(key),
    }
}

/// Display name of a category in `locale`, or the name unchanged.
pub fn translate_category(name: &str, locale: Locale) -> String {
    CATEGORY_TABLES[locale.index()]
        .get(name)
        .map(|text| (*text).to_string())
        .unwrap_or_else(|| name.to_string())
}

/// UI string for `key` in `locale`; unknown keys are returned as-is.
pub fn ui_text<'a>(key: &'a str, locale: Locale) -> &'a str {
    UI_TABLES[locale.index()].get(key).copied().unwrap_or(key)
}

/// Lines of the welcome screen shown before any file is loaded.
pub fn welcome_lines(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => WELCOME_EN,
        Locale::Zh => WELCOME_ZH,
    }
}

fn title_case(key: &str) -> String {
    let words: Vec<String> = key
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "?".to_string()
    } else {
        words.join(" ")
    }
}

//! Track model: one stream's metadata as an ordered list of attributes.

use std::collections::HashSet;
use std::fmt;

/// Kind of stream a track describes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackType {
    General,
    Video,
    Audio,
    Text,
    Image,
    Menu,
    #[default]
    Unknown,
    Other(String),
}

impl TrackType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::General => "General",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Menu => "Menu",
            Self::Unknown => "Unknown",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw `key -> value` pair as reported by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: Option<String>,
}

impl Attribute {
    /// The value, if present and not blank.
    pub fn present_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    pub track_type: TrackType,
    pub attributes: Vec<Attribute>,
}

impl Track {
    pub fn new(track_type: TrackType) -> Self {
        Self {
            track_type,
            attributes: Vec::new(),
        }
    }

    /// Builder-style `push` of a present value.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.push(key, Some(value.into()));
        self
    }

    pub fn push(&mut self, key: &str, value: Option<String>) {
        self.attributes.push(Attribute {
            key: key.to_string(),
            value,
        });
    }

    /// First non-blank value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .filter(|a| a.key == key)
            .find_map(Attribute::present_value)
    }

    /// Non-blank attributes in enumeration order, each key at most once.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.attributes.iter().filter_map(move |a| {
            let value = a.present_value()?;
            if seen.insert(a.key.as_str()) {
                Some((a.key.as_str(), value))
            } else {
                None
            }
        })
    }

    /// Sidebar label such as `Audio #1 (FLAC)`.
    pub fn label(&self) -> String {
        let mut label = self.track_type.to_string();
        if let Some(id) = self.get("track_id") {
            label.push_str(" #");
            label.push_str(id.trim());
        }
        if let Some(format) = self.get("format") {
            label.push_str(" (");
            label.push_str(format.trim());
            label.push(')');
        }
        label
    }
}

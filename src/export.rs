//! Flat-file reports of the loaded tracks.
//!
//! The text report mirrors what is on screen (categorized, formatted,
//! localized). The JSON report is deliberately raw: untranslated keys and
//! unformatted values, one object per track.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::{Locale, ui_text};
use crate::config::ExportSettings;
use crate::error::{Error, Result};
use crate::media::Track;
use crate::tree::{build_tree, render_report};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    /// `.json` (any case) selects JSON; everything else is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

/// Text report: title, rule, then every track's tree.
pub fn export_text(tracks: &[Track], locale: Locale, label_width: usize) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();
    out.push_str(ui_text("report_title", locale));
    out.push('\n');
    out.push_str(&rule);
    out.push_str("\n\n");

    for track in tracks {
        let tree = build_tree(track, locale);
        out.push_str(&render_report(track, &tree, locale, label_width));
        out.push('\n');
        out.push_str(&rule);
        out.push_str("\n\n");
    }
    out
}

/// JSON report: an array of `{ raw_key: raw_value }` objects.
pub fn export_json(tracks: &[Track]) -> Result<String> {
    let data: Vec<BTreeMap<&str, &str>> = tracks
        .iter()
        .map(|track| {
            let mut object = BTreeMap::new();
            object.insert("track_type", track.track_type.as_str());
            for attr in &track.attributes {
                if let Some(value) = attr.value.as_deref() {
                    object.entry(attr.key.as_str()).or_insert(value);
                }
            }
            object
        })
        .collect();
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Write a report to `path`, choosing the format from its extension.
pub fn export_to_path(
    path: &Path,
    tracks: &[Track],
    locale: Locale,
    settings: &ExportSettings,
) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path);
    let body = match format {
        ExportFormat::Json => export_json(tracks)?,
        ExportFormat::Text => export_text(tracks, locale, settings.label_width),
    };
    fs::write(path, body).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), ?format, tracks = tracks.len(), "exported report");
    Ok(format)
}

/// `<dir>/<stem>.mediainfo.<ext>` next to `source`, or under
/// `settings.directory` when configured.
pub fn default_export_path(source: &Path, format: ExportFormat, settings: &ExportSettings) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("media");
    let dir = match &settings.directory {
        Some(dir) => dir.clone(),
        None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{stem}.mediainfo.{}", format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::TrackType;
    use tempfile::tempdir;

    fn tracks() -> Vec<Track> {
        let mut general = Track::new(TrackType::General)
            .with("format", "FLAC")
            .with("file_size", "1024000")
            .with("duration", "65000");
        general.push("title", None);
        let audio = Track::new(TrackType::Audio)
            .with("bit_rate", "128000")
            .with("custom_tag", "foo");
        vec![general, audio]
    }

    #[test]
    fn format_from_path_is_case_insensitive() {
        assert_eq!(ExportFormat::from_path(Path::new("a.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("a.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("a.txt")), ExportFormat::Text);
        assert_eq!(ExportFormat::from_path(Path::new("report")), ExportFormat::Text);
    }

    #[test]
    fn text_export_is_formatted_and_localized() {
        let text = export_text(&tracks(), Locale::En, 25);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "MEDIA INFORMATION REPORT");
        assert_eq!(lines[1], "=".repeat(60));
        assert!(text.contains("GENERAL TRACK INFORMATION"));
        assert!(text.contains("AUDIO TRACK INFORMATION"));
        assert!(text.contains(&format!("  {:<25}: 1000.0 KB\n", "File Size")));
        assert!(text.contains(&format!("  {:<25}: 01:05\n", "Duration")));
        assert!(text.contains(&format!("  {:<25}: foo\n", "Custom Tag")));
        assert!(!text.contains("Title"));

        let zh = export_text(&tracks(), Locale::Zh, 25);
        assert!(zh.starts_with("媒体信息报告\n"));
        assert!(zh.contains("文件大小"));
    }

    #[test]
    fn text_export_is_deterministic() {
        assert_eq!(
            export_text(&tracks(), Locale::Zh, 20),
            export_text(&tracks(), Locale::Zh, 20)
        );
    }

    #[test]
    fn json_export_uses_raw_keys_and_values() {
        let json = export_json(&tracks()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);

        assert_eq!(array[0]["track_type"], "General");
        assert_eq!(array[0]["file_size"], "1024000");
        assert_eq!(array[0]["duration"], "65000");
        assert!(array[0].get("title").is_none());
        assert_eq!(array[1]["bit_rate"], "128000");
        assert_eq!(array[1]["custom_tag"], "foo");
    }

    #[test]
    fn export_to_path_picks_format_by_extension() {
        let dir = tempdir().unwrap();
        let settings = ExportSettings::default();

        let json_path = dir.path().join("out.json");
        let format = export_to_path(&json_path, &tracks(), Locale::En, &settings).unwrap();
        assert_eq!(format, ExportFormat::Json);
        let body = fs::read_to_string(&json_path).unwrap();
        assert!(body.trim_start().starts_with('['));

        let txt_path = dir.path().join("out.txt");
        let format = export_to_path(&txt_path, &tracks(), Locale::En, &settings).unwrap();
        assert_eq!(format, ExportFormat::Text);
        let body = fs::read_to_string(&txt_path).unwrap();
        assert!(body.starts_with("MEDIA INFORMATION REPORT"));
    }

    #[test]
    fn export_to_unwritable_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");
        let err = export_to_path(&path, &tracks(), Locale::En, &ExportSettings::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn default_export_path_sits_next_to_source_or_in_configured_dir() {
        let settings = ExportSettings::default();
        assert_eq!(
            default_export_path(Path::new("/music/song.flac"), ExportFormat::Text, &settings),
            PathBuf::from("/music/song.mediainfo.txt")
        );

        let settings = ExportSettings {
            directory: Some(PathBuf::from("/tmp/reports")),
            ..ExportSettings::default()
        };
        assert_eq!(
            default_export_path(Path::new("/music/song.flac"), ExportFormat::Json, &settings),
            PathBuf::from("/tmp/reports/song.mediainfo.json")
        );
    }
}

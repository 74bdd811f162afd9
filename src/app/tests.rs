use super::*;
use crate::catalog::Locale;
use crate::config::UiSettings;
use crate::error::Error;
use crate::loader::LoadOutcome;
use crate::media::{Track, TrackType};
use crate::search::NodeId;
use std::path::{Path, PathBuf};

fn tracks() -> Vec<Track> {
    let general = Track::new(TrackType::General)
        .with("format", "Matroska")
        .with("file_size", "1024000")
        .with("title", "Blackened");
    let video = Track::new(TrackType::Video)
        .with("format", "AVC")
        .with("width", "1920")
        .with("height", "1080");
    let audio = Track::new(TrackType::Audio)
        .with("format", "FLAC")
        .with("channel_s", "2");
    vec![general, video, audio]
}

fn app() -> App {
    App::new(&UiSettings::default())
}

fn loaded_app() -> App {
    let mut app = app();
    let generation = app.begin_load(Path::new("/media/clip.mkv"));
    assert!(app.accept_load(ok(generation)));
    app
}

fn ok(generation: u64) -> LoadOutcome {
    LoadOutcome {
        generation,
        path: PathBuf::from("/media/clip.mkv"),
        result: Ok(tracks()),
    }
}

#[test]
fn new_app_is_empty_and_ready() {
    let app = app();
    assert!(!app.has_tracks());
    assert!(app.rows().is_empty());
    assert_eq!(app.status, Status::Ready);
    assert_eq!(app.locale, Locale::En);
}

#[test]
fn begin_load_bumps_generation_and_marks_loading() {
    let mut app = app();
    let first = app.begin_load(Path::new("/a.mkv"));
    let second = app.begin_load(Path::new("/b.mkv"));
    assert!(second > first);
    assert_eq!(app.generation(), second);
    assert!(app.loading);
    assert_eq!(app.status, Status::Loading);
    assert_eq!(app.path.as_deref(), Some(Path::new("/b.mkv")));
}

#[test]
fn stale_outcome_is_discarded() {
    let mut app = app();
    let stale = app.begin_load(Path::new("/a.mkv"));
    let current = app.begin_load(Path::new("/b.mkv"));

    assert!(!app.accept_load(ok(stale)));
    assert!(!app.has_tracks());
    assert!(app.loading);

    assert!(app.accept_load(ok(current)));
    assert!(!app.loading);
    assert_eq!(app.tracks.len(), 3);
    assert_eq!(app.status, Status::Loaded);
}

#[test]
fn failed_load_clears_tracks_and_records_error() {
    let mut app = loaded_app();
    let generation = app.begin_load(Path::new("/broken.bin"));
    let accepted = app.accept_load(LoadOutcome {
        generation,
        path: PathBuf::from("/broken.bin"),
        result: Err(Error::Extract {
            path: PathBuf::from("/broken.bin"),
            message: "unsupported".into(),
        }),
    });

    assert!(accepted);
    assert!(!app.has_tracks());
    assert!(app.tree.is_empty());
    assert_eq!(app.status, Status::LoadFailed);
    assert!(app.status.is_error());
    assert!(app.load_error.as_deref().unwrap().contains("unsupported"));
}

#[test]
fn loaded_app_shows_first_track_expanded() {
    let app = loaded_app();
    assert_eq!(app.selected_track, 0);
    let rows = app.rows();
    assert_eq!(rows[0].label, "Basic Information");
    assert!(rows[0].open);
    assert_eq!(rows[1].label, "Format");
    assert_eq!(rows[1].value.as_deref(), Some("Matroska"));
    assert!(rows.iter().any(|r| r.value.as_deref() == Some("1000.0 KB")));
}

#[test]
fn track_navigation_wraps_and_rebuilds_tree() {
    let mut app = loaded_app();
    app.next_track();
    assert_eq!(app.selected_track, 1);
    assert!(app.rows().iter().any(|r| r.label == "Video Properties"));

    app.prev_track();
    app.prev_track();
    assert_eq!(app.selected_track, 2);
    assert!(app.rows().iter().any(|r| r.label == "Audio Properties"));

    app.next_track();
    assert_eq!(app.selected_track, 0);
}

#[test]
fn toggle_locale_relabels_without_changing_structure() {
    let mut app = loaded_app();
    let before = app.rows();
    app.toggle_locale();
    let after = app.rows();

    assert_eq!(app.locale, Locale::Zh);
    assert_eq!(before.len(), after.len());
    assert_eq!(after[0].label, "基本信息");
    for (b, a) in before.iter().zip(&after) {
        assert_eq!(b.id, a.id);
        assert_eq!(b.value, a.value);
    }
}

#[test]
fn collapse_survives_locale_switch() {
    let mut app = loaded_app();
    app.cursor_top();
    app.toggle_at_cursor();
    assert!(!app.rows()[0].open);

    app.toggle_locale();
    assert!(!app.rows()[0].open);
}

#[test]
fn toggle_on_leaf_collapses_parent_and_moves_cursor() {
    let mut app = loaded_app();
    app.cursor_top();
    app.cursor_down();
    assert!(!app.rows()[app.cursor].is_category());

    app.toggle_at_cursor();
    assert_eq!(app.cursor, 0);
    assert!(!app.rows()[0].open);
}

#[test]
fn filter_hides_rows_and_forces_category_open() {
    let mut app = loaded_app();
    app.cursor_top();
    app.toggle_at_cursor();

    app.enter_filter_mode();
    for c in "blacken".chars() {
        app.push_filter_char(c);
    }
    let rows = app.rows();
    assert!(rows[0].is_category());
    assert!(rows[0].open);
    let leaves: Vec<_> = rows.iter().filter(|r| !r.is_category()).collect();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].value.as_deref(), Some("Blackened"));

    app.exit_filter_mode();
    assert!(!app.filter_mode);
    assert_eq!(app.filter_query, "blacken");

    app.clear_filter();
    assert!(app.filter_query.is_empty());
    // Collapse state is restored once nothing forces it open.
    assert!(!app.rows()[0].open);
}

#[test]
fn filter_with_no_matches_yields_no_rows() {
    let mut app = loaded_app();
    app.push_filter_char('z');
    app.push_filter_char('q');
    assert!(app.rows().is_empty());
    assert_eq!(app.cursor, 0);

    app.pop_filter_char();
    app.pop_filter_char();
    assert!(!app.rows().is_empty());
}

#[test]
fn cursor_stays_in_bounds() {
    let mut app = loaded_app();
    let len = app.rows().len();
    app.cursor_up();
    assert_eq!(app.cursor, 0);
    app.cursor_bottom();
    assert_eq!(app.cursor, len - 1);
    app.cursor_down();
    assert_eq!(app.cursor, len - 1);

    app.cursor_top();
    app.toggle_at_cursor();
    app.cursor_bottom();
    assert!(app.cursor < app.rows().len());
}

#[test]
fn expand_all_false_starts_collapsed() {
    let settings = UiSettings {
        expand_all: false,
        ..UiSettings::default()
    };
    let mut app = App::new(&settings);
    app.set_tracks(tracks());
    let rows = app.rows();
    assert!(rows.iter().all(|r| r.is_category() && !r.open));

    app.toggle_at_cursor();
    assert!(app.rows()[0].open);
    assert_eq!(app.rows()[1].id, NodeId::leaf(0, 0));
}

#[test]
fn status_renders_in_active_locale() {
    assert_eq!(Status::Ready.render(Locale::En), "Ready");
    assert_eq!(Status::Loaded.render(Locale::Zh), "文件加载成功");
    let exported = Status::Exported(PathBuf::from("/tmp/a.txt")).render(Locale::En);
    assert!(exported.ends_with("/tmp/a.txt"));
    assert!(!Status::Exported(PathBuf::new()).is_error());
    assert!(Status::FileNotFound(PathBuf::new()).is_error());
}

#[test]
fn toggle_is_ignored_while_filter_holds_category_open() {
    let mut app = loaded_app();
    for c in "blacken".chars() {
        app.push_filter_char(c);
    }
    app.cursor_top();
    let before = app.rows();
    assert!(before[0].open);

    app.toggle_at_cursor();
    assert_eq!(app.rows(), before);

    app.clear_filter();
    assert!(app.rows().iter().filter(|r| r.is_category()).all(|r| r.open));
}

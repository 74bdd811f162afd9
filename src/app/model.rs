//! Application model: `App`, `Status` and the flattened `Row` view.
//!
//! `App` owns the loaded tracks and everything derived from them for the
//! selected track: the display tree, the current visibility mask and the
//! expansion state of categories. All of it lives on the UI thread.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{Locale, ui_text};
use crate::config::UiSettings;
use crate::loader::LoadOutcome;
use crate::media::Track;
use crate::search::{NodeId, Visibility, compute_visibility};
use crate::tree::{DisplayNode, build_tree};

/// What the status line reports. Rendered in the active locale at draw time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    Loading,
    Loaded,
    LoadFailed,
    FileNotFound(PathBuf),
    Exported(PathBuf),
    ExportFailed(String),
    NothingToExport,
}

impl Status {
    pub fn render(&self, locale: Locale) -> String {
        match self {
            Status::Ready => ui_text("ready", locale).to_string(),
            Status::Loading => ui_text("loading", locale).to_string(),
            Status::Loaded => ui_text("file_loaded", locale).to_string(),
            Status::LoadFailed => ui_text("error_loading", locale).to_string(),
            Status::FileNotFound(path) => {
                format!("{}: {}", ui_text("file_not_found", locale), path.display())
            }
            Status::Exported(path) => {
                format!("{} {}", ui_text("exported_to", locale), path.display())
            }
            Status::ExportFailed(message) => {
                format!("{}: {}", ui_text("export_failed", locale), message)
            }
            Status::NothingToExport => ui_text("nothing_to_export", locale).to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Status::LoadFailed
                | Status::FileNotFound(_)
                | Status::ExportFailed(_)
                | Status::NothingToExport
        )
    }
}

/// One visible line of the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: NodeId,
    pub label: String,
    /// `None` for category rows.
    pub value: Option<String>,
    /// Expansion state; always `false` for leaves.
    pub open: bool,
}

impl Row {
    pub fn is_category(&self) -> bool {
        self.id.leaf.is_none()
    }
}

pub struct App {
    pub path: Option<PathBuf>,
    pub tracks: Vec<Track>,
    pub selected_track: usize,
    pub locale: Locale,
    pub tree: Vec<DisplayNode>,
    pub visibility: Visibility,
    /// Index into `rows()`.
    pub cursor: usize,
    pub filter_mode: bool,
    pub filter_query: String,
    pub status: Status,
    pub load_error: Option<String>,
    pub loading: bool,

    expand_all: bool,
    /// Category keys whose expansion differs from `expand_all`.
    toggled: HashSet<String>,
    generation: u64,
}

impl App {
    pub fn new(ui: &UiSettings) -> Self {
        Self {
            path: None,
            tracks: Vec::new(),
            selected_track: 0,
            locale: ui.language,
            tree: Vec::new(),
            visibility: Visibility::default(),
            cursor: 0,
            filter_mode: false,
            filter_query: String::new(),
            status: Status::Ready,
            load_error: None,
            loading: false,
            expand_all: ui.expand_all,
            toggled: HashSet::new(),
            generation: 0,
        }
    }

    /// Record a new load request and return its generation.
    pub fn begin_load(&mut self, path: &Path) -> u64 {
        self.generation += 1;
        self.path = Some(path.to_path_buf());
        self.loading = true;
        self.status = Status::Loading;
        info!(generation = self.generation, path = %path.display(), "loading file");
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a finished load. Outcomes from superseded requests are dropped
    /// and `false` is returned.
    pub fn accept_load(&mut self, outcome: LoadOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                stale = outcome.generation,
                current = self.generation,
                "discarding superseded load"
            );
            return false;
        }

        self.loading = false;
        match outcome.result {
            Ok(tracks) => {
                info!(path = %outcome.path.display(), tracks = tracks.len(), "file loaded");
                self.load_error = None;
                self.status = Status::Loaded;
                self.set_tracks(tracks);
            }
            Err(e) => {
                self.load_error = Some(e.to_string());
                self.status = Status::LoadFailed;
                self.set_tracks(Vec::new());
            }
        }
        true
    }

    /// Replace the loaded tracks wholesale and show the first one.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.selected_track = 0;
        self.cursor = 0;
        self.rebuild_tree();
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.selected_track)
    }

    pub fn select_track(&mut self, index: usize) {
        if index < self.tracks.len() && index != self.selected_track {
            self.selected_track = index;
            self.cursor = 0;
            self.rebuild_tree();
        }
    }

    /// Select the next track, wrapping around.
    pub fn next_track(&mut self) {
        if self.has_tracks() {
            self.select_track((self.selected_track + 1) % self.tracks.len());
        }
    }

    /// Select the previous track, wrapping around.
    pub fn prev_track(&mut self) {
        if self.has_tracks() {
            let len = self.tracks.len();
            self.select_track((self.selected_track + len - 1) % len);
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            self.locale = locale;
            self.rebuild_tree();
        }
    }

    pub fn toggle_locale(&mut self) {
        self.set_locale(self.locale.next());
    }

    pub fn enter_filter_mode(&mut self) {
        self.filter_mode = true;
    }

    /// Leave filter mode, keeping the query applied.
    pub fn exit_filter_mode(&mut self) {
        self.filter_mode = false;
    }

    pub fn clear_filter(&mut self) {
        self.filter_query.clear();
        self.filter_mode = false;
        self.refresh_visibility();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter_query.push(c);
        self.refresh_visibility();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter_query.pop();
        self.refresh_visibility();
    }

    /// Whether category `ci` is currently shown expanded.
    pub fn is_open(&self, ci: usize) -> bool {
        if self.visibility.is_forced_open(ci) {
            return true;
        }
        match self.tree.get(ci) {
            Some(node) => self.expand_all != self.toggled.contains(&node.key),
            None => false,
        }
    }

    /// Visible tree lines in display order.
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (ci, category) in self.tree.iter().enumerate() {
            if !self.visibility.is_visible(NodeId::category(ci)) {
                continue;
            }
            let open = self.is_open(ci);
            rows.push(Row {
                id: NodeId::category(ci),
                label: category.label.clone(),
                value: None,
                open,
            });
            if !open {
                continue;
            }
            for (li, leaf) in category.children.iter().enumerate() {
                let id = NodeId::leaf(ci, li);
                if self.visibility.is_visible(id) {
                    rows.push(Row {
                        id,
                        label: leaf.label.clone(),
                        value: leaf.value.clone(),
                        open: false,
                    });
                }
            }
        }
        rows
    }

    /// Expand or collapse the category under the cursor. On a leaf this
    /// acts on its parent and moves the cursor there. Categories held open
    /// by the filter are left alone.
    pub fn toggle_at_cursor(&mut self) {
        let rows = self.rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        let ci = row.id.category;
        if self.visibility.is_forced_open(ci) {
            return;
        }
        let Some(key) = self.tree.get(ci).map(|n| n.key.clone()) else {
            return;
        };

        if !self.toggled.remove(&key) {
            self.toggled.insert(key);
        }

        if !row.is_category() {
            if let Some(pos) = self.rows().iter().position(|r| r.id == NodeId::category(ci)) {
                self.cursor = pos;
            }
        }
        self.clamp_cursor();
    }

    pub fn cursor_down(&mut self) {
        let len = self.rows().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_bottom(&mut self) {
        self.cursor = self.rows().len().saturating_sub(1);
    }

    /// Rebuild the tree for the selected track in the current locale.
    /// Only display strings change; the track itself is never re-read.
    fn rebuild_tree(&mut self) {
        self.tree = self
            .current_track()
            .map(|track| build_tree(track, self.locale))
            .unwrap_or_default();
        self.refresh_visibility();
    }

    fn refresh_visibility(&mut self) {
        self.visibility = compute_visibility(&self.tree, &self.filter_query);
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

use std::path::Path;

use tracing::warn;

use crate::app::{App, Status};
use crate::loader::Loader;

/// Start loading `path` in the background. A path that does not exist is
/// reported on the status line and nothing is spawned.
pub fn open_file(app: &mut App, loader: &Loader, path: &Path) {
    if !path.exists() {
        warn!(path = %path.display(), "file not found");
        app.status = Status::FileNotFound(path.to_path_buf());
        return;
    }
    let generation = app.begin_load(path);
    loader.spawn(generation, path.to_path_buf());
}

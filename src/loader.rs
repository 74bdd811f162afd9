//! Background metadata loading.
//!
//! Each request runs the extractor on its own worker thread. Workers only
//! produce `Track` lists; the outcome travels back over a channel tagged
//! with the generation it was requested under, and the UI thread decides
//! whether it is still wanted.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::error::Result;
use crate::media::{Extractor, Track};

#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: u64,
    pub path: PathBuf,
    pub result: Result<Vec<Track>>,
}

pub struct Loader {
    extractor: Arc<dyn Extractor>,
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
}

impl Loader {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        let (tx, rx) = mpsc::channel::<LoadOutcome>();
        Self { extractor, tx, rx }
    }

    /// Start extracting `path` in the background. In-flight loads are not
    /// cancelled.
    pub fn spawn(&self, generation: u64, path: PathBuf) -> JoinHandle<()> {
        let extractor = Arc::clone(&self.extractor);
        let tx = self.tx.clone();

        thread::spawn(move || {
            debug!(generation, path = %path.display(), "load started");
            let result = extractor.extract(&path);
            if let Err(e) = &result {
                warn!(generation, "load failed: {e}");
            }
            // The receiver only disappears on shutdown.
            let _ = tx.send(LoadOutcome {
                generation,
                path,
                result,
            });
        })
    }

    /// Next finished load, if any, without blocking.
    pub fn try_recv(&self) -> Option<LoadOutcome> {
        self.rx.try_recv().ok()
    }
}

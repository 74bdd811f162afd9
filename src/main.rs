mod app;
mod catalog;
mod config;
mod error;
mod export;
mod format;
mod loader;
mod media;
mod runtime;
mod search;
mod tree;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}

mod app;
mod clock;
mod config;
mod db;
mod error;
mod event;
mod models;
mod streak;
mod ui;

use app::App;
use log::LevelFilter;
use simplelog::WriteLogger;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging();

    let terminal = ratatui::init();
    let result = App::new()?.run(terminal);
    ratatui::restore();
    result
}

/// Log to a file in the data directory; the TUI owns the terminal.
///
/// Failures here are ignored - the app works fine without a log file.
fn init_logging() {
    if let Ok(path) = config::get_log_path()
        && let Ok(file) = std::fs::File::create(&path)
    {
        let _ = WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file);
    }
}

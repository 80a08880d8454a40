use presto::app::App;
use presto::settings::SettingsStore;
use presto::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut app = App::new(SettingsStore::open_default());

    // A file named on the command line wins; otherwise the session starts
    // from whatever the clipboard holds.
    match std::env::args().nth(1) {
        Some(path) => app.load_file(&path),
        None => app.load_clipboard(),
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

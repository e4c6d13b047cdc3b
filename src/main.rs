use anyhow::Result;
use std::process;

mod app;
mod core;
mod fuzzy;
mod store;
mod ui;

fn main() -> Result<()> {
    // 0. Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("farewatch {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("fw — TUI flight-fare watcher");
        println!();
        println!("USAGE: fw");
        println!();
        println!("Build a Google Flights search from the keyboard, keep fare");
        println!("alerts for routes you watch, and revisit past searches.");
        println!();
        println!("OPTIONS:");
        println!("  -h, --help     Print this help message");
        println!("  -V, --version  Print version");
        return Ok(());
    }

    // 1. Config dir (before TUI)
    let config_dir = store::config_path::ensure_config_dir();

    // 2. Install panic hook so terminal is restored on panic
    install_panic_hook();

    // 3. Initialize TUI
    let mut terminal = ratatui::init();
    let mut app = app::App::new(&config_dir);

    // 4. Event loop
    let action = loop {
        terminal.draw(|frame| app.render(frame))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            // Skip release/repeat events on some terminals
            if key.kind != crossterm::event::KeyEventKind::Press {
                continue;
            }
            let result = app.handle_key(key);
            match result {
                app::Action::Quit => break app::Action::Quit,
                app::Action::LaunchSearch { .. } => break result,
                app::Action::Continue => {}
            }
        }
    };

    // 5. Restore terminal
    ratatui::restore();

    // 6. Open the browser (after TUI cleanup)
    if let app::Action::LaunchSearch { url } = action {
        let exit_code = core::launcher::open_in_browser(&url);
        process::exit(exit_code);
    }

    Ok(())
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

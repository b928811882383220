use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use research_console::{
    app::App,
    client::HttpPipeline,
    config::{init_logging, Config},
    ui::ui,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config.log_file)?;

    tracing::info!(endpoint = %config.endpoint, "research console starting");

    // Background requests and the stage ticker run here; the UI loop stays
    // on the main thread
    let runtime = tokio::runtime::Runtime::new()?;
    let pipeline = Arc::new(HttpPipeline::new(
        config.endpoint.clone(),
        config.request_timeout,
    )?);
    let mut app = App::new(config, pipeline, runtime.handle().clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "research console exited with error");
        println!("Error: {:?}", err);
    }

    tracing::info!("research console stopped");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

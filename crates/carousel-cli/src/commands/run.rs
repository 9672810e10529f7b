use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, warn};

use carousel_core::AppConfig;
use carousel_tui::{
    animation::AnimationConfigExt,
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    load_theme,
    screen::ScreenLayout,
    widgets::{NavTitleWidget, PopupWidget, StageWidget, StatusBarWidget, ToolbarWidget},
};

type CarouselTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    let mut terminal = with_restore_on_error(|| setup_terminal(&config.ui.title), restore_terminal)?;

    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(config.clone(), theme);
    let events = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.animation.frame_interval(),
    );

    info!("Carousel started");
    let result = main_loop(&mut terminal, &mut app, &events);

    // Restore terminal even if the loop failed
    let restored = restore_terminal();
    info!(index = app.controller.current_index(), "Carousel stopped");

    result.and(restored)
}

fn setup_terminal(title: &str) -> Result<CarouselTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle(title)
    )?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Put the terminal back the way it was. Every step is attempted even if
/// an earlier one fails; the first error is returned.
fn restore_terminal() -> Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen),
        execute!(stdout, DisableMouseCapture),
        execute!(stdout, DisableFocusChange),
        execute!(stdout, Show),
    ])
}

/// Run `setup`, undoing whatever it managed to change if it fails
fn with_restore_on_error<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().map_err(|err| {
        if let Err(restore_err) = restore() {
            warn!("Failed to restore terminal: {}", restore_err);
        }
        err
    })
}

fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> Result<()> {
    let mut first = None;
    for result in results {
        if let Err(err) = result {
            warn!("Terminal restore step failed: {}", err);
            first.get_or_insert(err);
        }
    }
    match first {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn main_loop(terminal: &mut CarouselTerminal, app: &mut App, events: &EventHandler) -> Result<()> {
    let panel_width = app.config.ui.panel_width;
    let panel_height = app.config.ui.panel_height;

    loop {
        app.tick();

        terminal.draw(|frame| {
            let layout = ScreenLayout::new(frame.area(), panel_width, panel_height);
            app.set_layout(layout);

            NavTitleWidget::render(frame, layout.title, app);
            StageWidget::render(frame, layout.stage, app);
            ToolbarWidget::render(frame, layout.toolbar, app);
            StatusBarWidget::render(frame, layout.status, app);

            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, app);
            }
        })?;

        match events.next(app.needs_fast_update())? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                app.apply(action);
            }
            Some(AppEvent::Mouse(mouse)) => {
                let action = handle_mouse_event(mouse, app);
                app.apply(action);
            }
            Some(AppEvent::Resize(width, height)) => {
                debug!(width, height, "Terminal resized");
                app.on_resize();
            }
            Some(AppEvent::FocusLost) => app.cancel_drag(),
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

use bird_games::app::App;
use bird_games::build_info;
use bird_games::config::{self, Command, Config, USAGE};
use bird_games::constants::FRAME_POLL_MS;
use bird_games::scores::ScoreBook;
use bird_games::ui;
use bird_games::utils::init_logging;
use bird_games::utils::persistence::ScoreStore;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{info, warn};

fn main() -> io::Result<()> {
    let config = match config::command_from_env() {
        Ok(Command::Run(config)) => config,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'bird-games --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log_file) {
        eprintln!(
            "Warning: could not open log file {}: {}",
            config.log_file.display(),
            e
        );
    }
    info!(
        built = build_info::BUILD_DATE,
        commit = build_info::BUILD_COMMIT,
        "starting bird-games"
    );

    let result = run(&config);
    match &result {
        Ok(()) => info!("shutting down"),
        Err(e) => warn!(error = %e, "exiting after terminal error"),
    }
    result
}

fn run(config: &Config) -> io::Result<()> {
    let store = ScoreStore::new(&config.scores_dir);
    info!(dir = %store.dir().display(), "loading best scores");
    let scores = ScoreBook::load(store);

    let mut session = TerminalSession::enter()?;
    info!(
        keyboard_enhancement = session.keyboard_enhanced,
        "terminal ready"
    );

    // Windows consoles report key releases without enhancement.
    let release_events = session.keyboard_enhanced || cfg!(windows);
    let mut app = App::new(scores, release_events);
    let terminal = &mut session.terminal;

    let mut last_frame = Instant::now();
    while !app.should_quit() {
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            // Drain everything queued so input never lags behind rendering.
            loop {
                match event::read()? {
                    Event::Key(key) => app.handle_key(key),
                    Event::Mouse(mouse) => {
                        let area = terminal.size()?;
                        if let Some((x, y)) = ui::menu_point(area, mouse.column, mouse.row) {
                            app.handle_mouse(mouse.kind, x, y);
                        }
                    }
                    Event::Resize(_, _) => terminal.autoresize()?,
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Carry the sub-millisecond remainder into the next frame.
        let elapsed = last_frame.elapsed().as_millis() as u64;
        if elapsed > 0 {
            app.advance(elapsed);
            last_frame += Duration::from_millis(elapsed);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;
    }

    Ok(())
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the
/// value. Dropping it restores the terminal, including on early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keyboard_enhanced: bool,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Self::setup().map_err(|e| {
            let mut stdout = io::stdout();
            let _ = stdout.execute(DisableMouseCapture);
            let _ = stdout.execute(LeaveAlternateScreen);
            let _ = disable_raw_mode();
            e
        })
    }

    fn setup() -> io::Result<Self> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;

        let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
        if keyboard_enhanced {
            stdout.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            keyboard_enhanced,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let stdout = self.terminal.backend_mut();
        if self.keyboard_enhanced {
            let _ = stdout.execute(PopKeyboardEnhancementFlags);
        }
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}

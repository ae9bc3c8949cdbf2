use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use gridsnake::build_info;
use gridsnake::config::{app_dir, GameConfig};
use gridsnake::constants::{FRAME_INTERVAL_MS, IDLE_POLL_MS, LOG_FILE_NAME};
use gridsnake::game::GameSession;
use gridsnake::input::{map_key, GameInput, SwipeTracker};
use gridsnake::logging;
use gridsnake::ui::board::BoardGeometry;
use gridsnake::ui::{board_fits, draw_ui};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "gridsnake",
    version = build_info::VERSION_LINE,
    about = "Grid snake in the terminal"
)]
struct Cli {
    /// JSON config file (default: ~/.gridsnake/config.json when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        GameConfig::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.print_config {
        println!("{}", config.to_json().context("Failed to serialize config")?);
        return Ok(());
    }

    let log_path = app_dir()
        .context("Failed to create ~/.gridsnake")?
        .join(LOG_FILE_NAME);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    info!(version = build_info::VERSION_LINE, "starting");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let session = GameSession::new(config, rng);

    let result = setup_terminal().and_then(|mut terminal| run(&mut terminal, session));
    restore_terminal();
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen) {
        warn!(error = %e, "failed to leave alternate screen");
    }
}

/// Frame scheduler: step the session while it asks for frames, redraw when
/// something changed, then wait on input.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut session: GameSession<StdRng>,
) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut theme = session.config().theme;
    let mut swipe = SwipeTracker::new(session.config().swipe_dead_zone);
    let mut board: Option<BoardGeometry> = None;
    let mut running = true;
    let mut dirty = true;

    loop {
        let now = now_ms();
        // The session holds still while the board cannot be shown whole.
        let visible = board_fits(terminal.size()?, session.config().grid_cells);
        if visible && session.fire_respawn_timer(now) {
            dirty = true;
        }
        if visible && running {
            let outcome = session.on_frame(now);
            running = outcome.keep_running();
            dirty |= outcome.needs_redraw();
        }
        if dirty {
            terminal.draw(|frame| board = draw_ui(frame, &session, theme))?;
            dirty = false;
        }

        let timeout = if running && visible {
            FRAME_INTERVAL_MS
        } else {
            IDLE_POLL_MS
        };
        if !event::poll(Duration::from_millis(timeout))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(input) = map_key(key) else {
                    continue;
                };
                match input {
                    GameInput::Steer(direction) => {
                        session.steer(direction);
                    }
                    GameInput::Restart => {
                        session.restart();
                        running = true;
                        dirty = true;
                    }
                    GameInput::CycleSpeed => {
                        session.cycle_speed_mode();
                        dirty = true;
                    }
                    GameInput::ToggleTheme => {
                        theme = theme.toggle();
                        info!(theme = theme.name(), "theme toggled");
                        dirty = true;
                    }
                    GameInput::Quit => break,
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(board) = board.filter(|b| b.contains(mouse.column, mouse.row)) {
                        let (x, y) = board.to_canvas(mouse.column, mouse.row);
                        swipe.begin(x, y);
                    }
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    if let Some(board) = board {
                        let (x, y) = board.to_canvas(mouse.column, mouse.row);
                        if let Some(direction) = swipe.update(x, y) {
                            session.steer(direction);
                        }
                    }
                }
                MouseEventKind::Up(_) => swipe.end(),
                _ => {}
            },
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }

    info!(
        score = session.score(),
        length = session.snake().len(),
        "quit"
    );
    Ok(())
}

use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use rand::Rng;

use mazecrawl::scores::{timestamp_now, ScoreBook, ScoreRecord, DEFAULT_SCORE_FILE};
use mazecrawl::session::{self, SessionError};
use mazecrawl::{
    clamp_size, init_logging, ui, Direction, GameEngine, GameMode, GameStatus, PlayerId,
    DEFAULT_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Single,
    Dual,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => GameMode::Single,
            Mode::Dual => GameMode::Dual,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a maze in the terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_SIZE, help = "Maze side length; even values round up and bounds are clamped")]
        size: usize,
        #[arg(long, value_enum, default_value_t = Mode::Single)]
        mode: Mode,
        #[arg(long, help = "Fix the generation seed for a reproducible maze (e.g., --seed 12345)")]
        seed: Option<i64>,
        #[arg(long, default_value = "Player", help = "Name recorded with a winning score")]
        name: String,
    },
    /// Print recorded scores.
    Scores {
        #[arg(long, help = "Only show scores for this player")]
        player: Option<String>,
    },
    /// Delete recorded scores for one player.
    ClearScores { player: String },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            mode,
            seed,
            name,
        } => play(size, mode.into(), seed, name),
        Commands::Scores { player } => {
            show_scores(player.as_deref());
            Ok(())
        }
        Commands::ClearScores { player } => {
            let mut book = ScoreBook::load(DEFAULT_SCORE_FILE);
            let before = book.all().len();
            book.clear_player(&player)?;
            println!(
                "Removed {} score(s) for {}.",
                before - book.all().len(),
                player
            );
            Ok(())
        }
    }
}

fn random_seed() -> i64 {
    let seed: i64 = rand::rng().random();
    if seed == 0 {
        1
    } else {
        seed
    }
}

/// Run the retry policy, escalating to the user when it gives up.
fn setup_engine(size: usize, mode: GameMode, seed: i64) -> anyhow::Result<Option<GameEngine>> {
    let mut seed = seed;
    loop {
        match session::generate_solvable(size, mode, seed) {
            Ok(engine) => return Ok(Some(engine)),
            Err(SessionError::Unsolvable { attempts, .. }) => {
                eprintln!("Failed {} times to create a solvable maze.", attempts);
                eprint!("Try with a new random seed? [y/N] ");
                io::stderr().flush()?;
                let mut answer = String::new();
                io::stdin().read_line(&mut answer)?;
                if answer.trim().eq_ignore_ascii_case("y") {
                    seed = random_seed();
                } else {
                    return Ok(None);
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn play(size: usize, mode: GameMode, seed: Option<i64>, name: String) -> anyhow::Result<()> {
    let size = clamp_size(size);
    let seed = seed.unwrap_or_else(random_seed);
    let Some(mut engine) = setup_engine(size, mode, seed)? else {
        println!("No maze generated; giving up.");
        return Ok(());
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    let outcome = run_game(&mut stdout, &mut engine);
    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    let elapsed = outcome?;

    match engine.status() {
        GameStatus::Won(winner) => {
            if let Some(stats) = engine.player(winner) {
                println!(
                    "Player {} escaped the {}x{} maze (seed {}): score {}, {} moves, {}s.",
                    winner.number(),
                    size,
                    size,
                    engine.seed(),
                    stats.score(),
                    stats.moves(),
                    elapsed
                );
                let mut book = ScoreBook::load(DEFAULT_SCORE_FILE);
                book.append(ScoreRecord {
                    player_name: name,
                    player_number: winner.number(),
                    score: stats.score(),
                    moves: stats.moves(),
                    time_taken_secs: elapsed,
                    seed: engine.seed(),
                    maze_size: size,
                    mode,
                    timestamp: timestamp_now(),
                })?;
            }
        }
        GameStatus::Aborted => println!("Game aborted."),
        GameStatus::InProgress => {}
    }
    Ok(())
}

/// Interactive loop: WASD moves player 1; arrow keys move player 2 in dual
/// mode and player 1 otherwise. Returns the elapsed play time in seconds.
fn run_game(stdout: &mut io::Stdout, engine: &mut GameEngine) -> anyhow::Result<u64> {
    let started = Instant::now();
    ui::draw(stdout, engine, 0)?;

    loop {
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    let arrows = arrow_player(engine);
                    let command = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            engine.abort();
                            None
                        }
                        KeyCode::Char('w') => Some((PlayerId::One, Direction::Up)),
                        KeyCode::Char('s') => Some((PlayerId::One, Direction::Down)),
                        KeyCode::Char('a') => Some((PlayerId::One, Direction::Left)),
                        KeyCode::Char('d') => Some((PlayerId::One, Direction::Right)),
                        KeyCode::Up => Some((arrows, Direction::Up)),
                        KeyCode::Down => Some((arrows, Direction::Down)),
                        KeyCode::Left => Some((arrows, Direction::Left)),
                        KeyCode::Right => Some((arrows, Direction::Right)),
                        _ => None,
                    };
                    if let Some((player, direction)) = command {
                        engine.apply_move(player, direction);
                    }
                }
            }
        }
        ui::draw(stdout, engine, started.elapsed().as_secs())?;
        if engine.status() != GameStatus::InProgress {
            return Ok(started.elapsed().as_secs());
        }
    }
}

fn arrow_player(engine: &GameEngine) -> PlayerId {
    if engine.mode() == GameMode::Dual {
        PlayerId::Two
    } else {
        PlayerId::One
    }
}

fn show_scores(player: Option<&str>) {
    let book = ScoreBook::load(DEFAULT_SCORE_FILE);
    let records: Vec<&ScoreRecord> = match player {
        Some(name) => book.player_records(name),
        None => book.all().iter().collect(),
    };
    if records.is_empty() {
        println!("No scores recorded yet.");
        return;
    }
    for record in records {
        println!(
            "{} - Player {} - Score: {}, Moves: {}, Time: {}s, {}x{} seed {} ({}) [{}]",
            record.player_name,
            record.player_number,
            record.score,
            record.moves,
            record.time_taken_secs,
            record.maze_size,
            record.maze_size,
            record.seed,
            match record.mode {
                GameMode::Single => "Single Player",
                GameMode::Dual => "Dual Player",
            },
            record.timestamp
        );
    }
}

mod config;
mod input;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue, style::Print};

use input::{CardArea, Signal};
use times_grid_drill::{text_render, to_json, DrillSession, GridConfig, SessionOptions};

#[derive(Parser)]
#[command(
    name = "times-grid-drill",
    version,
    about = "Multiplication flashcards drawn as array grids"
)]
struct Cli {
    #[arg(long, help = "Seed for reproducible deck orders")]
    seed: Option<u64>,

    #[arg(long, help = "JSON file with cell_size / padding")]
    config: Option<PathBuf>,

    #[arg(long, help = "Cell size U in abstract units (default 60)")]
    cell_size: Option<u32>,

    #[arg(long, help = "Grid padding P in abstract units (default 20)")]
    padding: Option<u32>,

    #[arg(long, help = "Print the first card as JSON and exit")]
    dump: bool,

    #[arg(long, requires = "dump", help = "With --dump, print the answer view")]
    reveal: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => config::load_grid_config(path)?,
        None => GridConfig::default(),
    };
    let grid = config::with_overrides(base, cli.cell_size, cli.padding);
    grid.validate().context("checking grid units")?;

    let mut session = DrillSession::init(SessionOptions { rng_seed: cli.seed, grid });

    if cli.dump {
        if cli.reveal {
            session.on_advance();
        }
        let view = session.view()?;
        let doc = to_json(&view, session.position(), session.deck().len());
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = run_drill(&mut stdout, &mut session);

    if let Err(err) = execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen) {
        log::warn!("could not restore terminal screen: {}", err);
    }
    disable_raw_mode()?;
    result
}

/// Draw, wait for one signal, react. One event is handled per iteration so
/// renders never overlap.
fn run_drill<W: Write>(out: &mut W, session: &mut DrillSession) -> Result<()> {
    let mut card = draw(out, session)?;
    loop {
        let raw = event::read().context("reading terminal event")?;
        match input::classify(&raw, &card) {
            Some(Signal::Advance) => {
                session.on_advance();
                card = draw(out, session)?;
            }
            Some(Signal::Redraw) => card = draw(out, session)?,
            Some(Signal::Quit) => return Ok(()),
            None => {}
        }
    }
}

/// Paint the current card centered on screen and return the area it covers.
fn draw<W: Write>(out: &mut W, session: &DrillSession) -> Result<CardArea> {
    let view = session.view()?;
    let mut lines = text_render::card_lines(&view);
    let card_height = lines.len() as u16;
    lines.push(String::new());
    lines.push(text_render::status_line(
        session.position(),
        session.deck().len(),
        session.is_revealed(),
    ));

    let (cols, rows) = terminal::size().unwrap_or((80, 24));
    let top = rows.saturating_sub(lines.len() as u16) / 2;
    let card_width = text_render::CARD_WIDTH as u16;
    queue!(out, Clear(ClearType::All))?;
    for (i, line) in lines.iter().enumerate() {
        let width = line.chars().count() as u16;
        let left = cols.saturating_sub(width) / 2;
        queue!(out, cursor::MoveTo(left, top + i as u16), Print(line))?;
    }
    out.flush()?;

    // Status line is not part of the card.
    Ok(CardArea {
        left: cols.saturating_sub(card_width) / 2,
        top,
        width: card_width,
        height: card_height,
    })
}

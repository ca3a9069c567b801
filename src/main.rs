//! Terminal host for the LED matrix game (default binary).
//!
//! Emulates the board: the scheduler runs at the configured base tick rate,
//! key presses stand in for the buttons, and the framebuffer renderer stands in
//! for the LED matrix and indicator. Set `RUST_LOG` and redirect stderr to see
//! the game log.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use matrix_tetris::engine::{LogAudio, Runtime};
use matrix_tetris::input::{handle_key_event, is_press, should_quit};
use matrix_tetris::term::{
    FrameBuffer, MatrixView, StatusView, TermDisplay, TermIndicator, TerminalRenderer, Viewport,
    DEFAULT_SCROLL_PERIOD,
};
use matrix_tetris::types::{Config, ShapeSelection, COLS};

/// Terminal frames per second
const FRAME_RATE: u32 = 30;

/// Past this lag the tick clock resynchronizes instead of catching up.
const MAX_LAG: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "matrix-tetris", version, about)]
struct Args {
    /// Seed for the shape generator.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Shape selection: seeded | ticks
    #[arg(long, default_value = "seeded", value_parser = parse_selection)]
    selection: ShapeSelection,

    /// Drop interval at zero cleared rows, in drop ticks.
    #[arg(long)]
    base_interval: Option<u32>,

    /// Smallest drop interval the difficulty curve may reach, in drop ticks.
    #[arg(long)]
    floor: Option<u32>,

    /// Scheduler base tick rate in Hz. Every task rate must divide it.
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Rendered frames between marquee steps.
    #[arg(long, default_value_t = DEFAULT_SCROLL_PERIOD)]
    scroll_period: u32,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config {
            seed: self.seed,
            selection: self.selection,
            ..Config::default()
        };
        if let Some(base) = self.base_interval {
            config.drop.base_interval = base;
        }
        if let Some(floor) = self.floor {
            config.drop.floor = floor;
        }
        if let Some(rate) = self.tick_rate {
            config.rates.base = rate;
        }
        config
    }
}

fn parse_selection(s: &str) -> Result<ShapeSelection, String> {
    ShapeSelection::from_str(s).ok_or_else(|| format!("unknown selection `{s}` (seeded, ticks)"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.config();
    config.validate()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, args.scroll_period);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, scroll_period: u32) -> Result<()> {
    let display = TermDisplay::new(scroll_period, COLS * 2);
    let mut runtime = Runtime::new(config, display, LogAudio::new(), TermIndicator::new())?;
    info!("seed {}, base tick {} Hz", config.seed, runtime.base_rate());

    let view = MatrixView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_secs(1) / runtime.base_rate();
    let frame_every = (runtime.base_rate() / FRAME_RATE).max(1) as u64;
    let mut next_tick = Instant::now();
    let mut redraw = true;

    loop {
        if redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let machine = runtime.machine();
            let status = StatusView::new(machine.session(), machine.indicator().is_on());
            view.render_into(machine.display(), &status, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            redraw = false;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(input) = handle_key_event(key) {
                        runtime.press(input);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    redraw = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if now.saturating_duration_since(next_tick) > MAX_LAG {
            next_tick = now;
        }
        while next_tick <= now {
            runtime.tick();
            next_tick += tick;
            if runtime.scheduler().ticks() % frame_every == 0 {
                runtime.machine_mut().display_mut().advance_frame();
                redraw = true;
            }
        }
    }
}

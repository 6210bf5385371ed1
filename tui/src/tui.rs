use crate::panel::{render_error, TerminalPanel};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ledlife_lib::{
    CancelSignal, Config, Error, Grid, PixelRenderer, RenderSink, Status, TextRenderer,
};
use log::warn;
use std::{
    error::Error as StdError,
    fs::File,
    io::{self, BufWriter, Stdout, Write},
    time::{Duration, Instant},
};

/// The reset button and the quit key.
///
/// Space or enter cancels the current run; `q`, escape or `Ctrl-C` quits.
#[derive(Default)]
struct Button {
    quit: bool,
}

impl Button {
    /// Handles one terminal event. Returns whether the run should stop.
    fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char(' ') | KeyCode::Enter => true,
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.quit = true;
                    true
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.quit = true;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Waits until the pause is over or a key stops it early.
    fn wait(&mut self, pause: Duration) -> io::Result<()> {
        let deadline = Instant::now() + pause;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            if event::poll(deadline - now)? && self.handle(event::read()?) {
                return Ok(());
            }
        }
    }
}

impl CancelSignal for Button {
    fn is_asserted(&mut self) -> bool {
        let mut pressed = false;
        loop {
            match event::poll(Duration::ZERO).and_then(|ready| {
                if ready {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            }) {
                Ok(Some(event)) => pressed |= self.handle(event),
                Ok(None) => return pressed,
                Err(e) => {
                    warn!("Unable to read the keyboard: {}", e);
                    return pressed;
                }
            }
        }
    }
}

/// The whole screen: a top bar, the emulated panel, and a bottom bar.
struct LifeWindow {
    run: u64,
    gen: u64,
    height: u16,
    panel: PixelRenderer<TerminalPanel>,
    out: Stdout,
}

impl LifeWindow {
    fn new(config: &Config) -> Result<Self, Error> {
        let height = u16::try_from(config.height).map_err(|_| Error::SizeError)?;
        let mut out = io::stdout();
        terminal::enable_raw_mode().map_err(render_error)?;
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)).map_err(render_error)?;
        let panel = TerminalPanel::new(config.width as usize, config.height as usize, 1);
        Ok(LifeWindow {
            run: 0,
            gen: 0,
            height,
            panel: PixelRenderer::new(panel, config.brightness, config.rotate_blocks)?,
            out,
        })
    }

    fn bar(&mut self, row: u16, text: &str) -> Result<(), Error> {
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Reverse),
            Print(text),
            SetAttribute(Attribute::Reset)
        )
        .and_then(|_| self.out.flush())
        .map_err(render_error)
    }

    fn bottom_bar(&mut self, text: &str) -> Result<(), Error> {
        self.bar(self.height + 1, text)
    }

    fn start_run(&mut self, run: u64) -> Result<(), Error> {
        self.run = run;
        self.gen = 0;
        self.bottom_bar("Running... Press [space] to reseed, [q] to quit.")
    }

    fn finish_run(&mut self, status: Status) -> Result<(), Error> {
        let text = format!(
            "Run {} {} after {} generations. Press [space] to reseed, [q] to quit.",
            self.run, status, self.gen
        );
        self.bottom_bar(&text)
    }

    fn close(&mut self) -> io::Result<()> {
        execute!(self.out, LeaveAlternateScreen, Show)?;
        terminal::disable_raw_mode()
    }
}

impl RenderSink for LifeWindow {
    fn render(&mut self, grid: &Grid) -> Result<(), Error> {
        self.gen += 1;
        let text = format!(
            "Run: {}  Gen: {}  Cells: {}",
            self.run,
            self.gen,
            grid.population()
        );
        self.bar(0, &text)?;
        self.panel.render(grid)
    }
}

impl Drop for LifeWindow {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Unable to restore the terminal: {}", e);
        }
    }
}

pub(crate) fn run_with_tui(
    config: Config,
    transcript: Option<File>,
) -> Result<(), Box<dyn StdError>> {
    let mut simulation = config.simulation()?;
    let pause = config.timeline_pause()?;
    let mut transcript = transcript.map(|file| TextRenderer::new(BufWriter::new(file)));
    let mut window = LifeWindow::new(&config)?;
    let mut button = Button::default();

    let more_runs = |runs: u64| config.max_runs.map_or(true, |max| runs < max);
    while !button.quit && more_runs(simulation.runs()) {
        window.start_run(simulation.runs() + 1)?;
        let status = {
            let mut sinks: Vec<&mut dyn RenderSink> = vec![&mut window];
            if let Some(transcript) = transcript.as_mut() {
                sinks.push(transcript);
            }
            simulation.run_once(&mut sinks, &mut button)?
        };
        window.finish_run(status)?;
        if !button.quit && more_runs(simulation.runs()) {
            button.wait(pause)?;
        }
    }
    Ok(())
}

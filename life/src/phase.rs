// phase.rs - Paint the seed, then watch it evolve
//
// One `Life` owns the grid for the whole run. It moves through
// Editing -> Running -> Terminated; quit and escape are handled here for
// both phases, and everything else is handed to the current phase.

use std::fmt;
use std::mem;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::grid::{Cell, Grid};
use crate::input::{InputEvent, Key, MouseButton, position_to_cell};
use crate::render::Renderer;
use crate::surface::Surface;
use crate::timer::{Clock, EvolutionTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Editing,
    Running,
    Terminated,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::Editing => "editing",
            PhaseKind::Running => "running",
            PhaseKind::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

enum Transition {
    Stay,
    StartEvolution,
}

/// What a phase does with one frame: react to each event, then decide
/// whether to draw.
trait PhaseHandler {
    fn handle_event(&mut self, event: &InputEvent, grid: &mut Grid) -> Transition;

    fn end_frame(
        &mut self,
        elapsed: Duration,
        grid: &mut Grid,
        renderer: &Renderer,
        surface: &mut dyn Surface,
    );
}

/// Maps pointer input onto the grid before the run starts.
///
/// Clicking toggles the hovered cell, dragging with the left button held
/// paints cells alive, space starts the evolution. Nothing is drawn unless
/// an event changed the picture.
#[derive(Debug)]
pub struct Editor {
    config: Config,
    hovered: Option<Cell>,
    needs_redraw: bool,
}

impl Editor {
    pub fn new(config: Config) -> Self {
        // First frame draws the empty board
        Self { config, hovered: None, needs_redraw: true }
    }

    /// Cell under the pointer; `None` until the pointer has moved over the board.
    pub fn hovered(&self) -> Option<Cell> {
        self.hovered
    }
}

impl PhaseHandler for Editor {
    fn handle_event(&mut self, event: &InputEvent, grid: &mut Grid) -> Transition {
        match *event {
            InputEvent::KeyDown(Key::Space) => return Transition::StartEvolution,

            InputEvent::MouseMove { position, focused: true, left_held } => {
                self.hovered = position_to_cell(&self.config, position);
                if left_held {
                    // Dragging only ever paints, it never erases
                    if let Some(state) = self.hovered.and_then(|cell| grid.get_mut(cell)) {
                        *state = true;
                    }
                }
                self.needs_redraw = true;
            }

            InputEvent::MouseDown(MouseButton::Left) => match self.hovered {
                Some(cell) => {
                    if let Ok(alive) = grid.toggle(cell) {
                        debug!(row = cell.row, col = cell.col, alive, "cell toggled");
                    }
                    self.needs_redraw = true;
                }
                None => debug!("click ignored, no cell hovered yet"),
            },

            _ => {}
        }
        Transition::Stay
    }

    fn end_frame(
        &mut self,
        _elapsed: Duration,
        grid: &mut Grid,
        renderer: &Renderer,
        surface: &mut dyn Surface,
    ) {
        if self.needs_redraw {
            renderer.draw(grid, self.hovered, surface);
            self.needs_redraw = false;
        }
    }
}

/// Advances the grid one generation whenever the evolution timer fires,
/// drawing right after each step.
#[derive(Debug)]
pub struct Evolution {
    timer: EvolutionTimer,
    scratch: Grid,
    generation: u64,
}

impl Evolution {
    pub fn new(config: &Config) -> Self {
        Self {
            timer: EvolutionTimer::new(config.evolution_interval()),
            scratch: Grid::new(config.grid_size()),
            generation: 0,
        }
    }

    /// Generations computed since the run started.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // Double-buffered: the new generation is built in `scratch`, then the
    // buffers trade places
    fn step(&mut self, grid: &mut Grid) {
        grid.evolve_into(&mut self.scratch);
        mem::swap(grid, &mut self.scratch);
        self.generation += 1;
        debug!(generation = self.generation, population = grid.live_count(), "evolved");
    }
}

impl PhaseHandler for Evolution {
    // No editing once the run has started
    fn handle_event(&mut self, _event: &InputEvent, _grid: &mut Grid) -> Transition {
        Transition::Stay
    }

    fn end_frame(
        &mut self,
        elapsed: Duration,
        grid: &mut Grid,
        renderer: &Renderer,
        surface: &mut dyn Surface,
    ) {
        if self.timer.advance(elapsed) {
            self.step(grid);
            renderer.draw(grid, None, surface);
        }
    }
}

#[derive(Debug)]
enum Phase {
    Editing(Editor),
    Running(Evolution),
    Terminated,
}

impl Phase {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Editing(_) => PhaseKind::Editing,
            Phase::Running(_) => PhaseKind::Running,
            Phase::Terminated => PhaseKind::Terminated,
        }
    }

    fn handler(&mut self) -> Option<&mut dyn PhaseHandler> {
        match self {
            Phase::Editing(editor) => Some(editor),
            Phase::Running(evolution) => Some(evolution),
            Phase::Terminated => None,
        }
    }
}

/// One game: the grid plus whichever phase is driving it.
#[derive(Debug)]
pub struct Life {
    config: Config,
    renderer: Renderer,
    grid: Grid,
    phase: Phase,
}

impl Life {
    pub fn new(config: Config) -> Self {
        info!(
            window_size = config.window_size(),
            grid_size = config.grid_size(),
            cell_size = config.cell_size(),
            "editing grid, click or drag to add cells, space to start"
        );
        Self {
            renderer: Renderer::new(&config),
            grid: Grid::new(config.grid_size()),
            phase: Phase::Editing(Editor::new(config)),
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// Generations evolved so far; 0 outside the running phase.
    pub fn generation(&self) -> u64 {
        match &self.phase {
            Phase::Running(evolution) => evolution.generation(),
            _ => 0,
        }
    }

    /// Handles one frame: the events queued since the last frame, in order,
    /// then `elapsed` time for the phase's own timing and drawing.
    pub fn frame(
        &mut self,
        events: &[InputEvent],
        elapsed: Duration,
        surface: &mut dyn Surface,
    ) -> PhaseKind {
        let mut started = false;
        for event in events {
            if event.is_quit() {
                self.terminate(event);
                break;
            }
            let Some(handler) = self.phase.handler() else {
                break;
            };
            if let Transition::StartEvolution = handler.handle_event(event, &mut self.grid) {
                self.start_evolution(surface);
                started = true;
            }
        }

        // The evolution timer starts from zero on the frame after space
        if !started {
            if let Some(handler) = self.phase.handler() {
                handler.end_frame(elapsed, &mut self.grid, &self.renderer, surface);
            }
        }
        self.phase.kind()
    }

    /// Drives frames from `frames` (one event batch per frame) with time
    /// from `clock` until the game quits or the input runs dry.
    pub fn run(
        &mut self,
        frames: impl IntoIterator<Item = Vec<InputEvent>>,
        clock: &mut dyn Clock,
        surface: &mut dyn Surface,
    ) -> PhaseKind {
        for events in frames {
            let elapsed = clock.tick();
            if self.frame(&events, elapsed, surface) == PhaseKind::Terminated {
                break;
            }
        }
        self.phase()
    }

    fn start_evolution(&mut self, surface: &mut dyn Surface) {
        info!(live_cells = self.grid.live_count(), "seed accepted, starting evolution");
        self.phase = Phase::Running(Evolution::new(&self.config));
        // Show the seed without the hover preview until the first step lands
        self.renderer.draw(&self.grid, None, surface);
    }

    fn terminate(&mut self, event: &InputEvent) {
        let reason = match event {
            InputEvent::Quit => "window closed",
            _ => "escape pressed",
        };
        info!(
            phase = %self.phase(),
            generation = self.generation(),
            live_cells = self.grid.live_count(),
            reason,
            "quitting"
        );
        self.phase = Phase::Terminated;
    }
}

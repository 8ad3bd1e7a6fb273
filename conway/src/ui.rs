// ui.rs - eframe window hosting a game: egui input in, painted frames out

use std::mem;
use std::time::Duration;

use eframe::egui;
use egui::{Color32, Pos2, Stroke};
use life::{
    Clock, Color, Config, DisplayList, DrawCommand, FrameLimiter, InputEvent, Key, Life, MouseButton,
    PhaseKind, Point, SystemClock,
};

pub const TITLE: &str = "Conway's Game of Life";

pub fn run(config: Config) -> Result<(), eframe::Error> {
    let side = config.window_size() as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([side, side])
            .with_resizable(false),
        ..Default::default()
    };

    let app = LifeApp::new(config);
    eframe::run_native(TITLE, options, Box::new(move |_cc| Box::new(app)))
}

pub struct LifeApp {
    life: Life,
    surface: DisplayList,
    clock: SystemClock,
    limiter: FrameLimiter,
    frame_interval: Duration,
    // Input gathered by repaints that came in before the next frame was due
    queued: Vec<InputEvent>,
    left_held: bool,
}

impl LifeApp {
    pub fn new(config: Config) -> Self {
        Self {
            frame_interval: config.frame_interval(),
            limiter: FrameLimiter::new(config.frame_interval()),
            queued: Vec::new(),
            life: Life::new(config),
            surface: DisplayList::new(),
            clock: SystemClock::new(),
            left_held: false,
        }
    }

    /// Translates this frame's egui events, in order. The held state of the
    /// primary button is tracked across frames so drags see it.
    fn collect_events(&mut self, input: &egui::InputState) -> Vec<InputEvent> {
        let focused = input.pointer.has_pointer();
        let mut events = Vec::new();

        for event in &input.events {
            match event {
                egui::Event::Key { key, pressed: true, .. } => {
                    events.push(InputEvent::KeyDown(map_key(*key)));
                }
                egui::Event::PointerMoved(pos) => {
                    events.push(InputEvent::MouseMove {
                        position: Point::new(pos.x, pos.y),
                        focused,
                        left_held: self.left_held,
                    });
                }
                egui::Event::PointerButton { button, pressed, .. } => {
                    if *button == egui::PointerButton::Primary {
                        self.left_held = *pressed;
                    }
                    if *pressed {
                        if let Some(button) = map_button(*button) {
                            events.push(InputEvent::MouseDown(button));
                        }
                    }
                }
                egui::Event::PointerGone => self.left_held = false,
                _ => {}
            }
        }
        events
    }

    // egui redraws everything each repaint, so the last presented frame is
    // replayed until the game presents a new one
    fn paint(&self, ctx: &egui::Context) {
        let painter = ctx.layer_painter(egui::LayerId::background());
        for command in self.surface.visible() {
            match *command {
                DrawCommand::Clear(color) => {
                    painter.rect_filled(ctx.screen_rect(), 0.0, to_color32(color));
                }
                DrawCommand::FillRect(rect, color) => {
                    let rect = egui::Rect::from_min_size(
                        Pos2::new(rect.x, rect.y),
                        egui::vec2(rect.width, rect.height),
                    );
                    painter.rect_filled(rect, 0.0, to_color32(color));
                }
                DrawCommand::Line { from, to, color, thickness } => {
                    painter.line_segment(
                        [to_pos2(from), to_pos2(to)],
                        Stroke::new(thickness, to_color32(color)),
                    );
                }
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|input| self.collect_events(input));
        self.queued.extend(events);

        // egui repaints on every input event; the game itself runs at most `fps` times a second
        let Some(elapsed) = self.limiter.advance(self.clock.tick()) else {
            ctx.request_repaint_after(self.limiter.remaining());
            self.paint(ctx);
            return;
        };
        let events = mem::take(&mut self.queued);

        match self.life.frame(&events, elapsed, &mut self.surface) {
            PhaseKind::Terminated => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            // Keep frames coming so the evolution timer advances
            PhaseKind::Running => ctx.request_repaint_after(self.frame_interval),
            // Editing only changes on input, which wakes egui by itself
            PhaseKind::Editing => {}
        }

        self.paint(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Closing the window skips `update`, so report it as a quit here
        if self.life.phase() != PhaseKind::Terminated {
            self.life.frame(&[InputEvent::Quit], Duration::ZERO, &mut self.surface);
        }
    }
}

fn map_key(key: egui::Key) -> Key {
    match key {
        egui::Key::Escape => Key::Escape,
        egui::Key::Space => Key::Space,
        _ => Key::Other,
    }
}

fn map_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x, point.y)
}

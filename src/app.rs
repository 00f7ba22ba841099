//! Top-level game: screen routing around the fixed-step simulation
//!
//! [`Game`] owns three things with separate lifetimes: configuration, the
//! active [`Screen`], and the current run ([`GameState`] + [`RunStats`]).
//! Only the Running screen advances the simulation.

use glam::Vec2;

use crate::consts::SIM_DT;
use crate::platform::{FrameClock, InputState, Key, RunTimer};
use crate::renderer::scene::{self, Align, Frame};
use crate::renderer::shapes;
use crate::renderer::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{self, GameState, PlayerClass, RunStats, TickInput, TickOutcome, UpgradeKind};
use crate::tuning::Tuning;
use crate::ui::about::SCROLL_STEP;
use crate::ui::{AboutCategory, AboutView, Layout, Screen, UiEvent};

/// What a click resolved to on the current screen
enum Action {
    Goto(Screen),
    StartRun(PlayerClass),
    Upgrade(UpgradeKind),
    Shoot,
    Quit,
}

pub struct Game {
    settings: Settings,
    tuning: Tuning,
    /// Base seed; each new run offsets it by the run count
    seed: u64,
    screen: Screen,
    state: Option<GameState>,
    stats: RunStats,
    running: bool,
    /// Left click seen since the last tick
    pending_shot: bool,
    runs_started: u64,
    clock: FrameClock,
    run_timer: RunTimer,
    last_frame_dt: f32,
}

impl Game {
    pub fn new(settings: Settings, tuning: Tuning, seed: u64) -> Self {
        log::info!(
            "Game ready at {}x{} (seed {})",
            settings.screen_width,
            settings.screen_height,
            seed
        );
        Self {
            settings,
            tuning,
            seed,
            screen: Screen::Menu,
            state: None,
            stats: RunStats::new(),
            running: true,
            pending_shot: false,
            runs_started: 0,
            clock: FrameClock::new(),
            run_timer: RunTimer::start(),
            last_frame_dt: SIM_DT,
        }
    }

    // === Accessors ===

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The current or most recent run
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// False once the player quits
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.settings.screen_width, self.settings.screen_height)
    }

    // === Events ===

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Quit | UiEvent::KeyDown(Key::Escape) => self.quit(),
            UiEvent::KeyDown(_) => {}
            UiEvent::Scroll(notches) => {
                let height = self.layout().height;
                if let Screen::About(view) = &mut self.screen {
                    view.scroll_by(notches, height);
                }
            }
            UiEvent::Click(pos) => {
                if let Some(action) = self.resolve_click(pos) {
                    self.apply(action);
                }
            }
        }
    }

    fn resolve_click(&self, pos: Vec2) -> Option<Action> {
        let layout = self.layout();
        if layout.exit_button().is_clicked(pos) {
            return Some(Action::Quit);
        }

        match &self.screen {
            Screen::Menu => {
                if layout.start_button().is_clicked(pos) {
                    Some(Action::Goto(Screen::ClassSelect { selected: None }))
                } else if layout.about_button().is_clicked(pos) {
                    Some(Action::Goto(Screen::About(AboutView::Categories)))
                } else {
                    None
                }
            }
            Screen::ClassSelect { selected } => {
                if layout.class_box().contains_point(pos) {
                    Some(Action::Goto(Screen::ClassSelect {
                        selected: Some(PlayerClass::ArcaneMage),
                    }))
                } else if layout.begin_button().is_clicked(pos) {
                    selected.map(Action::StartRun)
                } else {
                    None
                }
            }
            Screen::Running => Some(Action::Shoot),
            Screen::LevelUp { choices, .. } => layout
                .upgrade_grid(choices.len())
                .iter()
                .position(|cell| cell.contains_point(pos))
                .map(|i| Action::Upgrade(choices[i])),
            Screen::GameOver => {
                if layout.details_button().is_clicked(pos) {
                    Some(Action::Goto(Screen::Details))
                } else if layout.game_over_menu_button().is_clicked(pos) {
                    Some(Action::Goto(Screen::Menu))
                } else {
                    None
                }
            }
            Screen::Details => layout
                .details_menu_button()
                .is_clicked(pos)
                .then_some(Action::Goto(Screen::Menu)),
            Screen::About(view) => {
                if layout.about_menu_button().is_clicked(pos) {
                    return Some(Action::Goto(Screen::Menu));
                }
                match view {
                    AboutView::Categories => layout
                        .about_grid(AboutCategory::ALL.len())
                        .iter()
                        .position(|cell| cell.contains_point(pos))
                        .map(|i| {
                            Action::Goto(Screen::About(AboutView::open(AboutCategory::ALL[i])))
                        }),
                    AboutView::Section { .. } => layout
                        .about_categories_button()
                        .is_clicked(pos)
                        .then_some(Action::Goto(Screen::About(AboutView::Categories))),
                }
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Goto(screen) => self.goto(screen),
            Action::StartRun(class) => self.start_run(class),
            Action::Upgrade(kind) => {
                self.choose_upgrade(kind);
            }
            Action::Shoot => self.pending_shot = true,
            Action::Quit => self.quit(),
        }
    }

    fn goto(&mut self, screen: Screen) {
        log::debug!("Screen {} -> {}", self.screen.name(), screen.name());
        self.screen = screen;
    }

    fn quit(&mut self) {
        log::info!("Quit from {} screen", self.screen.name());
        self.running = false;
    }

    /// Fresh run with `class`, replacing any previous one
    pub fn start_run(&mut self, class: PlayerClass) {
        let seed = self.seed.wrapping_add(self.runs_started);
        self.runs_started += 1;
        self.state = Some(GameState::new(
            seed,
            self.tuning.clone(),
            self.settings.screen_size(),
            Some(class),
        ));
        self.stats = RunStats::new();
        self.pending_shot = false;
        self.clock.reset();
        self.run_timer.restart();
        log::info!("Run {} started as {} (seed {})", self.runs_started, class.name(), seed);
        self.goto(Screen::Running);
    }

    /// Pick one of the offered upgrades and resume. `false` if no choice is
    /// pending or `kind` is not on offer.
    pub fn choose_upgrade(&mut self, kind: UpgradeKind) -> bool {
        let Screen::LevelUp { choices, .. } = &self.screen else {
            return false;
        };
        if !choices.contains(&kind) {
            return false;
        }
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if !state.player.apply_upgrade(kind.key()) {
            return false;
        }
        log::debug!("Chose {}", kind);
        self.goto(Screen::Running);
        true
    }

    // === Simulation ===

    /// Run one fixed step if the Running screen is active
    pub fn step(&mut self, input: &TickInput) -> Option<TickOutcome> {
        if self.screen != Screen::Running {
            return None;
        }
        let state = self.state.as_mut()?;
        let outcome = sim::tick(state, &mut self.stats, input, SIM_DT);

        match outcome {
            TickOutcome::Continue => {}
            TickOutcome::LevelUp { level } => {
                let choices: Vec<UpgradeKind> = state
                    .player
                    .available_upgrades()
                    .iter()
                    .map(|slot| slot.kind())
                    .collect();
                if choices.is_empty() {
                    log::info!("Level {}: every upgrade is maxed, resuming", level);
                } else {
                    self.goto(Screen::LevelUp { level, choices });
                }
            }
            TickOutcome::GameOver => self.goto(Screen::GameOver),
        }
        Some(outcome)
    }

    /// Real time per frame at the configured frame rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.settings.target_fps.max(1) as f32
    }

    /// Feed one frame of real time. Returns the number of steps run.
    pub fn update(&mut self, frame_dt: f32, input: &InputState) -> u32 {
        self.run_frame(frame_dt, |_, shoot| input.tick_input(shoot))
    }

    /// Like [`Game::update`], with the autopilot at the controls
    pub fn update_autopilot(&mut self, frame_dt: f32) -> u32 {
        self.run_frame(frame_dt, |state, _| sim::autopilot(state))
    }

    /// Run the fixed steps owed for one frame, stopping early once a step
    /// leaves the Running screen
    fn run_frame<F>(&mut self, frame_dt: f32, mut input_for: F) -> u32
    where
        F: FnMut(&GameState, bool) -> TickInput,
    {
        self.last_frame_dt = frame_dt;
        let steps = self.clock.advance(frame_dt);
        let mut ran = 0;
        for _ in 0..steps {
            if self.screen != Screen::Running {
                break;
            }
            let shoot = std::mem::take(&mut self.pending_shot);
            let Some(state) = self.state.as_ref() else {
                break;
            };
            let input = input_for(state, shoot);
            self.step(&input);
            ran += 1;
        }
        ran
    }

    // === Drawing ===

    /// Shapes and text for the active screen
    pub fn frame(&self) -> Frame {
        let layout = self.layout();
        let (w, h) = (layout.width as f32, layout.height as f32);
        let mut frame = Frame::new();

        match &self.screen {
            Screen::Menu => {
                let title = Vec2::new(w / 2.0, h / 2.0 - 100.0);
                frame.text(title, "Dark Messiah", colors::TEXT, Align::Center);
                frame.button(&layout.start_button(), colors::BUTTON, colors::TEXT);
                frame.button(&layout.about_button(), colors::BUTTON, colors::TEXT);
            }
            Screen::ClassSelect { selected } => {
                let border = if selected.is_some() {
                    colors::SUCCESS
                } else {
                    colors::BUTTON
                };
                frame.panel(layout.class_box(), None, border);
                frame.text(
                    Vec2::new(w / 2.0, h / 2.0 - 50.0),
                    PlayerClass::ArcaneMage.name(),
                    colors::TEXT,
                    Align::Center,
                );
                frame.button(&layout.begin_button(), colors::BEGIN_BUTTON, colors::SUCCESS);
            }
            Screen::Running => self.draw_running(&mut frame, w),
            Screen::LevelUp { level, choices } => {
                self.draw_level_up(&mut frame, &layout, *level, choices)
            }
            Screen::GameOver => {
                let title = Vec2::new(w / 2.0, h / 2.0 - 100.0);
                frame.text(title, "You Died!", colors::DANGER, Align::Center);
                frame.button(&layout.details_button(), colors::BUTTON, colors::TEXT);
                frame.button(&layout.game_over_menu_button(), colors::BUTTON, colors::TEXT);
            }
            Screen::Details => {
                frame.text(Vec2::new(w / 2.0, 60.0), "Run Details", colors::TEXT, Align::Center);
                let lines = [
                    format!("Time Survived: {} seconds", self.stats.time_survived()),
                    format!("XP Gained: {}", self.stats.xp_gained),
                    format!("Level Reached: {}", self.stats.level_reached),
                    format!("Enemies Defeated: {}", self.stats.enemies_defeated),
                ];
                for (i, line) in lines.into_iter().enumerate() {
                    let at = Vec2::new(w / 2.0, 150.0 + i as f32 * 50.0);
                    frame.text(at, line, colors::TEXT, Align::Center);
                }
                frame.button(&layout.details_menu_button(), colors::BUTTON, colors::TEXT);
            }
            Screen::About(view) => draw_about(&mut frame, &layout, view),
        }

        frame.button(&layout.exit_button(), colors::EXIT_BUTTON, colors::DANGER);
        frame
    }

    fn draw_running(&self, frame: &mut Frame, w: f32) {
        let Some(state) = &self.state else {
            return;
        };
        frame.shapes.extend(scene::world_shapes(state));
        for (i, line) in scene::hud_lines(&state.player).into_iter().enumerate() {
            frame.text(Vec2::new(10.0, 10.0 + i as f32 * 40.0), line, colors::TEXT, Align::Left);
        }
        if self.settings.show_timer {
            let secs = self.run_timer.elapsed().as_secs();
            let timer = scene::format_timer(secs);
            frame.text(Vec2::new(w - 20.0, 20.0), timer, colors::TEXT, Align::Right);
        }
        if self.settings.show_fps && self.last_frame_dt > 0.0 {
            let fps = 1.0 / self.last_frame_dt;
            let label = format!("FPS: {:.0}", fps);
            frame.text(Vec2::new(w - 20.0, 60.0), label, colors::TEXT_DIM, Align::Right);
        }
    }

    fn draw_level_up(
        &self,
        frame: &mut Frame,
        layout: &Layout,
        level: u32,
        choices: &[UpgradeKind],
    ) {
        let Some(state) = &self.state else {
            return;
        };
        let w = layout.width as f32;
        let top = layout.upgrade_grid_top(choices.len()) as f32;
        let title = format!("Level {} Up!", level);
        frame.text(Vec2::new(w / 2.0, top - 80.0), title, colors::TEXT, Align::Center);
        let prompt = "Choose ONE upgrade:";
        frame.text(Vec2::new(w / 2.0, top - 30.0), prompt, colors::TEXT_DIM, Align::Center);

        let player = &state.player;
        for (kind, cell) in choices.iter().zip(layout.upgrade_grid(choices.len())) {
            let title = player.upgrades().slot(*kind).title();
            let current = player.upgrade_effect(*kind).describe();
            let line = |dy: f32| cell.min + Vec2::new(10.0, dy);
            frame.panel(cell, Some(colors::UPGRADE_BUTTON), colors::UPGRADE_BORDER);
            frame.text(line(10.0), title, colors::TEXT, Align::Left);
            frame.text(line(40.0), kind.description(), colors::TEXT_DIM, Align::Left);
            frame.text(line(70.0), current, colors::ACCENT, Align::Left);
        }
    }

    /// Tessellated shapes in clip space
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = shapes::frame_vertices(&self.frame());
        shapes::to_clip(&mut vertices, self.settings.screen_size());
        vertices
    }
}

fn draw_about(frame: &mut Frame, layout: &Layout, view: &AboutView) {
    let (w, h) = (layout.width as f32, layout.height as f32);

    match *view {
        AboutView::Categories => {
            frame.text(Vec2::new(w / 2.0, 60.0), "How to Play", colors::TEXT, Align::Center);
            frame.text(
                Vec2::new(w / 2.0, 100.0),
                "Select a category to learn more:",
                colors::ACCENT,
                Align::Center,
            );
            for (category, cell) in AboutCategory::ALL
                .iter()
                .zip(layout.about_grid(AboutCategory::ALL.len()))
            {
                frame.panel(cell, Some(colors::PANEL), category.color());
                frame.text(cell.center(), category.title(), category.color(), Align::Center);
            }
        }
        AboutView::Section { category, scroll } => {
            frame.text(Vec2::new(w / 2.0, 60.0), category.title(), category.color(), Align::Center);

            let step = SCROLL_STEP as f32;
            let lines = category.lines();
            for (i, line) in lines.iter().enumerate() {
                let y = 150.0 - scroll as f32 + i as f32 * step;
                if y > 100.0 && y < h - 150.0 {
                    frame.text(Vec2::new(w / 2.0, y), *line, colors::TEXT, Align::Center);
                }
            }

            let max = category.max_scroll(layout.height);
            if max > 0 {
                let track = h - 300.0;
                let thumb = track * track / (lines.len() as f32 * step);
                let y = 150.0 + (track - thumb) * (scroll as f32 / max as f32);
                frame.shapes.push(scene::Shape::Rect {
                    min: Vec2::new(w - 20.0, y),
                    size: Vec2::new(10.0, thumb),
                    color: colors::SCROLLBAR,
                });
            }

            frame.button(&layout.about_categories_button(), colors::PANEL, colors::ACCENT);
        }
    }
    frame.button(&layout.about_menu_button(), colors::BUTTON, colors::TEXT);
}

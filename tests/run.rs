//! Full runs driven through screen events

use glam::Vec2;
use magic_survival::sim::{Bounds, TickInput, TickOutcome, UpgradeKind, autopilot};
use magic_survival::ui::{AboutCategory, AboutView, Screen, UiEvent};
use magic_survival::{Game, Settings, Tuning};

fn game() -> Game {
    Game::new(Settings::default(), Tuning::default(), 2024)
}

fn click(game: &mut Game, bounds: Bounds) {
    game.handle_event(UiEvent::Click(bounds.center()));
}

fn begin_run(game: &mut Game) {
    let layout = game.layout();
    click(game, layout.start_button().rect);
    assert_eq!(*game.screen(), Screen::ClassSelect { selected: None });
    click(game, layout.class_box());
    assert!(matches!(game.screen(), Screen::ClassSelect { selected: Some(_) }));
    click(game, layout.begin_button().rect);
    assert_eq!(*game.screen(), Screen::Running);
}

#[test]
fn menu_to_details_and_back() {
    let mut g = game();
    let layout = g.layout();
    begin_run(&mut g);

    // Level up
    g.state_mut().unwrap().player.gain_experience(100);
    assert_eq!(g.step(&TickInput::default()), Some(TickOutcome::LevelUp { level: 2 }));
    let Screen::LevelUp { level, choices } = g.screen().clone() else {
        panic!("expected the level-up screen");
    };
    assert_eq!(level, 2);
    assert_eq!(choices, UpgradeKind::ALL.to_vec());

    // Paused while choosing
    assert_eq!(g.step(&TickInput::default()), None);

    let cells = layout.upgrade_grid(choices.len());
    click(&mut g, cells[0]);
    assert_eq!(*g.screen(), Screen::Running);
    assert_eq!(g.state().unwrap().player.stats.arrow_count, 2);

    // Die
    let state = g.state_mut().unwrap();
    state.player.take_damage(95);
    let at = state.player.pos + Vec2::splat(16.0);
    state.add_enemy(at, 0.0);
    assert_eq!(g.step(&TickInput::default()), Some(TickOutcome::GameOver));
    assert_eq!(*g.screen(), Screen::GameOver);

    click(&mut g, layout.details_button().rect);
    assert_eq!(*g.screen(), Screen::Details);
    assert_eq!(g.stats().level_reached, 2);
    assert_eq!(g.stats().enemies_defeated, 1);
    assert!(g.frame().label("Level Reached: 2").is_some());

    click(&mut g, layout.details_menu_button().rect);
    assert_eq!(*g.screen(), Screen::Menu);
    assert!(g.is_running());
}

#[test]
fn game_over_straight_to_menu() {
    let mut g = game();
    let layout = g.layout();
    begin_run(&mut g);

    let state = g.state_mut().unwrap();
    state.player.take_damage(100);
    g.step(&TickInput::default());
    assert_eq!(*g.screen(), Screen::GameOver);

    click(&mut g, layout.game_over_menu_button().rect);
    assert_eq!(*g.screen(), Screen::Menu);

    // A new run starts fresh
    begin_run(&mut g);
    assert_eq!(g.state().unwrap().player.health(), 100);
    assert_eq!(g.stats().enemies_defeated, 0);
}

#[test]
fn about_browsing() {
    let mut g = game();
    let layout = g.layout();

    click(&mut g, layout.about_button().rect);
    assert_eq!(*g.screen(), Screen::About(AboutView::Categories));

    let cells = layout.about_grid(AboutCategory::ALL.len());
    click(&mut g, cells[3]);
    assert_eq!(*g.screen(), Screen::About(AboutView::open(AboutCategory::Upgrades)));

    g.handle_event(UiEvent::Scroll(2));
    assert_eq!(
        *g.screen(),
        Screen::About(AboutView::Section {
            category: AboutCategory::Upgrades,
            scroll: 60
        })
    );
    g.handle_event(UiEvent::Scroll(100));
    assert_eq!(
        *g.screen(),
        Screen::About(AboutView::Section {
            category: AboutCategory::Upgrades,
            scroll: 130
        })
    );

    click(&mut g, layout.about_categories_button().rect);
    assert_eq!(*g.screen(), Screen::About(AboutView::Categories));

    click(&mut g, cells[0]);
    click(&mut g, layout.about_menu_button().rect);
    assert_eq!(*g.screen(), Screen::Menu);

    // Sub-state does not survive leaving
    click(&mut g, layout.about_button().rect);
    assert_eq!(*g.screen(), Screen::About(AboutView::Categories));
}

#[test]
fn escape_quits() {
    let mut g = game();
    g.handle_event(UiEvent::KeyDown(magic_survival::platform::Key::Escape));
    assert!(!g.is_running());
}

/// Same seed, same autopilot: identical runs
#[test]
fn autopilot_runs_are_reproducible() {
    fn play(seed: u64) -> (magic_survival::sim::RunStats, usize) {
        let mut g = Game::new(Settings::default(), Tuning::default(), seed);
        begin_run(&mut g);
        for _ in 0..1800 {
            match g.screen().clone() {
                Screen::Running => {
                    let input = autopilot(g.state().unwrap());
                    g.step(&input);
                }
                Screen::LevelUp { choices, .. } => {
                    assert!(g.choose_upgrade(choices[0]));
                }
                _ => break,
            }
        }
        (g.stats().clone(), g.state().unwrap().enemies.len())
    }

    assert_eq!(play(77), play(77));
}

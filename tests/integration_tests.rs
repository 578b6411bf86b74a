//! Integration tests for the input -> tick -> snapshot loop

use crossterm::event::{KeyCode, KeyEvent};

use tui_snake::core::{GameConfig, GameState, TickClock};
use tui_snake::input::InputController;
use tui_snake::types::{Cell, Direction, KeyCommand};

/// One driver step: consume the pending direction and tick.
fn step(game: &mut GameState, input: &mut InputController) {
    let requested = input.take_requested().unwrap_or(game.direction());
    game.tick(requested);
}

#[test]
fn keys_steer_on_next_tick() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.place_food_at(Cell::new(0, 0));
    let mut input = InputController::new();

    input.on_key(KeyEvent::from(KeyCode::Up));
    step(&mut game, &mut input);
    assert_eq!(game.direction(), Direction::Up);
    assert_eq!(game.head(), Cell::new(4, 9));

    // No new key: keep going up.
    step(&mut game, &mut input);
    assert_eq!(game.head(), Cell::new(4, 8));
}

#[test]
fn rapid_keys_collapse_to_last() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.place_food_at(Cell::new(0, 0));
    let mut input = InputController::new();

    input.on_key(KeyEvent::from(KeyCode::Up));
    input.on_key(KeyEvent::from(KeyCode::Down));
    step(&mut game, &mut input);

    assert_eq!(game.direction(), Direction::Down);
    assert_eq!(game.head(), Cell::new(4, 11));
}

#[test]
fn reversal_key_is_dropped_by_the_game() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.place_food_at(Cell::new(0, 0));
    let mut input = InputController::new();

    input.on_key(KeyEvent::from(KeyCode::Char('a')));
    step(&mut game, &mut input);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.head(), Cell::new(5, 10));
}

#[test]
fn quit_key_stops_the_game() {
    let mut game = GameState::new(GameConfig::default(), 1);
    let mut input = InputController::new();

    assert_eq!(
        input.on_key(KeyEvent::from(KeyCode::Char('q'))),
        Some(KeyCommand::Quit)
    );
    if input.quit_requested() {
        game.quit();
    }
    assert!(!game.running());
}

#[test]
fn snapshot_is_taken_after_the_tick() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.place_food_at(Cell::new(0, 0));
    let mut input = InputController::new();
    let mut snap = game.snapshot();

    step(&mut game, &mut input);
    game.snapshot_into(&mut snap);

    assert_eq!(snap.head(), Some(Cell::new(5, 10)));
    assert_eq!(snap.snake.len(), 5);
    assert_eq!(snap.ticks, 1);
}

#[test]
fn clock_paces_ticks_from_config() {
    use std::time::{Duration, Instant};

    let config = GameConfig::default();
    let t0 = Instant::now();
    let mut clock = TickClock::new(config.tick_duration(), t0);

    let ticks = (1..=10)
        .filter(|i| clock.poll_due(t0 + Duration::from_millis(60 * i)))
        .count();
    // 600ms at 120ms per tick.
    assert_eq!(ticks, 5);
}

//! Rule-level tests for `GameState::tick` through the facade crate.

use tui_snake::core::{Collision, GameConfig, GameState, TickOutcome};
use tui_snake::types::{Cell, Direction};

fn body(state: &GameState) -> Vec<Cell> {
    state.snake().iter().copied().collect()
}

fn game_with(body: &[(i32, i32)], direction: Direction) -> GameState {
    let cells = body.iter().map(|&c| Cell::from(c));
    let mut state = GameState::with_snake(GameConfig::new(30, 20), 7, cells, direction).unwrap();
    // Park the food in a corner unless the test moves it.
    if !state.place_food_at(Cell::new(0, 0)) {
        assert!(state.place_food_at(Cell::new(29, 19)));
    }
    state
}

#[test]
fn first_tick_on_default_board() {
    let mut state = GameState::new(GameConfig::new(30, 20), 42);
    assert_eq!(
        body(&state),
        vec![
            Cell::new(4, 10),
            Cell::new(3, 10),
            Cell::new(2, 10),
            Cell::new(1, 10),
            Cell::new(0, 10)
        ]
    );
    state.place_food_at(Cell::new(20, 2));

    state.tick(Direction::Right);

    assert_eq!(
        body(&state),
        vec![
            Cell::new(5, 10),
            Cell::new(4, 10),
            Cell::new(3, 10),
            Cell::new(2, 10),
            Cell::new(1, 10)
        ]
    );
    assert!(state.running());
    assert_eq!(state.score(), 0);
}

#[test]
fn reverse_request_keeps_heading() {
    let mut state = game_with(&[(10, 10), (9, 10), (8, 10)], Direction::Right);
    state.tick(Direction::Left);
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(state.head(), Cell::new(11, 10));

    let mut state = game_with(&[(10, 10), (10, 11), (10, 12)], Direction::Up);
    state.tick(Direction::Down);
    assert_eq!(state.direction(), Direction::Up);
    assert_eq!(state.head(), Cell::new(10, 9));
}

#[test]
fn every_wall_ends_the_game() {
    let cases = [
        (vec![(0, 5), (1, 5)], Direction::Left, Cell::new(-1, 5)),
        (vec![(29, 5), (28, 5)], Direction::Right, Cell::new(30, 5)),
        (vec![(5, 0), (5, 1)], Direction::Up, Cell::new(5, -1)),
        (vec![(5, 19), (5, 18)], Direction::Down, Cell::new(5, 20)),
    ];

    for (start, heading, expected_head) in cases {
        let mut state = game_with(&start, heading);
        assert_eq!(
            state.tick(heading),
            TickOutcome::Collided(Collision::Wall),
            "{:?}",
            heading
        );
        assert!(!state.running());
        assert_eq!(state.head(), expected_head);
    }
}

#[test]
fn turning_back_into_the_body_ends_the_game() {
    // Heading left along the top of a U; turning down lands on the body.
    let mut state = game_with(
        &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)],
        Direction::Left,
    );
    assert_eq!(
        state.tick(Direction::Down),
        TickOutcome::Collided(Collision::Body)
    );
    assert!(!state.running());
}

#[test]
fn eating_grows_by_one_and_relocates_food() {
    let mut state = game_with(&[(10, 10), (9, 10), (8, 10), (7, 10), (6, 10)], Direction::Right);
    assert!(state.place_food_at(Cell::new(11, 10)));

    assert_eq!(state.tick(Direction::Right), TickOutcome::Ate);
    assert_eq!(state.len(), 6);
    assert_eq!(state.score(), 1);

    let food = state.food().expect("board has free cells");
    assert_ne!(food, Cell::new(11, 10));
    assert!(!state.snake().contains(&food));
    assert!(food.in_bounds(30, 20));
}

#[test]
fn ended_game_is_terminal() {
    let mut state = game_with(&[(29, 5), (28, 5)], Direction::Right);
    state.tick(Direction::Right);
    assert!(!state.running());

    let frozen = body(&state);
    for d in Direction::ALL {
        assert_eq!(state.tick(d), TickOutcome::Ended);
    }
    assert_eq!(body(&state), frozen);
}

#[test]
fn quit_ends_without_collision() {
    let mut state = GameState::new(GameConfig::default(), 3);
    state.quit();
    assert!(!state.running());
    assert_eq!(state.len(), 5);
    assert_eq!(state.score(), 0);
}

/// Head straight for the food; sidestep instead of requesting a reversal.
fn chase(state: &GameState, food: Cell) -> Direction {
    let head = state.head();
    let want = if food.x > head.x {
        Direction::Right
    } else if food.x < head.x {
        Direction::Left
    } else if food.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    };
    if !want.is_opposite(state.direction()) {
        return want;
    }
    match want {
        Direction::Left | Direction::Right if food.y > head.y => Direction::Down,
        Direction::Left | Direction::Right => Direction::Up,
        _ if head.x + 1 < state.config().grid_width as i32 => Direction::Right,
        _ => Direction::Left,
    }
}

#[test]
fn greedy_chase_keeps_food_off_the_snake() {
    let mut state = GameState::new(GameConfig::new(16, 16), 2024);
    let mut eaten = 0;

    for _ in 0..400 {
        if !state.running() {
            break;
        }
        let Some(food) = state.food() else { break };
        let want = chase(&state, food);

        let before = state.len();
        match state.tick(want) {
            TickOutcome::Ate => {
                eaten += 1;
                assert_eq!(state.len(), before + 1);
            }
            TickOutcome::Moved => assert_eq!(state.len(), before),
            TickOutcome::Collided(_) | TickOutcome::Ended => {}
        }
        if let Some(food) = state.food() {
            assert!(!state.snake().contains(&food));
        }
    }

    assert!(eaten > 0, "greedy policy should reach at least one food");
    assert_eq!(state.score(), eaten);
}

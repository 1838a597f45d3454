use snekgrid::{Cell, Collision, Direction, Game, GameConfig, Size, Snek, Status, StepResult};

fn body(game: &Game) -> Vec<Cell> {
    game.snek().cells().copied().collect()
}

fn start_snek() -> Snek {
    Snek::new(Cell::new(5, 5), Direction::Right, 3)
}

#[test]
fn accepted_turn_is_pending() {
    let mut game = Game::from_parts(Size::new(20, 20), start_snek(), Some(Cell::new(0, 0)), 1);

    for dir in [Direction::Up, Direction::Down, Direction::Right, Direction::Up] {
        assert!(game.steer(dir));
        assert_eq!(game.snek().pending(), dir);
    }
}

#[test]
fn reversal_is_rejected() {
    for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        let snek = Snek::new(Cell::new(10, 10), dir, 3);
        let mut game = Game::from_parts(Size::new(20, 20), snek, Some(Cell::new(0, 0)), 1);

        assert!(!game.steer(dir.opposite()));
        assert_eq!(game.snek().direction(), dir);
        assert_eq!(game.snek().pending(), dir);
    }
}

#[test]
fn one_tick_moves_the_whole_body() {
    let mut game = Game::from_parts(Size::new(20, 20), start_snek(), Some(Cell::new(0, 0)), 1);

    assert_eq!(game.tick(), StepResult::Moved);
    assert_eq!(
        body(&game),
        vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
    );
}

#[test]
fn eating_grows_by_one_and_food_moves_off_the_snake() {
    let mut game = Game::from_parts(Size::new(20, 20), start_snek(), Some(Cell::new(6, 5)), 9);
    let before = game.snek().len();

    assert_eq!(game.tick(), StepResult::Ate);
    assert_eq!(game.snek().len(), before + 1);

    let food = game.food().expect("free cells remain");
    assert!(!game.snek().contains(food));
    assert!(game.size().contains(food));
}

#[test]
fn right_wall_ends_the_game() {
    let snek = Snek::new(Cell::new(19, 5), Direction::Right, 3);
    let mut game = Game::from_parts(Size::new(20, 20), snek, Some(Cell::new(0, 0)), 1);

    assert_eq!(game.tick(), StepResult::Crashed(Collision::Wall));
    assert_eq!(game.status(), Status::Over(Collision::Wall));
}

#[test]
fn running_into_the_body_ends_the_game() {
    // A hook shape: turning Down puts the head on (5, 6), still part of the body
    let snek = Snek::from_cells(
        [
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(4, 6),
            Cell::new(5, 6),
            Cell::new(6, 6),
        ],
        Direction::Right,
    );
    let mut game = Game::from_parts(Size::new(20, 20), snek, Some(Cell::new(0, 0)), 1);

    assert!(game.steer(Direction::Down));
    assert_eq!(game.tick(), StepResult::Crashed(Collision::SelfHit));
    assert!(!game.is_running());
}

#[test]
fn ended_game_never_changes() {
    let snek = Snek::new(Cell::new(19, 5), Direction::Right, 3);
    let mut game = Game::from_parts(Size::new(20, 20), snek, Some(Cell::new(0, 0)), 1);
    game.tick();

    let frozen = body(&game);
    let food = game.food();
    for _ in 0..50 {
        game.steer(Direction::Up);
        assert_eq!(game.tick(), StepResult::Idle);
        assert_eq!(body(&game), frozen);
        assert_eq!(game.food(), food);
        assert!(game.status().is_terminal());
    }
}

#[test]
fn seeded_random_walk_keeps_invariants() {
    let config = GameConfig::new(8, 8);
    let mut game = Game::with_seed(&config, 2024);
    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

    for step in 0..500 {
        if step % 3 == 0 {
            game.steer(turns[(step / 3) % turns.len()]);
        }
        let len_before = game.snek().len();
        match game.tick() {
            StepResult::Moved => assert_eq!(game.snek().len(), len_before),
            StepResult::Ate => {
                assert_eq!(game.snek().len(), len_before + 1);
                let food = game.food().expect("food after eating");
                assert!(!game.snek().contains(food));
            }
            StepResult::Crashed(_) | StepResult::Won => break,
            StepResult::Idle => unreachable!("game was running"),
        }

        let cells = body(&game);
        for (i, a) in cells.iter().enumerate() {
            assert!(game.size().contains(*a));
            assert!(!cells[i + 1..].contains(a), "duplicate cell {a:?}");
        }
    }
}

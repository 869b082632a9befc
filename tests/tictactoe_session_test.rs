//! Tests for the shared, lock-serialized game.

use std::thread;
use strictly_coach::{AdvisoryPolicy, MoveController, NOT_A_GOOD_CHOICE, Player, SharedGame};

#[test]
fn test_shared_game_applies_rulebook() {
    let game = SharedGame::new(MoveController::new(AdvisoryPolicy::Persist));
    let state = game.attempt_move(4).unwrap();
    assert_eq!(state.advisory(), Some(NOT_A_GOOD_CHOICE));
    assert_eq!(state.next_player(), Player::X);
}

#[test]
fn test_racing_players_never_double_place() {
    let game = SharedGame::default();
    game.attempt_move(0).unwrap();

    // Two O callers race for different cells; only one O move may commit.
    let handles: Vec<_> = [4, 5]
        .into_iter()
        .map(|index| {
            let game = game.clone();
            thread::spawn(move || game.attempt_move(index))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let state = game.snapshot().unwrap();
    assert_eq!(state.board().count(Player::O), 1);
    assert_eq!(state.next_player(), Player::X);
}

use tictactoe_core::*;

/// Plays `moves` in order and returns every non-rejected outcome.
fn play(engine: &mut GameEngine, moves: &[usize]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .filter_map(|&index| engine.attempt_move(index).ok())
        .collect()
}

#[test]
fn top_row_win_for_x() {
    let mut engine = GameEngine::new();

    let outcomes = play(&mut engine, &[0, 3, 1, 4, 2]);

    assert_eq!(
        outcomes.last(),
        Some(&MoveOutcome::Won {
            player: Player::X,
            line: [0, 1, 2],
        })
    );
    assert_eq!(
        engine.outcome(),
        Outcome::Win {
            player: Player::X,
            line: [0, 1, 2],
        }
    );
    assert_eq!(engine.tally().x_wins(), 1);
    assert_eq!(engine.tally().o_wins(), 0);
    assert_eq!(engine.tally().draws(), 0);
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut engine = GameEngine::new();

    let outcomes = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(outcomes.len(), 9);
    assert!(outcomes[..8].iter().all(|&o| o == MoveOutcome::Placed));
    assert_eq!(outcomes[8], MoveOutcome::Draw);
    assert_eq!(engine.outcome(), Outcome::Draw);
    assert_eq!(engine.tally().draws(), 1);
    assert_eq!(engine.tally().total(), 1);
}

#[test]
fn ninth_move_completing_a_diagonal_is_a_win_not_a_draw() {
    let mut engine = GameEngine::new();

    let outcomes = play(&mut engine, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert_eq!(
        outcomes.last(),
        Some(&MoveOutcome::Won {
            player: Player::X,
            line: [0, 4, 8],
        })
    );
    assert!(engine.board().is_full());
    assert_eq!(engine.tally().x_wins(), 1);
    assert_eq!(engine.tally().draws(), 0);
}

#[test]
fn same_cell_twice_only_counts_once() {
    let mut engine = GameEngine::new();

    assert_eq!(engine.attempt_move(0), Ok(MoveOutcome::Placed));
    assert_eq!(engine.attempt_move(0), Ok(MoveOutcome::NoChange));

    assert_eq!(engine.turn(), Player::O);
    assert_eq!(engine.board().marked_count(), 1);
    assert_eq!(engine.board()[0], Cell::Marked(Player::X));
}

#[test]
fn turn_alternates_and_marks_match_accepted_moves() {
    let mut engine = GameEngine::new();
    // duplicates and out-of-range indices mixed into a legal game
    let moves = [4, 4, 0, 9, 8, 0, 2, 6, 3, 5, 1, 7];
    let mut accepted = 0;
    let mut expected_turn = Player::X;

    for index in moves {
        assert_eq!(engine.turn(), expected_turn);
        let before = engine.snapshot();
        match engine.attempt_move(index) {
            Ok(MoveOutcome::Placed) => {
                accepted += 1;
                expected_turn = expected_turn.other();
                assert_eq!(engine.board()[index], Cell::Marked(before.turn));
            }
            Ok(outcome) if outcome.ends_game() => {
                accepted += 1;
                assert_eq!(engine.turn(), before.turn);
            }
            _ => assert_eq!(engine.snapshot(), before),
        }
        assert!(engine.board().marked_count() <= accepted);
    }

    assert!(engine.is_finished());
}

#[test]
fn celebration_fires_once_per_win_and_never_for_draws() {
    let mut engine = GameEngine::new();
    let games: [&[usize]; 3] = [
        &[0, 3, 1, 4, 2, 5, 8],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8],
        &[0, 2, 1, 4, 8, 6, 7],
    ];
    let mut celebrations = 0;

    for moves in games {
        engine.reset_board();
        celebrations += play(&mut engine, moves)
            .into_iter()
            .filter(|outcome| outcome.celebrates())
            .count();
    }

    assert_eq!(celebrations, 2);
    assert_eq!(engine.tally().x_wins(), 1);
    assert_eq!(engine.tally().o_wins(), 1);
    assert_eq!(engine.tally().draws(), 1);
    assert_eq!(engine.tally().total(), 3);
}

#[test]
fn reset_tally_leaves_the_game_alone() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.snapshot();

    engine.reset_tally();

    let after = engine.snapshot();
    assert_eq!(after.tally, SessionTally::new());
    assert_eq!(after.board, before.board);
    assert_eq!(after.turn, before.turn);
    assert_eq!(after.outcome, before.outcome);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0]);

    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let restored: Snapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, engine.snapshot());
}

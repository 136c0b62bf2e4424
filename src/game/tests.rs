use super::*;
use crate::game::roller::ScriptedRoller;
use proptest::prelude::*;

fn setup_game(player_count: i64, threshold: i64) -> Game {
    let board = Board::new(player_count, threshold).unwrap();
    let names = ["Admiring Turing", "Bold Hopper", "Clever Noether", "Dreamy Knuth"];
    let mut game = Game::with_names(board, names.map(String::from), &mut ScriptedRoller::default());
    game.begin().unwrap();
    game
}

fn player_id(index: usize) -> PlayerId {
    PlayerId::new(index)
}

#[test]
fn test_new_game_initial_state() {
    let game = Game::new(3, 20, &mut StdRngRoller::new()).unwrap();
    assert_eq!(game.get_status(), GameStatus::NotStarted);
    assert_eq!(game.get_next_turn(), 0);
    assert_eq!(game.get_players().len(), 3);
    for (index, player) in game.get_players().iter().enumerate() {
        assert_eq!(player.id(), player_id(index));
        assert_eq!(player.score(), 0);
        assert!(player.roll_history().is_empty());
        assert!(!player.name().is_empty());
    }
}

#[test]
fn test_new_game_rejects_bad_configuration() {
    let mut roller = ScriptedRoller::default();
    assert!(matches!(Game::new(0, 10, &mut roller), Err(GameError::InvalidConfiguration(_))));
    assert!(matches!(Game::new(2, -1, &mut roller), Err(GameError::InvalidConfiguration(_))));
}

#[test]
fn test_large_threshold_is_accepted() {
    let mut game = Game::new(2, 5_000_000_000, &mut ScriptedRoller::default()).unwrap();
    assert_eq!(game.get_board().threshold_score(), 5_000_000_000);

    game.begin().unwrap();
    let events = game.play_turn(&mut ScriptedRoller::new([6])).unwrap();
    assert!(!events.iter().any(|e| matches!(e, GameEvent::Finished { .. })));
}

#[test]
fn test_same_seed_seats_same_names() {
    let names = |seed| {
        let game = Game::new(4, 10, &mut StdRngRoller::seeded(seed)).unwrap();
        game.get_players().iter().map(|p| p.name().to_string()).collect::<Vec<_>>()
    };
    assert_eq!(names(17), names(17));
}

#[test]
fn test_with_names_fills_missing_names() {
    let board = Board::new(3, 10).unwrap();
    let game = Game::with_names(board, vec!["Ada".to_string()], &mut ScriptedRoller::default());
    assert_eq!(game.get_players()[0].name(), "Ada");
    assert_eq!(game.get_players()[1].name(), "Admiring Agnesi");
    assert_eq!(game.get_players()[2].name(), "Admiring Agnesi");
}

#[test]
fn test_lifecycle_guards() {
    let board = Board::new(2, 10).unwrap();
    let mut game = Game::with_names(board, std::iter::empty(), &mut ScriptedRoller::default());
    let mut roller = ScriptedRoller::new([3]);

    assert_eq!(game.play_turn(&mut roller), Err(GameError::NotInProgress));
    assert_eq!(game.next_player().unwrap_err(), GameError::NotInProgress);

    game.shuffle_playing_sequence(&mut roller).unwrap();
    game.begin().unwrap();
    assert_eq!(game.get_status(), GameStatus::InProgress);

    assert_eq!(game.begin(), Err(GameError::AlreadyStarted));
    assert_eq!(game.shuffle_playing_sequence(&mut roller), Err(GameError::AlreadyStarted));
}

#[test]
fn test_shuffle_reorders_players_before_begin() {
    let board = Board::new(3, 10).unwrap();
    let mut game = Game::with_names(board, std::iter::empty(), &mut ScriptedRoller::default());
    game.shuffle_playing_sequence(&mut ScriptedRoller::default()).unwrap();

    let order: Vec<PlayerId> = game.get_players().iter().map(Player::id).collect();
    assert_eq!(order, vec![player_id(1), player_id(2), player_id(0)]);
}

#[test]
fn test_six_grants_bonus_turns() {
    let mut game = setup_game(2, 10_000);
    let mut roller = ScriptedRoller::new([6, 6, 1]);

    let events = game.play_turn(&mut roller).unwrap();
    assert_eq!(
        events,
        vec![
            GameEvent::Rolled { player_id: player_id(0), value: 6 },
            GameEvent::BonusTurn { player_id: player_id(0) },
        ]
    );
    assert_eq!(game.get_next_turn(), 0);

    game.play_turn(&mut roller).unwrap();
    assert_eq!(game.get_next_turn(), 0);

    let events = game.play_turn(&mut roller).unwrap();
    assert_eq!(events, vec![GameEvent::Rolled { player_id: player_id(0), value: 1 }]);
    assert_eq!(game.get_next_turn(), 1);
    assert_eq!(game.get_players()[0].roll_history(), &[6, 6, 1]);
    assert!(game.get_players()[1].roll_history().is_empty());
}

#[test]
fn test_single_player_skip_then_finish() {
    let mut game = setup_game(1, 3);
    let mut roller = ScriptedRoller::new([1, 1, 5]);

    game.play_turn(&mut roller).unwrap();
    let player = game.get_player_details();
    assert_eq!(player.score(), 1);
    assert!(!player.skip_turn());

    game.play_turn(&mut roller).unwrap();
    let player = game.get_player_details();
    assert_eq!(player.score(), 2);
    assert!(player.skip_turn());

    let events = game.play_turn(&mut roller).unwrap();
    assert_eq!(events, vec![GameEvent::Skipped { player_id: player_id(0) }]);
    let player = game.get_player_details();
    assert_eq!(player.score(), 2);
    assert!(!player.skip_turn());
    assert_eq!(roller.remaining(), 1);

    let events = game.play_turn(&mut roller).unwrap();
    assert_eq!(
        events,
        vec![
            GameEvent::Rolled { player_id: player_id(0), value: 5 },
            GameEvent::Finished { player_id: player_id(0), rank: 1, score: 7 },
            GameEvent::GameOver,
        ]
    );
    assert_eq!(game.get_board().standings(), &[player_id(0)]);
    assert!(game.is_game_finished());
    assert_eq!(game.play_turn(&mut roller), Err(GameError::NotInProgress));
}

#[test]
fn test_finishing_on_a_six_consumes_the_bonus() {
    let mut game = setup_game(2, 6);
    let mut roller = ScriptedRoller::new([6, 2]);

    let events = game.play_turn(&mut roller).unwrap();
    assert_eq!(
        events,
        vec![
            GameEvent::Rolled { player_id: player_id(0), value: 6 },
            GameEvent::Finished { player_id: player_id(0), rank: 1, score: 6 },
        ]
    );
    // The pointer stays put on a 6, but the finished player is passed over.
    assert_eq!(game.get_next_turn(), 0);
    assert_eq!(game.next_player().unwrap().id(), player_id(1));
    assert_eq!(game.get_next_turn(), 1);

    game.play_turn(&mut roller).unwrap();
    assert_eq!(game.get_players()[1].score(), 2);
    assert_eq!(game.get_players()[0].roll_history(), &[6]);
}

#[test]
fn test_finished_players_are_skipped_in_rotation() {
    let mut game = setup_game(3, 5);
    // p0 finishes with 5; then p1 rolls 2, p2 rolls 3, and the turn wraps to p1.
    let mut roller = ScriptedRoller::new([5, 2, 3, 4]);

    game.play_turn(&mut roller).unwrap();
    game.play_turn(&mut roller).unwrap();
    game.play_turn(&mut roller).unwrap();
    assert_eq!(game.get_next_turn(), 0);

    let events = game.play_turn(&mut roller).unwrap();
    assert_eq!(events[0], GameEvent::Rolled { player_id: player_id(1), value: 4 });
    assert_eq!(events[1], GameEvent::Finished { player_id: player_id(1), rank: 2, score: 6 });
    assert_eq!(game.get_next_turn(), 2);
}

#[test]
fn test_final_score_before_and_after_game_end() {
    let mut game = setup_game(2, 4);
    let mut roller = ScriptedRoller::new([2, 5, 3]);

    assert_eq!(game.final_score(), Err(GameError::GameNotFinished));

    game.play_turn(&mut roller).unwrap(); // p0: 2
    game.play_turn(&mut roller).unwrap(); // p1: 5, finishes first
    assert_eq!(game.final_score(), Err(GameError::GameNotFinished));
    game.play_turn(&mut roller).unwrap(); // p0: 5, finishes second

    let expected: Table = vec![
        vec!["Rank".into(), "ID".into(), "Name".into(), "Score".into()],
        vec!["1".into(), "1".into(), "Bold Hopper".into(), "5".into()],
        vec!["2".into(), "0".into(), "Admiring Turing".into(), "5".into()],
    ];
    assert_eq!(game.final_score().unwrap(), expected);
    assert_eq!(game.final_score().unwrap(), expected);
}

#[test]
fn test_current_score_board() {
    let mut game = setup_game(2, 100);
    let mut roller = ScriptedRoller::new([3, 4, 2]);

    let board = game.get_current_score_board();
    assert_eq!(board[0], vec!["ID", "Name", "Last Two Turns", "Score"]);
    assert_eq!(board[1], vec!["0", "Admiring Turing", "- -", "0"]);

    game.play_turn(&mut roller).unwrap();
    game.play_turn(&mut roller).unwrap();
    game.play_turn(&mut roller).unwrap();

    let board = game.get_current_score_board();
    assert_eq!(board.len(), 3);
    assert_eq!(board[1], vec!["0", "Admiring Turing", "3 2", "5"]);
    assert_eq!(board[2], vec!["1", "Bold Hopper", "- 4", "4"]);
}

#[test]
fn test_reset_returns_to_not_started() {
    let mut game = setup_game(1, 2);
    game.play_turn(&mut ScriptedRoller::new([4])).unwrap();
    assert!(game.is_game_finished());

    game.reset();
    assert_eq!(game.get_status(), GameStatus::NotStarted);
    assert!(game.get_board().standings().is_empty());
    assert_eq!(game.get_players()[0].score(), 0);
    assert!(!game.get_players()[0].has_finished());
    assert!(game.begin().is_ok());
}

fn play_to_completion(game: &mut Game, roller: &mut impl Roller) {
    for _ in 0..100_000 {
        if game.is_game_finished() {
            return;
        }
        let pointer_before = game.next_player().unwrap().id();
        let index_before = game.get_next_turn();
        let events = game.play_turn(roller).unwrap();

        let rolled_six = events.contains(&GameEvent::Rolled { player_id: pointer_before, value: 6 });
        let finished = events.iter().any(|e| matches!(e, GameEvent::Finished { .. }));
        if rolled_six && !finished {
            assert_eq!(game.get_next_turn(), index_before);
        }

        for player in game.get_players() {
            assert_eq!(player.score(), player.roll_history().iter().map(|&r| u64::from(r)).sum::<u64>());
        }
        let finished_count = game.get_players().iter().filter(|p| p.has_finished()).count();
        assert_eq!(finished_count, game.get_board().standings().len());
    }
    panic!("game did not finish");
}

proptest! {
    #[test]
    fn prop_positive_configuration_is_accepted(players in 1i64..64, threshold in 1i64..100_000) {
        let game = Game::new(players, threshold, &mut StdRngRoller::seeded(players as u64)).unwrap();
        prop_assert_eq!(game.get_players().len(), players as usize);
        for (index, player) in game.get_players().iter().enumerate() {
            prop_assert_eq!(player.id(), PlayerId::new(index));
            prop_assert_eq!(player.score(), 0);
        }
    }

    #[test]
    fn prop_non_positive_configuration_is_rejected(players in -64i64..=0, threshold in -64i64..=0) {
        let mut roller = ScriptedRoller::default();
        prop_assert!(Game::new(players, 10, &mut roller).is_err());
        prop_assert!(Game::new(2, threshold, &mut roller).is_err());
    }

    #[test]
    fn prop_random_games_keep_invariants(seed in any::<u64>(), players in 1i64..6, threshold in 1i64..60) {
        let mut roller = StdRngRoller::seeded(seed);
        let board = Board::new(players, threshold).unwrap();
        let mut game = Game::with_names(board, std::iter::empty(), &mut roller);
        game.shuffle_playing_sequence(&mut roller).unwrap();
        game.begin().unwrap();

        play_to_completion(&mut game, &mut roller);

        let standings = game.get_board().standings();
        let mut unique = standings.to_vec();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), players as usize);
        prop_assert_eq!(game.final_score().unwrap().len(), players as usize + 1);
        for player in game.get_players() {
            prop_assert!(player.score() >= threshold as u64);
        }
    }
}

use std::thread;

use battlesnake_rules::{
    BoardState, Move, RoyaleSettings, Ruleset, RulesetConfig, RulesetSettings, SnakeMove,
};

fn start_of_game() -> BoardState {
    serde_json::from_str(include_str!("../fixtures/start_of_game.json")).unwrap()
}

/// Every snake turns in a fixed pattern so the game runs for a while without any randomness
/// outside the ruleset
fn scripted_moves(board: &BoardState) -> Vec<SnakeMove> {
    let pattern = [Move::Up, Move::Right, Move::Down, Move::Left];

    board
        .living_snakes()
        .enumerate()
        .map(|(i, s)| SnakeMove::new(&s.id, pattern[(board.turn as usize / 3 + i) % 4]))
        .collect()
}

fn play(config: &RulesetConfig, turns: i32) -> Vec<BoardState> {
    let mut board = start_of_game();
    let mut history = vec![board.clone()];

    for _ in 0..turns {
        let ruleset = config.build(board.turn + 1).unwrap();
        if ruleset.is_game_over(&board) {
            break;
        }

        board = ruleset
            .create_next_board_state(&board, &scripted_moves(&board))
            .unwrap();
        history.push(board.clone());
    }

    history
}

fn royale_config(seed: u64) -> RulesetConfig {
    RulesetConfig {
        name: "royale".to_owned(),
        settings: RulesetSettings {
            food_spawn_chance: 25,
            minimum_food: 2,
            hazard_damage_per_turn: 14,
            royale: RoyaleSettings {
                shrink_every_n_turns: 5,
            },
        },
        seed,
    }
}

#[test]
fn test_fixture_loads() {
    let board = start_of_game();

    assert_eq!(board.snakes.len(), 4);
    assert_eq!(board.food.len(), 5);
    assert!(board.hazards.is_empty());
}

#[test]
fn test_same_seed_same_game() {
    let config = royale_config(45897034512311);

    assert_eq!(play(&config, 150), play(&config, 150));
}

#[test]
fn test_games_in_parallel_match_games_in_sequence() {
    let seeds = [1, 2, 3, 4, 5, 6];
    let sequential: Vec<_> = seeds
        .iter()
        .map(|seed| play(&royale_config(*seed), 100))
        .collect();

    let parallel: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = seeds
            .iter()
            .map(|seed| s.spawn(move || play(&royale_config(*seed), 100)))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_hazards_only_grow() {
    let history = play(&royale_config(99), 150);

    for pair in history.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);

        assert!(
            before.hazards.iter().all(|h| after.hazards.contains(h)),
            "hazards shrank going into turn {}",
            after.turn
        );
        assert_eq!(after.turn, before.turn + 1);
    }
}

#[test]
fn test_returned_boards_hold_their_invariants() {
    for seed in 0..10 {
        for board in play(&royale_config(seed), 150) {
            for snake in &board.snakes {
                assert!(!snake.body.is_empty());
                assert!(snake.health >= 0 && snake.health <= 100);
                for pair in snake.body.iter().collect::<Vec<_>>().windows(2) {
                    assert!(pair[0] == pair[1] || pair[0].is_adjacent(pair[1]));
                }
            }

            let living_heads: Vec<_> = board.living_snakes().map(|s| s.head()).collect();
            for (i, head) in living_heads.iter().enumerate() {
                assert!(!living_heads[i + 1..].contains(head));
            }

            let mut food = board.food.clone();
            food.sort();
            food.dedup();
            assert_eq!(food.len(), board.food.len());

            let mut hazards = board.hazards.clone();
            hazards.sort();
            hazards.dedup();
            assert_eq!(hazards.len(), board.hazards.len());
        }
    }
}

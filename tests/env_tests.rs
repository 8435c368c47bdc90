//! Integration tests for the step/reset environment.

use mnk_env::core::{Action, GameRng, Symbol};
use mnk_env::env::{reward_for, EnvConfig, Environment, RewardKind, RewardTable};
use mnk_env::opponent::{FirstAvailable, OpponentPolicy, UniformOpponent};
use mnk_env::rules::{Game, GameResult};
use mnk_env::Error;

fn classic() -> Environment {
    Environment::with_size(3, 3).unwrap()
}

// =============================================================================
// Construction and Reset
// =============================================================================

#[test]
fn test_default_reward_table() {
    let env = classic();
    let table = env.reward_table();
    assert_eq!(table.valid_move, 0.0);
    assert_eq!(table.invalid_move, -10.0);
    assert_eq!(table.draw, -1.0);
    assert_eq!(table.win, 10.0);
    assert_eq!(table.loss, -10.0);
}

#[test]
fn test_invalid_geometry_fails_construction() {
    let err = Environment::new(EnvConfig::new(4, 5)).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn test_reset_returns_fresh_observation() {
    let mut env = Environment::with_size(4, 3).unwrap();
    env.step(Action::new(0, 0, Symbol::X)).unwrap();
    env.step(Action::new(3, 3, Symbol::O)).unwrap();

    let obs = env.reset();
    assert_eq!(obs, vec![0; 16]);
    assert_eq!(env.observation(), obs);
    assert_eq!(env.result(), GameResult::Undecided);
    assert!(!env.is_terminal());
}

#[test]
fn test_reward_table_not_shared_between_environments() {
    let custom = RewardTable::default().with(RewardKind::InvalidMove, -1.0);
    let mut a = Environment::new(EnvConfig::default().with_rewards(custom)).unwrap();
    let mut b = classic();

    a.step(Action::new(0, 0, Symbol::X)).unwrap();
    b.step(Action::new(0, 0, Symbol::X)).unwrap();

    let step_a = a.step(Action::new(0, 0, Symbol::O)).unwrap();
    let step_b = b.step(Action::new(0, 0, Symbol::O)).unwrap();
    assert_eq!(step_a.reward, -1.0);
    assert_eq!(step_b.reward, -10.0);
}

// =============================================================================
// Step Protocol
// =============================================================================

#[test]
fn test_scenario_x_wins_top_row() {
    let mut env = classic();
    let moves = [
        Action::new(0, 0, Symbol::X),
        Action::new(1, 1, Symbol::O),
        Action::new(0, 1, Symbol::X),
        Action::new(2, 2, Symbol::O),
    ];
    for action in moves {
        let step = env.step(action).unwrap();
        assert_eq!(step.reward, 0.0);
        assert!(!step.terminal);
    }

    let step = env.step(Action::new(0, 2, Symbol::X)).unwrap();
    assert!(step.terminal);
    assert_eq!(step.reward, 10.0);
    assert_eq!(step.observation, vec![-1, -1, -1, 0, 1, 0, 0, 0, 1]);
    assert_eq!(env.result(), GameResult::WonX);
}

#[test]
fn test_scenario_occupied_cell() {
    let mut env = classic();
    env.step(Action::new(1, 1, Symbol::X)).unwrap();
    let before = env.observation();

    let step = env.step(Action::new(1, 1, Symbol::O)).unwrap();
    assert_eq!(step.observation, before);
    assert_eq!(step.reward, -10.0);
    assert!(!step.terminal);
    assert_eq!(env.symbol_to_play(), Symbol::O);
}

#[test]
fn test_empty_symbol_is_wrong_turn() {
    let mut env = classic();
    let err = env.step(Action::new(0, 0, Symbol::Empty)).unwrap_err();
    assert!(matches!(err, Error::WrongTurn { .. }));
}

#[test]
fn test_turn_alternation() {
    let mut env = classic();
    let start = env.symbol_to_play();

    env.step(Action::new(0, 0, start)).unwrap();
    assert_eq!(env.symbol_to_play(), start.opponent());
    env.step(Action::new(0, 1, start.opponent())).unwrap();
    assert_eq!(env.symbol_to_play(), start);
}

#[test]
fn test_o_can_move_first() {
    let config = EnvConfig::default()
        .with_first_to_play(Symbol::O)
        .with_player(Symbol::O);
    let mut env = Environment::new(config).unwrap();
    assert_eq!(env.symbol_to_play(), Symbol::O);

    assert!(env.step(Action::new(0, 0, Symbol::X)).is_err());
    env.step(Action::new(0, 0, Symbol::O)).unwrap();
    env.reset();
    assert_eq!(env.symbol_to_play(), Symbol::O);
}

#[test]
fn test_draw_reward() {
    let mut env = classic();
    // X O X / X O O / O X X
    let moves = [
        (0, 0, Symbol::X),
        (0, 1, Symbol::O),
        (0, 2, Symbol::X),
        (1, 1, Symbol::O),
        (1, 0, Symbol::X),
        (1, 2, Symbol::O),
        (2, 1, Symbol::X),
        (2, 0, Symbol::O),
    ];
    for (r, c, s) in moves {
        assert!(!env.step(Action::new(r, c, s)).unwrap().terminal);
    }

    let step = env.step(Action::new(2, 2, Symbol::X)).unwrap();
    assert!(step.terminal);
    assert_eq!(step.reward, -1.0);
    assert_eq!(env.result(), GameResult::Drawn);
}

#[test]
fn test_streak_one_first_move_terminal() {
    let mut env = Environment::with_size(5, 1).unwrap();
    let step = env.step(Action::new(4, 0, Symbol::X)).unwrap();
    assert!(step.terminal);
    assert_eq!(env.result(), GameResult::WonX);
    assert!(matches!(
        env.step(Action::new(0, 0, Symbol::O)),
        Err(Error::GameOver { .. })
    ));
}

#[test]
fn test_invalid_move_keeps_terminal_flag() {
    let mut env = Environment::with_size(4, 4).unwrap();
    let step = env.step(Action::new(0, 9, Symbol::X)).unwrap();
    assert_eq!(step.reward, -10.0);
    assert!(!step.terminal);
    assert_eq!(env.game().move_count(), 0);
}

// =============================================================================
// Rewards
// =============================================================================

#[test]
fn test_reward_mapping_for_every_result() {
    let table = RewardTable::from_entries([
        ("valid_move", 0.1),
        ("draw", 0.2),
        ("win", 0.3),
        ("loss", 0.4),
    ])
    .unwrap();

    let results = [
        GameResult::Undecided,
        GameResult::WonX,
        GameResult::WonO,
        GameResult::Drawn,
    ];
    for player in Symbol::PLAYERS {
        for result in results {
            let expected = match result {
                GameResult::Undecided => table.valid_move,
                GameResult::Drawn => table.draw,
                _ if result.winner() == Some(player) => table.win,
                _ => table.loss,
            };
            assert_eq!(reward_for(result, player, &table), expected);
        }
    }
}

#[test]
fn test_reward_from_o_perspective() {
    let config = EnvConfig::new(3, 3).with_player(Symbol::O);
    let mut env = Environment::new(config).unwrap();
    for (r, c, s) in [
        (0, 0, Symbol::X),
        (1, 0, Symbol::O),
        (0, 1, Symbol::X),
        (1, 1, Symbol::O),
        (2, 2, Symbol::X),
    ] {
        env.step(Action::new(r, c, s)).unwrap();
    }
    let step = env.step(Action::new(1, 2, Symbol::O)).unwrap();
    assert!(step.terminal);
    assert_eq!(step.reward, 10.0);
    assert_eq!(env.reward(), 10.0);
}

// =============================================================================
// Opponent Interface
// =============================================================================

#[test]
fn test_random_opponent_games_terminate() {
    let mut rng = GameRng::new(2024);
    let mut env = Environment::with_size(4, 3).unwrap();

    for _ in 0..20 {
        env.reset();
        let mut steps = 0;
        while !env.is_terminal() {
            let action = UniformOpponent
                .choose(env.game(), env.symbol_to_play(), &mut rng)
                .unwrap();
            let step = env.step_against(action, &UniformOpponent, &mut rng).unwrap();
            assert_eq!(step.observation.len(), 16);
            steps += 1;
            assert!(steps <= 16);
        }
        assert!(env.result().is_terminal());
    }
}

#[test]
fn test_step_against_reports_loss() {
    // FirstAvailable answers along row 0 and completes it on its third move.
    let mut env = classic();
    let mut rng = GameRng::new(0);

    let step = env
        .step_against(Action::new(1, 0, Symbol::X), &FirstAvailable, &mut rng)
        .unwrap();
    assert!(!step.terminal);
    let step = env
        .step_against(Action::new(2, 2, Symbol::X), &FirstAvailable, &mut rng)
        .unwrap();
    assert!(!step.terminal);
    let step = env
        .step_against(Action::new(2, 0, Symbol::X), &FirstAvailable, &mut rng)
        .unwrap();
    assert!(step.terminal);
    assert_eq!(env.result(), GameResult::WonO);
    assert_eq!(step.reward, -10.0);
}

struct Stubborn;

impl OpponentPolicy for Stubborn {
    fn choose(&self, _game: &Game, symbol: Symbol, _rng: &mut GameRng) -> Option<Action> {
        Some(Action::new(0, 0, symbol))
    }
}

#[test]
fn test_illegal_opponent_move_is_error() {
    let mut env = classic();
    let err = env
        .step_against(Action::new(0, 0, Symbol::X), &Stubborn, &mut GameRng::new(0))
        .unwrap_err();
    assert!(matches!(err, Error::IllegalOpponentMove { .. }));
    assert_eq!(env.symbol_to_play(), Symbol::O);
}

struct Impostor;

impl OpponentPolicy for Impostor {
    fn choose(&self, game: &Game, symbol: Symbol, _rng: &mut GameRng) -> Option<Action> {
        let coord = game.valid_moves().next()?;
        Some(Action::at(coord, symbol.opponent()))
    }
}

#[test]
fn test_opponent_reply_must_use_its_own_symbol() {
    let mut env = classic();
    let err = env
        .step_against(Action::new(1, 1, Symbol::X), &Impostor, &mut GameRng::new(0))
        .unwrap_err();
    assert!(matches!(err, Error::IllegalOpponentMove { .. }));
    assert_eq!(env.game().move_count(), 1);
}

#[test]
fn test_tracked_o_plays_full_games_against_random_x() {
    let config = EnvConfig::new(4, 3).with_player(Symbol::O);
    let mut env = Environment::new(config).unwrap();
    let mut rng = GameRng::new(11);

    for _ in 0..20 {
        env.reset();
        assert_eq!(env.symbol_to_play(), Symbol::X);
        while !env.is_terminal() {
            // On the first call X opens; if it takes this cell, O's move is
            // simply invalid and O stays on move.
            let coord = env.game().valid_moves().last().unwrap();
            let step = env
                .step_against(Action::at(coord, Symbol::O), &UniformOpponent, &mut rng)
                .unwrap();
            assert_eq!(step.terminal, env.is_terminal());
            if !step.terminal {
                assert_eq!(env.symbol_to_play(), Symbol::O);
            }
        }
        let o_marks = env.game().board().count(Symbol::O);
        let x_marks = env.game().board().count(Symbol::X);
        assert!(x_marks == o_marks || x_marks == o_marks + 1);
    }
}

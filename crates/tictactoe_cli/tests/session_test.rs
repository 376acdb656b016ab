//! End-to-end session tests driven by scripted input.

use std::io::Cursor;
use tictactoe_cli::{GameConfig, GameMode, Session};
use tictactoe_engine::Player;

fn run(config: GameConfig, script: &str) -> (tictactoe_cli::Scoreboard, String) {
    let mut session = Session::new(config, Cursor::new(script.to_owned()), Vec::new());
    let scores = session.run().unwrap();
    let out = String::from_utf8(session.output().clone()).unwrap();
    (scores, out)
}

#[test]
fn test_scores_persist_across_rounds() {
    let config = GameConfig::new(GameMode::HumanVsHuman, Player::O, false);
    // X wins the left column, then O wins the middle row, then a draw.
    let script = "1\n5\n4\n2\n7\n\
                  y\n1\n4\n2\n5\n9\n6\n\
                  yes\n1\n2\n3\n5\n4\n6\n8\n7\n9\n\
                  n\n";
    let (scores, out) = run(config, script);

    assert_eq!(scores.wins(Player::X), 1);
    assert_eq!(scores.wins(Player::O), 1);
    assert_eq!(scores.draws(), 1);
    assert!(out.contains("Player X: 1 | Player O: 1 | Draws: 1"));
}

#[test]
fn test_end_of_input_quits_cleanly() {
    let config = GameConfig::new(GameMode::HumanVsComputer, Player::O, false);
    let (scores, out) = run(config, "5\n");

    assert_eq!(scores.rounds(), 0);
    assert!(out.contains("Turn: Player O"));
    assert!(out.contains("Computer (O) plays 1 (Top-left)"));
}

#[test]
fn test_computer_never_loses_to_scripted_human() {
    // Human X opens in each cell and then always takes the lowest free cell.
    for opening in 1..=9 {
        let config = GameConfig::new(GameMode::HumanVsComputer, Player::O, false);
        let script = format!("{}\n1\n2\n3\n4\n5\n6\n7\n8\n9\nn\n", opening);
        let (scores, _) = run(config, &script);
        assert_eq!(scores.rounds(), 1, "opening {}", opening);
        assert_eq!(scores.wins(Player::X), 0, "opening {}", opening);
    }
}

//! Persistence interchange tests - save/resume and leaderboard aggregation

use webtris::core::{ScriptedSource, Session};
use webtris::persist::{leaderboard, personal_history, SavedGame, ScoreRecord};
use webtris::types::{GameAction, PieceKind, CELL_FILLED};

fn scripted(sequence: Vec<PieceKind>) -> Session {
    Session::with_source(Box::new(ScriptedSource::new(sequence)))
}

#[test]
fn test_save_and_resume_mid_game() {
    let mut session = scripted(vec![PieceKind::O, PieceKind::I, PieceKind::T]);
    session.start();
    session.apply_action(GameAction::HardDrop);
    session.apply_action(GameAction::Pause);

    // Save through the JSON wire form, as the web layer would
    let json = SavedGame::from_session(&session).to_json().unwrap();

    let snap = SavedGame::from_json(&json).unwrap().to_snapshot().unwrap();
    let source = ScriptedSource::new(vec![PieceKind::I]);
    let mut resumed = Session::from_snapshot(&snap, Box::new(source));

    assert_eq!(resumed.score(), session.score());
    assert_eq!(resumed.level(), session.level());
    assert_eq!(resumed.lines(), session.lines());
    assert!(resumed.paused());
    assert_eq!(resumed.board(), session.board());

    // The locked O is where the original session left it
    assert!(resumed.board().is_filled(4, 19));
    assert!(resumed.board().is_filled(5, 18));

    // Unpause and keep playing from the restored state
    resumed.start();
    resumed.apply_action(GameAction::Pause);
    assert!(!resumed.paused());
    assert_eq!(resumed.active().unwrap().kind, PieceKind::I);
}

#[test]
fn test_saved_game_wire_format_shape() {
    let mut session = scripted(vec![PieceKind::O]);
    session.start();
    session.apply_action(GameAction::HardDrop);

    let json = SavedGame::from_session(&session).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // The web layer reads these exact keys
    let board = value["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    assert_eq!(board[0].as_array().unwrap().len(), 10);
    assert_eq!(board[19][4], serde_json::json!(CELL_FILLED));
    assert_eq!(value["score"], serde_json::json!(0));
    assert_eq!(value["level"], serde_json::json!(1));
    assert_eq!(value["lines"], serde_json::json!(0));
    assert_eq!(value["paused"], serde_json::json!(false));
}

#[test]
fn test_malformed_saved_game_is_rejected() {
    // Truncated board
    let json = r#"{"board":[[0,0]],"score":0,"level":1,"lines":0,"paused":false}"#;
    let saved = SavedGame::from_json(json).unwrap();
    assert!(saved.to_snapshot().is_err());

    // Not JSON at all
    assert!(SavedGame::from_json("not json").is_err());

    // Missing fields
    assert!(SavedGame::from_json(r#"{"score":0}"#).is_err());
}

#[test]
fn test_score_record_from_finished_session() {
    let mut session = scripted(vec![PieceKind::O]);
    session.start();
    while !session.game_over() {
        session.apply_action(GameAction::HardDrop);
    }

    let record = ScoreRecord::from_session("alice", &session);
    assert_eq!(record.user, "alice");
    assert_eq!(record.score, session.score());
    assert_eq!(record.level, session.level());
    assert_eq!(record.lines, session.lines());
}

#[test]
fn test_leaderboard_across_users() {
    let mut records = Vec::new();
    for (user, scores) in [
        ("alice", vec![400, 1200, 800]),
        ("bob", vec![900]),
        ("carol", vec![100, 150]),
    ] {
        for score in scores {
            records.push(ScoreRecord {
                user: user.to_string(),
                score,
                level: 1,
                lines: score / 100,
            });
        }
    }

    let top = leaderboard(&records, 2);
    assert_eq!(top.len(), 2);
    assert_eq!((top[0].user.as_str(), top[0].score), ("alice", 1200));
    assert_eq!((top[1].user.as_str(), top[1].score), ("bob", 900));

    // A larger limit surfaces every user exactly once
    let all = leaderboard(&records, 10);
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].user, "carol");
    assert_eq!(all[2].score, 150);
}

#[test]
fn test_personal_history_is_per_user() {
    let records = vec![
        ScoreRecord {
            user: "alice".into(),
            score: 500,
            level: 1,
            lines: 5,
        },
        ScoreRecord {
            user: "bob".into(),
            score: 900,
            level: 2,
            lines: 12,
        },
        ScoreRecord {
            user: "alice".into(),
            score: 700,
            level: 2,
            lines: 10,
        },
    ];

    let history = personal_history(&records, "alice", 10);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].score, 700);
    assert_eq!(history[1].score, 500);

    assert!(personal_history(&records, "dave", 10).is_empty());
}

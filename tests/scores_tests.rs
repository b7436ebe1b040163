use std::fs;
use std::path::PathBuf;

use mazecrawl::scores::{timestamp_now, ScoreBook, ScoreRecord};
use mazecrawl::GameMode;

fn temp_score_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mazecrawl_test_{}_{}.json", tag, std::process::id()))
}

fn record(name: &str, score: u32) -> ScoreRecord {
    ScoreRecord {
        player_name: name.to_string(),
        player_number: 1,
        score,
        moves: 40,
        time_taken_secs: 65,
        seed: 42,
        maze_size: 21,
        mode: GameMode::Single,
        timestamp: timestamp_now(),
    }
}

#[test]
fn records_survive_a_reload() {
    let path = temp_score_file("reload");
    let _ = fs::remove_file(&path);

    let mut book = ScoreBook::load(&path);
    assert!(book.all().is_empty());
    book.append(record("alice", 30)).unwrap();
    book.append(record("bob", 10)).unwrap();

    let reloaded = ScoreBook::load(&path);
    assert_eq!(reloaded.all(), book.all());
    assert_eq!(reloaded.all().len(), 2);
    assert_eq!(reloaded.all()[0].player_name, "alice");

    let _ = fs::remove_file(&path);
}

#[test]
fn player_filter_and_clear() {
    let path = temp_score_file("filter");
    let _ = fs::remove_file(&path);

    let mut book = ScoreBook::load(&path);
    book.append(record("alice", 30)).unwrap();
    book.append(record("bob", 10)).unwrap();
    book.append(record("alice", 50)).unwrap();

    let alice = book.player_records("alice");
    assert_eq!(alice.len(), 2);
    assert!(alice.iter().all(|r| r.player_name == "alice"));

    book.clear_player("alice").unwrap();
    assert!(book.player_records("alice").is_empty());
    assert_eq!(book.all().len(), 1);

    let reloaded = ScoreBook::load(&path);
    assert_eq!(reloaded.all().len(), 1);
    assert_eq!(reloaded.all()[0].player_name, "bob");

    let _ = fs::remove_file(&path);
}

#[test]
fn corrupt_file_starts_an_empty_book() {
    let path = temp_score_file("corrupt");
    fs::write(&path, "not json at all {{{").unwrap();

    let book = ScoreBook::load(&path);
    assert!(book.all().is_empty());

    let _ = fs::remove_file(&path);
}

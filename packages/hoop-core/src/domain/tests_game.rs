use time::macros::datetime;
use time::Duration;

use crate::domain::game::Game;

fn make_game(players_needed: u32, current_players: u32) -> Game {
    Game {
        id: "game-1".to_string(),
        court_id: "court-1".to_string(),
        court_name: "Downtown Basketball Court".to_string(),
        date_time: datetime!(2026-08-15 18:00 UTC),
        players_needed,
        current_players,
        organizer: "john-doe".to_string(),
    }
}

#[test]
fn full_when_roster_reaches_capacity() {
    assert!(!make_game(10, 9).is_full());
    assert!(make_game(10, 10).is_full());
}

#[test]
fn capacity_remaining_counts_open_spots() {
    assert_eq!(make_game(10, 6).capacity_remaining(), 4);
    assert_eq!(make_game(8, 8).capacity_remaining(), 0);
}

#[test]
fn start_boundary_instant_counts_as_started() {
    let game = make_game(10, 0);
    assert!(!game.has_started(game.date_time - Duration::seconds(1)));
    assert!(game.has_started(game.date_time));
    assert!(game.has_started(game.date_time + Duration::seconds(1)));
}

#[test]
fn closed_when_full_or_started() {
    let game = make_game(10, 0);
    let before = game.date_time - Duration::hours(1);

    assert!(!game.is_closed(before));
    assert!(make_game(10, 10).is_closed(before));
    assert!(game.is_closed(game.date_time));
}

#[test]
fn game_serializes_as_flat_record() {
    let game = make_game(10, 6);
    let value = serde_json::to_value(&game).expect("serialize game");
    let record = value.as_object().expect("flat record");

    for field in [
        "id",
        "court_id",
        "court_name",
        "date_time",
        "players_needed",
        "current_players",
        "organizer",
    ] {
        assert!(record.contains_key(field), "missing field {field}");
    }
    assert_eq!(record["current_players"], 6);

    let back: Game = serde_json::from_value(value).expect("deserialize game");
    assert_eq!(back, game);
}

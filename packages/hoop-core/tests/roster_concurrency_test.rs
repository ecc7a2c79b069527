//! Races on the roster capacity invariant.
//!
//! The contract under test: per-game serialization makes the capacity
//! check-then-increment atomic, so concurrent joins can never overfill a
//! roster, while different games proceed in parallel.

mod support;

use std::sync::Arc;

use hoop_core::DomainError;
use support::{demo_index, new_game, roster_at, test_now};
use time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn last_spot_goes_to_exactly_one_of_two() {
    let (roster, _clock) = roster_at(test_now());
    let index = demo_index();
    let game = roster
        .create_game(new_game("court-1", Duration::days(1), 1, test_now()), &index)
        .unwrap();
    let roster = Arc::new(roster);

    let mut attempts = Vec::new();
    for user in [test_support::unique_user(), test_support::unique_user()] {
        let roster = Arc::clone(&roster);
        let game_id = game.id.clone();
        attempts.push(tokio::spawn(
            async move { roster.join(&game_id, &user).await },
        ));
    }

    let mut won = 0;
    let mut full = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            Ok(_) => won += 1,
            Err(DomainError::GameFull { .. }) => full += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!((won, full), (1, 1));
    assert_eq!(roster.game(&game.id).await.unwrap().current_players, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn oversubscribed_burst_fills_to_capacity_exactly() {
    let (roster, _clock) = roster_at(test_now());
    let index = demo_index();
    let game = roster
        .create_game(new_game("court-2", Duration::days(1), 10, test_now()), &index)
        .unwrap();
    let roster = Arc::new(roster);

    let mut attempts = Vec::new();
    for _ in 0..25 {
        let roster = Arc::clone(&roster);
        let game_id = game.id.clone();
        let user = test_support::unique_user();
        attempts.push(tokio::spawn(
            async move { roster.join(&game_id, &user).await },
        ));
    }

    let mut won = 0;
    let mut full = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            Ok(snapshot) => {
                won += 1;
                assert!(snapshot.current_players <= snapshot.players_needed);
            }
            Err(DomainError::GameFull { .. }) => full += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!((won, full), (10, 15));
    assert_eq!(roster.game(&game.id).await.unwrap().current_players, 10);
    assert_eq!(roster.participants(&game.id).await.unwrap().len(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn churn_on_one_game_never_breaks_the_bounds() {
    let (roster, _clock) = roster_at(test_now());
    let index = demo_index();
    let game = roster
        .create_game(new_game("court-3", Duration::days(1), 3, test_now()), &index)
        .unwrap();
    let roster = Arc::new(roster);

    let mut tasks = Vec::new();
    for _ in 0..12 {
        let roster = Arc::clone(&roster);
        let game_id = game.id.clone();
        let user = test_support::unique_user();
        tasks.push(tokio::spawn(async move {
            for _ in 0..20 {
                if roster.join(&game_id, &user).await.is_ok() {
                    tokio::task::yield_now().await;
                    roster.leave(&game_id, &user).await.unwrap();
                }
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let snapshot = roster.game(&game.id).await.unwrap();
    assert_eq!(snapshot.current_players, 0);
    assert!(roster.participants(&game.id).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn different_games_fill_independently() {
    let (roster, _clock) = roster_at(test_now());
    let index = demo_index();
    let roster = Arc::new(roster);

    let mut games = Vec::new();
    for court in ["court-1", "court-2", "court-3"] {
        games.push(
            roster
                .create_game(new_game(court, Duration::days(1), 4, test_now()), &index)
                .unwrap(),
        );
    }

    let mut attempts = Vec::new();
    for game in &games {
        for _ in 0..4 {
            let roster = Arc::clone(&roster);
            let game_id = game.id.clone();
            let user = test_support::unique_user();
            attempts.push(tokio::spawn(
                async move { roster.join(&game_id, &user).await },
            ));
        }
    }
    for attempt in attempts {
        attempt.await.unwrap().unwrap();
    }

    for game in &games {
        assert_eq!(roster.capacity_remaining(&game.id).await.unwrap(), 0);
    }
}

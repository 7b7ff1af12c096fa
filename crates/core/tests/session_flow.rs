use std::time::{Duration, Instant};

use maze_core::paths::shortest_path;
use maze_core::{
    LeaderboardFetch, LeaderboardView, LocalScoringClient, MazeDimensions, MoveOutcome, PlayerName,
    RetryPolicy, Session, SessionConfig, SessionPhase,
};

fn config(name: &str, side: usize) -> SessionConfig {
    SessionConfig {
        dimensions: MazeDimensions::square(side).expect("positive side"),
        player_name: PlayerName::new(name).expect("valid name"),
    }
}

fn play_to_exit(session: &mut Session<LocalScoringClient>, seed: u64, t0: Instant, finish_ms: u64) {
    session.start(seed, t0);
    let maze = session.maze().expect("active").clone();
    let path = shortest_path(&maze, maze.start(), maze.exit()).expect("perfect maze");
    let last = path.len() - 1;

    for (step, direction) in path.into_iter().enumerate() {
        let now = if step == last {
            t0 + Duration::from_millis(finish_ms)
        } else {
            t0 + Duration::from_millis(step as u64)
        };
        let outcome = session.move_player(direction, now);
        if step == last {
            assert!(matches!(outcome, MoveOutcome::Finished { .. }), "{outcome:?}");
        } else {
            assert!(matches!(outcome, MoveOutcome::Moved { .. }), "{outcome:?}");
        }
    }
}

#[test]
fn walking_the_solution_finishes_and_ranks_the_run() {
    let mut session = Session::new(config("Ann", 20), LocalScoringClient::default());
    let t0 = Instant::now();
    play_to_exit(&mut session, 42, t0, 9_250);

    assert_eq!(session.phase(), SessionPhase::Finished);
    assert_eq!(session.final_elapsed_seconds(), Some(9.25));

    let fetch = LeaderboardFetch::begin(session.client_mut(), RetryPolicy::default(), t0);
    let Some(LeaderboardView::Ranked(rows)) = fetch.view() else {
        panic!("expected ranked rows, got {fetch:?}");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ann");
    assert_eq!(rows[0].best_time, 9.25);
}

#[test]
fn replaying_keeps_only_each_players_best_time() {
    let mut session = Session::new(config("Ann", 6), LocalScoringClient::default());
    let t0 = Instant::now();

    play_to_exit(&mut session, 1, t0, 12_500);
    play_to_exit(&mut session, 2, t0, 9_250);
    session.set_player_name(PlayerName::new("Bob").expect("valid name"));
    play_to_exit(&mut session, 3, t0, 15_000);

    assert_eq!(session.client().leaderboard().len(), 3);
    let rows = session.client().leaderboard().ranked();
    let summary: Vec<_> = rows.iter().map(|row| (row.name.as_str(), row.best_time)).collect();
    assert_eq!(summary, [("Ann", 9.25), ("Bob", 15.0)]);
}

#[test]
fn empty_board_is_reported_as_empty() {
    let mut client = LocalScoringClient::default();
    let fetch = LeaderboardFetch::begin(&mut client, RetryPolicy::default(), Instant::now());
    assert_eq!(fetch, LeaderboardFetch::Ready(LeaderboardView::Empty));
}

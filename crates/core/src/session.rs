//! One play-through: generate a maze, accept moves, freeze the clock at the
//! exit, and hand the finishing time to the scoring collaborator once.
//!
//! A `Session` is an explicit value owned by its host loop. The host feeds it
//! `move_player(direction, now)` from input and `tick(id, now)` from its frame
//! timer; the engine itself never reads a clock or touches a UI.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::journal::InputJournal;
use crate::maze::{Maze, MazeDimensions};
use crate::mazegen::{BuildObserver, generate_observed, generate_seeded, seeded_rng};
use crate::movement::step_target;
use crate::scoring::{PlayerName, ScoreRecord, ScoringClient};
use crate::types::{Cell, Direction, MoveOutcome, SessionId, SessionPhase};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub dimensions: MazeDimensions,
    pub player_name: PlayerName,
}

#[derive(Clone, Debug)]
struct Run {
    id: SessionId,
    seed: u64,
    maze: Maze,
    player: Cell,
    started_at: Instant,
    finished: bool,
    final_elapsed: Option<Duration>,
    // Sole guard for at-most-once submission.
    submitted: bool,
    journal: InputJournal,
}

pub struct Session<C> {
    config: SessionConfig,
    client: C,
    next_id: u64,
    run: Option<Run>,
}

impl<C: ScoringClient> Session<C> {
    pub fn new(config: SessionConfig, client: C) -> Self {
        Self { config, client, next_id: 1, run: None }
    }

    /// Idle/Finished/Active -> Active with a fresh maze for `seed`.
    pub fn start(&mut self, seed: u64, now: Instant) -> SessionId {
        let maze = generate_seeded(seed, self.config.dimensions);
        self.install(seed, maze, now)
    }

    /// Like [`Session::start`], letting `observer` watch the maze being carved.
    /// The resulting maze is the one `start` would have produced.
    pub fn start_observed<O: BuildObserver + ?Sized>(
        &mut self,
        seed: u64,
        now: Instant,
        observer: &mut O,
    ) -> SessionId {
        let dimensions = self.config.dimensions;
        let maze = generate_observed(dimensions, &mut seeded_rng(seed, dimensions), observer);
        self.install(seed, maze, now)
    }

    fn install(&mut self, seed: u64, maze: Maze, now: Instant) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        info!(
            session = id.0,
            seed,
            width = maze.width(),
            height = maze.height(),
            "session started"
        );
        self.run = Some(Run {
            id,
            seed,
            player: maze.start(),
            journal: InputJournal::new(seed, maze.dimensions()),
            maze,
            started_at: now,
            finished: false,
            final_elapsed: None,
            submitted: false,
        });
        id
    }

    /// Finished/Active -> Idle, dropping the maze and all run data.
    pub fn reset(&mut self) {
        if let Some(run) = self.run.take() {
            debug!(session = run.id.0, "session reset");
        }
    }

    pub fn move_player(&mut self, direction: Direction, now: Instant) -> MoveOutcome {
        let Some(run) = self.run.as_mut() else {
            return MoveOutcome::Ignored;
        };
        if run.finished {
            return MoveOutcome::Ignored;
        }
        let Some(to) = step_target(&run.maze, run.player, direction) else {
            return MoveOutcome::Blocked;
        };

        run.player = to;
        let elapsed_ms = now.saturating_duration_since(run.started_at).as_millis() as u64;
        run.journal.append_move(elapsed_ms, direction);

        if self.check_win(now) {
            let elapsed_seconds = self.final_elapsed_seconds().unwrap_or_default();
            MoveOutcome::Finished { to, elapsed_seconds }
        } else {
            MoveOutcome::Moved { to }
        }
    }

    /// Token form used by input layers that speak `N`/`S`/`E`/`W`.
    pub fn move_token(&mut self, token: &str, now: Instant) -> MoveOutcome {
        match Direction::from_token(token) {
            Some(direction) => self.move_player(direction, now),
            None if self.phase() == SessionPhase::Active => MoveOutcome::Blocked,
            None => MoveOutcome::Ignored,
        }
    }

    /// Finishes the run if the player stands on the exit. Safe to call any
    /// number of times: the clock freezes once and the score is handed to the
    /// collaborator at most once per session.
    pub fn check_win(&mut self, now: Instant) -> bool {
        let Self { config, client, run, .. } = self;
        let Some(run) = run.as_mut() else {
            return false;
        };
        if run.player != run.maze.exit() {
            return false;
        }

        if !run.finished {
            let elapsed = now.saturating_duration_since(run.started_at);
            run.finished = true;
            run.final_elapsed = Some(elapsed);
            info!(session = run.id.0, elapsed_s = elapsed.as_secs_f64(), "exit reached");
        }

        if !run.submitted {
            run.submitted = true;
            let elapsed = run.final_elapsed.unwrap_or_default();
            submit_once(client, &config.player_name, elapsed, run.id);
        }
        true
    }

    /// Elapsed time for the timer display. `None` once the session finished,
    /// after a reset, or when `id` belongs to an earlier session.
    pub fn tick(&self, id: SessionId, now: Instant) -> Option<Duration> {
        let run = self.run.as_ref()?;
        if run.id != id || run.finished {
            return None;
        }
        Some(now.saturating_duration_since(run.started_at))
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.run {
            None => SessionPhase::Idle,
            Some(run) if run.finished => SessionPhase::Finished,
            Some(_) => SessionPhase::Active,
        }
    }

    pub fn id(&self) -> Option<SessionId> {
        self.run.as_ref().map(|run| run.id)
    }

    pub fn seed(&self) -> Option<u64> {
        self.run.as_ref().map(|run| run.seed)
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.run.as_ref().map(|run| &run.maze)
    }

    pub fn player_cell(&self) -> Option<Cell> {
        self.run.as_ref().map(|run| run.player)
    }

    pub fn is_finished(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.finished)
    }

    pub fn submitted(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.submitted)
    }

    pub fn final_elapsed(&self) -> Option<Duration> {
        self.run.as_ref().and_then(|run| run.final_elapsed)
    }

    pub fn final_elapsed_seconds(&self) -> Option<f64> {
        self.final_elapsed().map(|elapsed| elapsed.as_secs_f64())
    }

    pub fn journal(&self) -> Option<&InputJournal> {
        self.run.as_ref().map(|run| &run.journal)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn player_name(&self) -> &PlayerName {
        &self.config.player_name
    }

    /// Takes effect for the next submission.
    pub fn set_player_name(&mut self, name: PlayerName) {
        self.config.player_name = name;
    }

    /// Applies from the next `start`.
    pub fn set_dimensions(&mut self, dimensions: MazeDimensions) {
        self.config.dimensions = dimensions;
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    #[cfg(test)]
    pub(crate) fn start_with_maze(&mut self, maze: Maze, now: Instant) -> SessionId {
        self.install(0, maze, now)
    }
}

fn submit_once<C: ScoringClient>(
    client: &mut C,
    name: &PlayerName,
    elapsed: Duration,
    id: SessionId,
) {
    let record = match ScoreRecord::new(name.clone(), elapsed.as_secs_f64()) {
        Ok(record) => record,
        Err(err) => {
            warn!(session = id.0, error = %err, "finishing time not submitted");
            return;
        }
    };
    match client.submit_score(&record) {
        Ok(()) => debug!(session = id.0, time = record.time_seconds(), "score submitted"),
        Err(err) => warn!(session = id.0, error = %err, "score submission failed"),
    }
}

//! Structural properties of generated mazes.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;
use crate::ascii::render_ascii;
use crate::paths::{reachable_cells, shortest_path};
use crate::types::{Cell, Direction};

fn dims(width: usize, height: usize) -> MazeDimensions {
    MazeDimensions::new(width, height).expect("positive dimensions")
}

fn all_cells(maze: &Maze) -> impl Iterator<Item = Cell> {
    let (width, height) = (maze.width() as i32, maze.height() as i32);
    (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
}

fn walls_are_symmetric(maze: &Maze) -> bool {
    all_cells(maze).all(|cell| {
        Direction::ALL.into_iter().all(|direction| {
            let neighbor = cell.offset(direction);
            let Some(here) = maze.walls(cell) else {
                return false;
            };
            match maze.walls(neighbor) {
                Some(there) => here.has_wall(direction) == there.has_wall(direction.opposite()),
                // Boundary walls are never carved.
                None => here.has_wall(direction),
            }
        })
    })
}

fn is_perfect(maze: &Maze) -> bool {
    let cells = maze.width() * maze.height();
    maze.open_passages() == cells - 1 && reachable_cells(maze, maze.start()).len() == cells
}

struct RecordingObserver {
    frames: Vec<(usize, bool)>,
    fail_after: Option<usize>,
}

impl RecordingObserver {
    fn new() -> Self {
        Self { frames: Vec::new(), fail_after: None }
    }

    fn failing_after(frames: usize) -> Self {
        Self { frames: Vec::new(), fail_after: Some(frames) }
    }
}

impl BuildObserver for RecordingObserver {
    fn on_frame(&mut self, frame: &BuildFrame<'_>) -> Result<(), ObserverError> {
        if self.fail_after.is_some_and(|limit| self.frames.len() >= limit) {
            return Err(ObserverError::new("no frame scheduler"));
        }
        self.frames.push((frame.carved_cells, frame.complete));
        Ok(())
    }
}

#[test]
fn two_by_one_grid_has_exactly_one_east_west_passage() {
    let maze = generate_seeded(7, dims(2, 1));
    let left = maze.walls(Cell::new(0, 0)).expect("in bounds");
    let right = maze.walls(Cell::new(1, 0)).expect("in bounds");

    assert!(!left.east && !right.west);
    assert!(left.north && left.south && left.west);
    assert!(right.north && right.south && right.east);
    assert_eq!(maze.open_passages(), 1);
}

#[test]
fn single_cell_grid_stays_closed() {
    let maze = generate_seeded(1, dims(1, 1));
    assert_eq!(maze.open_passages(), 0);
    assert_eq!(maze.start(), maze.exit());
}

#[test]
fn always_first_choice_follows_enumeration_order() {
    // Always taking the first candidate snakes through a 3x2 grid.
    let maze = generate(dims(3, 2), &mut FnSource(|_len| 0));
    let path = shortest_path(&maze, maze.start(), maze.exit()).expect("connected");
    assert_eq!(
        path,
        [Direction::South, Direction::East, Direction::North, Direction::East, Direction::South],
        "\n{}",
        render_ascii(&maze, None)
    );
}

#[test]
fn same_seed_and_dimensions_reproduce_the_maze() {
    let first = generate_seeded(2026, dims(20, 20));
    let second = generate_seeded(2026, dims(20, 20));
    assert_eq!(first, second);
    assert_eq!(first.snapshot_hash(), second.snapshot_hash());

    let other = generate_seeded(2027, dims(20, 20));
    assert_ne!(first.snapshot_hash(), other.snapshot_hash());
}

#[test]
fn stepping_reports_every_carve_and_visits_each_cell_once() {
    let dimensions = dims(6, 4);
    let mut builder = Backtracker::new(dimensions);
    let mut rng = seeded_rng(5, dimensions);
    let mut carved = BTreeSet::new();
    carved.insert(dimensions.start());
    let mut backtracks = 0;

    loop {
        match builder.step(&mut rng) {
            CarveStep::Carved { from, to, direction } => {
                assert_eq!(from.offset(direction), to);
                assert!(carved.insert(to), "cell {to:?} carved twice");
                assert!(builder.maze().is_open(from, direction));
            }
            CarveStep::Backtracked(_) => backtracks += 1,
            CarveStep::Done => break,
        }
    }

    assert!(builder.is_done());
    assert_eq!(builder.stack_depth(), 0);
    assert_eq!(builder.visited_cells(), dimensions.cell_count());
    assert_eq!(carved.len(), dimensions.cell_count());
    // Every pushed cell is popped exactly once.
    assert_eq!(backtracks, dimensions.cell_count());
    assert_eq!(builder.step(&mut rng), CarveStep::Done);
}

#[test]
fn observed_build_matches_unobserved_build() {
    let dimensions = dims(9, 7);
    let plain = generate(dimensions, &mut seeded_rng(31, dimensions));

    let mut observer = RecordingObserver::new();
    let observed = generate_observed(dimensions, &mut seeded_rng(31, dimensions), &mut observer);

    assert_eq!(plain, observed);
    let carves = dimensions.cell_count() - 1;
    assert_eq!(observer.frames.len(), carves / FRAME_CADENCE + 1);
    assert_eq!(observer.frames.last(), Some(&(dimensions.cell_count(), true)));
    assert_eq!(observer.frames.first(), Some(&(1 + FRAME_CADENCE, false)));
}

#[test]
fn failing_observer_falls_back_without_changing_the_result() {
    let dimensions = dims(9, 7);
    let plain = generate(dimensions, &mut seeded_rng(31, dimensions));

    let mut observer = RecordingObserver::failing_after(2);
    let observed = generate_observed(dimensions, &mut seeded_rng(31, dimensions), &mut observer);

    assert_eq!(plain, observed);
    assert_eq!(observer.frames.len(), 2);
    assert!(observer.frames.iter().all(|&(_, complete)| !complete));
}

#[test]
fn progress_percent_reaches_one_hundred_at_completion() {
    let maze = Maze::closed(dims(2, 2));
    let frame = BuildFrame { maze: &maze, carved_cells: 2, total_cells: 4, complete: false };
    assert!((frame.progress_percent() - 50.0).abs() < f32::EPSILON);
    let done = BuildFrame { carved_cells: 4, complete: true, ..frame };
    assert!((done.progress_percent() - 100.0).abs() < f32::EPSILON);
}

#[test]
fn removing_any_passage_disconnects_its_endpoints() {
    let maze = generate_seeded(404, dims(6, 5));
    for cell in all_cells(&maze) {
        for direction in [Direction::East, Direction::South] {
            if !maze.is_open(cell, direction) {
                continue;
            }
            let mut cut = maze.clone();
            let neighbor = cell.offset(direction);
            let mut here = cut.walls(cell).expect("in bounds");
            let mut there = cut.walls(neighbor).expect("in bounds");
            here.set_wall(direction, true);
            there.set_wall(direction.opposite(), true);
            cut.set_walls(cell, here);
            cut.set_walls(neighbor, there);

            assert!(
                !reachable_cells(&cut, cell).contains(&neighbor),
                "passage {cell:?} -> {neighbor:?} is redundant\n{}",
                render_ascii(&maze, None)
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn generated_mazes_are_perfect_and_symmetric(
        seed in any::<u64>(),
        width in 1_usize..=24,
        height in 1_usize..=24
    ) {
        let maze = generate_seeded(seed, dims(width, height));
        prop_assert_eq!(maze.open_passages(), width * height - 1);
        prop_assert!(walls_are_symmetric(&maze), "seed={seed} {width}x{height} one-sided wall");
        prop_assert!(is_perfect(&maze), "seed={seed} {width}x{height} is not a spanning tree");
        prop_assert!(shortest_path(&maze, maze.start(), maze.exit()).is_some());
    }

    #[test]
    fn any_choice_function_yields_a_perfect_maze(
        choices in proptest::collection::vec(any::<usize>(), 1..64),
        width in 1_usize..=12,
        height in 1_usize..=12
    ) {
        let mut cursor = 0_usize;
        let mut source = FnSource(|len: usize| {
            let pick = choices[cursor % choices.len()] % len;
            cursor += 1;
            pick
        });
        let maze = generate(dims(width, height), &mut source);
        prop_assert!(walls_are_symmetric(&maze));
        prop_assert!(is_perfect(&maze));
    }
}

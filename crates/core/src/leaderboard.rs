//! Reference leaderboard ranking: best time per name, ascending, capped.

use std::collections::BTreeMap;

use crate::scoring::{
    LEADERBOARD_LIMIT, LeaderboardEntry, ScoreRecord, ScoringClient, ScoringError,
};

#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    pub fn record(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ranked(&self) -> Vec<LeaderboardEntry> {
        self.ranked_top(LEADERBOARD_LIMIT)
    }

    /// Ties on time are ordered by name so the ranking is stable.
    pub fn ranked_top(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut best: BTreeMap<&str, f64> = BTreeMap::new();
        for record in &self.records {
            let time = record.time_seconds();
            best.entry(record.name().as_str())
                .and_modify(|current| {
                    if time < *current {
                        *current = time;
                    }
                })
                .or_insert(time);
        }

        let mut entries: Vec<LeaderboardEntry> = best
            .into_iter()
            .map(|(name, best_time)| LeaderboardEntry { name: name.to_string(), best_time })
            .collect();
        entries.sort_by(|a, b| {
            a.best_time.total_cmp(&b.best_time).then_with(|| a.name.cmp(&b.name))
        });
        entries.truncate(limit);
        entries
    }
}

/// In-process scoring collaborator backed by a [`Leaderboard`].
#[derive(Clone, Debug, Default)]
pub struct LocalScoringClient {
    leaderboard: Leaderboard,
}

impl LocalScoringClient {
    pub fn new(leaderboard: Leaderboard) -> Self {
        Self { leaderboard }
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}

impl ScoringClient for LocalScoringClient {
    fn submit_score(&mut self, record: &ScoreRecord) -> Result<(), ScoringError> {
        self.leaderboard.record(record.clone());
        Ok(())
    }

    fn fetch_leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, ScoringError> {
        Ok(self.leaderboard.ranked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::PlayerName;

    fn record(name: &str, time: f64) -> ScoreRecord {
        ScoreRecord::new(PlayerName::new(name).expect("valid name"), time).expect("valid time")
    }

    fn entry(name: &str, best_time: f64) -> LeaderboardEntry {
        LeaderboardEntry { name: name.to_string(), best_time }
    }

    #[test]
    fn keeps_each_players_best_time_in_ascending_order() {
        let board = Leaderboard::from_records(vec![
            record("Ann", 12.30),
            record("Ann", 9.10),
            record("Bob", 15.00),
        ]);
        assert_eq!(board.ranked(), vec![entry("Ann", 9.10), entry("Bob", 15.00)]);
    }

    #[test]
    fn ties_are_broken_by_name() {
        let board = Leaderboard::from_records(vec![
            record("Zed", 10.0),
            record("Amy", 10.0),
            record("Kim", 3.0),
        ]);
        let names: Vec<_> = board.ranked().into_iter().map(|entry| entry.name).collect();
        assert_eq!(names, ["Kim", "Amy", "Zed"]);
    }

    #[test]
    fn ranking_is_capped_at_fifty_names() {
        let mut board = Leaderboard::new();
        for index in 0..60 {
            board.record(record(&format!("p{index:02}"), 100.0 - index as f64));
            board.record(record(&format!("p{index:02}"), 200.0));
        }
        let ranked = board.ranked();
        assert_eq!(ranked.len(), LEADERBOARD_LIMIT);
        assert_eq!(ranked[0], entry("p59", 41.0));
        assert!(ranked.windows(2).all(|pair| pair[0].best_time <= pair[1].best_time));
    }

    #[test]
    fn names_that_differ_only_by_padding_collapse_into_one_row() {
        let board = Leaderboard::from_records(vec![record("  Ann", 8.0), record("Ann  ", 7.5)]);
        assert_eq!(board.ranked(), vec![entry("Ann", 7.5)]);
    }

    #[test]
    fn local_client_serves_what_was_submitted() {
        let mut client = LocalScoringClient::default();
        client.submit_score(&record("Ann", 12.3)).expect("local submit");
        client.submit_score(&record("Ann", 9.1)).expect("local submit");
        client.submit_score(&record("Bob", 15.0)).expect("local submit");

        assert_eq!(client.leaderboard().len(), 3);
        assert_eq!(
            client.fetch_leaderboard().expect("local fetch"),
            vec![entry("Ann", 9.1), entry("Bob", 15.0)]
        );
    }
}

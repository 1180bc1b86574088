// Board coordinator: owns the current dataset and the load lifecycle.
use crate::analyzer::BoardStats;
use crate::model::BiddingRecord;
use tracing::info;

/// One fully loaded dataset. Replaced wholesale on every successful load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<BiddingRecord>,
    pub stats: BoardStats,
}

/// What the presentation layer sees. `Failed` is deliberately a separate
/// state from `Loaded` with zero records: "could not load" and "loaded
/// nothing" must stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Empty,
    Loaded(Dataset),
    Failed(String),
}

/// Single owner of the mutable dataset. Each load run takes a generation
/// token from `begin_load`; completions carrying a stale token are dropped,
/// so a newer load always supersedes an older in-flight one.
pub struct Board {
    generation: u64,
    state: LoadState,
}

impl Board {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: LoadState::Empty,
        }
    }

    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn complete_load(&mut self, token: u64, dataset: Dataset) -> bool {
        if token != self.generation {
            info!("Discarding stale load result (token {token}, current {})", self.generation);
            return false;
        }
        self.state = LoadState::Loaded(dataset);
        true
    }

    pub fn fail_load(&mut self, token: u64, error: String) -> bool {
        if token != self.generation {
            info!("Discarding stale load failure (token {token}, current {})", self.generation);
            return false;
        }
        self.state = LoadState::Failed(error);
        true
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_replaces_state() {
        let mut board = Board::new();
        assert_eq!(*board.state(), LoadState::Empty);

        let token = board.begin_load();
        assert!(board.complete_load(token, Dataset::default()));
        assert!(matches!(board.state(), LoadState::Loaded(_)));
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut board = Board::new();
        let first = board.begin_load();
        let second = board.begin_load();

        // The superseded load finishes last; its result must not win.
        assert!(board.complete_load(second, Dataset::default()));
        assert!(!board.fail_load(first, "too late".into()));
        assert!(matches!(board.state(), LoadState::Loaded(_)));
    }

    #[test]
    fn failure_is_distinct_from_empty_dataset() {
        let mut board = Board::new();
        let token = board.begin_load();
        assert!(board.fail_load(token, "connection refused".into()));
        assert_eq!(*board.state(), LoadState::Failed("connection refused".into()));
        assert_ne!(*board.state(), LoadState::Loaded(Dataset::default()));
    }
}

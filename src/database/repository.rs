use anyhow::Result;

use crate::domain::{NewPlayer, Player};
use crate::filters::Predicate;
use crate::pagination::PageRequest;

/// Persistence operations the player service depends on
pub trait PlayerRepository: Send + Sync {
    /// Stores a new player and returns it with its generated id.
    fn insert(&self, player: &NewPlayer) -> Result<Player>;

    fn find_by_id(&self, id: i64) -> Result<Option<Player>>;

    /// Overwrites the stored row with the same id. `None` when no such row.
    fn save(&self, player: &Player) -> Result<Option<Player>>;

    /// Returns whether a row was removed.
    fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Matching players, in id order unless a page request says otherwise.
    fn find_all(&self, predicate: &Predicate, page: Option<&PageRequest>) -> Result<Vec<Player>>;

    fn count(&self, predicate: &Predicate) -> Result<u64>;
}

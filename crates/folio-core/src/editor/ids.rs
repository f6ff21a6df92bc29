use folio_storage::time_utils;
use parking_lot::Mutex;

/// Mints record ids from the wall clock in milliseconds.
///
/// Ids handed out by one minter strictly increase, even when the clock
/// stalls or steps backwards, and always exceed every id already present in
/// the target collection.
#[derive(Debug)]
pub struct IdMinter {
    clock: fn() -> i64,
    last: Mutex<i64>,
}

impl IdMinter {
    pub fn new() -> Self {
        Self::with_clock(time_utils::now_ms)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self {
            clock,
            last: Mutex::new(0),
        }
    }

    /// Next id for a collection currently holding `existing` ids.
    pub fn mint(&self, existing: impl IntoIterator<Item = i64>) -> i64 {
        let floor = existing.into_iter().max().unwrap_or(0).saturating_add(1);
        let mut last = self.last.lock();
        let id = (self.clock)()
            .max(last.saturating_add(1))
            .max(floor)
            .max(1);
        *last = id;
        id
    }
}

impl Default for IdMinter {
    fn default() -> Self {
        Self::new()
    }
}

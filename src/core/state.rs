use crate::models::WeekEntry;

/// The in-memory entry collection plus a change counter.
///
/// All mutation goes through `add`, `delete` and `replace`; each call that
/// changes the collection bumps `version`, which is what the shell compares
/// against the last persisted version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    entries: Vec<WeekEntry>,
    version: u64,
}

impl AppState {
    pub fn new(entries: Vec<WeekEntry>) -> Self {
        Self {
            entries,
            version: 0,
        }
    }

    pub fn entries(&self) -> &[WeekEntry] {
        &self.entries
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry. Duplicate (year, week) slots are allowed.
    pub fn add(&mut self, entry: WeekEntry) {
        self.entries.push(entry);
        self.version += 1;
    }

    /// Remove every entry structurally equal to `entry`.
    /// Returns the number of removed rows.
    pub fn delete(&mut self, entry: &WeekEntry) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e != entry);
        let removed = before - self.entries.len();

        if removed > 0 {
            self.version += 1;
        }
        removed
    }

    /// Swap the whole collection (import).
    pub fn replace(&mut self, entries: Vec<WeekEntry>) {
        self.entries = entries;
        self.version += 1;
    }
}

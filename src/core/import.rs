use crate::core::app::App;
use crate::errors::AppResult;
use crate::export::import_from_file;
use crate::ui::messages::{info, success};
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Question shown before an import replaces the current collection.
    pub fn confirmation_prompt(current: usize, imported: usize) -> String {
        format!(
            "Replace {} current entries with {} imported entries? This cannot be undone.",
            current, imported
        )
    }

    /// Read `path` and, once `confirm` agrees, replace the whole collection.
    ///
    /// Returns the number of imported entries, or `None` when the user
    /// declined. Read and format errors are returned before anything is
    /// asked or changed.
    pub fn apply<F>(app: &mut App, path: &Path, confirm: F) -> AppResult<Option<usize>>
    where
        F: FnOnce(&str) -> bool,
    {
        let imported = import_from_file(path)?;
        let count = imported.len();

        if !confirm(&Self::confirmation_prompt(app.entries().len(), count)) {
            info("Import cancelled.");
            return Ok(None);
        }

        app.replace(imported);
        app.commit();

        let target = path.to_string_lossy();
        app.record("import", &target, &format!("replaced collection with {} entries", count));
        success(format!("Imported {} entries from {}.", count, path.display()));

        Ok(Some(count))
    }
}

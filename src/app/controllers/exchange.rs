use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::domain::resume::ResumeData;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::shell::Shell;
use crate::app::infrastructure::visual::VisualPage;
use crate::app::services::extractor::extract;
use crate::app::services::renderer::{apply, update_avatar};
use crate::app::services::storage::{KeyValueStore, RecordStore};
use crate::app::state::EditorSession;

const SAVED_MSG: &str = "Saved locally. You can Export JSON to share or Print to PDF.";
const IMPORTED_MSG: &str = "Imported successfully.";
const INVALID_IMPORT_MSG: &str = "Invalid JSON file.";
const RESET_PROMPT: &str =
    "Reset resume to the original template? This will clear local saved data.";

/// Orchestrates the save / reset / print / export / import flows over the
/// record store, the shell, and the editor session.
pub struct ExchangeController<S: KeyValueStore, H: Shell> {
    store: RecordStore<S>,
    shell: H,
    export_dir: PathBuf,
}

impl<S: KeyValueStore, H: Shell> ExchangeController<S, H> {
    pub fn new(store: RecordStore<S>, shell: H, export_dir: PathBuf) -> Self {
        Self {
            store,
            shell,
            export_dir,
        }
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Startup path: apply the stored record when one exists, refresh the
    /// avatar, and force Viewing mode. Also runs after a reset.
    pub fn restore<P: VisualPage>(&mut self, session: &mut EditorSession<P>) {
        if let Some(data) = self.store.load() {
            apply(&mut session.page, &data);
        }
        update_avatar(&mut session.page);
        session.edit.toggle(&mut session.page, Some(false));
    }

    /// Extract the page, persist the snapshot, confirm, leave edit mode.
    pub fn save<P: VisualPage>(&mut self, session: &mut EditorSession<P>) -> Result<()> {
        let data = extract(&session.page);
        self.store.save(&data)?;
        self.shell.notify(SAVED_MSG);
        session.edit.toggle(&mut session.page, Some(false));
        Ok(())
    }

    /// Clear the stored record and reload the pristine template, after user
    /// confirmation. Returns whether the reset actually happened.
    pub fn reset<P: VisualPage>(&mut self, session: &mut EditorSession<P>) -> Result<bool> {
        if !self.shell.confirm(RESET_PROMPT) {
            return Ok(false);
        }
        self.store.clear()?;
        session.page.reload_template();
        self.restore(session);
        info!("resume reset to template");
        Ok(true)
    }

    /// Leave edit mode, then hand the page to the print subsystem.
    pub fn print<P: VisualPage>(&mut self, session: &mut EditorSession<P>) {
        session.edit.toggle(&mut session.page, Some(false));
        let rendered = session.page.render_text();
        self.shell.print(&rendered);
    }

    /// Extract the page and write it as pretty-printed JSON, named after the
    /// current full name. Returns the written path.
    pub fn export<P: VisualPage>(&mut self, session: &EditorSession<P>) -> Result<PathBuf> {
        let data = extract(&session.page);
        let path = self
            .export_dir
            .join(format!("{}.json", export_stem(&data.full_name)));

        fs::create_dir_all(&self.export_dir)?;
        fs::write(&path, data.to_json_pretty()?)?;
        self.shell.notify(&format!("Exported {}", path.display()));
        Ok(path)
    }

    /// Read and parse a user-selected file, then render and persist it. A
    /// `None` path (no file selected) terminates the flow with no side
    /// effects; unreadable or unparseable files are reported and change
    /// nothing.
    pub fn import<P: VisualPage>(
        &mut self,
        session: &mut EditorSession<P>,
        path: Option<&Path>,
    ) -> Result<()> {
        let Some(path) = path else {
            return Ok(());
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                self.shell.notify(&format!("Could not read file: {}", e));
                return Ok(());
            }
        };

        match ResumeData::from_json(&text) {
            Ok(data) => {
                apply(&mut session.page, &data);
                self.store.save(&data)?;
                self.shell.notify(IMPORTED_MSG);
            }
            Err(e) => {
                info!("rejected import of {}: {}", path.display(), e);
                self.shell.notify(INVALID_IMPORT_MSG);
            }
        }
        Ok(())
    }
}

/// Export file stem: the full name with whitespace runs collapsed to single
/// underscores, or "resume" when the name is empty.
fn export_stem(full_name: &str) -> String {
    let stem = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        "resume".to_string()
    } else {
        stem
    }
}

use crate::app::controllers::edit_mode::EditModeController;
use crate::app::infrastructure::visual::VisualPage;

/// The live editing session: the visual page plus the edit-mode flag.
///
/// Constructed once at startup and handed to the controllers, so there is no
/// hidden module-level state shared between them.
pub struct EditorSession<P: VisualPage> {
    pub page: P,
    pub edit: EditModeController,
}

impl<P: VisualPage> EditorSession<P> {
    pub fn new(page: P) -> Self {
        Self {
            page,
            edit: EditModeController::new(),
        }
    }

    pub fn toggle_edit(&mut self) {
        self.edit.toggle(&mut self.page, None);
    }
}

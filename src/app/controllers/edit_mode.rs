use crate::app::infrastructure::visual::VisualPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// Sole owner of the page's editability. Starts in Viewing; every transition
/// pushes the matching button label to the page, and entering Editing focuses
/// the first editable field.
#[derive(Debug, Default)]
pub struct EditModeController {
    mode: EditMode,
}

impl EditModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn label(&self) -> &'static str {
        match self.mode {
            EditMode::Viewing => "Edit",
            EditMode::Editing => "Stop editing",
        }
    }

    /// Switch to the explicit target state, or flip when none is given.
    pub fn toggle(&mut self, page: &mut impl VisualPage, explicit: Option<bool>) {
        let editing = explicit.unwrap_or(!self.is_editing());
        self.mode = if editing { EditMode::Editing } else { EditMode::Viewing };

        page.set_editable(editing);
        page.set_edit_label(self.label());
        if editing {
            page.focus_first_editable();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::page::ResumePage;

    #[test]
    fn test_initial_state_is_viewing() {
        let edit = EditModeController::new();
        assert_eq!(edit.mode(), EditMode::Viewing);
        assert_eq!(edit.label(), "Edit");
    }

    #[test]
    fn test_toggle_flips_and_updates_page() {
        let mut page = ResumePage::new();
        let mut edit = EditModeController::new();

        edit.toggle(&mut page, None);
        assert!(edit.is_editing());
        assert!(page.is_editable());
        assert_eq!(page.edit_label(), "Stop editing");
        assert!(page.focused_field().is_some());
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let mut page = ResumePage::new();
        let mut edit = EditModeController::new();

        edit.toggle(&mut page, None);
        edit.toggle(&mut page, None);

        assert_eq!(edit.mode(), EditMode::Viewing);
        assert!(!page.is_editable());
        assert_eq!(page.edit_label(), "Edit");
    }

    #[test]
    fn test_explicit_target_state() {
        let mut page = ResumePage::new();
        let mut edit = EditModeController::new();

        edit.toggle(&mut page, Some(false));
        assert!(!edit.is_editing());

        edit.toggle(&mut page, Some(true));
        assert!(edit.is_editing());

        // explicit same-state transition is a stable no-op
        edit.toggle(&mut page, Some(true));
        assert!(edit.is_editing());
        assert!(page.is_editable());
    }
}

/// Scalar text fields of the page, addressed by stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FullName,
    Tagline,
    Contact,
    Summary,
    Education,
    Avatar,
}

/// Repeated sections whose entries are plain text items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSection {
    Projects,
    Certs,
}

/// A skill bar as it appears on the page: label text plus the style width of
/// the filled bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSlot {
    pub name: String,
    pub width: String,
}

/// One job article as it appears on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSlot {
    pub title: String,
    pub meta: String,
    pub desc: String,
}

/// Port to the visual document.
///
/// Implementations hold the human-visible page content; extraction and
/// rendering go exclusively through this trait so the mapping stays testable
/// without a real rendering surface. Reads are best-effort: a field or section
/// the page does not have yields empty text or an empty list, and writes to a
/// missing element are silently dropped.
pub trait VisualPage {
    fn field_text(&self, field: TextField) -> String;
    fn set_field_text(&mut self, field: TextField, text: &str);

    /// Skill slots in display order.
    fn skills(&self) -> Vec<SkillSlot>;

    /// Update the skill slot at `index` in place. `None` keeps the existing
    /// name or width; an out-of-range index is ignored. Never creates slots.
    fn update_skill(&mut self, index: usize, name: Option<&str>, width: Option<&str>);

    /// Job articles in display order.
    fn jobs(&self) -> Vec<JobSlot>;

    /// Clear the experience section and recreate one article per entry, in
    /// order. Implementations number the new articles 1-based by position.
    fn rebuild_jobs(&mut self, jobs: &[JobSlot]);

    /// Items of a plain-text list section, in display order.
    fn list_items(&self, section: ListSection) -> Vec<String>;

    /// Clear a list section and recreate one item per entry, in order.
    fn rebuild_list(&mut self, section: ListSection, items: &[String]);

    /// Mark every editable-capable element mutable or immutable. Elements
    /// created by rebuilds inherit the current setting.
    fn set_editable(&mut self, editable: bool);

    /// Move input focus to the first editable-capable element.
    fn focus_first_editable(&mut self);

    /// Update the label of the edit toggle button.
    fn set_edit_label(&mut self, label: &str);

    /// Throw away all content and reinitialize from the built-in template.
    fn reload_template(&mut self);

    /// Plain-text projection of the whole page, for printing.
    fn render_text(&self) -> String;
}

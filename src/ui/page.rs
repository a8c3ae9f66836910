use std::fmt::Write as _;

use crate::app::infrastructure::visual::{
    JobSlot, ListSection, SkillSlot, TextField, VisualPage,
};

#[derive(Debug, Clone)]
struct SkillNode {
    name: String,
    width: String,
}

#[derive(Debug, Clone)]
struct JobNode {
    number: usize,
    title: String,
    meta: String,
    desc: String,
}

/// In-memory résumé page.
///
/// Holds the same content tree the rendered page would: scalar text nodes,
/// skill bars with a style width, numbered job articles, and two bullet
/// lists, plus the UI state the edit toggle drives (editability, focus, the
/// edit-button label). Constructed from the built-in template.
#[derive(Debug, Clone)]
pub struct ResumePage {
    full_name: String,
    tagline: String,
    contact: String,
    summary: String,
    education: String,
    avatar: String,
    skills: Vec<SkillNode>,
    jobs: Vec<JobNode>,
    projects: Vec<String>,
    certs: Vec<String>,
    editable: bool,
    focused: Option<TextField>,
    edit_label: String,
}

impl ResumePage {
    pub fn new() -> Self {
        Self {
            full_name: "Taylor Anderson".to_string(),
            tagline: "Senior Product Engineer".to_string(),
            contact: "taylor@example.com · +1 555 0100 · Portland, OR".to_string(),
            summary: "Product-minded engineer with ten years of experience taking \
                      ideas from sketch to shipped, comfortable across the stack \
                      and happiest close to users."
                .to_string(),
            education: "B.S. Computer Science, Oregon State University, 2014".to_string(),
            avatar: "TA".to_string(),
            skills: vec![
                SkillNode { name: "Rust".to_string(), width: "90%".to_string() },
                SkillNode { name: "Distributed Systems".to_string(), width: "80%".to_string() },
                SkillNode { name: "Technical Writing".to_string(), width: "70%".to_string() },
                SkillNode { name: "UI Prototyping".to_string(), width: "60%".to_string() },
            ],
            jobs: vec![
                JobNode {
                    number: 1,
                    title: "Senior Product Engineer".to_string(),
                    meta: "Driftwood Labs · 2019 – present".to_string(),
                    desc: "Leads the storage team; cut sync latency by 40% and \
                           mentors four engineers."
                        .to_string(),
                },
                JobNode {
                    number: 2,
                    title: "Software Engineer".to_string(),
                    meta: "Cascade Analytics · 2014 – 2019".to_string(),
                    desc: "Built the ingestion pipeline and the first versions of \
                           the reporting UI."
                        .to_string(),
                },
            ],
            projects: vec![
                "resupad — this résumé editor".to_string(),
                "chartvane — terminal dashboards for time series".to_string(),
                "fold — a tiny configuration language".to_string(),
            ],
            certs: vec![
                "AWS Solutions Architect Associate".to_string(),
                "Certified Kubernetes Application Developer".to_string(),
            ],
            editable: false,
            focused: None,
            edit_label: "Edit".to_string(),
        }
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn focused_field(&self) -> Option<TextField> {
        self.focused
    }

    pub fn edit_label(&self) -> &str {
        &self.edit_label
    }

    /// 1-based position numbers of the job articles, in display order.
    pub fn job_numbers(&self) -> Vec<usize> {
        self.jobs.iter().map(|j| j.number).collect()
    }

    /// Edit a scalar field the way typing into the page would. Rejected (and
    /// returns `false`) while the page is read-only or for the derived avatar
    /// field.
    pub fn try_edit_field(&mut self, field: TextField, text: &str) -> bool {
        if !self.editable || field == TextField::Avatar {
            return false;
        }
        self.set_field_text(field, text);
        self.focused = Some(field);
        true
    }

    fn field(&self, field: TextField) -> &String {
        match field {
            TextField::FullName => &self.full_name,
            TextField::Tagline => &self.tagline,
            TextField::Contact => &self.contact,
            TextField::Summary => &self.summary,
            TextField::Education => &self.education,
            TextField::Avatar => &self.avatar,
        }
    }

    fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::Tagline => &mut self.tagline,
            TextField::Contact => &mut self.contact,
            TextField::Summary => &mut self.summary,
            TextField::Education => &mut self.education,
            TextField::Avatar => &mut self.avatar,
        }
    }

    fn list(&self, section: ListSection) -> &Vec<String> {
        match section {
            ListSection::Projects => &self.projects,
            ListSection::Certs => &self.certs,
        }
    }

    fn list_mut(&mut self, section: ListSection) -> &mut Vec<String> {
        match section {
            ListSection::Projects => &mut self.projects,
            ListSection::Certs => &mut self.certs,
        }
    }
}

impl Default for ResumePage {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualPage for ResumePage {
    fn field_text(&self, field: TextField) -> String {
        self.field(field).clone()
    }

    fn set_field_text(&mut self, field: TextField, text: &str) {
        *self.field_mut(field) = text.to_string();
    }

    fn skills(&self) -> Vec<SkillSlot> {
        self.skills
            .iter()
            .map(|s| SkillSlot {
                name: s.name.clone(),
                width: s.width.clone(),
            })
            .collect()
    }

    fn update_skill(&mut self, index: usize, name: Option<&str>, width: Option<&str>) {
        let Some(slot) = self.skills.get_mut(index) else {
            return;
        };
        if let Some(name) = name {
            slot.name = name.to_string();
        }
        if let Some(width) = width {
            slot.width = width.to_string();
        }
    }

    fn jobs(&self) -> Vec<JobSlot> {
        self.jobs
            .iter()
            .map(|j| JobSlot {
                title: j.title.clone(),
                meta: j.meta.clone(),
                desc: j.desc.clone(),
            })
            .collect()
    }

    fn rebuild_jobs(&mut self, jobs: &[JobSlot]) {
        self.jobs = jobs
            .iter()
            .enumerate()
            .map(|(i, j)| JobNode {
                number: i + 1,
                title: j.title.clone(),
                meta: j.meta.clone(),
                desc: j.desc.clone(),
            })
            .collect();
    }

    fn list_items(&self, section: ListSection) -> Vec<String> {
        self.list(section).clone()
    }

    fn rebuild_list(&mut self, section: ListSection, items: &[String]) {
        *self.list_mut(section) = items.to_vec();
    }

    fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        if !editable {
            self.focused = None;
        }
    }

    fn focus_first_editable(&mut self) {
        if self.editable {
            self.focused = Some(TextField::FullName);
        }
    }

    fn set_edit_label(&mut self, label: &str) {
        self.edit_label = label.to_string();
    }

    fn reload_template(&mut self) {
        *self = ResumePage::new();
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[{}] {}", self.avatar, self.full_name);
        let _ = writeln!(out, "{}", self.tagline);
        let _ = writeln!(out, "{}", self.contact);

        let _ = writeln!(out, "\nSummary\n{}", self.summary);

        let _ = writeln!(out, "\nSkills");
        for skill in &self.skills {
            let _ = writeln!(out, "  {} [{}]", skill.name, skill.width);
        }

        let _ = writeln!(out, "\nExperience");
        for job in &self.jobs {
            let _ = writeln!(out, "  {}. {}", job.number, job.title);
            let _ = writeln!(out, "     {}", job.meta);
            let _ = writeln!(out, "     {}", job.desc);
        }

        let _ = writeln!(out, "\nEducation\n{}", self.education);

        let _ = writeln!(out, "\nProjects");
        for item in &self.projects {
            let _ = writeln!(out, "  - {}", item);
        }

        let _ = writeln!(out, "\nCertifications");
        for item in &self.certs {
            let _ = writeln!(out, "  - {}", item);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_populated() {
        let page = ResumePage::new();
        assert!(!page.field_text(TextField::FullName).is_empty());
        assert_eq!(page.field_text(TextField::Avatar), "TA");
        assert!(!page.skills().is_empty());
        assert!(!page.jobs().is_empty());
        assert!(!page.list_items(ListSection::Projects).is_empty());
        assert!(!page.is_editable());
        assert_eq!(page.edit_label(), "Edit");
    }

    #[test]
    fn test_reload_template_discards_changes() {
        let mut page = ResumePage::new();
        let pristine = page.render_text();

        page.set_field_text(TextField::FullName, "Changed");
        page.rebuild_list(ListSection::Certs, &[]);
        page.reload_template();

        assert_eq!(page.render_text(), pristine);
    }

    #[test]
    fn test_edit_rejected_while_viewing() {
        let mut page = ResumePage::new();
        let before = page.field_text(TextField::Summary);

        assert!(!page.try_edit_field(TextField::Summary, "nope"));
        assert_eq!(page.field_text(TextField::Summary), before);
    }

    #[test]
    fn test_edit_accepted_while_editing() {
        let mut page = ResumePage::new();
        page.set_editable(true);

        assert!(page.try_edit_field(TextField::Summary, "updated"));
        assert_eq!(page.field_text(TextField::Summary), "updated");
        assert_eq!(page.focused_field(), Some(TextField::Summary));
    }

    #[test]
    fn test_avatar_is_never_directly_editable() {
        let mut page = ResumePage::new();
        page.set_editable(true);
        assert!(!page.try_edit_field(TextField::Avatar, "XX"));
    }

    #[test]
    fn test_leaving_edit_mode_drops_focus() {
        let mut page = ResumePage::new();
        page.set_editable(true);
        page.focus_first_editable();
        assert_eq!(page.focused_field(), Some(TextField::FullName));

        page.set_editable(false);
        assert!(page.focused_field().is_none());
    }

    #[test]
    fn test_update_skill_out_of_range_is_ignored() {
        let mut page = ResumePage::new();
        let before = page.skills();
        page.update_skill(before.len() + 5, Some("Ghost"), Some("1%"));
        assert_eq!(page.skills(), before);
    }

    #[test]
    fn test_rebuild_jobs_renumbers_from_one() {
        let mut page = ResumePage::new();
        page.rebuild_jobs(&[
            JobSlot {
                title: "Only".to_string(),
                meta: "Meta".to_string(),
                desc: "Desc".to_string(),
            },
        ]);
        assert_eq!(page.job_numbers(), vec![1]);

        page.rebuild_jobs(&[]);
        assert!(page.job_numbers().is_empty());
        assert!(page.jobs().is_empty());
    }

    #[test]
    fn test_render_text_carries_page_content() {
        let page = ResumePage::new();
        let text = page.render_text();
        assert!(text.contains("Taylor Anderson"));
        assert!(text.contains("Rust [90%]"));
        assert!(text.contains("1. Senior Product Engineer"));
        assert!(text.contains("Certifications"));
    }
}

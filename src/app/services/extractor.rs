use crate::app::domain::resume::{Experience, ResumeData, Skill};
use crate::app::infrastructure::visual::{ListSection, TextField, VisualPage};

/// Read the current page into a fresh record.
///
/// Best-effort by contract: elements the page lacks come back as empty
/// strings or empty lists, section order is preserved, and every text value
/// is trimmed. There is no error path.
pub fn extract(page: &impl VisualPage) -> ResumeData {
    let skills = page
        .skills()
        .into_iter()
        .map(|s| Skill {
            name: s.name.trim().to_string(),
            percent: s.width.trim().to_string(),
        })
        .collect();

    let experience = page
        .jobs()
        .into_iter()
        .map(|j| Experience {
            title: j.title.trim().to_string(),
            meta: j.meta.trim().to_string(),
            desc: j.desc.trim().to_string(),
        })
        .collect();

    ResumeData {
        full_name: page.field_text(TextField::FullName).trim().to_string(),
        tagline: page.field_text(TextField::Tagline).trim().to_string(),
        contact: page.field_text(TextField::Contact).trim().to_string(),
        summary: page.field_text(TextField::Summary).trim().to_string(),
        skills: Some(skills),
        experience: Some(experience),
        education: page.field_text(TextField::Education).trim().to_string(),
        projects: Some(trimmed_items(page, ListSection::Projects)),
        certs: Some(trimmed_items(page, ListSection::Certs)),
    }
}

fn trimmed_items(page: &impl VisualPage, section: ListSection) -> Vec<String> {
    page.list_items(section)
        .into_iter()
        .map(|item| item.trim().to_string())
        .collect()
}

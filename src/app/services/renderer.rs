use crate::app::domain::resume::{initials, ResumeData};
use crate::app::infrastructure::visual::{JobSlot, ListSection, TextField, VisualPage};

/// Write a record into the page.
///
/// Scalar fields overwrite only when non-empty; list sections are cleared and
/// rebuilt whenever the record carries them, even empty. Skill slots are
/// updated in place: existing slots beyond the record are left alone, record
/// entries beyond the existing slots are dropped. Finishes by recomputing the
/// avatar initials from the page's current full name.
pub fn apply(page: &mut impl VisualPage, data: &ResumeData) {
    set_if_present(page, TextField::FullName, &data.full_name);
    set_if_present(page, TextField::Tagline, &data.tagline);
    set_if_present(page, TextField::Contact, &data.contact);
    set_if_present(page, TextField::Summary, &data.summary);

    if let Some(skills) = &data.skills {
        for (i, skill) in skills.iter().enumerate() {
            page.update_skill(i, non_empty(&skill.name), non_empty(&skill.percent));
        }
    }

    if let Some(jobs) = &data.experience {
        let slots: Vec<JobSlot> = jobs
            .iter()
            .map(|j| JobSlot {
                title: j.title.clone(),
                meta: j.meta.clone(),
                desc: j.desc.clone(),
            })
            .collect();
        page.rebuild_jobs(&slots);
    }

    set_if_present(page, TextField::Education, &data.education);

    if let Some(items) = &data.projects {
        page.rebuild_list(ListSection::Projects, items);
    }
    if let Some(items) = &data.certs {
        page.rebuild_list(ListSection::Certs, items);
    }

    update_avatar(page);
}

/// Recompute the avatar initials from the page's full name.
pub fn update_avatar(page: &mut impl VisualPage) {
    let name = page.field_text(TextField::FullName);
    page.set_field_text(TextField::Avatar, &initials(name.trim()));
}

fn set_if_present(page: &mut impl VisualPage, field: TextField, value: &str) {
    if !value.is_empty() {
        page.set_field_text(field, value);
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

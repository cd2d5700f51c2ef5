//! Data-quality inspection for a résumé document.
//!
//! Rendering never fails on bad data; it degrades by omission. This module
//! reports what was degraded so the host can surface it next to the preview.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;
use crate::render::format::{parse_month, MAX_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    DuplicateId,
    LevelOutOfRange,
    MalformedDate,
    AttachmentMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataIssue {
    pub kind: IssueKind,
    pub section: Section,
    pub item_id: Option<String>,
    pub message: String,
}

impl DataIssue {
    fn new(kind: IssueKind, section: Section, item_id: &str, message: String) -> Self {
        Self {
            kind,
            section,
            item_id: if item_id.is_empty() {
                None
            } else {
                Some(item_id.to_string())
            },
            message,
        }
    }
}

/// Collects every data-quality issue, in section order then item order.
pub fn inspect(data: &ResumeData) -> Vec<DataIssue> {
    let mut issues = Vec::new();

    check_ids(
        &mut issues,
        Section::Experience,
        data.experience.iter().map(|e| e.id.as_str()),
    );
    for exp in &data.experience {
        check_date(&mut issues, Section::Experience, &exp.id, "startDate", &exp.start_date);
        if !exp.current {
            check_date(&mut issues, Section::Experience, &exp.id, "endDate", &exp.end_date);
        }
    }

    check_ids(
        &mut issues,
        Section::Education,
        data.education.iter().map(|e| e.id.as_str()),
    );
    for edu in &data.education {
        check_date(&mut issues, Section::Education, &edu.id, "startDate", &edu.start_date);
        check_date(&mut issues, Section::Education, &edu.id, "endDate", &edu.end_date);
    }

    check_ids(
        &mut issues,
        Section::Skills,
        data.skills.iter().map(|s| s.id.as_str()),
    );
    for skill in &data.skills {
        if !(1..=MAX_LEVEL).contains(&skill.level) {
            issues.push(DataIssue::new(
                IssueKind::LevelOutOfRange,
                Section::Skills,
                &skill.id,
                format!(
                    "Skill '{}' has level {}; expected 1 to {MAX_LEVEL}",
                    skill.name, skill.level
                ),
            ));
        }
    }

    check_ids(
        &mut issues,
        Section::Certifications,
        data.certifications.iter().map(|c| c.id.as_str()),
    );
    for cert in &data.certifications {
        check_date(&mut issues, Section::Certifications, &cert.id, "date", &cert.date);
        if cert.attachment_name.is_some() != cert.attachment_data.is_some() {
            issues.push(DataIssue::new(
                IssueKind::AttachmentMismatch,
                Section::Certifications,
                &cert.id,
                format!(
                    "Certification '{}' has only one of attachmentName/attachmentData",
                    cert.name
                ),
            ));
        }
    }

    check_ids(
        &mut issues,
        Section::Projects,
        data.projects.iter().map(|p| p.id.as_str()),
    );
    for proj in &data.projects {
        check_date(&mut issues, Section::Projects, &proj.id, "startDate", &proj.start_date);
        check_date(&mut issues, Section::Projects, &proj.id, "endDate", &proj.end_date);
    }

    issues
}

fn check_ids<'a>(
    issues: &mut Vec<DataIssue>,
    section: Section,
    ids: impl Iterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            issues.push(DataIssue::new(
                IssueKind::DuplicateId,
                section,
                id,
                format!("Id '{id}' appears more than once"),
            ));
        }
    }
}

fn check_date(
    issues: &mut Vec<DataIssue>,
    section: Section,
    item_id: &str,
    field: &str,
    value: &str,
) {
    if value.trim().is_empty() || parse_month(value).is_some() {
        return;
    }
    issues.push(DataIssue::new(
        IssueKind::MalformedDate,
        section,
        item_id,
        format!("{field} '{value}' is not in YYYY-MM form"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{CertificationItem, ExperienceItem, SkillItem};

    #[test]
    fn test_sample_is_clean() {
        assert!(inspect(&ResumeData::sample()).is_empty());
    }

    #[test]
    fn test_empty_is_clean() {
        assert!(inspect(&ResumeData::default()).is_empty());
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let mut data = ResumeData::default();
        for _ in 0..3 {
            data.skills.push(SkillItem {
                id: "s1".to_string(),
                ..Default::default()
            });
        }
        let issues = inspect(&data);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::DuplicateId);
        assert_eq!(issues[0].section, Section::Skills);
        assert_eq!(issues[0].item_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_same_id_in_different_lists_is_fine() {
        let mut data = ResumeData::default();
        data.skills.push(SkillItem {
            id: "x".to_string(),
            ..Default::default()
        });
        data.experience.push(ExperienceItem {
            id: "x".to_string(),
            ..Default::default()
        });
        assert!(inspect(&data).is_empty());
    }

    #[test]
    fn test_level_out_of_range() {
        let mut data = ResumeData::default();
        data.skills.push(SkillItem {
            id: "s1".to_string(),
            name: "Rust".to_string(),
            level: 7,
            ..Default::default()
        });
        data.skills.push(SkillItem {
            id: "s2".to_string(),
            level: 0,
            ..Default::default()
        });
        let issues = inspect(&data);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.kind == IssueKind::LevelOutOfRange));
        assert!(issues[0].message.contains("Rust"));
    }

    #[test]
    fn test_malformed_date_skipped_when_current() {
        let mut data = ResumeData::default();
        data.experience.push(ExperienceItem {
            id: "e1".to_string(),
            start_date: "March 2020".to_string(),
            end_date: "garbage".to_string(),
            current: true,
            ..Default::default()
        });
        let issues = inspect(&data);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MalformedDate);
        assert!(issues[0].message.starts_with("startDate"));
    }

    #[test]
    fn test_attachment_mismatch() {
        let mut data = ResumeData::default();
        data.certifications.push(CertificationItem {
            id: "c1".to_string(),
            attachment_name: Some("cert.pdf".to_string()),
            ..Default::default()
        });
        let issues = inspect(&data);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::AttachmentMismatch);
    }

    #[test]
    fn test_section_order() {
        let mut data = ResumeData::default();
        data.certifications.push(CertificationItem {
            id: "c1".to_string(),
            date: "bad".to_string(),
            ..Default::default()
        });
        data.experience.push(ExperienceItem {
            id: "e1".to_string(),
            start_date: "bad".to_string(),
            ..Default::default()
        });
        let sections: Vec<Section> = inspect(&data).iter().map(|i| i.section).collect();
        assert_eq!(sections, vec![Section::Experience, Section::Certifications]);
    }
}

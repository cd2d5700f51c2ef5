//! Résumé data model: the document the host edits and the renderer reads.
//!
//! Every struct is a plain value object. All fields default so that partial
//! documents (or `{}`) deserialize; an empty string means "absent" everywhere.

use serde::{Deserialize, Serialize};

use crate::render::format::non_empty;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub summary: String,
    /// Embedded image, usually a base64 `data:` URI.
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: String,
    /// `YYYY-MM` or empty.
    pub start_date: String,
    pub end_date: String,
    /// When true, `end_date` is ignored for display and "Present" is shown.
    pub current: bool,
    pub location: String,
    pub description: String,
    pub highlights: Vec<String>,
}

impl ExperienceItem {
    /// Highlights with blank entries removed, order preserved.
    pub fn visible_highlights(&self) -> impl Iterator<Item = &str> {
        self.highlights
            .iter()
            .map(|h| h.as_str())
            .filter(|h| !h.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub description: String,
}

impl EducationItem {
    /// "Bachelor of Science in Computer Science", or whichever half is set.
    /// Empty when neither is.
    pub fn degree_line(&self) -> String {
        match (non_empty(&self.degree), non_empty(&self.field)) {
            (Some(degree), Some(field)) => format!("{} in {}", degree.trim(), field.trim()),
            (Some(only), None) | (None, Some(only)) => only.trim().to_string(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    /// Proficiency 1–5. Values outside the range are clamped at render time.
    pub level: i32,
    /// Grouping used by the editor only; never rendered.
    pub category: String,
}

impl Default for SkillItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            level: 3,
            category: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationItem {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
    pub attachment_name: Option<String>,
    pub attachment_data: Option<String>,
}

impl CertificationItem {
    /// Attachment name, if one is present and non-blank.
    pub fn attachment(&self) -> Option<&str> {
        self.attachment_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub url: String,
    pub start_date: String,
    pub end_date: String,
}

/// Aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillItem>,
    pub certifications: Vec<CertificationItem>,
    pub projects: Vec<ProjectItem>,
    pub selected_template: String,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
            selected_template: "modern".to_string(),
            accent_color: None,
            font_family: None,
        }
    }
}

fn s(v: &str) -> String {
    v.to_string()
}

impl ResumeData {
    /// The seed document the editor opens with.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: s("Alex Johnson"),
                job_title: s("Senior Software Engineer"),
                email: s("alex.johnson@email.com"),
                phone: s("+1 (555) 123-4567"),
                location: s("San Francisco, CA"),
                linkedin: s("linkedin.com/in/alexjohnson"),
                github: s("github.com/alexjohnson"),
                website: s("alexjohnson.dev"),
                summary: s("Passionate software engineer with 6+ years of experience building \
                    scalable web applications and leading cross-functional teams. Expertise in \
                    React, Node.js, and cloud infrastructure."),
                profile_photo: None,
            },
            experience: vec![
                ExperienceItem {
                    id: s("exp1"),
                    company: s("TechCorp Inc."),
                    position: s("Senior Software Engineer"),
                    start_date: s("2021-03"),
                    end_date: String::new(),
                    current: true,
                    location: s("San Francisco, CA"),
                    description: s("Led development of microservices architecture serving 2M+ \
                        users. Mentored junior developers and drove 40% performance improvement."),
                    highlights: vec![
                        s("Reduced API latency by 40%"),
                        s("Led team of 5 engineers"),
                        s("Deployed on AWS ECS"),
                    ],
                },
                ExperienceItem {
                    id: s("exp2"),
                    company: s("StartupXYZ"),
                    position: s("Full Stack Developer"),
                    start_date: s("2018-06"),
                    end_date: s("2021-02"),
                    current: false,
                    location: s("Remote"),
                    description: s("Built and maintained React/Node.js applications. Implemented \
                        CI/CD pipelines and automated testing."),
                    highlights: vec![
                        s("Built 3 production apps"),
                        s("100% test coverage"),
                        s("Reduced deploy time by 60%"),
                    ],
                },
            ],
            education: vec![EducationItem {
                id: s("edu1"),
                institution: s("University of California, Berkeley"),
                degree: s("Bachelor of Science"),
                field: s("Computer Science"),
                start_date: s("2014-08"),
                end_date: s("2018-05"),
                gpa: s("3.8"),
                description: s("Dean's List. Relevant coursework: Algorithms, Data Structures, \
                    Machine Learning, Distributed Systems."),
            }],
            skills: [
                ("s1", "React", 5, "Frontend"),
                ("s2", "TypeScript", 5, "Languages"),
                ("s3", "Node.js", 4, "Backend"),
                ("s4", "AWS", 4, "Cloud"),
                ("s5", "Python", 4, "Languages"),
                ("s6", "Docker", 4, "DevOps"),
                ("s7", "GraphQL", 3, "Backend"),
                ("s8", "Kubernetes", 3, "DevOps"),
            ]
            .into_iter()
            .map(|(id, name, level, category)| SkillItem {
                id: s(id),
                name: s(name),
                level,
                category: s(category),
            })
            .collect(),
            certifications: vec![CertificationItem {
                id: s("cert1"),
                name: s("AWS Solutions Architect"),
                issuer: s("Amazon Web Services"),
                date: s("2022-08"),
                url: s("aws.amazon.com/certification"),
                attachment_name: None,
                attachment_data: None,
            }],
            projects: vec![ProjectItem {
                id: s("proj1"),
                name: s("OpenSource Dashboard"),
                description: s("Real-time analytics dashboard with 500+ GitHub stars. Built \
                    with React, D3.js and WebSockets."),
                technologies: s("React, D3.js, WebSockets, Node.js"),
                url: s("github.com/alexjohnson/dashboard"),
                start_date: s("2022-01"),
                end_date: s("2022-06"),
            }],
            selected_template: s("modern"),
            accent_color: Some(s("#7C3AED")),
            font_family: Some(s("Inter")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_round_trips_through_json() {
        let sample = ResumeData::sample();
        let json = serde_json::to_string(&sample).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let data: ResumeData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, ResumeData::default());
        assert_eq!(data.selected_template, "modern");
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(ResumeData::sample()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json["personalInfo"].get("fullName").is_some());
        assert!(json["personalInfo"]["profilePhoto"].is_null());
        assert_eq!(json["experience"][0]["startDate"], "2021-03");
        assert!(json["certifications"][0]["attachmentName"].is_null());
        assert_eq!(json["selectedTemplate"], "modern");
    }

    #[test]
    fn test_null_theme_fields_accepted() {
        let data: ResumeData =
            serde_json::from_str(r#"{"accentColor": null, "fontFamily": null}"#).unwrap();
        assert!(data.accent_color.is_none());
        assert!(data.font_family.is_none());
    }

    #[test]
    fn test_visible_highlights_filters_blanks_in_order() {
        let item = ExperienceItem {
            highlights: vec![s("Did X"), s(""), s("Did Y"), s("  ")],
            ..Default::default()
        };
        let visible: Vec<&str> = item.visible_highlights().collect();
        assert_eq!(visible, vec!["Did X", "Did Y"]);
    }

    #[test]
    fn test_degree_line() {
        let mut edu = EducationItem {
            degree: s("BSc"),
            ..Default::default()
        };
        assert_eq!(edu.degree_line(), "BSc");
        edu.field = s("Physics");
        assert_eq!(edu.degree_line(), "BSc in Physics");
        edu.field = s("   ");
        assert_eq!(edu.degree_line(), "BSc");
        edu.degree = s("");
        edu.field = s("Math");
        assert_eq!(edu.degree_line(), "Math");
        edu.field = s("");
        assert_eq!(edu.degree_line(), "");
    }

    #[test]
    fn test_attachment_ignores_blank_name() {
        let mut cert = CertificationItem::default();
        assert_eq!(cert.attachment(), None);
        cert.attachment_name = Some(s(" "));
        assert_eq!(cert.attachment(), None);
        cert.attachment_name = Some(s("cert.pdf"));
        assert_eq!(cert.attachment(), Some("cert.pdf"));
    }
}

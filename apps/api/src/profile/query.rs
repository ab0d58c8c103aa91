//! Read-side queries over a loaded profile: project listing, skill
//! enumeration and keyword search.
//!
//! All matching is case-insensitive substring containment. Results keep the
//! order of the source arrays; nothing is scored or ranked.

use serde::Serialize;

use crate::models::profile::{Profile, Project, WorkEntry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub profile: Option<ProfileSummary>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub work: Vec<WorkEntry>,
}

/// Lowercased needle for repeated containment checks.
struct Needle(String);

impl Needle {
    fn new(query: &str) -> Self {
        Needle(query.to_lowercase())
    }

    fn in_str(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    fn in_opt(&self, haystack: Option<&str>) -> bool {
        haystack.is_some_and(|h| self.in_str(h))
    }

    fn in_any(&self, haystacks: &[String]) -> bool {
        haystacks.iter().any(|h| self.in_str(h))
    }
}

/// Projects using a technology that contains `skill`. An absent or empty
/// filter returns every project.
pub fn list_projects(profile: &Profile, skill: Option<&str>) -> Vec<Project> {
    let projects = &profile.document.projects;
    match skill.filter(|s| !s.is_empty()) {
        None => projects.clone(),
        Some(skill) => {
            let needle = Needle::new(skill);
            projects
                .iter()
                .filter(|p| needle.in_any(&p.technologies))
                .cloned()
                .collect()
        }
    }
}

/// Every skill with a usage count.
///
/// The count is a placeholder fixed at 1; project usage is not aggregated.
pub fn top_skills(profile: &Profile) -> Vec<SkillCount> {
    profile
        .document
        .skills
        .iter()
        .map(|skill| SkillCount {
            skill: skill.clone(),
            count: 1,
        })
        .collect()
}

/// Matches `query` against identity, projects, skills and work history.
/// Callers reject an empty query before loading the profile.
pub fn search(profile: &Profile, query: &str) -> SearchResults {
    let doc = &profile.document;
    let needle = Needle::new(query);

    let summary = (needle.in_str(&doc.name) || needle.in_str(&doc.email)).then(|| ProfileSummary {
        name: doc.name.clone(),
        email: doc.email.clone(),
    });

    let projects = doc
        .projects
        .iter()
        .filter(|p| {
            needle.in_str(&p.title)
                || needle.in_str(&p.description)
                || needle.in_any(&p.technologies)
        })
        .cloned()
        .collect();

    let skills = doc
        .skills
        .iter()
        .filter(|s| needle.in_str(s))
        .cloned()
        .collect();

    let work = doc
        .work
        .iter()
        .filter(|w| {
            needle.in_opt(w.company.as_deref())
                || needle.in_opt(w.position.as_deref())
                || needle.in_opt(w.description.as_deref())
                || needle.in_any(&w.technologies)
        })
        .cloned()
        .collect();

    SearchResults {
        profile: summary,
        projects,
        skills,
        work,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileDocument;
    use chrono::Utc;
    use uuid::Uuid;

    fn project(title: &str, tech: &[&str]) -> Project {
        Project {
            title: title.into(),
            description: format!("{title} description"),
            technologies: tech.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn profile(doc: ProfileDocument) -> Profile {
        let now = Utc::now();
        Profile {
            id: Uuid::new_v4(),
            document: doc,
            created_at: now,
            updated_at: now,
        }
    }

    fn portfolio() -> Profile {
        profile(ProfileDocument {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            skills: vec!["React".into(), "Rust".into(), "Go".into()],
            projects: vec![
                project("Flask API", &["Python", "Flask"]),
                project("Dashboard", &["JavaScript"]),
            ],
            work: vec![
                WorkEntry {
                    company: Some("Acme".into()),
                    position: Some("Backend Engineer".into()),
                    description: Some("Built billing services".into()),
                    technologies: vec!["Go".into()],
                    ..Default::default()
                },
                WorkEntry {
                    company: Some("Initech".into()),
                    position: None,
                    description: None,
                    technologies: vec![],
                    ..Default::default()
                },
            ],
            ..Default::default()
        })
    }

    #[test]
    fn test_list_projects_exact_skill() {
        let result = list_projects(&portfolio(), Some("Python"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Flask API");
    }

    #[test]
    fn test_list_projects_lowercase_substring() {
        let p = portfolio();
        assert_eq!(list_projects(&p, Some("py")), list_projects(&p, Some("Python")));
    }

    #[test]
    fn test_list_projects_no_filter_keeps_order() {
        let titles: Vec<_> = list_projects(&portfolio(), None)
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Flask API", "Dashboard"]);
    }

    #[test]
    fn test_list_projects_empty_filter_is_no_filter() {
        assert_eq!(list_projects(&portfolio(), Some("")).len(), 2);
    }

    #[test]
    fn test_list_projects_no_match_is_empty() {
        assert!(list_projects(&portfolio(), Some("haskell")).is_empty());
        let bare = profile(ProfileDocument::default());
        assert!(list_projects(&bare, Some("py")).is_empty());
    }

    #[test]
    fn test_top_skills_counts_are_placeholder() {
        let p = profile(ProfileDocument {
            skills: vec!["Go".into(), "Rust".into()],
            ..Default::default()
        });
        assert_eq!(
            top_skills(&p),
            vec![
                SkillCount {
                    skill: "Go".into(),
                    count: 1
                },
                SkillCount {
                    skill: "Rust".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_search_matches_skill_not_unrelated_work() {
        let results = search(&portfolio(), "react");
        assert_eq!(results.skills, vec!["React".to_string()]);
        assert!(results.work.is_empty());
        assert!(results.projects.is_empty());
        assert!(results.profile.is_none());
    }

    #[test]
    fn test_search_profile_summary_by_email() {
        let results = search(&portfolio(), "EXAMPLE.com");
        assert_eq!(
            results.profile,
            Some(ProfileSummary {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into()
            })
        );
    }

    #[test]
    fn test_search_hits_multiple_categories() {
        let results = search(&portfolio(), "go");
        assert_eq!(results.skills, vec!["Go".to_string()]);
        assert_eq!(results.work.len(), 1);
        assert_eq!(results.work[0].company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_search_project_by_description_and_tech() {
        let p = portfolio();
        assert_eq!(search(&p, "dashboard desc").projects.len(), 1);
        assert_eq!(search(&p, "flask").projects[0].title, "Flask API");
    }

    #[test]
    fn test_search_work_missing_fields_do_not_match() {
        let results = search(&portfolio(), "engineer");
        assert_eq!(results.work.len(), 1);
        let results = search(&portfolio(), "initech");
        assert_eq!(results.work.len(), 1);
        assert!(results.work[0].position.is_none());
    }

    #[test]
    fn test_search_serializes_null_profile() {
        let v = serde_json::to_value(search(&portfolio(), "zzz")).unwrap();
        assert!(v["profile"].is_null());
        assert_eq!(v["projects"], serde_json::json!([]));
    }
}

pub mod sample;

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Link value that stands in for "not yet published". Treated as absent
/// wherever a link would be rendered.
pub const PLACEHOLDER_LINK: &str = "#";

/// The whole CV. Built once at start-up and read-only afterwards; entities
/// reference each other only by containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cv {
    pub personal_info: PersonalInfo,
    pub education: Education,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organizational: Vec<OrganizationalExperience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub position: String,
    pub company: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub period: String,
    pub duration: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Duplicated alongside `technologies` in the source data; kept as-is.
    pub tech_stack: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub tech_stack: Vec<String>,
    pub duration: String,
    #[serde(default)]
    pub links: ProjectLinks,
    pub highlights: Vec<String>,
}

/// Per-channel project links. Every channel is optional, and a channel whose
/// value is [`PLACEHOLDER_LINK`] counts as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roku: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationalExperience {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkChannel {
    Website,
    Android,
    Ios,
    Roku,
    Git,
    Demo,
}

impl LinkChannel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Roku => "Roku",
            Self::Git => "Source",
            Self::Demo => "Demo",
        }
    }
}

impl std::fmt::Display for LinkChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Filter an optional link down to something actually worth rendering.
fn usable(link: &Option<String>) -> Option<&str> {
    link.as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty() && *l != PLACEHOLDER_LINK)
}

impl Cv {
    pub fn sample() -> Self {
        sample::cv()
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        let cv: Cv = serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))?;
        if cv.work_experience.is_empty() {
            anyhow::bail!(
                "{} has no work experience entries; at least one is required",
                path.display()
            );
        }
        Ok(cv)
    }

    /// The most recent position, shown on its own slide.
    pub fn current_role(&self) -> &WorkExperience {
        &self.work_experience[0]
    }
}

impl PersonalInfo {
    pub fn email_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn phone_uri(&self) -> Option<String> {
        self.phone.as_deref().map(|p| format!("tel:{p}"))
    }

    pub fn website_url(&self) -> String {
        format!("https://{}", self.website)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }

    pub fn github_url(&self) -> String {
        format!("https://{}", self.github)
    }
}

impl WorkExperience {
    /// Company website, unless it is missing or the placeholder.
    pub fn company_website(&self) -> Option<&str> {
        usable(&self.website)
    }
}

impl ProjectLinks {
    /// The channels that actually resolve to a link, in display order.
    pub fn resolved(&self) -> Vec<(LinkChannel, &str)> {
        let channels = [
            (LinkChannel::Website, &self.website),
            (LinkChannel::Android, &self.android),
            (LinkChannel::Ios, &self.ios),
            (LinkChannel::Roku, &self.roku),
            (LinkChannel::Git, &self.git),
            (LinkChannel::Demo, &self.demo),
        ];
        channels
            .into_iter()
            .filter_map(|(channel, link)| usable(link).map(|l| (channel, l)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(ios: Option<&str>) -> ProjectLinks {
        ProjectLinks {
            git: Some("https://github.com/atanaka/demo".to_string()),
            ios: ios.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_placeholder_ios_link_is_absent() {
        let links = links(Some("#"));
        let resolved = links.resolved();
        assert!(resolved.iter().all(|(c, _)| *c != LinkChannel::Ios));
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_real_ios_link_is_present() {
        let links = links(Some("https://apps.apple.com/app/id123"));
        let resolved = links.resolved();
        assert!(
            resolved
                .iter()
                .any(|(c, l)| *c == LinkChannel::Ios && l.starts_with("https://"))
        );
    }

    #[test]
    fn test_missing_links_are_skipped() {
        assert!(ProjectLinks::default().is_empty());
        assert!(ProjectLinks::default().resolved().is_empty());
    }

    #[test]
    fn test_placeholder_company_website() {
        let mut exp = Cv::sample().work_experience[0].clone();
        exp.website = Some("#".to_string());
        assert_eq!(exp.company_website(), None);
        exp.website = Some("https://example.com".to_string());
        assert_eq!(exp.company_website(), Some("https://example.com"));
        exp.website = None;
        assert_eq!(exp.company_website(), None);
    }

    #[test]
    fn test_contact_uris_concatenate() {
        let info = &Cv::sample().personal_info;
        assert_eq!(info.email_uri(), format!("mailto:{}", info.email));
        assert_eq!(info.website_url(), format!("https://{}", info.website));
        assert!(info.linkedin_url().starts_with("https://"));
        assert!(info.github_url().starts_with("https://"));
    }

    #[test]
    fn test_sample_round_trips_through_yaml() {
        let sample = Cv::sample();
        let yaml = serde_yaml::to_string(&sample).expect("serialize");
        let back: Cv = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back.personal_info.name, sample.personal_info.name);
        assert_eq!(back.work_experience.len(), sample.work_experience.len());
        assert_eq!(back.projects.len(), sample.projects.len());
        assert_eq!(back.skills.len(), sample.skills.len());
        assert_eq!(back.organizational.len(), sample.organizational.len());
    }

    #[test]
    fn test_minimal_yaml_defaults() {
        let yaml = r#"
personal_info:
  name: Jo Tester
  title: Engineer
  email: jo@example.com
  website: jo.example.com
  linkedin: linkedin.com/in/jo
  github: github.com/jo
  summary: Builds things.
  location: Nowhere
education:
  institution: Test University
  degree: BSc
  field: Computing
  duration: 2010 - 2014
  achievements: []
work_experience:
  - title: Engineer
    position: Engineer
    company: Acme
    location: Remote
    period: 2020 - Present
    duration: 2020 - Present
    description: Engineering.
    technologies: [Rust]
    tech_stack: [Rust]
    achievements: []
projects: []
skills: []
"#;
        let cv: Cv = serde_yaml::from_str(yaml).expect("parse");
        assert!(cv.personal_info.phone.is_none());
        assert!(cv.organizational.is_empty());
        assert!(cv.work_experience[0].website.is_none());
    }
}

//! Static site content.
//!
//! Every record is immutable and compiled into the binary. The page
//! renderer, the persona builder and `/api/content` all read from the same
//! [`Catalog`], so copy changes never touch logic.

mod catalog;

use serde::Serialize;

pub use catalog::{CHAT_COPY, PROFILE, PROJECTS, SERVICES, SKILLS};

/// A gallery entry. Projects without a link are still being built.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub problem: &'static str,
    pub impact: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Design,
    Other,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Design => "Design",
            SkillCategory::Other => "Engineering",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    /// Shown on hover.
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub best_for: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub primary_email: &'static str,
    pub secondary_email: &'static str,
    pub linkedin: &'static str,
    pub instagram: &'static str,
    pub whatsapp: &'static str,
    pub github: &'static str,
}

impl Contact {
    /// `wa.me` link for the WhatsApp number (digits only).
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{digits}")
    }

    /// Instagram profile URL for the `@handle`.
    pub fn instagram_link(&self) -> String {
        format!("https://www.instagram.com/{}/", self.instagram.trim_start_matches('@'))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Academic {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub note: &'static str,
}

/// Headline academic score shown beside the degree cards.
#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    /// e.g. `CGPA`.
    pub metric: &'static str,
    pub score: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Position {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub summary: Option<&'static str>,
}

/// A short titled line: study principles, hackathon highlights.
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Presentation {
    pub institution: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    /// Roles joined into one line, used in the hero and the persona.
    pub headline: &'static str,
    pub footer_role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub headshot: &'static str,
    pub resume_url: &'static str,
    pub contact: Contact,
    pub academics: &'static [Academic],
    pub standing: Standing,
    pub positions: &'static [Position],
    pub philosophy: &'static str,
    pub principles: &'static [Highlight],
    pub presentations: &'static [Presentation],
    pub hackathons: &'static [Highlight],
}

/// User-facing chat strings.
///
/// `{email}` expands to the primary contact email; `{secondary_email}` to
/// the secondary one.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCopy {
    pub title: &'static str,
    pub greeting: &'static str,
    pub placeholder: &'static str,
    pub empty_reply: &'static str,
    pub offline: &'static str,
    pub unreachable: &'static str,
    pub rate_limited: &'static str,
    pub filtered: &'static str,
    pub access_error: &'static str,
    pub unavailable: &'static str,
}

/// The full content source handed to the page renderer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub profile: &'static Profile,
    pub projects: &'static [Project],
    pub skills: &'static [Skill],
    pub services: &'static [Service],
}

impl Catalog {
    /// The site as shipped.
    pub fn site() -> Self {
        Self {
            profile: &PROFILE,
            projects: PROJECTS,
            skills: SKILLS,
            services: SERVICES,
        }
    }
}

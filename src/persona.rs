//! Persona (system instruction) assembly.
//!
//! The instruction is a plain-text template with `{{key}}` placeholders,
//! stored at `config/prompts/persona.md`. The same file is compiled into the
//! binary as the fallback, so a missing or empty file never leaves the agent
//! without a persona.
//!
//! ```text
//! {{name}}     : profile display name
//! {{headline}} : one-line role summary
//! {{location}} : city, country
//! {{contacts}} : dash list of emails and socials
//! {{projects}} : dash list of project titles
//! ```
//!
//! Substitution is applied once, at [`build()`](PersonaBuilder::build) time.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::content::Catalog;

const DEFAULT_TEMPLATE: &str = include_str!("../config/prompts/persona.md");

/// Fluent builder that fills a persona template.
pub struct PersonaBuilder {
    template: String,
    vars: HashMap<String, String>,
}

impl PersonaBuilder {
    /// Start from an in-memory template.
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into(), vars: HashMap::new() }
    }

    /// Load the template from `path`, falling back to the compiled-in one.
    pub fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) if !text.trim().is_empty() => Self::new(text),
            Ok(_) => {
                debug!("persona: '{}' is empty: using built-in template", path.display());
                Self::new(DEFAULT_TEMPLATE)
            }
            Err(_) => {
                debug!("persona: '{}' not found: using built-in template", path.display());
                Self::new(DEFAULT_TEMPLATE)
            }
        }
    }

    /// Register a single `{{key}}` → `value` substitution.
    pub fn var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Register every variable the catalog can answer.
    pub fn with_catalog(self, catalog: &Catalog) -> Self {
        let profile = catalog.profile;
        let c = &profile.contact;
        let contacts = [
            format!("- Primary Email: {}", c.primary_email),
            format!("- Secondary Email: {}", c.secondary_email),
            format!("- LinkedIn: {}", c.linkedin),
            format!("- Instagram: {}", c.instagram),
            format!("- WhatsApp: {}", c.whatsapp),
            format!("- GitHub: {}", c.github),
        ]
        .join("\n");
        let projects = catalog
            .projects
            .iter()
            .map(|p| format!("- {} ({})", p.title, p.impact))
            .collect::<Vec<_>>()
            .join("\n");

        self.var("name", profile.short_name)
            .var("headline", profile.headline)
            .var("location", profile.location)
            .var("contacts", contacts)
            .var("projects", projects)
    }

    /// Apply substitutions and return the finished persona.
    /// Unknown placeholders are left as-is.
    pub fn build(self) -> Persona {
        let mut text = self.template.trim().to_string();
        for (k, v) in &self.vars {
            text = text.replace(&format!("{{{{{k}}}}}"), v);
        }
        Persona { instruction: Arc::from(text) }
    }
}

/// A finished system instruction. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Persona {
    instruction: Arc<str>,
}

impl Persona {
    /// Persona for `catalog` using the template at `path`.
    pub fn load(path: &Path, catalog: &Catalog) -> Self {
        PersonaBuilder::from_file(path).with_catalog(catalog).build()
    }

    pub fn system_instruction(&self) -> &str {
        &self.instruction
    }
}

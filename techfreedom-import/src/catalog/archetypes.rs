//! Hard-coded organisation archetypes and their typical tool stacks

use std::collections::HashSet;

use crate::models::{Archetype, Tool};

/// A typical organisation profile, referencing tools by slug
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeDefinition {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub tool_slugs: &'static [&'static str],
}

pub const ARCHETYPES: &[ArchetypeDefinition] = &[
    ArchetypeDefinition {
        name: "Microsoft Heavy",
        slug: "microsoft-heavy",
        description: "Typical organisation running on the Microsoft ecosystem",
        tool_slugs: &["microsoft-365", "microsoft-teams", "linkedin", "dropbox", "eventbrite"],
    },
    ArchetypeDefinition {
        name: "Google Heavy",
        slug: "google-heavy",
        description: "Organisation built around Google's tools and platforms",
        tool_slugs: &["google-workspace", "gmail-free", "google-forms", "canva", "meta"],
    },
    ArchetypeDefinition {
        name: "Typical Small Charity",
        slug: "typical-small-charity",
        description: "Common stack for small UK charities and community organisations",
        tool_slugs: &["google-workspace", "canva", "mailchimp", "trello", "zoom", "whatsapp"],
    },
    ArchetypeDefinition {
        name: "Startup",
        slug: "startup",
        description: "Fast-moving startup or social enterprise tech stack",
        tool_slugs: &["slack", "aws", "hubspot", "asana", "calendly", "zoom"],
    },
    ArchetypeDefinition {
        name: "AI Explorer",
        slug: "ai-explorer",
        description: "Organisation heavily integrating AI and cloud services",
        tool_slugs: &["google-workspace", "slack", "aws", "zoom", "monday-com"],
    },
    ArchetypeDefinition {
        name: "Legacy Stalwarts",
        slug: "legacy-stalwarts",
        description: "Established organisation with deep enterprise tool commitments",
        tool_slugs: &["microsoft-365", "salesforce", "surveymonkey", "eventbrite", "wordpress-com"],
    },
];

/// Archetypes for export, keeping only tool slugs present in `tools`
pub fn build_archetypes(tools: &[Tool]) -> Vec<Archetype> {
    let known: HashSet<&str> = tools.iter().map(|t| t.slug.as_str()).collect();

    ARCHETYPES
        .iter()
        .map(|def| Archetype {
            name: def.name.to_string(),
            slug: def.slug.to_string(),
            description: def.description.to_string(),
            tool_slugs: def
                .tool_slugs
                .iter()
                .filter(|slug| known.contains(**slug))
                .map(|slug| slug.to_string())
                .collect(),
        })
        .collect()
}

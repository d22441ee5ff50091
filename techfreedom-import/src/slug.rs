//! Slug normalisation for tool and alternative names
//!
//! Slugs are the only link between tools, alternatives and archetypes, so the
//! same rules must be applied on every path that produces one.

use once_cell::sync::Lazy;
use regex::Regex;

/// Names whose generic slug would be wrong or ambiguous, applied in order
/// after lowercasing.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("microsoft 365", "microsoft-365"),
    ("monday.com", "monday-com"),
    ("wordpress.com", "wordpress-com"),
    ("wordpress.org", "wordpress-org"),
    ("cal.com", "cal-com"),
    ("x / twitter", "x-twitter"),
    ("gmail (free/personal)", "gmail-free"),
    ("whatsapp (organisational use)", "whatsapp"),
    ("meta (facebook / instagram)", "meta"),
];

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(.*?\)").unwrap());
static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Convert a display name to a URL-safe slug
///
/// e.g., "Gmail (Free/Personal)" -> "gmail-free", "Canva Pro (Teams)" -> "canva-pro"
pub fn slugify(name: &str) -> String {
    let mut s = name.trim().to_lowercase();

    for (from, to) in SPECIAL_CASES {
        s = s.replace(from, to);
    }

    let s = PARENTHETICAL.replace_all(&s, "");
    let s = NON_ALPHANUMERIC.replace_all(&s, "-");
    s.trim_matches('-').to_string()
}

/// Slugify each entry of a comma-separated list, dropping blank entries
pub fn slugify_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(slugify)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(slugify("Slack"), "slack");
        assert_eq!(slugify("Google Workspace"), "google-workspace");
        assert_eq!(slugify("  Trello  "), "trello");
        assert_eq!(slugify("AWS"), "aws");
    }

    #[test]
    fn test_special_cases() {
        assert_eq!(slugify("Microsoft 365"), "microsoft-365");
        assert_eq!(slugify("Monday.com"), "monday-com");
        assert_eq!(slugify("WordPress.com"), "wordpress-com");
        assert_eq!(slugify("WordPress.org"), "wordpress-org");
        assert_eq!(slugify("Cal.com"), "cal-com");
        assert_eq!(slugify("X / Twitter"), "x-twitter");
        assert_eq!(slugify("Gmail (Free/Personal)"), "gmail-free");
        assert_eq!(slugify("WhatsApp (Organisational Use)"), "whatsapp");
        assert_eq!(slugify("Meta (Facebook / Instagram)"), "meta");
    }

    #[test]
    fn test_parentheticals_are_stripped() {
        assert_eq!(slugify("Canva (Pro)"), "canva");
        assert_eq!(slugify("Nextcloud (self-hosted) Hub"), "nextcloud-hub");
        assert_eq!(slugify("Proton (Mail) (Business)"), "proton");
    }

    #[test]
    fn test_punctuation_collapses_to_single_hyphen() {
        assert_eq!(slugify("Zoho -- CRM!!"), "zoho-crm");
        assert_eq!(slugify("Notion & Co."), "notion-co");
        assert_eq!(slugify("Café Société"), "caf-soci-t");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slugify_list() {
        assert_eq!(
            slugify_list("Zoom, Microsoft Teams,, Gmail (Free/Personal) "),
            vec!["zoom", "microsoft-teams", "gmail-free"]
        );
        assert!(slugify_list("").is_empty());
        assert!(slugify_list(" , ,").is_empty());
    }
}

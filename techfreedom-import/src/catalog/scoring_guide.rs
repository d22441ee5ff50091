//! Scoring guide: what each score means on each risk dimension

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringGuideEntry {
    pub dimension: &'static str,
    pub score: u8,
    pub label: &'static str,
    pub description: &'static str,
}

const fn entry(
    dimension: &'static str,
    score: u8,
    label: &'static str,
    description: &'static str,
) -> ScoringGuideEntry {
    ScoringGuideEntry {
        dimension,
        score,
        label,
        description,
    }
}

pub const SCORING_GUIDE: &[ScoringGuideEntry] = &[
    entry("jurisdiction", 1, "Minimal", "UK/EU hosted. UK/EU company. GDPR compliant. Clear data residency."),
    entry("jurisdiction", 2, "Low", "EU company with EU hosting. GDPR compliant. Minor jurisdictional questions."),
    entry("jurisdiction", 3, "Moderate", "US company claiming GDPR compliance. EU hosting option available. Data location partly configurable."),
    entry("jurisdiction", 4, "High", "US company. Data primarily in US. CLOUD Act applies. GDPR compliance questionable."),
    entry("jurisdiction", 5, "Critical", "US company. Data in US. Subject to CLOUD Act & FISA. No data residency. Conflicts with GDPR."),
    entry("continuity", 1, "Minimal", "Full data export in open formats. Multiple alternatives. Easy to switch. Self-hostable."),
    entry("continuity", 2, "Low", "Good export options. Several alternatives. Switching manageable. Active community."),
    entry("continuity", 3, "Moderate", "Export possible but painful. Some alternatives exist. Switching requires planning."),
    entry("continuity", 4, "High", "Export difficult or incomplete. Few viable alternatives. Switching is a major project."),
    entry("continuity", 5, "Critical", "No meaningful data export. No realistic alternative. Total vendor dependency."),
    entry("surveillance", 1, "Minimal", "Open source. No tracking. Privacy-first design. No data harvesting."),
    entry("surveillance", 2, "Low", "Minimal tracking. Opt-out available. Data not sold. Transparent privacy policy."),
    entry("surveillance", 3, "Moderate", "Some tracking for product improvement. Opt-out partially available. Privacy policy complex."),
    entry("surveillance", 4, "High", "Extensive tracking. Data used for ads or AI training. Opt-out limited. Metadata harvested."),
    entry("surveillance", 5, "Critical", "Business model IS surveillance. Data sold or used for ads/AI. No opt-out. Pervasive tracking."),
    entry("lockIn", 1, "Minimal", "Open standards. Full data portability. No proprietary formats. Easy to leave."),
    entry("lockIn", 2, "Low", "Mostly open formats. Some proprietary features. Migration possible with effort."),
    entry("lockIn", 3, "Moderate", "Mix of open and proprietary. Workflows create soft lock-in. Switching costs moderate."),
    entry("lockIn", 4, "High", "Proprietary formats dominant. Deep workflow integration. Significant switching costs."),
    entry("lockIn", 5, "Critical", "Totally proprietary. No data portability. Migration nearly impossible."),
    entry("costExposure", 1, "Minimal", "Free/open source or stable pricing. No sharp increases. Multiple competitors."),
    entry("costExposure", 2, "Low", "Affordable. Pricing stable historically. Free tier available. Competitive market."),
    entry("costExposure", 3, "Moderate", "Mid-range pricing. Some price increases historically. Free tier limited."),
    entry("costExposure", 4, "High", "Expensive per-seat. History of price increases. Free tier being eroded. Market dominance."),
    entry("costExposure", 5, "Critical", "Monopoly pricing. Dramatic recent increases. Free tier eliminated. Captive audience."),
];

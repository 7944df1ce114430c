//! The exportable snapshot of one audit.
//!
//! A [`Report`] is built at the end of an audit run and can be listed as
//! `(label, value)` lines, exported as a PDF or serialized as JSON.

use crate::constants::REPORT_TITLE;
use crate::domain::ReputationLinks;
use crate::entities::EntitySet;
use crate::error::Result;
use crate::layout::PageLayout;
use crate::scoring::{ScoreCard, MAX_DIMENSION_SCORE, MAX_TOTAL_SCORE};
use crate::signals::ExtractedSignals;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Result of auditing one URL.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub url: String,
    pub domain: String,
    pub has_author: bool,
    pub has_bio: bool,
    /// "Last updated" text, or `"Not found"`.
    pub last_updated: String,
    /// Unique entity texts kept for display.
    pub entities: Vec<String>,
    /// Combined entity count used for scoring.
    pub entity_count: usize,
    pub schema_types: Vec<String>,
    pub external_link_count: usize,
    pub domain_authority: u8,
    pub scores: ScoreCard,
    pub reputation_links: ReputationLinks,
    pub generated_at: DateTime<Local>,
}

fn yes_no(value: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    text.to_string()
}

impl Report {
    pub fn new(
        url: &str,
        domain: String,
        signals: &ExtractedSignals,
        entities: &EntitySet,
        scores: ScoreCard,
        domain_authority: u8,
        reputation_links: ReputationLinks,
    ) -> Self {
        Self {
            url: url.to_string(),
            domain,
            has_author: signals.has_author,
            has_bio: signals.has_bio,
            last_updated: signals.last_updated.to_string(),
            entities: entities.display.clone(),
            entity_count: entities.count(),
            schema_types: signals.schema_types.iter().cloned().collect(),
            external_link_count: signals.outbound_links.len(),
            domain_authority,
            scores,
            reputation_links,
            generated_at: Local::now(),
        }
    }

    /// Report fields as display lines, in export order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("URL", self.url.clone()),
            ("Author Found", yes_no(self.has_author)),
            ("Bio Found", yes_no(self.has_bio)),
            ("Last Updated Text", self.last_updated.clone()),
            ("Entities", self.entities.join(", ")),
            ("Entity Count", self.entity_count.to_string()),
            ("Schema Types Found", self.schema_types.join(", ")),
            ("External Links Count", self.external_link_count.to_string()),
            ("Domain Authority Estimate", self.domain_authority.to_string()),
            (
                "Experience Score",
                format!("{}/{MAX_DIMENSION_SCORE}", self.scores.experience),
            ),
            (
                "Expertise Score",
                format!("{}/{MAX_DIMENSION_SCORE}", self.scores.expertise),
            ),
            (
                "Authoritativeness Score",
                format!("{}/{MAX_DIMENSION_SCORE}", self.scores.authoritativeness),
            ),
            (
                "Trustworthiness Score",
                format!("{}/{MAX_DIMENSION_SCORE}", self.scores.trustworthiness),
            ),
            (
                "Total E-E-A-T Score",
                format!("{}/{MAX_TOTAL_SCORE}", self.scores.total),
            ),
        ]
    }

    fn layout(&self) -> PageLayout {
        let mut layout = PageLayout::new();
        layout.centered_line(REPORT_TITLE);
        layout.gap(10.0);
        for (label, value) in self.fields() {
            layout.paragraph(&format!("{label}: {value}"));
        }
        layout.gap(5.0);
        layout.paragraph(&format!(
            "Generated on: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        layout
    }

    /// Lay the report out as a paginated PDF.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        self.layout().render(REPORT_TITLE)
    }

    /// Write the PDF export to `path`, replacing any existing file.
    pub fn write_pdf(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_pdf()?)?;
        info!(path = %path.display(), "report written");
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reputation_links;
    use crate::entities::{Entity, EntitySource};
    use crate::signals::LastUpdated;
    use std::collections::BTreeSet;

    fn sample() -> Report {
        let signals = ExtractedSignals {
            has_author: true,
            has_bio: false,
            last_updated: LastUpdated::NotFound,
            outbound_links: vec!["https://a.org".to_string(), "https://b.org".to_string()],
            schema_types: ["Person", "Organization"]
                .iter()
                .map(|s| s.to_string())
                .collect::<BTreeSet<_>>(),
            raw_text: String::new(),
        };
        let entities = EntitySet::merge(
            vec![Entity::new("Ada Lovelace", "NAME", EntitySource::Local)],
            vec![Entity::new("Ada Lovelace", "Person", EntitySource::Remote)],
            10,
        );
        Report::new(
            "https://example.com/post",
            "example.com".to_string(),
            &signals,
            &entities,
            ScoreCard::new(2, 1, 4, 2),
            40,
            reputation_links("example.com"),
        )
    }

    #[test]
    fn fields_are_ordered_and_formatted() {
        let fields = sample().fields();
        let lookup = |label: &str| {
            fields
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(fields[0], ("URL", "https://example.com/post".to_string()));
        assert_eq!(lookup("Author Found"), "Yes");
        assert_eq!(lookup("Bio Found"), "No");
        assert_eq!(lookup("Last Updated Text"), "Not found");
        assert_eq!(lookup("Entities"), "Ada Lovelace");
        assert_eq!(lookup("Entity Count"), "2");
        assert_eq!(lookup("Schema Types Found"), "Organization, Person");
        assert_eq!(lookup("External Links Count"), "2");
        assert_eq!(lookup("Experience Score"), "2/5");
        assert_eq!(fields.last().unwrap(), &("Total E-E-A-T Score", "9/20".to_string()));
    }

    fn laid_out_text(report: &Report) -> Vec<Vec<String>> {
        report
            .layout()
            .pages()
            .iter()
            .map(|page| page.iter().map(|line| line.text.clone()).collect())
            .collect()
    }

    #[test]
    fn pdf_lists_title_fields_and_timestamp() {
        let report = sample();
        let pages = laid_out_text(&report);

        assert_eq!(pages.len(), 1);
        let lines = &pages[0];
        assert_eq!(lines[0], "E-E-A-T Audit Report");
        assert_eq!(lines[1], "URL: https://example.com/post");
        assert!(lines.contains(&"Author Found: Yes".to_string()));
        assert!(lines.contains(&"Total E-E-A-T Score: 9/20".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            &format!(
                "Generated on: {}",
                report.generated_at.format("%Y-%m-%d %H:%M:%S")
            )
        );

        assert!(report.to_pdf().unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn long_entity_lists_wrap_onto_further_pages() {
        let mut report = sample();
        report.entities = (0..10)
            .map(|i| format!("Entity {i} {}", "word ".repeat(40).trim_end()))
            .collect();
        let pages = laid_out_text(&report);

        assert_eq!(pages.len(), 2);
        assert!(pages[1]
            .last()
            .unwrap()
            .starts_with("Generated on: "));
        assert!(pages.iter().flatten().any(|line| line.starts_with("Entities: Entity 0")));
    }

    #[test]
    fn write_pdf_overwrites_existing_file() {
        let path = std::env::temp_dir().join(format!(
            "eeat_audit_report_test_{}.pdf",
            std::process::id()
        ));
        std::fs::write(&path, b"stale").unwrap();

        sample().write_pdf(&path).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"%PDF-"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn json_export_includes_scores_and_links() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["scores"]["total"], 9);
        assert_eq!(json["domain_authority"], 40);
        assert!(json["reputation_links"]["Reddit"]
            .as_str()
            .unwrap()
            .contains("example.com"));
    }
}

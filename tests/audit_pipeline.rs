//! End-to-end audits over a fixed HTML fixture.

use eeat_audit::testing::{FailingAnnotator, FixedAnnotator, FixedRecognizer, StaticPage};
use eeat_audit::{
    render_report, AuditOptions, Auditor, EntityRecognizer, ExternalLinkPolicy, NerModel,
    ScoreCard,
};
use httpmock::prelude::*;
use std::sync::Arc;

const AUDIT_URL: &str = "https://example.com/blog/sourdough";

/// One "author" class, no "bio" class, a "Last updated" time element, three
/// JSON-LD blocks (Organization, Person, WebPage) and twelve outbound links.
fn fixture() -> String {
    let outbound: String = (1..=12)
        .map(|i| format!("<li><a href=\"https://reference{i}.org/article\">Reference {i}</a></li>\n"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Field Notes on Sourdough</title>
  <script type="application/ld+json">{{"@context": "https://schema.org", "@type": "Organization", "name": "Crumb Works"}}</script>
  <script type="application/ld+json">{{"@context": "https://schema.org", "@type": "Person", "name": "Jo Baker"}}</script>
  <script type="application/ld+json">{{"@context": "https://schema.org", "@type": "WebPage", "name": "Field Notes"}}</script>
</head>
<body>
  <header>
    <a href="/">Home</a>
    <a href="https://example.com/blog/sourdough#comments">Comments</a>
  </header>
  <article>
    <h1>Field Notes on Sourdough</h1>
    <div class="post-author">Jo Baker</div>
    <time datetime="2023-01-01">Last updated: 2023</time>
    <p>Maria Lopez of the Bread Bakers Guild Association shared starter notes in March 2021.</p>
    <ul>
{outbound}    </ul>
  </article>
</body>
</html>"#
    )
}

fn fixture_auditor(local: usize, remote: usize) -> Auditor {
    Auditor::new(AuditOptions::default())
        .unwrap()
        .with_page_source(StaticPage::new(fixture()))
        .with_recognizer(Arc::new(FixedRecognizer::with_count(local)))
        .with_annotator(FixedAnnotator::with_count(remote))
}

#[tokio::test]
async fn fixture_scores_eighteen_of_twenty() {
    let report = fixture_auditor(5, 3).run(AUDIT_URL).await.unwrap();

    assert_eq!(report.entity_count, 8);
    assert_eq!(
        report.scores,
        ScoreCard {
            experience: 4,
            expertise: 4,
            authoritativeness: 5,
            trustworthiness: 5,
            total: 18,
        }
    );

    assert!(report.has_author);
    assert!(!report.has_bio);
    assert_eq!(report.last_updated, "Last updated: 2023");
    assert_eq!(report.external_link_count, 12);
    assert_eq!(report.schema_types, vec!["Organization", "Person", "WebPage"]);
    assert_eq!(report.domain, "example.com");
    assert_eq!(report.domain_authority, 40);
}

#[tokio::test]
async fn fixture_over_http_matches_static_audit() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/blog/sourdough");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(fixture());
    });

    let auditor = Auditor::new(AuditOptions::default())
        .unwrap()
        .with_recognizer(Arc::new(FixedRecognizer::with_count(5)))
        .with_annotator(FixedAnnotator::with_count(3));
    let report = auditor.run(&server.url("/blog/sourdough")).await.unwrap();
    page.assert();

    assert_eq!(report.scores.total, 18);
    // The absolute "#comments" link no longer contains the request URL.
    assert_eq!(report.external_link_count, 13);
    assert!(report.domain.starts_with("127.0.0.1:"));
}

#[tokio::test]
async fn annotator_outage_only_lowers_expertise() {
    let report = Auditor::new(AuditOptions::default())
        .unwrap()
        .with_page_source(StaticPage::new(fixture()))
        .with_recognizer(Arc::new(FixedRecognizer::with_count(5)))
        .with_annotator(FailingAnnotator)
        .run(AUDIT_URL)
        .await
        .unwrap();

    assert_eq!(report.entity_count, 5);
    assert_eq!(report.scores.expertise, 3);
    assert_eq!(report.scores.total, 17);
}

#[tokio::test]
async fn entity_display_is_capped_but_count_is_not() {
    let report = fixture_auditor(12, 3).run(AUDIT_URL).await.unwrap();

    assert_eq!(report.entity_count, 15);
    assert_eq!(report.entities.len(), 10);
    assert_eq!(report.entities[0], "Local 0");
    assert_eq!(report.scores.expertise, 5);
}

#[tokio::test]
async fn host_policy_drops_same_site_links() {
    let html = r#"
        <a href="https://example.com/about">About</a>
        <a href="https://www.example.com/contact">Contact</a>
        <a href="https://other.org/">Other</a>
    "#;
    let options = AuditOptions::builder()
        .link_policy(ExternalLinkPolicy::DifferentHost)
        .build();
    let auditor = Auditor::new(options)
        .unwrap()
        .with_page_source(StaticPage::new(html))
        .with_recognizer(Arc::new(FixedRecognizer::default()));

    let report = auditor.run(AUDIT_URL).await.unwrap();
    assert_eq!(report.external_link_count, 1);

    // The substring rule counts both same-site links as outbound.
    let report = Auditor::new(AuditOptions::default())
        .unwrap()
        .with_page_source(StaticPage::new(html))
        .with_recognizer(Arc::new(FixedRecognizer::default()))
        .run(AUDIT_URL)
        .await
        .unwrap();
    assert_eq!(report.external_link_count, 3);
}

#[tokio::test]
async fn rendered_summary_lists_scores_and_reputation_links() {
    let report = fixture_auditor(5, 3).run(AUDIT_URL).await.unwrap();
    let rendered = render_report(&report);

    assert!(rendered.contains("Experience"));
    assert!(rendered.contains("4/5"));
    assert!(rendered.contains("Total E-E-A-T Score: 18/20"));
    assert!(rendered
        .contains("Reddit Search: https://www.google.com/search?q=site:reddit.com+example.com"));
    assert!(rendered.contains("Quora Search: https://www.google.com/search?q=site:quora.com+example.com"));
}

#[tokio::test]
async fn pdf_export_of_fixture_report() {
    let report = fixture_auditor(5, 3).run(AUDIT_URL).await.unwrap();
    let path = std::env::temp_dir().join(format!(
        "eeat_audit_pipeline_{}.pdf",
        std::process::id()
    ));

    report.write_pdf(&path).unwrap();
    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(written.starts_with(b"%PDF-"));

    let fields = report.fields();
    assert!(fields.contains(&("Schema Types Found", "Organization, Person, WebPage".to_string())));
    assert!(fields.contains(&("Total E-E-A-T Score", "18/20".to_string())));
}

#[test]
fn shared_model_finds_entities_in_fixture_text() {
    let signals = eeat_audit::extract_signals(&fixture(), AUDIT_URL, &AuditOptions::default());
    let entities = NerModel::shared().recognize(&signals.raw_text);

    let texts: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();
    assert!(texts.contains(&"Maria Lopez"), "got {texts:?}");
    assert!(texts.contains(&"March 2021"), "got {texts:?}");
    assert!(texts.contains(&"2023"), "got {texts:?}");
}

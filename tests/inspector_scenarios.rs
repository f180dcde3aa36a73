//! End-to-end inspector runs over enumerated domains with fake collaborators.

mod helpers;

use hats_domains::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use hats_domains::models::Registration;
use hats_domains::{enumerate_domains, render_report_to_string, Inspector};

use helpers::{ScriptedBrowser, TableResolver, TableWhois, WhoisAnswer};

#[tokio::test]
async fn test_largest_three_all_live() {
    let domains = enumerate_domains(3, false);
    assert_eq!(domains, vec!["2hats.com", "3hats.com"]);

    let stats = ProcessingStats::new();
    let mut inspector = Inspector::new(
        TableWhois::default(),
        TableResolver::default(),
        ScriptedBrowser::default(),
    );
    let sites = inspector.inspect_all(&domains, &stats).await;

    assert_eq!(sites.len(), 2);
    for (site, domain) in sites.iter().zip(&domains) {
        assert_eq!(&site.domain, domain);
        assert!(site.error.is_none());
        assert!(site.note.is_none());
        let page = site.page.as_ref().expect("page should be captured");
        assert_eq!(page.title, format!("Welcome to http://{domain}/"));
        assert!(!page.screenshot.as_bytes().is_empty());
    }
    assert_eq!(stats.get_info_count(InfoType::PageCaptured), 2);
    assert_eq!(stats.total_errors(), 0);

    let browser = inspector.into_browser();
    assert_eq!(
        browser.calls,
        vec![
            "navigate http://2hats.com/",
            "title",
            "screenshot",
            "navigate http://3hats.com/",
            "title",
            "screenshot",
        ]
    );
}

#[tokio::test]
async fn test_mixed_batch_never_aborts() {
    let domains = enumerate_domains(6, true);
    assert_eq!(domains.len(), 7);

    let whois = TableWhois::default()
        .with("0hats.com", WhoisAnswer::Fails)
        .with("3hats.com", WhoisAnswer::NotFound);
    let resolver = TableResolver {
        unresolvable: vec!["4hats.com".to_string()],
    };
    let browser = ScriptedBrowser {
        unreachable: vec!["http://5hats.com/".to_string()],
        ..Default::default()
    };
    let stats = ProcessingStats::new();
    let mut inspector = Inspector::new(whois, resolver, browser);

    let sites = inspector.inspect_all(&domains, &stats).await;
    let domains_out: Vec<&str> = sites.iter().map(|s| s.domain.as_str()).collect();
    assert_eq!(
        domains_out,
        vec!["0hats.com", "1hat.com", "2hats.com", "3hats.com", "4hats.com", "5hats.com", "6hats.com"]
    );

    // WHOIS failure: error only
    let failed = &sites[0];
    assert_eq!(failed.registration, Registration::Unknown);
    assert!(failed.error.is_some());
    assert!(failed.note.is_none() && failed.page.is_none());

    // Available: note with a registration link naming the domain
    let available = &sites[3];
    assert!(available.is_available());
    assert!(available.registration.info().is_none());
    assert!(available.page.is_none());
    let note = available.note.as_ref().unwrap();
    assert!(!note.message.is_empty());
    assert!(note.link.as_deref().unwrap().contains("3hats.com"));

    // Registered but no DNS: note, metadata kept, no error
    let dark = &sites[4];
    assert!(!dark.is_available());
    assert!(dark.registration.info().is_some());
    assert!(dark.page.is_none());
    assert!(dark.error.is_none());
    assert!(dark.note.as_ref().unwrap().message.contains("DNS"));

    // Browser failure: error, metadata kept
    let unreachable = &sites[5];
    assert!(unreachable.registration.info().is_some());
    assert!(unreachable.page.is_none());
    assert!(unreachable.error.as_deref().unwrap().contains("http://5hats.com/"));

    assert!(sites[6].page.is_some());

    assert_eq!(stats.get_error_count(ErrorType::WhoisQueryError), 1);
    assert_eq!(stats.get_error_count(ErrorType::BrowserNavigateError), 1);
    assert_eq!(stats.get_warning_count(WarningType::DnsLookupFailed), 1);
    assert_eq!(stats.get_info_count(InfoType::DomainAvailable), 1);

    let html = render_report_to_string(&sites).unwrap();
    assert!(html.contains("Lookup failed"));
    assert!(html.contains("Available!"));
}

#[tokio::test]
async fn test_empty_range_inspects_nothing() {
    let stats = ProcessingStats::new();
    let mut inspector = Inspector::new(
        TableWhois::default(),
        TableResolver::default(),
        ScriptedBrowser::default(),
    );
    let sites = inspector.inspect_all(&enumerate_domains(1, false), &stats).await;
    assert!(sites.is_empty());
    assert!(inspector.into_browser().calls.is_empty());
}

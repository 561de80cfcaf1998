use super::*;
use crate::support::sample_catalog;

fn run_script(script: &str) -> (MenuSession, Language, String) {
    let mut session = MenuSession::new(sample_catalog());
    let mut out = Vec::new();
    let language = run(&mut session, Language::En, script.as_bytes(), &mut out).expect("run");
    (session, language, String::from_utf8(out).expect("utf8"))
}

#[test]
fn parses_commands_with_lenient_values() {
    assert_eq!(
        parse_event("diet keto"),
        Ok(BrowseEvent::Diet(DietFilter::All))
    );
    assert_eq!(
        parse_event("sort price-asc"),
        Ok(BrowseEvent::Sort(SortBy::PriceAsc))
    );
    assert_eq!(parse_event("key esc"), Ok(BrowseEvent::Key(NavKey::Escape)));
    assert_eq!(
        parse_event("swipe 120"),
        Ok(BrowseEvent::Swipe {
            offset: 120.0,
            velocity: 0.0
        })
    );
    assert!(parse_event("diet").is_err());
    assert!(parse_event("chef maybe").is_err());
    assert!(parse_event("dance").is_err());
}

#[test]
fn script_filters_opens_and_navigates() {
    let (session, _, out) = run_script("sort price-asc\nopen veg-maki\nnext\nquit\nnext\n");
    assert_eq!(session.criteria().sort_by, SortBy::PriceAsc);
    assert_eq!(session.active().map(|d| d.id.as_str()), Some("udon"));
    assert!(out.contains("Kake Udon [udon]"), "{out}");
}

#[test]
fn arrow_keys_flip_after_switching_to_arabic() {
    let (session, language, _) =
        run_script("sort price-asc\nopen veg-maki\nlang ar\nkey left\n");
    assert_eq!(language, Language::Ar);
    assert_eq!(session.active().map(|d| d.id.as_str()), Some("udon"));
}

#[test]
fn swipe_past_threshold_closes_detail() {
    let (session, _, _) = run_script("open udon\nswipe 40 100\n");
    assert!(session.active().is_some());

    let (session, _, out) = run_script("open udon\nswipe 40 900\n");
    assert!(session.active().is_none());
    assert!(out.contains("4 dishes shown (4 in catalog)"), "{out}");
}

#[test]
fn clear_keeps_view_mode_and_reports_unknown_ids() {
    let (session, _, out) =
        run_script("view list\ndiet vegetarian\nclear\nopen missing\n");
    assert_eq!(session.criteria().view_mode, ViewMode::List);
    assert!(!session.criteria().has_active_filters());
    assert!(out.contains("no dish with id 'missing'"), "{out}");
}

use jobsearch_core::{render_results, JobListing, ResultView, EMPTY_STATE_HEADING};
use pretty_assertions::assert_eq;

fn jobs() -> Vec<JobListing> {
    vec![
        JobListing::new(Some("Acme".to_string()), "http://a"),
        JobListing::new(Some("  ".to_string()), "http://b"),
        JobListing::new(None, "http://c"),
    ]
}

#[test]
fn empty_list_renders_empty_state() {
    let view = render_results(&[], "Engineer", "2");

    let ResultView::Empty(empty) = &view else {
        panic!("expected empty state");
    };
    assert_eq!(empty.heading, EMPTY_STATE_HEADING);
    assert_eq!(empty.icon, "search");
    assert_eq!(view, ResultView::empty());
}

#[test]
fn cards_fall_back_to_company_placeholder() {
    let view = render_results(&jobs(), "Data Analyst", "6");

    assert_eq!(
        view.summary(),
        Some("Showing 3 jobs for \"Data Analyst\" at Executive level")
    );
    let companies: Vec<_> = view.cards().iter().map(|c| c.company.as_str()).collect();
    assert_eq!(companies, vec!["Acme", "Company", "Company"]);
    let indices: Vec<_> = view.cards().iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn every_experience_code_has_a_label() {
    let expected = [
        ("1", "Internship"),
        ("2", "Entry level"),
        ("3", "Associate"),
        ("4", "Mid-Senior"),
        ("5", "Director"),
        ("6", "Executive"),
    ];
    for (code, label) in expected {
        let view = render_results(&jobs()[..1], "X", code);
        assert_eq!(
            view.summary(),
            Some(format!("Showing 1 jobs for \"X\" at {label} level").as_str())
        );
    }
}

#[test]
fn unknown_experience_code_still_renders() {
    let view = render_results(&jobs()[..1], "X", "9");
    assert_eq!(view.summary(), Some("Showing 1 jobs for \"X\" at Unknown level"));
}

#[test]
fn rendering_is_idempotent() {
    let first = render_results(&jobs(), "Engineer", "2");
    let second = render_results(&jobs(), "Engineer", "2");

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

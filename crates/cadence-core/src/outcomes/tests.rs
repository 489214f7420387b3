use crate::{
    error::CadenceError,
    models::{MetricField, MetricStatus, Outcome, OutcomeData, Timeframe},
    outcomes::{Alignment, OutcomeStore},
};

fn create_test_store() -> OutcomeStore {
    let mut mid_a = Outcome::new("mto-001", "Users will adopt self-service", Timeframe::MidTerm);
    mid_a.parent_outcome_id = Some("lto-001".to_string());
    let mut mid_b = Outcome::new("mto-002", "Teams will establish SLOs", Timeframe::MidTerm);
    mid_b.parent_outcome_id = Some("lto-002".to_string());
    let mut mid_c = Outcome::new("mto-003", "Orphaned", Timeframe::MidTerm);
    mid_c.parent_outcome_id = Some("lto-404".to_string());

    OutcomeStore::new(OutcomeData {
        long_term: vec![
            Outcome::new("lto-001", "Customers will be able to onboard", Timeframe::LongTerm),
            Outcome::new("lto-002", "Engineers will have reliable systems", Timeframe::LongTerm),
        ],
        mid_term: vec![mid_a, mid_b, mid_c],
        short_term: vec![Outcome::new("sto-001", "Ship onboarding v1", Timeframe::ShortTerm)],
    })
}

#[test]
fn test_begin_new_mints_padded_id_and_default_parent() {
    let store = create_test_store();
    let draft = store.begin_new(Timeframe::MidTerm);
    assert_eq!(draft.id(), "mto-004");
    assert!(draft.is_new());
    assert_eq!(draft.outcome().parent_outcome_id.as_deref(), Some("lto-001"));

    let long = store.begin_new(Timeframe::LongTerm);
    assert_eq!(long.id(), "lto-003");
    assert!(long.outcome().parent_outcome_id.is_none());
}

#[test]
fn test_next_id_skips_taken_ids() {
    let mut store = create_test_store();
    store.delete("mto-001").unwrap();
    // Two mid-term outcomes remain but mto-003 is still taken.
    assert_eq!(store.next_id(Timeframe::MidTerm), "mto-004");
}

#[test]
fn test_commit_new_outcome_appends() {
    let mut store = create_test_store();
    let mut draft = store.begin_new(Timeframe::ShortTerm);
    draft.set_title("Managers will have weekly reports, improving visibility");
    let saved = store.commit(draft);
    assert!(saved.created);
    assert!(saved.validation.is_complete());
    assert_eq!(store.list(Timeframe::ShortTerm).len(), 2);
}

#[test]
fn test_commit_with_failed_validation_still_saves() {
    let mut store = create_test_store();
    let mut draft = store.begin_edit("lto-002").unwrap();
    let feedback = draft.set_title("Teams will have dashboards").clone();
    assert!(feedback.who.valid && feedback.what.valid && !feedback.why.valid);

    let saved = store.commit(draft);
    assert!(!saved.created);
    assert!(!saved.validation.why.valid);
    assert_eq!(store.get("lto-002").unwrap().title, "Teams will have dashboards");
    assert_eq!(store.list(Timeframe::LongTerm).len(), 2);
}

#[test]
fn test_dropping_a_draft_discards_edits() {
    let store = create_test_store();
    {
        let mut draft = store.begin_edit("sto-001").unwrap();
        draft.set_title("Changed");
    }
    assert_eq!(store.get("sto-001").unwrap().title, "Ship onboarding v1");
}

#[test]
fn test_draft_revalidates_on_every_title_change() {
    let store = create_test_store();
    let mut draft = store.begin_new(Timeframe::LongTerm);
    assert!(!draft.validation().who.valid);
    draft.set_title("Users");
    assert!(draft.validation().who.valid);
    draft.set_title("Nobody");
    assert!(!draft.validation().who.valid);
}

#[test]
fn test_metric_editing() {
    let store = create_test_store();
    let mut draft = store.begin_edit("sto-001").unwrap();
    let index = draft.add_metric();
    draft.update_metric(index, MetricField::Name, "Activation").unwrap();
    draft.update_metric(index, MetricField::Current, "n/a").unwrap();
    draft.update_metric(index, MetricField::Target, "40").unwrap();
    draft.update_metric(index, MetricField::Status, "at-risk").unwrap();

    let metric = &draft.outcome().metrics[index];
    assert_eq!(metric.name, "Activation");
    assert_eq!(metric.current, "n/a");
    assert_eq!(metric.status, MetricStatus::AtRisk);

    assert!(draft.update_metric(7, MetricField::Name, "x").is_err());
    assert!(draft.update_metric(index, MetricField::Status, "sideways").is_err());
    assert!(draft.remove_metric(7).is_none());
    assert!(draft.remove_metric(index).is_some());
}

#[test]
fn test_begin_edit_unknown_outcome_fails() {
    let store = create_test_store();
    assert!(matches!(
        store.begin_edit("lto-999"),
        Err(CadenceError::OutcomeNotFound { .. })
    ));
}

#[test]
fn test_deleting_long_term_cascades_to_aligned_mid_terms() {
    let mut store = create_test_store();
    let removed = store.delete("lto-001").unwrap();
    let ids: Vec<_> = removed.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["lto-001", "mto-001"]);
    assert!(store.get("mto-002").is_some());
    assert!(store.get("mto-003").is_some());
}

#[test]
fn test_deleting_mid_term_removes_only_it() {
    let mut store = create_test_store();
    let removed = store.delete("mto-002").unwrap();
    assert_eq!(removed.len(), 1);
    assert!(store.get("lto-002").is_some());
}

#[test]
fn test_alignment_tolerates_dangling_parent() {
    let store = create_test_store();
    let aligned = store.get("mto-001").unwrap();
    assert!(matches!(store.alignment(aligned), Alignment::Aligned(p) if p.id == "lto-001"));

    let orphan = store.get("mto-003").unwrap();
    assert_eq!(store.alignment(orphan), Alignment::Unaligned);
    assert_eq!(store.unaligned().len(), 1);
    assert_eq!(store.aligned_children("lto-002").len(), 1);
}

#[test]
fn test_commit_edit_after_delete_restores_outcome() {
    let mut store = create_test_store();
    let mut draft = store.begin_edit("sto-001").unwrap();
    assert!(!draft.is_new());
    draft.set_title("Ship onboarding v2");
    store.delete("sto-001").unwrap();

    let saved = store.commit(draft);
    assert!(!saved.created);
    assert_eq!(store.list(Timeframe::ShortTerm).len(), 1);
    assert_eq!(store.get("sto-001").unwrap().title, "Ship onboarding v2");
}

#[test]
fn test_alignment_resolves_against_any_long_term_list() {
    let store = create_test_store();
    let mid = store.get("mto-002").unwrap();
    assert!(matches!(
        Alignment::resolve(mid, store.list(Timeframe::LongTerm)),
        Alignment::Aligned(p) if p.id == "lto-002"
    ));
    assert_eq!(Alignment::resolve(mid, &[]), Alignment::Unaligned);
}

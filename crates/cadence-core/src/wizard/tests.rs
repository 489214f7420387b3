use jiff::civil::date;

use crate::{
    classify::{PREVIOUS_CYCLE_TAG, UPCOMING_CYCLE_CONTAINER, UPCOMING_CYCLE_TAG},
    models::{
        BacklogItem, ContactPerson, ItemStatus, Metric, Outcome, OutcomeData, RelatedTeam,
        RelationshipType, Timeframe,
    },
    wizard::{Navigation, SessionEvent, StepMarker, StepView, Wizard, WizardStep},
};

fn team(id: &str, name: &str) -> RelatedTeam {
    RelatedTeam {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        relationship_type: RelationshipType::Backlog,
        relationship_strength: Default::default(),
        shared_outcomes: Vec::new(),
        capabilities: Vec::new(),
        capacity: Default::default(),
        contact_person: ContactPerson {
            name: "Sam Rivera".to_string(),
            ..Default::default()
        },
        upcoming_milestones: Vec::new(),
    }
}

fn create_test_wizard() -> Wizard {
    let mut short = Outcome::new("sto-001", "Users will be able to onboard", Timeframe::ShortTerm);
    short.metrics.push(Metric {
        name: "Activation".to_string(),
        ..Default::default()
    });
    let outcomes = OutcomeData {
        long_term: vec![Outcome::new("lto-001", "Customers will adopt", Timeframe::LongTerm)],
        mid_term: Vec::new(),
        short_term: vec![short],
    };
    let backlog = vec![
        BacklogItem::new("b1", "Onboarding").with_tags([PREVIOUS_CYCLE_TAG]),
        BacklogItem::new("b2", "Billing export").with_tags([UPCOMING_CYCLE_TAG]),
        BacklogItem::new("b3", "Search"),
        BacklogItem::new("b4", "Legacy cleanup")
            .with_tags([PREVIOUS_CYCLE_TAG])
            .with_status(ItemStatus::Completed),
    ];
    Wizard::new(
        outcomes,
        backlog,
        vec![team("team-1", "Platform"), team("team-2", "Design Systems")],
    )
}

fn advance_to(wizard: &mut Wizard, step: WizardStep) {
    while wizard.step() < step {
        wizard.next();
    }
}

#[test]
fn test_starts_at_first_step() {
    let wizard = create_test_wizard();
    assert_eq!(wizard.step(), WizardStep::DefineOutcomes);
    assert!(!wizard.is_confirmation_pending());
    assert!(!wizard.is_finished());
}

#[test]
fn test_back_at_first_step_is_noop() {
    let mut wizard = create_test_wizard();
    assert!(!wizard.back());
    assert_eq!(wizard.step(), WizardStep::DefineOutcomes);
}

#[test]
fn test_next_clamps_at_review() {
    let mut wizard = create_test_wizard();
    for _ in 0..4 {
        assert!(wizard.next());
    }
    assert!(!wizard.next());
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[test]
fn test_jump_forward_is_rejected() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::BacklogPlanning);
    let before = wizard.state().clone();

    assert!(!wizard.jump_to(5));
    assert!(!wizard.jump_to(3));
    assert!(!wizard.jump_to(200));
    assert_eq!(wizard.step(), WizardStep::BacklogPlanning);
    assert_eq!(wizard.state(), &before);
}

#[test]
fn test_jump_back_to_completed_step() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::TeamConnections);
    assert!(wizard.jump_to(2));
    assert_eq!(wizard.step(), WizardStep::InnovationSprint);
    assert!(!wizard.jump_to(0));
    assert_eq!(wizard.step(), WizardStep::InnovationSprint);
}

#[test]
fn test_step_stays_in_range_under_any_sequence() {
    let mut wizard = create_test_wizard();
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..2_000 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let before = wizard.step();
        match (seed >> 16) % 3 {
            0 => {
                wizard.next();
            }
            1 => {
                wizard.back();
            }
            _ => {
                let n = ((seed >> 8) % 8) as u8;
                wizard.jump_to(n);
                if n >= before.number() {
                    assert_eq!(wizard.step(), before);
                }
            }
        }
        let number = wizard.step().number();
        assert!((1..=5).contains(&number));
    }
}

#[test]
fn test_progress_markers() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::BacklogPlanning);
    let markers: Vec<_> = wizard.progress().into_iter().map(|(_, m)| m).collect();
    assert_eq!(
        markers,
        vec![
            StepMarker::Completed,
            StepMarker::Completed,
            StepMarker::Current,
            StepMarker::Upcoming,
            StepMarker::Upcoming,
        ]
    );
}

#[test]
fn test_finalize_only_available_on_review() {
    let mut wizard = create_test_wizard();
    assert!(!wizard.request_finalize());
    assert!(!wizard.is_confirmation_pending());
    assert_eq!(wizard.confirm_finalize(), None);

    advance_to(&mut wizard, WizardStep::Review);
    assert!(wizard.request_finalize());
    assert!(wizard.is_confirmation_pending());
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[test]
fn test_cancel_finalize_leaves_state_unchanged() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::Review);
    wizard.toggle_team("team-2");
    let before = serde_json::to_string(wizard.state()).unwrap();

    assert!(wizard.request_finalize());
    assert!(wizard.cancel_finalize());

    assert!(!wizard.is_confirmation_pending());
    assert_eq!(wizard.step(), WizardStep::Review);
    assert_eq!(serde_json::to_string(wizard.state()).unwrap(), before);
    assert!(!wizard.cancel_finalize());
}

#[test]
fn test_transitions_ignored_while_confirming() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::Review);
    wizard.request_finalize();
    assert!(!wizard.back());
    assert!(!wizard.jump_to(1));
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[test]
fn test_confirm_finalize_signals_navigation_once() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::Review);
    wizard.request_finalize();
    assert_eq!(wizard.confirm_finalize(), Some(Navigation::SprintPlan));
    assert!(wizard.is_finished());
    assert_eq!(wizard.confirm_finalize(), None);
    assert!(!wizard.request_finalize());
}

#[test]
fn test_drop_during_planning_feeds_later_steps() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::BacklogPlanning);

    let moved = wizard.drop_item("b1", UPCOMING_CYCLE_CONTAINER).unwrap();
    assert_eq!(moved.tags, vec![UPCOMING_CYCLE_TAG.to_string()]);
    assert!(wizard.state().drag.active_id().is_none());

    wizard.next();
    match wizard.view() {
        StepView::TeamConnections { upcoming, .. } => {
            let ids: Vec<_> = upcoming.iter().map(|i| i.id.as_str()).collect();
            assert_eq!(ids, vec!["b1", "b2"]);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn test_drag_end_without_target_clears_active_item() {
    let mut wizard = create_test_wizard();
    assert!(wizard.drag_start("b3"));
    assert!(wizard.drag_end(None).is_none());
    assert!(wizard.state().drag.active_id().is_none());
    assert!(wizard.state().backlog.get("b3").unwrap().tags.is_empty());

    assert!(!wizard.drag_start("missing"));
    assert!(wizard.state().drag.active_id().is_none());
}

#[test]
fn test_backlog_view_panels() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::BacklogPlanning);
    wizard.drag_start("b3");
    match wizard.view() {
        StepView::BacklogPlanning {
            panels, dragging, ..
        } => {
            assert_eq!(panels.previous_cycle.len(), 1);
            assert_eq!(panels.product_backlog.len(), 1);
            assert_eq!(panels.upcoming_cycle.len(), 1);
            assert_eq!(dragging.map(|i| i.id.as_str()), Some("b3"));
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn test_toggle_team_twice_deselects() {
    let mut wizard = create_test_wizard();
    assert!(wizard.toggle_team("team-1"));
    assert!(wizard.state().is_team_selected("team-1"));
    assert!(!wizard.toggle_team("team-1"));
    assert!(wizard.state().selected_teams.is_empty());
}

#[test]
fn test_summary_aggregates_prior_steps() {
    let mut wizard = create_test_wizard();
    wizard.drop_item("b3", UPCOMING_CYCLE_CONTAINER);
    wizard.toggle_team("team-2");
    wizard.toggle_team("team-gone");
    advance_to(&mut wizard, WizardStep::Review);

    let summary = wizard.summary(date(2025, 8, 20)).unwrap();
    assert_eq!(summary.cycle.label(), "Q4 2025");
    assert_eq!(summary.cycle.start, date(2025, 10, 1));
    assert_eq!(summary.cycle.end, date(2025, 12, 31));
    assert_eq!(summary.outcomes.len(), 1);
    assert_eq!(summary.metric_count(), 1);

    let backlog: Vec<_> = summary.backlog.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(backlog, vec!["b2", "b3"]);

    assert_eq!(summary.teams.len(), 1);
    assert_eq!(summary.teams[0].name, "Design Systems");
    assert_eq!(summary.unresolved_teams, vec!["team-gone".to_string()]);
}

#[test]
fn test_session_script_runs_to_navigation() {
    let script = r#"[
        {"type": "next"},
        {"type": "setInnovationSprintUrl", "url": "https://sprint.example/1"},
        {"type": "setDesignAgentUrl", "url": "https://agent.example/1"},
        {"type": "next"},
        {"type": "drop", "itemId": "b3", "containerId": "q4-backlog"},
        {"type": "dragStart", "itemId": "b1"},
        {"type": "dragEnd"},
        {"type": "jumpTo", "step": 5},
        {"type": "next"},
        {"type": "toggleTeam", "teamId": "team-1"},
        {"type": "next"},
        {"type": "requestFinalize"},
        {"type": "cancelFinalize"},
        {"type": "requestFinalize"},
        {"type": "confirmFinalize"},
        {"type": "back"}
    ]"#;
    let events: Vec<SessionEvent> = serde_json::from_str(script).unwrap();
    let mut wizard = create_test_wizard();

    assert_eq!(wizard.run(events), Some(Navigation::SprintPlan));
    assert_eq!(wizard.step(), WizardStep::Review);
    assert_eq!(wizard.state().design_agent_url, "https://agent.example/1");
    assert!(wizard.state().backlog.get("b3").unwrap().has_tag(UPCOMING_CYCLE_TAG));
    assert!(wizard.state().backlog.get("b1").unwrap().has_tag(PREVIOUS_CYCLE_TAG));
    assert_eq!(wizard.state().selected_teams, vec!["team-1".to_string()]);
}

#[test]
fn test_unknown_event_type_fails_to_parse() {
    let result = serde_json::from_str::<SessionEvent>(r#"{"type": "teleport"}"#);
    assert!(result.is_err());
}

#[test]
fn test_drag_cancel_clears_active_item_without_moving_it() {
    let mut wizard = create_test_wizard();
    advance_to(&mut wizard, WizardStep::BacklogPlanning);
    let before = wizard.state().backlog.clone();

    assert!(wizard.drag_start("b3"));
    wizard.apply(SessionEvent::DragCancel);

    match wizard.view() {
        StepView::BacklogPlanning { dragging, .. } => assert!(dragging.is_none()),
        other => panic!("unexpected view: {other:?}"),
    }
    assert_eq!(wizard.state().backlog, before);
    assert!(wizard.drag_end(Some(UPCOMING_CYCLE_CONTAINER)).is_none());
    assert!(wizard.state().backlog.get("b3").unwrap().tags.is_empty());
}

#[test]
fn test_short_term_edits_reach_summary() {
    let mut wizard = create_test_wizard();
    let mut edited = Outcome::new(
        "sto-001",
        "Users will onboard in one session",
        Timeframe::MidTerm,
    );
    edited.description = "Cut drop-off in signup".to_string();
    wizard.upsert_short_term_outcome(edited);
    wizard.upsert_short_term_outcome(Outcome::new(
        "sto-002",
        "Teams will invite colleagues",
        Timeframe::ShortTerm,
    ));

    let summary = wizard.summary(date(2025, 8, 20)).unwrap();
    let titles: Vec<_> = summary.outcomes.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Users will onboard in one session", "Teams will invite colleagues"]
    );
    assert!(summary
        .outcomes
        .iter()
        .all(|o| o.timeframe == Timeframe::ShortTerm));
    assert_eq!(summary.metric_count(), 0);

    wizard.set_short_term_outcomes(Vec::new());
    assert!(wizard.summary(date(2025, 8, 20)).unwrap().outcomes.is_empty());
}

#[test]
fn test_session_script_saves_short_term_outcome() {
    let script = r#"[
        {"type": "saveShortTermOutcome", "outcome": {
            "id": "sto-001",
            "title": "Users will finish onboarding unaided",
            "timeframe": "short-term",
            "metrics": [{"name": "Completion", "target": "80%"}]
        }},
        {"type": "next"}
    ]"#;
    let events: Vec<SessionEvent> = serde_json::from_str(script).unwrap();
    let mut wizard = create_test_wizard();

    assert_eq!(wizard.run(events), None);
    assert_eq!(wizard.step(), WizardStep::InnovationSprint);

    let summary = wizard.summary(date(2025, 8, 20)).unwrap();
    assert_eq!(summary.outcomes.len(), 1);
    assert_eq!(summary.outcomes[0].title, "Users will finish onboarding unaided");
    assert_eq!(summary.outcomes[0].metrics[0].target, "80%");
}

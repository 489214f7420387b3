#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::models::{
        AgreementSection, AgreementStatus, Approval, BacklogItem, CycleWindow, ItemStatus, Level,
        Metric, MetricStatus, Outcome, OutcomeData, Panel, Timeframe, UpdateItemRequest,
        WorkPackageType, WorkingAgreement,
    };

    fn create_test_agreement() -> WorkingAgreement {
        WorkingAgreement {
            id: "1".to_string(),
            title: "Team Working Agreement".to_string(),
            description: String::new(),
            sections: vec![
                AgreementSection {
                    id: "section-1".to_string(),
                    title: "Communication".to_string(),
                    content: "Async first.".to_string(),
                },
                AgreementSection {
                    id: "section-2".to_string(),
                    title: "Meetings".to_string(),
                    content: "Agendas up front.".to_string(),
                },
            ],
            status: AgreementStatus::Draft,
            version: 1.0,
            last_updated: Timestamp::from_second(1_640_995_200).unwrap(),
            approvals: vec![
                Approval::pending("Alex Johnson"),
                Approval::pending("Sophia Chen"),
                Approval::pending("Priya Patel"),
            ],
        }
    }

    #[test]
    fn test_item_status_parsing() {
        assert_eq!("todo".parse::<ItemStatus>().unwrap(), ItemStatus::Todo);
        assert_eq!("not-started".parse::<ItemStatus>().unwrap(), ItemStatus::Todo);
        assert_eq!("In-Progress".parse::<ItemStatus>().unwrap(), ItemStatus::InProgress);
        assert_eq!("blocked".parse::<ItemStatus>().unwrap(), ItemStatus::Blocked);
        assert!("cancelled".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn test_item_status_alias_is_input_only() {
        let status: ItemStatus = serde_json::from_str("\"not-started\"").unwrap();
        assert_eq!(status, ItemStatus::Todo);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"todo\"");
    }

    #[test]
    fn test_backlog_item_camel_case_fields() {
        let json = r#"{
            "id": "b9",
            "title": "Export",
            "priority": "high",
            "status": "review",
            "tags": ["Upcoming Cycle"],
            "workPackageType": "feature",
            "epicId": "b1"
        }"#;
        let item: BacklogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.priority, Level::High);
        assert_eq!(item.effort, Level::Medium);
        assert_eq!(item.work_package_type, Some(WorkPackageType::Feature));
        assert_eq!(item.epic_id.as_deref(), Some("b1"));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["workPackageType"], "feature");
        assert_eq!(value["epicId"], "b1");
    }

    #[test]
    fn test_outcome_parent_field_name() {
        let json = r#"{"id": "mto-001", "title": "T", "timeframe": "mid-term", "parentOutcomeId": "lto-001"}"#;
        let outcome: Outcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.timeframe, Timeframe::MidTerm);
        assert_eq!(outcome.parent_outcome_id.as_deref(), Some("lto-001"));
        assert!(outcome.metrics.is_empty());

        let data: OutcomeData =
            serde_json::from_str(r#"{"shortTerm": [], "longTerm": []}"#).unwrap();
        assert!(data.mid_term.is_empty());
    }

    #[test]
    fn test_metric_values_are_free_text() {
        let json = r#"{"name": "Satisfaction", "current": "about 3", "target": "4.5", "unit": "out of 5", "status": "at-risk"}"#;
        let metric: Metric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.current, "about 3");
        assert_eq!(metric.status, MetricStatus::AtRisk);
    }

    #[test]
    fn test_panel_parsing() {
        assert_eq!("previous".parse::<Panel>().unwrap(), Panel::PreviousCycle);
        assert_eq!("product-backlog".parse::<Panel>().unwrap(), Panel::ProductBacklog);
        assert!("sideways".parse::<Panel>().is_err());
    }

    #[test]
    fn test_cycle_window_rolls_over_year() {
        let window = CycleWindow::following(date(2025, 12, 31)).unwrap();
        assert_eq!((window.quarter, window.year), (1, 2026));
        assert_eq!(window.end, date(2026, 3, 31));

        let window = CycleWindow::following(date(2025, 1, 15)).unwrap();
        assert_eq!(window.label(), "Q2 2025");
        assert_eq!(window.start, date(2025, 4, 1));
        assert_eq!(window.end, date(2025, 6, 30));
    }

    #[test]
    fn test_update_request_describes_changes() {
        let request = UpdateItemRequest {
            title: Some("New".to_string()),
            status: Some(ItemStatus::Blocked),
            ..Default::default()
        };
        assert!(!request.is_empty());
        assert_eq!(
            request.describe_changes(),
            vec!["Updated title".to_string(), "Status set to blocked".to_string()]
        );
        assert!(UpdateItemRequest::default().is_empty());
    }

    #[test]
    fn test_agreement_section_ids_skip_taken() {
        let mut agreement = create_test_agreement();
        assert!(agreement.delete_section("section-1"));
        // One section remains but section-2 is still taken.
        assert_eq!(agreement.add_section(), "section-3");
        assert!(!agreement.delete_section("section-9"));
    }

    #[test]
    fn test_agreement_update_section() {
        let mut agreement = create_test_agreement();
        let before = agreement.last_updated;
        agreement
            .update_section("section-2", None, Some("No meeting Fridays.".to_string()))
            .unwrap();
        let section = agreement.section("section-2").unwrap();
        assert_eq!(section.title, "Meetings");
        assert_eq!(section.content, "No meeting Fridays.");
        assert!(agreement.last_updated > before);
        assert!(agreement.update_section("section-7", None, None).is_err());
    }

    #[test]
    fn test_agreement_approvals_and_publish() {
        let mut agreement = create_test_agreement();
        assert_eq!(agreement.approval_percentage(), 0);
        agreement.approve("Sophia Chen").unwrap();
        assert_eq!(agreement.approval_percentage(), 33);
        agreement.approve("Priya Patel").unwrap();
        assert_eq!(agreement.approval_percentage(), 67);
        assert!(agreement.approve("Nobody").is_err());

        agreement.publish();
        assert_eq!(agreement.status, AgreementStatus::Active);
        assert_eq!(agreement.version, 1.1);
        agreement.publish();
        assert_eq!(agreement.version, 1.2);
    }

    #[test]
    fn test_backlog_item_display() {
        let item = BacklogItem::new("b1", "Audit logging")
            .with_tags(["Previous Cycle", "security"])
            .with_status(ItemStatus::Blocked);
        let output = item.to_string();
        assert!(output.starts_with("### Audit logging (✗ Blocked)"));
        assert!(output.contains("- Tags: Previous Cycle, security"));
        assert!(output.contains("Priority: medium"));
    }

    #[test]
    fn test_outcome_display_lists_metrics() {
        let mut outcome = Outcome::new("sto-001", "Ship v1", Timeframe::ShortTerm);
        outcome.metrics.push(Metric {
            name: "Activation".to_string(),
            current: "10".to_string(),
            target: "40".to_string(),
            unit: "%".to_string(),
            status: MetricStatus::OnTrack,
        });
        let output = outcome.to_string();
        assert!(output.contains("### sto-001. Ship v1"));
        assert!(output.contains("- Activation: 40 % (currently 10 %) [On Track]"));
    }

    #[test]
    fn test_agreement_display() {
        let agreement = create_test_agreement();
        let output = agreement.to_string();
        assert!(output.contains("# Team Working Agreement"));
        assert!(output.contains("- Status: draft (v1.0)"));
        assert!(output.contains("## Meetings"));
    }
}

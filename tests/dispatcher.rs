use serde_json::json;
use techflow::api::{ApiError, UpdateKind};
use techflow::dispatcher::{update_outcome, ActionDispatcher, IssueAction, Prompt, PromptError};
use techflow::issues::{Priority, TechLevel};
use techflow::notification::Severity;

#[test]
fn test_action_identifiers() {
    for action in IssueAction::ALL {
        assert_eq!(IssueAction::from_identifier(action.identifier()), Some(action));
    }
    assert_eq!(IssueAction::from_identifier("deleteIssue"), None);
}

#[test]
fn test_prompts_per_action() {
    assert_eq!(IssueAction::SetPriority.prompt(7), Some(Prompt::ChoosePriority { issue_id: 7 }));
    assert_eq!(IssueAction::StartIssue.prompt(7), Some(Prompt::ConfirmStart { issue_id: 7 }));
    assert_eq!(IssueAction::CompleteIssue.prompt(7), Some(Prompt::ResolutionNotes { issue_id: 7 }));
    assert_eq!(IssueAction::ViewHistory.prompt(7), None);
}

#[test]
fn test_selection_prompt_options() {
    let priorities = Prompt::ChoosePriority { issue_id: 1 }.options();
    assert_eq!(priorities, vec![("High", "High"), ("Medium", "Medium"), ("Low", "Low")]);

    let levels = Prompt::ChooseTechLevel { issue_id: 1 }.options();
    assert_eq!(levels[0], ("L1", "L1 - CE"));
    assert_eq!(levels[1], ("L2", "L2 - Skidata/TKH"));

    assert!(Prompt::ConfirmStart { issue_id: 1 }.options().is_empty());
    assert_eq!(Prompt::ConfirmStart { issue_id: 1 }.confirm_label(), "Yes, start work!");
}

#[test]
fn test_set_priority_requires_selection() {
    let dispatcher = ActionDispatcher::new("Technical Team");

    assert_eq!(dispatcher.set_priority(4, None), Err(PromptError::NoPrioritySelected));
    assert_eq!(PromptError::NoPrioritySelected.message(), "Please select a priority");

    let request = dispatcher.set_priority(4, Some(Priority::High)).unwrap();
    assert_eq!(request.path(), "/api/issues/4/priority");
    assert_eq!(
        request.body(),
        json!({ "priority": "High", "performed_by": "Technical Team" })
    );
}

#[test]
fn test_set_tech_level_requires_selection() {
    let dispatcher = ActionDispatcher::default();

    assert_eq!(dispatcher.set_tech_level(9, None), Err(PromptError::NoTechLevelSelected));
    assert_eq!(PromptError::NoTechLevelSelected.message(), "Please select a tech level");

    let request = dispatcher.set_tech_level(9, Some(TechLevel::L2)).unwrap();
    assert_eq!(request.path(), "/api/issues/9/tech_level");
    assert_eq!(request.body()["tech_level"], "L2");
}

#[test]
fn test_start_request() {
    let request = ActionDispatcher::new("Night Shift").start(12);
    assert_eq!(request.kind, UpdateKind::Start);
    assert_eq!(request.path(), "/api/issues/12/start");
    assert_eq!(request.body(), json!({ "performed_by": "Night Shift" }));
}

#[test]
fn test_complete_defaults_blank_notes() {
    let dispatcher = ActionDispatcher::default();

    let request = dispatcher.complete(3, "   ");
    assert_eq!(request.path(), "/api/issues/3/complete");
    assert_eq!(request.body()["resolution_notes"], "Issue resolved successfully");

    let request = dispatcher.complete(3, "Replaced the card reader");
    assert_eq!(request.body()["resolution_notes"], "Replaced the card reader");
    assert_eq!(request.body()["performed_by"], "Technical Team");
}

#[test]
fn test_update_outcome_notifications() {
    let success = update_outcome(&Ok(()));
    assert_eq!(success.severity, Severity::Success);
    assert_eq!(success.title, "Success!");
    assert_eq!(success.body, "Update completed successfully");

    let rejected = update_outcome(&Err(ApiError::Rejected(Some("Issue already completed".to_string()))));
    assert_eq!(rejected.severity, Severity::Error);
    assert_eq!(rejected.body, "Issue already completed");

    let rejected_silently = update_outcome(&Err(ApiError::Rejected(None)));
    assert_eq!(rejected_silently.body, "Failed to update");

    let network = update_outcome(&Err(ApiError::Transport("connection refused".to_string())));
    assert_eq!(network.title, "Error");
    assert_eq!(network.body, "Failed to update issue");
}

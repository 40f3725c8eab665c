//! End-to-end wizard flow tests through the application service.
//!
//! These exercise the documented behavioral contract: step gating,
//! validation rejections, tier boundaries, and the persisted report block.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use rehab_assistant::adapters::report::InMemoryReportSink;
use rehab_assistant::application::{ServiceError, WizardService};
use rehab_assistant::domain::foundation::{
    ActivityType, BodyArea, ValidationError, YearLevel,
};
use rehab_assistant::domain::recommendation::{SeverityTier, MOTIVATIONAL_QUOTES};
use rehab_assistant::domain::wizard::{StepAction, WizardError, WizardStep};

fn new_service() -> WizardService<InMemoryReportSink, StdRng> {
    WizardService::new(InMemoryReportSink::new(), StdRng::seed_from_u64(42))
}

fn identity(name: &str, year: Option<YearLevel>) -> StepAction {
    StepAction::SubmitIdentity {
        name: name.to_string(),
        year_level: year,
    }
}

fn pain(input: &str) -> StepAction {
    StepAction::SubmitPain {
        input: input.to_string(),
    }
}

fn body_area(areas: &[BodyArea], activity: Option<ActivityType>) -> StepAction {
    StepAction::SubmitBodyArea {
        areas: areas.iter().copied().collect(),
        activity,
    }
}

/// Runs a full session and returns the service on its report step.
fn complete_session(
    name: &str,
    year: YearLevel,
    pain_input: &str,
    areas: &[BodyArea],
    activity: ActivityType,
) -> WizardService<InMemoryReportSink, StdRng> {
    let mut service = new_service();
    service.submit(StepAction::Start).unwrap();
    service.submit(identity(name, Some(year))).unwrap();
    service.submit(pain(pain_input)).unwrap();
    service.submit(body_area(areas, Some(activity))).unwrap();
    assert_eq!(service.step(), WizardStep::Report);
    service
}

#[test]
fn scenario_minor_tier_mentions_knee() {
    let service = complete_session(
        "Aminder",
        YearLevel::Yr10,
        "2",
        &[BodyArea::Knee],
        ActivityType::CasualExerciser,
    );

    let recommendation = service.recommendation().unwrap();
    assert_eq!(recommendation.tier, SeverityTier::Minor);
    assert!(recommendation.exercise_text.contains("knee"));
}

#[test]
fn scenario_tier_boundaries_are_exact() {
    for (input, expected) in [
        ("5", SeverityTier::Moderate),
        ("7", SeverityTier::Moderate),
        ("8", SeverityTier::Severe),
    ] {
        let service = complete_session(
            "Aminder",
            YearLevel::Yr10,
            input,
            &[BodyArea::Knee],
            ActivityType::CasualExerciser,
        );
        assert_eq!(service.recommendation().unwrap().tier, expected);
    }
}

#[test]
fn scenario_empty_name_is_rejected_on_identity() {
    let mut service = new_service();
    service.submit(StepAction::Start).unwrap();

    let err = service
        .submit(identity("", Some(YearLevel::Yr10)))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Wizard(WizardError::Validation(ValidationError::MissingField {
            field: "name"
        }))
    ));
    assert_eq!(service.step(), WizardStep::Identity);
}

#[test]
fn scenario_unparsable_pain_is_rejected_on_pain() {
    let mut service = new_service();
    service.submit(StepAction::Start).unwrap();
    service
        .submit(identity("Aminder", Some(YearLevel::Yr10)))
        .unwrap();

    let err = service.submit(pain("abc")).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Wizard(WizardError::Validation(ValidationError::Unparsable {
            field: "pain_level",
            ..
        }))
    ));
    assert_eq!(service.step(), WizardStep::Pain);
}

#[test]
fn rejections_are_idempotent_across_repeated_submissions() {
    let mut service = new_service();
    service.submit(StepAction::Start).unwrap();
    service
        .submit(identity("Aminder", Some(YearLevel::Yr10)))
        .unwrap();

    let record_before = service.record().clone();
    for _ in 0..3 {
        let err = service.submit(pain("99")).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Wizard(WizardError::Validation(ValidationError::OutOfRange {
                field: "pain_level",
                min: 0,
                max: 10,
                actual: 99,
            }))
        ));
        assert_eq!(service.step(), WizardStep::Pain);
        assert_eq!(service.record(), &record_before);
    }
}

#[test]
fn report_is_never_reached_with_an_incomplete_record() {
    let mut service = new_service();
    service.submit(StepAction::Start).unwrap();
    service
        .submit(identity("Aminder", Some(YearLevel::Yr10)))
        .unwrap();
    service.submit(pain("4")).unwrap();

    // Missing activity keeps the wizard on the body area step.
    let err = service.submit(body_area(&[BodyArea::Back], None)).unwrap_err();
    assert!(matches!(err, ServiceError::Wizard(_)));
    assert_eq!(service.step(), WizardStep::BodyArea);
    assert!(service.recommendation().is_none());
    assert_eq!(service.sink().block_count(), 0);

    // Completing the step finishes the record and reaches the report.
    service
        .submit(body_area(&[BodyArea::Back], Some(ActivityType::SportsPlayer)))
        .unwrap();
    assert_eq!(service.step(), WizardStep::Report);
    assert!(service.record().is_complete());
}

#[test]
fn completed_session_persists_exactly_one_literal_block() {
    let service = complete_session(
        "Aminder",
        YearLevel::Yr10,
        "2",
        &[BodyArea::Knee],
        ActivityType::CasualExerciser,
    );

    assert_eq!(service.sink().block_count(), 1);
    let block = &service.sink().blocks()[0];

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[0], "----- Rehab Report -----");
    assert_eq!(lines[1], "Name: Aminder");
    assert_eq!(lines[2], "Year Level: Yr10");
    assert_eq!(lines[3], "Pain Level: 2 (Minor)");
    assert_eq!(lines[4], "Affected Area(s): Knee");
    assert_eq!(lines[5], "Activity Type: Casual Exerciser");
    assert_eq!(
        lines[6],
        "Recommended Exercises: Gentle stretches/light activity targeting knee"
    );
    assert_eq!(lines[7], "Diet Tips: Drink water and eat healthy snacks.");
    assert_eq!(lines[8], "Recovery Advice: Stay lightly active and rest well.");
    assert!(lines[9].starts_with("Motivational Quote: "));
    assert_eq!(lines[10], "------------------------");

    let quote = lines[9].trim_start_matches("Motivational Quote: ");
    assert!(MOTIVATIONAL_QUOTES.contains(&quote));
}

#[test]
fn multi_area_session_joins_areas_in_catalog_order() {
    let service = complete_session(
        "Jess",
        YearLevel::Yr12,
        "9",
        &[BodyArea::Hamstring, BodyArea::Thigh],
        ActivityType::PostInjuryRecovery,
    );

    let block = &service.sink().blocks()[0];
    assert!(block.contains("Affected Area(s): Thigh, Hamstring\n"));
    assert!(block.contains("Pain Level: 9 (Severe)\n"));
    assert!(block.contains(
        "Recommended Exercises: Rest/limit movement of thigh, hamstring; seek professional help\n"
    ));
}

#[test]
fn abort_discards_the_session_without_persisting() {
    let mut service = new_service();
    service.submit(StepAction::Start).unwrap();
    service
        .submit(identity("Aminder", Some(YearLevel::Yr10)))
        .unwrap();
    service.submit(StepAction::Close).unwrap();

    assert_eq!(service.step(), WizardStep::Closed);
    assert_eq!(service.sink().block_count(), 0);

    let err = service.submit(pain("3")).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Wizard(WizardError::ActionNotAllowed { .. })
    ));
}

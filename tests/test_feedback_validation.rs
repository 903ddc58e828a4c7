use client_pulse_be::errors::AppError;
use client_pulse_be::models::feedback::{NewFeedback, SubmitFeedbackPayload};

fn valid_payload() -> SubmitFeedbackPayload {
    SubmitFeedbackPayload {
        email: Some("a@x.com".to_string()),
        client_name: Some("Acme".to_string()),
        project: Some("Website".to_string()),
        reactivity: Some(2),
        deadlines: Some(5),
        deliverables: Some(5),
        professionalism: Some(5),
        reactivity_suggestion: None,
        deadlines_suggestion: None,
        deliverables_suggestion: None,
        professionalism_suggestion: None,
        global_comment: None,
    }
}

#[test]
fn test_valid_payload_parses() {
    let feedback = NewFeedback::parse(valid_payload()).unwrap();

    assert_eq!(feedback.email, "a@x.com");
    assert_eq!(feedback.client_name, "Acme");
    assert_eq!(feedback.project, "Website");
    assert_eq!(feedback.reactivity, 2);
    assert_eq!(feedback.professionalism, 5);
    assert_eq!(feedback.global_comment, None);
}

#[test]
fn test_text_fields_are_trimmed() {
    let mut payload = valid_payload();
    payload.client_name = Some("  Acme  ".to_string());
    payload.project = Some("\tWebsite\n".to_string());

    let feedback = NewFeedback::parse(payload).unwrap();
    assert_eq!(feedback.client_name, "Acme");
    assert_eq!(feedback.project, "Website");
}

#[test]
fn test_missing_required_text_field_is_rejected() {
    let mut payload = valid_payload();
    payload.email = None;

    let err = NewFeedback::parse(payload).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("email"));
}

#[test]
fn test_blank_required_text_field_is_rejected() {
    let mut payload = valid_payload();
    payload.client_name = Some("   ".to_string());

    let err = NewFeedback::parse(payload).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("client_name"));
}

#[test]
fn test_missing_rating_is_rejected() {
    let mut payload = valid_payload();
    payload.deadlines = None;

    let err = NewFeedback::parse(payload).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("deadlines"));
}

#[test]
fn test_out_of_range_rating_is_rejected() {
    let mut payload = valid_payload();
    payload.reactivity = Some(0);
    assert!(NewFeedback::parse(payload).is_err());

    let mut payload = valid_payload();
    payload.deliverables = Some(6);
    let err = NewFeedback::parse(payload).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("deliverables"));
}

#[test]
fn test_boundary_ratings_are_accepted() {
    let mut payload = valid_payload();
    payload.reactivity = Some(1);
    payload.deadlines = Some(5);

    let feedback = NewFeedback::parse(payload).unwrap();
    assert_eq!(feedback.reactivity, 1);
    assert_eq!(feedback.deadlines, 5);
}

#[test]
fn test_optional_fields_are_trimmed_and_collapsed() {
    let mut payload = valid_payload();
    payload.reactivity_suggestion = Some("  answer faster  ".to_string());
    payload.global_comment = Some("   ".to_string());

    let feedback = NewFeedback::parse(payload).unwrap();
    assert_eq!(
        feedback.reactivity_suggestion,
        Some("answer faster".to_string())
    );
    assert_eq!(feedback.global_comment, None);
}

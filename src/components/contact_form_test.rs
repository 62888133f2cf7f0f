#![cfg(not(feature = "hydrate"))]

use super::*;

fn submission(name: &str, email: &str, message: &str) -> Submission {
    Submission {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    }
}

#[test]
fn complete_submission_validates() {
    assert!(submission("Ana", "ana@example.com", "hi").validate().is_ok());
}

#[test]
fn any_empty_field_reports_missing_fields() {
    let cases = [
        submission("", "ana@example.com", "hi"),
        submission("Ana", "", "hi"),
        submission("Ana", "ana@example.com", ""),
    ];
    for case in cases {
        assert!(matches!(case.validate(), Err(SubmissionError::MissingFields)));
    }
}

#[test]
fn missing_fields_win_over_a_bad_email() {
    let result = submission("", "not-an-email", "hi").validate();
    assert!(matches!(result, Err(SubmissionError::MissingFields)));
}

#[test]
fn whitespace_only_fields_count_as_present() {
    assert!(submission("   ", "ana@example.com", "hi").validate().is_ok());
}

#[test]
fn bad_email_shape_reports_invalid_email() {
    let result = submission("Ana", "not-an-email", "hi").validate();
    assert!(matches!(result, Err(SubmissionError::InvalidEmail)));
}

#[test]
fn plausible_addresses_pass_the_shape_check() {
    for email in ["a@b.c", "ana@example.com", "user@sub.domain.org", "x+tag@host.io"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn dots_anywhere_inside_the_domain_count() {
    // The check wants a dot with neighbors, not a well-formed TLD.
    assert!(is_valid_email("x@a..b"));
}

#[test]
fn malformed_addresses_fail_the_shape_check() {
    for email in [
        "",
        "not-an-email",
        "@example.com",
        "ana@",
        "ana@example",
        "ana@example.",
        "ana@.com",
        "ana@exa mple.com",
        "a na@example.com",
        "ana@@example.com",
        "ana@ex@ample.com",
    ] {
        assert!(!is_valid_email(email), "{email}");
    }
}

#[test]
fn validation_errors_read_as_toast_copy() {
    assert_eq!(
        SubmissionError::MissingFields.to_string(),
        "Please complete all fields!"
    );
    assert_eq!(
        SubmissionError::InvalidEmail.to_string(),
        "Invalid email format!"
    );
}

#[test]
fn success_toast_addresses_the_sender_by_name() {
    let message = success_message("Ana");
    assert!(message.contains("Ana"));
    assert_eq!(
        message,
        "Thank you Ana! Your message has been received. I will get back to you soon."
    );
}

#[test]
fn wire_up_is_noop_but_callable() {
    wire_up();
}

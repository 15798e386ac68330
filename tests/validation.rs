use techflow::validation::*;

fn report_form() -> Vec<FormField> {
    vec![
        FormField::new("name", "Name", FieldKind::Text, true),
        FormField::new("phone", "Phone", FieldKind::Phone, true),
        FormField::new("email", "Email", FieldKind::Email, true),
        FormField::new("project", "Project", FieldKind::Text, true),
        FormField::new("description", "Description", FieldKind::TextArea, true),
    ]
}

fn fill(fields: &mut [FormField], values: [&str; 5]) {
    for (field, value) in fields.iter_mut().zip(values) {
        field.value = value.to_string();
    }
}

#[test]
fn test_email_pattern() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("a.b+tag@sub.domain.org"));
    assert!(!is_valid_email("jane@example"));
    assert!(!is_valid_email("jane example@x.com"));
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn test_phone_normalization_and_pattern() {
    assert_eq!(normalize_phone("+1 (555) 123-4567"), "+15551234567");
    assert!(is_valid_phone("+15551234567"));
    assert!(is_valid_phone("5"));
    assert!(!is_valid_phone("0123456"));
    assert!(!is_valid_phone("+1234567890123456789"));
    assert!(!is_valid_phone("555-abc"));
}

#[test]
fn test_phone_accepts_only_ascii_digits() {
    assert!(!is_valid_phone("+1\u{665}\u{665}\u{665}\u{661}\u{662}\u{663}"));
    assert!(!is_valid_phone("\u{FF11}\u{FF12}\u{FF13}"));

    let phone = FormField::new("phone", "Phone", FieldKind::Phone, true);
    assert_eq!(
        check_field(&phone.with_value("+1\u{665}\u{665}\u{665}\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}")),
        Err(ValidationError::BadPhone)
    );
}

#[test]
fn test_check_field_rules() {
    let required = FormField::new("name", "Name", FieldKind::Text, true);
    assert_eq!(check_field(&required.clone().with_value("   ")), Err(ValidationError::EmptyField));
    assert_eq!(check_field(&required.with_value("Jane")), Ok(()));

    let optional_email = FormField::new("email", "Email", FieldKind::Email, false);
    assert_eq!(check_field(&optional_email.clone()), Ok(()));
    assert_eq!(check_field(&optional_email.with_value("nope")), Err(ValidationError::BadEmail));

    let phone = FormField::new("phone", "Phone", FieldKind::Phone, true);
    assert_eq!(check_field(&phone.clone().with_value("+44 20 7946 0958")), Ok(()));
    assert_eq!(check_field(&phone.with_value("abc")), Err(ValidationError::BadPhone));
}

#[test]
fn test_validate_form_marks_each_failing_field() {
    let mut fields = report_form();
    fill(&mut fields, ["", "12ab", "bad", "Gate 3", "Barrier stuck"]);

    assert!(!validate_form(&mut fields));
    assert_eq!(fields[0].error.as_deref(), Some("This field is required"));
    assert_eq!(fields[1].error.as_deref(), Some("Please enter a valid phone number"));
    assert_eq!(fields[2].error.as_deref(), Some("Please enter a valid email address"));
    assert!(!fields[3].has_error());
    assert!(!fields[4].has_error());
}

#[test]
fn test_validate_form_clears_stale_markers() {
    let mut fields = report_form();
    fill(&mut fields, ["", "", "", "", ""]);
    assert!(!validate_form(&mut fields));
    assert!(fields.iter().all(FormField::has_error));

    fill(
        &mut fields,
        ["Jane", "+1 555 123 4567", "jane@example.com", "Gate 3", "Barrier stuck"],
    );
    assert!(validate_form(&mut fields));
    assert!(fields.iter().all(|f| !f.has_error()));
}

#[test]
fn test_mark_error_replaces_previous_marker() {
    let mut field = FormField::new("email", "Email", FieldKind::Email, true);
    field.mark_error("first");
    field.mark_error("second");
    assert_eq!(field.error.as_deref(), Some("second"));
    field.clear_error();
    assert!(!field.has_error());
}

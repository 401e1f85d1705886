use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  amina@stockdesk.ug  ", " secret "),
        Ok(("amina@stockdesk.ug".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.ug", "   "), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_leaves_email_format_to_backend() {
    assert_eq!(
        validate_login_input(" amina ", "secret"),
        Ok(("amina".to_owned(), "secret".to_owned()))
    );
}

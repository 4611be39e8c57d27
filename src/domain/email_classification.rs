use serde::Serialize;

/// Validity category of whatever is currently typed into the email input.
///
/// This only drives the form's affordances (input tone, whether the submit
/// control is enabled); it is deliberately much looser than RFC 5322.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailClassification {
    /// Nothing typed yet
    Empty,
    Invalid,
    Valid,
}

/// Classify a raw input string.
///
/// `Valid` means the whole string has the shape `x@y.z`, where each of `x`,
/// `y` and `z` is at least one character that is neither whitespace nor `@`.
/// `y` and `z` may themselves contain dots, e.g. `a@mail.example.com`.
pub fn classify(email: &str) -> EmailClassification {
    if email.is_empty() {
        return EmailClassification::Empty;
    }
    match has_email_shape(email) {
        true => EmailClassification::Valid,
        false => EmailClassification::Invalid,
    }
}

/// A character allowed on either side of the `@`. `\u{feff}` (BOM) is not
/// Unicode whitespace, but browsers treat it as such in `\s`.
fn is_address_char(c: char) -> bool { !(c.is_whitespace() || c == '\u{feff}' || c == '@') }

fn has_email_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty() && local.chars().all(is_address_char);
    // a second `@` ends up in `domain` and is rejected here
    let domain_ok = !domain.is_empty() && domain.chars().all(is_address_char);

    // at least one dot in the domain with something on either side of it
    let dotted = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

    local_ok && domain_ok && dotted
}

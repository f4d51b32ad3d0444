//! Email syntax validation.

use std::sync::LazyLock;

use regex::Regex;

/// Practical subset of RFC 5322 addr-spec: dot-atom local part, dotted
/// alphanumeric-with-hyphen labels in the domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex is valid")
});

/// Returns `true` if `email` is acceptable as a record identity.
///
/// Length is bounded to 3..=254 characters before the pattern is applied.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let len = email.len();
    (3..=254).contains(&len) && EMAIL_RE.is_match(email)
}

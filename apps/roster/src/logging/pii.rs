use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for PII redaction.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Email pattern: matches standard email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Phone pattern: a run of at least seven digits, optionally separated
    /// by spaces, dots, dashes or parentheses, with an optional leading `+`
    pub fn phone() -> &'static Regex {
        static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\+?\(?\d(?:[\s().-]*\d){6,}").unwrap()
        });
        &PHONE_REGEX
    }
}

fn mask_email(full_match: &str) -> String {
    match full_match.find('@') {
        Some(at_pos) => {
            let first_char = &full_match[..1];
            let domain = &full_match[at_pos..];
            format!("{first_char}***{domain}")
        }
        None => full_match.to_string(),
    }
}

/// Replace every digit but the last two with `*`, keeping separators.
fn mask_phone(full_match: &str) -> String {
    let digits = full_match.chars().filter(char::is_ascii_digit).count();
    let mut seen = 0;
    full_match
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= digits.saturating_sub(2) {
                    return '*';
                }
            }
            c
        })
        .collect()
}

/// Redacts contact details from a string.
///
/// Emails keep the first character of the local part and the full domain;
/// phone-like digit runs keep only their last two digits. Emails are
/// handled first so their digits are not treated as phone numbers.
pub fn redact(input: &str) -> String {
    let email_redacted = PiiRegexRegistry::email()
        .replace_all(input, |caps: &regex::Captures| mask_email(&caps[0]));

    PiiRegexRegistry::phone()
        .replace_all(&email_redacted, |caps: &regex::Captures| mask_phone(&caps[0]))
        .to_string()
}

/// Display wrapper that redacts its contents when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

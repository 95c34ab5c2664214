//! Positional placeholder injection
//!
//! Templates use `{0}`, `{1}`, ... markers. Injection is plain string
//! substitution applied left to right, one argument index at a time. There is
//! no escape for a literal `{0}` in a template.

use crate::{LocaleError, Result};
use tracing::warn;

/// Replace each `{i}` placeholder with the i-th argument
///
/// Arguments beyond the number of placeholders are ignored. Placeholders with
/// no matching argument are left verbatim; a warning is logged for each so
/// the mismatch is visible without failing the caller. Only the template's
/// own placeholders count: an argument value that happens to contain `{N}`
/// is plain text to the mismatch check.
///
/// # Examples
///
/// ```
/// use chatkit_locale::inject;
///
/// assert_eq!(inject("Must be '{0}' or '{1}'", &["yes", "no"]), "Must be 'yes' or 'no'");
/// assert_eq!(inject("Recommendation: {0}", &[]), "Recommendation: {0}");
/// ```
pub fn inject(template: &str, args: &[&str]) -> String {
    for placeholder in unfilled_placeholders(template, args.len()) {
        warn!(%placeholder, template, "placeholder left unfilled during locale injection");
    }

    substitute(template, args)
}

/// Strict variant of [`inject`]
///
/// Behaves identically except that a placeholder with no matching argument is
/// an error rather than a warning.
pub fn try_inject(template: &str, args: &[&str]) -> Result<String> {
    if let Some(placeholder) = unfilled_placeholders(template, args.len()).into_iter().next() {
        return Err(LocaleError::UnfilledPlaceholder {
            placeholder,
            template: template.to_string(),
        });
    }

    Ok(substitute(template, args))
}

fn substitute(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |acc, (index, arg)| {
            acc.replace(&format!("{{{index}}}"), arg)
        })
}

/// Template placeholders whose index is not covered by `arg_count` arguments
///
/// Scans the template itself, so argument values containing `{N}` text never
/// count as a mismatch.
fn unfilled_placeholders(template: &str, arg_count: usize) -> Vec<String> {
    let mut unfilled = Vec::new();
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > i + 1 && j < bytes.len() && bytes[j] == b'}' {
                // An unparsable index is beyond any argument list
                let covered = template[i + 1..j]
                    .parse::<usize>()
                    .is_ok_and(|index| index < arg_count);
                if !covered {
                    unfilled.push(template[i..=j].to_string());
                }
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }

    unfilled
}

//! String sanitization for API payloads
//!
//! The remote service occasionally returns string fields wrapped in stray
//! backticks or quotes (image URLs in particular). Cleaning happens once at
//! the provider boundary; downstream code never re-checks.

/// Remove backticks, double quotes, single quotes and surrounding
/// whitespace from a field value. Inner content is left untouched.
pub fn strip_ticks_and_quotes(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '`' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Clean an optional field in place.
pub(crate) fn clean_field(field: &mut Option<String>) {
    if let Some(value) = field {
        *value = strip_ticks_and_quotes(value);
    }
}

/// Records whose string fields may arrive wrapped in stray characters.
pub trait Sanitize {
    /// Clean the affected fields in place.
    fn sanitize(&mut self);

    /// Consume and return the cleaned record.
    fn sanitized(mut self) -> Self
    where
        Self: Sized,
    {
        self.sanitize();
        self
    }
}

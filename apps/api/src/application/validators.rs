/// Minimal email check: the value must contain an `@`.
///
/// Deliberately permissive. No trimming, case folding, or RFC parsing happens
/// here or anywhere downstream; the stored email is exactly what was submitted.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

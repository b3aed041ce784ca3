use buzzlist_core::{BuzzError, Capability};

/// Collapse a set of provider errors into a uniform `BuzzError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If exactly one provider failed → that provider's error, unchanged.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    mut errors: Vec<BuzzError>,
    not_found_what: Option<String>,
) -> BuzzError {
    if !attempted_any {
        return BuzzError::unsupported(capability.to_string());
    }
    if errors.len() == 1
        && let Some(only) = errors.pop()
    {
        return only;
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, BuzzError::NotFound { .. }))
    {
        return BuzzError::not_found(what);
    }
    BuzzError::AllProvidersFailed(errors)
}

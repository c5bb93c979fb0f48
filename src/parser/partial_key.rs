/// Resolves a partial (unfinished) object key against a schema's declared
/// property names by unique-prefix matching.
///
/// Returns the single property name that `partial` is a prefix of, if
/// exactly one such name exists. Zero matches or more than one candidate both
/// yield `None` — an ambiguous or unrecognised partial key is left as typed,
/// to be judged against `patternProperties`/`additionalProperties` later by
/// the completer.
pub(crate) fn unique_prefix_match<'a>(
    partial: &str,
    names: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    if partial.is_empty() {
        return None;
    }
    let mut candidates = names.filter(|name| name.starts_with(partial));
    let first = candidates.next()?;
    match candidates.next() {
        None => Some(first),
        Some(_) => None,
    }
}

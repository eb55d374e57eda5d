use crate::domain::MergeVariables;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replaces every `{{key}}` in `body` whose key is present in `vars`.
///
/// Placeholders without a matching key are left verbatim. Inserted values
/// are never scanned again, so a value that itself looks like a placeholder
/// stays literal and the result does not depend on key order. Values are not
/// HTML-escaped.
pub fn merge(body: &str, vars: &MergeVariables) -> String {
    if vars.is_empty() {
        return body.to_owned();
    }

    let mut merged = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find(OPEN) {
        merged.push_str(&rest[..start]);
        rest = &rest[start..];

        let after_open = &rest[OPEN.len()..];
        let value = after_open
            .find(CLOSE)
            .and_then(|end| vars.get(&after_open[..end]).map(|v| (end, v)));

        match value {
            Some((end, value)) => {
                merged.push_str(value);
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                // Step over one brace only so "{{{name}}" still matches.
                merged.push('{');
                rest = &rest[1..];
            }
        }
    }

    merged.push_str(rest);
    merged
}

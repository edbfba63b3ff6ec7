use serde_json::Value;

/// Phrases that get a submission rejected before it reaches the LLM.
pub const BLOCKED_PHRASES: &[&str] = &[
    "ignore all",
    "spam",
    "do not answer",
    "bypass",
    "malicious",
    "exploit",
    "hack",
    "illegal",
    "inappropriate",
    "sensitive",
];

/// Returns the first blocked phrase found in any string nested inside `value`.
/// Matching is case-insensitive and substring-based; object keys are not checked.
pub fn find_blocked_phrase(value: &Value) -> Option<&'static str> {
    match value {
        Value::String(s) => {
            let lower = s.to_lowercase();
            BLOCKED_PHRASES.iter().copied().find(|p| lower.contains(p))
        }
        Value::Array(items) => items.iter().find_map(find_blocked_phrase),
        Value::Object(map) => map.values().find_map(find_blocked_phrase),
        _ => None,
    }
}

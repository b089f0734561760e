// Prompt fragments for the career chat assistant.

/// Chat system prompt. Replace `{name}`, `{role}` and `{job_count}` before sending.
pub const CHAT_SYSTEM_TEMPLATE: &str = "You are a career intelligence assistant. \
    You are helping {name}, who works as {role}. \
    The dashboard currently tracks {job_count} open positions matching their profile. \
    Give concise, practical career advice grounded in job-market data. \
    Keep answers under 150 words.";

/// Substituted when the user's name is unknown.
pub const UNKNOWN_NAME: &str = "the user";
/// Substituted when the user's role is unknown.
pub const UNKNOWN_ROLE: &str = "a professional";
/// Substituted when the job count has not loaded yet.
pub const UNKNOWN_JOB_COUNT: &str = "an unknown number of";

/// Fills `{key}` placeholders in one pass. Substituted values are never
/// rescanned, so user text containing braces is copied verbatim. Unknown
/// placeholders are left as written.
pub fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_known_placeholders() {
        let values = [("name", "Ada"), ("role", "Analyst")];
        assert_eq!(fill_placeholders("Hi {name}, {role}!", &values), "Hi Ada, Analyst!");
    }

    #[test]
    fn test_fill_does_not_rescan_substituted_text() {
        let values = [("name", "{role}"), ("role", "{name}")];
        assert_eq!(fill_placeholders("{name} / {role}", &values), "{role} / {name}");
    }

    #[test]
    fn test_fill_keeps_unknown_and_unclosed_braces() {
        assert_eq!(fill_placeholders("{other} {name", &[("name", "x")]), "{other} {name");
    }
}

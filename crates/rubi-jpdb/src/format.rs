use serde_json::Value;

/// Convert a raw JPDB parse response into a display annotation.
///
/// Pure and total: every failure degrades to a descriptive string, nothing
/// panics. Each token that resolves to a vocabulary entry becomes one block
/// of `spelling (furigana)`, an optional `Definitions:` line, and a `---`
/// separator.
pub fn format_response(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "No response from API".to_string();
    }

    let json: Value = match serde_json::from_str(raw) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("failed to parse jpdb response: {e}");
            return format!("Error parsing API response: {e}");
        }
    };

    let (Some(tokens), Some(vocabulary)) = (
        json.get("tokens").and_then(Value::as_array),
        json.get("vocabulary").and_then(Value::as_array),
    ) else {
        tracing::error!("missing required fields in jpdb response");
        return "Invalid response format from JPDB API".to_string();
    };

    let mut out = String::new();

    for token in tokens {
        let vocab_index = token.get(0).and_then(Value::as_i64).unwrap_or(-1);
        let furigana = render_furigana(token.get(1));

        // Out-of-range indices are skipped, not errors
        let Some(entry) = usize::try_from(vocab_index)
            .ok()
            .and_then(|i| vocabulary.get(i))
        else {
            continue;
        };

        let spelling = entry.get(1).and_then(Value::as_str).unwrap_or_default();

        out.push_str(spelling);
        if !furigana.is_empty() {
            out.push_str(" (");
            out.push_str(&furigana);
            out.push(')');
        }
        out.push('\n');

        if let Some(meanings) = entry.get(2).and_then(Value::as_array) {
            if !meanings.is_empty() {
                let definitions: Vec<&str> = meanings
                    .iter()
                    .take(2)
                    .filter_map(|meaning| match meaning.as_str() {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => {
                            tracing::debug!("skipping unparseable meaning entry: {meaning}");
                            None
                        }
                    })
                    .collect();

                out.push_str("Definitions: ");
                out.push_str(&definitions.join(", "));
                out.push('\n');
            }
        }

        out.push_str("---\n");
    }

    if out.is_empty() {
        "No vocabulary found".to_string()
    } else {
        out.trim_end().to_string()
    }
}

/// Flatten a token's furigana array. Pair elements contribute their second
/// entry, plain strings contribute themselves, no separator.
fn render_furigana(value: Option<&Value>) -> String {
    let Some(parts) = value.and_then(Value::as_array) else {
        return String::new();
    };

    let mut furigana = String::new();
    for part in parts {
        match part {
            Value::String(s) => furigana.push_str(s),
            Value::Array(pair) if pair.len() > 1 => {
                if let Some(s) = pair[1].as_str() {
                    furigana.push_str(s);
                }
            }
            _ => {}
        }
    }
    furigana
}

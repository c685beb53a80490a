//! Pulling the assessment object out of a model reply.
//!
//! Requests ask for `json_object` output, so most replies are a bare object.
//! Some still arrive fenced in markdown or followed by a sign-off line.

/// Return the first complete JSON object in `reply`.
///
/// A leading markdown fence is unwrapped first. When no balanced object is
/// found the trimmed text is returned and the decode step reports the error.
pub fn extract_json(reply: &str) -> &str {
    let text = reply.trim();
    let body = if text.starts_with('{') {
        text
    } else {
        unfence(text)
    };

    match body.find('{') {
        Some(start) => first_object(&body[start..]).unwrap_or(body),
        None => body,
    }
}

/// Contents of the first ``` fence, or `text` if there is no closed fence.
fn unfence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after = &text[open + 3..];
    // The info string ("json") sits on the fence line.
    let content = match after.find('\n') {
        Some(newline) => &after[newline + 1..],
        None => after,
    };
    match content.find("```") {
        Some(close) => content[..close].trim(),
        None => text,
    }
}

/// The prefix of `text` (which starts at '{') up to its matching '}'.
fn first_object(text: &str) -> Option<&str> {
    let mut depth = 0u32;
    let mut in_string = false;
    let mut escaped = false;

    for (i, byte) in text.bytes().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=i]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object() {
        assert_eq!(extract_json(r#"  {"isAtRisk": false}  "#), r#"{"isAtRisk": false}"#);
    }

    #[test]
    fn test_trailing_text_dropped() {
        let reply = r#"{"isAtRisk": false} Stay safe!"#;
        assert_eq!(extract_json(reply), r#"{"isAtRisk": false}"#);
    }

    #[test]
    fn test_json_fence() {
        let reply = "Here is the assessment:\n```json\n{\"isAtRisk\": true}\n```\n";
        assert_eq!(extract_json(reply), r#"{"isAtRisk": true}"#);
    }

    #[test]
    fn test_plain_fence() {
        let reply = "```\n{\"a\": {\"b\": 1}}\n```";
        assert_eq!(extract_json(reply), r#"{"a": {"b": 1}}"#);
    }

    #[test]
    fn test_single_line_fence() {
        let reply = "```json {\"isAtRisk\": false}```";
        assert_eq!(extract_json(reply), r#"{"isAtRisk": false}"#);
    }

    #[test]
    fn test_object_inside_prose() {
        let reply = r#"Assessment: {"riskType": "Fire"} done"#;
        assert_eq!(extract_json(reply), r#"{"riskType": "Fire"}"#);
    }

    #[test]
    fn test_braces_and_quotes_in_strings() {
        let reply = r#"{"alertMessage": "stay {calm} \"now\"", "x": 1} tail"#;
        assert_eq!(
            extract_json(reply),
            r#"{"alertMessage": "stay {calm} \"now\"", "x": 1}"#
        );
    }

    #[test]
    fn test_indonesian_text() {
        let reply = r#"{"alertTitle": "Kebakaran aktif ± 2 km, segera menjauh"} Terima kasih"#;
        assert_eq!(
            extract_json(reply),
            r#"{"alertTitle": "Kebakaran aktif ± 2 km, segera menjauh"}"#
        );
    }

    #[test]
    fn test_no_object() {
        assert_eq!(extract_json("  no json here "), "no json here");
    }

    #[test]
    fn test_unbalanced_returned_unchanged() {
        assert_eq!(extract_json(r#"{"a": 1"#), r#"{"a": 1"#);
    }
}

const MAX_VISIBLE_CHARS: usize = 80;
const SECRET_ASSIGNMENTS: [&str; 5] = ["api_key=", "apikey=", "password=", "secret=", "token="];

/// Short, single-line preview of pasted text that is safe to log.
pub fn sanitize_prompt(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_secrets(&words);
    let visible_chars = redacted.chars().count();

    if visible_chars > MAX_VISIBLE_CHARS {
        let head: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head.trim_end(), text.chars().count())
    } else {
        redacted
    }
}

fn redact_secrets(words: &[&str]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut after_bearer = false;

    for word in words {
        if after_bearer {
            out.push("[REDACTED]".to_string());
            after_bearer = false;
            continue;
        }

        let lower = word.to_ascii_lowercase();
        if lower == "bearer" {
            after_bearer = true;
            out.push((*word).to_string());
        } else if word.starts_with("sk-") && word.len() > 6 {
            out.push("sk-[REDACTED]".to_string());
        } else if let Some(key) = SECRET_ASSIGNMENTS.iter().find_map(|p| {
            lower.find(p).map(|idx| &word[..idx + p.len()])
        }) {
            out.push(format!("{}[REDACTED]", key));
        } else {
            out.push((*word).to_string());
        }
    }

    out.join(" ")
}

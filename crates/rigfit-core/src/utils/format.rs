/// Truncate a string to a maximum number of characters, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Show only the first few characters of a credential
pub fn mask_secret(secret: &str) -> String {
    const VISIBLE: usize = 6;
    if secret.chars().count() <= VISIBLE {
        "*".repeat(secret.chars().count())
    } else {
        let prefix: String = secret.chars().take(VISIBLE).collect();
        format!("{}…", prefix)
    }
}

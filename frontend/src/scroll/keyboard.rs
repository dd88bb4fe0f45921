use super::intent::{ArbiterOutcome, Intent};

/// Maps a `KeyboardEvent.key` value to an intent.
pub fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowDown" | "PageDown" | " " | "Spacebar" => Some(Intent::Next),
        "ArrowUp" | "PageUp" => Some(Intent::Prev),
        "Home" => Some(Intent::Start),
        "End" => Some(Intent::End),
        _ => None,
    }
}

/// Keys typed into text fields are never taken.
pub fn ingest(key: &str, target_is_text_field: bool, enabled: bool) -> ArbiterOutcome {
    if !enabled || target_is_text_field {
        return ArbiterOutcome::IGNORED;
    }
    intent_for_key(key)
        .map(ArbiterOutcome::fire)
        .unwrap_or(ArbiterOutcome::IGNORED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_map() {
        assert_eq!(intent_for_key("ArrowDown"), Some(Intent::Next));
        assert_eq!(intent_for_key("PageDown"), Some(Intent::Next));
        assert_eq!(intent_for_key(" "), Some(Intent::Next));
        assert_eq!(intent_for_key("ArrowUp"), Some(Intent::Prev));
        assert_eq!(intent_for_key("PageUp"), Some(Intent::Prev));
        assert_eq!(intent_for_key("Home"), Some(Intent::Start));
        assert_eq!(intent_for_key("End"), Some(Intent::End));
        assert_eq!(intent_for_key("a"), None);
        assert_eq!(intent_for_key("Enter"), None);
    }

    #[test]
    fn handled_keys_are_suppressed() {
        assert_eq!(ingest("End", false, true), ArbiterOutcome::fire(Intent::End));
        assert_eq!(ingest("Tab", false, true), ArbiterOutcome::IGNORED);
    }

    #[test]
    fn text_fields_keep_their_keystrokes() {
        assert_eq!(ingest(" ", true, true), ArbiterOutcome::IGNORED);
        assert_eq!(ingest("ArrowDown", true, true), ArbiterOutcome::IGNORED);
    }

    #[test]
    fn disabled_takes_nothing() {
        assert_eq!(ingest("ArrowDown", false, false), ArbiterOutcome::IGNORED);
    }
}

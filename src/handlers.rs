//! Tool handlers for the emoji catalog
//!
//! Each handler is a pure function over the loaded dataset and returns a
//! text response. Domain-level misses (no search results, unknown name,
//! unavailable size) are successful responses with explanatory text; the
//! only protocol errors a tool call can produce are invalid parameters and
//! unknown tool names, both raised before a handler runs.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use tracing::debug;

use crate::dataset::EmojiDataset;
use crate::params::{GetUrlParams, SearchEmojisParams};
use crate::search;
use crate::types::SizeLabel;

/// Default number of search results when `limit` is unset
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

fn text_response(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// List every emoji name in the catalog, ascending, with the total count
pub fn get_emojis(dataset: &EmojiDataset) -> Result<CallToolResult, McpError> {
    let names: Vec<&str> = dataset.names().collect();

    debug!(count = names.len(), "get_emojis");

    text_response(format!(
        "{} emojis available:\n{}",
        names.len(),
        names.join(", ")
    ))
}

/// Fuzzy-search emoji names
pub fn search_emojis(
    dataset: &EmojiDataset,
    params: SearchEmojisParams,
) -> Result<CallToolResult, McpError> {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let results = search::search(&params.query, dataset.names(), limit);

    debug!(
        query = %params.query,
        limit,
        results = results.len(),
        "search_emojis"
    );

    if results.is_empty() {
        return text_response(format!(
            "No emojis found matching \"{}\". Use get_emojis to list all available names.",
            params.query
        ));
    }

    text_response(format!(
        "Emojis matching \"{}\":\n{}",
        params.query,
        results.join("\n")
    ))
}

/// Resolve an emoji name and size to an image URL
pub fn get_url(dataset: &EmojiDataset, params: GetUrlParams) -> Result<CallToolResult, McpError> {
    let size = params.size.unwrap_or_default();

    debug!(emoji = %params.emoji, size = %size, "get_url");

    let entry = match dataset.get(&params.emoji) {
        Some(entry) => entry,
        None => {
            return text_response(format!(
                "Emoji \"{}\" not found. Use get_emojis to list all names or search_emojis to find a close match.",
                params.emoji
            ));
        }
    };

    match entry.url(size) {
        Some(url) => text_response(format!(
            "{} ({} pixels): {}",
            params.emoji,
            size.dimensions(),
            url
        )),
        None => {
            let available: Vec<String> = entry
                .available_sizes()
                .iter()
                .map(SizeLabel::to_string)
                .collect();
            text_response(format!(
                "Emoji \"{}\" is not available at {} pixels. Available sizes: {}",
                params.emoji,
                size.dimensions(),
                available.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use std::collections::BTreeMap;

    fn test_dataset() -> EmojiDataset {
        let json = r#"{
            "100": {"160": "http://x/100-160.png"},
            "8ball": {"160": "http://x/8ball-160.png", "320": "http://x/8ball-320.png"},
            "a": {"160": "http://x/a-160.png", "320": "http://x/a-320.png"}
        }"#;
        let entries: BTreeMap<String, crate::dataset::EmojiEntry> =
            serde_json::from_str(json).unwrap();
        EmojiDataset::from_entries(entries)
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn assert_success(result: &CallToolResult) {
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_get_emojis_lists_sorted_names_with_count() {
        let dataset = test_dataset();
        let result = get_emojis(&dataset).unwrap();
        assert_success(&result);

        let text = text_of(&result);
        assert!(text.starts_with("3 emojis available:"));
        assert!(text.contains("100, 8ball, a"));
    }

    #[test]
    fn test_search_prefix_ranks_first() {
        let dataset = test_dataset();
        let result = search_emojis(
            &dataset,
            SearchEmojisParams {
                query: "10".to_string(),
                limit: None,
            },
        )
        .unwrap();
        assert_success(&result);

        let text = text_of(&result);
        assert!(text.contains("100"));
        assert!(!text.contains("8ball"));
    }

    #[test]
    fn test_search_no_matches_is_not_an_error() {
        let dataset = test_dataset();
        let result = search_emojis(
            &dataset,
            SearchEmojisParams {
                query: "zzzzzz".to_string(),
                limit: None,
            },
        )
        .unwrap();
        assert_success(&result);
        assert!(text_of(&result).contains("No emojis found"));
    }

    #[test]
    fn test_search_empty_query_returns_names() {
        let dataset = test_dataset();
        let result = search_emojis(
            &dataset,
            SearchEmojisParams {
                query: String::new(),
                limit: None,
            },
        )
        .unwrap();
        assert_success(&result);

        let text = text_of(&result);
        assert!(text.contains("100"));
        assert!(text.contains("8ball"));
        assert!(text.contains("a"));
    }

    #[test]
    fn test_search_respects_limit() {
        let dataset = test_dataset();
        let result = search_emojis(
            &dataset,
            SearchEmojisParams {
                query: String::new(),
                limit: Some(1),
            },
        )
        .unwrap();

        let text = text_of(&result);
        // Header line plus exactly one result line
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_get_url_returns_dimension_label_and_url() {
        let dataset = test_dataset();
        let result = get_url(
            &dataset,
            GetUrlParams {
                emoji: "8ball".to_string(),
                size: Some(SizeLabel::Px320),
            },
        )
        .unwrap();
        assert_success(&result);

        let text = text_of(&result);
        assert!(text.contains("320x320"));
        assert!(text.contains("http://x/8ball-320.png"));
    }

    #[test]
    fn test_get_url_defaults_to_160() {
        let dataset = test_dataset();
        let result = get_url(
            &dataset,
            GetUrlParams {
                emoji: "100".to_string(),
                size: None,
            },
        )
        .unwrap();
        assert!(text_of(&result).contains("http://x/100-160.png"));
    }

    #[test]
    fn test_get_url_unavailable_size_lists_available() {
        let dataset = test_dataset();
        let result = get_url(
            &dataset,
            GetUrlParams {
                emoji: "100".to_string(),
                size: Some(SizeLabel::Px320),
            },
        )
        .unwrap();
        assert_success(&result);

        let text = text_of(&result);
        assert!(text.contains("Available sizes: 160"));
        assert!(!text.contains("320.png"));
    }

    #[test]
    fn test_get_url_unknown_name_is_not_an_error() {
        let dataset = test_dataset();
        let result = get_url(
            &dataset,
            GetUrlParams {
                emoji: "zzz".to_string(),
                size: None,
            },
        )
        .unwrap();
        assert_success(&result);

        let text = text_of(&result);
        assert!(text.contains("not found"));
        assert!(text.contains("get_emojis"));
        assert!(text.contains("search_emojis"));
    }

    #[test]
    fn test_get_url_is_case_sensitive_no_fuzzy_fallback() {
        let dataset = test_dataset();
        let result = get_url(
            &dataset,
            GetUrlParams {
                emoji: "8BALL".to_string(),
                size: None,
            },
        )
        .unwrap();
        assert!(text_of(&result).contains("not found"));
    }
}

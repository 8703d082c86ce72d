use super::{SearchEntry, SearchIndex};

fn entry(id: &str, label: &str, description: &str) -> SearchEntry {
    SearchEntry {
        id: id.to_string(),
        label: label.to_string(),
        group_tag: "Reference".to_string(),
        description: description.to_string(),
    }
}

fn fixture() -> SearchIndex {
    SearchIndex::from_entries(vec![
        entry("welcome", "Welcome", "What the platform does."),
        entry(
            "completions",
            "Create Completion",
            "Send messages to a model; supports chat streaming over \
             server-sent events.",
        ),
        entry("chat-overview", "Chat API", "Conversational models."),
        entry("voice-call", "Initiate Call", "Trigger a voice agent."),
    ])
}

#[test]
fn test_label_matches_rank_before_description_matches() {
    let index = fixture();
    let results = index.filter("chat");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "chat-overview", "label match first");
    assert_eq!(results[1].id, "completions", "description match second");
}

#[test]
fn test_empty_query_returns_everything_in_order() {
    let index = fixture();

    let all: Vec<&str> = index.filter("").iter().map(|e| e.id.as_str()).collect();
    assert_eq!(all, ["welcome", "completions", "chat-overview", "voice-call"]);

    let blank: Vec<&str> = index.filter("   ").iter().map(|e| e.id.as_str()).collect();
    assert_eq!(blank, all);
}

#[test]
fn test_matching_is_case_insensitive() {
    let index = fixture();

    let results = index.filter("CHAT api");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "chat-overview");
}

#[test]
fn test_buckets_preserve_registry_order() {
    let index = SearchIndex::from_entries(vec![
        entry("b", "Voice B", "nothing"),
        entry("a", "Voice A", "nothing"),
        entry("d", "Other D", "voice described"),
        entry("c", "Other C", "voice described"),
    ]);

    let ids: Vec<&str> = index.filter("voice").iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "d", "c"], "stable within each bucket");
}

#[test]
fn test_no_match_returns_empty() {
    let index = fixture();
    assert!(index.filter("zzzzz").is_empty());
}

#[test]
fn test_built_index_flattens_groups_then_operations() {
    let index = SearchIndex::build(&crate::content::nav_groups(), &crate::content::operations());

    let ids: Vec<&str> = index.entries().iter().map(|e| e.id.as_str()).collect();
    let welcome = ids.iter().position(|id| *id == "welcome").unwrap();
    let chat = ids.iter().position(|id| *id == "chat-overview").unwrap();
    let completions = ids.iter().position(|id| *id == "chat-completions").unwrap();

    assert!(welcome < chat, "menu entries precede later groups");
    assert!(chat < completions, "operations follow their group's entries");
}

use super::{wrap, Layout};
use crate::content;

#[test]
fn test_every_section_gets_one_anchor() {
    let groups = content::nav_groups();
    let ops = content::operations();
    let layout = Layout::build(&groups, &ops, 80);

    for group in &groups {
        for e in &group.entries {
            assert!(layout.has_anchor(&e.id), "{} missing", e.id);
        }
    }
    for op in &ops {
        assert!(layout.has_anchor(&op.id), "{} missing", op.id);
    }
}

#[test]
fn test_spans_partition_the_document() {
    let groups = content::nav_groups();
    let ops = content::operations();
    let layout = Layout::build(&groups, &ops, 80);

    let spans = layout.spans();
    assert_eq!(spans[0].start, 0, "document starts at the first anchor");
    for pair in spans.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "spans are contiguous");
        assert!(pair[0].start < pair[1].start, "anchors are ordered");
    }
    assert_eq!(spans.last().unwrap().end, layout.height());
}

#[test]
fn test_operations_render_after_their_groups_entries() {
    let groups = content::nav_groups();
    let ops = content::operations();
    let layout = Layout::build(&groups, &ops, 80);

    let overview = layout.anchor_row("chat-overview").unwrap();
    let completions = layout.anchor_row("chat-completions").unwrap();
    let models = layout.anchor_row("chat-models").unwrap();
    assert!(overview < completions);
    assert!(completions < models);
}

#[test]
fn test_narrow_widths_are_clamped() {
    let groups = content::nav_groups();
    let ops = content::operations();
    let layout = Layout::build(&groups, &ops, 1);

    assert_eq!(layout.width(), 24);
    assert!(layout.height() > 0);
}

#[test]
fn test_wrap_respects_width() {
    let text = "one two three four five six seven eight nine ten";
    for line in wrap(text, 12) {
        assert!(line.len() <= 12, "{line:?} exceeds width");
    }
}

#[test]
fn test_wrap_collapses_whitespace_and_keeps_words() {
    let lines = wrap("  a   b\n\tc  ", 80);
    assert_eq!(lines, ["a b c"]);

    let oversized = wrap("antidisestablishmentarianism", 5);
    assert_eq!(oversized.len(), 1, "a long word stays on its own line");
}

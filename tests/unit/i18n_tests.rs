/// Unit tests for language selection
use habitica_mcp::Language;

#[test]
fn english_is_the_default() {
    assert_eq!(Language::default(), Language::English);
}

#[test]
fn zh_prefix_selects_chinese() {
    for tag in ["zh", "zh-CN", "zh_TW", "ZH-cn", "zh_CN.UTF-8"] {
        assert_eq!(Language::from_tag(tag), Language::Chinese, "tag: {tag}");
    }
}

#[test]
fn other_tags_select_english() {
    for tag in ["", "en", "en_US.UTF-8", "fr", "C", "ja_JP"] {
        assert_eq!(Language::from_tag(tag), Language::English, "tag: {tag}");
    }
}

#[test]
fn select_picks_the_matching_variant() {
    assert_eq!(Language::English.select("hello", "你好"), "hello");
    assert_eq!(Language::Chinese.select("hello", "你好"), "你好");
}

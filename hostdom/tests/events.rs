use hostdom::element::{contains, find_element};
use hostdom::{Element, Event, FocusState};

fn page() -> Element {
    Element::div()
        .id("root")
        .child(Element::button().id("first"))
        .child(
            Element::div()
                .id("group")
                .child(Element::button().id("second"))
                .child(Element::button().id("disabled").disabled(true)),
        )
        .child(Element::span("not focusable").id("label"))
        .child(Element::button().id("third"))
}

// ============================================================================
// Element Tree
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = page();
    assert_eq!(find_element(&root, "second").map(|e| e.tag.as_str()), Some("button"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_contains() {
    let root = page();
    let group = find_element(&root, "group").unwrap();
    assert!(contains(group, "second"));
    assert!(contains(group, "group"));
    assert!(!contains(group, "first"));
}

#[test]
fn test_text_content_concatenates_descendants() {
    let el = Element::div()
        .child(Element::span("Hello, "))
        .child(Element::div().child(Element::span("world")));
    assert_eq!(el.text_content(), "Hello, world");
}

#[test]
fn test_aria_and_data_attributes() {
    let el = Element::div()
        .role("combobox")
        .aria("expanded", "false")
        .data("dropdown", "");
    assert_eq!(el.get_attr("role"), Some("combobox"));
    assert_eq!(el.get_aria("expanded"), Some("false"));
    assert_eq!(el.get_data("dropdown"), Some(""));
}

#[test]
fn test_attr_opt() {
    let el = Element::div()
        .attr_opt("title", Some("x"))
        .attr_opt("alt", None::<String>);
    assert_eq!(el.get_attr("title"), Some("x"));
    assert_eq!(el.get_attr("alt"), None);
}

// ============================================================================
// Focus
// ============================================================================

fn tab_targets(events: &[Event]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Focus { target } => Some(target.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_tab_skips_disabled_and_wraps() {
    let root = page();
    let mut focus = FocusState::new();

    let mut order = Vec::new();
    for _ in 0..4 {
        let events = focus.tab(&root, false);
        order.extend(tab_targets(&events).into_iter().map(str::to_string));
    }
    assert_eq!(order, vec!["first", "second", "third", "first"]);
}

#[test]
fn test_shift_tab_goes_backwards() {
    let root = page();
    let mut focus = FocusState::new();

    focus.tab(&root, true);
    assert_eq!(focus.focused(), Some("third"));
    focus.focus("first");
    focus.tab(&root, true);
    assert_eq!(focus.focused(), Some("third"));
}

#[test]
fn test_tab_from_programmatic_focus_continues_in_document_order() {
    let root = Element::div()
        .id("root")
        .child(Element::button().id("before"))
        .child(Element::list().id("list").attr("tabindex", "-1").focusable(true))
        .child(Element::button().id("after"));
    let mut focus = FocusState::new();
    focus.focus("list");

    let events = focus.tab(&root, false);
    assert_eq!(
        events[0],
        Event::Blur {
            target: "list".to_string(),
            related: Some("after".to_string()),
        }
    );
    assert_eq!(focus.focused(), Some("after"));

    // Not a tab stop itself
    focus.tab(&root, false);
    assert_eq!(focus.focused(), Some("before"));
}

#[test]
fn test_transfer_emits_blur_with_related_then_focus() {
    let mut focus = FocusState::new();
    focus.focus("first");

    let events = focus.transfer("second");
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "first".to_string(),
                related: Some("second".to_string()),
            },
            Event::Focus {
                target: "second".to_string(),
            },
        ]
    );
    assert_eq!(focus.focused(), Some("second"));
}

#[test]
fn test_transfer_to_same_element_is_empty() {
    let mut focus = FocusState::new();
    focus.focus("first");
    assert!(focus.transfer("first").is_empty());
}

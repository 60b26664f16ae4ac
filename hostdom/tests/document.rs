use hostdom::{Document, DocumentError, Element, FormData, MountTarget};

fn proposal_form() -> Element {
    Element::new("form")
        .id("proposal")
        .child(
            Element::new("input")
                .attr("name", "title")
                .attr("value", "Rust & you"),
        )
        .child(Element::hidden_input("type", "Workshop"))
        .child(
            Element::new("textarea")
                .attr("name", "description")
                .text("Two hours"),
        )
        .child(
            Element::new("input")
                .attr("name", "ignored")
                .attr("value", "x")
                .disabled(true),
        )
        .child(Element::new("input").attr("value", "unnamed"))
}

// ============================================================================
// Forms
// ============================================================================

#[test]
fn test_form_data_collects_named_enabled_fields_in_order() {
    let data = FormData::collect(&proposal_form());
    assert_eq!(data.get("title"), Some("Rust & you"));
    assert_eq!(data.get("type"), Some("Workshop"));
    assert_eq!(data.get("description"), Some("Two hours"));
    assert_eq!(data.get("ignored"), None);
}

#[test]
fn test_form_data_urlencoded() {
    let data = FormData::collect(&proposal_form());
    assert_eq!(
        data.to_urlencoded(),
        "title=Rust%20%26%20you&type=Workshop&description=Two%20hours"
    );
}

#[test]
fn test_form_data_repeated_names_keep_order() {
    let form = Element::new("form")
        .child(Element::hidden_input("tag", "a"))
        .child(Element::hidden_input("tag", "b"));
    let data = FormData::collect(&form);
    assert_eq!(data.get("tag"), Some("a"));
    assert_eq!(data.to_urlencoded(), "tag=a&tag=b");
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn test_document_form_data() {
    let doc = Document::new(Element::new("body").child(proposal_form()));
    let data = doc.form_data("proposal").unwrap();
    assert_eq!(data, FormData::collect(&proposal_form()));

    assert_eq!(
        doc.form_data("missing"),
        Err(DocumentError::UnknownElement("missing".to_string()))
    );
}

#[test]
fn test_document_unknown_mount_point() {
    let mut doc = Document::default();
    assert_eq!(
        doc.mount_point_mut("dialogs").err(),
        Some(DocumentError::UnknownMountPoint("dialogs".to_string()))
    );
}

#[test]
fn test_document_find_searches_mount_points() {
    let mut doc = Document::default().with_mount_point("dialogs");
    doc.mount_point_mut("dialogs")
        .unwrap()
        .mount(Element::div().id("overlay").child(Element::item().id("opt")));

    assert!(doc.find("opt").is_some());
    assert!(doc.find("nope").is_none());

    let removed = doc.mount_point_mut("dialogs").unwrap().unmount("overlay");
    assert!(removed.is_some());
    assert!(doc.find("opt").is_none());
    assert!(doc.mount_point("dialogs").unwrap().is_empty());
}

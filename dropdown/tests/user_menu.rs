use dropdown::prelude::*;
use dropdown::widgets::user_menu::SIGN_OUT_HREF;
use hostdom::element::find_element;
use hostdom::{Event, FocusState, Key};

fn menu() -> UserMenu {
    UserMenu::new(UserSummary::new("Ada Lovelace", "ada@example.com"))
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_closed() {
    let menu = menu();
    let root = menu.render();
    let trigger = find_element(&root, &menu.trigger_id()).unwrap();

    assert_eq!(trigger.get_aria("haspopup"), Some("menu"));
    assert_eq!(trigger.get_aria("controls"), Some(menu.menu_id().as_str()));
    assert_eq!(trigger.get_aria("expanded"), None);
    assert_eq!(trigger.get_attr("title"), Some("Ada Lovelace (ada@example.com)"));

    let list = find_element(&root, &menu.menu_id()).unwrap();
    assert_eq!(list.get_aria("labelledby"), Some(menu.trigger_id().as_str()));

    let sign_out = find_element(&root, &menu.sign_out_id()).unwrap();
    assert_eq!(sign_out.get_attr("role"), Some("menuitem"));
    assert_eq!(sign_out.get_attr("href"), Some(SIGN_OUT_HREF));
}

#[test]
fn test_render_initials() {
    let menu = menu();
    let root = menu.render();
    let trigger = find_element(&root, &menu.trigger_id()).unwrap();
    let persona = &trigger.content.children()[1];
    assert_eq!(persona.get_data("initials"), Some("AL"));
}

// ============================================================================
// Interaction
// ============================================================================

#[test]
fn test_open_focuses_sign_out() {
    let menu = menu();
    let mut focus = FocusState::new();
    let mut cx = EventContext::new(&mut focus);

    menu.dispatch(&Event::click(menu.trigger_id()), &mut cx);
    assert!(menu.is_open());
    assert_eq!(cx.focused(), Some(menu.sign_out_id().as_str()));

    let root = menu.render();
    let trigger = find_element(&root, &menu.trigger_id()).unwrap();
    assert_eq!(trigger.get_aria("expanded"), Some("true"));
}

#[test]
fn test_escape_and_tab_close_and_refocus_trigger() {
    let menu = menu();
    let mut focus = FocusState::new();

    for key in [Key::Escape, Key::Tab] {
        menu.open();
        let mut cx = EventContext::new(&mut focus);
        menu.dispatch(&Event::key(menu.sign_out_id(), key), &mut cx);
        assert!(!menu.is_open());
        assert_eq!(cx.focused(), Some(menu.trigger_id().as_str()));
    }
}

#[test]
fn test_blur_to_trigger_keeps_open() {
    let menu = menu();
    let mut focus = FocusState::new();
    let mut cx = EventContext::new(&mut focus);

    menu.open();
    let blur = Event::Blur {
        target: menu.sign_out_id(),
        related: Some(menu.trigger_id()),
    };
    menu.dispatch(&blur, &mut cx);
    assert!(menu.is_open());

    let inside = Event::Blur {
        target: menu.sign_out_id(),
        related: Some(menu.header_id()),
    };
    menu.dispatch(&inside, &mut cx);
    assert!(menu.is_open());
}

#[test]
fn test_blur_outside_closes() {
    let menu = menu();
    let mut focus = FocusState::new();
    let mut cx = EventContext::new(&mut focus);

    menu.open();
    let blur = Event::Blur {
        target: menu.menu_id(),
        related: Some("main".to_string()),
    };
    menu.dispatch(&blur, &mut cx);
    assert!(!menu.is_open());
    assert_eq!(cx.drain_events()[0].kind, WidgetEventKind::Close);
}

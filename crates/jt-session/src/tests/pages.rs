use std::sync::Arc;

use jt_core::ambiguity::AmbiguityMap;
use jt_core::pages::PageGraph;
use jt_core::settings::LayoutMode;

use super::*;

fn open_navigation(session: &mut InputSession) {
    session.handle_press(button_for('o'));
    let resp = session.handle_press(btn::SEL);
    assert_eq!(resp.snapshot.page, "Navigation");
}

#[test]
fn test_numbers_pages() {
    let mut session = make_test_session();
    open_navigation(&mut session);

    let resp = session.handle_press(0); // 123MOD
    assert_eq!(resp.snapshot.page, "Numbers1");
    assert_eq!(resp.snapshot.button_labels[6], "5-9");

    session.handle_press(3); // 1
    session.handle_press(5); // 2
    session.handle_press(6); // 5-9
    let resp = session.handle_press(4); // 9
    assert_eq!(resp.snapshot.output_text, "129");
    assert_eq!(resp.snapshot.page, "Numbers2");

    let resp = session.handle_press(7);
    assert_eq!(resp.snapshot.page, "Main");
}

#[test]
fn test_navigation_requests() {
    let mut session = make_test_session();
    open_navigation(&mut session);
    assert_eq!(session.handle_press(3).requests, [HostRequest::Home]);
    assert_eq!(session.handle_press(5).requests, [HostRequest::OpenMenu]);
    assert_eq!(session.state().current_page, "Navigation");
}

#[test]
fn test_caps_lock_page() {
    let mut session = make_test_session();
    session.handle_press(button_for('c'));
    session.handle_press(btn::SEL);
    let resp = session.handle_press(btn::SEL);
    assert_eq!(resp.snapshot.page, "Functions2");

    let resp = session.handle_press(4); // CAPLK
    assert!(resp.snapshot.caps_on);
    assert_eq!(resp.snapshot.page, "Main");
    assert_eq!(resp.snapshot.button_labels[1], "UNDO");
}

#[test]
fn test_optimized_layout_labels() {
    let pages = Arc::new(PageGraph::standard(LayoutMode::Optimized));
    let session = InputSession::new(make_test_trie(&[]), pages, test_config());
    assert_eq!(
        session.snapshot().button_labels,
        ["ME'GZ", "Undo", "TRP-", "ISKW", "LUFCY", "BANQ", "Sel", "OJHDVX"]
    );
}

#[test]
fn test_custom_page_graph() {
    let toml = r#"
start = "Home"

[[pages]]
name = "Home"
buttons = [
  { do = ["term", "ambig:0"] },
  { do = ["term", "ambig:1"] },
  { do = ["term", "ambig:2"] },
  { do = ["term", "ambig:3"] },
  { do = ["term", "ambig:4"] },
  { do = ["term", "ambig:5"] },
  { label = "Next", do = ["select"] },
  { label = "Say", do = ["speak"] },
]
"#;
    let pages = PageGraph::from_toml(toml, AmbiguityMap::standard(), LayoutMode::Alphabetical)
        .unwrap();
    let mut session = InputSession::new(make_test_trie(&["cat;5"]), Arc::new(pages), test_config());
    assert_eq!(session.state().current_page, "Home");

    session.handle_press(3);
    session.handle_press(4);
    session.handle_press(1);
    session.handle_press(6);
    let resp = session.handle_press(0);
    assert_eq!(resp.snapshot.output_text, "Cat ");

    let resp = session.handle_press(7);
    assert_eq!(resp.requests, [HostRequest::Speak("Cat ".to_string())]);
}

use super::*;

fn item(link: Option<&str>) -> ModalContent {
    ModalContent::from_attrs(
        Some("/img/atlas.png".to_owned()),
        Some("Web".to_owned()),
        Some("Atlas".to_owned()),
        Some("Route planner".to_owned()),
        link.map(str::to_owned),
    )
}

#[test]
fn modal_starts_hidden_and_empty() {
    let state = ModalState::default();
    assert!(!state.visible);
    assert!(state.content.is_none());
}

#[test]
fn open_populates_every_field_from_item() {
    let mut state = ModalState::default();
    state.open(item(Some("https://atlas.example")));
    assert!(state.visible);
    let content = state.content.expect("content set on open");
    assert_eq!(content.image_src, "/img/atlas.png");
    assert_eq!(content.category, "Web");
    assert_eq!(content.title, "Atlas");
    assert_eq!(content.description, "Route planner");
    assert_eq!(content.link.as_deref(), Some("https://atlas.example"));
    assert!(content.has_action());
}

#[test]
fn action_hidden_for_absent_blank_or_hash_link() {
    assert!(!item(None).has_action());
    assert!(!item(Some("")).has_action());
    assert!(!item(Some("  ")).has_action());
    assert!(!item(Some("#")).has_action());
    assert!(item(Some("/case-study")).has_action());
}

#[test]
fn close_hides_but_keeps_content() {
    let mut state = ModalState::default();
    state.open(item(None));
    state.close();
    assert!(!state.visible);
    assert_eq!(state.content.map(|c| c.title), Some("Atlas".to_owned()));
}

#[test]
fn reopen_replaces_content_wholesale() {
    let mut state = ModalState::default();
    state.open(item(Some("https://atlas.example")));
    state.close();
    state.open(ModalContent::from_attrs(None, None, Some("Beacon".to_owned()), None, None));
    let content = state.content.expect("content set on open");
    assert_eq!(content.title, "Beacon");
    assert_eq!(content.category, "");
    assert_eq!(content.image_src, "");
    assert!(content.link.is_none());
}

#[test]
fn missing_attrs_become_empty_strings() {
    let content = ModalContent::from_attrs(None, None, None, None, None);
    assert_eq!(content, ModalContent::default());
}

#[test]
fn action_slot_switches_at_breakpoint() {
    assert_eq!(action_slot(375.0, 1024.0), ActionSlot::Compact);
    assert_eq!(action_slot(1024.0, 1024.0), ActionSlot::Compact);
    assert_eq!(action_slot(1025.0, 1024.0), ActionSlot::Wide);
}

use super::*;

#[test]
fn typewriter_reveals_prefixes_then_stops() {
    let mut writer = Typewriter::new("Hi!");
    assert!(!writer.is_finished());
    assert_eq!(writer.tick().as_deref(), Some("H"));
    assert_eq!(writer.tick().as_deref(), Some("Hi"));
    assert_eq!(writer.tick().as_deref(), Some("Hi!"));
    assert!(writer.is_finished());
    assert_eq!(writer.tick(), None);
}

#[test]
fn typewriter_steps_by_char_not_byte() {
    let mut writer = Typewriter::new("Zoë");
    writer.tick();
    writer.tick();
    assert_eq!(writer.tick().as_deref(), Some("Zoë"));
    assert!(writer.is_finished());
}

#[test]
fn empty_text_is_finished_immediately() {
    let mut writer = Typewriter::new("");
    assert!(writer.is_finished());
    assert_eq!(writer.tick(), None);
}

#[test]
fn pointer_offset_is_relative_to_rect() {
    assert_eq!(pointer_offset((130.0, 75.5), (100.0, 50.0)), ("30px".to_owned(), "25.5px".to_owned()));
}

#[test]
fn single_char_title_finishes_on_first_tick() {
    let mut writer = Typewriter::new("A");
    assert_eq!(writer.tick().as_deref(), Some("A"));
    assert!(writer.is_finished());
}

use super::*;

fn run_to_end(target: CounterTarget) -> Vec<CounterFrame> {
    let mut animation = CounterAnimation::new(target);
    let mut frames = Vec::new();
    for _ in 0..1_000 {
        let frame = animation.tick();
        let done = frame.done;
        frames.push(frame);
        if done {
            break;
        }
    }
    frames
}

fn numeric(text: &str) -> u64 {
    text.trim_end_matches('+').parse().expect("frame text should be numeric")
}

#[test]
fn parse_plain_and_plus_suffixed_text() {
    assert_eq!(CounterTarget::parse("42").ok(), Some(CounterTarget { value: 42, plus: false }));
    assert_eq!(CounterTarget::parse(" 150+ ").ok(), Some(CounterTarget { value: 150, plus: true }));
}

#[test]
fn parse_rejects_non_numeric_text() {
    assert!(matches!(CounterTarget::parse("many"), Err(FolioError::InvalidCounter(_))));
    assert!(matches!(CounterTarget::parse("+"), Err(FolioError::InvalidCounter(_))));
    assert!(matches!(CounterTarget::parse("-3"), Err(FolioError::InvalidCounter(_))));
}

#[test]
fn plus_counter_ends_exactly_on_target_text() {
    let frames = run_to_end(CounterTarget { value: 150, plus: true });
    let last = frames.last().expect("at least one frame");
    assert!(last.done);
    assert_eq!(last.text, "150+");
}

#[test]
fn counter_never_overshoots_and_never_decreases() {
    let frames = run_to_end(CounterTarget { value: 150, plus: true });
    let mut previous = 0;
    for frame in &frames {
        assert!(frame.text.ends_with('+'));
        let value = numeric(&frame.text);
        assert!(value <= 150);
        assert!(value >= previous);
        previous = value;
    }
}

#[test]
fn counter_takes_about_fifty_steps() {
    let frames = run_to_end(CounterTarget { value: 150, plus: false });
    assert!((49..=51).contains(&frames.len()), "took {} steps", frames.len());
    assert_eq!(frames.last().map(|f| f.text.as_str()), Some("150"));
}

#[test]
fn small_targets_show_floored_values() {
    let mut animation = CounterAnimation::new(CounterTarget { value: 10, plus: false });
    assert_eq!(animation.tick().text, "0");
    let frames = run_to_end(animation.target());
    assert_eq!(frames.last().map(|f| f.text.as_str()), Some("10"));
}

#[test]
fn zero_target_finishes_on_first_tick() {
    let frames = run_to_end(CounterTarget { value: 0, plus: true });
    assert_eq!(frames, vec![CounterFrame { text: "0+".to_owned(), done: true }]);
}

use super::*;
use std::cell::Cell;
use std::rc::Rc;

/// Handle that counts how many times it has been dropped (cancelled).
struct Probe(Rc<Cell<u32>>);

impl Drop for Probe {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn registry_starts_empty() {
    let registry: TaskRegistry<usize, Probe> = TaskRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn rescheduling_a_key_cancels_the_previous_task() {
    let drops = Rc::new(Cell::new(0));
    let mut registry = TaskRegistry::new();
    assert!(!registry.schedule(7_usize, Probe(Rc::clone(&drops))));
    assert!(registry.schedule(7_usize, Probe(Rc::clone(&drops))));
    assert_eq!(drops.get(), 1);
    assert_eq!(registry.len(), 1);
    assert!(registry.is_active(&7));
}

#[test]
fn keys_are_independent() {
    let drops = Rc::new(Cell::new(0));
    let mut registry = TaskRegistry::new();
    registry.schedule(1_usize, Probe(Rc::clone(&drops)));
    registry.schedule(2_usize, Probe(Rc::clone(&drops)));
    assert!(registry.cancel(&1));
    assert_eq!(drops.get(), 1);
    assert!(!registry.is_active(&1));
    assert!(registry.is_active(&2));
}

#[test]
fn cancel_of_unknown_key_is_noop() {
    let mut registry: TaskRegistry<usize, Probe> = TaskRegistry::new();
    assert!(!registry.cancel(&3));
}

#[test]
fn finish_hands_back_handle_without_dropping() {
    let drops = Rc::new(Cell::new(0));
    let mut registry = TaskRegistry::new();
    registry.schedule("hero", Probe(Rc::clone(&drops)));
    let handle = registry.finish(&"hero");
    assert!(handle.is_some());
    assert_eq!(drops.get(), 0);
    assert!(registry.is_empty());
    drop(handle);
    assert_eq!(drops.get(), 1);
}

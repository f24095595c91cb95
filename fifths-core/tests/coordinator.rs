use std::cell::RefCell;
use std::rc::Rc;

use fifths_core::coordinator::{StateChange, StateCoordinator};
use fifths_core::state::MusicalSettings;
use fifths_types::{Action, ChordRole, ChordType, Dispatcher, Mode, Pitch, Triad};

/// Subscribe a handler that records every broadcast it receives.
fn record(coordinator: &mut StateCoordinator) -> Rc<RefCell<Vec<StateChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    coordinator.subscribe(move |change| sink.borrow_mut().push(*change));
    log
}

#[test]
fn test_handlers_run_in_registration_order() {
    let mut coordinator = StateCoordinator::default();
    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["circle", "modes", "fretboard"] {
        let order = order.clone();
        coordinator.subscribe(move |_| order.borrow_mut().push(name));
    }

    coordinator.dispatch(&Action::SetTonic(Pitch::E));
    assert_eq!(*order.borrow(), ["circle", "modes", "fretboard"]);
}

#[test]
fn test_every_dispatch_broadcasts() {
    let mut coordinator = StateCoordinator::default();
    let log = record(&mut coordinator);

    let changed = coordinator.dispatch(&Action::SetTonic(Pitch::G));
    let unchanged = coordinator.dispatch(&Action::SetTonic(Pitch::G));
    assert!(changed.changed);
    assert!(!unchanged.changed);
    assert_eq!(log.borrow().len(), 2);
    assert_eq!(log.borrow()[0], log.borrow()[1]);
}

#[test]
fn test_unsubscribed_handler_is_not_called() {
    let mut coordinator = StateCoordinator::default();
    let kept = record(&mut coordinator);
    let dropped = Rc::new(RefCell::new(0));
    let counter = dropped.clone();
    let id = coordinator.subscribe(move |_| *counter.borrow_mut() += 1);

    coordinator.dispatch(&Action::SetMode(Mode::Dorian));
    assert!(coordinator.unsubscribe(id));
    coordinator.dispatch(&Action::SetMode(Mode::Lydian));

    assert_eq!(*dropped.borrow(), 1);
    assert_eq!(kept.borrow().len(), 2);
}

#[test]
fn test_click_through_session() {
    let mut coordinator = StateCoordinator::new(MusicalSettings {
        tonic: Pitch::C,
        mode: Mode::Major,
    });
    let log = record(&mut coordinator);

    // Pick A on the circle, then the minor mode button
    coordinator.dispatch(&Action::SetTonic(Pitch::A));
    coordinator.dispatch(&Action::SetMode(Mode::Minor));
    {
        let last = log.borrow()[1];
        let names: Vec<&str> = last.scale.degrees().iter().map(|d| d.name()).collect();
        assert_eq!(names, ["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(last.scale.degree(0).chord_type(), ChordType::Minor);
        assert_eq!(last.scale.chord_tones().count(), 0);
    }

    // Click the iv chord: D F A
    coordinator.dispatch(&Action::SelectDegree(3));
    {
        let last = log.borrow()[2];
        assert_eq!(last.selected_triad, Some(Triad::new(Pitch::D, Pitch::F, Pitch::A)));
        let roles: Vec<(&str, ChordRole)> = last
            .scale
            .chord_tones()
            .map(|d| (d.name(), d.chord_role().unwrap()))
            .collect();
        assert_eq!(
            roles,
            [
                ("A", ChordRole::Fifth),
                ("D", ChordRole::Root),
                ("F", ChordRole::Third),
            ]
        );
    }

    // Switching mode keeps the chord; it is re-matched by name
    coordinator.dispatch(&Action::SetMode(Mode::Dorian));
    {
        let last = log.borrow()[3];
        assert_eq!(last.scale.pitches()[5], Pitch::Fs);
        assert_eq!(last.scale.chord_tones().count(), 2);
    }

    coordinator.dispatch(&Action::ClearChord);
    assert_eq!(log.borrow()[4].scale.chord_tones().count(), 0);
    assert_eq!(coordinator.snapshot(), log.borrow()[4]);
}

#[test]
fn test_coordinator_as_dispatcher_trait_object() {
    let mut coordinator = StateCoordinator::default();
    let log = record(&mut coordinator);
    {
        let dispatcher: &mut dyn Dispatcher = &mut coordinator;
        dispatcher.dispatch(&Action::SelectChord(Triad::new(Pitch::G, Pitch::B, Pitch::D)));
    }
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(coordinator.scale().degree(4).chord_role(), Some(ChordRole::Root));
}

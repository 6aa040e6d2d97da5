mod common;

use std::time::Duration;

use common::{looping, typing, TICK};
use marquee::engine::{Clock, ManualClock, Paced, Pacer};
use marquee::typing::{CursorBlink, TypingMachine};

#[test]
fn nothing_happens_before_the_first_deadline() {
    let clock = ManualClock::new();
    let mut pacer = Pacer::new(TypingMachine::new(typing("abc")).unwrap(), clock.now());
    clock.advance(TICK - Duration::from_millis(1));
    assert_eq!(pacer.poll(clock.now()), 0);
    assert_eq!(pacer.machine().shown(), 0);
}

#[test]
fn one_tick_commits_per_interval() {
    let clock = ManualClock::new();
    let mut pacer = Pacer::new(TypingMachine::new(typing("abc")).unwrap(), clock.now());
    clock.advance(TICK);
    assert_eq!(pacer.poll(clock.now()), 1);
    assert_eq!(pacer.machine().shown(), 1);
}

#[test]
fn catching_up_replays_every_missed_tick_in_order() {
    let clock = ManualClock::new();
    let mut pacer = Pacer::new(TypingMachine::new(typing("abcde")).unwrap(), clock.now());
    // A long stall: all five characters are due at once.
    clock.advance(TICK * 10);
    assert_eq!(pacer.poll(clock.now()), 5);
    assert_eq!(pacer.machine().shown_text(), "abcde");
}

#[test]
fn halted_machine_is_never_ticked_again() {
    let clock = ManualClock::new();
    let mut pacer = Pacer::new(TypingMachine::new(typing("ab")).unwrap(), clock.now());
    clock.advance(TICK * 2);
    assert_eq!(pacer.poll(clock.now()), 2);
    assert!(pacer.is_halted());

    clock.advance(TICK * 100);
    assert_eq!(pacer.poll(clock.now()), 0);
    assert_eq!(pacer.machine().passes_done(), 1);
}

#[test]
fn cadence_follows_the_machine_phase() {
    let clock = ManualClock::new();
    let options = looping("ab", true);
    let hold = options.hold_before_loop;
    let mut pacer = Pacer::new(TypingMachine::new(options).unwrap(), clock.now());

    // Type both characters.
    clock.advance(TICK * 2);
    assert_eq!(pacer.poll(clock.now()), 2);

    // The hold tick is not due until the hold duration has passed.
    clock.advance(TICK * 2);
    assert_eq!(pacer.poll(clock.now()), 0);
    clock.advance(hold);
    assert!(pacer.poll(clock.now()) >= 1);
}

#[test]
fn cursor_blink_toggles_forever() {
    let clock = ManualClock::new();
    let period = Duration::from_millis(530);
    let mut pacer = Pacer::new(CursorBlink::new(period), clock.now());
    assert!(pacer.machine().visible());

    clock.advance(period);
    pacer.poll(clock.now());
    assert!(!pacer.machine().visible());

    clock.advance(period * 2);
    pacer.poll(clock.now());
    assert!(pacer.machine().visible());
    assert!(!pacer.is_halted());
}

#[test]
fn zero_cadence_machines_are_refused_instead_of_spinning() {
    #[derive(Clone)]
    struct Spinner;

    impl Paced for Spinner {
        fn step(self) -> Self {
            self
        }

        fn next_delay(&self) -> Option<Duration> {
            Some(Duration::ZERO)
        }
    }

    let clock = ManualClock::new();
    let mut pacer = Pacer::new(Spinner, clock.now());
    assert!(pacer.is_halted());
    clock.advance(Duration::from_secs(1));
    assert_eq!(pacer.poll(clock.now()), 0);
}

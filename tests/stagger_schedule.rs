use std::time::Duration;

use marquee::stagger::{Easing, Granularity, StaggerSchedule, Transition};

const INTERVAL: Duration = Duration::from_millis(40);

fn schedule(text: &str, granularity: Granularity) -> StaggerSchedule {
    StaggerSchedule::new(text, granularity, INTERVAL, Transition::default())
}

#[test]
fn delay_is_an_exact_multiple_of_the_interval() {
    let schedule = schedule("stagger", Granularity::Character);
    for i in 0..schedule.len() {
        assert_eq!(schedule.delay(i), INTERVAL * i as u32);
    }
}

#[test]
fn delays_never_decrease() {
    let schedule = schedule("a few words here", Granularity::Word);
    let delays: Vec<_> = (0..schedule.len()).map(|i| schedule.delay(i)).collect();
    assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn character_granularity_splits_every_char() {
    let schedule = schedule("ab c", Granularity::Character);
    assert_eq!(schedule.len(), 4);
    assert_eq!(schedule.items()[2], " ");
}

#[test]
fn word_granularity_splits_on_whitespace() {
    let schedule = schedule("  two   words ", Granularity::Word);
    assert_eq!(schedule.items(), ["two", "words"]);
}

#[test]
fn progress_is_zero_before_the_item_delay() {
    let schedule = schedule("abc", Granularity::Character);
    assert_eq!(schedule.progress_at(2, Duration::from_millis(79)), 0.0);
}

#[test]
fn progress_reaches_one_after_the_transition() {
    let schedule = schedule("abc", Granularity::Character);
    let done = schedule.delay(2) + Transition::default().duration;
    assert_eq!(schedule.progress_at(2, done), 1.0);
}

#[test]
fn progress_is_eased_mid_transition() {
    let transition = Transition {
        duration: Duration::from_millis(400),
        easing: Easing::EaseOutCubic,
    };
    let schedule = StaggerSchedule::new("x", Granularity::Character, INTERVAL, transition);
    // Halfway through an ease-out, progress is ahead of linear.
    let halfway = schedule.progress_at(0, Duration::from_millis(200));
    assert!(halfway > 0.5 && halfway < 1.0);
}

#[test]
fn zero_interval_reveals_everything_at_once() {
    let schedule = StaggerSchedule::new(
        "simultaneous",
        Granularity::Character,
        Duration::ZERO,
        Transition::default(),
    );
    assert_eq!(schedule.begun_at(Duration::ZERO), schedule.len());
}

#[test]
fn begun_count_follows_elapsed_time() {
    let schedule = schedule("abcd", Granularity::Character);
    assert_eq!(schedule.begun_at(Duration::ZERO), 1);
    assert_eq!(schedule.begun_at(Duration::from_millis(40)), 2);
    assert_eq!(schedule.begun_at(Duration::from_millis(500)), 4);
}

#[test]
fn zero_duration_transition_snaps_to_done() {
    let transition = Transition {
        duration: Duration::ZERO,
        easing: Easing::Linear,
    };
    let schedule = StaggerSchedule::new("ab", Granularity::Character, INTERVAL, transition);
    assert_eq!(schedule.progress_at(0, Duration::ZERO), 1.0);
}

#[test]
fn empty_text_produces_an_empty_schedule() {
    let schedule = schedule("", Granularity::Word);
    assert!(schedule.is_empty());
    assert_eq!(schedule.begun_at(Duration::from_secs(10)), 0);
}

mod support;

use instajob_preview::observer::{Trackable, VisibilityObserver};
use instajob_preview::trackable::TrackableKind;
use support::{animator, FakeCard, ManualDriver};

fn observe(cards: &[(FakeCard, TrackableKind)]) -> VisibilityObserver<FakeCard, ManualDriver> {
    let tracked = cards
        .iter()
        .map(|(card, kind)| Trackable::new(card.clone(), *kind))
        .collect();
    VisibilityObserver::new(tracked, animator())
}

#[test]
fn discovered_elements_start_concealed() {
    let card = FakeCard::plain(1);
    let observer = observe(&[(card.clone(), TrackableKind::Plain)]);

    assert_eq!(card.style("opacity").as_deref(), Some("0"));
    assert_eq!(card.style("transform").as_deref(), Some("translateY(30px)"));
    assert_eq!(
        card.style("transition").as_deref(),
        Some("opacity 0.6s ease, transform 0.6s ease")
    );
    assert!(!observer.tracked()[0].is_revealed());
}

#[test]
fn percent_stat_counts_up_to_its_label() {
    let card = FakeCard::with_counter(1, "85%");
    let observer = observe(&[(card.clone(), TrackableKind::Stat)]);

    observer.on_intersect([&card]);
    let counter = card.counter.clone().unwrap();
    assert_eq!(counter.shown(), "0");
    assert_eq!(card.style("opacity").as_deref(), Some("1"));
    assert_eq!(card.style("transform").as_deref(), Some("translateY(0)"));

    observer.animator().driver().flush();
    assert_eq!(counter.shown(), "85%");
}

#[test]
fn currency_stat_ends_on_its_label() {
    let card = FakeCard::with_counter(1, "500€");
    let observer = observe(&[(card.clone(), TrackableKind::MetricCard)]);

    observer.on_intersect([&card]);
    observer.animator().driver().flush();
    assert_eq!(card.counter.unwrap().shown(), "500€");
}

#[test]
fn thousands_stat_keeps_the_literal_target() {
    let card = FakeCard::with_counter(1, "1.2K+");
    let observer = observe(&[(card.clone(), TrackableKind::DbStat)]);

    observer.on_intersect([&card]);
    observer.animator().driver().flush();
    let frames = card.counter.unwrap().frames();
    assert!(frames[1..].iter().all(|frame| frame == "0.0K+"));
}

#[test]
fn repeated_notifications_run_the_counter_once() {
    let card = FakeCard::with_counter(1, "120+");
    let observer = observe(&[(card.clone(), TrackableKind::ProblemStatCard)]);

    observer.on_intersect([&card]);
    let writes_after_reveal = card.style_writes();
    observer.animator().driver().tick_all();
    observer.on_intersect([&card]);
    observer.on_intersect([&card, &card]);

    let driver = observer.animator().driver();
    assert_eq!(driver.started(), 1);
    assert_eq!(card.style_writes(), writes_after_reveal);

    driver.flush();
    let counter = card.counter.unwrap();
    assert_eq!(counter.shown(), "120+");
    assert_eq!(counter.frames().iter().filter(|frame| *frame == "0").count(), 1);
}

#[test]
fn simultaneous_stats_animate_independently() {
    let first = FakeCard::with_counter(1, "85%");
    let second = FakeCard::with_counter(2, "3000");
    let observer = observe(&[
        (first.clone(), TrackableKind::Stat),
        (second.clone(), TrackableKind::Stat),
    ]);

    observer.on_intersect([&first, &second]);
    let driver = observer.animator().driver();
    assert_eq!(driver.started(), 2);

    assert_eq!(driver.tick_all(), 2);
    assert_eq!(second.counter.clone().unwrap().shown(), "50");

    driver.flush();
    assert!(driver.all_complete());
    assert_eq!(first.counter.unwrap().shown(), "85%");
    assert_eq!(second.counter.unwrap().shown(), "3000");
}

#[test]
fn plain_element_reveals_without_a_counter() {
    let card = FakeCard::with_counter(1, "42");
    let observer = observe(&[(card.clone(), TrackableKind::Plain)]);

    observer.on_intersect([&card]);
    assert!(observer.tracked()[0].is_revealed());
    assert_eq!(observer.animator().driver().started(), 0);
    assert_eq!(card.counter.unwrap().shown(), "42");
}

#[test]
fn stat_without_numeric_child_only_reveals() {
    let card = FakeCard::plain(1);
    let observer = observe(&[(card.clone(), TrackableKind::MetricCard)]);

    observer.on_intersect([&card]);
    assert_eq!(card.style("opacity").as_deref(), Some("1"));
    assert_eq!(observer.animator().driver().started(), 0);
}

#[test]
fn text_labels_are_left_untouched() {
    let card = FakeCard::with_counter(1, "Unlimited");
    let observer = observe(&[(card.clone(), TrackableKind::Stat)]);

    observer.on_intersect([&card]);
    let counter = card.counter.unwrap();
    assert_eq!(counter.shown(), "Unlimited");
    assert!(counter.frames().is_empty());
    assert_eq!(observer.animator().driver().started(), 0);
}

#[test]
fn untracked_targets_are_ignored() {
    let tracked = FakeCard::with_counter(1, "10");
    let stranger = FakeCard::with_counter(9, "10");
    let observer = observe(&[(tracked.clone(), TrackableKind::Stat)]);

    observer.on_intersect([&stranger]);
    assert_eq!(stranger.style_writes(), 0);
    assert!(!observer.tracked()[0].is_revealed());
    assert_eq!(observer.animator().driver().started(), 0);
}

#[test]
fn cancelled_run_stops_before_its_target() {
    let card = FakeCard::with_counter(1, "600");
    let animator = animator();

    let token = animator.animate(&card).unwrap();
    animator.driver().tick_all();
    token.cancel();
    animator.driver().flush();

    assert!(animator.driver().all_complete());
    assert_eq!(card.counter.unwrap().shown(), "10");
}

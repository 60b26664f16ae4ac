use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use hostdom::{Breakpoints, MediaEnvironment, MediaQuery};

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_display_uses_rem() {
    let bp = Breakpoints::default();
    assert_eq!(bp.desktop_query().to_string(), "(min-width: 93.75rem)");
    assert_eq!(bp.not_desktop_query().to_string(), "(max-width: 93.6875rem)");
    assert_eq!(
        MediaQuery::MinWidth(bp.tablet).to_string(),
        "(min-width: 34.375rem)"
    );
    assert_eq!(
        MediaQuery::PrefersReducedMotion.to_string(),
        "(prefers-reduced-motion: reduce)"
    );
}

#[test]
fn test_query_matches_boundaries() {
    let desktop = Breakpoints::default().desktop_query();
    assert!(desktop.matches(1500, false));
    assert!(!desktop.matches(1499, false));
    assert!(Breakpoints::default().not_desktop_query().matches(1499, false));
}

// ============================================================================
// Subscriptions
// ============================================================================

#[test]
fn test_subscriber_notified_only_on_boundary_crossing() {
    let env = MediaEnvironment::new(1600, false);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = env.subscribe(Breakpoints::default().desktop_query(), move |m| {
        sink.lock().unwrap().push(m);
    });

    env.set_viewport_width(1550); // still desktop
    env.set_viewport_width(800); // crosses
    env.set_viewport_width(700); // still mobile
    env.set_viewport_width(1500); // crosses back

    assert_eq!(*seen.lock().unwrap(), vec![false, true]);
}

#[test]
fn test_drop_subscription_unsubscribes() {
    let env = MediaEnvironment::new(1600, false);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let sub = env.subscribe(MediaQuery::MinWidth(1000), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(env.listener_count(), 1);

    drop(sub);
    assert_eq!(env.listener_count(), 0);

    env.set_viewport_width(500);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reduced_motion_signal() {
    let env = MediaEnvironment::new(1600, false);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = env.subscribe(MediaQuery::PrefersReducedMotion, move |m| {
        sink.lock().unwrap().push(m);
    });

    env.set_prefers_reduced_motion(true);
    env.set_prefers_reduced_motion(true);
    assert!(env.prefers_reduced_motion());
    assert_eq!(*seen.lock().unwrap(), vec![true]);
    drop(sub);
    assert_eq!(env.listener_count(), 0);
}

#[test]
fn test_callback_may_read_environment() {
    let env = MediaEnvironment::new(1600, false);
    let observed = Arc::new(AtomicUsize::new(0));
    let inner_env = env.clone();
    let sink = Arc::clone(&observed);
    let _sub = env.subscribe(MediaQuery::MinWidth(1000), move |_| {
        sink.store(inner_env.viewport_width() as usize, Ordering::SeqCst);
    });

    env.set_viewport_width(640);
    assert_eq!(observed.load(Ordering::SeqCst), 640);
}

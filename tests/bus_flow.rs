//! End-to-end flows driven the way the application drives the bus:
//! producers publish during an update, the loop drains once per tick.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tickbus::{events::names, Args, Event, EventManager, Registry, SubscriptionSet};

fn counting(hits: &Arc<AtomicUsize>) -> impl Fn(&str, &Args) + Send + Sync + 'static {
    let hits = Arc::clone(hits);
    move |_, _| {
        hits.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn subscribe_publish_drain_unsubscribe_roundtrip() {
    // Spec'd scenario: id 0, deferred delivery, exactly one invocation,
    // then unsubscribe makes the next tick a no-op.
    let registry = Registry::new();
    assert!(registry.create("m"));
    let bus = registry.current().expect("just created");

    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (h, s) = (Arc::clone(&hits), Arc::clone(&seen));
    let id = bus.subscribe("ping", move |name, args| {
        h.fetch_add(1, Ordering::Relaxed);
        s.lock().unwrap().push((name.to_string(), args.is_empty()));
    });
    assert_eq!(id, 0);

    bus.publish(Event::new("ping"));
    assert_eq!(hits.load(Ordering::Relaxed), 0); // nothing before the tick
    assert_eq!(bus.pending(), 1);

    bus.drain();
    assert_eq!(hits.load(Ordering::Relaxed), 1);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![("ping".to_string(), true)] // name delivered, args empty
    );

    assert!(bus.unsubscribe(0));
    bus.publish(Event::new("ping"));
    bus.drain();
    assert_eq!(hits.load(Ordering::Relaxed), 1);
}

#[test]
fn two_listeners_one_name_both_invoked_once() {
    let bus = EventManager::new();
    let h1 = Arc::new(AtomicUsize::new(0));
    let h2 = Arc::new(AtomicUsize::new(0));
    let id1 = bus.subscribe("x", counting(&h1));
    let id2 = bus.subscribe("x", counting(&h2));
    assert!(id1 < id2);

    bus.publish(Event::new("x"));
    bus.drain();

    assert_eq!(h1.load(Ordering::Relaxed), 1);
    assert_eq!(h2.load(Ordering::Relaxed), 1);
}

#[test]
fn ui_world_roundtrip_over_two_ticks() {
    // UI publishes paintVoxel; the world applies it and announces
    // voxelChanged from inside its handler (re-entrant production); a UI
    // status listener observes the announcement within the same drain call.
    let registry = Registry::new();
    registry.create("game");
    let bus = registry.current().expect("created");

    let mut world = SubscriptionSet::new();
    let mut ui = SubscriptionSet::new();
    let painted = Arc::new(Mutex::new(Vec::new()));
    let announced = Arc::new(AtomicUsize::new(0));

    {
        let bus = Arc::clone(&bus);
        let painted = Arc::clone(&painted);
        world.subscribe(&registry, names::PAINT_VOXEL, move |_, args| {
            let matter = args.get_str("matter").expect("schema").to_string();
            let radius = args.get_int("radius").expect("schema");
            painted.lock().unwrap().push((matter.clone(), radius));
            bus.publish(
                Event::new(names::VOXEL_CHANGED)
                    .with("matter", matter)
                    .with("x", 4)
                    .with("y", 1)
                    .with("z", 9),
            );
        });
    }
    ui.subscribe(&registry, names::VOXEL_CHANGED, counting(&announced));

    // Tick 1: the paint request and its follow-up both land.
    bus.publish(
        Event::new(names::PAINT_VOXEL)
            .with("matter", "rock")
            .with("x", 4)
            .with("y", 1)
            .with("z", 9)
            .with("radius", 2),
    );
    bus.drain();
    assert_eq!(*painted.lock().unwrap(), vec![("rock".to_string(), 2)]);
    assert_eq!(announced.load(Ordering::Relaxed), 1);
    assert_eq!(bus.pending(), 0);

    // The world object goes away; tick 2 routes to no one.
    drop(world);
    bus.publish(Event::new(names::PAINT_VOXEL).with("matter", "sand").with("radius", 1));
    bus.drain();
    assert_eq!(painted.lock().unwrap().len(), 1);
    assert_eq!(announced.load(Ordering::Relaxed), 1);
}

#[test]
fn factory_misuse_is_always_recoverable() {
    let registry = Registry::new();

    assert!(registry.create("a"));
    assert!(!registry.create("a"));
    assert!(!registry.remove("a")); // current is protected
    assert!(!registry.set_current("ghost"));
    assert_eq!(registry.current_name().as_deref(), Some("a"));

    assert!(registry.create("b"));
    assert!(registry.remove("a"));
    assert_eq!(registry.list(), vec!["b".to_string()]);
}

#[test]
fn scoped_owner_survives_current_repoint() {
    // A subscriber bound to "game" keeps receiving through its own handle
    // after "menu" becomes current, and cleans up against "game" on drop.
    let registry = Registry::new();
    registry.create("game");
    let game = registry.current().expect("created");

    let hits = Arc::new(AtomicUsize::new(0));
    let mut subs = SubscriptionSet::new();
    subs.subscribe(&registry, "tick", counting(&hits));

    registry.create("menu");
    assert_eq!(registry.current_name().as_deref(), Some("menu"));

    game.publish(Event::new("tick"));
    game.drain();
    assert_eq!(hits.load(Ordering::Relaxed), 1);

    drop(subs);
    assert!(game.list_listeners().is_empty());
    game.publish(Event::new("tick"));
    game.drain();
    assert_eq!(hits.load(Ordering::Relaxed), 1);
}

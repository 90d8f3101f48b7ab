//! Minimal driving loop: an input producer, a world consumer, and one
//! `drain()` per tick.
//!
//! Run with: `cargo run --example tick_loop`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tickbus::{events::names, Event, Registry, SubscriptionSet};

fn main() {
    let registry = Registry::new();
    registry.create("game");
    let bus = registry.current().expect("just created");

    let running = Arc::new(AtomicBool::new(true));
    let mut world = SubscriptionSet::new();

    world.subscribe(&registry, names::RESIZE_WORLD, |_, args| {
        match (args.get_int("X"), args.get_int("Y"), args.get_int("Z")) {
            (Ok(x), Ok(y), Ok(z)) => println!("world resized to {x}x{y}x{z}"),
            (x, y, z) => eprintln!("bad resizeWorld schema: {x:?} {y:?} {z:?}"),
        }
    });

    let r = Arc::clone(&running);
    world.subscribe(&registry, names::QUIT, move |_, _| {
        println!("quit requested");
        r.store(false, Ordering::Relaxed);
    });

    // Scripted "input" for three ticks of the loop.
    let script: Vec<Vec<Event>> = vec![
        vec![Event::new(names::RESIZE_WORLD).with("X", 16).with("Y", 16).with("Z", 8)],
        vec![],
        vec![Event::new(names::QUIT)],
    ];

    for (tick, events) in script.into_iter().enumerate() {
        if !running.load(Ordering::Relaxed) {
            break;
        }
        for ev in events {
            bus.publish(ev); // deferred: nothing happens yet
        }
        println!("tick {tick}: draining {} event(s)", bus.pending());
        bus.drain();
    }
}

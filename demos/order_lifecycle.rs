//! Basic effect usage: tag values, combine changesets, inspect the buckets.

use netch::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Order {
    id: u32,
    total_cents: u64,
}

impl Identified for Order {
    type Id = u32;

    fn identity(&self) -> u32 {
        self.id
    }
}

fn main() {
    // 1. One piece of logic creates an order.
    let created = new(Order {
        id: 1,
        total_cents: 0,
    });

    // 2. Another, run independently, reprices the same order and cancels a
    //    stale one.
    let repriced = mutated(Order {
        id: 1,
        total_cents: 4_200,
    });
    let cancelled = dead(Order {
        id: 2,
        total_cents: 900,
    });

    // 3. Fold the partial changesets into one. Combination is ordered:
    //    create first, reprice second.
    let step = (created & repriced).expect("new then mutated is a valid history");
    let net = (step & cancelled).expect("distinct identities never conflict");

    // Order 1 nets to "new" (a created-then-repriced order is still new to
    // the world); order 2 nets to "dead".
    println!("new:  {:?}", net.new_values());
    println!("dead: {:?}", net.dead_values());

    // 4. Identity lookup reports the bucket holding the stored value.
    match net.value_with_state_by_identity(&1) {
        Some(state) => println!("order 1 is {}", state.kind()),
        None => println!("order 1 untouched"),
    }

    // 5. A contradictory history fails loudly instead of merging.
    let resurrect = dead(Order {
        id: 3,
        total_cents: 0,
    }) & new(Order {
        id: 3,
        total_cents: 100,
    });
    match resurrect {
        Err(err) => println!("rejected: {err}"),
        Ok(_) => panic!("dead then new should have been rejected"),
    }

    println!("Order lifecycle example complete.");
}

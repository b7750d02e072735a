use super::*;
use crate::core::random::seed;

fn setup(pooling: bool) -> (ParticleStore, SpatialGrid, u32) {
    (ParticleStore::new(pooling), SpatialGrid::new(50.0, true), seed(42))
}

#[test]
fn acquire_registers_in_grid_with_bounded_jitter() {
    let (mut store, mut grid, mut rng) = setup(true);
    let id = store.acquire(&mut grid, &mut rng, 120.0, 80.0, 2.0);
    let p = store.get(id).copied().expect("live particle");
    assert_eq!((p.x, p.y), (120.0, 80.0));
    assert!((p.x - p.past_x).abs() <= 2.0);
    assert!((p.y - p.past_y).abs() <= 2.0);
    assert_eq!((p.fx, p.fy), (0.0, 0.0));
    assert_eq!(p.cell, Some(grid.cell_key(120.0, 80.0)));
    assert_eq!(grid.len(), 1);
}

#[test]
fn pooled_reuse_is_lifo_and_fully_reset() {
    let (mut store, mut grid, mut rng) = setup(true);
    let a = store.acquire(&mut grid, &mut rng, 10.0, 10.0, 1.0);
    let b = store.acquire(&mut grid, &mut rng, 20.0, 20.0, 1.0);

    // Dirty both records before retiring them.
    for id in [a, b] {
        let p = store.get_mut(id).expect("live");
        p.add_force(99.0, -99.0);
        p.past_x = -1000.0;
    }
    assert!(store.release(&mut grid, a));
    assert!(store.release(&mut grid, b));
    assert_eq!(store.pool_size(), 2);
    assert!(grid.is_empty());

    let reused = store.acquire(&mut grid, &mut rng, 300.0, 40.0, 0.5);
    assert_eq!(reused, b, "most recently freed entry comes back first");
    let p = store.get(reused).copied().expect("live");
    assert_eq!((p.fx, p.fy), (0.0, 0.0));
    assert!((p.past_x - 300.0).abs() <= 0.5);
    assert!((p.past_y - 40.0).abs() <= 0.5);
    assert_eq!(p.cell, Some(grid.cell_key(300.0, 40.0)));
    assert_eq!(store.pool_size(), 1);
}

#[test]
fn shrinking_fills_pool_exactly() {
    let (mut store, mut grid, mut rng) = setup(true);
    store.set_count(&mut grid, &mut rng, 10, 800.0, 600.0, 1.0);
    assert_eq!(store.len(), 10);
    store.set_count(&mut grid, &mut rng, 3, 800.0, 600.0, 1.0);
    assert_eq!(store.len(), 3);
    assert_eq!(store.pool_size(), 7);
    assert_eq!(grid.len(), 3);
}

#[test]
fn set_count_spawns_in_bounds() {
    let (mut store, mut grid, mut rng) = setup(true);
    store.set_count(&mut grid, &mut rng, 200, 640.0, 480.0, 1.0);
    for (_, p) in store.iter() {
        assert!((0.0..640.0).contains(&p.x));
        assert!((0.0..480.0).contains(&p.y));
    }
}

#[test]
fn without_pooling_released_particles_are_discarded() {
    let (mut store, mut grid, mut rng) = setup(false);
    store.set_count(&mut grid, &mut rng, 5, 100.0, 100.0, 1.0);
    store.set_count(&mut grid, &mut rng, 2, 100.0, 100.0, 1.0);
    assert_eq!(store.len(), 2);
    assert_eq!(store.pool_size(), 0);
    // Tail slots are given back.
    assert_eq!(store.slots.len(), 2);
}

#[test]
fn release_on_empty_store_reports_nothing_removed() {
    let (mut store, mut grid, _) = setup(true);
    assert_eq!(store.release_last(&mut grid), None);
    assert!(!store.release(&mut grid, 0));
}

#[test]
fn releasing_twice_is_rejected() {
    let (mut store, mut grid, mut rng) = setup(true);
    let id = store.acquire(&mut grid, &mut rng, 1.0, 1.0, 0.0);
    assert!(store.release(&mut grid, id));
    assert!(!store.release(&mut grid, id));
    assert_eq!(store.pool_size(), 1);
}

#[test]
fn disabling_pooling_discards_pool() {
    let (mut store, mut grid, mut rng) = setup(true);
    store.set_count(&mut grid, &mut rng, 6, 100.0, 100.0, 1.0);
    store.set_count(&mut grid, &mut rng, 1, 100.0, 100.0, 1.0);
    assert_eq!(store.pool_size(), 5);
    store.set_pooling(false);
    assert_eq!(store.pool_size(), 0);
    assert_eq!(store.len(), 1);

    // Growing again allocates fresh records into reclaimed slots.
    store.set_count(&mut grid, &mut rng, 4, 100.0, 100.0, 1.0);
    assert_eq!(store.len(), 4);
    assert_eq!(store.pool_size(), 0);
}

#[test]
fn interior_release_keeps_acquisition_order() {
    let (mut store, mut grid, mut rng) = setup(false);
    let ids: Vec<_> = (0..4)
        .map(|i| store.acquire(&mut grid, &mut rng, i as f32, 0.0, 0.0))
        .collect();
    assert!(store.release(&mut grid, ids[1]));
    assert_eq!(store.live_ids(), &[ids[0], ids[2], ids[3]]);
    // A fresh acquire reclaims the vacant interior slot.
    let fresh = store.acquire(&mut grid, &mut rng, 9.0, 9.0, 0.0);
    assert_eq!(fresh, ids[1]);
    assert_eq!(store.release_last(&mut grid), Some(fresh));
}

#[test]
fn clear_drops_everything() {
    let (mut store, mut grid, mut rng) = setup(true);
    store.set_count(&mut grid, &mut rng, 8, 100.0, 100.0, 1.0);
    store.set_count(&mut grid, &mut rng, 4, 100.0, 100.0, 1.0);
    store.clear(&mut grid);
    assert!(store.is_empty());
    assert_eq!(store.pool_size(), 0);
    assert!(grid.is_empty());
}

use super::*;
use crate::domain::particle::Particle;

fn at(x: f32, y: f32) -> Particle {
    Particle::new(x, y, 0.0, 0.0)
}

#[test]
fn insert_records_key_on_particle() {
    let mut grid = SpatialGrid::new(10.0, true);
    let mut p = at(25.0, 31.0);
    grid.insert(7, &mut p);
    assert_eq!(p.cell, Some((2, 3)));
    assert_eq!(grid.bucket((2, 3)), Some(&[7][..]));
    assert_eq!(grid.len(), 1);
}

#[test]
fn negative_coordinates_floor_toward_minus_infinity() {
    let grid = SpatialGrid::new(10.0, true);
    assert_eq!(grid.cell_key(-0.5, 0.0), (-1, 0));
    assert_eq!(grid.cell_key(-10.0, -10.01), (-1, -2));
}

#[test]
fn distant_cells_never_share_a_key() {
    let grid = SpatialGrid::new(1.0, true);
    // A packed gx * 10000 + gy key would collide here.
    assert_ne!(grid.cell_key(1.0, 0.0), grid.cell_key(0.0, 10_000.0));
}

#[test]
fn remove_drops_empty_bucket_and_clears_key() {
    let mut grid = SpatialGrid::new(10.0, true);
    let mut a = at(1.0, 1.0);
    let mut b = at(2.0, 2.0);
    grid.insert(0, &mut a);
    grid.insert(1, &mut b);
    assert!(grid.remove(0, &mut a));
    assert_eq!(a.cell, None);
    assert_eq!(grid.bucket((0, 0)), Some(&[1][..]));
    assert!(grid.remove(1, &mut b));
    assert_eq!(grid.bucket((0, 0)), None);
    assert_eq!(grid.bucket_count(), 0);
    assert!(grid.is_empty());
}

#[test]
fn remove_without_key_is_a_no_op() {
    let mut grid = SpatialGrid::new(10.0, true);
    let mut p = at(1.0, 1.0);
    assert!(!grid.remove(0, &mut p));
}

#[test]
fn relocate_only_moves_on_key_change() {
    let mut grid = SpatialGrid::new(10.0, true);
    let mut p = at(1.0, 1.0);
    grid.insert(3, &mut p);

    p.x = 9.5;
    assert!(!grid.relocate(3, &mut p));
    assert_eq!(p.cell, Some((0, 0)));

    p.x = 10.5;
    p.y = 10.5;
    assert!(grid.relocate(3, &mut p));
    assert_eq!(p.cell, Some((1, 1)));
    assert_eq!(grid.bucket((0, 0)), None);
    assert_eq!(grid.bucket((1, 1)), Some(&[3][..]));
    assert_eq!(grid.len(), 1);
}

#[test]
fn neighbors_cover_three_by_three_block_including_self() {
    let mut grid = SpatialGrid::new(10.0, true);
    let mut particles = vec![
        at(15.0, 15.0), // center (1,1)
        at(5.0, 5.0),   // (0,0) diagonal
        at(25.0, 25.0), // (2,2) diagonal
        at(35.0, 15.0), // (3,1) outside
    ];
    for (id, p) in particles.iter_mut().enumerate() {
        grid.insert(id, p);
    }

    let mut out = Vec::new();
    grid.neighbors((1, 1), &mut out);
    out.sort_unstable();
    assert_eq!(out, vec![0, 1, 2]);
}

#[test]
fn wide_queries_match_bucket_scan() {
    let mut grid = SpatialGrid::new(5.0, true);
    let mut particles: Vec<Particle> = (0..40)
        .map(|i| at((i * 7 % 97) as f32, (i * 13 % 89) as f32))
        .collect();
    for (id, p) in particles.iter_mut().enumerate() {
        grid.insert(id, p);
    }

    let center = grid.cell_key(40.0, 40.0);
    for rings in [1, 2, 4, 50] {
        let mut fast = Vec::new();
        grid.neighbors_in_rings(center, rings, &mut fast);
        fast.sort_unstable();

        let mut expected: Vec<usize> = particles
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                let (gx, gy) = grid.cell_key(p.x, p.y);
                (gx - center.0).abs() <= rings && (gy - center.1).abs() <= rings
            })
            .map(|(id, _)| id)
            .collect();
        expected.sort_unstable();
        assert_eq!(fast, expected, "rings={rings}");
    }
}

#[test]
fn rebuild_reinserts_everything_with_new_cell_size() {
    let mut grid = SpatialGrid::new(10.0, true);
    let mut particles = vec![at(1.0, 1.0), at(55.0, 55.0)];
    for (id, p) in particles.iter_mut().enumerate() {
        grid.insert(id, p);
    }

    grid.configure(50.0, true);
    grid.rebuild(particles.iter_mut().enumerate());
    assert_eq!(particles[0].cell, Some((0, 0)));
    assert_eq!(particles[1].cell, Some((1, 1)));
    assert_eq!(grid.len(), 2);
}

#[test]
fn disabled_grid_registers_nothing() {
    let mut grid = SpatialGrid::new(10.0, false);
    let mut p = at(1.0, 1.0);
    grid.insert(0, &mut p);
    assert_eq!(p.cell, None);
    assert!(grid.is_empty());
    assert!(!grid.relocate(0, &mut p));
}

#[test]
fn non_positive_cell_size_is_clamped() {
    let grid = SpatialGrid::new(0.0, true);
    assert_eq!(grid.cell_size(), 1.0);
    let grid = SpatialGrid::new(-3.0, true);
    assert_eq!(grid.cell_size(), 1.0);
}

#[test]
fn rings_cover_radius() {
    let grid = SpatialGrid::new(10.0, true);
    assert_eq!(grid.rings_for_radius(5.0), 1);
    assert_eq!(grid.rings_for_radius(10.0), 1);
    assert_eq!(grid.rings_for_radius(10.5), 2);
    assert_eq!(grid.rings_for_radius(0.0), 1);
}

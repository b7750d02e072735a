//! Connection Builder - proximity lines between particles
//!
//! Every frame, each particle looks at its neighbor candidates (grid cells
//! covering the effective max distance, or everybody when partitioning is
//! off) and emits a segment per close-enough pair. A pair is emitted once,
//! from its lower id.
//!
//! The per-particle cap counts both endpoints and takes candidates in the
//! order the grid returns them, not nearest first.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::particle::{Particle, ParticleId};
use crate::domain::segment::Segment;
use crate::spatial::grid::SpatialGrid;
use crate::systems::store::ParticleStore;

mod alpha;

pub use alpha::{distance_alpha, lod_distance_factor, ConnectionParams, ALPHA_FLOOR};

/// Below this population the parallel path costs more than it saves
#[cfg(feature = "parallel")]
const PARALLEL_MIN_PARTICLES: usize = 2048;
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 256;

/// Scratch buffers reused across frames
#[derive(Clone, Debug, Default)]
pub struct ConnectionScratch {
    candidates: Vec<ParticleId>,
    /// Lines accepted so far this frame, indexed by particle id
    accepted: Vec<u32>,
}

/// Rebuild `out` with this frame's segments.
///
/// Particles are visited in live order. A pair is considered once, from its
/// lower id, and kept only while both endpoints are under the cap, so no
/// particle ever ends up with more than `max_per_particle` lines.
pub fn build_connections(
    store: &ParticleStore,
    grid: &SpatialGrid,
    partitioned: bool,
    params: &ConnectionParams,
    scratch: &mut ConnectionScratch,
    out: &mut Vec<Segment>,
) {
    out.clear();
    if params.max_per_particle == 0 || store.len() < 2 {
        return;
    }
    let partitioned = partitioned && grid.is_enabled();

    let ConnectionScratch { candidates, accepted } = scratch;
    accepted.clear();
    accepted.resize(store.slot_count(), 0);

    #[cfg(feature = "parallel")]
    {
        if store.len() >= PARALLEL_MIN_PARTICLES {
            // Distance tests fan out; the cap is applied afterwards in live order.
            let ids = store.live_ids();
            let found: Vec<Vec<(ParticleId, ParticleId, f32)>> = ids
                .par_chunks(PARALLEL_CHUNK)
                .map(|chunk| {
                    let mut local_candidates = Vec::new();
                    let mut local = Vec::new();
                    for &id in chunk {
                        if let Some(p) = store.get(id) {
                            pairs_in_range(store, grid, partitioned, params, id, p, &mut local_candidates, |other, alpha| {
                                local.push((id, other, alpha));
                                true
                            });
                        }
                    }
                    local
                })
                .collect();
            for (id, other, alpha) in found.into_iter().flatten() {
                if let (Some(p), Some(q)) = (store.get(id), store.get(other)) {
                    accept_pair(accepted, params.max_per_particle, id, p, other, q, alpha, out);
                }
            }
            return;
        }
    }

    for &id in store.live_ids() {
        let Some(p) = store.get(id) else {
            continue;
        };
        pairs_in_range(store, grid, partitioned, params, id, p, candidates, |other, alpha| {
            if let Some(q) = store.get(other) {
                accept_pair(accepted, params.max_per_particle, id, p, other, q, alpha, out);
            }
            under_cap(accepted, params.max_per_particle, id)
        });
    }
}

#[inline]
fn under_cap(accepted: &[u32], cap: usize, id: ParticleId) -> bool {
    accepted.get(id).is_some_and(|&n| (n as usize) < cap)
}

/// Emit `p`-`q` when neither endpoint is full.
#[allow(clippy::too_many_arguments)]
#[inline]
fn accept_pair(
    accepted: &mut [u32],
    cap: usize,
    id: ParticleId,
    p: &Particle,
    other: ParticleId,
    q: &Particle,
    alpha: f32,
    out: &mut Vec<Segment>,
) {
    if !under_cap(accepted, cap, id) || !under_cap(accepted, cap, other) {
        return;
    }
    accepted[id] += 1;
    accepted[other] += 1;
    out.push(Segment {
        x1: p.x,
        y1: p.y,
        x2: q.x,
        y2: q.y,
        alpha,
    });
}

/// Feed `visit` every higher-id neighbor of `p` within range, in candidate
/// order, until it returns false.
#[allow(clippy::too_many_arguments)]
#[inline]
fn pairs_in_range(
    store: &ParticleStore,
    grid: &SpatialGrid,
    partitioned: bool,
    params: &ConnectionParams,
    id: ParticleId,
    p: &Particle,
    candidates: &mut Vec<ParticleId>,
    mut visit: impl FnMut(ParticleId, f32) -> bool,
) {
    candidates.clear();
    if partitioned {
        let key = p.cell.unwrap_or_else(|| grid.cell_key(p.x, p.y));
        grid.neighbors_in_range(key, params.max_distance, candidates);
    } else {
        candidates.extend_from_slice(store.live_ids());
    }

    for &other in candidates.iter() {
        // Self and pairs already seen from the other end
        if other <= id {
            continue;
        }
        let Some(q) = store.get(other) else {
            continue;
        };
        let dx = q.x - p.x;
        let dy = q.y - p.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if let Some(alpha) = distance_alpha(distance, params) {
            if !visit(other, alpha) {
                break;
            }
        }
    }
}

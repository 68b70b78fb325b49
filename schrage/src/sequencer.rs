use log::trace;

use crate::job::{JobSet, Permutation};

/// Builds an initial order with Schrage's rule: whenever the machine is free,
/// run the released job with the largest processing plus delivery time.
///
/// Job indices are sorted by release time once. `released` is a cursor into
/// that array, everything before it has arrived. Dispatched jobs are only
/// flagged, `first_live` skips the dispatched prefix so the ready jobs are the
/// unflagged slots in `first_live..released`.
///
/// Ties on the tail go to the first ready job in release order, and equal
/// release times keep input order, so the result is deterministic.
pub fn schrage(jobs: &JobSet) -> Permutation {
    let mut pending: Vec<usize> = (0..jobs.len()).collect();
    pending.sort_by_key(|&id| jobs[id].release);

    let mut dispatched = vec![false; pending.len()];
    let mut order = Vec::with_capacity(pending.len());

    let mut first_live = 0;
    let mut released = 0;
    let mut time = 0;

    while order.len() < pending.len() {
        while released < pending.len() && jobs[pending[released]].release <= time {
            released += 1;
        }
        while first_live < released && dispatched[first_live] {
            first_live += 1;
        }

        if first_live == released {
            // Machine idles until the next release
            time = jobs[pending[released]].release;
            trace!("idle until {time}");
            continue;
        }

        let mut selected = first_live;
        for slot in first_live + 1..released {
            if !dispatched[slot] && jobs[pending[slot]].tail() > jobs[pending[selected]].tail() {
                selected = slot;
            }
        }

        dispatched[selected] = true;
        let job = &jobs[pending[selected]];
        time += job.processing;
        order.push(job.id);

        trace!("t={time}: dispatched job {} (tail {})", job.id, job.tail());
    }

    Permutation::new_unchecked(order)
}

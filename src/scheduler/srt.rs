use super::{Scheduler, Simulation};
use std::{cmp::Reverse, collections::BinaryHeap};

/// Preemptive shortest-remaining-time. Every time unit the arrived process
/// with the least remaining time runs for one unit; idle stretches are
/// skipped in one step.
///
/// The ready set is a min-heap keyed on `(remaining, insertion)`, where
/// `insertion` grows with every push, so equal remaining times are served
/// first-inserted-first.
#[derive(Debug, Default)]
pub struct SrtScheduler {
    ready: BinaryHeap<Reverse<(u32, u64, usize)>>,
    insertions: u64,
}

impl SrtScheduler {
    pub fn new() -> Self {
        Self {
            ready: BinaryHeap::new(),
            insertions: 0,
        }
    }

    fn push_ready(&mut self, remaining: u32, index: usize) {
        self.ready.push(Reverse((remaining, self.insertions, index)));
        self.insertions += 1;
    }

    fn pop_ready(&mut self) -> Option<usize> {
        self.ready.pop().map(|Reverse((_, _, index))| index)
    }

    fn admit_arrivals(&mut self, sim: &Simulation, admitted: &mut [bool]) {
        for (index, process) in sim.processes().iter().enumerate() {
            if !admitted[index] && sim.clock().has_reached(process.arrival()) {
                admitted[index] = true;
                log::trace!("{} admitted {}", sim.clock(), process.id());
                self.push_ready(process.remaining(), index);
            }
        }
    }

    /// Earliest arrival among processes not yet admitted. With nothing ready
    /// the CPU idles straight to it; stepping unit by unit gives the same
    /// schedule.
    fn next_arrival(sim: &Simulation, admitted: &[bool]) -> Option<u64> {
        sim.processes()
            .iter()
            .zip(admitted)
            .filter(|(_, admitted)| !**admitted)
            .map(|(process, _)| u64::from(process.arrival()))
            .min()
    }
}

impl Scheduler for SrtScheduler {
    const NAME: &'static str = "Shortest-Remaining-Time";

    fn schedule(&mut self, sim: &mut Simulation) {
        self.ready.clear();
        let mut admitted = vec![false; sim.processes().len()];
        let mut last: Option<usize> = None;

        while !sim.is_done() {
            self.admit_arrivals(sim, &mut admitted);

            let Some(index) = self.pop_ready() else {
                match Self::next_arrival(sim, &admitted) {
                    Some(arrival) => sim.idle(arrival - sim.now()),
                    None => break,
                }
                continue;
            };

            if let Some(previous) = last.filter(|&previous| previous != index) {
                if !sim.process(previous).is_complete() {
                    log::debug!(
                        "t={} {} preempts {}",
                        sim.now(),
                        sim.process(index).id(),
                        sim.process(previous).id()
                    );
                }
            }
            last = Some(index);

            if !sim.execute(index, 1) {
                self.push_ready(sim.process(index).remaining(), index);
            }
        }
    }
}

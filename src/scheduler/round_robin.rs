use super::{Scheduler, SchedulerError, Simulation};
use std::collections::VecDeque;

/// Rotates through the processes in input order, giving each at most
/// `quantum` units per turn. Every process is treated as available from
/// time zero.
#[derive(Debug)]
pub struct RoundRobinScheduler {
    quantum: u32,
    queue: VecDeque<usize>,
}

impl RoundRobinScheduler {
    pub const DEFAULT_QUANTUM: u32 = 2;

    pub fn new(quantum: u32) -> Result<Self, SchedulerError> {
        if quantum == 0 {
            return Err(SchedulerError::InvalidQuantum(quantum));
        }

        Ok(Self {
            quantum,
            queue: VecDeque::new(),
        })
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin";

    fn schedule(&mut self, sim: &mut Simulation) {
        self.queue = (0..sim.processes().len()).collect();

        while let Some(index) = self.queue.pop_front() {
            log::debug!(
                "t={} dispatching {} ({} remaining, quantum {})",
                sim.now(),
                sim.process(index).id(),
                sim.process(index).remaining(),
                self.quantum
            );

            if !sim.execute(index, self.quantum) {
                self.queue.push_back(index);
            }
        }
    }
}

use super::{fcfs::run_in_order, Scheduler, Simulation};

/// Non-preemptive shortest-job-first over the whole set: jobs are sorted by
/// burst time up front (input order kept among equal bursts) and then run
/// back to back. Arrival times play no part in the ordering.
#[derive(Debug, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    pub fn new() -> Self {
        SjfScheduler
    }
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "Shortest-Job-First";

    fn schedule(&mut self, sim: &mut Simulation) {
        let mut order: Vec<usize> = (0..sim.processes().len()).collect();
        order.sort_by_key(|&index| sim.process(index).burst());
        run_in_order(sim, &order);
    }
}

/// Non-preemptive shortest-job-first that only considers processes which
/// have already arrived each time the CPU frees up.
#[derive(Debug, Default)]
pub struct ArrivalAwareSjfScheduler;

impl ArrivalAwareSjfScheduler {
    pub fn new() -> Self {
        ArrivalAwareSjfScheduler
    }

    fn next_job(sim: &Simulation) -> Option<usize> {
        sim.processes()
            .iter()
            .enumerate()
            .filter(|(_, process)| {
                !process.is_complete() && sim.clock().has_reached(process.arrival())
            })
            .min_by_key(|&(index, process)| (process.burst(), index))
            .map(|(index, _)| index)
    }

    fn next_arrival(sim: &Simulation) -> Option<u64> {
        sim.processes()
            .iter()
            .filter(|process| !process.is_complete())
            .map(|process| u64::from(process.arrival()))
            .min()
    }
}

impl Scheduler for ArrivalAwareSjfScheduler {
    const NAME: &'static str = "Shortest-Job-First (arrival-aware)";

    fn schedule(&mut self, sim: &mut Simulation) {
        while !sim.is_done() {
            match Self::next_job(sim) {
                Some(index) => {
                    let burst = sim.process(index).burst();
                    log::debug!("t={} dispatching {}", sim.now(), sim.process(index).id());
                    sim.execute(index, burst);
                }
                None => match Self::next_arrival(sim) {
                    Some(arrival) => sim.idle(arrival - sim.now()),
                    None => break,
                },
            }
        }
    }
}

use super::{Scheduler, Simulation};

/// Runs each process to completion in the order given, without looking at
/// arrival times. A process listed before it arrives starts early and ends
/// up with a negative waiting time.
#[derive(Debug, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    pub fn new() -> Self {
        FcfsScheduler
    }
}

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "First-Come, First-Served";

    fn schedule(&mut self, sim: &mut Simulation) {
        let order: Vec<usize> = (0..sim.processes().len()).collect();
        run_in_order(sim, &order);
    }
}

/// The linear pass shared by the non-preemptive policies.
pub(super) fn run_in_order(sim: &mut Simulation, order: &[usize]) {
    for &index in order {
        let burst = sim.process(index).burst();
        log::debug!("t={} dispatching {}", sim.now(), sim.process(index).id());
        sim.execute(index, burst);
    }
}

/// First-come, first-served by actual arrival: processes are taken in
/// ascending arrival order (input order among equal arrivals) and the CPU
/// idles until the next one arrives.
#[derive(Debug, Default)]
pub struct ArrivalAwareFcfsScheduler;

impl ArrivalAwareFcfsScheduler {
    pub fn new() -> Self {
        ArrivalAwareFcfsScheduler
    }
}

impl Scheduler for ArrivalAwareFcfsScheduler {
    const NAME: &'static str = "First-Come, First-Served (arrival-aware)";

    fn schedule(&mut self, sim: &mut Simulation) {
        let mut order: Vec<usize> = (0..sim.processes().len()).collect();
        order.sort_by_key(|&index| sim.process(index).arrival());

        for index in order {
            let arrival = u64::from(sim.process(index).arrival());
            if arrival > sim.now() {
                sim.idle(arrival - sim.now());
            }
            let burst = sim.process(index).burst();
            sim.execute(index, burst);
        }
    }
}

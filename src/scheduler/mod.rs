mod aggregate;
mod clock;
mod error;
mod fcfs;
mod policy;
mod process;
mod round_robin;
mod simulation;
mod sjf;
mod srt;

pub use aggregate::{compute_averages, Averages};
pub use clock::SimClock;
pub use error::SchedulerError;
pub use fcfs::{ArrivalAwareFcfsScheduler, FcfsScheduler};
pub use policy::Policy;
pub use process::{validate, Process, ProcessResult, ProcessSpec};
pub use round_robin::RoundRobinScheduler;
pub use simulation::{Schedule, Simulation, Slice};
pub use sjf::{ArrivalAwareSjfScheduler, SjfScheduler};
pub use srt::SrtScheduler;

/// A scheduling discipline. Implementations decide which process runs next
/// and for how long; the [`Simulation`] keeps the clock and the accounting.
pub trait Scheduler {
    const NAME: &'static str;

    /// Drives `sim` until every process has completed.
    fn schedule(&mut self, sim: &mut Simulation);
}

/// Validates `specs` and runs them under `scheduler` on a fresh copy of the
/// process set.
pub fn run<S: Scheduler>(
    mut scheduler: S,
    specs: &[ProcessSpec],
) -> Result<Schedule, SchedulerError> {
    validate(specs)?;

    let mut sim = Simulation::new(specs);
    scheduler.schedule(&mut sim);
    let schedule = sim.finish();

    log::info!(
        "{} finished {} processes at t={}",
        S::NAME,
        schedule.results.len(),
        schedule.makespan
    );
    Ok(schedule)
}

pub fn run_fcfs(specs: &[ProcessSpec]) -> Result<Schedule, SchedulerError> {
    run(FcfsScheduler::new(), specs)
}

pub fn run_fcfs_arrival_aware(specs: &[ProcessSpec]) -> Result<Schedule, SchedulerError> {
    run(ArrivalAwareFcfsScheduler::new(), specs)
}

pub fn run_sjf(specs: &[ProcessSpec]) -> Result<Schedule, SchedulerError> {
    run(SjfScheduler::new(), specs)
}

pub fn run_sjf_arrival_aware(specs: &[ProcessSpec]) -> Result<Schedule, SchedulerError> {
    run(ArrivalAwareSjfScheduler::new(), specs)
}

pub fn run_srt(specs: &[ProcessSpec]) -> Result<Schedule, SchedulerError> {
    run(SrtScheduler::new(), specs)
}

pub fn run_rr(specs: &[ProcessSpec], quantum: u32) -> Result<Schedule, SchedulerError> {
    run(RoundRobinScheduler::new(quantum)?, specs)
}

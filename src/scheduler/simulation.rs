use super::{
    aggregate::{compute_averages, Averages},
    clock::SimClock,
    process::{Process, ProcessResult, ProcessSpec},
    SchedulerError,
};

/// A stretch of the timeline. `process` is `None` while the CPU idles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub process: Option<String>,
    pub start: u64,
    pub end: u64,
}

impl Slice {
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// The outcome of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// Ordered by completion.
    pub results: Vec<ProcessResult>,
    pub total_waiting: i64,
    pub total_turnaround: i64,
    pub timeline: Vec<Slice>,
    pub makespan: u64,
}

impl Schedule {
    pub fn averages(&self) -> Result<Averages, SchedulerError> {
        compute_averages(
            self.total_waiting,
            self.total_turnaround,
            self.results.len(),
        )
    }

    pub fn result(&self, id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|result| result.id == id)
    }
}

/// State shared between a scheduling policy and the engine for one run:
/// fresh process copies, the clock and the timeline being recorded.
pub struct Simulation {
    processes: Vec<Process>,
    clock: SimClock,
    timeline: Vec<Slice>,
    completed: Vec<usize>,
}

impl Simulation {
    pub(super) fn new(specs: &[ProcessSpec]) -> Self {
        Self {
            processes: specs.iter().map(Process::new).collect(),
            clock: SimClock::new(),
            timeline: Vec::new(),
            completed: Vec::with_capacity(specs.len()),
        }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, index: usize) -> &Process {
        &self.processes[index]
    }

    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn is_done(&self) -> bool {
        self.completed.len() == self.processes.len()
    }

    /// Runs the process at `index` for up to `units`, advancing the clock by
    /// the time actually used. Returns true if the process completed.
    pub fn execute(&mut self, index: usize, units: u32) -> bool {
        let start = self.clock.now();
        let process = &mut self.processes[index];
        let used = process.run(units);
        self.clock.advance(u64::from(used));

        log::trace!(
            "{} ran {} for {} units, {} remaining",
            self.clock,
            process.id(),
            used,
            process.remaining()
        );

        let id = process.id().to_owned();
        let completed = process.is_complete();
        if completed {
            process.finalize(self.clock.now());
            self.completed.push(index);
            log::debug!("{} completed {}", self.clock, id);
        }

        self.record(Some(id), start);
        completed
    }

    /// Advances the clock with nothing running.
    pub fn idle(&mut self, units: u64) {
        let start = self.clock.now();
        self.clock.advance(units);
        self.record(None, start);
    }

    fn record(&mut self, process: Option<String>, start: u64) {
        let end = self.clock.now();
        if start == end {
            return;
        }

        match self.timeline.last_mut() {
            Some(last) if last.process == process && last.end == start => last.end = end,
            _ => self.timeline.push(Slice {
                process,
                start,
                end,
            }),
        }
    }

    pub(super) fn finish(self) -> Schedule {
        debug_assert!(self.is_done(), "simulation finished with runnable processes");

        let results: Vec<ProcessResult> = self
            .completed
            .iter()
            .filter_map(|&index| self.processes[index].result())
            .collect();

        Schedule {
            total_waiting: results.iter().map(|result| result.waiting).sum(),
            total_turnaround: results.iter().map(|result| result.turnaround).sum(),
            results,
            timeline: self.timeline,
            makespan: self.clock.now(),
        }
    }
}

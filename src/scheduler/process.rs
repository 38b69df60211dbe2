use super::SchedulerError;
use std::collections::HashSet;

/// A process as described by the caller: fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub id: String,
    pub arrival: u32,
    pub burst: u32,
}

impl ProcessSpec {
    pub fn new(id: &str, arrival: u32, burst: u32) -> Self {
        Self {
            id: id.to_owned(),
            arrival,
            burst,
        }
    }
}

/// Checks a process set before any simulation step is taken.
pub fn validate(specs: &[ProcessSpec]) -> Result<(), SchedulerError> {
    if specs.is_empty() {
        return Err(SchedulerError::EmptyProcessSet);
    }

    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(spec.id.as_str()) {
            return Err(SchedulerError::DuplicateProcessId(spec.id.clone()));
        }
        if spec.burst == 0 {
            return Err(SchedulerError::NonPositiveBurstTime(spec.id.clone()));
        }
    }
    Ok(())
}

/// The per-run record of a process. A fresh one is built from its
/// [`ProcessSpec`] for every run, so runs never share mutated state.
#[derive(Debug, Clone)]
pub struct Process {
    id: String,
    arrival: u32,
    burst: u32,
    remaining: u32,
    waiting: Option<i64>,
    turnaround: Option<i64>,
}

impl Process {
    pub fn new(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            remaining: spec.burst,
            waiting: None,
            turnaround: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrival(&self) -> u32 {
        self.arrival
    }

    pub fn burst(&self) -> u32 {
        self.burst
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Runs the process for up to `units`, returning how many it actually used.
    pub fn run(&mut self, units: u32) -> u32 {
        let used = units.min(self.remaining);
        self.remaining -= used;
        used
    }

    /// Records the completion time. Waiting time is derived from turnaround
    /// against the original burst, never the consumed one.
    pub fn finalize(&mut self, completion: u64) {
        debug_assert!(self.is_complete(), "{} finalized while runnable", self.id);
        debug_assert!(self.turnaround.is_none(), "{} finalized twice", self.id);

        let turnaround = completion as i64 - i64::from(self.arrival);
        self.turnaround = Some(turnaround);
        self.waiting = Some(turnaround - i64::from(self.burst));
    }

    pub fn result(&self) -> Option<ProcessResult> {
        Some(ProcessResult {
            id: self.id.clone(),
            arrival: self.arrival,
            burst: self.burst,
            waiting: self.waiting?,
            turnaround: self.turnaround?,
        })
    }
}

/// One output row. Waiting can be negative when a simplified policy starts a
/// process before its arrival time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub id: String,
    pub arrival: u32,
    pub burst: u32,
    pub waiting: i64,
    pub turnaround: i64,
}

use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Round Robin was asked to run with a zero quantum.
    InvalidQuantum(u32),
    EmptyProcessSet,
    DuplicateProcessId(String),
    NonPositiveBurstTime(String),
    DivisionByZero,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchedulerError::InvalidQuantum(quantum) => {
                write!(f, "invalid time quantum {quantum}, must be positive")
            }
            SchedulerError::EmptyProcessSet => write!(f, "no processes to schedule"),
            SchedulerError::DuplicateProcessId(id) => write!(f, "duplicate process id \"{id}\""),
            SchedulerError::NonPositiveBurstTime(id) => {
                write!(f, "process \"{id}\" has a burst time of zero")
            }
            SchedulerError::DivisionByZero => {
                write!(f, "cannot average over an empty process set")
            }
        }
    }
}

impl Error for SchedulerError {}

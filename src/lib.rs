//! Discrete-time simulation of classic single-CPU scheduling policies.
//!
//! A caller hands over a list of [`ProcessSpec`]s and picks a policy; every
//! run works on its own fresh copy of the processes and returns a
//! [`Schedule`] with per-process waiting and turnaround times, their totals
//! and the execution timeline.

pub mod scheduler;

pub use scheduler::{
    compute_averages, run_fcfs, run_rr, run_sjf, run_srt, Averages, Policy, ProcessResult,
    ProcessSpec, Schedule, SchedulerError,
};

use super::{
    run_fcfs, run_fcfs_arrival_aware, run_rr, run_sjf, run_sjf_arrival_aware, run_srt,
    ArrivalAwareFcfsScheduler, ArrivalAwareSjfScheduler, FcfsScheduler, ProcessSpec,
    RoundRobinScheduler, Schedule, Scheduler, SchedulerError, SjfScheduler, SrtScheduler,
};
use regex::Regex;
use std::{fmt, str::FromStr};

/// A scheduling discipline together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    FcfsArrivalAware,
    Sjf,
    SjfArrivalAware,
    Srt,
    RoundRobin { quantum: u32 },
}

impl Policy {
    /// Accepted codes: `F`, `FA`, `J`, `JA`, `S` and `R<quantum>`.
    pub const CODE_PATTERN: &'static str = r"^(?:(?P<kind>FA?|JA?|S)|R(?P<quantum>\d+))$";

    pub fn simulate(&self, specs: &[ProcessSpec]) -> Result<Schedule, SchedulerError> {
        match *self {
            Policy::Fcfs => run_fcfs(specs),
            Policy::FcfsArrivalAware => run_fcfs_arrival_aware(specs),
            Policy::Sjf => run_sjf(specs),
            Policy::SjfArrivalAware => run_sjf_arrival_aware(specs),
            Policy::Srt => run_srt(specs),
            Policy::RoundRobin { quantum } => run_rr(specs, quantum),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => FcfsScheduler::NAME,
            Policy::FcfsArrivalAware => ArrivalAwareFcfsScheduler::NAME,
            Policy::Sjf => SjfScheduler::NAME,
            Policy::SjfArrivalAware => ArrivalAwareSjfScheduler::NAME,
            Policy::Srt => SrtScheduler::NAME,
            Policy::RoundRobin { .. } => RoundRobinScheduler::NAME,
        }
    }

    pub fn code(&self) -> String {
        match self {
            Policy::Fcfs => "F".to_owned(),
            Policy::FcfsArrivalAware => "FA".to_owned(),
            Policy::Sjf => "J".to_owned(),
            Policy::SjfArrivalAware => "JA".to_owned(),
            Policy::Srt => "S".to_owned(),
            Policy::RoundRobin { quantum } => format!("R{quantum}"),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "{} (quantum {})", self.name(), quantum),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            format!(
                "invalid scheduler specification: {code}. Must be one of F, FA, J, JA, S or R<num>"
            )
        };

        let re = Regex::new(Policy::CODE_PATTERN).map_err(|err| err.to_string())?;
        let captures = re.captures(code.trim()).ok_or_else(invalid)?;

        if let Some(quantum) = captures.name("quantum") {
            let quantum: u32 = quantum.as_str().parse().map_err(|_| invalid())?;
            if quantum == 0 {
                return Err(SchedulerError::InvalidQuantum(quantum).to_string());
            }
            return Ok(Policy::RoundRobin { quantum });
        }

        match captures.name("kind").map(|kind| kind.as_str()) {
            Some("F") => Ok(Policy::Fcfs),
            Some("FA") => Ok(Policy::FcfsArrivalAware),
            Some("J") => Ok(Policy::Sjf),
            Some("JA") => Ok(Policy::SjfArrivalAware),
            Some("S") => Ok(Policy::Srt),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_codes_parse() {
        assert_eq!("F".parse::<Policy>(), Ok(Policy::Fcfs));
        assert_eq!("FA".parse::<Policy>(), Ok(Policy::FcfsArrivalAware));
        assert_eq!("J".parse::<Policy>(), Ok(Policy::Sjf));
        assert_eq!("JA".parse::<Policy>(), Ok(Policy::SjfArrivalAware));
        assert_eq!(" S ".parse::<Policy>(), Ok(Policy::Srt));
        assert_eq!("R4".parse::<Policy>(), Ok(Policy::RoundRobin { quantum: 4 }));
    }

    #[test]
    fn policy_codes_reject_garbage() {
        for code in ["", "X", "SA", "R", "R-1", "F2", "r2"] {
            assert!(code.parse::<Policy>().is_err(), "{code} should not parse");
        }
        assert!("R0".parse::<Policy>().unwrap_err().contains("quantum"));
    }

    #[test]
    fn policy_code_round_trips_through_display_names() {
        let policy = Policy::RoundRobin { quantum: 3 };
        assert_eq!(policy.code(), "R3");
        assert_eq!(policy.to_string(), "Round Robin (quantum 3)");
        assert_eq!(Policy::Srt.to_string(), "Shortest-Remaining-Time");
    }

    #[test]
    fn every_policy_keeps_turnaround_equal_to_waiting_plus_burst() {
        let specs = [
            ProcessSpec::new("P1", 0, 7),
            ProcessSpec::new("P2", 2, 4),
            ProcessSpec::new("P3", 4, 1),
            ProcessSpec::new("P4", 5, 4),
            ProcessSpec::new("P5", 1, 3),
        ];
        let policies = [
            Policy::Fcfs,
            Policy::FcfsArrivalAware,
            Policy::Sjf,
            Policy::SjfArrivalAware,
            Policy::Srt,
            Policy::RoundRobin { quantum: 1 },
            Policy::RoundRobin { quantum: 3 },
        ];

        for policy in policies {
            let schedule = policy.simulate(&specs).unwrap();
            assert_eq!(schedule.results.len(), specs.len(), "{policy}");

            for result in &schedule.results {
                assert_eq!(
                    result.turnaround,
                    result.waiting + i64::from(result.burst),
                    "{policy}: {}",
                    result.id
                );
            }

            let averages = schedule.averages().unwrap();
            let waiting: i64 = schedule.results.iter().map(|r| r.waiting).sum();
            assert!((averages.waiting - waiting as f64 / specs.len() as f64).abs() < 1e-9);

            let busy: u64 = schedule
                .timeline
                .iter()
                .filter(|slice| slice.process.is_some())
                .map(|slice| slice.duration())
                .sum();
            assert_eq!(busy, 19, "{policy}");
        }
    }

    #[test]
    fn reruns_on_the_same_input_are_identical() {
        let specs = [
            ProcessSpec::new("P1", 0, 5),
            ProcessSpec::new("P2", 1, 3),
            ProcessSpec::new("P3", 2, 3),
        ];

        for policy in [Policy::Sjf, Policy::Srt, Policy::RoundRobin { quantum: 2 }] {
            let first = policy.simulate(&specs).unwrap();
            let second = policy.simulate(&specs).unwrap();
            assert_eq!(first, second, "{policy}");
        }
    }

    #[test]
    fn every_policy_rejects_bad_input_before_running() {
        let duplicate = [ProcessSpec::new("P1", 0, 1), ProcessSpec::new("P1", 0, 2)];
        let zero_burst = [ProcessSpec::new("P1", 0, 3), ProcessSpec::new("P2", 1, 0)];
        let policies = [
            Policy::Fcfs,
            Policy::FcfsArrivalAware,
            Policy::Sjf,
            Policy::SjfArrivalAware,
            Policy::Srt,
            Policy::RoundRobin { quantum: 1 },
        ];

        for policy in policies {
            assert_eq!(policy.simulate(&[]), Err(SchedulerError::EmptyProcessSet));
            assert_eq!(
                policy.simulate(&duplicate),
                Err(SchedulerError::DuplicateProcessId("P1".to_owned())),
                "{policy}"
            );
            assert_eq!(
                policy.simulate(&zero_burst),
                Err(SchedulerError::NonPositiveBurstTime("P2".to_owned())),
                "{policy}"
            );
        }
    }
}

use super::display::DisplayTerminal;
use cpu_scheduling_sim::{Policy, ProcessSpec, Schedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Fcfs,
    Sjf,
    Srt,
    RoundRobin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    Quit,
    Select(Discipline),
    ToggleArrivalAware,
    QuantumUp,
    QuantumDown,
    None,
}

/// What the interactive view shows: the session's process list, the chosen
/// policy and the outcome of its last run.
pub struct Session {
    processes: Vec<ProcessSpec>,
    discipline: Discipline,
    quantum: u32,
    arrival_aware: bool,
    schedule: Option<Schedule>,
    status: String,
}

impl Session {
    pub fn new(processes: Vec<ProcessSpec>, quantum: u32) -> Self {
        let mut session = Self {
            processes,
            discipline: Discipline::Fcfs,
            quantum,
            arrival_aware: false,
            schedule: None,
            status: String::new(),
        };
        session.rerun();
        session
    }

    pub fn policy(&self) -> Policy {
        match (self.discipline, self.arrival_aware) {
            (Discipline::Fcfs, false) => Policy::Fcfs,
            (Discipline::Fcfs, true) => Policy::FcfsArrivalAware,
            (Discipline::Sjf, false) => Policy::Sjf,
            (Discipline::Sjf, true) => Policy::SjfArrivalAware,
            (Discipline::Srt, _) => Policy::Srt,
            (Discipline::RoundRobin, _) => Policy::RoundRobin {
                quantum: self.quantum,
            },
        }
    }

    pub fn processes(&self) -> &[ProcessSpec] {
        &self.processes
    }

    pub fn quantum(&self) -> u32 {
        self.quantum
    }

    pub fn arrival_aware(&self) -> bool {
        self.arrival_aware
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Runs the current policy from the original process list.
    fn rerun(&mut self) {
        let policy = self.policy();
        match policy.simulate(&self.processes) {
            Ok(schedule) => {
                self.status = format!("Ran {} ({})", policy, policy.code());
                self.schedule = Some(schedule);
            }
            Err(err) => {
                log::warn!("{policy}: {err}");
                self.status = format!("Error: {err}");
                self.schedule = None;
            }
        }
    }

    // Returns false if the session should end
    pub fn apply(&mut self, event: RunnerEvent) -> bool {
        match event {
            RunnerEvent::Quit => return false,
            RunnerEvent::Select(discipline) => self.discipline = discipline,
            RunnerEvent::ToggleArrivalAware => self.arrival_aware = !self.arrival_aware,
            RunnerEvent::QuantumUp => self.quantum = self.quantum.saturating_add(1),
            RunnerEvent::QuantumDown => self.quantum = self.quantum.saturating_sub(1),
            RunnerEvent::None => return true,
        }
        self.rerun();
        true
    }
}

pub struct ProcessRunner {
    terminal: DisplayTerminal,
    session: Session,
}

impl ProcessRunner {
    pub fn new(processes: Vec<ProcessSpec>, quantum: u32) -> anyhow::Result<Self> {
        let terminal = DisplayTerminal::new()?;

        Ok(Self {
            terminal,
            session: Session::new(processes, quantum),
        })
    }

    // Returns false if the program should quit
    pub fn run(&mut self) -> anyhow::Result<bool> {
        self.terminal.draw(&self.session)?;
        let event = self.terminal.get_input();
        Ok(self.session.apply(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 0, 3)],
            2,
        )
    }

    #[test]
    fn session_starts_with_fcfs() {
        let session = session();
        assert_eq!(session.policy(), Policy::Fcfs);
        assert_eq!(session.schedule().unwrap().makespan, 8);
    }

    #[test]
    fn selecting_a_policy_reruns_from_the_original_processes() {
        let mut session = session();

        assert!(session.apply(RunnerEvent::Select(Discipline::RoundRobin)));
        let rr = session.schedule().unwrap().clone();
        assert_eq!(rr.result("P2").unwrap().turnaround, 7);

        assert!(session.apply(RunnerEvent::Select(Discipline::Sjf)));
        assert!(session.apply(RunnerEvent::Select(Discipline::RoundRobin)));
        assert_eq!(session.schedule(), Some(&rr));
    }

    #[test]
    fn toggling_arrival_awareness_changes_fcfs_and_sjf_only() {
        let mut session = session();
        session.apply(RunnerEvent::ToggleArrivalAware);
        assert_eq!(session.policy(), Policy::FcfsArrivalAware);

        session.apply(RunnerEvent::Select(Discipline::Sjf));
        assert_eq!(session.policy(), Policy::SjfArrivalAware);

        session.apply(RunnerEvent::Select(Discipline::Srt));
        assert_eq!(session.policy(), Policy::Srt);
    }

    #[test]
    fn zero_quantum_is_reported_not_run() {
        let mut session = session();
        session.apply(RunnerEvent::Select(Discipline::RoundRobin));
        session.apply(RunnerEvent::QuantumDown);
        session.apply(RunnerEvent::QuantumDown);

        assert_eq!(session.quantum(), 0);
        assert!(session.schedule().is_none());
        assert!(session.status().starts_with("Error: invalid time quantum"));

        session.apply(RunnerEvent::QuantumUp);
        assert!(session.schedule().is_some());
    }

    #[test]
    fn quit_ends_the_session() {
        assert!(!session().apply(RunnerEvent::Quit));
    }
}

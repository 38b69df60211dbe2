use clap::{value_parser, Arg, ArgMatches, Command};
use cpu_scheduling_sim::{scheduler::RoundRobinScheduler, Policy};
use log::LevelFilter;
use std::path::PathBuf;

pub struct Config {
    pub input: Option<PathBuf>,
    pub policy: Option<Policy>,
    pub quantum: u32,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn command() -> Command {
        Command::new("cpu-scheduling-sim")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Simulates FCFS, SJF, SRT and Round Robin CPU scheduling")
            .arg(
                Arg::new("input")
                    .long("input")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf))
                    .help("Process list, one `id arrival burst` per line (prompts on stdin if omitted)"),
            )
            .arg(
                Arg::new("schedspec")
                    .short('s')
                    .long("schedspec")
                    .value_name("CODE")
                    .value_parser(|code: &str| code.parse::<Policy>())
                    .help("Run one policy and print a report: F, FA, J, JA, S or R<num>"),
            )
            .arg(
                Arg::new("quantum")
                    .short('q')
                    .long("quantum")
                    .value_name("UNITS")
                    .value_parser(value_parser!(u32).range(1..))
                    .help(format!(
                        "Initial Round Robin quantum for the interactive view [default: {}]",
                        RoundRobinScheduler::DEFAULT_QUANTUM
                    )),
            )
            .arg(
                Arg::new("log-level")
                    .long("log-level")
                    .value_name("LEVEL")
                    .value_parser(value_parser!(LevelFilter))
                    .default_value("warn")
                    .help("off, error, warn, info, debug or trace"),
            )
            .arg(
                Arg::new("log-file")
                    .long("log-file")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf))
                    .help("Write log lines here instead of stderr"),
            )
    }

    pub fn from_args() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            input: matches.get_one::<PathBuf>("input").cloned(),
            policy: matches.get_one::<Policy>("schedspec").copied(),
            quantum: matches
                .get_one::<u32>("quantum")
                .copied()
                .unwrap_or(RoundRobinScheduler::DEFAULT_QUANTUM),
            log_level: matches
                .get_one::<LevelFilter>("log-level")
                .copied()
                .unwrap_or(LevelFilter::Warn),
            log_file: matches.get_one::<PathBuf>("log-file").cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::command()
            .try_get_matches_from(args)
            .map(|matches| Config::from_matches(&matches))
    }

    #[test]
    fn defaults_to_the_interactive_view() {
        let config = parse(&["cpu-scheduling-sim"]).unwrap();
        assert!(config.input.is_none());
        assert!(config.policy.is_none());
        assert_eq!(config.quantum, RoundRobinScheduler::DEFAULT_QUANTUM);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn quantum_flag_overrides_the_scheduler_default() {
        let config = parse(&["cpu-scheduling-sim", "-q", "5"]).unwrap();
        assert_eq!(config.quantum, 5);

        let help = Config::command().render_help().to_string();
        assert!(help.contains(&format!(
            "[default: {}]",
            RoundRobinScheduler::DEFAULT_QUANTUM
        )));
    }

    #[test]
    fn reads_batch_options() {
        let config = parse(&[
            "cpu-scheduling-sim",
            "--input",
            "procs.txt",
            "-s",
            "R3",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("procs.txt")));
        assert_eq!(config.policy, Some(Policy::RoundRobin { quantum: 3 }));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_codes_and_quanta() {
        assert!(parse(&["cpu-scheduling-sim", "-s", "X"]).is_err());
        assert!(parse(&["cpu-scheduling-sim", "-s", "R0"]).is_err());
        assert!(parse(&["cpu-scheduling-sim", "--quantum", "0"]).is_err());
    }
}

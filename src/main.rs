mod config;
mod input;
mod logger;
mod report;
mod shell;

use anyhow::Context;
use config::Config;
use cpu_scheduling_sim::scheduler::validate;
use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use shell::ProcessRunner;
use std::io;

fn main() -> anyhow::Result<()> {
    let config = Config::from_args();
    logger::init(config.log_level, config.log_file.as_deref())?;

    let processes = match &config.input {
        Some(path) => input::read_process_file(path)?,
        None => input::prompt_processes(io::stdin().lock(), io::stdout())?,
    };
    validate(&processes).context("Rejected process list")?;
    log::info!("loaded {} processes", processes.len());

    if let Some(policy) = config.policy {
        let schedule = policy.simulate(&processes)?;
        print!("{}", report::render(&policy, &schedule)?);
        return Ok(());
    }

    execute!(io::stdout(), Clear(ClearType::All))?;

    let mut runner = ProcessRunner::new(processes, config.quantum)?;
    while runner.run()? {}
    drop(runner);

    execute!(io::stdout(), Clear(ClearType::All))?;
    println!("Exiting...");
    Ok(())
}

use anyhow::{anyhow, bail, Context};
use cpu_scheduling_sim::ProcessSpec;
use std::{
    collections::VecDeque,
    fs,
    io::{BufRead, Write},
    path::Path,
};

/// Parses one `id arrival burst` line. Blank lines and `#` comments yield `None`.
pub fn parse_process_line(line: &str) -> anyhow::Result<Option<ProcessSpec>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let (Some(id), Some(arrival), Some(burst), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        bail!("expected `id arrival burst`, got \"{line}\"");
    };

    Ok(Some(ProcessSpec {
        id: id.to_owned(),
        arrival: parse_units(arrival, "arrival time")?,
        burst: parse_units(burst, "burst time")?,
    }))
}

fn parse_units(value: &str, what: &str) -> anyhow::Result<u32> {
    value
        .parse()
        .with_context(|| format!("invalid {what} \"{value}\", expected a non-negative integer"))
}

pub fn parse_process_list(contents: &str) -> anyhow::Result<Vec<ProcessSpec>> {
    let mut processes = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if let Some(spec) =
            parse_process_line(line).with_context(|| format!("line {}", number + 1))?
        {
            processes.push(spec);
        }
    }
    Ok(processes)
}

pub fn read_process_file(path: &Path) -> anyhow::Result<Vec<ProcessSpec>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    parse_process_list(&contents).with_context(|| format!("in {}", path.display()))
}

/// Whitespace-separated tokens pulled from a reader line by line, so answers
/// may be given on one line or spread over several.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(anyhow!("unexpected end of input"));
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Asks for the process count and then each process, the way an operator
/// would type them at a terminal.
pub fn prompt_processes<R, W>(reader: R, mut writer: W) -> anyhow::Result<Vec<ProcessSpec>>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = Tokens::new(reader);

    write!(writer, "Enter number of processes: ")?;
    writer.flush()?;
    let count: usize = tokens
        .next_token()?
        .parse()
        .context("the number of processes must be a non-negative integer")?;

    let mut processes = Vec::with_capacity(count);
    for number in 1..=count {
        write!(
            writer,
            "Enter PID, Arrival Time, and Burst Time for Process {number}: "
        )?;
        writer.flush()?;

        let id = tokens.next_token()?;
        let arrival = parse_units(&tokens.next_token()?, "arrival time")?;
        let burst = parse_units(&tokens.next_token()?, "burst time")?;
        processes.push(ProcessSpec { id, arrival, burst });
    }
    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_lines_and_skips_comments() {
        let processes = parse_process_list("# id arrival burst\nP1 0 5\n\n  P2 1 3  # late\n")
            .unwrap();
        assert_eq!(
            processes,
            vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 1, 3)]
        );
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse_process_list("P1 0 5\nP2 x 3\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));

        assert!(parse_process_line("P1 0").is_err());
        assert!(parse_process_line("P1 0 5 7").is_err());
        assert!(parse_process_line("P1 -1 5").is_err());
    }

    #[test]
    fn prompts_for_each_process() {
        let input = Cursor::new("2\nP1 0 5\nP2\n1 3\n");
        let mut output = Vec::new();

        let processes = prompt_processes(input, &mut output).unwrap();
        assert_eq!(
            processes,
            vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 1, 3)]
        );

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Enter number of processes: "));
        assert!(output.contains("for Process 2: "));
    }

    #[test]
    fn prompt_fails_on_truncated_input() {
        let input = Cursor::new("2\nP1 0 5\n");
        assert!(prompt_processes(input, Vec::new()).is_err());
    }
}

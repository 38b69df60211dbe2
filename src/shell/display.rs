use super::runner::{Discipline, RunnerEvent, Session};
use crate::report::render_timeline;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
    Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

const TICK_RATE: Duration = Duration::from_millis(200);

const MENU: &str =
    "1 FCFS | 2 SJF | 3 SRT | 4 RR | a arrival-aware FCFS/SJF | +/- quantum | q exit";

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new() -> Result<Self, io::Error> {
        // Set up the terminal-user-interface
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        // Raw mode last: nothing after it can fail
        if let Err(err) = crossterm::terminal::enable_raw_mode() {
            let _ = terminal.show_cursor();
            return Err(err);
        }

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = TICK_RATE
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= TICK_RATE {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Ok(Self { terminal, input_rx })
    }

    pub fn draw(&mut self, session: &Session) -> Result<(), io::Error> {
        let policy = session.policy();
        let schedule = session.schedule();
        let averages = schedule.and_then(|schedule| schedule.averages().ok());

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(4),
                    Constraint::Length(3),
                ])
                .split(f.size());

            let header = Paragraph::new(format!(
                "{} | {} processes | quantum {} | arrival-aware {}",
                policy,
                session.processes().len(),
                session.quantum(),
                if session.arrival_aware() { "on" } else { "off" },
            ))
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::LightBlue),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Policy")
                    .border_type(BorderType::Rounded),
            );

            f.render_widget(header, chunks[0]);

            let rows = schedule
                .map(|schedule| schedule.results.as_slice())
                .unwrap_or_default()
                .iter()
                .map(|result| {
                    Row::new(vec![
                        Cell::from(result.id.clone())
                            .style(Style::default().add_modifier(Modifier::BOLD)),
                        Cell::from(result.arrival.to_string()),
                        Cell::from(result.burst.to_string()),
                        Cell::from(result.waiting.to_string()),
                        Cell::from(result.turnaround.to_string()),
                    ])
                });

            let table = Table::new(rows)
                .header(
                    Row::new(vec!["PID", "Arrival", "Burst", "Waiting", "Turnaround"])
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .widths(&[
                    Constraint::Length(8),
                    Constraint::Length(8),
                    Constraint::Length(8),
                    Constraint::Length(8),
                    Constraint::Length(10),
                ])
                .block(
                    Block::default()
                        .title(format!("{} Scheduling Results", policy.name()))
                        .borders(Borders::ALL),
                )
                .style(Style::default().fg(Color::LightGreen))
                .column_spacing(1);

            f.render_widget(table, chunks[1]);

            let summary = match (schedule, averages) {
                (Some(schedule), Some(averages)) => format!(
                    "Average Waiting Time: {:.2}   Average Turnaround Time: {:.2}\n{}",
                    averages.waiting,
                    averages.turnaround,
                    render_timeline(schedule)
                ),
                _ => session.status().to_owned(),
            };
            let summary = Paragraph::new(summary)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Summary").borders(Borders::ALL));

            f.render_widget(summary, chunks[2]);

            let menu = Paragraph::new(format!("{MENU}\n{}", session.status()))
                .block(Block::default().borders(Borders::TOP));

            f.render_widget(menu, chunks[3]);
        })?;
        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // Get the user's input and return a matching event
        match self.input_rx.recv() {
            Ok(DisplayEvent::Input(key)) => key_event(key),
            Ok(DisplayEvent::Tick) => RunnerEvent::None,
            Err(_) => RunnerEvent::Quit,
        }
    }
}

fn key_event(key: KeyEvent) -> RunnerEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => RunnerEvent::Quit,
            _ => RunnerEvent::None,
        };
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char('f') => RunnerEvent::Select(Discipline::Fcfs),
        KeyCode::Char('2') | KeyCode::Char('j') => RunnerEvent::Select(Discipline::Sjf),
        KeyCode::Char('3') | KeyCode::Char('s') => RunnerEvent::Select(Discipline::Srt),
        KeyCode::Char('4') | KeyCode::Char('r') => {
            RunnerEvent::Select(Discipline::RoundRobin)
        }
        KeyCode::Char('a') => RunnerEvent::ToggleArrivalAware,
        KeyCode::Char('+') | KeyCode::Char('=') => RunnerEvent::QuantumUp,
        KeyCode::Char('-') => RunnerEvent::QuantumDown,
        KeyCode::Char('5') | KeyCode::Char('q') | KeyCode::Esc => RunnerEvent::Quit,
        _ => RunnerEvent::None,
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn keys_map_to_runner_events() {
        assert_eq!(
            key_event(key(KeyCode::Char('3'), KeyModifiers::NONE)),
            RunnerEvent::Select(Discipline::Srt)
        );
        assert_eq!(
            key_event(key(KeyCode::Char('r'), KeyModifiers::NONE)),
            RunnerEvent::Select(Discipline::RoundRobin)
        );
        assert_eq!(
            key_event(key(KeyCode::Char('='), KeyModifiers::NONE)),
            RunnerEvent::QuantumUp
        );
        assert_eq!(
            key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            RunnerEvent::Quit
        );
        assert_eq!(
            key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            RunnerEvent::None
        );
    }

    #[test]
    fn only_ctrl_c_is_honoured_with_control_held() {
        assert_eq!(
            key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            RunnerEvent::Quit
        );
        assert_eq!(
            key_event(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            RunnerEvent::None
        );
    }
}

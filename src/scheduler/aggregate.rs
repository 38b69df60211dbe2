use super::SchedulerError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub waiting: f64,
    pub turnaround: f64,
}

/// Averages waiting and turnaround time over `count` processes.
pub fn compute_averages(
    total_waiting: i64,
    total_turnaround: i64,
    count: usize,
) -> Result<Averages, SchedulerError> {
    if count == 0 {
        return Err(SchedulerError::DivisionByZero);
    }

    let count = count as f64;
    Ok(Averages {
        waiting: total_waiting as f64 / count,
        turnaround: total_turnaround as f64 / count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_divide_totals_by_count() {
        let averages = compute_averages(4, 12, 2).unwrap();
        assert_eq!(averages.waiting, 2.0);
        assert_eq!(averages.turnaround, 6.0);
    }

    #[test]
    fn averages_keep_fractions() {
        let averages = compute_averages(5, 10, 4).unwrap();
        assert_eq!(averages.waiting, 1.25);
        assert_eq!(averages.turnaround, 2.5);
    }

    #[test]
    fn averages_over_nothing_fail() {
        assert_eq!(
            compute_averages(0, 0, 0),
            Err(SchedulerError::DivisionByZero)
        );
    }
}

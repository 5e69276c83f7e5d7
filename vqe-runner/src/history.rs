use serde::Serialize;

/// Append-only record of (evaluation count, energy) samples collected
/// during one solver run, in callback-invocation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnergyHistory {
    samples: Vec<(u64, f64)>,
}

impl EnergyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, eval_count: u64, energy: f64) {
        self.samples.push((eval_count, energy));
    }

    pub fn samples(&self) -> &[(u64, f64)] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<(u64, f64)> {
        self.samples.last().copied()
    }

    pub fn max_eval_count(&self) -> Option<u64> {
        self.samples.iter().map(|&(c, _)| c).max()
    }

    pub fn min_energy(&self) -> Option<f64> {
        self.samples.iter().map(|&(_, e)| e).reduce(f64::min)
    }

    pub fn max_energy(&self) -> Option<f64> {
        self.samples.iter().map(|&(_, e)| e).reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_accumulates_in_order() {
        let mut history = EnergyHistory::new();
        history.push(1, -0.5);
        history.push(2, -0.7);
        history.push(3, -0.6);
        assert_eq!(history.len(), 3);
        assert_eq!(history.samples(), &[(1, -0.5), (2, -0.7), (3, -0.6)]);
        assert_eq!(history.last(), Some((3, -0.6)));
        assert_eq!(history.max_eval_count(), Some(3));
        assert_eq!(history.min_energy(), Some(-0.7));
        assert_eq!(history.max_energy(), Some(-0.5));
    }

    #[test]
    fn test_empty_history() {
        let history = EnergyHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.max_eval_count(), None);
        assert_eq!(history.min_energy(), None);
    }
}

//! Ordered run history.

/// The ordered states visited by a run.
///
/// Index `i` holds the state after iteration `i`; index 0 is the initial
/// state, so a run that executed `n` iterations has a trajectory of
/// length `n + 1`. Runners append while they own the trajectory; once a
/// result is returned it is read-only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    thetas: Vec<f64>,
    energies: Vec<f64>,
}

impl Trajectory {
    /// Starts a trajectory at the initial state, reserving room for
    /// `steps` further entries.
    pub(crate) fn start(theta: f64, energy: f64, steps: usize) -> Self {
        let mut thetas = Vec::with_capacity(steps.saturating_add(1));
        let mut energies = Vec::with_capacity(steps.saturating_add(1));
        thetas.push(theta);
        energies.push(energy);
        Self { thetas, energies }
    }

    pub(crate) fn push(&mut self, theta: f64, energy: f64) {
        self.thetas.push(theta);
        self.energies.push(energy);
    }

    /// Number of recorded states (iterations executed + 1).
    pub fn len(&self) -> usize {
        self.thetas.len()
    }

    /// Always `false`: a trajectory holds at least its initial state.
    pub fn is_empty(&self) -> bool {
        self.thetas.is_empty()
    }

    /// Number of iterations the run executed.
    pub fn steps(&self) -> usize {
        self.len() - 1
    }

    /// The visited `theta` values in order.
    pub fn thetas(&self) -> &[f64] {
        &self.thetas
    }

    /// `H(theta)` for each visited state, aligned with [`thetas`](Self::thetas).
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    /// The state at iteration `index`.
    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.thetas.get(index)?, *self.energies.get(index)?))
    }

    /// The initial state.
    pub fn first(&self) -> (f64, f64) {
        (self.thetas[0], self.energies[0])
    }

    /// The final state.
    pub fn last(&self) -> (f64, f64) {
        let i = self.len() - 1;
        (self.thetas[i], self.energies[i])
    }

    /// Iterates over `(theta, H(theta))` pairs in visiting order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.thetas
            .iter()
            .copied()
            .zip(self.energies.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_has_one_state() {
        let t = Trajectory::start(0.5, -1.0, 10);
        assert_eq!(t.len(), 1);
        assert_eq!(t.steps(), 0);
        assert!(!t.is_empty());
        assert_eq!(t.first(), t.last());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut t = Trajectory::start(0.0, 0.0, 2);
        t.push(1.0, 10.0);
        t.push(2.0, 20.0);
        assert_eq!(t.thetas(), &[0.0, 1.0, 2.0]);
        assert_eq!(t.energies(), &[0.0, 10.0, 20.0]);
        assert_eq!(t.get(1), Some((1.0, 10.0)));
        assert_eq!(t.get(3), None);
        assert_eq!(t.last(), (2.0, 20.0));
        let pairs: Vec<_> = t.iter().collect();
        assert_eq!(pairs, vec![(0.0, 0.0), (1.0, 10.0), (2.0, 20.0)]);
    }
}

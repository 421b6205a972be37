//! Per-generation fitness summaries.

/// Fitness summary of one generation's population.
///
/// No ordering between the three values is enforced; a well-behaved
/// log has `max >= avg >= min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessRecord {
    pub generation: u32,
    pub max_fitness: f64,
    pub avg_fitness: f64,
    pub min_fitness: f64,
}

impl FitnessRecord {
    pub fn new(generation: u32, max_fitness: f64, avg_fitness: f64, min_fitness: f64) -> Self {
        Self {
            generation,
            max_fitness,
            avg_fitness,
            min_fitness,
        }
    }

    /// Summarize a population's fitness values.
    ///
    /// Returns `None` for an empty population.
    pub fn from_population(generation: u32, fitness: &[f64]) -> Option<Self> {
        let (&first, rest) = fitness.split_first()?;
        let (mut max, mut min, mut total) = (first, first, first);
        for &value in rest {
            if value > max {
                max = value;
            }
            if value < min {
                min = value;
            }
            total += value;
        }
        Some(Self::new(generation, max, total / fitness.len() as f64, min))
    }
}

/// Fitness history of a run as four parallel sequences in log order.
///
/// Records can only be appended whole, so all four sequences always
/// have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessSeries {
    generations: Vec<u32>,
    max: Vec<f64>,
    avg: Vec<f64>,
    min: Vec<f64>,
}

impl FitnessSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            generations: Vec::with_capacity(capacity),
            max: Vec::with_capacity(capacity),
            avg: Vec::with_capacity(capacity),
            min: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: FitnessRecord) {
        self.generations.push(record.generation);
        self.max.push(record.max_fitness);
        self.avg.push(record.avg_fitness);
        self.min.push(record.min_fitness);
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn generations(&self) -> &[u32] {
        &self.generations
    }

    pub fn max(&self) -> &[f64] {
        &self.max
    }

    pub fn avg(&self) -> &[f64] {
        &self.avg
    }

    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Row `index` reassembled as a record.
    pub fn get(&self, index: usize) -> Option<FitnessRecord> {
        Some(FitnessRecord::new(
            *self.generations.get(index)?,
            self.max[index],
            self.avg[index],
            self.min[index],
        ))
    }

    pub fn records(&self) -> impl Iterator<Item = FitnessRecord> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl FromIterator<FitnessRecord> for FitnessSeries {
    fn from_iter<I: IntoIterator<Item = FitnessRecord>>(iter: I) -> Self {
        let mut series = FitnessSeries::new();
        series.extend(iter);
        series
    }
}

impl Extend<FitnessRecord> for FitnessSeries {
    fn extend<I: IntoIterator<Item = FitnessRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_summary() {
        let record = FitnessRecord::from_population(3, &[2.0, 10.0, 6.0]).unwrap();
        assert_eq!(record.generation, 3);
        assert_eq!(record.max_fitness, 10.0);
        assert_eq!(record.min_fitness, 2.0);
        assert!((record.avg_fitness - 6.0).abs() < 1e-12);
    }

    #[test]
    fn empty_population_has_no_summary() {
        assert!(FitnessRecord::from_population(0, &[]).is_none());
    }

    #[test]
    fn series_keeps_sequences_aligned() {
        let series: FitnessSeries = vec![
            FitnessRecord::new(0, 10.0, 6.0, 2.0),
            FitnessRecord::new(1, 12.0, 7.5, 3.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(series.len(), 2);
        assert_eq!(series.generations(), &[0, 1]);
        assert_eq!(series.max(), &[10.0, 12.0]);
        assert_eq!(series.avg(), &[6.0, 7.5]);
        assert_eq!(series.min(), &[2.0, 3.0]);
        assert_eq!(series.get(1), Some(FitnessRecord::new(1, 12.0, 7.5, 3.0)));
        assert_eq!(series.get(2), None);
        assert_eq!(series.records().count(), 2);
    }
}

//! Fitness log writer.
//!
//! Produces logs in the layout the genetic algorithm writes them: a
//! `Generation,Max Fitness,Avg Fitness,Min Fitness` header, then one
//! row per generation terminated by a trailing comma.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::error::{FitplotError, FitplotResult};
use crate::reader::{AVG_FITNESS_COLUMN, GENERATION_COLUMN, MAX_FITNESS_COLUMN, MIN_FITNESS_COLUMN};
use crate::record::{FitnessRecord, FitnessSeries};

/// Header row, in the column order the GA logger uses.
pub const HEADERS: [&str; 4] = [
    GENERATION_COLUMN,
    MAX_FITNESS_COLUMN,
    AVG_FITNESS_COLUMN,
    MIN_FITNESS_COLUMN,
];

/// Appends per-generation records to a fitness log.
pub struct FitnessLogWriter<W: Write> {
    writer: csv::Writer<W>,
    path: PathBuf,
}

impl FitnessLogWriter<File> {
    /// Create (or truncate) the log at `path` and write its header.
    pub fn create(path: &Path) -> FitplotResult<Self> {
        let file = File::create(path).map_err(|e| FitplotError::io(path, e))?;
        Self::from_writer(file, path)
    }
}

impl<W: Write> FitnessLogWriter<W> {
    /// Wrap `inner` and write the header. `path` names it in errors.
    pub fn from_writer(inner: W, path: &Path) -> FitplotResult<Self> {
        let mut log = Self {
            // Rows carry one more field than the header.
            writer: WriterBuilder::new().flexible(true).from_writer(inner),
            path: path.to_path_buf(),
        };
        log.writer
            .write_record(HEADERS)
            .map_err(|e| log.csv_error(e))?;
        Ok(log)
    }

    pub fn append(&mut self, record: &FitnessRecord) -> FitplotResult<()> {
        let row = [
            record.generation.to_string(),
            format_fitness(record.max_fitness),
            format_fitness(record.avg_fitness),
            format_fitness(record.min_fitness),
            String::new(),
        ];
        self.writer
            .write_record(&row)
            .map_err(|e| self.csv_error(e))
    }

    /// Summarize `fitness` and append it. Empty populations are skipped.
    pub fn append_population(&mut self, generation: u32, fitness: &[f64]) -> FitplotResult<()> {
        match FitnessRecord::from_population(generation, fitness) {
            Some(record) => self.append(&record),
            None => Ok(()),
        }
    }

    pub fn flush(&mut self) -> FitplotResult<()> {
        self.writer
            .flush()
            .map_err(|e| FitplotError::io(&self.path, e))
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> FitplotResult<W> {
        let path = self.path;
        self.writer
            .into_inner()
            .map_err(|e| FitplotError::io(path, e.into_error()))
    }

    fn csv_error(&self, source: csv::Error) -> FitplotError {
        FitplotError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

/// Write a whole series as a fitness log at `path`.
pub fn write_fitness_log(path: &Path, series: &FitnessSeries) -> FitplotResult<()> {
    let mut log = FitnessLogWriter::create(path)?;
    for record in series.records() {
        log.append(&record)?;
    }
    log.flush()
}

// Always keep a decimal point so whole numbers read back as reals.
fn format_fitness(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_fitness_records;

    fn written(records: &[FitnessRecord]) -> String {
        let mut log = FitnessLogWriter::from_writer(Vec::new(), Path::new("mem.csv")).unwrap();
        for record in records {
            log.append(record).unwrap();
        }
        String::from_utf8(log.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn matches_ga_logger_layout() {
        let text = written(&[
            FitnessRecord::new(0, 10.0, 6.0, 2.0),
            FitnessRecord::new(1, 12.0, 7.5, 3.0),
        ]);
        assert_eq!(
            text,
            "Generation,Max Fitness,Avg Fitness,Min Fitness\n\
             0,10.0,6.0,2.0,\n\
             1,12.0,7.5,3.0,\n"
        );
    }

    #[test]
    fn reader_accepts_written_log() {
        let records = [
            FitnessRecord::new(0, 4.0, 2.25, 0.5),
            FitnessRecord::new(1, 5.0, 3.125, 1.0),
            FitnessRecord::new(2, 6.0, 4.0, 1.5),
        ];
        let text = written(&records);
        let series = read_fitness_records(text.as_bytes(), Path::new("mem.csv")).unwrap();
        assert_eq!(series.records().collect::<Vec<_>>(), records);
    }

    #[test]
    fn empty_population_writes_nothing() {
        let mut log = FitnessLogWriter::from_writer(Vec::new(), Path::new("mem.csv")).unwrap();
        log.append_population(0, &[]).unwrap();
        log.append_population(1, &[1.0, 3.0]).unwrap();
        let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("1,3.0,2.0,1.0,\n"));
    }
}

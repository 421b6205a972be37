//! Fitness log reader.
//!
//! Columns are looked up by header name, so their order in the file does
//! not matter and extra columns (including the empty trailing field the
//! GA logger emits after every row) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{FitplotError, FitplotResult};
use crate::record::{FitnessRecord, FitnessSeries};

pub const GENERATION_COLUMN: &str = "Generation";
pub const MAX_FITNESS_COLUMN: &str = "Max Fitness";
pub const AVG_FITNESS_COLUMN: &str = "Avg Fitness";
pub const MIN_FITNESS_COLUMN: &str = "Min Fitness";

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Schema {
    generation: usize,
    max: usize,
    avg: usize,
    min: usize,
}

impl Schema {
    fn from_headers(headers: &StringRecord, path: &Path) -> FitplotResult<Self> {
        // Names match exactly; the last occurrence wins when one repeats.
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
                .ok_or_else(|| FitplotError::Schema {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                })
        };
        Ok(Self {
            generation: find(GENERATION_COLUMN)?,
            max: find(MAX_FITNESS_COLUMN)?,
            avg: find(AVG_FITNESS_COLUMN)?,
            min: find(MIN_FITNESS_COLUMN)?,
        })
    }

    fn decode(&self, row: &StringRecord, path: &Path) -> FitplotResult<FitnessRecord> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        Ok(FitnessRecord {
            generation: field(row, self.generation, GENERATION_COLUMN, line, path)?,
            max_fitness: field(row, self.max, MAX_FITNESS_COLUMN, line, path)?,
            avg_fitness: field(row, self.avg, AVG_FITNESS_COLUMN, line, path)?,
            min_fitness: field(row, self.min, MIN_FITNESS_COLUMN, line, path)?,
        })
    }
}

fn field<T: FromStr>(
    row: &StringRecord,
    index: usize,
    column: &str,
    line: u64,
    path: &Path,
) -> FitplotResult<T> {
    let raw = row.get(index).unwrap_or("");
    raw.trim().parse().map_err(|_| FitplotError::Parse {
        path: path.to_path_buf(),
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Read the fitness log at `path`.
///
/// The file handle is dropped before returning, on success and on error.
pub fn read_fitness_log(path: &Path) -> FitplotResult<FitnessSeries> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FitplotError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => FitplotError::io(path, e),
    })?;
    read_fitness_records(file, path)
}

/// Read a fitness log from any reader. `source` names it in errors.
pub fn read_fitness_records<R: Read>(input: R, source: &Path) -> FitplotResult<FitnessSeries> {
    let csv_error = |e: csv::Error| FitplotError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let schema = Schema::from_headers(reader.headers().map_err(csv_error)?, source)?;

    let mut series = FitnessSeries::new();
    let mut row = StringRecord::new();
    while reader.read_record(&mut row).map_err(csv_error)? {
        series.push(schema.decode(&row, source)?);
    }

    debug!(
        "Read {} generations from {}",
        series.len(),
        source.display()
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn read(text: &str) -> FitplotResult<FitnessSeries> {
        read_fitness_records(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn reads_rows_in_order() {
        let series = read(
            "Generation,Max Fitness,Min Fitness,Avg Fitness\n\
             0,10.0,2.0,6.0\n\
             1,12.0,3.0,7.5\n",
        )
        .unwrap();

        assert_eq!(series.generations(), &[0, 1]);
        assert_eq!(series.max(), &[10.0, 12.0]);
        assert_eq!(series.min(), &[2.0, 3.0]);
        assert_eq!(series.avg(), &[6.0, 7.5]);
    }

    #[test]
    fn column_order_is_irrelevant() {
        let series = read(
            "Avg Fitness,Generation,Min Fitness,Max Fitness\n\
             6.0,0,2.0,10.0\n",
        )
        .unwrap();
        assert_eq!(series.get(0), Some(FitnessRecord::new(0, 10.0, 6.0, 2.0)));
    }

    #[test]
    fn tolerates_trailing_comma_from_ga_logger() {
        let series = read(
            "Generation,Max Fitness,Avg Fitness,Min Fitness\n\
             0,10.0,6.0,2.0,\n\
             1,12.0,7.5,3.0,\n",
        )
        .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.avg(), &[6.0, 7.5]);
    }

    #[test]
    fn header_only_yields_empty_series() {
        let series = read("Generation,Max Fitness,Min Fitness,Avg Fitness\n").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn misnamed_columns_are_a_schema_error() {
        let err = read("Generation,Max,MinFitness,AvgFitness\n0,1,2,3\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaError);
        match err {
            FitplotError::Schema { column, .. } => assert_eq!(column, MAX_FITNESS_COLUMN),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn padded_header_name_is_a_schema_error() {
        let err = read("Generation, Max Fitness,Min Fitness,Avg Fitness\n0,1,2,3\n").unwrap_err();
        match err {
            FitplotError::Schema { column, .. } => assert_eq!(column, MAX_FITNESS_COLUMN),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn repeated_header_uses_last_column() {
        let series = read(
            "Generation,Max Fitness,Min Fitness,Avg Fitness,Max Fitness\n\
             0,1.0,0.0,0.5,9.0\n",
        )
        .unwrap();
        assert_eq!(series.max(), &[9.0]);
    }

    #[test]
    fn empty_input_is_a_schema_error() {
        assert_eq!(read("").unwrap_err().kind(), ErrorKind::SchemaError);
    }

    #[test]
    fn non_numeric_cell_is_a_parse_error() {
        let err = read(
            "Generation,Max Fitness,Min Fitness,Avg Fitness\n\
             3,notanumber,1.0,2.0\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
        match err {
            FitplotError::Parse {
                line, column, value, ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, MAX_FITNESS_COLUMN);
                assert_eq!(value, "notanumber");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fractional_generation_is_a_parse_error() {
        let err = read(
            "Generation,Max Fitness,Min Fitness,Avg Fitness\n\
             1.5,1.0,1.0,1.0\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn short_row_is_a_parse_error() {
        let err = read(
            "Generation,Max Fitness,Min Fitness,Avg Fitness\n\
             0,1.0\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_fitness_log(&dir.path().join("Seed1_PopulationFitness.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}

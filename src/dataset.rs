use crate::error::{Error, Result};
use crate::record::Record;
use csv::{ReaderBuilder, StringRecord, Trim};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;

/// A labeled table with the header already split off.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Vec<String>,
    pub label: String,
    pub records: Vec<Record>,
}

fn fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_owned).collect()
}

impl Dataset {
    /// Fields are kept exactly as written; quoted fields may span lines.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(contents.as_bytes());
        let mut rows = reader.records();

        let mut header = match rows.next() {
            Some(header) => fields(&header?),
            None => return Err(Error::MissingHeader),
        };
        if header.len() < 2 {
            return Err(Error::NarrowHeader(header.len()));
        }
        let label = header.pop().unwrap_or_default();
        let width = header.len() + 1;

        let records = rows
            .map(|row| {
                let row = row?;
                if row.len() != width {
                    return Err(Error::RaggedRow {
                        line: row.position().map_or(0, |position| position.line() as usize),
                        expected: width,
                        found: row.len(),
                    });
                }
                Record::from_fields(fields(&row))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Dataset {
            features: header,
            label,
            records,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Dataset::parse(&contents)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.class.clone())
            .unique()
            .sorted()
            .collect()
    }

    pub fn label_column(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.class.as_str()).collect()
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.records.as_mut_slice().shuffle(rng);
    }

    /// Splits off the first `percent` of the rows as a training set; the rest
    /// becomes the test set. Both halves keep the header.
    pub fn split(&self, percent: f64) -> (Dataset, Dataset) {
        let training_count = (self.records.len() as f64 * (percent / 100.0)) as usize;
        let training_count = training_count.min(self.records.len());
        let (train, test) = self.records.split_at(training_count);
        let with_records = |records: &[Record]| Dataset {
            features: self.features.clone(),
            label: self.label.clone(),
            records: records.to_vec(),
        };
        (with_records(train), with_records(test))
    }
}

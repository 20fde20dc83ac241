use tracing::info;

use std::path::Path;
use std::fs::File;
use std::io::{self, BufReader};

use super::record_struct::Record;


/// A struct that reads a JSON array of movies into `Vec<Record>`.
///
/// # Example
/// ```no_run
/// use guesstree::RecordReader;
/// let records = RecordReader::default()
///     .file("movies.json")
///     .cast_limit(3)
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct RecordReader<P> {
    file: Option<P>,
    cast_limit: Option<usize>,
}


impl<P> RecordReader<P> {
    /// Keep only the first `limit` actors of each record.
    /// By default, every actor in the file is kept.
    pub fn cast_limit(mut self, limit: usize) -> Self {
        self.cast_limit = Some(limit);
        self
    }
}


impl<P> RecordReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and returns `std::io::Result<Vec<Record>>`.
    /// This method consumes `self.`
    pub fn read(self) -> io::Result<Vec<Record>> {
        let path = self.file.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "The file name for the movie dataset is not set",
            )
        })?;
        let path = path.as_ref();

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut records: Vec<Record> = serde_json::from_reader(reader)?;

        if let Some(limit) = self.cast_limit {
            records.iter_mut()
                .for_each(|record| record.truncate_cast(limit));
        }

        info!(
            path = %path.display(),
            n_records = records.len(),
            "loaded movie records"
        );
        Ok(records)
    }
}

use serde::{Serialize, Deserialize};
use serde_json::Value;

use std::io;


/// One movie of the dataset.
///
/// A `Record` is what the question tree tries to identify.
/// Every attribute family may be missing in the source file;
/// missing lists become empty and a missing or non-numeric release year
/// becomes *unknown* (`None`), never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct Record {
    title: String,
    #[serde(rename = "genre")]
    genres: Vec<String>,
    #[serde(rename = "release_year")]
    year: Option<i32>,
    actors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vote_average: Option<f64>,
}


impl Record {
    /// Construct a record that only has a title.
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            genres: Vec::new(),
            year: None,
            actors: Vec::new(),
            vote_average: None,
        }
    }


    /// Set the genres of this record.
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }


    /// Set the release year of this record.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }


    /// Set the top-billed cast of this record.
    pub fn with_actors<I, S>(mut self, actors: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        self.actors = actors.into_iter().map(Into::into).collect();
        self
    }


    /// Set the average vote of this record.
    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = Some(vote_average);
        self
    }


    /// Parse a JSON array of records held in memory.
    pub fn from_json_str(json: &str) -> io::Result<Vec<Self>> {
        let records = serde_json::from_str(json)?;
        Ok(records)
    }


    /// The label of this record.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }


    /// Genres this record belongs to.
    #[inline]
    pub fn genres(&self) -> &[String] {
        &self.genres
    }


    /// Release year, `None` if unknown.
    #[inline]
    pub fn year(&self) -> Option<i32> {
        self.year
    }


    /// Top-billed actors, in billing order.
    #[inline]
    pub fn actors(&self) -> &[String] {
        &self.actors
    }


    /// Average vote of this record, if the catalog provided one.
    #[inline]
    pub fn vote_average(&self) -> Option<f64> {
        self.vote_average
    }


    /// Keep only the first `limit` actors.
    pub(crate) fn truncate_cast(&mut self, limit: usize) {
        self.actors.truncate(limit);
    }
}


/// Wire representation of a record.
/// Every field is optional and loosely typed;
/// `From<RawRecord>` applies the defaulting rules.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    genre: Option<Vec<String>>,
    #[serde(default)]
    release_year: Option<Value>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    actors: Option<Vec<String>>,
    #[serde(default)]
    vote_average: Option<f64>,
}


impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        let year = match raw.release_year {
            Some(value) => year_from_value(&value),
            None => raw.release_date.as_deref().and_then(year_from_date),
        };

        Self {
            title: raw.title.unwrap_or_default(),
            genres: raw.genre.unwrap_or_default(),
            year,
            actors: raw.actors.unwrap_or_default(),
            vote_average: raw.vote_average,
        }
    }
}


/// Integers and all-digit strings are years.
/// Everything else (`"Unknown"`, `""`, `null`, ...) is unknown.
fn year_from_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0f64).map(|f| f as i64))
            .and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => year_from_digits(s),
        _ => None,
    }
}


/// `"2019-05-01"` -> `2019`
fn year_from_date(date: &str) -> Option<i32> {
    date.split('-').next().and_then(year_from_digits)
}


fn year_from_digits(s: &str) -> Option<i32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

//! Defines the yes/no questions the tree asks about a movie.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Record;


/// Attribute family a [`Question`] is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Membership in the genre list.
    Genre,
    /// Threshold on the release year.
    ReleaseYear,
    /// Membership in the top-billed cast.
    Actor,
}


impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Genre => "genre",
            Self::ReleaseYear => "release year",
            Self::Actor => "actor",
        };

        write!(f, "{name}")
    }
}


/// A binary predicate on a [`Record`].
///
/// The derived order compares the kind first
/// (genre < release year < actor) and then the tested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Question {
    /// `Is the movie a {genre} film?`
    Genre(String),
    /// `Was the movie released after {year}?`
    /// Movies of unknown year answer `false`.
    ReleasedAfter(i32),
    /// `Does the movie star {actor}?`
    Actor(String),
}


impl Question {
    /// Evaluate this question against `record`.
    #[inline]
    pub fn answer(&self, record: &Record) -> bool {
        match self {
            Self::Genre(genre) => record.genres().contains(genre),
            Self::ReleasedAfter(threshold) => record.year()
                .is_some_and(|year| year > *threshold),
            Self::Actor(actor) => record.actors().contains(actor),
        }
    }


    /// Returns the attribute family of this question.
    #[inline]
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Genre(_) => QuestionKind::Genre,
            Self::ReleasedAfter(_) => QuestionKind::ReleaseYear,
            Self::Actor(_) => QuestionKind::Actor,
        }
    }


    /// Returns the tested value as text.
    pub fn value(&self) -> String {
        match self {
            Self::Genre(genre) => genre.clone(),
            Self::ReleasedAfter(year) => year.to_string(),
            Self::Actor(actor) => actor.clone(),
        }
    }
}


impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Genre(genre) => write!(f, "Is the movie a {genre} film?"),
            Self::ReleasedAfter(year) => {
                write!(f, "Was the movie released after {year}?")
            },
            Self::Actor(actor) => write!(f, "Does the movie star {actor}?"),
        }
    }
}

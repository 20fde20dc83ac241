//! Enumerates candidate questions and picks the most informative one.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::fmt;
use std::borrow::Borrow;
use std::collections::HashSet;

use crate::{Question, Record};
use crate::split::{self, Score, Split};


/// Gains at or below this are rounding noise of a zero-gain split.
pub(crate) const GAIN_EPS: f64 = 1e-12;


/// Order in which candidate questions are enumerated.
///
/// When several questions reach the same information gain,
/// the one enumerated first wins, so the order fixes the tree's shape.
/// * `QuestionOrder::FirstSeen` walks the records in input order and,
///     within a record, its genres, its release year, then its actors,
///     each list in stored order.
/// * `QuestionOrder::Lexicographic` sorts the same questions by kind
///     (genre, release year, actor) and then by value.
///     The tree then does not depend on the order of the input records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionOrder {
    /// Order of first appearance.
    #[default]
    FirstSeen,
    /// Sorted by kind, then value.
    Lexicographic,
}


impl fmt::Display for QuestionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstSeen => "First seen",
            Self::Lexicographic => "Lexicographic",
        };

        write!(f, "{name}")
    }
}


/// Returns every distinct question derivable from `records`.
///
/// One genre question per distinct genre,
/// one threshold question per distinct known release year,
/// one actor question per distinct actor.
/// Records of unknown year do not produce threshold questions.
pub fn candidate_questions<R>(records: &[R], order: QuestionOrder)
    -> Vec<Question>
    where R: Borrow<Record>
{
    let mut seen = HashSet::new();
    let mut questions = Vec::new();

    let mut push = |question: Question| {
        if seen.insert(question.clone()) {
            questions.push(question);
        }
    };

    for record in records {
        let record: &Record = record.borrow();
        record.genres()
            .iter()
            .for_each(|genre| push(Question::Genre(genre.clone())));
        if let Some(year) = record.year() {
            push(Question::ReleasedAfter(year));
        }
        record.actors()
            .iter()
            .for_each(|actor| push(Question::Actor(actor.clone())));
    }

    if order == QuestionOrder::Lexicographic {
        questions.sort();
    }
    questions
}


/// Returns the question of strictly greatest information gain,
/// or `None` if no question has a gain above [`GAIN_EPS`].
///
/// Candidates are scored in parallel.
/// Among equal gains the earliest candidate in `order` wins,
/// the same result as a sequential scan that only replaces
/// the current best on a strictly greater gain.
pub fn best_split<'a, R>(records: &'a [R], order: QuestionOrder)
    -> Option<Split<'a>>
    where R: Borrow<Record> + Sync
{
    let candidates = candidate_questions(records, order);

    let best = candidates.par_iter()
        .enumerate()
        .map(|(ix, question)| {
            let (yes, no) = split::partition(records, question);
            let gain = split::information_gain(records, &yes, &no);
            (ix, Score::from(gain))
        })
        .filter(|(_, gain)| gain.0 > GAIN_EPS)
        .reduce_with(|a, b| {
            if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) { b } else { a }
        });

    let (ix, gain) = best?;
    let question = candidates.into_iter().nth(ix)?;
    let (yes, no) = split::partition(records, &question);

    Some(Split { question, yes, no, gain, })
}

//! Scores the partition of a record set induced by a question.
//!
//! Every function here is a pure function of its inputs.
//! Records are grouped by title; two records with the same title
//! are the same outcome as far as the tree is concerned.
use serde::{Serialize, Deserialize};

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::{Question, Record};


/// Score for a splitting.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Score(pub f64);


impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}


impl PartialEq for Score {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}


impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}


/// The best question for a record set together with the partition it induces.
#[derive(Debug, Clone)]
pub struct Split<'a> {
    /// The winning question.
    pub question: Question,
    /// Records answering "yes".
    pub yes: Vec<&'a Record>,
    /// Records answering "no".
    pub no: Vec<&'a Record>,
    /// Information gain of the partition, in bits.
    pub gain: Score,
}


/// Returns the Shannon entropy (bits) of the title distribution.
/// The entropy of an empty set is `0`.
///
/// Terms are summed in ascending order of title count,
/// so two sets with the same counts have bit-identical entropy.
pub fn entropy<R>(records: &[R]) -> f64
    where R: Borrow<Record>
{
    let total = records.len();
    if total == 0 { return 0f64; }

    let mut counter: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let record: &Record = record.borrow();
        *counter.entry(record.title()).or_insert(0) += 1;
    }

    let mut counts = counter.into_values().collect::<Vec<_>>();
    counts.sort_unstable();

    let total = total as f64;
    counts.into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Returns `entropy(parent) - (|yes| / |parent|) * entropy(yes)
///                         - (|no|  / |parent|) * entropy(no)`.
///
/// `yes` and `no` are assumed to partition `parent`;
/// this function does not check it.
pub fn information_gain<P, Y, N>(parent: &[P], yes: &[Y], no: &[N]) -> f64
    where P: Borrow<Record>,
          Y: Borrow<Record>,
          N: Borrow<Record>,
{
    let total = parent.len();
    if total == 0 { return 0f64; }

    let total = total as f64;
    let p_yes = yes.len() as f64 / total;
    let p_no = no.len() as f64 / total;

    let weighted = p_yes * entropy(yes) + p_no * entropy(no);
    entropy(parent) - weighted
}


/// Keep the records whose answer to `question` equals `answer`.
/// Records of unknown release year answer "no" to every year question.
pub fn filter<'a, R>(records: &'a [R], question: &Question, answer: bool)
    -> Vec<&'a Record>
    where R: Borrow<Record>
{
    records.iter()
        .map(<R as Borrow<Record>>::borrow)
        .filter(|record| question.answer(record) == answer)
        .collect()
}


/// One-pass equivalent of
/// `(filter(records, q, true), filter(records, q, false))`.
pub fn partition<'a, R>(records: &'a [R], question: &Question)
    -> (Vec<&'a Record>, Vec<&'a Record>)
    where R: Borrow<Record>
{
    records.iter()
        .map(<R as Borrow<Record>>::borrow)
        .partition(|record| question.answer(record))
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn titled(titles: &[&str]) -> Vec<Record> {
        titles.iter().map(|t| Record::new(*t)).collect()
    }

    #[test]
    fn test_entropy_of_empty_set_is_zero() {
        let records: Vec<Record> = Vec::new();
        assert_eq!(entropy(&records), 0f64);
    }

    #[test]
    fn test_entropy_is_log2_of_distinct_titles() {
        for n in 1..=16 {
            let titles = (0..n).map(|i| format!("movie {i}")).collect::<Vec<_>>();
            let records = titles.iter()
                .map(|t| Record::new(t.as_str()))
                .collect::<Vec<_>>();
            let expected = (n as f64).log2();
            let got = entropy(&records);
            assert!(
                (got - expected).abs() < TEST_TOLERANCE,
                "expected {expected}, got {got} for {n} records."
            );
        }
    }

    #[test]
    fn test_entropy_drops_with_duplicate_titles() {
        let distinct = titled(&["A", "B", "C", "D"]);
        let duplicated = titled(&["A", "A", "C", "D"]);
        assert!(entropy(&duplicated) < entropy(&distinct));

        // -(1/2)log(1/2) - 2 * (1/4)log(1/4) = 1.5
        let got = entropy(&duplicated);
        assert!((got - 1.5).abs() < TEST_TOLERANCE, "got {got}.");

        let same = titled(&["A", "A", "A"]);
        assert_eq!(entropy(&same), 0f64);
    }

    #[test]
    fn test_entropy_is_order_invariant() {
        let mut records = titled(&["A", "A", "B", "C", "C", "C", "D"]);
        let expected = entropy(&records);

        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..20 {
            records.shuffle(&mut rng);
            let got = entropy(&records);
            assert!((got - expected).abs() < TEST_TOLERANCE);
        }
    }

    #[test]
    fn test_gain_of_perfect_binary_split() {
        let records = vec![
            Record::new("A").with_genres(["Action"]),
            Record::new("B").with_genres(["Comedy"]),
        ];
        let q = Question::Genre("Action".into());
        let yes = filter(&records, &q, true);
        let no = filter(&records, &q, false);
        assert_eq!(yes.len(), 1);
        assert_eq!(no.len(), 1);

        let gain = information_gain(&records, &yes, &no);
        assert!((gain - 1f64).abs() < TEST_TOLERANCE, "got {gain}.");
    }

    #[test]
    fn test_gain_of_trivial_split_is_zero() {
        let records = vec![
            Record::new("A").with_genres(["Drama"]),
            Record::new("B").with_genres(["Drama"]),
        ];
        let q = Question::Genre("Drama".into());
        let (yes, no) = partition(&records, &q);
        assert!(no.is_empty());
        let gain = information_gain(&records, &yes, &no);
        assert!(gain.abs() < TEST_TOLERANCE, "got {gain}.");
    }

    #[test]
    fn test_gain_is_nonnegative_on_random_partitions() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["A", "B", "C", "D", "E", "F"];
        for _ in 0..500 {
            let n = rng.gen_range(1..40);
            let records = (0..n)
                .map(|_| Record::new(*pool.choose(&mut rng).unwrap()))
                .collect::<Vec<_>>();

            let mut yes = Vec::new();
            let mut no = Vec::new();
            for record in records.iter() {
                if rng.gen_bool(0.5) { yes.push(record); } else { no.push(record); }
            }

            let gain = information_gain(&records, &yes, &no);
            assert!(gain >= -TEST_TOLERANCE, "negative gain {gain}.");
        }
    }

    #[test]
    fn test_filter_routes_unknown_years_to_no() {
        let records = vec![
            Record::new("Old").with_year(1980),
            Record::new("New").with_year(2020),
            Record::new("Lost"),
        ];
        let q = Question::ReleasedAfter(1980);
        let yes = filter(&records, &q, true);
        let no = filter(&records, &q, false);

        let yes = yes.iter().map(|r| r.title()).collect::<Vec<_>>();
        let no = no.iter().map(|r| r.title()).collect::<Vec<_>>();
        assert_eq!(yes, vec!["New"]);
        assert_eq!(no, vec!["Old", "Lost"]);
    }

    #[test]
    fn test_partition_matches_filter() {
        let records = vec![
            Record::new("A").with_actors(["X", "Y"]),
            Record::new("B").with_actors(["Y"]),
            Record::new("C"),
        ];
        let q = Question::Actor("Y".into());
        let (yes, no) = partition(&records, &q);
        assert_eq!(yes, filter(&records, &q, true));
        assert_eq!(no, filter(&records, &q, false));
    }

    #[test]
    fn test_entropy_is_bit_identical_across_calls() {
        let mut records = Vec::new();
        for (i, title) in ["A", "B", "C", "D", "E", "F", "G"].iter().enumerate() {
            records.extend((0..=i).map(|_| Record::new(*title)));
        }
        let expected = entropy(&records).to_bits();
        for _ in 0..2_000 {
            assert_eq!(entropy(&records).to_bits(), expected);
        }
    }

    #[test]
    fn test_entropy_depends_only_on_counts() {
        let left = titled(&["A", "A", "A", "B", "C", "C"]);
        let right = titled(&["Z", "Y", "Y", "X", "X", "X"]);
        assert_eq!(entropy(&left).to_bits(), entropy(&right).to_bits());
    }

    #[test]
    fn test_score_ordering() {
        let lo = Score::from(0.25);
        let hi = Score::from(0.75);
        assert!(lo < hi);
        assert_eq!(hi, Score::from(0.75));
    }
}

//! Summary of a question tree against the movies it was grown from.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Record;
use super::guess_tree::GuessTree;


const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Shape of a tree and how well it identifies a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of movies replayed through the tree.
    pub n_records: usize,
    /// Number of leaves.
    pub n_leaves: usize,
    /// Number of question nodes.
    pub n_questions: usize,
    /// Largest number of questions on a path.
    pub depth: usize,
    /// Leaves that name no movie.
    pub n_not_found: usize,
    /// Movies whose own answers end at another movie's leaf.
    pub unresolved: Vec<String>,
    /// Average number of questions asked before the guess.
    pub mean_questions: f64,
}


impl TreeStats {
    pub(super) fn new(tree: &GuessTree, records: &[Record]) -> Self {
        let n_not_found = tree.answers()
            .into_iter()
            .filter(|answer| !answer.is_found())
            .count();

        let mut unresolved = Vec::new();
        let mut total_questions = 0;
        for record in records {
            let (answer, asked) = tree.trace(record);
            total_questions += asked;
            if answer.title() != Some(record.title()) {
                unresolved.push(record.title().to_string());
            }
        }

        let mean_questions = if records.is_empty() {
            0f64
        } else {
            total_questions as f64 / records.len() as f64
        };

        Self {
            n_records: records.len(),
            n_leaves: tree.leaves(),
            n_questions: tree.n_questions(),
            depth: tree.depth(),
            n_not_found,
            unresolved,
            mean_questions,
        }
    }
}


impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        let rows = [
            ("Movies", self.n_records.to_string()),
            ("Leaves", self.n_leaves.to_string()),
            ("Questions", self.n_questions.to_string()),
            ("Depth", self.depth.to_string()),
            ("Not-found leaves", self.n_not_found.to_string()),
            ("Unresolved movies", self.unresolved.len().to_string()),
            ("Mean questions", format!("{:.2}", self.mean_questions)),
        ];

        writeln!(f, "{header}")?;
        for (key, val) in rows {
            writeln!(
                f,
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                key.bold(),
                val.as_str().bold().green(),
            )?;
        }
        for title in self.unresolved.iter() {
            writeln!(f, "    - {}", title.as_str().yellow())?;
        }
        write!(f, "{:=^FULL_WIDTH$}", "")
    }
}

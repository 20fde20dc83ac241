mod common;

use guesstree::prelude::*;

use std::io;
use std::path::PathBuf;

fn find<'a>(records: &'a [Record], title: &str) -> &'a Record {
    records.iter()
        .find(|r| r.title() == title)
        .unwrap_or_else(|| panic!("{title} is in the dataset"))
}

#[test]
fn reads_the_dataset() {
    common::init_test_logging();
    let records = common::movies();
    assert_eq!(records.len(), 10);

    let heat = find(&records, "Heat");
    assert_eq!(heat.genres(), ["Crime", "Drama", "Action"]);
    assert_eq!(heat.year(), Some(1995));
    assert_eq!(heat.actors().len(), 3);
    assert_eq!(heat.vote_average(), Some(7.9));
}

#[test]
fn applies_defaulting_rules() {
    let records = common::movies();

    // Year from `release_date` when `release_year` is absent.
    assert_eq!(find(&records, "Cast Away").year(), Some(2000));
    // Numeric year.
    assert_eq!(find(&records, "Arrival").year(), Some(2016));
    // "Unknown" is not zero.
    assert_eq!(find(&records, "Lost Reel").year(), None);

    let untitled = find(&records, "Untitled Project");
    assert!(untitled.actors().is_empty());
    assert_eq!(untitled.year(), None);
    assert_eq!(untitled.vote_average(), None);
}

#[test]
fn cast_limit_keeps_top_billed_prefix() {
    let records = RecordReader::default()
        .file(common::dataset_path())
        .cast_limit(2)
        .read()
        .unwrap();

    let irishman = find(&records, "The Irishman");
    assert_eq!(irishman.actors(), ["Robert De Niro", "Al Pacino"]);
    assert!(records.iter().all(|r| r.actors().len() <= 2));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = RecordReader::default()
        .file("tests/dataset/does_not_exist.json")
        .read()
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn unset_file_is_invalid_input() {
    let err = RecordReader::<PathBuf>::default()
        .read()
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}

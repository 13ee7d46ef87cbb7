//! Divisibility labeling for the classic fizzbuzz exercise. The mapping is
//! rebuilt on every call so the result is owned entirely by the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label assigned to an integer by its divisibility by 3 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "fizzbuzz")]
    FizzBuzz,
    #[serde(rename = "fizz")]
    Fizz,
    #[serde(rename = "buzz")]
    Buzz,
    #[serde(rename = "")]
    Blank,
}

impl Label {
    /// Classifies a single integer. The combined case is matched first so the
    /// remaining arms never overlap.
    pub fn for_value(value: i64) -> Self {
        match (value % 3 == 0, value % 5 == 0) {
            (true, true) => Label::FizzBuzz,
            (true, false) => Label::Fizz,
            (false, true) => Label::Buzz,
            (false, false) => Label::Blank,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::FizzBuzz => "fizzbuzz",
            Label::Fizz => "fizz",
            Label::Buzz => "buzz",
            Label::Blank => "",
        }
    }
}

/// Builds the fizzbuzz mapping for every integer from 1 through `max_count`
/// in ascending order. A bound of zero or below yields an empty map.
pub fn fizzbuzz(max_count: i64) -> BTreeMap<i64, String> {
    let mut data = BTreeMap::new();
    for i in 1..=max_count {
        data.insert(i, Label::for_value(i).as_str().to_string());
    }
    data
}

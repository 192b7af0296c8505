//! Lease start and end dates.
//!
//! Templated sentences pair every commencement word with every expiry
//! word around the same two dates; real contract phrases follow.

use crate::example::{EntityAnnotation, RawExample, TrainingExample};
use crate::labels::{DATE, END_DATE, ORG, START_DATE};

pub const START_WORDS: &[&str] = &[
    "beginning",
    "commencement",
    "inception",
    "initiation",
    "onset",
    "outset",
    "starting",
];

pub const END_WORDS: &[&str] = &[
    "cessation",
    "closure",
    "conclusion",
    "completion",
    "ending",
    "expiration",
    "finish",
    "stopping",
    "termination",
];

const TEMPLATE_START: &str = "Jan 4, 2019";
const TEMPLATE_END: &str = "June 14, 2034";

/// `"the {start} will be on Jan 4, 2019 and the {end} will be on June 14, 2034"`
/// for every start and end word, in table order.
pub fn template_examples() -> Vec<TrainingExample> {
    let mut examples = Vec::with_capacity(START_WORDS.len() * END_WORDS.len());
    for start_word in START_WORDS {
        for end_word in END_WORDS {
            let head = format!("the {start_word} will be on ");
            let middle = format!(" and the {end_word} will be on ");

            let start = head.chars().count();
            let start_end = start + TEMPLATE_START.chars().count();
            let end = start_end + middle.chars().count();
            let end_end = end + TEMPLATE_END.chars().count();

            examples.push(TrainingExample::new(
                format!("{head}{TEMPLATE_START}{middle}{TEMPLATE_END}"),
                vec![
                    EntityAnnotation::new(start, start_end, START_DATE),
                    EntityAnnotation::new(end, end_end, END_DATE),
                ],
            ));
        }
    }
    examples
}

pub static CONTRACT_EXAMPLES: &[RawExample] = &[
    (
        "The commencement date of the rental shall be February 1, 2012 and shall expire on January 31, 2022 unless",
        &[(45, 61, START_DATE), (82, 98, END_DATE)],
    ),
    (
        "The commencement date of the rental shall be October 21, 2002 and shall expire on December 31, 2022 unless",
        &[(45, 61, START_DATE), (82, 99, END_DATE)],
    ),
    (
        "the initial term of this lease shall be for sixty months beginning on October 1, 2015 (the \"Initial Term\") together with",
        &[(44, 56, DATE), (70, 85, START_DATE)],
    ),
    (
        "the initial term of this lease shall be for eighty months beginning on June 23, 2025 (the \"Initial Term\") together with",
        &[(44, 57, DATE), (71, 84, START_DATE)],
    ),
    (
        "THIS COMMERCIAL LEASE AGREEMENT is made and entered into effective starting February 1, 2012 until January 31, 2013, by and between FRONTAGE ROAD COMMERCIAL PROPERTIES, LLC,",
        &[(76, 92, START_DATE), (99, 115, END_DATE), (132, 172, ORG)],
    ),
    ("the contract begins on June 6, 2019", &[(23, 35, START_DATE)]),
    ("parties terminate the of January 14, 2011", &[(25, 41, END_DATE)]),
    ("and that it is terminated on January 31, 2012", &[(29, 45, END_DATE)]),
    ("and it will be expiring on January 31, 2017", &[(27, 43, END_DATE)]),
    ("and end on January 31, 2018, with the successive optional", &[(11, 27, END_DATE)]),
    ("and ending January 31, 2019, and", &[(11, 27, END_DATE)]),
];

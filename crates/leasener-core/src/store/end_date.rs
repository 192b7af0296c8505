//! The `END_DATE` table: templated lease sentences plus a handful of real
//! contract phrases. Rows repeat verbatim; the repeats are kept.

use crate::example::RawExample;
use crate::labels::END_DATE;

pub static EXAMPLES: &[RawExample] = &[
    ("parties terminate the of January 14, 2011", &[(25, 41, END_DATE)]),
    (
        "the beginning will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(69, 82, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(70, 83, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(70, 83, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(70, 83, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(71, 84, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(69, 82, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(62, 75, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(60, 73, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(59, 72, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(59, 72, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(61, 74, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(61, 74, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(60, 73, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(60, 73, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(62, 75, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(62, 75, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(62, 75, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    ("consideration of the agreements hereinafter set forth", &[]),
    ("and that it is terminated on January 31, 2012", &[(29, 45, END_DATE)]),
    ("and it will be expiring on January 31, 2017", &[(27, 43, END_DATE)]),
    ("and end on January 31, 2018, with the successive optional", &[(11, 27, END_DATE)]),
    (
        "the beginning will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the beginning will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(69, 82, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(70, 83, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(70, 83, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(70, 83, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the commencement will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(71, 84, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the inception will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(68, 81, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the initiation will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(69, 82, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(62, 75, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(60, 73, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(59, 72, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(59, 72, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(61, 74, END_DATE)],
    ),
    (
        "the onset will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(61, 74, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(60, 73, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(60, 73, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(62, 75, END_DATE)],
    ),
    (
        "the outset will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the cessation will be on June 14, 2034",
        &[(65, 78, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the closure will be on June 14, 2034",
        &[(63, 76, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the conclusion will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the completion will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the ending will be on June 14, 2034",
        &[(62, 75, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the expiration will be on June 14, 2034",
        &[(66, 79, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the finish will be on June 14, 2034",
        &[(62, 75, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the stopping will be on June 14, 2034",
        &[(64, 77, END_DATE)],
    ),
    (
        "the starting will be on Jan 4, 2019 and the termination will be on June 14, 2034",
        &[(67, 80, END_DATE)],
    ),
    ("and ending January 31, 2019, and", &[(11, 27, END_DATE)]),
];

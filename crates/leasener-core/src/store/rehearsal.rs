//! Rehearsal rows: entities a general-purpose recognizer already knows,
//! taken from real lease text. Mixed into fine-tuning so the recognizer
//! keeps labelling them while it learns the lease dates.

use crate::example::RawExample;
use crate::labels::{CARDINAL, DATE, FAC, GPE, LOC, MONEY, ORG, PERSON};

pub static EXAMPLES: &[RawExample] = &[
    ("The said Lease is amended, effective September 25, 2012,", &[(37, 55, DATE)]),
    (
        "agree that the said Lease is amended, effective January 16, 2013 as follows",
        &[(48, 64, DATE)],
    ),
    ("The said Lease is amended, effective July 25, 2022,", &[(37, 50, DATE)]),
    (
        "agree that the said Lease is amended, effective March 16, 2023 as follows",
        &[(48, 62, DATE)],
    ),
    ("this lease is entered into on this 25th day of July, 2017 between", &[(35, 57, DATE)]),
    (
        "This office lease agreement (\"Lease\") is entered into and made this 21st day of November, 2018, by and between",
        &[(68, 94, DATE)],
    ),
    ("this lease is entered into on this 2nd day of August, 2027 between", &[(35, 58, DATE)]),
    (
        "This office lease agreement (\"Lease\") is entered into and made this 1st day of October, 2011, by and between",
        &[(68, 92, DATE)],
    ),
    (
        "by and between FRONTAGE ROAD COMMERCIAL PROPERTIES, LLC, with mailing address of 607 Triple Tree Road, Bozeman, Montana, 59715, hereinafter",
        &[(15, 55, ORG), (81, 101, FAC), (103, 110, GPE), (112, 119, GPE), (121, 126, CARDINAL)],
    ),
    (
        "referred to as “Landlord,” and MSU Extension, Housing & Environmental Health Program, a division of Montana State University, a state institution of higher education,",
        &[(31, 44, ORG), (100, 124, ORG)],
    ),
    (
        "Tenant shall pay Landlord a monthly rent of $1,250.00 on the first day of each month",
        &[(44, 53, MONEY)],
    ),
    ("a security deposit of $2,500.00 shall be held by Landlord", &[(22, 31, MONEY)]),
    (
        "This lease is signed by John Smith, as Landlord, and Mary Jones, as Tenant.",
        &[(24, 34, PERSON), (53, 63, PERSON)],
    ),
    (
        "the premises are located in Gallatin County near the Gallatin River",
        &[(28, 43, GPE), (49, 67, LOC)],
    ),
    (
        "Tenant shall have 2 parking spaces and 1 storage unit",
        &[(18, 19, CARDINAL), (39, 40, CARDINAL)],
    ),
    ("consideration of the agreements hereinafter set forth", &[]),
];

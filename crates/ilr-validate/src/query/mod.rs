//! Small composable predicates the rules are built from.
//!
//! Each helper answers one question about a record (is this a programme aim,
//! do these ranges overlap, what has the employer paid) so that a rule's
//! condition reads as a combination of them.

pub mod dates;
pub mod deliveries;
pub mod duplicates;
pub mod employment;
pub mod fams;
pub mod financial;

pub use dates::DateRange;
pub use deliveries::ProgrammeKey;

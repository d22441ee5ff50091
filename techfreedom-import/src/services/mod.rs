// Business logic services layer
//
// The export and import pipelines, kept separate from argument parsing so
// they can be driven from tests.

pub mod export;
pub mod import;

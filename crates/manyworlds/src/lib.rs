//! Scenario trees for behaviour-driven tests.
//!
//! An indented feature file describes a forest of scenarios: every nested
//! scenario continues from the state its ancestors set up. This crate parses
//! such a file into a [`Forest`] and flattens it into plain Gherkin, either
//! one scenario per scenario with assertions ([`FlattenMode::Strict`]) or
//! one scenario per leaf ([`FlattenMode::Relaxed`]).
//!
//! ```
//! use manyworlds::{FlattenOptions, Forest};
//!
//! let mut forest: Forest = "\
//! Scenario: View users
//! Given the following users:
//!     | Name | Status |
//!     | Ben  | Active |
//! When I go to \"Users\"
//!     Scenario: Deactivate user
//!     When I deactivate \"Ben\"
//!     Then \"Ben\" is shown as inactive
//! "
//! .parse()
//! .unwrap();
//!
//! let flat = forest.render(FlattenOptions::default());
//! assert!(flat.starts_with("Scenario: [View users] Deactivate user\n"));
//! ```

mod config;
mod datatable;
mod error;
mod flatten;
mod forest;
mod scenario;
mod step;
mod writer;

pub use manyworlds_grammar as grammar;

pub use config::{
    FLATTEN_MODE_ENV, FlattenMode, FlattenOptions, ParseOptions, StepIndentation,
    WRITE_COMMENTS_ENV,
};
pub use datatable::DataTable;
pub use error::{ConfigError, DataTableError, FlattenError, ParseError};
pub use flatten::FlatScenario;
pub use forest::Forest;
pub use scenario::{Scenario, ScenarioId};
pub use step::Step;

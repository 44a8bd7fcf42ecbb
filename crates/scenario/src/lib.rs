//! Scenario documents: an initial element plus a list of property writes,
//! replayed through [`props::PropertyReconciler`] against a [`dom::Element`].
//!
//! ```toml
//! format = "propsync-scenario-v1"
//! mode = "properties"
//!
//! [element]
//! tag = "input"
//!
//! [[steps]]
//! op = "set"
//! name = "checked"
//! value = true
//! ```

mod error;
pub mod model;
pub mod run;

pub use crate::error::ScenarioError;
pub use crate::model::{
    AttributeDef, ElementDef, GateDef, SCENARIO_FORMAT_V1, Scenario, StepDef,
};
pub use crate::run::{Op, Outcome, Step, apply_step};

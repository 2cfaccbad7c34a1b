pub mod policy;
pub mod reference;
pub mod results;
pub mod subject;
pub mod table;

use std::collections::{BTreeMap, BTreeSet};

use crate::model::subject::SubjectScalingParameters;

/// Scaling parameters keyed by subject id.
pub type ScalingLookup = BTreeMap<String, SubjectScalingParameters>;

/// Subject ids that satisfy the mandatory-subject requirement.
pub type MandatorySubjects = BTreeSet<String>;

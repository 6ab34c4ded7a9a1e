//! DataSource - Where a carrier verification decision came from

use serde::{Deserialize, Serialize};

/// Origin of the verification decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Locally held carrier directory
    #[default]
    Local,
    /// FMCSA QCMobile registry
    Fmcsa,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Local => write!(f, "local"),
            DataSource::Fmcsa => write!(f, "fmcsa"),
        }
    }
}

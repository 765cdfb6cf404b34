//! Configuration for a simulation run.

use crate::common::{FrameCapacity, Result};
use crate::sim::Policy;

/// Number of frames used when the caller does not choose one.
pub const DEFAULT_CAPACITY: usize = 3;

/// Smallest frame count a simulation accepts.
pub const MIN_CAPACITY: usize = 1;

/// Policy and frame capacity for one simulation run.
///
/// # Example
/// ```
/// use framesim::{Policy, SimConfig};
///
/// let config = SimConfig::new(Policy::Lru, 4).unwrap();
/// assert_eq!(config.capacity.get(), 4);
/// assert!(SimConfig::new(Policy::Lru, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub policy: Policy,
    pub capacity: FrameCapacity,
}

impl SimConfig {
    /// Build a config, validating the capacity.
    pub fn new(policy: Policy, capacity: usize) -> Result<Self> {
        Ok(Self {
            policy,
            capacity: FrameCapacity::new(capacity)?,
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Fifo,
            capacity: FrameCapacity::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.policy, Policy::Fifo);
        assert_eq!(config.capacity.get(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_config_rejects_zero_frames() {
        assert!(matches!(
            SimConfig::new(Policy::Optimal, 0),
            Err(Error::InvalidCapacity(0))
        ));
        assert!(SimConfig::new(Policy::Optimal, MIN_CAPACITY).is_ok());
    }
}

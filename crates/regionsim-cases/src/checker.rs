//! Completion checks for scenarios.

use regionsim_types::RegionsInfo;

/// Decides whether a scenario's goal layout has been reached.
///
/// The engine may call `check` any number of times after the scenario is
/// built, each time with the latest region layout. Implementations must not
/// rely on being called at particular ticks.
pub trait Checker: Send + Sync {
    fn check(&self, regions: &RegionsInfo) -> bool;
}

impl<F> Checker for F
where
    F: Fn(&RegionsInfo) -> bool + Send + Sync,
{
    fn check(&self, regions: &RegionsInfo) -> bool {
        self(regions)
    }
}

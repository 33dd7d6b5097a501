//! Named scenario registry.
//!
//! The registry maps scenario names to constructors. It is assembled once
//! with [`ScenarioRegistry::builder`] and is immutable afterwards, so it can
//! be shared by reference across threads and looked up without locking.

use std::collections::BTreeMap;
use std::fmt;

use crate::{Conf, RegistryError, Result};

/// A named, reproducible scenario.
///
/// `build` must return a fresh, independently owned [`Conf`] on every call.
/// Implementations must not keep mutable state between builds; each build
/// uses its own [`IdAllocator`](crate::IdAllocator).
pub trait Scenario: Send + Sync {
    /// Name used for lookup, e.g. `"balance-leader"`.
    fn name(&self) -> &'static str;

    /// One-line description of what the scenario exercises.
    fn description(&self) -> &'static str;

    /// Builds the scenario's starting configuration.
    fn build(&self) -> Conf;
}

/// Immutable mapping from scenario name to constructor.
#[derive(Default)]
pub struct ScenarioRegistry {
    scenarios: BTreeMap<&'static str, Box<dyn Scenario>>,
}

impl ScenarioRegistry {
    /// Starts an empty registry.
    pub fn builder() -> ScenarioRegistryBuilder {
        ScenarioRegistryBuilder::default()
    }

    /// Returns a registry holding every built-in scenario.
    ///
    /// Built-in names are fixed, non-empty and distinct, so this skips the
    /// builder's checks. Use [`ScenarioRegistryBuilder::with_builtins`] to
    /// mix built-ins with custom scenarios.
    pub fn builtin() -> Self {
        let scenarios = crate::scenarios::builtin()
            .into_iter()
            .map(|scenario| (scenario.name(), scenario))
            .collect();
        Self { scenarios }
    }

    /// Builds the scenario registered under `name`.
    ///
    /// Returns `None` for an unknown name. Each call runs the constructor
    /// again and returns a new, independent `Conf`.
    pub fn lookup(&self, name: &str) -> Option<Conf> {
        let Some(scenario) = self.scenarios.get(name) else {
            tracing::warn!(scenario = name, "unknown scenario");
            return None;
        };

        let conf = scenario.build();
        tracing::debug!(
            scenario = name,
            stores = conf.stores.len(),
            regions = conf.regions.len(),
            max_id = conf.max_id,
            "built scenario"
        );
        Some(conf)
    }

    /// Returns the scenario registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Scenario> {
        self.scenarios.get(name).map(|scenario| &**scenario)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scenarios.contains_key(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> Vec<&'static str> {
        self.scenarios.keys().copied().collect()
    }

    /// Iterates scenarios in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Scenario> {
        self.scenarios.values().map(|scenario| &**scenario)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl fmt::Debug for ScenarioRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioRegistry")
            .field("scenarios", &self.names())
            .finish()
    }
}

/// Collects scenarios before the registry is frozen.
#[derive(Default)]
pub struct ScenarioRegistryBuilder {
    scenarios: BTreeMap<&'static str, Box<dyn Scenario>>,
}

impl ScenarioRegistryBuilder {
    /// Adds a scenario under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyName`] for an empty name and
    /// [`RegistryError::DuplicateScenario`] if the name is taken.
    pub fn register(self, scenario: impl Scenario + 'static) -> Result<Self, RegistryError> {
        self.insert(Box::new(scenario))
    }

    /// Adds every built-in scenario.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateScenario`] if a built-in name was
    /// registered earlier.
    pub fn with_builtins(self) -> Result<Self, RegistryError> {
        crate::scenarios::builtin()
            .into_iter()
            .try_fold(self, Self::insert)
    }

    fn insert(mut self, scenario: Box<dyn Scenario>) -> Result<Self, RegistryError> {
        let name = scenario.name();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.scenarios.contains_key(name) {
            return Err(RegistryError::DuplicateScenario(name));
        }
        self.scenarios.insert(name, scenario);
        Ok(self)
    }

    /// Freezes the registry.
    pub fn build(self) -> ScenarioRegistry {
        ScenarioRegistry {
            scenarios: self.scenarios,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    use crate::IdAllocator;
    use regionsim_types::{Store, StoreId, TB};

    struct Tiny;

    impl Scenario for Tiny {
        fn name(&self) -> &'static str {
            "tiny"
        }

        fn description(&self) -> &'static str {
            "one store"
        }

        fn build(&self) -> Conf {
            let mut ids = IdAllocator::new();
            Conf {
                stores: vec![Store::new(StoreId::new(ids.next_id()), TB, TB)],
                max_id: ids.max_id(),
                ..Conf::default()
            }
        }
    }

    struct Nameless;

    impl Scenario for Nameless {
        fn name(&self) -> &'static str {
            ""
        }

        fn description(&self) -> &'static str {
            ""
        }

        fn build(&self) -> Conf {
            Conf::default()
        }
    }

    fn tiny_registry() -> ScenarioRegistry {
        ScenarioRegistry::builder().register(Tiny).unwrap().build()
    }

    #[test]
    fn lookup_builds_registered_scenario() {
        let registry = tiny_registry();
        let conf = registry.lookup("tiny").unwrap();
        assert_eq!(conf.stores.len(), 1);
        assert_eq!(conf.max_id, 1);
    }

    #[test]
    fn lookup_unknown_returns_none() {
        let registry = tiny_registry();
        assert!(registry.lookup("no-such-scenario").is_none());
        assert!(registry.get("no-such-scenario").is_none());
        assert!(!registry.contains("no-such-scenario"));
    }

    #[test]
    fn each_lookup_is_independent() {
        let registry = tiny_registry();
        let mut first = registry.lookup("tiny").unwrap();
        first.stores.clear();

        let second = registry.lookup("tiny").unwrap();
        assert_eq!(second.stores.len(), 1);
        assert_eq!(second.stores[0].id, StoreId::new(1));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let result = ScenarioRegistry::builder()
            .register(Tiny)
            .unwrap()
            .register(Tiny);
        assert!(matches!(result, Err(RegistryError::DuplicateScenario("tiny"))));
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = ScenarioRegistry::builder().register(Nameless);
        assert!(matches!(result, Err(RegistryError::EmptyName)));
    }

    #[test]
    fn empty_registry() {
        let registry = ScenarioRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
        assert!(registry.lookup("tiny").is_none());
    }

    #[test]
    fn concurrent_lookups_share_nothing() {
        let registry = Arc::new(tiny_registry());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.lookup("tiny").unwrap().max_id)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }

    #[test]
    fn builtins_pass_registration_checks() {
        let checked = ScenarioRegistry::builder().with_builtins().unwrap().build();
        assert_eq!(checked.names(), ScenarioRegistry::builtin().names());
        assert_eq!(checked.len(), crate::scenarios::builtin().len());
    }

    #[test]
    fn builtins_mix_with_custom_scenarios() {
        let registry = ScenarioRegistry::builder()
            .register(Tiny)
            .unwrap()
            .with_builtins()
            .unwrap()
            .build();

        assert!(registry.contains("tiny"));
        assert!(registry.contains("balance-leader"));
        assert_eq!(registry.len(), ScenarioRegistry::builtin().len() + 1);
    }

    #[test]
    fn builtin_name_cannot_be_taken_twice() {
        let result = ScenarioRegistry::builder()
            .register(crate::scenarios::BalanceLeader)
            .unwrap()
            .with_builtins();
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateScenario("balance-leader"))
        ));

        let result = ScenarioRegistry::builder()
            .with_builtins()
            .unwrap()
            .register(crate::scenarios::HotWrite);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateScenario("hot-write"))
        ));
    }

    #[test]
    fn debug_lists_names() {
        assert_eq!(
            format!("{:?}", tiny_registry()),
            "ScenarioRegistry { scenarios: [\"tiny\"] }"
        );
    }
}

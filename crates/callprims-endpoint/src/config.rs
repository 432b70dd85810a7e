use std::fmt;
use std::sync::Arc;

use callprims_guard::Guard;

/// Immutable configuration snapshot shared by all endpoints built from one
/// builder.
///
/// Guards are owned here and shared read-only across every call to every
/// endpoint built from this snapshot. Deriving a variant goes through
/// [`ConfigOverrides`]; snapshots are copied, never mutated in place.
#[derive(Clone, Default)]
pub struct EndpointConfig {
    /// Deployment regions handed verbatim to the hosting platform.
    pub default_regions: Vec<String>,
    /// Guard chain, invoked strictly in order.
    pub guards: Vec<Arc<dyn Guard>>,
}

impl EndpointConfig {
    pub fn new(default_regions: Vec<String>, guards: Vec<Arc<dyn Guard>>) -> Self {
        Self {
            default_regions,
            guards,
        }
    }

    /// Structural copy with the overridden fields replaced.
    pub(crate) fn apply(&self, overrides: ConfigOverrides) -> Self {
        Self {
            default_regions: overrides
                .default_regions
                .unwrap_or_else(|| self.default_regions.clone()),
            guards: overrides.guards.unwrap_or_else(|| self.guards.clone()),
        }
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("default_regions", &self.default_regions)
            .field("guards", &format_args!("<{} guards>", self.guards.len()))
            .finish()
    }
}

/// Partial override set for deriving a new configuration.
///
/// `None` fields keep the prior snapshot's value.
#[derive(Clone, Default)]
pub struct ConfigOverrides {
    pub default_regions: Option<Vec<String>>,
    pub guards: Option<Vec<Arc<dyn Guard>>>,
}

impl ConfigOverrides {
    pub fn regions(regions: Vec<String>) -> Self {
        Self {
            default_regions: Some(regions),
            ..Self::default()
        }
    }

    pub fn guards(guards: Vec<Arc<dyn Guard>>) -> Self {
        Self {
            guards: Some(guards),
            ..Self::default()
        }
    }
}

impl fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("default_regions", &self.default_regions)
            .field(
                "guards",
                &format_args!(
                    "{}",
                    match &self.guards {
                        Some(guards) => format!("<{} guards>", guards.len()),
                        None => "None".to_string(),
                    }
                ),
            )
            .finish()
    }
}

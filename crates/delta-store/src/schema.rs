//! Central schema registry for stored entity payloads.
//!
//! Schemas are built from `delta-core` types at construction time using
//! [`schemars::schema_for!`]. Validation on load is warn-only: a record that
//! fails its schema is logged and kept, permissive for forward-compat.

use std::collections::HashMap;

use schemars::schema_for;
use tracing::warn;

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

/// Store of JSON Schemas for every persisted entity type.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

impl SchemaRegistry {
    /// Build a registry containing all persisted entity schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema, which is not expected in practice.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, "user", delta_core::entities::User);
        register!(schemas, "programme", delta_core::entities::Programme);
        register!(schemas, "module", delta_core::entities::Module);
        register!(
            schemas,
            "programme_module",
            delta_core::entities::ProgrammeModule
        );
        register!(
            schemas,
            "programme_chair",
            delta_core::entities::ProgrammeChair
        );
        register!(schemas, "module_owner", delta_core::entities::ModuleOwner);
        register!(
            schemas,
            "programme_profile",
            delta_core::entities::ProgrammeProfile
        );
        register!(
            schemas,
            "programme_team_member",
            delta_core::entities::ProgrammeTeamMember
        );
        register!(
            schemas,
            "module_evaluation",
            delta_core::entities::ModuleEvaluation
        );
        register!(
            schemas,
            "module_evaluation_history",
            delta_core::entities::ModuleEvaluationHistory
        );
        register!(
            schemas,
            "programme_taking_stock",
            delta_core::entities::ProgrammeTakingStock
        );
        register!(
            schemas,
            "programme_priority",
            delta_core::entities::ProgrammePriority
        );
        register!(schemas, "priority_theme", delta_core::entities::PriorityTheme);
        register!(schemas, "smart_goal", delta_core::entities::SmartGoal);

        Self { schemas }
    }

    /// Look up a schema by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Registered schema names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas.keys().copied()
    }

    /// Validate `value` against the named schema, logging a warning per
    /// failing record. Unknown schema names warn too.
    pub fn validate_lenient(&self, name: &str, value: &serde_json::Value) {
        let Some(schema) = self.schemas.get(name) else {
            warn!(schema = name, "no schema registered for validation");
            return;
        };
        match jsonschema::validator_for(schema) {
            Ok(validator) => {
                for error in validator.iter_errors(value) {
                    warn!(
                        schema = name,
                        path = %error.instance_path,
                        error = %error,
                        "stored record fails schema validation"
                    );
                }
            }
            Err(e) => warn!(schema = name, error = %e, "schema failed to compile"),
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registers_all_persisted_entities() {
        let registry = SchemaRegistry::new();
        assert_eq!(registry.names().count(), 14);
        assert!(registry.get("module_evaluation").is_some());
        assert!(registry.get("nonsense").is_none());
    }

    #[test]
    fn valid_record_passes_silently() {
        let registry = SchemaRegistry::new();
        let value = serde_json::json!({
            "id": "own-00000001",
            "user_id": "u1",
            "module_id": "mod-00000001",
        });
        // warn-only: nothing to assert beyond not panicking
        registry.validate_lenient("module_owner", &value);
    }
}

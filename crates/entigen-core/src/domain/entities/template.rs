//! Scaffold kinds and the template rendering context.
//!
//! Templates are parametrized text skeletons, not string concatenation: a
//! body carries `{{VARIABLE}}` slots plus at most a few property-list blocks
//! bracketed by `{{#each}}` / `{{/each}}` marker lines. The block is expanded
//! once per property, in inspector order, with per-property slots filled from
//! the fixed semantic-type lookup tables. This keeps rendering a pure
//! function of (kind, descriptor, parameters), so golden-file tests can
//! assert exact output and the writer's skip/overwrite decisions stay
//! meaningful.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{entity::EntityDescriptor, params::ServiceParameters};

// ============================================================================
// Scaffold Kinds
// ============================================================================

/// One category of generated artifact.
///
/// A kind may expand to multiple files; the component set yields four
/// component sources plus a route fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Create/Update request DTOs and the response DTO (C#).
    Dto,
    /// Service interface `I<Entity>Service` (C#).
    ServiceInterface,
    /// API controller stub with a sentinel-bracketed generated block (C#).
    Controller,
    /// Angular create/detail/edit/index components plus a route fragment
    /// merged into `app.routes.ts`.
    ComponentSet,
}

impl TemplateKind {
    /// Every kind, in pipeline order.
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Dto,
        TemplateKind::ServiceInterface,
        TemplateKind::Controller,
        TemplateKind::ComponentSet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dto => "dto",
            Self::ServiceInterface => "service-interface",
            Self::Controller => "controller",
            Self::ComponentSet => "component-set",
        }
    }

    /// Kinds to generate for one invocation, honouring `--skip-components`.
    pub fn for_run(params: &ServiceParameters) -> Vec<TemplateKind> {
        Self::ALL
            .into_iter()
            .filter(|k| !(params.skip_components() && *k == TemplateKind::ComponentSet))
            .collect()
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Render Context
// ============================================================================

/// Marker line opening a property-list expansion block.
pub const EACH_OPEN: &str = "{{#each}}";
/// Marker line closing a property-list expansion block.
pub const EACH_CLOSE: &str = "{{/each}}";

/// Variable substitution context for one (entity, parameters) pair.
///
/// All entity-level variables are `SCREAMING_SNAKE_CASE`:
///
/// | Variable | Example |
/// |----------|---------|
/// | `ENTITY_PASCAL` | `SalesOrder` |
/// | `ENTITY_CAMEL` | `salesOrder` |
/// | `ENTITY_KEBAB` | `sales-order` |
/// | `ENTITY_PLURAL_PASCAL` | `SalesOrders` |
/// | `ENTITY_PLURAL_CAMEL` | `salesOrders` |
/// | `ENTITY_PLURAL_KEBAB` | `sales-orders` |
/// | `ENTITY_PLURAL_HUMAN` | `Sales Orders` |
/// | `NAMESPACE` | `Shop.Core.Data.Entities` |
/// | `CORE_PROJECT` | `Core` |
/// | `API_PROJECT` | `WebApi` |
///
/// Per-property slots, valid only inside an each-block:
/// `PROP_PASCAL`, `PROP_CAMEL`, `PROP_LABEL`, `PROP_CS_TYPE` (nullable `?`
/// included), `PROP_TS_TYPE`, `PROP_TS_OPT` (`?` or empty), `PROP_CONTROL`,
/// `PROP_REQUIRED` (`true`/`false`).
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
    properties: Vec<HashMap<String, String>>,
}

impl RenderContext {
    /// Build the context. All casing transformations happen once here;
    /// rendering afterwards is plain replacement.
    pub fn new(descriptor: &EntityDescriptor, params: &ServiceParameters) -> Self {
        let name = &descriptor.name;
        let mut vars = HashMap::new();
        vars.insert("ENTITY_PASCAL".to_string(), name.pascal().to_string());
        vars.insert("ENTITY_CAMEL".to_string(), name.camel().to_string());
        vars.insert("ENTITY_KEBAB".to_string(), name.kebab().to_string());
        vars.insert(
            "ENTITY_PLURAL_PASCAL".to_string(),
            name.plural_pascal().to_string(),
        );
        vars.insert(
            "ENTITY_PLURAL_CAMEL".to_string(),
            name.plural_camel().to_string(),
        );
        vars.insert(
            "ENTITY_PLURAL_KEBAB".to_string(),
            name.plural_kebab().to_string(),
        );
        vars.insert(
            "ENTITY_PLURAL_HUMAN".to_string(),
            name.plural_human().to_string(),
        );
        vars.insert("NAMESPACE".to_string(), params.namespace().to_string());
        vars.insert(
            "CORE_PROJECT".to_string(),
            params.core_project().to_string(),
        );
        vars.insert("API_PROJECT".to_string(), params.api_project().to_string());

        let properties = descriptor
            .properties
            .iter()
            .map(|p| {
                let mut slots = HashMap::new();
                slots.insert("PROP_PASCAL".to_string(), p.name.clone());
                slots.insert("PROP_CAMEL".to_string(), p.camel_name());
                slots.insert("PROP_LABEL".to_string(), p.label());
                slots.insert(
                    "PROP_CS_TYPE".to_string(),
                    if p.nullable {
                        format!("{}?", p.semantic.csharp_type())
                    } else {
                        p.semantic.csharp_type().to_string()
                    },
                );
                slots.insert("PROP_TS_TYPE".to_string(), p.semantic.ts_type().to_string());
                slots.insert(
                    "PROP_TS_OPT".to_string(),
                    if p.nullable { "?" } else { "" }.to_string(),
                );
                slots.insert(
                    "PROP_CONTROL".to_string(),
                    p.semantic.form_control().to_string(),
                );
                slots.insert("PROP_REQUIRED".to_string(), (!p.nullable).to_string());
                slots
            })
            .collect();

        Self {
            variables: vars,
            properties,
        }
    }

    /// Look up an entity-level variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template body: expand each-blocks, then substitute variables.
    ///
    /// Block markers must sit on their own (possibly indented) lines. The
    /// block body is repeated once per property in inspector order; unknown
    /// placeholders are left as-is rather than erroring, matching simple
    /// substitution semantics.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut lines = template.lines();

        while let Some(line) = lines.next() {
            if line.trim() == EACH_OPEN {
                // Collect block body until the close marker.
                let mut block: Vec<&str> = Vec::new();
                for inner in lines.by_ref() {
                    if inner.trim() == EACH_CLOSE {
                        break;
                    }
                    block.push(inner);
                }
                for slots in &self.properties {
                    for inner in &block {
                        out.push_str(&substitute(inner, slots, &self.variables));
                        out.push('\n');
                    }
                }
            } else {
                out.push_str(&substitute(line, &self.variables, &self.variables));
                out.push('\n');
            }
        }

        out
    }
}

/// Replace `{{KEY}}` placeholders from the primary map, then the fallback.
fn substitute(
    line: &str,
    primary: &HashMap<String, String>,
    fallback: &HashMap<String, String>,
) -> String {
    let mut result = line.to_string();
    for (key, value) in primary {
        let placeholder = format!("{{{{{key}}}}}");
        result = result.replace(&placeholder, value);
    }
    for (key, value) in fallback {
        let placeholder = format!("{{{{{key}}}}}");
        result = result.replace(&placeholder, value);
    }
    result
}

// ============================================================================
// Tests
// ============================================================================

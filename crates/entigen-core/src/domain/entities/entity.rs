//! Entity descriptors - the inspector's view of a data entity.
//!
//! An [`EntityDescriptor`] is built once per invocation from the entity model
//! file and is immutable afterward. It carries everything the renderer needs:
//! the entity name (with all casing variants derived up front), the namespace,
//! and the ordered property list with semantic type classification.
//!
//! ## Semantic types
//!
//! Generated code never sees the raw declared type. Each property is
//! classified into one of five semantic buckets, and every output kind maps
//! the bucket through its own fixed lookup table:
//!
//! | Semantic  | C# DTO     | TS model  | Form control |
//! |-----------|------------|-----------|--------------|
//! | Text      | `string`   | `string`  | `text`       |
//! | Number    | `decimal`  | `number`  | `number`     |
//! | Boolean   | `bool`     | `boolean` | `checkbox`   |
//! | Date      | `DateTime` | `Date`    | `date`       |
//! | Reference | `object`   | `any`     | `text`       |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ============================================================================
// Entity Name and Casing
// ============================================================================

/// A validated entity name with all casing variants derived at construction.
///
/// Invariant: the raw name is a safe identifier (ASCII letter first, then
/// ASCII alphanumerics or underscores). Enforced by [`EntityName::parse`];
/// there is deliberately no infallible constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityName {
    raw: String,
    pascal: String,
    camel: String,
    kebab: String,
    plural_pascal: String,
    plural_kebab: String,
    plural_camel: String,
    plural_human: String,
}

impl EntityName {
    /// Parse and validate an entity name, deriving every casing variant.
    ///
    /// # Errors
    ///
    /// `InvalidEntityName` if the name is empty, starts with a digit, or
    /// contains characters illegal in an identifier. This is checked before
    /// any file is written - see the orchestrator pipeline.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(DomainError::InvalidEntityName {
                name: raw,
                reason: "name cannot be empty".into(),
            });
        }

        let mut chars = raw.chars();
        let first = chars.next().unwrap_or('0');
        if !first.is_ascii_alphabetic() {
            return Err(DomainError::InvalidEntityName {
                name: raw.clone(),
                reason: format!("must start with a letter, found '{first}'"),
            });
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(DomainError::InvalidEntityName {
                name: raw.clone(),
                reason: format!("contains character '{bad}' illegal in an identifier"),
            });
        }

        let words = split_words(&raw);
        let plural_words = pluralize_last(&words);

        Ok(Self {
            pascal: to_pascal_case(&words),
            camel: to_camel_case(&words),
            kebab: words.join("-"),
            plural_pascal: to_pascal_case(&plural_words),
            plural_kebab: plural_words.join("-"),
            plural_camel: to_camel_case(&plural_words),
            plural_human: to_human_case(&plural_words),
            raw,
        })
    }

    /// Name exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `SalesOrder`
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// `salesOrder`
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// `sales-order`
    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    /// `SalesOrders`
    pub fn plural_pascal(&self) -> &str {
        &self.plural_pascal
    }

    /// `sales-orders`
    pub fn plural_kebab(&self) -> &str {
        &self.plural_kebab
    }

    /// `salesOrders`
    pub fn plural_camel(&self) -> &str {
        &self.plural_camel
    }

    /// `Sales Orders`
    pub fn plural_human(&self) -> &str {
        &self.plural_human
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pascal)
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

/// Split a string into lowercase words based on casing and separators.
///
/// Handles the identifier variants generated code runs into:
/// `SalesOrder`, `salesOrder`, `sales_order`, `sales-order`, and acronym
/// boundaries like `XMLHttpRequest` -> `xml`, `http`, `request`.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    // Peekable allows looking ahead for boundary detection without consuming
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        // Explicit separators always end the current word
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // camelCase transition: "myApp" -> "my" + "App"
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Acronym boundary: "HTTPServer" -> "HTTP" + "Server"
            // Detected by: Uppercase, Next is Uppercase, Next+1 is Lowercase
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

fn to_pascal_case(words: &[String]) -> String {
    words.iter().map(|w| capitalize(w)).collect()
}

fn to_camel_case(words: &[String]) -> String {
    let mut iter = words.iter();
    let mut out = iter.next().cloned().unwrap_or_default();
    for w in iter {
        out.push_str(&capitalize(w));
    }
    out
}

/// Title-cased words joined with spaces: `["sales","orders"]` -> `Sales Orders`.
fn to_human_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pluralize the last word of a split name.
///
/// English-light rules, matching what scaffolded folder conventions expect:
/// `category` -> `categories`, `address` -> `addresses`, `invoice` -> `invoices`.
fn pluralize_last(words: &[String]) -> Vec<String> {
    let mut out = words.to_vec();
    if let Some(last) = out.last_mut() {
        *last = pluralize(last);
    }
    out
}

fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        let preceded_by_vowel = stem
            .chars()
            .last()
            .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if !preceded_by_vowel {
            return format!("{stem}ies");
        }
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

// ============================================================================
// Semantic Types
// ============================================================================

/// Semantic classification of a property's declared type.
///
/// The classification is the *only* input to the per-kind field lookup
/// tables; the raw declared type never reaches a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Text,
    Number,
    Boolean,
    Date,
    /// Anything not covered above: navigation properties, GUIDs, enums.
    Reference,
}

impl SemanticType {
    /// Classify a declared type string (case-insensitive).
    ///
    /// A trailing `?` (nullable annotation) is stripped by the caller before
    /// classification - see the model source adapter.
    pub fn classify(declared: &str) -> Self {
        match declared.to_ascii_lowercase().as_str() {
            "string" | "char" => Self::Text,
            "int" | "int16" | "int32" | "int64" | "long" | "short" | "byte" | "sbyte"
            | "uint" | "ulong" | "ushort" | "decimal" | "double" | "float" => Self::Number,
            "bool" | "boolean" => Self::Boolean,
            "datetime" | "datetimeoffset" | "dateonly" | "date" => Self::Date,
            _ => Self::Reference,
        }
    }

    /// C# DTO field type for this classification.
    pub fn csharp_type(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number => "decimal",
            Self::Boolean => "bool",
            Self::Date => "DateTime",
            Self::Reference => "object",
        }
    }

    /// TypeScript model field type for this classification.
    pub fn ts_type(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "Date",
            Self::Reference => "any",
        }
    }

    /// Angular form control kind for this classification.
    pub fn form_control(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "checkbox",
            Self::Date => "date",
            Self::Reference => "text",
        }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// One public property of the inspected entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name as declared (conventionally PascalCase).
    pub name: String,
    /// Semantic classification driving every lookup table.
    pub semantic: SemanticType,
    /// Nullable value type, nullable annotation, or optional reference.
    pub nullable: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, semantic: SemanticType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            semantic,
            nullable,
        }
    }

    /// Property name in camelCase for frontend bindings.
    pub fn camel_name(&self) -> String {
        to_camel_case(&split_words(&self.name))
    }

    /// Human-readable label, e.g. `IssuedDate` -> `Issued Date`.
    pub fn label(&self) -> String {
        to_human_case(&split_words(&self.name))
    }
}

/// The fully inspected entity: immutable snapshot for one scaffold run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// Validated entity name with derived casing variants.
    pub name: EntityName,
    /// Namespace the entity lives in (e.g. `Shop.Core.Data.Entities`).
    pub namespace: String,
    /// Public properties in declaration order. Order is preserved end-to-end:
    /// templates emit one declaration per property in exactly this order.
    pub properties: Vec<PropertyDescriptor>,
}

impl EntityDescriptor {
    pub fn new(
        name: EntityName,
        namespace: impl Into<String>,
        properties: Vec<PropertyDescriptor>,
    ) -> Self {
        Self {
            name,
            namespace: namespace.into(),
            properties,
        }
    }

    /// Fully-qualified type name, `Namespace.Pascal`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name.pascal())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── EntityName validation ────────────────────────────────────────────

    #[test]
    fn plain_pascal_name_parses() {
        let n = EntityName::parse("Invoice").unwrap();
        assert_eq!(n.pascal(), "Invoice");
        assert_eq!(n.camel(), "invoice");
        assert_eq!(n.kebab(), "invoice");
        assert_eq!(n.plural_pascal(), "Invoices");
        assert_eq!(n.plural_kebab(), "invoices");
        assert_eq!(n.plural_human(), "Invoices");
    }

    #[test]
    fn multi_word_name_derives_all_variants() {
        let n = EntityName::parse("SalesOrder").unwrap();
        assert_eq!(n.pascal(), "SalesOrder");
        assert_eq!(n.camel(), "salesOrder");
        assert_eq!(n.kebab(), "sales-order");
        assert_eq!(n.plural_pascal(), "SalesOrders");
        assert_eq!(n.plural_kebab(), "sales-orders");
        assert_eq!(n.plural_human(), "Sales Orders");
    }

    #[test]
    fn leading_digit_is_rejected() {
        let err = EntityName::parse("1Invoice").unwrap_err();
        assert!(matches!(err, DomainError::InvalidEntityName { .. }));
    }

    #[test]
    fn illegal_character_is_rejected() {
        assert!(EntityName::parse("In voice").is_err());
        assert!(EntityName::parse("Invoice!").is_err());
        assert!(EntityName::parse("").is_err());
    }

    #[test]
    fn underscore_is_a_word_separator() {
        let n = EntityName::parse("sales_order").unwrap();
        assert_eq!(n.pascal(), "SalesOrder");
        assert_eq!(n.kebab(), "sales-order");
    }

    // ── pluralization ────────────────────────────────────────────────────

    #[test]
    fn pluralize_consonant_y() {
        assert_eq!(pluralize("category"), "categories");
    }

    #[test]
    fn pluralize_vowel_y() {
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn pluralize_sibilants() {
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("batch"), "batches");
    }

    #[test]
    fn pluralize_default() {
        assert_eq!(pluralize("invoice"), "invoices");
    }

    // ── semantic classification ──────────────────────────────────────────

    #[test]
    fn classify_common_types() {
        assert_eq!(SemanticType::classify("string"), SemanticType::Text);
        assert_eq!(SemanticType::classify("int"), SemanticType::Number);
        assert_eq!(SemanticType::classify("Decimal"), SemanticType::Number);
        assert_eq!(SemanticType::classify("bool"), SemanticType::Boolean);
        assert_eq!(SemanticType::classify("DateTime"), SemanticType::Date);
        assert_eq!(SemanticType::classify("Customer"), SemanticType::Reference);
        assert_eq!(SemanticType::classify("Guid"), SemanticType::Reference);
    }

    #[test]
    fn lookup_tables_cover_all_semantics() {
        for s in [
            SemanticType::Text,
            SemanticType::Number,
            SemanticType::Boolean,
            SemanticType::Date,
            SemanticType::Reference,
        ] {
            assert!(!s.csharp_type().is_empty());
            assert!(!s.ts_type().is_empty());
            assert!(!s.form_control().is_empty());
        }
    }

    #[test]
    fn date_maps_to_date_picker_control() {
        assert_eq!(SemanticType::Date.form_control(), "date");
    }

    // ── property helpers ─────────────────────────────────────────────────

    #[test]
    fn property_camel_and_label() {
        let p = PropertyDescriptor::new("IssuedDate", SemanticType::Date, true);
        assert_eq!(p.camel_name(), "issuedDate");
        assert_eq!(p.label(), "Issued Date");
    }

    #[test]
    fn descriptor_full_name() {
        let e = EntityDescriptor::new(
            EntityName::parse("Invoice").unwrap(),
            "Shop.Core.Data.Entities",
            vec![],
        );
        assert_eq!(e.full_name(), "Shop.Core.Data.Entities.Invoice");
    }
}

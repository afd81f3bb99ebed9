/*!
The datatype registry, the external collaborator described in §6: it maps a datatype `Iri` to
the functions needed to validate a lexical form, canonicalize it, and compare two values. Unlike
the closed `DataType` enum a smaller toolkit might use, this registry is open — new datatypes
register themselves by `Iri` at startup and the core never needs to know their names, matching
§6's "new datatypes may be added without core changes".
*/

use rdf_iri::Iri;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// One registered datatype: the uniform interface §6 calls `valid?`, `canonical_lexical`,
/// `value`, `equal_value?`, and `compare`.
///
pub trait Datatype: Send + Sync {
    /// The `Iri` identifying this datatype.
    fn id(&self) -> &Iri;

    /// `true` if `lexical` is a valid lexical form for this datatype.
    fn is_valid(&self, lexical: &str) -> bool;

    /// The canonical lexical form for `lexical`, or `None` if it is not valid.
    fn canonical_lexical(&self, lexical: &str) -> Option<String>;

    /// `true` if `a` and `b` denote the same value (not necessarily the same lexical form).
    /// Invalid lexical forms are never value-equal to anything, including themselves.
    fn equal_value(&self, a: &str, b: &str) -> bool;

    /// Compares the values denoted by `a` and `b`, or `None` if they are not comparable.
    fn compare(&self, a: &str, b: &str) -> Option<Ordering>;
}

///
/// A collection of registered [`Datatype`]s, keyed by `Iri`.
///
pub trait DatatypeRegistry: Send + Sync {
    /// Look up the datatype registered under `id`, if any.
    fn get(&self, id: &Iri) -> Option<&dyn Datatype>;

    /// Register `datatype`, replacing any previous registration under the same `Iri`.
    fn register(&mut self, datatype: Box<dyn Datatype>);
}

///
/// The default, in-process registry, pre-populated with the handful of XSD datatypes the core
/// itself treats specially during Turtle serialization (§4.5 step 6: booleans, integers,
/// doubles, decimals get canonical, suffix-free lexical forms).
///
pub struct StandardRegistry {
    entries: HashMap<Iri, Box<dyn Datatype>>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Default for StandardRegistry {
    fn default() -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
        };
        registry.register(Box::new(StringDatatype));
        registry.register(Box::new(BooleanDatatype));
        registry.register(Box::new(IntegerDatatype));
        registry.register(Box::new(DoubleDatatype));
        #[cfg(feature = "decimal_types")]
        registry.register(Box::new(DecimalDatatype));
        #[cfg(feature = "chrono_types")]
        registry.register(Box::new(DateTimeDatatype));
        registry
    }
}

impl DatatypeRegistry for StandardRegistry {
    fn get(&self, id: &Iri) -> Option<&dyn Datatype> {
        self.entries.get(id).map(|boxed| boxed.as_ref())
    }

    fn register(&mut self, datatype: Box<dyn Datatype>) {
        let _ = self.entries.insert(datatype.id().clone(), datatype);
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_REGISTRY: RwLock<StandardRegistry> = RwLock::new(StandardRegistry::default());
}

/// Look up `id` in the process-wide default registry and invoke `f` with the result. Takes a
/// closure rather than returning a borrow so callers never hold the registry's read lock longer
/// than the single lookup (§5 "Reads from them are concurrency-safe").
pub fn with_datatype<R>(id: &Iri, f: impl FnOnce(Option<&dyn Datatype>) -> R) -> R {
    let guard = DEFAULT_REGISTRY.read().expect("datatype registry poisoned");
    f(guard.get(id))
}

/// Register a custom datatype in the process-wide default registry. Intended for use at
/// start-up, per §5's "writes happen at initialization only".
pub fn register(datatype: Box<dyn Datatype>) {
    DEFAULT_REGISTRY
        .write()
        .expect("datatype registry poisoned")
        .register(datatype);
}

// ------------------------------------------------------------------------------------------------
// Built-in datatypes
// ------------------------------------------------------------------------------------------------

struct StringDatatype;

impl Datatype for StringDatatype {
    fn id(&self) -> &Iri {
        rdf_vocab::xsd::string()
    }

    fn is_valid(&self, _lexical: &str) -> bool {
        true
    }

    fn canonical_lexical(&self, lexical: &str) -> Option<String> {
        Some(lexical.to_string())
    }

    fn equal_value(&self, a: &str, b: &str) -> bool {
        a == b
    }

    fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

struct BooleanDatatype;

impl BooleanDatatype {
    fn parse(lexical: &str) -> Option<bool> {
        match lexical {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

impl Datatype for BooleanDatatype {
    fn id(&self) -> &Iri {
        rdf_vocab::xsd::boolean()
    }

    fn is_valid(&self, lexical: &str) -> bool {
        Self::parse(lexical).is_some()
    }

    fn canonical_lexical(&self, lexical: &str) -> Option<String> {
        Self::parse(lexical).map(|v| v.to_string())
    }

    fn equal_value(&self, a: &str, b: &str) -> bool {
        matches!((Self::parse(a), Self::parse(b)), (Some(x), Some(y)) if x == y)
    }

    fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        Some(Self::parse(a)?.cmp(&Self::parse(b)?))
    }
}

struct IntegerDatatype;

impl Datatype for IntegerDatatype {
    fn id(&self) -> &Iri {
        rdf_vocab::xsd::integer()
    }

    fn is_valid(&self, lexical: &str) -> bool {
        lexical.parse::<i128>().is_ok()
    }

    fn canonical_lexical(&self, lexical: &str) -> Option<String> {
        lexical.parse::<i128>().ok().map(|v| v.to_string())
    }

    fn equal_value(&self, a: &str, b: &str) -> bool {
        matches!((a.parse::<i128>(), b.parse::<i128>()), (Ok(x), Ok(y)) if x == y)
    }

    fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        Some(a.parse::<i128>().ok()?.cmp(&b.parse::<i128>().ok()?))
    }
}

struct DoubleDatatype;

impl Datatype for DoubleDatatype {
    fn id(&self) -> &Iri {
        rdf_vocab::xsd::double()
    }

    fn is_valid(&self, lexical: &str) -> bool {
        lexical.parse::<f64>().is_ok()
    }

    fn canonical_lexical(&self, lexical: &str) -> Option<String> {
        let value: f64 = lexical.parse().ok()?;
        Some(format_canonical_double(value))
    }

    fn equal_value(&self, a: &str, b: &str) -> bool {
        matches!((a.parse::<f64>(), b.parse::<f64>()), (Ok(x), Ok(y)) if x == y)
    }

    fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        a.parse::<f64>().ok()?.partial_cmp(&b.parse::<f64>().ok()?)
    }
}

/// XSD canonical doubles always carry an exponent, e.g. `1.0E2`, `0.0E0`, `-1.5E0`.
fn format_canonical_double(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0.0E0".to_string()
        } else {
            "0.0E0".to_string()
        };
    }
    let mut mantissa = value;
    let mut exponent = 0i32;
    while mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    while mantissa.abs() < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }
    format!("{mantissa}E{exponent}")
}

#[cfg(feature = "decimal_types")]
struct DecimalDatatype;

#[cfg(feature = "decimal_types")]
impl Datatype for DecimalDatatype {
    fn id(&self) -> &Iri {
        rdf_vocab::xsd::decimal()
    }

    fn is_valid(&self, lexical: &str) -> bool {
        lexical.parse::<rust_decimal::Decimal>().is_ok()
    }

    fn canonical_lexical(&self, lexical: &str) -> Option<String> {
        let value: rust_decimal::Decimal = lexical.parse().ok()?;
        let text = value.normalize().to_string();
        Some(if text.contains('.') { text } else { format!("{text}.0") })
    }

    fn equal_value(&self, a: &str, b: &str) -> bool {
        matches!(
            (a.parse::<rust_decimal::Decimal>(), b.parse::<rust_decimal::Decimal>()),
            (Ok(x), Ok(y)) if x == y
        )
    }

    fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        Some(
            a.parse::<rust_decimal::Decimal>()
                .ok()?
                .cmp(&b.parse::<rust_decimal::Decimal>().ok()?),
        )
    }
}

#[cfg(feature = "chrono_types")]
struct DateTimeDatatype;

#[cfg(feature = "chrono_types")]
impl Datatype for DateTimeDatatype {
    fn id(&self) -> &Iri {
        rdf_vocab::xsd::date_time()
    }

    fn is_valid(&self, lexical: &str) -> bool {
        chrono::DateTime::parse_from_rfc3339(lexical).is_ok()
    }

    fn canonical_lexical(&self, lexical: &str) -> Option<String> {
        chrono::DateTime::parse_from_rfc3339(lexical)
            .ok()
            .map(|dt| dt.to_rfc3339())
    }

    fn equal_value(&self, a: &str, b: &str) -> bool {
        matches!(
            (
                chrono::DateTime::parse_from_rfc3339(a),
                chrono::DateTime::parse_from_rfc3339(b),
            ),
            (Ok(x), Ok(y)) if x == y
        )
    }

    fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        Some(
            chrono::DateTime::parse_from_rfc3339(a)
                .ok()?
                .cmp(&chrono::DateTime::parse_from_rfc3339(b).ok()?),
        )
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

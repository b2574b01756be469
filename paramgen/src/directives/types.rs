//! Directive records handed to renderers.

use serde::Serialize;

/// Reads a parameter from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvBinding {
    /// Dotted parameter name.
    pub parameter: String,
    /// Environment variable name.
    pub env_var: String,
}

/// Seeds a parameter with its declared default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultBinding {
    /// Dotted parameter name.
    pub parameter: String,
    /// Literal default text.
    pub value: String,
}

/// How a command-line option consumes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CliArgKind {
    /// Switch without an argument; defaults to false.
    Flag,
    /// Option taking a string argument; defaults to null. Typed parsing is
    /// left to the setter.
    Value,
}

impl CliArgKind {
    /// Whether the option takes an argument.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::Value)
    }
}

/// Exposes a parameter on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliBinding {
    /// Dotted parameter name.
    pub parameter: String,
    /// Long flag without dashes.
    pub long: String,
    /// Short flag.
    pub short: String,
    /// Help text.
    pub description: String,
    /// Identifier of the local receiving the parsed value (the flat ref).
    pub variable: String,
    /// Argument handling.
    pub kind: CliArgKind,
}

/// Element type of a validator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorElement {
    /// 64-bit integers.
    Integer,
    /// Doubles.
    Double,
    /// Strings.
    String,
}

/// A constant table of allowed values for one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorTable {
    /// Table identifier, unique per parameter (`valid_<flat_ref>`).
    pub name: String,
    /// Element type.
    pub element: ValidatorElement,
    /// Values as target literals: numbers bare, everything else quoted.
    pub literals: Vec<String>,
}

/// Setter flavour and its extra arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SetterKind {
    /// Range- and allow-list-checked setter for int, string, double and size.
    Bounded {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
        /// Number of allowed values; zero when unrestricted.
        allowed_count: usize,
        /// Validator table name; `None` when unrestricted.
        validator: Option<String>,
    },
    /// Boolean setter.
    Flag,
    /// Per-enum parser; the enum's constant table does the checking.
    Enum,
}

/// A call assigning a candidate value to a record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetterCall {
    /// Setter function name.
    pub function: String,
    /// Key under which the candidate value is looked up (the dotted name).
    pub lookup_key: String,
    /// Field path inside the configuration record.
    pub target: String,
    /// Setter flavour.
    #[serde(flatten)]
    pub kind: SetterKind,
}

/// Conversion specifier used when dumping a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormatSpecifier {
    /// 64-bit integer.
    #[serde(rename = "%ld")]
    Integer,
    /// Double.
    #[serde(rename = "%lf")]
    Double,
    /// String.
    #[serde(rename = "%s")]
    String,
    /// Boolean printed as an integer.
    #[serde(rename = "%d")]
    Boolean,
}

impl FormatSpecifier {
    /// The printf-style conversion.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "%ld",
            Self::Double => "%lf",
            Self::String => "%s",
            Self::Boolean => "%d",
        }
    }
}

/// How the dumped value is obtained from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueAccess {
    /// Read the field directly.
    Field {
        /// Field path inside the configuration record.
        path: String,
    },
    /// Pass the field through the enum's name lookup.
    EnumName {
        /// Lookup function returning the label for a value.
        function: String,
        /// Field path inside the configuration record.
        path: String,
    },
}

/// One `label: value` line of the human-readable dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpLine {
    /// Printed label (the dotted name).
    pub label: String,
    /// Conversion specifier.
    pub specifier: FormatSpecifier,
    /// Value expression.
    pub access: ValueAccess,
}

/// A generated enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumSpec {
    /// Dotted parameter name.
    pub parameter: String,
    /// Flat ref of the parameter.
    pub flat_ref: String,
    /// Enum type name (`config_<flat_ref>`).
    pub type_name: String,
    /// Name lookup function (`config_name_enum_<flat_ref>`).
    pub name_function: String,
    /// Parser function (`set_enum_<flat_ref>`).
    pub parse_function: String,
    /// Constants in declaration order.
    pub constants: Vec<EnumConstant>,
}

/// One enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumConstant {
    /// Target-language constant identifier.
    pub constant_name: String,
    /// Label accepted from configuration sources and printed in dumps.
    pub source_label: String,
}

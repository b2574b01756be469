//! C header declaring the generated configuration records.
//!
//! The header targets `GLib`: strings are `gchar *`, integers and sizes
//! `gint64`, doubles `gdouble` and booleans `gboolean`.

#![allow(
    clippy::format_push_string,
    reason = "header templating uses format! for clarity"
)]

use paramgen::directives::EnumSpec;
use paramgen::{DEFINITION_ROOT, Field, FieldType, OutputModel, ScalarType, TypeDefinition};

/// Error-domain macros shared by every generated parser.
const ERROR_MACROS: &str = "#define CONFIG_ERROR config_error_quark()\n\
                            #define ERROR_CONFIG_NOT_SET 1\n\
                            #define ERROR_CONFIG_TOO_BIG 2\n\
                            #define ERROR_CONFIG_TOO_SMALL 3\n\
                            #define ERROR_CONFIG_INVALID 4\n\
                            #define ERROR_CONFIG_NO_FILE 5\n";

/// Renders the header for `model`, wrapped in the include guard `guard`.
#[must_use]
pub fn render_header(model: &OutputModel, guard: &str) -> String {
    let mut output = format!("#ifndef {guard}\n#define {guard}\n\n#include <glib.h>\n\n");
    output.push_str(ERROR_MACROS);
    output.push('\n');

    for spec in &model.directives.enums {
        output.push_str(&enum_block(spec));
    }
    for definition in &model.definitions {
        output.push_str(&struct_block(definition));
    }

    output.push_str(&prototypes(&model.directives.enums));
    output.push_str(&format!("#endif /* {guard} */\n"));
    output
}

fn enum_block(spec: &EnumSpec) -> String {
    let mut block = format!("enum {} {{\n", spec.type_name);
    for constant in &spec.constants {
        block.push_str(&format!("    {},\n", constant.constant_name));
    }
    block.push_str("};\n\n");
    block
}

fn struct_block(definition: &TypeDefinition) -> String {
    let mut block = format!("struct {} {{\n", definition.name);
    for field in &definition.fields {
        block.push_str(&member(field));
    }
    block.push_str("};\n\n");
    block
}

fn member(field: &Field) -> String {
    let declaration = match &field.ty {
        FieldType::Scalar { scalar_type } => {
            let c_type = scalar_c_type(*scalar_type);
            if c_type.ends_with('*') {
                format!("{c_type}{}", field.name)
            } else {
                format!("{c_type} {}", field.name)
            }
        }
        FieldType::Enum { type_name } => format!("enum {type_name} {}", field.name),
        FieldType::Record { type_name } => format!("struct {type_name} {}", field.name),
    };
    format!("    {declaration}; /** {} */\n", comment_text(&field.description))
}

/// C type of a plain scalar member.
#[must_use]
pub const fn scalar_c_type(scalar_type: ScalarType) -> &'static str {
    match scalar_type {
        ScalarType::String => "gchar *",
        ScalarType::Int | ScalarType::Size => "gint64",
        ScalarType::Double => "gdouble",
        ScalarType::Boolean => "gboolean",
        ScalarType::Enum => "gint",
    }
}

fn prototypes(enums: &[EnumSpec]) -> String {
    let root = DEFINITION_ROOT;
    let mut block = format!(
        "gboolean\nconfig_parse(struct {root} *cfg, gint argc, gchar *argv[], gboolean die_on_json_error, GError **err);\n\n\
         void\nconfig_clear(struct {root} *cfg);\n\n\
         gchar *\nconfig_to_string(struct {root} *cfg);\n\n"
    );
    for spec in enums {
        block.push_str(&format!(
            "const gchar *\n{}(enum {} val);\n\n",
            spec.name_function, spec.type_name
        ));
    }
    block.push_str("GQuark\nconfig_error_quark(void);\n\n");
    block
}

/// Keeps a description from closing its comment early.
fn comment_text(description: &str) -> String {
    description.replace("*/", "* /").replace('\n', " ")
}

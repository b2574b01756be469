//! C source implementing the entry points declared by the header.
//!
//! The parser gathers candidate values in a `GHashTable` keyed by dotted
//! parameter name. Sources are applied in increasing precedence: defaults,
//! the JSON file, environment variables, then the command line. The winning
//! candidate of each parameter is handed to its setter, which checks bounds
//! and allow-lists before assigning the record field.

#![allow(
    clippy::format_push_string,
    reason = "source templating uses format! for clarity"
)]

use paramgen::directives::{
    CliArgKind, CliBinding, EnumSpec, SetterCall, SetterKind, ValidatorElement, ValidatorTable,
    ValueAccess,
};
use paramgen::{DEFINITION_ROOT, OutputModel, SERIALIZATION_ROOT, SerializationMember};

/// Candidate and setter helpers shared by every generated parser.
const RUNTIME: &str = include_str!("runtime.c");

/// Paths under which the generated source expects its inputs.
#[derive(Debug, Clone, Copy)]
pub struct SourceNames<'a> {
    /// Header included by the source.
    pub header: &'a str,
    /// JSON configuration file read at parse time.
    pub json_file: &'a str,
}

/// Renders the parser implementation for `model`.
#[must_use]
pub fn render_source(model: &OutputModel, names: SourceNames<'_>) -> String {
    let directives = &model.directives;
    let mut output = format!(
        "#include <errno.h>\n#include <math.h>\n#include <string.h>\n\n\
         #include <glib.h>\n#include <jansson.h>\n\n#include {}\n\n\
         #define CONFIG_JSON_FILE {}\n\n",
        c_string(names.header),
        c_string(names.json_file)
    );
    output.push_str(RUNTIME);
    output.push('\n');

    output.push_str(&set_env(directives));
    output.push_str(&set_defaults(directives));
    output.push_str(&parse_opts(&directives.cli_bindings));
    output.push_str(&parse_json(model));
    for spec in &directives.enums {
        output.push_str(&enum_parser(spec));
    }
    output.push_str(&check_and_set(
        &directives.validator_tables,
        &directives.setter_calls,
    ));
    output.push_str(&config_parse());
    for spec in &directives.enums {
        output.push_str(&enum_name_function(spec));
    }
    output.push_str(&config_clear(&directives.cleanup));
    output.push_str(&config_to_string(model));
    output.push_str(
        "GQuark\nconfig_error_quark(void)\n{\n  return g_quark_from_static_string(\"config-error-quark\");\n}\n",
    );
    output
}

fn set_env(directives: &paramgen::Directives) -> String {
    let mut block = String::from("static void\nset_env(GHashTable *candidates)\n{\n");
    for binding in &directives.env_bindings {
        block.push_str(&format!(
            "  set_env_var(candidates, {}, {});\n",
            c_string(&binding.parameter),
            c_string(&binding.env_var)
        ));
    }
    block.push_str("}\n\n");
    block
}

fn set_defaults(directives: &paramgen::Directives) -> String {
    let mut block = String::from("static void\nset_defaults(GHashTable *candidates)\n{\n");
    for binding in &directives.default_bindings {
        block.push_str(&format!(
            "  set_candidate(candidates, {}, g_strdup({}));\n",
            c_string(&binding.parameter),
            c_string(&binding.value)
        ));
    }
    block.push_str("}\n\n");
    block
}

fn parse_opts(bindings: &[CliBinding]) -> String {
    let mut block = String::from(
        "static gboolean\nparse_opts(GHashTable *candidates, gint *argc, gchar **argv[], GError **err)\n{\n  GOptionContext *context;\n  gboolean ok;\n",
    );
    for binding in bindings {
        block.push_str(&match binding.kind {
            CliArgKind::Flag => format!("  gboolean {} = FALSE;\n", binding.variable),
            CliArgKind::Value => format!("  gchar *{} = NULL;\n", binding.variable),
        });
    }
    block.push_str("  GOptionEntry entries[] = {\n");
    for binding in bindings {
        let arg = if binding.kind.takes_value() {
            "G_OPTION_ARG_STRING"
        } else {
            "G_OPTION_ARG_NONE"
        };
        block.push_str(&format!(
            "    {{ {}, {}, 0, {arg}, &{}, {}, NULL }},\n",
            c_string(&binding.long),
            c_char(&binding.short),
            binding.variable,
            c_string(&binding.description)
        ));
    }
    block.push_str(
        "    { NULL }\n  };\n\n  g_assert(candidates);\n\n\
         \x20 context = g_option_context_new(\"\");\n\
         \x20 g_option_context_add_main_entries(context, entries, NULL);\n\
         \x20 ok = g_option_context_parse(context, argc, argv, err);\n\
         \x20 g_option_context_free(context);\n\
         \x20 if (!ok) {\n    return FALSE;\n  }\n\n",
    );
    for binding in bindings {
        let parameter = c_string(&binding.parameter);
        block.push_str(&match binding.kind {
            CliArgKind::Flag => format!(
                "  if ({}) {{\n    set_candidate(candidates, {parameter}, g_strdup(\"TRUE\"));\n  }}\n",
                binding.variable
            ),
            CliArgKind::Value => format!(
                "  set_candidate(candidates, {parameter}, {});\n",
                binding.variable
            ),
        });
    }
    block.push_str("  return TRUE;\n}\n\n");
    block
}

fn parse_json(model: &OutputModel) -> String {
    let mut block = String::from(
        "static gboolean\nparse_json(GHashTable *candidates, const gchar *file, GError **err)\n{\n  json_error_t j_error;\n",
    );
    block.push_str(&format!("  json_t *{SERIALIZATION_ROOT} = NULL;\n"));
    for group in &model.serialization_groups {
        block.push_str(&format!("  json_t *{} = NULL;\n", group_local(&group.param)));
    }
    block.push_str(&format!(
        "\n  json_set_alloc_funcs(g_malloc, g_free);\n\
         \x20 {SERIALIZATION_ROOT} = json_load_file(file, 0, &j_error);\n\
         \x20 if ({SERIALIZATION_ROOT} == NULL) {{\n\
         \x20   g_set_error(err, CONFIG_ERROR, ERROR_CONFIG_NO_FILE,\n\
         \x20               \"Could not parse config file %s, error: %s\", file, j_error.text);\n\
         \x20   return FALSE;\n  }}\n\n"
    ));
    for group in &model.serialization_groups {
        let local = group_local(&group.param);
        let name = c_string(&group.name);
        if group.parent_path.is_empty() {
            block.push_str(&format!(
                "  {local} = json_object_get({SERIALIZATION_ROOT}, {name});\n"
            ));
        } else {
            let parent = group_local(&group.parent_path);
            block.push_str(&format!(
                "  if ({parent} != NULL) {{\n    {local} = json_object_get({parent}, {name});\n  }}\n"
            ));
        }
    }
    for member in &model.root_members {
        block.push_str(&format!("  {}\n", add_member(member, SERIALIZATION_ROOT)));
    }
    for group in model.serialization_groups.iter().filter(|g| !g.members.is_empty()) {
        let local = group_local(&group.param);
        block.push_str(&format!("  if ({local} != NULL) {{\n"));
        for member in &group.members {
            block.push_str(&format!("    {}\n", add_member(member, &local)));
        }
        block.push_str("  }\n");
    }
    block.push_str(&format!(
        "\n  json_decref({SERIALIZATION_ROOT});\n  return TRUE;\n}}\n\n"
    ));
    block
}

fn group_local(param: &str) -> String {
    format!("{SERIALIZATION_ROOT}_{param}")
}

fn add_member(member: &SerializationMember, parent: &str) -> String {
    format!(
        "add_json_{}_to_candidates(candidates, {}, {parent}, {});",
        member.scalar_type,
        c_string(&member.external_name),
        c_string(&member.name)
    )
}

fn enum_parser(spec: &EnumSpec) -> String {
    let mut block = format!(
        "static gboolean\n{}(const gchar *name, const gchar *str, enum {} *dst, GError **err)\n{{\n\
         \x20 g_assert(name);\n  g_assert(dst);\n\n\
         \x20 if (str == NULL) {{\n    return not_set(name, err);\n  }}\n",
        spec.parse_function, spec.type_name
    );
    for constant in &spec.constants {
        block.push_str(&format!(
            "  if (g_strcmp0(str, {}) == 0) {{\n    *dst = {};\n    return TRUE;\n  }}\n",
            c_string(&constant.source_label),
            constant.constant_name
        ));
    }
    block.push_str("\n  return invalid(name, err);\n}\n\n");
    block
}

fn check_and_set(tables: &[ValidatorTable], calls: &[SetterCall]) -> String {
    let mut block = format!(
        "static gboolean\ncheck_and_set(GHashTable *candidates, struct {DEFINITION_ROOT} *cfg, GError **err)\n{{\n"
    );
    for table in tables {
        let element = match table.element {
            ValidatorElement::Integer => "const gint64 ",
            ValidatorElement::Double => "const gdouble ",
            ValidatorElement::String => "const gchar *",
        };
        block.push_str(&format!(
            "  {element}{}[] = {{ {} }};\n",
            table.name,
            table.literals.join(", ")
        ));
    }
    if !tables.is_empty() {
        block.push('\n');
    }
    for call in calls {
        block.push_str(&setter(call));
    }
    block.push_str("  return TRUE;\n}\n\n");
    block
}

fn setter(call: &SetterCall) -> String {
    let key = c_string(&call.lookup_key);
    let common = format!(
        "{key}, g_hash_table_lookup(candidates, {key}), &cfg->{}",
        call.target
    );
    let args = match &call.kind {
        SetterKind::Bounded {
            min,
            max,
            allowed_count,
            validator,
        } => format!(
            "{common}, {min}, {max}, {allowed_count}, {}, err",
            validator.as_deref().unwrap_or("NULL")
        ),
        SetterKind::Flag | SetterKind::Enum => format!("{common}, err"),
    };
    format!(
        "  if (!{}({args})) {{\n    return FALSE;\n  }}\n",
        call.function
    )
}

fn config_parse() -> String {
    format!(
        "gboolean\nconfig_parse(struct {DEFINITION_ROOT} *cfg, gint argc, gchar *argv[], gboolean die_on_json_error, GError **err)\n{{\n\
         \x20 GHashTable *candidates;\n  gboolean ok = FALSE;\n\n\
         \x20 g_assert(cfg);\n\n\
         \x20 candidates = g_hash_table_new_full(g_str_hash, g_str_equal, NULL, g_free);\n\
         \x20 set_defaults(candidates);\n\n\
         \x20 if (die_on_json_error) {{\n\
         \x20   if (!parse_json(candidates, CONFIG_JSON_FILE, err)) {{\n      goto out;\n    }}\n\
         \x20 }} else {{\n\
         \x20   (void) parse_json(candidates, CONFIG_JSON_FILE, NULL);\n\
         \x20 }}\n\n\
         \x20 set_env(candidates);\n\n\
         \x20 if (!parse_opts(candidates, &argc, &argv, err)) {{\n    goto out;\n  }}\n\n\
         \x20 ok = check_and_set(candidates, cfg, err);\n\n\
         out:\n\
         \x20 g_hash_table_destroy(candidates);\n\
         \x20 return ok;\n}}\n\n"
    )
}

fn enum_name_function(spec: &EnumSpec) -> String {
    let mut block = format!(
        "const gchar *\n{}(enum {} val)\n{{\n  switch (val) {{\n",
        spec.name_function, spec.type_name
    );
    for constant in &spec.constants {
        block.push_str(&format!(
            "  case {}:\n    return {};\n",
            constant.constant_name,
            c_string(&constant.source_label)
        ));
    }
    block.push_str("  default:\n    break;\n  }\n\n  g_assert_not_reached();\n  return \"\";\n}\n\n");
    block
}

fn config_clear(cleanup: &[String]) -> String {
    let mut block = format!(
        "void\nconfig_clear(struct {DEFINITION_ROOT} *cfg)\n{{\n  g_assert(cfg);\n\n"
    );
    for path in cleanup {
        block.push_str(&format!("  g_free(cfg->{path});\n"));
    }
    block.push_str("  memset(cfg, 0, sizeof(*cfg));\n}\n\n");
    block
}

fn config_to_string(model: &OutputModel) -> String {
    let dump = &model.directives.dump;
    let mut block = format!(
        "gchar *\nconfig_to_string(struct {DEFINITION_ROOT} *cfg)\n{{\n  g_assert(cfg);\n\n"
    );
    if dump.is_empty() {
        block.push_str("  return g_strdup(\"\");\n}\n\n");
        return block;
    }
    block.push_str("  return g_strdup_printf(\n");
    for line in dump {
        let text = format!("{}: {}\n", line.label.replace('%', "%%"), line.specifier.as_str());
        block.push_str(&format!("    {}\n", c_string(&text)));
    }
    let values: Vec<String> = dump
        .iter()
        .map(|line| match &line.access {
            ValueAccess::Field { path } => format!("cfg->{path}"),
            ValueAccess::EnumName { function, path } => format!("{function}(cfg->{path})"),
        })
        .collect();
    block.push_str(&format!("    , {});\n}}\n\n", values.join(", ")));
    block
}

/// Quotes `value` as a C string literal.
fn c_string(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

/// Quotes the first character of a short flag as a C character literal.
fn c_char(short: &str) -> String {
    match short.chars().next() {
        Some('\'') => "'\\''".to_owned(),
        Some('\\') => "'\\\\'".to_owned(),
        Some(ch) => format!("'{ch}'"),
        None => "0".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramgen::{ParameterDecl, build};
    use rstest::{fixture, rstest};
    use test_helpers::decl::decl;
    use test_helpers::fixtures::sample_declarations;
    use test_helpers::text::ensure_in_order;

    const NAMES: SourceNames<'static> = SourceNames {
        header: "config.h",
        json_file: "./config.json",
    };

    fn source_for(declarations: &[ParameterDecl]) -> String {
        render_source(&build(declarations).expect("build model"), NAMES)
    }

    #[fixture]
    fn sample_source() -> String {
        source_for(&sample_declarations())
    }

    #[rstest]
    fn sections_follow_parse_order(sample_source: String) -> anyhow::Result<()> {
        ensure_in_order(
            &sample_source,
            &[
                "#include \"config.h\"",
                "#define CONFIG_JSON_FILE \"./config.json\"",
                "set_candidate(GHashTable *candidates",
                "set_env(GHashTable *candidates)",
                "set_defaults(GHashTable *candidates)",
                "parse_opts(GHashTable *candidates",
                "parse_json(GHashTable *candidates",
                "set_enum_main_deep_enumtest(const gchar *name",
                "check_and_set(GHashTable *candidates",
                "config_parse(struct config *cfg",
                "config_name_enum_main_deep_enumtest(enum config_main_deep_enumtest val)",
                "config_clear(struct config *cfg)",
                "config_to_string(struct config *cfg)",
                "config_error_quark(void)",
            ],
        )
    }

    #[rstest]
    fn sources_apply_in_precedence_order(sample_source: String) -> anyhow::Result<()> {
        ensure_in_order(
            &sample_source,
            &[
                "  set_defaults(candidates);",
                "parse_json(candidates, CONFIG_JSON_FILE, err)",
                "  set_env(candidates);",
                "parse_opts(candidates, &argc, &argv, err)",
                "ok = check_and_set(candidates, cfg, err);",
            ],
        )
    }

    #[rstest]
    fn bindings_are_emitted(sample_source: String) {
        assert!(sample_source.contains("  set_env_var(candidates, \"main.second\", \"SECOND_VAR\");"));
        assert!(sample_source.contains(
            "  set_candidate(candidates, \"main.size\", g_strdup(\"10 mb\"));"
        ));
        assert!(sample_source.contains("  gboolean main_third = FALSE;"));
        assert!(sample_source.contains("  gchar *main_first = NULL;"));
        assert!(sample_source.contains(
            "    { \"third\", 't', 0, G_OPTION_ARG_NONE, &main_third, \"\", NULL },"
        ));
        assert!(sample_source.contains(
            "  if (main_third) {\n    set_candidate(candidates, \"main.third\", g_strdup(\"TRUE\"));\n  }"
        ));
        assert!(sample_source.contains("  set_candidate(candidates, \"main.first\", main_first);"));
    }

    #[rstest]
    fn json_groups_are_fetched_before_their_members(sample_source: String) -> anyhow::Result<()> {
        ensure_in_order(
            &sample_source,
            &[
                "  root_main = json_object_get(root, \"main\");",
                "  if (root_main != NULL) {\n    root_main_deep = json_object_get(root_main, \"deep\");\n  }",
                "add_json_string_to_candidates(candidates, \"other\", root, \"other\");",
                "add_json_double_to_candidates(candidates, \"main.double_param\", root_main, \"double\");",
                "add_json_enum_to_candidates(candidates, \"main.deep.enumtest\", root_main_deep, \"param_enum\");",
            ],
        )
    }

    #[rstest]
    fn validators_precede_setters(sample_source: String) -> anyhow::Result<()> {
        ensure_in_order(
            &sample_source,
            &[
                "  const gchar *valid_main_deep_param[] = { \"hello\", \"goodbye\" };",
                "  if (!set_string(\"main.first\", g_hash_table_lookup(candidates, \"main.first\"), &cfg->main.first, 1, 10, 0, NULL, err)) {",
                "  if (!set_boolean(\"main.third\", g_hash_table_lookup(candidates, \"main.third\"), &cfg->main.third, err)) {",
                "  if (!set_string(\"main.deep.param\", g_hash_table_lookup(candidates, \"main.deep.param\"), &cfg->main.deep.param, 1, 24, 2, valid_main_deep_param, err)) {",
                "  if (!set_enum_main_deep_enumtest(\"main.deep.enumtest\", g_hash_table_lookup(candidates, \"main.deep.enumtest\"), &cfg->main.deep.enumtest, err)) {",
            ],
        )
    }

    #[rstest]
    fn enums_parse_and_name_every_label() {
        let source = source_for(&[decl("mode", "enum").options(&["fast", "slow"]).build()]);
        assert!(source.contains(
            "  if (g_strcmp0(str, \"slow\") == 0) {\n    *dst = MODE_SLOW;\n    return TRUE;\n  }"
        ));
        assert!(source.contains("  case MODE_FAST:\n    return \"fast\";\n"));
    }

    #[rstest]
    fn only_strings_are_released(sample_source: String) {
        let clear = sample_source
            .split("config_clear(struct config *cfg)\n")
            .nth(1)
            .and_then(|rest| rest.split("\n}\n").next())
            .expect("config_clear body");
        let freed: Vec<&str> = clear
            .lines()
            .filter_map(|line| line.trim().strip_prefix("g_free(cfg->"))
            .collect();
        assert_eq!(
            freed,
            ["main.first);", "main.deep.param);", "main.deep.params);", "other);"]
        );
        assert!(clear.contains("memset(cfg, 0, sizeof(*cfg));"));
    }

    #[rstest]
    fn dump_prints_each_parameter(sample_source: String) {
        assert!(sample_source.contains("    \"main.second: %ld\\n\"\n"));
        assert!(sample_source.contains(
            "config_name_enum_main_deep_enumtest(cfg->main.deep.enumtest)"
        ));
    }

    #[rstest]
    fn empty_model_still_defines_entry_points() {
        let source = source_for(&[]);
        assert!(source.contains("  return g_strdup(\"\");"));
        assert!(source.contains("config_parse(struct config *cfg"));
        assert!(!source.contains("json_t *root_"));
    }

    #[rstest]
    #[case("plain", "\"plain\"")]
    #[case("say \"hi\"", "\"say \\\"hi\\\"\"")]
    #[case("a\\b", "\"a\\\\b\"")]
    #[case("two\nlines", "\"two\\nlines\"")]
    fn strings_are_escaped(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(c_string(value), expected);
    }

    #[rstest]
    #[case("x", "'x'")]
    #[case("'", "'\\''")]
    #[case("", "0")]
    fn short_flags_become_char_literals(#[case] short: &str, #[case] expected: &str) {
        assert_eq!(c_char(short), expected);
    }
}

//! End-to-end generation tests for `paramgen-cli`.

use anyhow::{Context, Result, ensure};
use camino::{Utf8Path, Utf8PathBuf};
use paramgen_cli::cli::OutputFormat;
use paramgen_cli::error::ParamgenError;
use paramgen_cli::settings::Settings;
use paramgen_cli::render::markdown::render_table;
use paramgen_cli::{load_model, print_table, write_artefacts};
use rstest::{fixture, rstest};
use tempfile::TempDir;
use test_helpers::fixtures::SAMPLE_YAML;
use test_helpers::text::ensure_in_order;

struct Workspace {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn settings(&self, input: &str) -> Settings {
        Settings {
            input: self.root.join(input),
            out_dir: self.root.join("gen"),
            ..Settings::default()
        }
    }

    fn write(&self, name: &str, contents: &str) -> Result<()> {
        std::fs::write(self.root.join(name), contents)
            .with_context(|| format!("write {name}"))
    }

    fn read_output(&self, name: &str) -> Result<String> {
        std::fs::read_to_string(self.root.join("gen").join(name))
            .with_context(|| format!("read gen/{name}"))
    }
}

#[fixture]
fn workspace() -> Workspace {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root =
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("temp dir path is UTF-8");
    let workspace = Workspace { _temp: temp, root };
    workspace
        .write("config-meta.yml", SAMPLE_YAML)
        .expect("write sample declarations");
    workspace
}

fn generate(settings: &Settings) -> Result<Vec<Utf8PathBuf>, ParamgenError> {
    let model = load_model(settings)?;
    write_artefacts(settings, &model)
}

#[rstest]
fn writes_every_default_format(workspace: Workspace) -> Result<()> {
    let settings = workspace.settings("config-meta.yml");
    let written = generate(&settings)?;
    let names: Vec<&str> = written.iter().filter_map(|p| p.file_name()).collect();
    ensure!(
        names == ["config.h", "config.c", "PARAMETERS.md", "model.json"],
        "wrote {names:?}"
    );
    ensure!(written.iter().all(|p| p.starts_with(&settings.out_dir)));
    Ok(())
}

#[rstest]
fn header_defines_records_before_use(workspace: Workspace) -> Result<()> {
    generate(&workspace.settings("config-meta.yml"))?;
    let header = workspace.read_output("config.h")?;
    ensure_in_order(
        &header,
        &[
            "#ifndef _CONFIG_H_",
            "#define ERROR_CONFIG_NO_FILE 5",
            "enum config_main_deep_enumtest {\n    MAIN_DEEP_ENUMTEST_HELLO,\n    MAIN_DEEP_ENUMTEST_GOODBYE,\n};",
            "struct config_main_deep {",
            "    enum config_main_deep_enumtest enumtest; /**  */",
            "struct config_main {",
            "    gchar *first; /** This is a variable */",
            "    gdouble double_param; /**  */",
            "    struct config_main_deep deep; /**  */",
            "struct config {",
            "    struct config_main main; /**  */",
            "    gchar *other; /**  */",
            "config_parse(struct config *cfg,",
            "config_name_enum_main_deep_enumtest(enum config_main_deep_enumtest val);",
            "config_error_quark(void);",
            "#endif /* _CONFIG_H_ */",
        ],
    )
}

#[rstest]
fn header_name_and_guard_follow_settings(workspace: Workspace) -> Result<()> {
    let settings = Settings {
        formats: vec![OutputFormat::Header],
        header_name: "params.h".to_owned(),
        guard: "_PARAMS_H_".to_owned(),
        ..workspace.settings("config-meta.yml")
    };
    let written = generate(&settings)?;
    ensure!(written == [settings.out_dir.join("params.h")]);
    let header = workspace.read_output("params.h")?;
    ensure!(header.starts_with("#ifndef _PARAMS_H_\n"));
    Ok(())
}

#[rstest]
fn markdown_lists_parameters_in_declared_order(workspace: Workspace) -> Result<()> {
    let settings = Settings {
        formats: vec![OutputFormat::Markdown],
        ..workspace.settings("config-meta.yml")
    };
    generate(&settings)?;
    let table = workspace.read_output("PARAMETERS.md")?;
    let names: Vec<&str> = table
        .lines()
        .skip(2)
        .filter_map(|row| row.split(" | ").next())
        .map(|cell| cell.trim_start_matches("| "))
        .collect();
    ensure!(
        names
            == [
                "main.first",
                "main.second",
                "main.third",
                "main.double_param",
                "main.size",
                "main.deep.param",
                "main.deep.enumtest",
                "main.deep.params",
                "other",
            ],
        "rows were {names:?}"
    );
    ensure!(
        table.contains(
            "| main.deep.enumtest | g | enum-test | enum-test | main.deep.param_enum |  |"
        )
    );
    Ok(())
}

#[rstest]
fn model_json_is_reproducible(workspace: Workspace) -> Result<()> {
    let settings = Settings {
        formats: vec![OutputFormat::Model],
        ..workspace.settings("config-meta.yml")
    };
    generate(&settings)?;
    let first = workspace.read_output("model.json")?;
    generate(&settings)?;
    let second = workspace.read_output("model.json")?;
    ensure!(first == second);
    let value: serde_json::Value = serde_json::from_str(&first)?;
    ensure!(
        value["validator_tables"][0]["literals"]
            == serde_json::json!(["\"hello\"", "\"goodbye\""])
    );
    Ok(())
}

#[rstest]
fn invalid_declarations_write_nothing(workspace: Workspace) -> Result<()> {
    workspace.write(
        "dupes.yml",
        "parameters:\n  - name: a\n    type: int\n    arg-short: x\n  - name: b\n    type: int\n    arg-short: x\n",
    )?;
    let settings = workspace.settings("dupes.yml");
    let err = generate(&settings).expect_err("duplicate short flag must fail");
    ensure!(err.to_string() == "arg-short has duplicate: x", "got {err}");
    ensure!(!settings.out_dir.exists());
    Ok(())
}

#[rstest]
fn missing_input_reports_its_path(workspace: Workspace) -> Result<()> {
    let settings = workspace.settings("absent.yml");
    match generate(&settings) {
        Err(ParamgenError::Io { path, .. }) => {
            ensure!(path == settings.input, "reported {path}");
            Ok(())
        }
        other => anyhow::bail!("expected an I/O error, got {other:?}"),
    }
}

#[rstest]
fn relative_input_resolves_against_current_dir() {
    let settings = Settings {
        input: Utf8Path::new("definitely-not-here.yml").to_path_buf(),
        ..Settings::default()
    };
    assert!(matches!(
        load_model(&settings),
        Err(ParamgenError::Io { .. })
    ));
}

#[rstest]
fn source_includes_the_configured_header(workspace: Workspace) -> Result<()> {
    let settings = Settings {
        formats: vec![OutputFormat::Source],
        header_name: "params.h".to_owned(),
        source_name: "params.c".to_owned(),
        json_file: "/etc/app.json".to_owned(),
        ..workspace.settings("config-meta.yml")
    };
    let written = generate(&settings)?;
    ensure!(written == [settings.out_dir.join("params.c")]);
    let source = workspace.read_output("params.c")?;
    ensure_in_order(
        &source,
        &[
            "#include \"params.h\"",
            "#define CONFIG_JSON_FILE \"/etc/app.json\"",
            "static gboolean\nset_enum_main_deep_enumtest(",
            "  if (!set_size(\"main.size\", g_hash_table_lookup(candidates, \"main.size\"), &cfg->main.size, 0, 10000000, 0, NULL, err)) {",
            "gboolean\nconfig_parse(struct config *cfg, gint argc, gchar *argv[], gboolean die_on_json_error, GError **err)\n{",
            "const gchar *\nconfig_name_enum_main_deep_enumtest(enum config_main_deep_enumtest val)\n{",
        ],
    )
}

#[rstest]
fn printed_table_matches_the_written_table(workspace: Workspace) -> Result<()> {
    let settings = Settings {
        formats: vec![OutputFormat::Markdown],
        ..workspace.settings("config-meta.yml")
    };
    let model = load_model(&settings)?;
    write_artefacts(&settings, &model)?;

    let mut buffer = Vec::new();
    print_table(&model, &mut buffer)?;
    let printed = String::from_utf8(buffer)?;
    ensure!(printed == render_table(&model));
    ensure!(printed == workspace.read_output("PARAMETERS.md")?);
    Ok(())
}

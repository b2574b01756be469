//! Markdown table documenting each parameter's bindings.

use paramgen::{OutputModel, Parameter};

const HEADER: &str = "| Name | Short arg | Long arg | Env | Json conf | Description |\n\
                      |------|-----------|----------|-----|-----------|-------------|\n";

/// Renders one table row per parameter, in declaration order.
#[must_use]
pub fn render_table(model: &OutputModel) -> String {
    let mut table = String::from(HEADER);
    for parameter in &model.parameters {
        table.push_str(&row(parameter));
    }
    table
}

fn row(parameter: &Parameter) -> String {
    let cells = [
        parameter.name.as_str(),
        parameter.cli_short.as_str(),
        parameter.cli_long.as_str(),
        parameter.env_var.as_str(),
        parameter.serialization_key.as_str(),
        parameter.description.as_str(),
    ]
    .map(escape_cell);
    format!("| {} |\n", cells.join(" | "))
}

/// Escapes pipes and folds line breaks so a value stays in its cell.
fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramgen::{ParameterDecl, build};
    use rstest::rstest;

    #[rstest]
    fn empty_model_renders_only_the_header() {
        let model = build(&[]).expect("build model");
        assert_eq!(render_table(&model), HEADER);
    }

    #[rstest]
    fn rows_follow_declaration_order() {
        let declarations = [
            ParameterDecl {
                name: "server.port".to_owned(),
                serialization_key: "server.port".to_owned(),
                env_var: "PORT".to_owned(),
                cli_long: "port".to_owned(),
                cli_short: "p".to_owned(),
                scalar_type: "int".to_owned(),
                description: "Listening port".to_owned(),
                ..ParameterDecl::default()
            },
            ParameterDecl {
                name: "host".to_owned(),
                scalar_type: "string".to_owned(),
                ..ParameterDecl::default()
            },
        ];
        let table = render_table(&build(&declarations).expect("build model"));
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(
            rows,
            [
                "| server.port | p | port | PORT | server.port | Listening port |",
                "| host |  |  |  |  |  |",
            ]
        );
    }

    #[rstest]
    #[case("a|b", "a\\|b")]
    #[case("two\nlines", "two lines")]
    #[case("plain", "plain")]
    fn cells_stay_on_one_line(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(escape_cell(value), expected);
    }
}

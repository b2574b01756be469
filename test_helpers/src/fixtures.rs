//! Sample declaration set shared by the test suites.
//!
//! The set nests two levels deep, uses a serialization key that differs from
//! its name (`main.deep.param_enum`), reuses the text `enum-test` across two
//! different unique fields, and covers every scalar type.

use paramgen::ParameterDecl;

use crate::decl::decl;

/// The sample declarations in declaration order.
#[must_use]
pub fn sample_declarations() -> Vec<ParameterDecl> {
    vec![
        decl("main.first", "string")
            .description("This is a variable")
            .default_value("Just a string")
            .cli("first", "f")
            .bounds(1, 10)
            .build(),
        decl("main.second", "int")
            .default_value("7")
            .env("SECOND_VAR")
            .cli("second", "e")
            .bounds(1, 10)
            .build(),
        decl("main.third", "boolean")
            .default_value("FALSE")
            .cli("third", "t")
            .build(),
        decl("main.double_param", "double")
            .default_value("13.5")
            .json("main.double")
            .cli("test-double", "d")
            .bounds(-10, 100)
            .build(),
        decl("main.size", "size")
            .default_value("10 mb")
            .cli("test-size", "s")
            .bounds(0, 10_000_000)
            .build(),
        decl("main.deep.param", "string")
            .default_value("hello")
            .bounds(1, 24)
            .options(&["hello", "goodbye"])
            .build(),
        decl("main.deep.enumtest", "enum")
            .default_value("hello")
            .json("main.deep.param_enum")
            .env("enum-test")
            .cli("enum-test", "g")
            .options(&["hello", "goodbye"])
            .build(),
        decl("main.deep.params", "string")
            .default_value("Just a string")
            .bounds(1, 24)
            .build(),
        decl("other", "string")
            .default_value("Just a string")
            .bounds(1, 24)
            .build(),
    ]
}

/// The sample set as a declaration file.
pub const SAMPLE_YAML: &str = r#"parameters:
  - name: main.first
    description: This is a variable
    default: Just a string
    json: main.first
    arg-long: first
    arg-short: f
    type: string
    min: 1
    max: 10
  - name: main.second
    default: 7
    json: main.second
    env: SECOND_VAR
    arg-long: second
    arg-short: e
    type: int
    min: 1
    max: 10
  - name: main.third
    default: "FALSE"
    json: main.third
    arg-long: third
    arg-short: t
    type: boolean
  - name: main.double_param
    default: 13.5
    json: main.double
    arg-long: test-double
    arg-short: d
    type: double
    min: -10
    max: 100
  - name: main.size
    default: 10 mb
    json: main.size
    arg-long: test-size
    arg-short: s
    type: size
    min: 0
    max: 10000000
  - name: main.deep.param
    default: hello
    json: main.deep.param
    type: string
    min: 1
    max: 24
    options: [hello, goodbye]
  - name: main.deep.enumtest
    default: hello
    json: main.deep.param_enum
    env: enum-test
    arg-long: enum-test
    arg-short: g
    type: enum
    options: [hello, goodbye]
  - name: main.deep.params
    default: Just a string
    json: main.deep.params
    type: string
    min: 1
    max: 24
  - name: other
    default: Just a string
    json: other
    type: string
    min: 1
    max: 24
"#;

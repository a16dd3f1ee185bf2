//! Output layout through `compile_with_config`

use exprc::machine::run;
use exprc::{CodegenConfig, compile, compile_with_config};

#[test]
fn toml_config_changes_layout_only() {
    let config = CodegenConfig::from_toml_str(
        r#"
        entry_symbol = "calc"
        indent = 8
        annotate = true
        "#,
    )
    .expect("valid config");

    let asm = compile_with_config("(2+3)*4", &config).unwrap();

    assert!(asm.starts_with("        .global calc\ncalc:\n"));
    assert!(asm.contains("        # *\n"));
    assert_eq!(run(&asm), Ok(20));
    assert_eq!(run(&compile("(2+3)*4").unwrap()), Ok(20));
}

#[test]
fn default_config_matches_compile() {
    assert_eq!(
        compile_with_config("1-2", &CodegenConfig::default()).unwrap(),
        compile("1-2").unwrap()
    );
}

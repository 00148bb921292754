//! Configuration from TOML and document listing.

use anyhow::Result;
use docweave::test_utils::TestEnvironment;
use docweave::{Loader, LoaderConfig};

#[test]
fn test_load_config_file_with_custom_extension() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("hello.prompt", "Hello @(name)")?;
    env.write("name.prompt", "world")?;
    env.write("legacy.md", "legacy")?;

    let config_path = env.write_outside(
        "docweave.toml",
        &format!(
            "root = {:?}\ndefault_extension = \"prompt\"\nextensions = [\"md\"]\n",
            env.root.display().to_string()
        ),
    )?;

    let loader = Loader::new(LoaderConfig::load_from(&config_path)?)?;
    assert_eq!(loader.get_document("hello").expect("hello").body(), "Hello world");
    assert_eq!(loader.get_document("legacy.md").expect("legacy").body(), "legacy");
    assert!(loader.get_document("legacy").is_none());
    Ok(())
}

#[test]
fn test_root_expands_environment_variables() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("a.md", "A")?;

    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var("DOCWEAVE_TEST_ROOT", &env.root) };
    let config = LoaderConfig::from_toml_str(r#"root = "$DOCWEAVE_TEST_ROOT""#)?;
    assert_eq!(config.root, env.root);

    let loader = Loader::new(config)?;
    assert_eq!(loader.get_document("a").expect("a").body(), "A");
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() {
    assert!(LoaderConfig::from_toml_str("root = \"/r\"\ndefault_extension = \"\"").is_err());
    assert!(LoaderConfig::from_toml_str("default_extension = \"md\"").is_err());
    assert!(LoaderConfig::from_toml_str("root = \"$DOCWEAVE_UNDEFINED_VARIABLE_XYZ\"").is_err());
}

#[test]
fn test_list_documents_round_trips_through_get_document() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("a.md", "A")?;
    env.write("nested/b.md", "B")?;
    env.write("nested/deeper/c.MD", "C")?;
    env.write("notes.markdown", "N")?;
    env.write("notes.txt", "not a document")?;
    env.write_outside("outside.md", "outside")?;

    let config = env.config().with_extensions(["md", "markdown"]);
    let loader = Loader::new(config)?;
    let names = loader.list_documents()?;
    assert_eq!(names, vec!["a", "nested/b", "nested/deeper/c.MD", "notes.markdown"]);

    for name in &names {
        assert!(loader.try_get_document(name).is_ok(), "{name} should load");
    }
    Ok(())
}

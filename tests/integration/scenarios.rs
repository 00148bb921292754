//! Loading documents with frontmatter and nested imports.

use anyhow::Result;
use docweave::test_utils::{DocumentFixture, TestEnvironment};
use serde::Deserialize;

#[test]
fn test_import_replaced_by_body_only() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("a.md", "---\nname: a\n---\nHead @(./b) Tail")?;
    env.write("b.md", "---\nname: b\n---\nMiddle")?;

    let loader = env.loader()?;
    let doc = loader.get_document("a").expect("a should load");

    assert_eq!(doc.body(), "Head Middle Tail");
    assert_eq!(doc.metadata().len(), 1);
    assert_eq!(doc.get("name").and_then(|v| v.as_str()), Some("a"));
    assert_eq!(doc.path().as_path(), env.path("a.md"));
    Ok(())
}

#[test]
fn test_extension_is_appended() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("z.md", "zed")?;

    let loader = env.loader()?;
    assert_eq!(loader.get_document("z").expect("z should load").body(), "zed");
    Ok(())
}

#[test]
fn test_document_without_frontmatter_is_unchanged() -> Result<()> {
    let env = TestEnvironment::new()?;
    let text = "# Title\n\n--- not a fence here\n\nSome text.\n";
    env.write("plain.md", text)?;

    let doc = env.loader()?.get_document("plain").expect("plain should load");
    assert!(doc.metadata().is_empty());
    assert_eq!(doc.body(), text);
    Ok(())
}

#[test]
fn test_only_one_newline_after_fence_is_stripped() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("spaced.md", "---\ntitle: x\n---\n\n\n  indented\n")?;

    let doc = env.loader()?.get_document("spaced").expect("spaced should load");
    assert_eq!(doc.body(), "\n\n  indented\n");
    Ok(())
}

#[test]
fn test_deep_nesting_across_directories() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("agents/lead.md", "---\nrole: lead\n---\n[@(../teams/core)]")?;
    env.write("teams/core.md", "core(@(members/alice), @(/teams/members/bob.md))")?;
    env.write("teams/members/alice.md", "---\nage: 30\n---\nalice")?;
    env.write("teams/members/bob.md", "bob")?;

    let loader = env.loader()?;
    let doc = loader.get_document("agents/lead").expect("lead should load");

    assert_eq!(doc.body(), "[core(alice, bob)]");
    assert_eq!(doc.get("role").and_then(|v| v.as_str()), Some("lead"));
    assert!(doc.get("age").is_none());

    let core = loader.get_document("teams/core").expect("core should load");
    assert_eq!(
        core.imports().iter().map(|p| p.as_path().to_path_buf()).collect::<Vec<_>>(),
        vec![env.path("teams/members/alice.md"), env.path("teams/members/bob.md")]
    );
    Ok(())
}

#[test]
fn test_whitespace_around_reference_is_trimmed() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("a.md", "<@(  ./b  )>")?;
    env.write("b.md", "B")?;

    assert_eq!(env.loader()?.get_document("a").expect("a should load").body(), "<B>");
    Ok(())
}

#[test]
fn test_fixtures_and_typed_metadata() -> Result<()> {
    #[derive(Debug, Deserialize)]
    struct AgentMeta {
        name: String,
        description: String,
    }

    let env = TestEnvironment::new()?;
    env.add(&DocumentFixture::snippet("tone", "Be concise."))?;
    env.add(&DocumentFixture::agent("reviewer").importing("/shared/tone"))?;

    let doc = env.loader()?.get_document("agents/reviewer").expect("reviewer should load");
    assert!(doc.body().ends_with("You are reviewer.\nBe concise.\n"));

    let meta: AgentMeta = doc.metadata_as()?;
    assert_eq!(meta.name, "reviewer");
    assert_eq!(meta.description, "Test agent: reviewer");

    let json = doc.metadata_json()?;
    assert_eq!(json["name"], "reviewer");
    Ok(())
}

#[test]
fn test_broken_frontmatter_is_absent() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("bad.md", "---\nname: [unclosed\n---\nbody")?;
    env.write("uses-bad.md", "x @(bad) y")?;

    let loader = env.loader()?;
    assert!(loader.get_document("bad").is_none());
    assert!(loader.get_document("uses-bad").is_none());
    assert_eq!(
        loader.try_get_document("uses-bad").unwrap_err().kind(),
        docweave::ErrorKind::ParseFailure
    );
    Ok(())
}

#[test]
fn test_missing_import_names_the_missing_path() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("a.md", "@(gone)")?;

    let err = env.loader()?.try_get_document("a").unwrap_err();
    assert_eq!(err.kind(), docweave::ErrorKind::NotFound);
    assert_eq!(err.path(), Some(env.path("gone.md").as_path()));
    Ok(())
}

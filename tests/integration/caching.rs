//! Each document is read once per loader.

use anyhow::Result;
use docweave::test_utils::{CountingStore, TestEnvironment};
use docweave::{FsStore, Loader};
use std::sync::Arc;

fn counting_loader(env: &TestEnvironment) -> Result<Loader<CountingStore<FsStore>>> {
    Loader::with_store(env.config(), CountingStore::new(FsStore::new()))
}

#[test]
fn test_same_name_returns_same_instance() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("a.md", "---\nname: a\n---\nA")?;
    let loader = counting_loader(&env)?;

    let first = loader.get_document("a").expect("a should load");
    let second = loader.get_document("a").expect("a should load");
    let third = loader.get_document("./a.md").expect("a should load");

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert_eq!(loader.store().reads(env.path("a.md")), 1);
    Ok(())
}

#[test]
fn test_shared_imports_read_once() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("one.md", "1 @(shared/footer)")?;
    env.write("two.md", "2 @(shared/footer) @(shared/footer)")?;
    env.write("shared/footer.md", "---\nkind: footer\n---\nfooter")?;
    let loader = counting_loader(&env)?;

    assert_eq!(loader.get_document("one").expect("one").body(), "1 footer");
    assert_eq!(loader.get_document("two").expect("two").body(), "2 footer footer");
    assert_eq!(loader.get_document("shared/footer").expect("footer").body(), "footer");

    assert_eq!(loader.store().reads(env.path("shared/footer.md")), 1);
    assert_eq!(loader.store().total_reads(), 3);

    let stats = loader.cache_stats();
    assert_eq!(stats.entries, 3);
    assert!(stats.hits >= 2);
    Ok(())
}

#[test]
fn test_cache_outlives_file_changes() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("a.md", "original")?;
    let loader = env.loader()?;

    assert_eq!(loader.get_document("a").expect("a").body(), "original");
    env.write("a.md", "edited")?;
    assert_eq!(loader.get_document("a").expect("a").body(), "original");

    // A new loader starts with an empty cache.
    assert_eq!(env.loader()?.get_document("a").expect("a").body(), "edited");
    Ok(())
}

#[test]
fn test_failed_document_is_not_cached() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("a.md", "@(done) @(later)")?;
    env.write("done.md", "done")?;
    let loader = counting_loader(&env)?;

    assert!(loader.get_document("a").is_none());
    assert!(loader.is_cached("done"));
    assert!(!loader.is_cached("a"));

    env.write("later.md", "later")?;
    assert_eq!(loader.get_document("a").expect("a").body(), "done later");
    assert_eq!(loader.store().reads(env.path("done.md")), 1);
    assert_eq!(loader.store().reads(env.path("a.md")), 2);
    Ok(())
}

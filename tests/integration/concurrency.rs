//! One loader shared between threads.

use anyhow::Result;
use docweave::test_utils::TestEnvironment;
use std::sync::Arc;
use std::thread;

#[test]
fn test_threads_share_one_cache() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("base.md", "base")?;
    for i in 0..8 {
        env.write(&format!("doc{i}.md"), &format!("{i}:@(base)"))?;
    }
    let loader = env.loader()?;

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let loader = &loader;
                scope.spawn(move || {
                    let doc = loader.get_document(&format!("doc{i}")).expect("doc should load");
                    let base = loader.get_document("base").expect("base should load");
                    (doc, base)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, (doc, base)) in results.iter().enumerate() {
        assert_eq!(doc.body(), format!("{i}:base"));
        assert!(Arc::ptr_eq(base, &results[0].1));
    }
    assert_eq!(loader.cache_stats().entries, 9);
    Ok(())
}

#[test]
fn test_concurrent_cycles_do_not_collide() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write("x.md", "@(y)")?;
    env.write("y.md", "@(x)")?;
    env.write("shared.md", "s")?;
    env.write("user.md", "@(shared)@(shared)")?;
    let loader = env.loader()?;

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert!(loader.get_document("x").is_none()));
            scope.spawn(|| assert_eq!(loader.get_document("user").expect("user").body(), "ss"));
        }
    });
    Ok(())
}

//! Test utilities for docweave
//!
//! Helpers shared by the unit tests and the integration suite:
//!
//! - [`TestEnvironment`] - a temporary document root on disk
//! - [`DocumentFixture`] - sample documents with frontmatter and imports
//! - [`CountingStore`] - a store wrapper that counts reads per path
//!
//! Enabled for the crate's own tests and, for integration tests, through the
//! `test-utils` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use docweave::test_utils::TestEnvironment;
//!
//! let env = TestEnvironment::new().unwrap();
//! env.write("a.md", "Head @(./b) Tail").unwrap();
//! env.write("b.md", "Middle").unwrap();
//!
//! let loader = env.loader().unwrap();
//! assert_eq!(loader.get_document("a").unwrap().body(), "Head Middle Tail");
//! ```

mod counting;
pub mod environment;
pub mod fixtures;

pub use counting::CountingStore;
pub use environment::TestEnvironment;
pub use fixtures::DocumentFixture;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Variable read before `RUST_LOG`, so loader traces can be enabled without
/// affecting other crates' tests.
pub const TEST_LOG_ENV: &str = "DOCWEAVE_TEST_LOG";

static INIT_LOGGING: Once = Once::new();

/// Install a compact, test-captured subscriber the first time it is called.
///
/// Nothing is installed unless [`TEST_LOG_ENV`] or `RUST_LOG` holds a valid
/// filter, so a plain `cargo test` stays quiet.
///
/// ```bash
/// DOCWEAVE_TEST_LOG=docweave::resolver=trace cargo test --test integration
/// ```
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let Ok(filter) =
            EnvFilter::try_from_env(TEST_LOG_ENV).or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .compact()
            .try_init();
    });
}

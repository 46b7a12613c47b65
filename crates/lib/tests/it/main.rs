/*! Integration tests for Strata.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - document: construction, classification, key and path access
 * - sealed: the read-only variant and its rejected writes
 * - merge: deep-merge semantics across one or more operands
 * - path: dot-path handling at the document boundary
 * - value: conversions and comparisons on the value type
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("strata=trace".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod document;

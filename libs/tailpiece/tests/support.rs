use tracing_subscriber::EnvFilter;

/// Installs a test-scoped subscriber; `RUST_LOG=tailpiece=trace` shows codec decisions.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Content whose tail happens to look exactly like a footer.
#[allow(dead_code)]
pub fn lookalike_content() -> Vec<u8> {
    let mut buf = vec![0x5A; 16];
    buf.extend_from_slice(b"DpR;");
    buf.extend_from_slice(&3i32.to_le_bytes());
    buf
}

#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz catalog document parsing and validation.
///
/// Any input that parses must validate without panicking, and a catalog
/// that builds must compose an admin preview.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(catalog) = pharma_readiness::catalog::parse_catalog_str(s, None) {
            let config = pharma_readiness::AssessmentConfiguration::builder("admin").build();
            let _ = pharma_readiness::engine::compose_preview(&catalog, &config);
        }
    }
});

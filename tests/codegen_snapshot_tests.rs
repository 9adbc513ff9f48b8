//! Golden snapshot tests for the generated artifacts
//!
//! These tests render both artifacts for a small catalog and compare them
//! against stored snapshots, so every change to the generated text is reviewed.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use firgen::{GeneratorConfig, SignatureCatalog, SignatureDescriptor, render};

/// The two-signature example catalog: `sf` with float taps, `cc` with complex taps.
fn sf_cc_catalog() -> SignatureCatalog {
    SignatureCatalog::from_descriptors(vec![
        SignatureDescriptor::explicit("sf", "float").expect("sf descriptor"),
        SignatureDescriptor::explicit("cc", "gr_complex").expect("cc descriptor"),
    ])
    .expect("catalog")
}

#[test]
fn test_sf_cc_header_snapshot() {
    let [header, _] = render(&sf_cc_catalog(), &GeneratorConfig::default()).expect("render failed");
    insta::assert_snapshot!("sf_cc_header", header.contents());
}

#[test]
fn test_sf_cc_implementation_snapshot() {
    let [_, implementation] = render(&sf_cc_catalog(), &GeneratorConfig::default()).expect("render failed");
    insta::assert_snapshot!("sf_cc_implementation", implementation.contents());
}

#[test]
fn test_create_sf_declared_before_create_cc() {
    let [header, _] = render(&sf_cc_catalog(), &GeneratorConfig::default()).expect("render failed");
    let text = header.contents();
    let sf = text.find("create_gr_fir_sf (").expect("sf entry");
    let cc = text.find("create_gr_fir_cc (").expect("cc entry");
    let first_info = text.find("get_gr_fir_sf_info (").expect("sf info entry");
    assert!(sf < cc);
    assert!(cc < first_info, "all creation entries precede info entries");
}

#[test]
fn test_create_sf_body_is_single_return() {
    let [_, implementation] = render(&sf_cc_catalog(), &GeneratorConfig::default()).expect("render failed");
    let text = implementation.contents();
    let start = text
        .find("gr_fir_util::create_gr_fir_sf (const std::vector<float> &taps)\n{\n")
        .expect("sf definition");
    let body_start = start + text[start..].find("{\n").expect("body open") + 2;
    let body_end = body_start + text[body_start..].find("}\n").expect("body close");
    assert_eq!(
        &text[body_start..body_end],
        "  return gr_fir_sysconfig_singleton()->create_gr_fir_sf (taps);\n"
    );
}

//! Property-based tests for the generator
//!
//! These tests use proptest to check the artifact invariants across many
//! randomly chosen catalogs of `IOT` signatures.

use firgen::{GeneratorConfig, SignatureCatalog, render};
use proptest::prelude::*;

/// Every `IOT` code over the element letters, in a fixed order.
fn all_codes() -> Vec<String> {
    let letters = ['s', 'i', 'f', 'c'];
    let mut codes = Vec::new();
    for i in letters {
        for o in letters {
            for t in letters {
                codes.push(format!("{i}{o}{t}"));
            }
        }
    }
    codes
}

/// Random catalogs: distinct codes in random order.
fn catalog_codes() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(all_codes(), 0..=12).prop_shuffle()
}

fn render_texts(codes: &[String]) -> (String, String) {
    let catalog = SignatureCatalog::from_codes(codes).expect("valid catalog");
    let [header, implementation] = render(&catalog, &GeneratorConfig::default()).expect("render failed");
    (header.contents(), implementation.contents())
}

fn positions(text: &str, needles: impl Iterator<Item = String>) -> Vec<usize> {
    needles
        .map(|n| text.find(&n).unwrap_or_else(|| panic!("`{n}` missing")))
        .collect()
}

fn is_increasing(v: &[usize]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: rendering the same catalog twice is byte-identical
    #[test]
    fn rendering_is_deterministic(codes in catalog_codes()) {
        prop_assert_eq!(render_texts(&codes), render_texts(&codes));
    }

    /// Property: each signature contributes exactly one fragment of each kind
    #[test]
    fn one_fragment_group_per_signature(codes in catalog_codes()) {
        let (header, implementation) = render_texts(&codes);
        for c in &codes {
            prop_assert_eq!(header.matches(&format!("class gr_fir_{c};")).count(), 1);
            prop_assert_eq!(header.matches(&format!("struct gr_fir_{c}_info {{")).count(), 1);
            prop_assert_eq!(header.matches(&format!("*create_gr_fir_{c} (")).count(), 1);
            prop_assert_eq!(header.matches(&format!("get_gr_fir_{c}_info (")).count(), 1);

            prop_assert_eq!(implementation.matches(&format!("::create_gr_fir_{c} (")).count(), 1);
            prop_assert_eq!(implementation.matches(&format!("->create_gr_fir_{c} (taps);")).count(), 1);
            prop_assert_eq!(implementation.matches(&format!("::get_gr_fir_{c}_info (")).count(), 1);
            prop_assert_eq!(implementation.matches(&format!("->get_gr_fir_{c}_info (info);")).count(), 1);
        }
        // One delegating call per generated function and nothing else.
        prop_assert_eq!(implementation.matches("->").count(), 2 * codes.len());
    }

    /// Property: declarations and definitions follow catalog order in both artifacts
    #[test]
    fn artifacts_follow_catalog_order(codes in catalog_codes()) {
        let (header, implementation) = render_texts(&codes);

        let decl_creates = positions(&header, codes.iter().map(|c| format!("*create_gr_fir_{c} (")));
        let decl_infos = positions(&header, codes.iter().map(|c| format!("get_gr_fir_{c}_info (")));
        let def_creates = positions(&implementation, codes.iter().map(|c| format!("::create_gr_fir_{c} (")));
        let def_infos = positions(&implementation, codes.iter().map(|c| format!("::get_gr_fir_{c}_info (")));

        prop_assert!(is_increasing(&decl_creates));
        prop_assert!(is_increasing(&decl_infos));
        prop_assert!(is_increasing(&def_creates));
        prop_assert!(is_increasing(&def_infos));

        if let (Some(last_create), Some(first_info)) = (decl_creates.last(), decl_infos.first()) {
            prop_assert!(last_create < first_info);
        }
        if let (Some(last_create), Some(first_info)) = (def_creates.last(), def_infos.first()) {
            prop_assert!(last_create < first_info);
        }
    }

    /// Property: removing a signature removes every trace of it and nothing else
    #[test]
    fn removal_leaves_no_residue(codes in catalog_codes(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!codes.is_empty());
        let removed = codes[pick.index(codes.len())].clone();

        let full = SignatureCatalog::from_codes(codes.as_slice()).expect("valid catalog");
        let reduced = full.without(&removed);
        let [header, implementation] = render(&reduced, &GeneratorConfig::default()).expect("render failed");

        let token = format!("gr_fir_{removed}");
        prop_assert!(!header.contents().contains(&token));
        prop_assert!(!implementation.contents().contains(&token));

        let remaining: Vec<String> = codes.iter().filter(|c| **c != removed).cloned().collect();
        let expected = render_texts(&remaining);
        prop_assert_eq!((header.contents(), implementation.contents()), expected);
    }
}

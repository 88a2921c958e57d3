//! End-to-end manifest construction through the variant registry.

mod common;

use std::sync::Arc;

use serial_test::serial;
use stager::{manifest, Manifest, ManifestVariant, PathMapping, Result};

use common::ManifestFixture;

/// The demo construction body: nested scopes, wildcard patterns, and a
/// nested source directory remapped to the destination root.
fn demo_variant(m: &mut Manifest) -> Result<()> {
    if m.prefix("dir_1") {
        m.path("test_a");
        m.path_to("test_b", "test_dst_b");
        m.path("*.test");
        m.path_to("*.tex", "*.jpg");
        if m.prefix_into("nested", "") {
            m.path("deep");
            m.end_prefix()?;
        }
        m.end_prefix_named("dir_1")?;
    }
    Ok(())
}

#[test]
#[serial]
fn demo_construction_resolves_all_mappings() {
    manifest::register("demo", None, Arc::new(demo_variant));

    let variant = manifest::for_platform("demo", None).unwrap();
    let mut m = ManifestFixture::new().build();
    variant.construct(&mut m).unwrap();

    let mappings = m.into_mappings().unwrap();
    assert_eq!(
        mappings,
        [
            PathMapping {
                src: "src/dir_1/test_a".to_string(),
                dst: "dst/dir_1/test_a".to_string(),
            },
            PathMapping {
                src: "src/dir_1/test_b".to_string(),
                dst: "dst/dir_1/test_dst_b".to_string(),
            },
            PathMapping {
                src: "src/dir_1/*.test".to_string(),
                dst: "dst/dir_1/*.test".to_string(),
            },
            PathMapping {
                src: "src/dir_1/*.tex".to_string(),
                dst: "dst/dir_1/*.jpg".to_string(),
            },
            PathMapping {
                src: "src/dir_1/nested/deep".to_string(),
                dst: "dst/dir_1/deep".to_string(),
            },
        ]
    );
}

#[test]
#[serial]
fn arch_specific_variant_shadows_platform_variant() {
    manifest::register("demo", None, Arc::new(demo_variant));
    manifest::register(
        "demo",
        Some("Arch"),
        Arc::new(|_: &mut Manifest| -> Result<()> { Ok(()) }),
    );

    let general = manifest::for_platform("demo", None).unwrap();
    let specific = manifest::for_platform("demo", Some("Arch")).unwrap();
    assert!(!Arc::ptr_eq(&general, &specific));

    // Lookup is reference-stable.
    let again = manifest::for_platform("demo", Some("Arch")).unwrap();
    assert!(Arc::ptr_eq(&specific, &again));
}

#[test]
#[serial]
fn lookup_before_registration_fails_then_succeeds() {
    let err = manifest::for_platform("extant", None).unwrap_err();
    assert!(err.is_not_found());

    manifest::register(
        "extant",
        None,
        Arc::new(|_: &mut Manifest| -> Result<()> { Ok(()) }),
    );
    assert!(manifest::for_platform("extant", None).is_ok());
}

#[test]
#[serial]
fn variant_leaving_scopes_open_is_rejected() {
    manifest::register(
        "lopsided",
        None,
        Arc::new(|m: &mut Manifest| -> Result<()> {
            m.prefix("opened");
            Ok(())
        }),
    );

    let variant = manifest::for_platform("lopsided", None).unwrap();
    let mut m = ManifestFixture::new().with_platform("lopsided").build();
    variant.construct(&mut m).unwrap();

    let err = m.into_mappings().unwrap_err();
    assert!(format!("{err}").contains("open"));
}

#[test]
#[serial]
fn scope_misuse_aborts_construction() {
    manifest::register(
        "misclosed",
        None,
        Arc::new(|m: &mut Manifest| -> Result<()> {
            m.prefix("bin");
            m.path("app");
            m.end_prefix_named("lib")?;
            m.path("unreached");
            Ok(())
        }),
    );

    let variant = manifest::for_platform("misclosed", None).unwrap();
    let mut m = ManifestFixture::new().with_platform("misclosed").build();
    let err = variant.construct(&mut m).unwrap_err();
    assert!(err.is_scope_error());
    // The mapping recorded before the failure is still visible.
    assert_eq!(m.mappings().len(), 1);
}

#[test]
#[serial]
fn derived_variant_extends_registered_parent() {
    manifest::register("demo", None, Arc::new(demo_variant));
    let parent = manifest::for_platform("demo", None).unwrap();

    manifest::register(
        "demo_branded",
        None,
        Arc::new(stager::DerivedVariant::new(
            parent,
            |m: &mut Manifest| -> Result<()> {
                m.path("branding.xml");
                Ok(())
            },
        )),
    );

    let variant = manifest::for_platform("demo_branded", None).unwrap();
    let mut m = ManifestFixture::new().build();
    variant.construct(&mut m).unwrap();

    let mappings = m.into_mappings().unwrap();
    assert_eq!(mappings.len(), 6);
    assert_eq!(mappings[5].src, "src/branding.xml");
}

// Integration tests for the startup catalog scan

use crate::common::DistTree;
use vitrine::{Catalog, VitrineError};

#[test]
fn test_full_card_from_descriptor() {
    let dist = DistTree::new();
    dist.add_entry(
        "particle-flow",
        Some(concat!(
            "title = \"Particle Flow\"\n",
            "description = \"A field of drifting particles\"\n",
            "tags = [\"canvas\", \"animation\"]\n",
        )),
        &["index.html", "icon.png"],
    );

    let catalog = Catalog::load(dist.path()).unwrap();
    assert_eq!(catalog.len(), 1);

    let card = &catalog.cards()[0];
    assert_eq!(card.id, "particle-flow");
    assert_eq!(card.title, "Particle Flow");
    assert_eq!(card.description, "A field of drifting particles");
    assert_eq!(card.url, "/Visualizations/particle-flow/index.html");
    assert_eq!(
        card.icon.as_deref(),
        Some("/Visualizations/particle-flow/icon.png")
    );
    assert_eq!(card.tags, ["canvas", "animation"]);
}

#[test]
fn test_cards_keep_directory_order() {
    let dist = DistTree::new();
    dist.add_entries(12);

    let catalog = Catalog::load(dist.path()).unwrap();
    assert_eq!(catalog.len(), 12);

    let ids: Vec<&str> = catalog.cards().iter().map(|c| c.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(ids[0], "viz-00");
    assert_eq!(ids[11], "viz-11");
}

#[test]
fn test_mixed_tree_keeps_only_valid_entries() {
    let dist = DistTree::new();
    dist.add_entry("a-valid", Some("title = \"A\"\n"), &["index.html"]);
    dist.add_entry("b-bare", None, &["index.html"]);
    dist.add_entry("c-broken", Some("title = = nope"), &[]);
    dist.add_entry("d-valid", Some("title = \"D\"\n"), &[]);
    dist.add_static("stray.txt", "not an entry");

    let catalog = Catalog::load(dist.path()).unwrap();
    let ids: Vec<&str> = catalog.cards().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["a-valid", "d-valid"]);
}

#[test]
fn test_two_complete_entries_and_one_empty_folder() {
    let dist = DistTree::new();
    dist.add_entry(
        "galaxy",
        Some("title = \"Galaxy\"\n"),
        &["index.html", "icon.png"],
    );
    dist.add_entry(
        "tides",
        Some("title = \"Tides\"\n"),
        &["index.html", "icon.svg"],
    );
    dist.add_entry("empty", None, &[]);

    let catalog = Catalog::load(dist.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    for card in catalog.cards() {
        assert!(card.icon.as_deref().is_some_and(|icon| !icon.is_empty()));
        assert_ne!(card.id, "empty");
    }
}

#[test]
fn test_missing_catalog_dir_is_an_error() {
    let dist = DistTree::without_catalog();

    match Catalog::load(dist.path()) {
        Err(VitrineError::CatalogUnreadable { path, .. }) => {
            assert!(path.ends_with("Visualizations"));
        }
        other => panic!("expected CatalogUnreadable, got {other:?}"),
    }
}

#[test]
fn test_scan_does_not_recurse() {
    let dist = DistTree::new();
    dist.add_entry("outer", Some("title = \"Outer\"\n"), &[]);

    // A nested directory with its own descriptor is part of the entry,
    // not a second card.
    let nested = dist.viz_dir().join("outer").join("inner");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("metadata.toml"), "title = \"Inner\"\n").unwrap();

    let catalog = Catalog::load(dist.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.cards()[0].id, "outer");
}

#[test]
fn test_empty_descriptor_yields_default_card() {
    let dist = DistTree::new();
    dist.add_entry("plain", Some(""), &[]);

    let catalog = Catalog::load(dist.path()).unwrap();
    let card = &catalog.cards()[0];
    // Descriptor fields come through verbatim, empty included; only
    // id and url are synthesized.
    assert_eq!(card.id, "plain");
    assert_eq!(card.title, "");
    assert_eq!(card.description, "");
    assert!(card.tags.is_empty());
    assert_eq!(card.icon, None);
    assert_eq!(card.url, "/Visualizations/plain/index.html");
}

#[test]
fn test_descriptor_unknown_keys_are_tolerated() {
    let dist = DistTree::new();
    dist.add_entry(
        "forward-compat",
        Some("title = \"FC\"\nauthor = \"someone\"\nweight = 3\n"),
        &[],
    );

    let catalog = Catalog::load(dist.path()).unwrap();
    assert_eq!(catalog.cards()[0].title, "FC");
}

#[test]
fn test_unicode_entry_names_survive() {
    let dist = DistTree::new();
    dist.add_entry("波-wave", Some("title = \"Wave\"\n"), &["icon.svg"]);

    let catalog = Catalog::load(dist.path()).unwrap();
    let card = &catalog.cards()[0];
    assert_eq!(card.id, "波-wave");
    assert_eq!(card.url, "/Visualizations/波-wave/index.html");
    assert_eq!(
        card.icon.as_deref(),
        Some("/Visualizations/波-wave/icon.svg")
    );
}

#[test]
fn test_icon_extension_is_free_form() {
    let dist = DistTree::new();
    dist.add_entry("any-ext", Some("title = \"t\"\n"), &["icon.webp"]);

    let catalog = Catalog::load(dist.path()).unwrap();
    assert_eq!(
        catalog.cards()[0].icon.as_deref(),
        Some("/Visualizations/any-ext/icon.webp")
    );
}

#[test]
fn test_file_named_like_entry_is_ignored() {
    let dist = DistTree::new();
    std::fs::write(dist.viz_dir().join("not-a-dir"), "plain file").unwrap();

    let catalog = Catalog::load(dist.path()).unwrap();
    assert!(catalog.is_empty());
}

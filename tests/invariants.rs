//! Contract Invariant Tests
//!
//! These tests pin the naming convention, the price table and the ledger laws.

use pettag_core::{
    resolve_asset_path, resolve_price,
    tables::Fragment,
    Cart, Color, EntryId, Pattern, Selection, Shape, Size,
};
use strum::IntoEnumIterator;

fn named(text: &str) -> Selection {
    Selection { text: text.to_string(), ..Selection::default() }
}

#[test]
fn invariant_asset_path_for_every_triple() {
    let mut seen = std::collections::HashSet::new();

    for shape in Shape::iter() {
        for color in Color::iter() {
            for pattern in Pattern::iter() {
                let s = Selection::new(shape, color, pattern, Size::M, "");
                let path = resolve_asset_path(&s);
                let expected = format!(
                    "img/{}_{}_{}.png",
                    shape.fragment(),
                    color.fragment(),
                    pattern.fragment()
                );
                assert_eq!(path, expected);
                seen.insert(path);
            }
        }
    }

    // 3 x 3 x 3 distinct files
    assert_eq!(seen.len(), 27);
}

#[test]
fn invariant_price_table() {
    let priced: Vec<_> = Size::iter()
        .map(|size| resolve_price(&Selection { size, ..Selection::default() }))
        .collect();
    assert_eq!(priced, vec![1200, 1500, 1800]);
    assert!(priced.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn invariant_add_then_remove_restores_cart() {
    let mut cart = Cart::new();
    cart.add(&Selection { size: Size::L, ..named("REX") });
    let total_before = cart.total();
    let len_before = cart.len();

    let id = cart.add(&named("LUNA")).id;
    assert_eq!(cart.len(), len_before + 1);

    cart.remove(id);
    assert_eq!(cart.total(), total_before);
    assert_eq!(cart.len(), len_before);
}

#[test]
fn invariant_remove_unknown_is_noop() {
    let mut cart = Cart::new();
    let id = cart.add(&named("LUNA")).id;
    let before = cart.manifest_hash().unwrap();

    cart.remove(EntryId(id.0 + 100));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), 1500);
    assert_eq!(cart.manifest_hash().unwrap(), before);

    // removing twice behaves the same as once
    cart.remove(id);
    cart.remove(id);
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0);
}

#[test]
fn invariant_snapshot_isolation() {
    let mut cart = Cart::new();
    let mut live = named("LUNA");
    let id = cart.add(&live).id;
    let fingerprint = cart.get(id).unwrap().fingerprint().unwrap();

    live.shape = Shape::Circle;
    live.color = Color::Blue;
    live.pattern = Pattern::Stripes;
    live.size = Size::L;
    live.text = "OTRO".to_string();

    let entry = cart.get(id).unwrap();
    assert_eq!(entry.design, named("LUNA"));
    assert_eq!(entry.price, 1500);
    assert_eq!(entry.fingerprint().unwrap(), fingerprint);
}

#[test]
fn invariant_ids_unique_under_rapid_adds() {
    let mut cart = Cart::new();
    let ids: Vec<_> = (0..100).map(|_| cart.add(&named("LUNA")).id).collect();
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

//! Default cart contents used to seed an empty store.

use crate::cart::Item;
use crate::money::Money;

/// The three demo items a fresh cart starts with.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("item1", "프리미엄 무선 이어폰", Money::new(120_000), 1)
            .with_image("https://picsum.photos/id/10/80/80")
            .with_selected(true),
        Item::new("item2", "고속 충전 보조배터리", Money::new(35_000), 2)
            .with_image("https://picsum.photos/id/19/80/80")
            .with_selected(false),
        Item::new("item3", "인체공학 무선 마우스", Money::new(25_000), 1)
            .with_image("https://picsum.photos/id/20/80/80")
            .with_selected(true),
    ]
}

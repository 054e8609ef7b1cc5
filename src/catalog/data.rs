//! Built-in demo assortment, used when no catalog file is configured.

use super::models::Product;

const IMG_QUERY: &str = "?q=80&w=1200&auto=format&fit=crop";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{IMG_QUERY}")
}

fn item(
    id: &str,
    brand: &str,
    title: &str,
    price_rub: u64,
    photo: &str,
    category: &str,
    tags: &[&str],
) -> Product {
    Product {
        id: id.into(),
        brand: brand.into(),
        title: title.into(),
        price_rub,
        img: unsplash(photo),
        category: category.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        in_stock: Some(true),
        discount_pct: None,
    }
}

/// Regularly available items.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        item("p1", "Hermès", "Kelly 20 Sellier", 4_100_000, "photo-1548036328-c9fa89d128fa", "bags", &["VIP", "Rare"]),
        item("p2", "Fendi", "Baguette Sequins", 390_000, "photo-1551537482-f2075a1d41f2", "bags", &["New"]),
        item("p3", "Gucci", "Horsebit 1955", 285_000, "photo-1548036324-8a1f9d3b1a02", "bags", &["Classic"]),
        item("p4", "Cartier", "Love Bracelet", 720_000, "photo-1599643475993-6f2b1a7b3b19", "jewelry", &["Jewelry"]),
    ]
}

/// Discounted items for the hot deals tab.
pub fn demo_hot() -> Vec<Product> {
    let mut birkin = item("h1", "Hermès", "Birkin 25 Togo", 4_300_000, "photo-1616512651851-6d5f2f0dcf65", "bags", &[]);
    birkin.discount_pct = Some(10);

    let mut flap = item("h2", "Chanel", "Classic Flap Mini", 620_000, "photo-1543776703-0359126f0615", "bags", &[]);
    flap.discount_pct = Some(7);

    vec![birkin, flap]
}

//! Fixture catalog.
//!
//! The storefront ships with a fixed product set; the catalog service serves
//! it read-only. Prices are in rupees, ratings in tenths of a star.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::products::{Category, Product, Review};

fn base(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    image: &str,
    rating_tenths: i64,
    category: Category,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price, 0),
        image: image.to_string(),
        rating: Decimal::new(rating_tenths, 1),
        category,
        brand: None,
        specs: BTreeMap::new(),
        platform: None,
        genre: None,
        reviews: Vec::new(),
        original_price: None,
        in_stock: None,
        is_new: None,
    }
}

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn review(id: &str, user: &str, rating: u8, comment: &str, date: &str) -> Review {
    Review {
        id: id.to_string(),
        user: user.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    }
}

/// The full fixture catalog.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            brand: Some("NVIDIA".to_string()),
            specs: specs(&[
                ("VRAM", "24GB GDDR6X"),
                ("Boost Clock", "2.52 GHz"),
                ("Cores", "16384"),
            ]),
            reviews: vec![
                review(
                    "r1",
                    "Rahul K.",
                    5,
                    "Absolute beast of a card. Runs everything at 4K 120fps.",
                    "2023-11-15",
                ),
                review(
                    "r2",
                    "Amit S.",
                    5,
                    "Expensive but worth every rupee for rendering.",
                    "2023-12-02",
                ),
            ],
            in_stock: Some(false),
            ..base(
                "1",
                "NVIDIA GeForce RTX 4090",
                "The ultimate GeForce GPU. An enormous leap in performance, \
                 efficiency, and AI-powered graphics.",
                158_999,
                "/images/products/rtx4090.jpg",
                49,
                Category::Hardware,
            )
        },
        Product {
            platform: Some("PC".to_string()),
            genre: Some("RPG".to_string()),
            reviews: vec![review(
                "r3",
                "Priya M.",
                5,
                "Night City has never looked better. Story is top notch.",
                "2023-10-10",
            )],
            ..base(
                "2",
                "Cyberpunk 2077: Phantom Liberty",
                "A new spy-thriller adventure for Cyberpunk 2077. Return as \
                 cyber-enhanced mercenary V.",
                2_999,
                "/images/products/cyberpunk2077.jpg",
                48,
                Category::Game,
            )
        },
        Product {
            brand: Some("Logitech".to_string()),
            specs: specs(&[("DPI", "25,600"), ("Weight", "<63g"), ("Battery", "70h")]),
            reviews: vec![review(
                "r4",
                "Vikram S.",
                4,
                "Super light, aim feels snappy. Battery life is insane.",
                "2023-09-20",
            )],
            in_stock: Some(false),
            ..base(
                "3",
                "Logitech G Pro X Superlight",
                "Designed with and for pros. The lightest, fastest PRO mouse ever.",
                12_995,
                "/images/products/gpro-superlight.jpg",
                47,
                Category::Hardware,
            )
        },
        Product {
            platform: Some("PS5".to_string()),
            genre: Some("Action RPG".to_string()),
            reviews: vec![review(
                "r5",
                "Arjun R.",
                5,
                "A masterpiece. Difficult but rewarding.",
                "2022-03-15",
            )],
            ..base(
                "4",
                "Elden Ring",
                "THE NEW FANTASY ACTION RPG. Rise, Tarnished, and be guided by grace.",
                3_999,
                "/images/products/elden-ring.jpg",
                49,
                Category::Game,
            )
        },
        Product {
            brand: Some("Razer".to_string()),
            specs: specs(&[
                ("Switch", "Linear Optical"),
                ("Polling Rate", "8000Hz"),
                ("Keycaps", "PBT"),
            ]),
            reviews: vec![review(
                "r6",
                "Neha G.",
                4,
                "Clicky and fast. Wrist rest is comfortable.",
                "2023-08-05",
            )],
            ..base(
                "5",
                "Razer Huntsman V2",
                "Optical Gaming Keyboard with Near-zero Latency.",
                15_499,
                "/images/products/huntsman-v2.jpg",
                46,
                Category::Hardware,
            )
        },
        Product {
            brand: Some("Nexus".to_string()),
            specs: specs(&[("Includes", "Mic, Cam, Light"), ("Savings", "₹12,000")]),
            reviews: vec![review(
                "r8",
                "Simran K.",
                5,
                "Great starter pack for my channel!",
                "2024-01-10",
            )],
            original_price: Some(Decimal::new(36_999, 0)),
            ..base(
                "7",
                "Ultimate Streamer Bundle",
                "Everything you need to start streaming: Mic, Webcam, and Ring \
                 Light. Limited Time Offer!",
                24_999,
                "/images/products/streamer-bundle.jpg",
                50,
                Category::Deals,
            )
        },
        Product {
            brand: Some("Razer/Logitech".to_string()),
            specs: specs(&[("Mouse", "20k DPI"), ("Keyboard", "Mechanical Red")]),
            reviews: vec![review(
                "r9",
                "Rohan D.",
                4,
                "Good value for money. Mouse is excellent.",
                "2024-02-01",
            )],
            original_price: Some(Decimal::new(15_999, 0)),
            in_stock: Some(false),
            ..base(
                "8",
                "Pro FPS Gamer Kit",
                "High-precision mouse + Mechanical Keyboard combo for \
                 competitive gaming.",
                11_999,
                "/images/products/fps-kit.jpg",
                47,
                Category::Deals,
            )
        },
        Product {
            brand: Some("Alienware".to_string()),
            specs: specs(&[
                ("Refresh", "175Hz"),
                ("Panel", "QD-OLED"),
                ("Response", "0.1ms"),
            ]),
            reviews: vec![review(
                "r11",
                "Ankit P.",
                5,
                "Colors are vibrant. HDR is mind-blowing.",
                "2023-12-15",
            )],
            ..base(
                "10",
                "Alienware 34\" Curved Monitor",
                "QD-OLED Gaming Monitor with 175Hz refresh rate for immersive \
                 gameplay.",
                89_999,
                "/images/products/alienware-monitor.jpg",
                49,
                Category::Hardware,
            )
        },
        Product {
            brand: Some("ASUS".to_string()),
            specs: specs(&[("Panel", "OLED"), ("Refresh", "240Hz")]),
            is_new: Some(true),
            ..base(
                "19",
                "ASUS ROG Swift OLED 27\"",
                "1440p 240Hz OLED Gaming Monitor. The endgame for competitive \
                 immersive gaming.",
                84_999,
                "/images/products/rog-oled.jpg",
                50,
                Category::Hardware,
            )
        },
        Product {
            platform: Some("PC / Xbox".to_string()),
            genre: Some("RPG".to_string()),
            is_new: Some(true),
            ..base(
                "21",
                "Starfield",
                "In this next generation RPG set amongst the stars, create any \
                 character you want and explore with unparalleled freedom.",
                4_999,
                "/images/products/starfield.jpg",
                45,
                Category::Game,
            )
        },
        Product {
            brand: Some("Elgato".to_string()),
            specs: specs(&[("Keys", "15 LCD"), ("Custom", "Yes")]),
            original_price: Some(Decimal::new(16_999, 0)),
            is_new: Some(true),
            ..base(
                "24",
                "Elgato Stream Deck MK.2",
                "15 LCD keys, fully customizable. The ultimate interface for \
                 your setup.",
                13_999,
                "/images/products/stream-deck.jpg",
                49,
                Category::Deals,
            )
        },
    ]
}

/// Look up a single fixture product by id.
pub fn product(id: &str) -> Option<Product> {
    products().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_is_represented() {
        let all = products();

        for category in [Category::Hardware, Category::Game, Category::Deals] {
            assert!(
                all.iter().any(|p| p.category == category),
                "no fixture for {category:?}"
            );
        }
    }

    #[test]
    fn ids_are_unique() {
        let all = products();
        let mut ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), all.len(), "duplicate fixture ids");
    }

    #[test]
    fn deals_carry_an_original_price() {
        for deal in products().iter().filter(|p| p.category == Category::Deals) {
            assert!(
                deal.original_price.is_some(),
                "deal {} has no original price",
                deal.id
            );
        }
    }

    #[test]
    fn lookup_by_id() {
        assert!(product("4").is_some());
        assert!(product("999").is_none());
    }
}

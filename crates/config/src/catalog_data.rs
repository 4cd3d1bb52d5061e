//! Built-in catalog seed data and the optional YAML override loader
//!
//! The seed tables below are the shipped catalog. Deployments that need a
//! different assortment point `catalog.path` at a YAML file with the same
//! shape; the built-in data is used when no override is configured.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use stylist_core::{Category, Product};

#[derive(Error, Debug)]
pub enum CatalogDataError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

struct ProductSeed {
    name: &'static str,
    price: u32,
    original_price: Option<u32>,
    description: &'static str,
    rating: f32,
    ratings_count: u32,
    image: &'static str,
    sizes: &'static [&'static str],
    tags: &'static [&'static str],
}

struct CategorySeed {
    name: &'static str,
    products: &'static [ProductSeed],
}

const MENS_SIZES: &[&str] = &["M", "L", "XL", "XXL"];
const BLOUSE_SIZES: &[&str] = &["32", "34", "36", "38", "40"];

const CATALOG_SEEDS: &[CategorySeed] = &[
    CategorySeed {
        name: "Punjabis",
        products: &[
            ProductSeed {
                name: "Black Designer Punjabi",
                price: 957,
                original_price: Some(1199),
                description: "Elegant black punjabi with subtle embroidery on the collar and placket. Comfortable cotton-blend for all-day wear.",
                rating: 4.7,
                ratings_count: 523,
                image: "products/black-designer-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "festive"],
            },
            ProductSeed {
                name: "Navy Blue Designer Punjabi",
                price: 1047,
                original_price: Some(1299),
                description: "Deep navy punjabi with tonal thread work. Pairs well with a white churidar.",
                rating: 4.6,
                ratings_count: 488,
                image: "products/navy-blue-designer-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "festive"],
            },
            ProductSeed {
                name: "White Cotton Punjabi",
                price: 649,
                original_price: None,
                description: "Classic white punjabi in breathable handloom cotton. Everyday comfort.",
                rating: 4.4,
                ratings_count: 391,
                image: "products/white-cotton-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "cotton", "handloom"],
            },
            ProductSeed {
                name: "Maroon Silk Punjabi",
                price: 1899,
                original_price: Some(2199),
                description: "Rich maroon silk punjabi with golden buttons. Wedding-ready.",
                rating: 4.8,
                ratings_count: 276,
                image: "products/maroon-silk-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "silk", "festive"],
            },
            ProductSeed {
                name: "Sky Blue Summer Punjabi",
                price: 799,
                original_price: None,
                description: "Light sky blue punjabi that stays cool through long summer days.",
                rating: 4.3,
                ratings_count: 214,
                image: "products/sky-blue-summer-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "cotton"],
            },
            ProductSeed {
                name: "Golden Jacquard Punjabi",
                price: 2499,
                original_price: None,
                description: "Golden jacquard weave punjabi for grooms and grand occasions.",
                rating: 4.9,
                ratings_count: 163,
                image: "products/golden-jacquard-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "silk", "festive"],
            },
            ProductSeed {
                name: "Grey Slim Fit Punjabi",
                price: 899,
                original_price: None,
                description: "Slim-fit grey punjabi with a mandarin collar.",
                rating: 4.2,
                ratings_count: 342,
                image: "products/grey-slim-fit-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "cotton"],
            },
            ProductSeed {
                name: "Olive Festive Punjabi",
                price: 1249,
                original_price: Some(1399),
                description: "Olive green punjabi with contrast piping on the sleeves.",
                rating: 4.5,
                ratings_count: 198,
                image: "products/olive-festive-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "festive"],
            },
        ],
    },
    CategorySeed {
        name: "Blouses",
        products: &[
            ProductSeed {
                name: "Red Katan Blouse",
                price: 349,
                original_price: None,
                description: "Bright red katan silk blouse with elbow sleeves.",
                rating: 4.5,
                ratings_count: 456,
                image: "products/red-katan-blouse.jpg",
                sizes: BLOUSE_SIZES,
                tags: &["women", "silk"],
            },
            ProductSeed {
                name: "Designer Sleeveless Blouse",
                price: 449,
                original_price: Some(549),
                description: "Sleeveless designer blouse with a sequin border.",
                rating: 4.4,
                ratings_count: 389,
                image: "products/designer-sleeveless-blouse.jpg",
                sizes: BLOUSE_SIZES,
                tags: &["women", "festive"],
            },
            ProductSeed {
                name: "Plain Cotton Blouse",
                price: 149,
                original_price: None,
                description: "Simple cotton blouse for daily wear.",
                rating: 4.1,
                ratings_count: 612,
                image: "products/plain-cotton-blouse.jpg",
                sizes: BLOUSE_SIZES,
                tags: &["women", "cotton"],
            },
            ProductSeed {
                name: "Readymade Cotton Blouse",
                price: 120,
                original_price: None,
                description: "Readymade cotton blouse with an easy fit.",
                rating: 4.0,
                ratings_count: 540,
                image: "products/readymade-cotton-blouse.jpg",
                sizes: BLOUSE_SIZES,
                tags: &["women", "cotton"],
            },
            ProductSeed {
                name: "Golden Brocade Blouse",
                price: 649,
                original_price: None,
                description: "Brocade blouse with a golden sheen, made for festive evenings.",
                rating: 4.6,
                ratings_count: 287,
                image: "products/golden-brocade-blouse.jpg",
                sizes: BLOUSE_SIZES,
                tags: &["women", "silk", "festive"],
            },
            ProductSeed {
                name: "Black Velvet Blouse",
                price: 549,
                original_price: None,
                description: "Soft velvet blouse with a boat neck.",
                rating: 4.5,
                ratings_count: 251,
                image: "products/black-velvet-blouse.jpg",
                sizes: BLOUSE_SIZES,
                tags: &["women", "festive"],
            },
        ],
    },
    CategorySeed {
        name: "Sarees",
        products: &[
            ProductSeed {
                name: "Jamdani Saree",
                price: 2999,
                original_price: Some(3499),
                description: "Handwoven Dhakai jamdani saree with traditional motifs.",
                rating: 4.8,
                ratings_count: 412,
                image: "products/jamdani-saree.jpg",
                sizes: &[],
                tags: &["women", "handloom", "festive"],
            },
            ProductSeed {
                name: "Tant Cotton Saree",
                price: 899,
                original_price: None,
                description: "Everyday tant cotton saree, light and airy.",
                rating: 4.3,
                ratings_count: 534,
                image: "products/tant-cotton-saree.jpg",
                sizes: &[],
                tags: &["women", "cotton", "handloom"],
            },
            ProductSeed {
                name: "Banarasi Silk Saree",
                price: 4999,
                original_price: Some(5999),
                description: "Opulent banarasi silk saree with a woven zari border.",
                rating: 4.9,
                ratings_count: 298,
                image: "products/banarasi-silk-saree.jpg",
                sizes: &[],
                tags: &["women", "silk", "festive"],
            },
            ProductSeed {
                name: "Tussar Silk Saree",
                price: 3499,
                original_price: None,
                description: "Earthy tussar silk saree with hand block prints.",
                rating: 4.6,
                ratings_count: 187,
                image: "products/tussar-silk-saree.jpg",
                sizes: &[],
                tags: &["women", "silk", "handloom"],
            },
            ProductSeed {
                name: "Georgette Printed Saree",
                price: 1199,
                original_price: None,
                description: "Flowy georgette saree with floral prints.",
                rating: 4.2,
                ratings_count: 345,
                image: "products/georgette-printed-saree.jpg",
                sizes: &[],
                tags: &["women"],
            },
            ProductSeed {
                name: "Handloom Khadi Saree",
                price: 1599,
                original_price: None,
                description: "Khadi saree woven by local artisans.",
                rating: 4.5,
                ratings_count: 203,
                image: "products/handloom-khadi-saree.jpg",
                sizes: &[],
                tags: &["women", "handloom", "cotton"],
            },
            ProductSeed {
                name: "Kanjivaram Silk Saree",
                price: 5499,
                original_price: None,
                description: "South silk kanjivaram with a temple border.",
                rating: 4.9,
                ratings_count: 176,
                image: "products/kanjivaram-silk-saree.jpg",
                sizes: &[],
                tags: &["women", "silk", "festive"],
            },
            ProductSeed {
                name: "Soft Dhakai Saree",
                price: 2299,
                original_price: Some(2599),
                description: "Soft dhakai saree in pastel shades.",
                rating: 4.7,
                ratings_count: 264,
                image: "products/soft-dhakai-saree.jpg",
                sizes: &[],
                tags: &["women", "handloom"],
            },
        ],
    },
    CategorySeed {
        name: "Custom Tailoring",
        products: &[
            ProductSeed {
                name: "Custom Fit Punjabi",
                price: 1499,
                original_price: None,
                description: "Punjabi stitched to your measurements. Seven-day turnaround.",
                rating: 4.7,
                ratings_count: 158,
                image: "products/custom-fit-punjabi.jpg",
                sizes: &[],
                tags: &["men", "custom"],
            },
            ProductSeed {
                name: "Tailored Blouse Stitching",
                price: 399,
                original_price: None,
                description: "Blouse stitching service with lining, to your measurements.",
                rating: 4.6,
                ratings_count: 322,
                image: "products/tailored-blouse-stitching.jpg",
                sizes: &[],
                tags: &["women", "custom"],
            },
            ProductSeed {
                name: "Saree Fall & Pico Service",
                price: 199,
                original_price: None,
                description: "Fall and pico finishing for new sarees.",
                rating: 4.4,
                ratings_count: 410,
                image: "products/saree-fall-pico.jpg",
                sizes: &[],
                tags: &["women", "custom"],
            },
        ],
    },
    CategorySeed {
        name: "Occasion Wear",
        products: &[
            ProductSeed {
                name: "Wedding Sherwani Set",
                price: 7999,
                original_price: Some(8999),
                description: "Full sherwani set with stole and churidar.",
                rating: 4.9,
                ratings_count: 142,
                image: "products/wedding-sherwani-set.jpg",
                sizes: &["M", "L", "XL"],
                tags: &["men", "silk", "festive"],
            },
            ProductSeed {
                name: "Puja Special Punjabi",
                price: 1149,
                original_price: Some(1299),
                description: "Festive punjabi curated for pujo mornings.",
                rating: 4.6,
                ratings_count: 367,
                image: "products/puja-special-punjabi.jpg",
                sizes: MENS_SIZES,
                tags: &["men", "festive"],
            },
            ProductSeed {
                name: "Reception Lehenga",
                price: 6499,
                original_price: None,
                description: "Embroidered lehenga set for receptions.",
                rating: 4.8,
                ratings_count: 119,
                image: "products/reception-lehenga.jpg",
                sizes: &["S", "M", "L"],
                tags: &["women", "festive"],
            },
            ProductSeed {
                name: "Eid Festive Kurta",
                price: 999,
                original_price: None,
                description: "Festive kurta for eid gatherings.",
                rating: 4.4,
                ratings_count: 278,
                image: "products/eid-festive-kurta.jpg",
                sizes: &["M", "L", "XL"],
                tags: &["men", "festive"],
            },
        ],
    },
];

impl ProductSeed {
    fn to_product(&self) -> Product {
        Product {
            name: self.name.to_string(),
            price: self.price,
            original_price: self.original_price,
            description: self.description.to_string(),
            rating: self.rating,
            ratings_count: self.ratings_count,
            images: vec![self.image.to_string()],
            sizes: self.sizes.iter().map(|s| s.to_string()).collect(),
            tags: self.tags.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The shipped catalog.
pub fn default_catalog() -> Vec<Category> {
    CATALOG_SEEDS
        .iter()
        .map(|seed| Category {
            name: seed.name.to_string(),
            products: seed.products.iter().map(ProductSeed::to_product).collect(),
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// Load a catalog override from YAML.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Category>, CatalogDataError> {
    let raw = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_yaml::from_str(&raw)?;
    Ok(file.categories)
}

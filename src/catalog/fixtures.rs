//! Bundled sample catalog

use super::models::Product;

const IMAGE_BASE: &str = "https://images.unsplash.com";
const IMAGE_SIZE: &str = "w=400&h=400&fit=crop";

struct SampleRow {
    id: u64,
    name: &'static str,
    price: f64,
    category: &'static str,
    brand: &'static str,
    rating: f64,
    /// Unsplash photo slug
    photo: &'static str,
    description: &'static str,
    in_stock: bool,
}

const SAMPLE_ROWS: [SampleRow; 12] = [
    SampleRow {
        id: 1,
        name: "Wireless Headphones",
        price: 79.99,
        category: "Electronics",
        brand: "AudioTech",
        rating: 4.5,
        photo: "photo-1505740420928-5e560c06d30e",
        description: "High-quality wireless headphones with noise cancellation",
        in_stock: true,
    },
    SampleRow {
        id: 2,
        name: "Smart Watch",
        price: 199.99,
        category: "Electronics",
        brand: "TechWear",
        rating: 4.7,
        photo: "photo-1523275335684-37898b6baf30",
        description: "Feature-packed smartwatch with fitness tracking",
        in_stock: true,
    },
    SampleRow {
        id: 3,
        name: "Running Shoes",
        price: 89.99,
        category: "Sportswear",
        brand: "SpeedRun",
        rating: 4.3,
        photo: "photo-1542291026-7eec264c27ff",
        description: "Comfortable running shoes for all terrains",
        in_stock: true,
    },
    SampleRow {
        id: 4,
        name: "Coffee Maker",
        price: 129.99,
        category: "Home & Kitchen",
        brand: "BrewMaster",
        rating: 4.6,
        photo: "photo-1517668808822-9ebb02f2a0e6",
        description: "Programmable coffee maker with thermal carafe",
        in_stock: false,
    },
    SampleRow {
        id: 5,
        name: "Laptop Backpack",
        price: 49.99,
        category: "Accessories",
        brand: "TravelPro",
        rating: 4.4,
        photo: "photo-1553062407-98eeb64c6a62",
        description: "Durable backpack with padded laptop compartment",
        in_stock: true,
    },
    SampleRow {
        id: 6,
        name: "Bluetooth Speaker",
        price: 59.99,
        category: "Electronics",
        brand: "AudioTech",
        rating: 4.5,
        photo: "photo-1608043152269-423dbba4e7e1",
        description: "Portable waterproof speaker with amazing sound",
        in_stock: true,
    },
    SampleRow {
        id: 7,
        name: "Yoga Mat",
        price: 29.99,
        category: "Sportswear",
        brand: "FitLife",
        rating: 4.2,
        photo: "photo-1601925260368-ae2f83cf8b7f",
        description: "Non-slip yoga mat with carrying strap",
        in_stock: true,
    },
    SampleRow {
        id: 8,
        name: "LED Desk Lamp",
        price: 39.99,
        category: "Home & Kitchen",
        brand: "BrightLight",
        rating: 4.1,
        photo: "photo-1507473885765-e6ed057f782c",
        description: "Adjustable LED lamp with USB charging port",
        in_stock: true,
    },
    SampleRow {
        id: 9,
        name: "Sunglasses",
        price: 69.99,
        category: "Accessories",
        brand: "StyleVision",
        rating: 4.4,
        photo: "photo-1572635196237-14b3f281503f",
        description: "Polarized sunglasses with UV protection",
        in_stock: false,
    },
    SampleRow {
        id: 10,
        name: "Mechanical Keyboard",
        price: 149.99,
        category: "Electronics",
        brand: "TypeMaster",
        rating: 4.8,
        photo: "photo-1587829741301-dc798b83add3",
        description: "RGB mechanical keyboard with blue switches",
        in_stock: true,
    },
    SampleRow {
        id: 11,
        name: "Water Bottle",
        price: 24.99,
        category: "Sportswear",
        brand: "HydroFlow",
        rating: 4.3,
        photo: "photo-1602143407151-7111542de6e8",
        description: "Insulated stainless steel water bottle",
        in_stock: true,
    },
    SampleRow {
        id: 12,
        name: "Blender",
        price: 89.99,
        category: "Home & Kitchen",
        brand: "BlendPro",
        rating: 4.5,
        photo: "photo-1585515320310-259814833e62",
        description: "High-power blender for smoothies and more",
        in_stock: true,
    },
];

/// Returns the twelve-product sample catalog in catalog order.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_ROWS
        .iter()
        .map(|row| Product {
            id: row.id,
            name: row.name.to_string(),
            price: row.price,
            category: row.category.to_string(),
            brand: row.brand.to_string(),
            rating: row.rating,
            image: format!("{}/{}?{}", IMAGE_BASE, row.photo, IMAGE_SIZE),
            description: row.description.to_string(),
            in_stock: row.in_stock,
        })
        .collect()
}

//! Food table used by the simulated classifier

/// A known dish with fixed per-portion nutrition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownFood {
    pub name: &'static str,
    pub calories: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

pub const KNOWN_FOODS: [KnownFood; 5] = [
    KnownFood { name: "Nasi Goreng", calories: 350.0, protein_g: 8.0, carb_g: 45.0, fat_g: 12.0 },
    KnownFood { name: "Ayam Goreng", calories: 280.0, protein_g: 25.0, carb_g: 2.0, fat_g: 18.0 },
    KnownFood { name: "Sayur Bayam", calories: 45.0, protein_g: 4.0, carb_g: 7.0, fat_g: 0.5 },
    KnownFood { name: "Tempe Goreng", calories: 180.0, protein_g: 12.0, carb_g: 15.0, fat_g: 8.0 },
    KnownFood { name: "Ikan Bakar", calories: 220.0, protein_g: 28.0, carb_g: 0.0, fat_g: 12.0 },
];

/// Advice shown with every scan result
pub const SCAN_SUGGESTIONS: [&str; 3] = [
    "This dish provides protein that supports muscle maintenance",
    "Use less oil for a healthier version",
    "Add vegetables for extra fiber",
];

/// Look up a dish by name, ignoring case
pub fn find_food(name: &str) -> Option<&'static KnownFood> {
    KNOWN_FOODS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
}

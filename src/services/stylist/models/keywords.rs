//! Static keyword tables for garment roles and layer families.
//!
//! All entries are already normalized (lowercase ASCII, Turkish names
//! transliterated) so they can be fed straight into
//! [`contains_keyword`](crate::services::stylist::core::normalizer::contains_keyword).

/// One-piece garments that cover both the upper and the lower body.
pub const FULL_BODY_KEYWORDS: &[&str] = &[
    "dress", "jumpsuit", "romper", "overall", "playsuit", "elbise", "tulum",
];

pub const OUTERWEAR_KEYWORDS: &[&str] = &[
    "outerwear",
    "jacket",
    "coat",
    "blazer",
    "parka",
    "trench",
    "bomber",
    "windbreaker",
    "anorak",
    "ceket",
    "mont",
    "kaban",
    "palto",
    "yagmurluk",
];

pub const BOTTOM_KEYWORDS: &[&str] = &[
    "bottom",
    "pants",
    "trousers",
    "jeans",
    "jean",
    "shorts",
    "skirt",
    "leggings",
    "chinos",
    "joggers",
    "culottes",
    "pantolon",
    "kot",
    "sort",
    "etek",
    "tayt",
    "alt",
];

pub const FOOTWEAR_KEYWORDS: &[&str] = &[
    "footwear",
    "shoe",
    "sneaker",
    "boots",
    "boot",
    "heels",
    "sandal",
    "loafer",
    "flats",
    "trainers",
    "ayakkabi",
    "bot",
    "cizme",
    "topuklu",
    "sandalet",
    "terlik",
];

pub const ACCESSORY_KEYWORDS: &[&str] = &[
    "accessory",
    "accessories",
    "bag",
    "belt",
    "hat",
    "scarf",
    "watch",
    "necklace",
    "earring",
    "bracelet",
    "sunglasses",
    "cap",
    "aksesuar",
    "canta",
    "kemer",
    "sapka",
    "atki",
    "saat",
    "kolye",
    "kupe",
    "bileklik",
    "gozluk",
];

pub const TOP_KEYWORDS: &[&str] = &[
    "top",
    "shirt",
    "tshirt",
    "tee",
    "blouse",
    "sweater",
    "hoodie",
    "cardigan",
    "tank",
    "polo",
    "jumper",
    "pullover",
    "turtleneck",
    "bodysuit",
    "camisole",
    "tisort",
    "gomlek",
    "bluz",
    "kazak",
    "hirka",
    "atlet",
    "ust",
    "bustiyer",
];

/// T-shirt family. Checked after the sweater family ("sweatshirt" contains
/// "tshirt") and before the shirt family ("t-shirt" contains "shirt").
pub const TSHIRT_FAMILY: &[&str] = &["tshirt", "t shirt", "tee", "tisort", "tank", "atlet"];

/// Sweater family. Checked first of the three families.
pub const SWEATER_FAMILY: &[&str] = &[
    "sweater",
    "sweatshirt",
    "hoodie",
    "pullover",
    "jumper",
    "kazak",
];

pub const SHIRT_FAMILY: &[&str] = &["shirt", "blouse", "gomlek", "bluz"];

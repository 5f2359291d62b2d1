//! Default records loaded into every fresh registry.

use emoji_types::EmojiRecord;

/// `(id, character, name)` for each seeded record, in collection order.
const SEED: [(u64, &str, &str); 30] = [
    (1, "😀", "Grinning Face"),
    (2, "🚀", "Rocket"),
    (3, "🌟", "Star"),
    (4, "🎉", "Party Popper"),
    (5, "🐱", "Cat Face"),
    (6, "🌺", "Hibiscus"),
    (7, "🍔", "Hamburger"),
    (8, "🚲", "Bicycle"),
    (9, "📚", "Books"),
    (10, "🎈", "Balloon"),
    (11, "🍕", "Pizza"),
    (12, "🏖️", "Beach with Umbrella"),
    (13, "🎸", "Guitar"),
    (14, "🌈", "Rainbow"),
    (15, "🌊", "Ocean Wave"),
    (16, "🍦", "Ice Cream"),
    (17, "🎨", "Artist Palette"),
    (18, "🐶", "Dog Face"),
    (19, "🌄", "Sunrise Over Mountains"),
    (20, "🎓", "Graduation Cap"),
    (21, "🍂", "Fallen Leaf"),
    (22, "🍁", "Maple Leaf"),
    (23, "🎃", "Jack-O-Lantern"),
    (24, "🎄", "Christmas Tree"),
    (25, "❄️", "Snowflake"),
    (26, "🌻", "Sunflower"),
    (27, "🌍", "Earth Globe Europe-Africa"),
    (28, "🌞", "Sun with Face"),
    (29, "🌚", "New Moon Face"),
    (30, "🎶", "Musical Notes"),
];

/// Number of seeded records.
pub const SEED_COUNT: usize = SEED.len();

/// Build the seeded records in ascending id order.
pub fn seed_records() -> Vec<EmojiRecord> {
    SEED.iter()
        .map(|&(id, character, name)| EmojiRecord::new(id, character, name))
        .collect()
}

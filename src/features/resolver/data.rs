//! Lookup tables used by the administrative resolver.
//!
//! Both tables mirror the naming conventions of the boundary datasets and are
//! kept as data so the correspondence can be audited against them.

/// Region feature labels as they appear in `regions.geojson`, lowercased and
/// trimmed, mapped to catalog region keys.
pub const REGION_LABELS: &[(&str, &str)] = &[
    ("toshkent sh.", "toshkent_shahar"),
    ("toshkent vil.", "toshkent_viloyat"),
    ("andijon vil.", "andijon"),
    ("buxoro vil.", "buxoro"),
    ("farg'ona vil.", "fargona"),
    ("jizzax vil.", "jizzax"),
    ("xorazm vil.", "xorazm"),
    ("namangan vil.", "namangan"),
    ("navoiy vil.", "navoiy"),
    ("qashqadaryo vil.", "qashqadaryo"),
    ("qoraqalpog'iston res.", "qoraqalpogiston"),
    ("samarqand vil.", "samarqand"),
    ("sirdaryo vil.", "sirdaryo"),
    ("surxondaryo vil.", "surxondaryo"),
];

/// Apostrophe and okina glyphs treated as equivalent (and dropped) when
/// comparing district names.
pub const APOSTROPHES: &[char] = &[
    '\'',       // ASCII apostrophe
    '`',        // grave accent
    '\u{02BB}', // modifier letter turned comma (okina)
    '\u{02BC}', // modifier letter apostrophe
    '\u{2018}', // left single quotation mark
    '\u{2019}', // right single quotation mark
    '\u{00B4}', // acute accent
];

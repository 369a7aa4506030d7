use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for catalog identifiers (region keys and district codes)
    /// Must be lowercase ASCII alphanumeric words joined by single underscores
    /// - Valid: "andijon", "toshkent_shahar", "mirzo_ulugbek"
    /// - Invalid: "_andijon", "andijon_", "toshkent__shahar", "Andijon", "toshkent-shahar"
    pub static ref CATALOG_CODE_REGEX: Regex =
        Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").expect("catalog code regex is valid");
}

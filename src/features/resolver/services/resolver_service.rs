use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Catalog, District};
use crate::features::resolver::data::{APOSTROPHES, REGION_LABELS};

/// Maps free-text boundary feature labels to catalog region keys and
/// district codes
pub struct ResolverService {
    catalog: Arc<Catalog>,
}

impl ResolverService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Exact lookup of a region feature label (case and surrounding
    /// whitespace ignored). No fuzzy matching.
    pub fn resolve_region(&self, label: &str) -> Option<&'static str> {
        let normalized = label.to_lowercase();
        let normalized = normalized.trim();

        let key = REGION_LABELS
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|&(_, key)| key);

        tracing::debug!(label, ?key, "Resolved region label");
        key
    }

    /// First district, in catalog order, whose apostrophe-free lowercase name
    /// starts with the label's stem. An empty stem matches the first district.
    pub fn resolve_district<'a>(&self, label: &str, districts: &'a [District]) -> Option<&'a District> {
        let stem = district_stem(label);

        let district = districts
            .iter()
            .find(|d| strip_apostrophes(&d.name.to_lowercase()).starts_with(&stem));

        tracing::debug!(
            label,
            stem = %stem,
            code = district.map(|d| d.code.as_str()),
            "Resolved district label"
        );
        district
    }

    /// District resolution against a catalog region looked up by key
    pub fn resolve_district_in(&self, region_key: &str, label: &str) -> Result<Option<&District>> {
        let region = self.catalog.region(region_key).ok_or_else(|| {
            AppError::NotFound(format!("Region with key '{}' not found", region_key))
        })?;

        Ok(self.resolve_district(label, &region.districts))
    }
}

/// First whitespace/hyphen separated token, lowercased, apostrophes removed
fn district_stem(label: &str) -> String {
    let lowered = label.to_lowercase();
    let first = lowered
        .split(|c: char| c.is_whitespace() || c == '-')
        .next()
        .unwrap_or_default();

    strip_apostrophes(first)
}

fn strip_apostrophes(value: &str) -> String {
    value.chars().filter(|c| !APOSTROPHES.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{shared_stem_districts, uzbekistan_catalog};

    fn resolver() -> ResolverService {
        ResolverService::new(uzbekistan_catalog())
    }

    fn code_in(resolver: &ResolverService, region_key: &str, label: &str) -> Option<String> {
        resolver
            .resolve_district_in(region_key, label)
            .unwrap()
            .map(|d| d.code.clone())
    }

    #[test]
    fn test_every_dataset_label_resolves() {
        let resolver = resolver();
        let cases = [
            ("Toshkent sh.", "toshkent_shahar"),
            ("Toshkent vil.", "toshkent_viloyat"),
            ("Andijon vil.", "andijon"),
            ("Buxoro vil.", "buxoro"),
            ("Farg'ona vil.", "fargona"),
            ("Jizzax vil.", "jizzax"),
            ("Xorazm vil.", "xorazm"),
            ("Namangan vil.", "namangan"),
            ("Navoiy vil.", "navoiy"),
            ("Qashqadaryo vil.", "qashqadaryo"),
            ("Qoraqalpog'iston Res.", "qoraqalpogiston"),
            ("Samarqand vil.", "samarqand"),
            ("Sirdaryo vil.", "sirdaryo"),
            ("Surxondaryo vil.", "surxondaryo"),
        ];

        for (label, key) in cases {
            assert_eq!(resolver.resolve_region(label), Some(key), "label {label}");
        }
    }

    #[test]
    fn test_label_table_matches_catalog() {
        let catalog = uzbekistan_catalog();
        for (_, key) in REGION_LABELS {
            assert!(catalog.contains_region(key), "unknown key {key}");
        }
        for region in catalog.regions() {
            assert!(
                REGION_LABELS.iter().any(|(_, key)| *key == region.key),
                "no label for {}",
                region.key
            );
        }
    }

    #[test]
    fn test_region_label_is_trimmed_and_case_insensitive() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_region("  ANDIJON VIL.  "), Some("andijon"));
    }

    #[test]
    fn test_unknown_region_label_is_unresolved() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_region("Atlantis vil."), None);
        assert_eq!(resolver.resolve_region("Andijon"), None);
        assert_eq!(resolver.resolve_region(""), None);
    }

    #[test]
    fn test_district_label_resolves_by_stem() {
        let resolver = resolver();
        assert_eq!(
            code_in(&resolver, "toshkent_shahar", "Bektemir sh."),
            Some("bektemir".to_string())
        );
        assert_eq!(
            code_in(&resolver, "toshkent_shahar", "Mirzo-Ulug'bek tumani"),
            Some("mirzo_ulugbek".to_string())
        );
    }

    #[test]
    fn test_apostrophe_variants_resolve_to_same_code() {
        let resolver = resolver();
        let canonical = code_in(&resolver, "andijon", "Bo'ston tumani");
        assert_eq!(canonical, Some("boz".to_string()));

        for label in [
            "Bo`ston",
            "Bo\u{02BB}ston",
            "Bo\u{02BC}ston",
            "Bo\u{2018}ston",
            "Bo\u{2019}ston",
            "Bo\u{00B4}ston",
            "Boston",
        ] {
            assert_eq!(code_in(&resolver, "andijon", label), canonical, "label {label}");
        }
    }

    #[test]
    fn test_okina_in_catalog_names_is_stripped() {
        let resolver = resolver();
        assert_eq!(
            code_in(&resolver, "toshkent_viloyat", "Bo'stonliq tumani"),
            Some("bostanlik".to_string())
        );
    }

    #[test]
    fn test_shared_stem_resolves_to_first_listed() {
        let resolver = resolver();
        let districts = shared_stem_districts();

        for _ in 0..3 {
            let resolved = resolver.resolve_district("Qo'sh", &districts).unwrap();
            assert_eq!(resolved.code, districts[0].code);
        }
    }

    #[test]
    fn test_urban_label_picks_first_shared_code_entry() {
        let resolver = resolver();
        // "Andijon sh." and "Andijon t." share the stem and the code
        let resolved = resolver
            .resolve_district_in("andijon", "Andijon t.")
            .unwrap()
            .unwrap();
        assert_eq!(resolved.name, "Andijon sh.");
        assert_eq!(resolved.code, "andijan");
    }

    #[test]
    fn test_empty_stem_matches_first_district() {
        let resolver = resolver();
        let first = Some("andijan".to_string());
        assert_eq!(code_in(&resolver, "andijon", ""), first);
        assert_eq!(code_in(&resolver, "andijon", " Asaka"), first);
        assert_eq!(code_in(&resolver, "andijon", "-Asaka"), first);
        assert_eq!(code_in(&resolver, "andijon", "'"), first);
        assert_eq!(
            code_in(&resolver, "toshkent_shahar", " Mirobod sh."),
            Some("bektemir".to_string())
        );
    }

    #[test]
    fn test_unmatched_district_is_unresolved() {
        let resolver = resolver();
        assert_eq!(code_in(&resolver, "andijon", "Nukus"), None);
    }

    #[test]
    fn test_district_in_unknown_region_is_not_found() {
        let resolver = resolver();
        assert!(matches!(
            resolver.resolve_district_in("atlantis", "Nukus"),
            Err(AppError::NotFound(_))
        ));
    }
}

/// Nationwide map center as (lat, lon)
pub const HOME_CENTER: (f64, f64) = (42.5, 64.0);

/// Nationwide map zoom level
pub const HOME_ZOOM: u8 = 6;

// =============================================================================
// DISPLAY LABELS (Uzbek, shown verbatim by the client)
// =============================================================================

/// First breadcrumb, always links back to the home view
pub const BREADCRUMB_HOME_LABEL: &str = "Bosh sahifa";

/// Breadcrumb shown when the selected district code has no catalog entry
pub const BREADCRUMB_DISTRICT_FALLBACK: &str = "Tuman";

/// Tooltip for nationwide features without a `name` property
pub const UNNAMED_FEATURE_LABEL: &str = "Noma'lum";

/// Badge for a district with its own checked facility record
pub const VERIFIED_BADGE_LABEL: &str = "✅ Tasdiqlangan";

/// Badge for a district served the template record
pub const UNVERIFIED_BADGE_LABEL: &str = "⚠️ Umumiy ma'lumot";

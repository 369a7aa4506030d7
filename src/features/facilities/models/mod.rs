mod facility;

pub use facility::{Conclusion, Contact, Dispensary, FacilityData, FaqItem, PolyclinicTest};

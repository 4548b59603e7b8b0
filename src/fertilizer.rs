//! Fertilizer Lookup Table
//!
//! Maps (crop name, soil-type code) to a fixed fertilizer blend string.
//! All 30 crop × soil combinations are covered; anything outside the table
//! (unknown crop, out-of-range soil code) falls back to
//! [`GENERAL_FERTILIZER`]. Like the training table, the entries are
//! placeholders with no agronomic grounding.

/// Fallback recommendation for combinations not in the table.
pub const GENERAL_FERTILIZER: &str = "General Fertilizer";

/// Soil category encoded by the form's `soil_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilType {
    Clay,
    Loamy,
    Sandy,
}

impl SoilType {
    /// Decode a form soil code. Codes outside 0/1/2 have no category.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Clay),
            1 => Some(Self::Loamy),
            2 => Some(Self::Sandy),
            _ => None,
        }
    }

    /// Numeric code used as the lookup key and model feature.
    pub fn code(self) -> i64 {
        match self {
            Self::Clay => 0,
            Self::Loamy => 1,
            Self::Sandy => 2,
        }
    }

    /// Display name for UI dropdowns.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Clay => "Clay",
            Self::Loamy => "Loamy",
            Self::Sandy => "Sandy",
        }
    }
}

/// One fertilizer table entry.
struct FertilizerEntry {
    crop: &'static str,
    soil_code: i64,
    blend: &'static str,
}

// ============================================================================
// EMBEDDED FERTILIZER TABLE
// 10 crops x 3 soil codes.
// ============================================================================

static FERTILIZERS: &[FertilizerEntry] = &[
    FertilizerEntry { crop: "rice", soil_code: 0, blend: "Urea + DAP for Clay" },
    FertilizerEntry { crop: "rice", soil_code: 1, blend: "Urea + DAP for Loamy" },
    FertilizerEntry { crop: "rice", soil_code: 2, blend: "Urea + MOP for Sandy" },
    FertilizerEntry { crop: "wheat", soil_code: 0, blend: "Urea + SSP for Clay" },
    FertilizerEntry { crop: "wheat", soil_code: 1, blend: "Urea + DAP for Loamy" },
    FertilizerEntry { crop: "wheat", soil_code: 2, blend: "NPK + Compost for Sandy" },
    FertilizerEntry { crop: "maize", soil_code: 0, blend: "Urea + DAP for Clay" },
    FertilizerEntry { crop: "maize", soil_code: 1, blend: "Urea + SSP for Loamy" },
    FertilizerEntry { crop: "maize", soil_code: 2, blend: "Urea + MOP for Sandy" },
    FertilizerEntry { crop: "cotton", soil_code: 0, blend: "Potash + FYM for Clay" },
    FertilizerEntry { crop: "cotton", soil_code: 1, blend: "SSP + Urea for Loamy" },
    FertilizerEntry { crop: "cotton", soil_code: 2, blend: "Urea + Potassium for Sandy" },
    FertilizerEntry { crop: "barley", soil_code: 0, blend: "Ammonium Sulphate for Clay" },
    FertilizerEntry { crop: "barley", soil_code: 1, blend: "Urea + DAP for Loamy" },
    FertilizerEntry { crop: "barley", soil_code: 2, blend: "FYM + Potash for Sandy" },
    FertilizerEntry { crop: "millet", soil_code: 0, blend: "Ammonium Nitrate for Clay" },
    FertilizerEntry { crop: "millet", soil_code: 1, blend: "DAP + Organic for Loamy" },
    FertilizerEntry { crop: "millet", soil_code: 2, blend: "MOP + FYM for Sandy" },
    FertilizerEntry { crop: "sugarcane", soil_code: 0, blend: "SSP + Urea for Clay" },
    FertilizerEntry { crop: "sugarcane", soil_code: 1, blend: "Compost + DAP for Loamy" },
    FertilizerEntry { crop: "sugarcane", soil_code: 2, blend: "FYM + Urea for Sandy" },
    FertilizerEntry { crop: "soybean", soil_code: 0, blend: "Phosphate-rich Manure for Clay" },
    FertilizerEntry { crop: "soybean", soil_code: 1, blend: "Phosphate + Potash for Loamy" },
    FertilizerEntry { crop: "soybean", soil_code: 2, blend: "SSP + Compost for Sandy" },
    FertilizerEntry { crop: "sunflower", soil_code: 0, blend: "NPK + Potash for Clay" },
    FertilizerEntry { crop: "sunflower", soil_code: 1, blend: "Urea + SSP for Loamy" },
    FertilizerEntry { crop: "sunflower", soil_code: 2, blend: "Potash + SSP for Sandy" },
    FertilizerEntry { crop: "pulses", soil_code: 0, blend: "DAP + Organic Manure for Clay" },
    FertilizerEntry { crop: "pulses", soil_code: 1, blend: "Compost + NPK for Loamy" },
    FertilizerEntry { crop: "pulses", soil_code: 2, blend: "Urea + FYM for Sandy" },
];

/// Look up the fertilizer blend for a crop and soil code.
///
/// Returns [`GENERAL_FERTILIZER`] when the combination is not in the table;
/// an out-of-range soil code therefore produces the fallback for every crop
/// rather than an error.
pub fn lookup(crop: &str, soil_code: i64) -> &'static str {
    FERTILIZERS
        .iter()
        .find(|entry| entry.crop == crop && entry.soil_code == soil_code)
        .map(|entry| entry.blend)
        .unwrap_or(GENERAL_FERTILIZER)
}

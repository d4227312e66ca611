/// Tunable search configuration.
///
/// The static evaluation is
/// `mobility_diff * coef_mobility + material_diff * coef_material`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    pub depth: u32,
    pub coef_mobility: i32,
    pub coef_material: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 3,
            coef_mobility: 1,
            coef_material: 1,
        }
    }
}

impl SearchParams {
    /// Default coefficients at the given depth
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..Default::default()
        }
    }
}

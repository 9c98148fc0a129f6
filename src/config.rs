/// All analysis parameters in one struct.
/// Tolerances are in the coordinate units of the input shapefile unless
/// noted otherwise.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // -- Significant-point reduction --
    /// Maximum perpendicular offset for a point to count as collinear with
    /// its neighbors and be removed. 0 removes only exactly collinear
    /// points; ~0.5 works well for survey-grade parcel outlines.
    pub line_tolerance: f64,

    // -- Corner classification --
    /// Allowed deviation from a right angle, in radians.
    /// ~0.03 (1.7 deg) accepts digitization noise without accepting
    /// genuinely skewed corners.
    pub angle_tolerance: f64,

    // -- Boxlike detection --
    /// Minimum mid-segment length for a boxlike feature.
    pub box_min_len: f64,
    /// Maximum mid-segment length for a boxlike feature.
    pub box_max_len: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            line_tolerance: 0.5,
            angle_tolerance: 0.03,
            box_min_len: 10.0,
            box_max_len: 80.0,
        }
    }
}

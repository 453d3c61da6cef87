use std::fmt;

/// Dynamical family of a comet, from its Tisserand parameter with respect to Jupiter.
///
/// Variants
/// --------
/// * `EnckeType`     — `T > 3`, orbit decoupled from Jupiter, inside its orbit.
/// * `JupiterFamily` — `2 < T ≤ 3`, short period orbit controlled by Jupiter.
/// * `HalleyType`    — `T ≤ 2`, long period or highly inclined orbit.
///
/// Boundaries belong to the lower category: `T = 3` is Jupiter-family, `T = 2` is Halley-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CometFamily {
    EnckeType,
    JupiterFamily,
    HalleyType,
}

impl CometFamily {
    /// All families, in display order.
    pub const ALL: [CometFamily; 3] = [
        CometFamily::EnckeType,
        CometFamily::JupiterFamily,
        CometFamily::HalleyType,
    ];

    /// Position of the family in [`CometFamily::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label used by the charts.
    pub fn label(&self) -> &'static str {
        match self {
            CometFamily::EnckeType => "Encke-type",
            CometFamily::JupiterFamily => "Jupiter-family",
            CometFamily::HalleyType => "Halley-type",
        }
    }
}

impl fmt::Display for CometFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a comet from its Tisserand parameter.
///
/// Arguments
/// -----------------
/// * `tisserand`: Tisserand parameter w.r.t. Jupiter, `None` when it could not be derived.
///
/// Return
/// ----------
/// * The family, or `None` when the parameter is undefined (or NaN). An undefined parameter is
///   never defaulted to a category.
pub fn classify_family(tisserand: Option<f64>) -> Option<CometFamily> {
    let t = tisserand.filter(|t| !t.is_nan())?;
    Some(if t > 3.0 {
        CometFamily::EnckeType
    } else if t > 2.0 {
        CometFamily::JupiterFamily
    } else {
        CometFamily::HalleyType
    })
}

//! Column schema for the vertebral-column biomechanics table.
//!
//! The schema is fixed: six numeric feature columns describing pelvic and
//! lumbar geometry, plus one categorical class column with exactly three
//! possible labels. Columns are addressed by stable snake_case ids, which
//! are also the CSV header names and the keys used in JSON artifacts.

use serde::{Deserialize, Serialize};

/// A numeric feature column of the dataset.
///
/// # Examples
///
/// ```
/// use vertos_dataset::FeatureColumn;
///
/// let column = FeatureColumn::from_id("pelvic_tilt").unwrap();
/// assert_eq!(column, FeatureColumn::PelvicTilt);
/// assert_eq!(column.to_string(), "pelvic_tilt");
///
/// assert!(FeatureColumn::from_id("no_such_column").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FeatureColumn {
    /// Angle between the pelvis and the vertical axis.
    #[display("pelvic_incidence")]
    PelvicIncidence,
    /// Pelvic tilt angle.
    #[display("pelvic_tilt")]
    PelvicTilt,
    /// Curvature of the lumbar spine.
    #[display("lumbar_lordosis_angle")]
    LumbarLordosisAngle,
    /// Slope of the sacral plate.
    #[display("sacral_slope")]
    SacralSlope,
    /// Distance from the hip axis to the sacral plate.
    #[display("pelvic_radius")]
    PelvicRadius,
    /// Degree of spondylolisthesis (vertebral slippage).
    #[display("degree_spondylolisthesis")]
    DegreeSpondylolisthesis,
}

impl FeatureColumn {
    /// All feature columns, in schema order.
    pub const ALL: [Self; 6] = [
        Self::PelvicIncidence,
        Self::PelvicTilt,
        Self::LumbarLordosisAngle,
        Self::SacralSlope,
        Self::PelvicRadius,
        Self::DegreeSpondylolisthesis,
    ];

    /// The stable string id of this column (also its CSV header name).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::PelvicIncidence => "pelvic_incidence",
            Self::PelvicTilt => "pelvic_tilt",
            Self::LumbarLordosisAngle => "lumbar_lordosis_angle",
            Self::SacralSlope => "sacral_slope",
            Self::PelvicRadius => "pelvic_radius",
            Self::DegreeSpondylolisthesis => "degree_spondylolisthesis",
        }
    }

    /// Looks up a column by its string id.
    ///
    /// # Returns
    ///
    /// * `Ok(FeatureColumn)` - if `id` names a column of the schema
    /// * `Err(UnknownColumnError)` - otherwise; the error message lists the
    ///   known ids
    pub fn from_id(id: &str) -> Result<Self, UnknownColumnError> {
        Self::ALL
            .into_iter()
            .find(|column| column.id() == id)
            .ok_or_else(|| UnknownColumnError { id: id.to_owned() })
    }

    fn id_list() -> String {
        Self::ALL
            .map(Self::id)
            .join(", ")
    }
}

/// A requested column id that is not part of the schema.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown column {id:?} (known columns: {})", FeatureColumn::id_list())]
pub struct UnknownColumnError {
    /// The id that failed to resolve.
    pub id: String,
}

/// The diagnostic class assigned to a record.
///
/// Labels order by declaration (`Hernia` < `Spondylolisthesis` < `Normal`),
/// which is the order grouped output is reported in.
///
/// # Examples
///
/// ```
/// use vertos_dataset::ClassLabel;
///
/// let label: ClassLabel = "Hernia".parse().unwrap();
/// assert_eq!(label, ClassLabel::Hernia);
/// assert_eq!(label.to_string(), "Hernia");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::FromStr,
    Serialize,
    Deserialize,
)]
pub enum ClassLabel {
    /// Disc hernia.
    Hernia,
    /// Spondylolisthesis.
    Spondylolisthesis,
    /// No abnormality.
    Normal,
}

impl ClassLabel {
    /// All class labels, in reporting order.
    pub const ALL: [Self; 3] = [Self::Hernia, Self::Spondylolisthesis, Self::Normal];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for column in FeatureColumn::ALL {
            assert_eq!(FeatureColumn::from_id(column.id()), Ok(column));
            assert_eq!(column.to_string(), column.id());
        }
    }

    #[test]
    fn test_unknown_column_lists_known_ids() {
        let err = FeatureColumn::from_id("bogus").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"bogus\""));
        assert!(message.contains("pelvic_incidence"));
        assert!(message.contains("degree_spondylolisthesis"));
    }

    #[test]
    fn test_class_labels_parse_and_display() {
        for label in ClassLabel::ALL {
            let parsed: ClassLabel = label.to_string().parse().unwrap();
            assert_eq!(parsed, label);
        }
        assert!("Scoliosis".parse::<ClassLabel>().is_err());
    }

    #[test]
    fn test_class_label_reporting_order() {
        assert!(ClassLabel::Hernia < ClassLabel::Spondylolisthesis);
        assert!(ClassLabel::Spondylolisthesis < ClassLabel::Normal);
    }
}

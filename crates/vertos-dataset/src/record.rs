//! The per-row record type.

use serde::{Deserialize, Serialize};

use crate::schema::{ClassLabel, FeatureColumn};

/// One row of the vertebral-column biomechanics table.
///
/// Field names match the CSV header names, so records deserialize directly
/// from a headered CSV file and serialize back to the same layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PatientRecord {
    pub pelvic_incidence: f64,
    pub pelvic_tilt: f64,
    pub lumbar_lordosis_angle: f64,
    pub sacral_slope: f64,
    pub pelvic_radius: f64,
    pub degree_spondylolisthesis: f64,
    /// The diagnostic class this record belongs to.
    pub class: ClassLabel,
}

impl PatientRecord {
    /// The value of the given feature column for this record.
    ///
    /// # Examples
    ///
    /// ```
    /// use vertos_dataset::{ClassLabel, FeatureColumn, PatientRecord};
    ///
    /// let record = PatientRecord {
    ///     pelvic_incidence: 63.0,
    ///     pelvic_tilt: 22.6,
    ///     lumbar_lordosis_angle: 39.6,
    ///     sacral_slope: 40.5,
    ///     pelvic_radius: 98.7,
    ///     degree_spondylolisthesis: -0.25,
    ///     class: ClassLabel::Hernia,
    /// };
    /// assert_eq!(record.feature(FeatureColumn::SacralSlope), 40.5);
    /// ```
    #[must_use]
    pub fn feature(&self, column: FeatureColumn) -> f64 {
        match column {
            FeatureColumn::PelvicIncidence => self.pelvic_incidence,
            FeatureColumn::PelvicTilt => self.pelvic_tilt,
            FeatureColumn::LumbarLordosisAngle => self.lumbar_lordosis_angle,
            FeatureColumn::SacralSlope => self.sacral_slope,
            FeatureColumn::PelvicRadius => self.pelvic_radius,
            FeatureColumn::DegreeSpondylolisthesis => self.degree_spondylolisthesis,
        }
    }
}

//! Principal hull dimensions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a parameter set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParamSource {
    /// Typed in by the user.
    #[default]
    UserInput,
    /// Loaded from a project file.
    FileImport,
}

/// Rejected parameter set. Every violated rule is listed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid hull parameters: {}", .0.join("; "))]
pub struct ParamError(pub Vec<String>);

/// Principal design dimensions of a hull (meters, tonnes).
///
/// The lofting kernel consumes these as a validated precondition; run
/// [`HullBasicParams::validate`] at the boundary where they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HullBasicParams {
    /// Length between perpendiculars.
    pub lpp: f64,
    /// Moulded breadth.
    pub breadth: f64,
    /// Moulded depth.
    pub depth: f64,
    /// Design draft.
    pub draft: f64,
    /// Displacement in tonnes.
    pub displacement: f64,
    /// Length overall, if known.
    #[serde(default)]
    pub loa: Option<f64>,
    /// Provenance tag.
    #[serde(default)]
    pub source: ParamSource,
}

impl HullBasicParams {
    /// Create a user-entered parameter set without an overall length.
    pub fn new(lpp: f64, breadth: f64, depth: f64, draft: f64, displacement: f64) -> Self {
        Self {
            lpp,
            breadth,
            depth,
            draft,
            displacement,
            loa: None,
            source: ParamSource::UserInput,
        }
    }

    /// Set the overall length.
    pub fn with_loa(mut self, loa: f64) -> Self {
        self.loa = Some(loa);
        self
    }

    /// Check the ship-design rules: positive finite dimensions, `B < Lpp`,
    /// `D < Lpp`, `T < D`, and `Loa >= Lpp` when an overall length is given.
    pub fn validate(&self) -> Result<(), ParamError> {
        let mut errors = Vec::new();

        let named = [
            ("Lpp", self.lpp, "m"),
            ("B", self.breadth, "m"),
            ("D", self.depth, "m"),
            ("T", self.draft, "m"),
            ("Delta", self.displacement, "t"),
        ];
        for (name, value, unit) in named {
            if !value.is_finite() {
                errors.push(format!("{name} must be a finite number"));
            } else if value <= 0.0 {
                errors.push(format!("{name} ({value}{unit}) must be greater than 0"));
            }
        }

        if self.breadth >= self.lpp {
            errors.push(format!(
                "B ({}m) must be less than Lpp ({}m)",
                self.breadth, self.lpp
            ));
        }
        if self.depth >= self.lpp {
            errors.push(format!(
                "D ({}m) must be less than Lpp ({}m)",
                self.depth, self.lpp
            ));
        }
        if self.draft >= self.depth {
            errors.push(format!(
                "T ({}m) must be less than D ({}m)",
                self.draft, self.depth
            ));
        }

        if let Some(loa) = self.loa {
            if !loa.is_finite() || loa <= 0.0 {
                errors.push(format!("Loa ({loa}m) must be greater than 0"));
            }
            if loa < self.lpp {
                errors.push(format!(
                    "Loa ({loa}m) must be at least Lpp ({}m)",
                    self.lpp
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ParamError(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workboat() -> HullBasicParams {
        HullBasicParams::new(12.0, 4.0, 3.0, 2.5, 100.0)
    }

    #[test]
    fn valid_params_pass() {
        assert!(workboat().validate().is_ok());
        assert!(workboat().with_loa(13.2).validate().is_ok());
    }

    #[test]
    fn draft_must_be_below_depth() {
        let mut p = workboat();
        p.draft = 3.0;
        let err = p.validate().unwrap_err();
        assert_eq!(err.0.len(), 1);
        assert!(err.0[0].contains("T (3m)"));
    }

    #[test]
    fn all_violations_are_reported() {
        let p = HullBasicParams::new(4.0, 5.0, 6.0, 7.0, -1.0).with_loa(3.0);
        let err = p.validate().unwrap_err();
        // Delta, B >= Lpp, D >= Lpp, T >= D, Loa < Lpp
        assert_eq!(err.0.len(), 5);
        assert!(err.to_string().starts_with("invalid hull parameters: "));
    }

    #[test]
    fn non_finite_rejected() {
        let mut p = workboat();
        p.displacement = f64::NAN;
        let err = p.validate().unwrap_err();
        assert!(err.0.iter().any(|m| m.contains("Delta must be a finite")));
    }

    #[test]
    fn source_defaults_when_missing() {
        let json = r#"{"lpp":12.0,"breadth":4.0,"depth":3.0,"draft":2.5,"displacement":100.0}"#;
        let p: HullBasicParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.source, ParamSource::UserInput);
        assert_eq!(p.loa, None);
    }
}

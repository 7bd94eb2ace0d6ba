use std::path::PathBuf;

use clap::Parser;
use glam::DVec3;

use crate::error::{HouseLightsError, Result};
use crate::types::{BoundingBox, LightParams};

/// How annotation axes map onto the converted scene's axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AxisMapping {
    /// −90° about X: `(x, y, z)` → `(x, z, −y)`
    #[default]
    #[value(name = "quarter-turn-x")]
    QuarterTurnX,
    #[value(name = "identity")]
    Identity,
}

impl std::fmt::Display for AxisMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisMapping::QuarterTurnX => write!(f, "quarter-turn-x"),
            AxisMapping::Identity => write!(f, "identity"),
        }
    }
}

/// Destination-scene axis compared when resolving the scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScaleAxis {
    #[default]
    #[value(name = "x")]
    X,
    #[value(name = "y")]
    Y,
    #[value(name = "z")]
    Z,
}

impl ScaleAxis {
    pub fn index(self) -> usize {
        match self {
            ScaleAxis::X => 0,
            ScaleAxis::Y => 1,
            ScaleAxis::Z => 2,
        }
    }
}

impl std::fmt::Display for ScaleAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleAxis::X => write!(f, "X"),
            ScaleAxis::Y => write!(f, "Y"),
            ScaleAxis::Z => write!(f, "Z"),
        }
    }
}

/// How far up a room its light is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MountingPolicy {
    /// Fixed fraction between room center and ceiling.
    #[default]
    #[value(name = "uniform")]
    Uniform,
    /// Height rules per room category (stairs low, closets capped, ...).
    #[value(name = "by-category")]
    ByCategory,
}

/// Scale resolution parameters.
#[derive(Debug, Clone)]
pub struct ScaleConfig {
    pub axis: ScaleAxis,
    /// Relative spread of per-axis ratios tolerated before warning.
    pub agreement_tolerance: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            axis: ScaleAxis::X,
            agreement_tolerance: 0.05,
        }
    }
}

/// Grid subdivision for rooms larger than one light can cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subdivision {
    /// Largest horizontal cell edge, in scene units.
    pub max_cell_extent: f64,
}

/// Light placement parameters.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// 0 = room center, 1 = ceiling. Used by `MountingPolicy::Uniform`.
    pub ceiling_offset: f64,
    pub mounting: MountingPolicy,
    pub subdivision: Option<Subdivision>,
    /// Added to every scene position after scaling.
    pub translation: DVec3,
    pub light: LightParams,
    /// Take intensity and color from the room category table.
    pub category_presets: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ceiling_offset: 0.6,
            mounting: MountingPolicy::Uniform,
            subdivision: None,
            translation: DVec3::ZERO,
            light: LightParams::default(),
            category_presets: false,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.ceiling_offset) {
            return Err(HouseLightsError::Config(format!(
                "ceiling offset must be within [0, 1], got {}",
                self.ceiling_offset
            )));
        }
        if let Some(sub) = self.subdivision {
            if !(sub.max_cell_extent.is_finite() && sub.max_cell_extent > 0.0) {
                return Err(HouseLightsError::Config(format!(
                    "max cell extent must be positive, got {}",
                    sub.max_cell_extent
                )));
            }
        }
        if !(self.light.intensity.is_finite() && self.light.intensity >= 0.0) {
            return Err(HouseLightsError::Config(format!(
                "intensity must be non-negative, got {}",
                self.light.intensity
            )));
        }
        Ok(())
    }
}

/// Fully resolved pipeline configuration (constructed from CLI args).
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub houses: Vec<PathBuf>,
    /// Exported scene meshes, paired with `houses` by position.
    pub meshes: Vec<PathBuf>,
    /// Already measured scene bounds for a single house.
    pub mesh_bounds: Option<BoundingBox>,
    pub output: PathBuf,
    pub axis_mapping: AxisMapping,
    pub scale: ScaleConfig,
    pub planner: PlannerConfig,
    pub align_centers: bool,
    pub ambient: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub threads: Option<usize>,
}

/// Parse `xlo,ylo,zlo,xhi,yhi,zhi` into a box.
pub fn parse_bounds(s: &str) -> std::result::Result<BoundingBox, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in bounds: {e}"))?;

    let &[xlo, ylo, zlo, xhi, yhi, zhi] = values.as_slice() else {
        return Err(format!("expected 6 comma-separated numbers, got {}", values.len()));
    };
    let bb = BoundingBox::new(DVec3::new(xlo, ylo, zlo), DVec3::new(xhi, yhi, zhi));
    if !bb.is_ordered() {
        return Err("bounds min must not exceed max".into());
    }
    Ok(bb)
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "house-lights",
    about = "Per-room light placement for annotated house scans",
    version
)]
pub struct CliArgs {
    /// House annotation file (.house); repeat for a batch
    #[arg(short = 'H', long = "house", required = true)]
    pub houses: Vec<PathBuf>,

    /// Converted scene mesh (OBJ, glTF, GLB, PLY); one per --house, same order
    #[arg(short = 'm', long = "mesh", conflicts_with = "mesh_bounds")]
    pub meshes: Vec<PathBuf>,

    /// Measured scene bounds "xlo,ylo,zlo,xhi,yhi,zhi" (single house only)
    #[arg(long, value_parser = parse_bounds, allow_hyphen_values = true)]
    pub mesh_bounds: Option<BoundingBox>,

    /// Output directory for <house>.lights.json plans
    #[arg(short = 'o', long, default_value = ".")]
    pub output: PathBuf,

    /// Annotation → scene axis mapping
    #[arg(long, value_enum, default_value = "quarter-turn-x")]
    pub axis_mapping: AxisMapping,

    /// Scene axis compared when resolving the scale
    #[arg(long, value_enum, default_value = "x")]
    pub scale_axis: ScaleAxis,

    /// Mount height between room center (0) and ceiling (1)
    #[arg(long, default_value_t = 0.6)]
    pub ceiling_offset: f64,

    /// Mount height policy
    #[arg(long, value_enum, default_value = "uniform")]
    pub mounting: MountingPolicy,

    /// Split rooms into a grid of lights with cells no wider than this (scene units)
    #[arg(long)]
    pub max_cell_extent: Option<f64>,

    /// Translate lights so the house center lands on the mesh center
    #[arg(long)]
    pub align_centers: bool,

    /// Use per-category intensity and color
    #[arg(long)]
    pub room_presets: bool,

    /// Light intensity when presets are off
    #[arg(long, default_value_t = 10_000.0)]
    pub intensity: f64,

    /// Add a dome and a distant key light to every plan
    #[arg(long)]
    pub ambient: bool,

    /// Parse and plan only; write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Worker thread count (default: all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl From<CliArgs> for PipelineConfig {
    fn from(args: CliArgs) -> Self {
        PipelineConfig {
            houses: args.houses,
            meshes: args.meshes,
            mesh_bounds: args.mesh_bounds,
            output: args.output,
            axis_mapping: args.axis_mapping,
            scale: ScaleConfig {
                axis: args.scale_axis,
                ..Default::default()
            },
            planner: PlannerConfig {
                ceiling_offset: args.ceiling_offset,
                mounting: args.mounting,
                subdivision: args
                    .max_cell_extent
                    .map(|max_cell_extent| Subdivision { max_cell_extent }),
                light: LightParams {
                    intensity: args.intensity,
                    ..Default::default()
                },
                category_presets: args.room_presets,
                ..Default::default()
            },
            align_centers: args.align_centers,
            ambient: args.ambient,
            dry_run: args.dry_run,
            verbose: args.verbose,
            threads: args.threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_planner_config() {
        let pc = PlannerConfig::default();
        assert!((pc.ceiling_offset - 0.6).abs() < f64::EPSILON);
        assert_eq!(pc.mounting, MountingPolicy::Uniform);
        assert!(pc.subdivision.is_none());
        assert_eq!(pc.translation, DVec3::ZERO);
        assert!(!pc.category_presets);
        assert!(pc.validate().is_ok());
    }

    #[test]
    fn default_scale_config() {
        let sc = ScaleConfig::default();
        assert_eq!(sc.axis, ScaleAxis::X);
        assert!((sc.agreement_tolerance - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn planner_validation() {
        let bad_offset = PlannerConfig {
            ceiling_offset: 1.5,
            ..Default::default()
        };
        assert!(bad_offset.validate().is_err());

        let bad_cell = PlannerConfig {
            subdivision: Some(Subdivision { max_cell_extent: 0.0 }),
            ..Default::default()
        };
        assert!(bad_cell.validate().is_err());
    }

    #[test]
    fn scale_axis_index_and_display() {
        assert_eq!(ScaleAxis::X.index(), 0);
        assert_eq!(ScaleAxis::Y.index(), 1);
        assert_eq!(ScaleAxis::Z.index(), 2);
        assert_eq!(ScaleAxis::Z.to_string(), "Z");
        assert_eq!(AxisMapping::QuarterTurnX.to_string(), "quarter-turn-x");
    }

    #[test]
    fn parse_bounds_valid_and_invalid() {
        let bb = parse_bounds("-1,0,-2.5, 4,3,0").unwrap();
        assert_eq!(bb.min, DVec3::new(-1.0, 0.0, -2.5));
        assert_eq!(bb.max, DVec3::new(4.0, 3.0, 0.0));

        assert!(parse_bounds("0,0,0").unwrap_err().contains("expected 6"));
        assert!(parse_bounds("0,0,0,1,x,1").is_err());
        assert!(parse_bounds("2,0,0,1,1,1").unwrap_err().contains("min"));
    }

    #[test]
    fn cli_args_to_pipeline_config() {
        let args = CliArgs::parse_from([
            "house-lights",
            "-H",
            "a.house",
            "--house",
            "b.house",
            "-m",
            "a.obj",
            "-m",
            "b.glb",
            "-o",
            "./out",
            "--axis-mapping",
            "identity",
            "--scale-axis",
            "z",
            "--ceiling-offset",
            "0.25",
            "--mounting",
            "by-category",
            "--max-cell-extent",
            "3.5",
            "--align-centers",
            "--room-presets",
            "--intensity",
            "5000",
            "--ambient",
            "--dry-run",
            "-v",
            "-j",
            "8",
        ]);

        let config: PipelineConfig = args.into();

        assert_eq!(config.houses, vec![PathBuf::from("a.house"), PathBuf::from("b.house")]);
        assert_eq!(config.meshes, vec![PathBuf::from("a.obj"), PathBuf::from("b.glb")]);
        assert!(config.mesh_bounds.is_none());
        assert_eq!(config.output, PathBuf::from("./out"));
        assert_eq!(config.axis_mapping, AxisMapping::Identity);
        assert_eq!(config.scale.axis, ScaleAxis::Z);
        assert!((config.planner.ceiling_offset - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.planner.mounting, MountingPolicy::ByCategory);
        assert_eq!(config.planner.subdivision, Some(Subdivision { max_cell_extent: 3.5 }));
        assert!(config.planner.category_presets);
        assert!((config.planner.light.intensity - 5000.0).abs() < f64::EPSILON);
        assert!(config.align_centers);
        assert!(config.ambient);
        assert!(config.dry_run);
        assert!(config.verbose);
        assert_eq!(config.threads, Some(8));
    }

    #[test]
    fn cli_args_minimal_with_bounds() {
        let args = CliArgs::parse_from([
            "house-lights",
            "-H",
            "x.house",
            "--mesh-bounds",
            "-5,0,-4,5,3,4",
        ]);
        let config: PipelineConfig = args.into();

        assert_eq!(config.houses.len(), 1);
        assert!(config.meshes.is_empty());
        let bb = config.mesh_bounds.unwrap();
        assert_eq!(bb.min, DVec3::new(-5.0, 0.0, -4.0));
        assert_eq!(config.output, PathBuf::from("."));
        assert_eq!(config.axis_mapping, AxisMapping::QuarterTurnX);
        assert_eq!(config.scale.axis, ScaleAxis::X);
        assert_eq!(config.planner.mounting, MountingPolicy::Uniform);
        assert!(config.planner.subdivision.is_none());
        assert!(!config.align_centers);
        assert!(!config.dry_run);
        assert_eq!(config.threads, None);
    }

    #[test]
    fn cli_rejects_mesh_and_bounds_together() {
        let res = CliArgs::try_parse_from([
            "house-lights",
            "-H",
            "x.house",
            "-m",
            "x.obj",
            "--mesh-bounds",
            "0,0,0,1,1,1",
        ]);
        assert!(res.is_err());
    }
}

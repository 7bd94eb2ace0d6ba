use std::path::PathBuf;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use crate::config::PipelineConfig;
use crate::error::{HouseLightsError, Result};
use crate::ingestion::{self, KnownBounds, MeshBoundsQuery, MeshFile};
use crate::output::{JsonPlanWriter, LightSink};
use crate::placement;
use crate::transform;
use crate::types::{House, LightingPlan};

/// One house that could not be lit.
#[derive(Debug)]
pub struct HouseFailure {
    pub house: String,
    pub error: HouseLightsError,
}

/// Summary of a completed batch run.
#[derive(Debug)]
pub struct ProcessingResult {
    pub houses: usize,
    pub succeeded: usize,
    /// Lights in all successful plans, ambient rig included.
    pub lights: usize,
    pub failures: Vec<HouseFailure>,
    pub duration: Duration,
}

impl ProcessingResult {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A house file and the scene it is placed into.
struct Job {
    house: PathBuf,
    mesh: Box<dyn MeshBoundsQuery>,
}

/// Build the lighting plan for one parsed house.
///
/// `id` names the plan and its errors. The scene is measured once, the scale
/// resolved from the house and scene boxes, and every room planned.
pub fn light_house(
    id: &str,
    house: &House,
    mesh: &dyn MeshBoundsQuery,
    config: &PipelineConfig,
) -> Result<LightingPlan> {
    let mesh_bbox = mesh.mesh_bounds()?;
    let convention = config.axis_mapping.convention();
    let scale = transform::resolve_scale(id, &house.bounds, &mesh_bbox, convention, &config.scale)?;

    let mut planner = config.planner.clone();
    if config.align_centers {
        planner.translation =
            transform::resolve_alignment(&house.bounds, &mesh_bbox, convention, scale);
        debug!(house = id, translation = %planner.translation, "Aligned house center to mesh center");
    }

    let lights = placement::plan(house, convention, scale, &planner);
    let outside = lights.iter().filter(|l| !mesh_bbox.contains_point(l.position)).count();
    if outside > 0 {
        warn!(
            house = id,
            outside,
            lights = lights.len(),
            "Lights fall outside the measured scene bounds"
        );
    }
    let ambient = if config.ambient {
        placement::ambient_rig()
    } else {
        Vec::new()
    };

    Ok(LightingPlan {
        house: id.to_string(),
        scale: scale.value(),
        lights,
        ambient,
    })
}

/// Batch orchestrator: parse, measure, scale, plan and write each house.
pub struct Pipeline;

impl Pipeline {
    /// Run the batch, writing `<output>/<house>.lights.json` per house.
    pub fn run(config: &PipelineConfig) -> Result<ProcessingResult> {
        let writer = JsonPlanWriter::new(&config.output);
        Self::run_with_sink(config, &writer)
    }

    /// Run the batch, handing each plan to `sink` (skipped on dry runs).
    ///
    /// Configuration problems fail the whole run. A failing house is logged
    /// and recorded in the result; the other houses still complete.
    pub fn run_with_sink(config: &PipelineConfig, sink: &dyn LightSink) -> Result<ProcessingResult> {
        let start = Instant::now();
        config.planner.validate()?;
        let jobs = Self::jobs(config)?;

        info!(
            houses = jobs.len(),
            mapping = %config.axis_mapping,
            scale_axis = %config.scale.axis,
            dry_run = config.dry_run,
            "Starting pipeline"
        );

        let outcomes: Vec<(String, Result<LightingPlan>)> = jobs
            .par_iter()
            .map(|job| {
                let id = ingestion::house_id(&job.house);
                let outcome = Self::process(&id, job, config, sink);
                (id, outcome)
            })
            .collect();

        let mut result = ProcessingResult {
            houses: outcomes.len(),
            succeeded: 0,
            lights: 0,
            failures: Vec::new(),
            duration: Duration::ZERO,
        };

        for (house, outcome) in outcomes {
            match outcome {
                Ok(plan) => {
                    if config.dry_run {
                        print_plan_summary(&plan);
                    }
                    result.succeeded += 1;
                    result.lights += plan.total_lights();
                }
                Err(e) => {
                    error!(house = %house, error = %e, "House failed");
                    result.failures.push(HouseFailure { house, error: e });
                }
            }
        }

        result.duration = start.elapsed();
        info!(
            houses = result.houses,
            succeeded = result.succeeded,
            failed = result.failures.len(),
            lights = result.lights,
            elapsed = ?result.duration,
            "Pipeline complete"
        );
        Ok(result)
    }

    fn process(
        id: &str,
        job: &Job,
        config: &PipelineConfig,
        sink: &dyn LightSink,
    ) -> Result<LightingPlan> {
        let house = ingestion::load_house(&job.house)?;
        let plan = light_house(id, &house, job.mesh.as_ref(), config)?;
        if !config.dry_run {
            sink.compose(&plan)?;
        }
        Ok(plan)
    }

    /// Pair every house with its scene by position.
    fn jobs(config: &PipelineConfig) -> Result<Vec<Job>> {
        if config.houses.is_empty() {
            return Err(HouseLightsError::Config("no house files given".into()));
        }

        if let Some(bounds) = config.mesh_bounds {
            if !config.meshes.is_empty() {
                return Err(HouseLightsError::Config(
                    "mesh files and explicit mesh bounds are mutually exclusive".into(),
                ));
            }
            if config.houses.len() != 1 {
                return Err(HouseLightsError::Config(format!(
                    "explicit mesh bounds apply to a single house, got {}",
                    config.houses.len()
                )));
            }
            return Ok(vec![Job {
                house: config.houses[0].clone(),
                mesh: Box::new(KnownBounds(bounds)),
            }]);
        }

        if config.meshes.len() != config.houses.len() {
            return Err(HouseLightsError::Config(format!(
                "{} house files but {} mesh files; give one mesh per house",
                config.houses.len(),
                config.meshes.len()
            )));
        }

        Ok(config
            .houses
            .iter()
            .zip(&config.meshes)
            .map(|(house, mesh)| Job {
                house: house.clone(),
                mesh: Box::new(MeshFile::new(mesh)),
            })
            .collect())
    }
}

/// Print one plan for `--dry-run`.
fn print_plan_summary(plan: &LightingPlan) {
    println!("=== {} ===", plan.house);
    println!("  Scale:  {:.6}", plan.scale);
    println!("  Lights: {}", plan.lights.len());
    for light in &plan.lights {
        let p = light.position;
        println!(
            "    {:<24} level {:<2} ({:.3}, {:.3}, {:.3})  {} {:.0}",
            light.name, light.level, p.x, p.y, p.z, light.params.kind, light.params.intensity
        );
    }
    for light in &plan.ambient {
        println!("    {:<24} {} {:.0}", light.name, light.params.kind, light.params.intensity);
    }
}

#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::fs;
use std::time::Duration;

use critters::simulation::error::Error;
use critters::simulation::genome::Genome;
use critters::simulation::params::Params;
use critters::simulation::report::{GenerationSummary, GenomeUpdate};
use critters::simulation::simulator::SimulationResult;
use ndarray::Array2;
use tempfile::tempdir;

fn create_test_params() -> Params {
    Params {
        population_size: 20,
        best_keep: 2,
        best_priority: 3,
        rand_keep: 4,
        rand_new: 1,
        worst_discard: 5,
        ..Params::default()
    }
}

fn create_test_update(params: &Params) -> GenomeUpdate {
    let results: Vec<SimulationResult> = (0..10)
        .map(|i| SimulationResult {
            fitness: (10 - i) as f32,
            genome: Genome::random(params.genome_hidden_relu, params.genome_weight_amplitude),
        })
        .collect();
    let summary = GenerationSummary::new(7, Duration::from_millis(120), &results, params);
    GenomeUpdate::from_results(&summary, &results, params)
}

#[test]
fn test_params_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("params.json");
    let params = create_test_params();

    params.save_to_file(&path).expect("Failed to save params");
    let loaded = Params::load_from_file(&path).expect("Failed to load params");

    assert_eq!(loaded, params);
}

#[test]
fn test_load_rejects_invalid_params() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("params.json");
    fs::write(&path, r#"{ "genome_hidden_relu": 5 }"#).expect("Failed to write file");

    assert!(matches!(Params::load_from_file(&path), Err(Error::InvalidParams(_))));
}

#[test]
fn test_load_reports_io_and_parse_errors() {
    let dir = tempdir().expect("Failed to create temp dir");

    let missing = Params::load_from_file(dir.path().join("missing.json"));
    assert!(matches!(missing, Err(Error::Io(_))));

    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").expect("Failed to write file");
    assert!(matches!(Params::load_from_file(&path), Err(Error::Serialization(_))));
}

#[test]
fn test_genome_update_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("genomes.json");
    let params = create_test_params();
    let update = create_test_update(&params);

    update.save_to_file(&path).expect("Failed to save update");
    let loaded = GenomeUpdate::load_from_file(&path).expect("Failed to load update");

    assert_eq!(loaded.generation, 7);
    assert_eq!(loaded.fitness, update.fitness);
    assert_eq!(loaded.saved_at, update.saved_at);
    assert_eq!(loaded.genomes, update.genomes);
}

#[test]
fn test_genome_update_rejects_malformed_genome() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("genomes.json");
    let params = create_test_params();
    let update = create_test_update(&params);

    let mut json = serde_json::to_value(&update).expect("Failed to serialize update");
    json["genomes"][0]["hidden_weights"] =
        serde_json::to_value(Array2::<f32>::zeros((6, 9))).expect("Failed to serialize weights");
    fs::write(&path, json.to_string()).expect("Failed to write file");

    assert!(matches!(
        GenomeUpdate::load_from_file(&path),
        Err(Error::InvalidGenome(_))
    ));
}

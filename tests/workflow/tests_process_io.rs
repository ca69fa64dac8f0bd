#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::fixtures::{file_count, workdir};
use parking_lot::Mutex;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wps_inout::processing::{JobDescription, JobRunner, ProcessingMode, SlurmProcessing};
use wps_inout::{
    ComplexOutput, Config, Described, FileStorage, LiteralInput, LiteralType, get_format,
};

fn config_for(root: &Path) -> Config {
    let yaml = format!(
        "server:\n  workdir: {work}\n  outputurl: http://example.org/wps/outputs/\n\
         FileStorage:\n  target: {target}\n\
         processing:\n  mode: slurm\n\
         extra:\n  host: cluster.example.org\n",
        work = root.join("work").display(),
        target = root.join("outputs").display(),
    );
    Config::from_yaml_str(&yaml).unwrap()
}

#[derive(Default)]
struct RecordingRunner {
    scripts: Mutex<Vec<(PathBuf, String)>>,
}

impl JobRunner for RecordingRunner {
    fn submit(&self, script: &Path, host: &str) -> wps_inout::Result<()> {
        self.scripts.lock().push((script.to_path_buf(), host.to_string()));
        Ok(())
    }
}

#[test]
fn test_config_drives_storage_and_processing() {
    let temp_dir = workdir();
    let config = config_for(temp_dir.path());

    assert_eq!(config.processing.mode, ProcessingMode::Slurm);
    let storage = FileStorage::from_config(&config).unwrap();
    assert_eq!(storage.target(), temp_dir.path().join("outputs"));
}

#[test]
fn test_streamed_output_is_stored_and_published() {
    let temp_dir = workdir();
    let config = config_for(temp_dir.path());
    let storage = Arc::new(FileStorage::from_config(&config).unwrap());

    let mut output = ComplexOutput::new("buffered", vec![get_format("GEOJSON", None)])
        .with_workdir(&config.server.workdir)
        .unwrap()
        .with_storage(storage);
    output
        .handle_mut()
        .set_stream(Cursor::new(b"{\"type\": \"FeatureCollection\"}".to_vec()));

    let url = output.url().unwrap();
    assert!(url.starts_with("http://example.org/wps/outputs/wps_"), "{url}");
    assert_eq!(file_count(&temp_dir.path().join("outputs")), 1);
    assert_eq!(file_count(&config.server.workdir), 1);

    // Later reads go through the same working copy
    let stored = fs::read_to_string(output.handle().file().unwrap()).unwrap();
    assert_eq!(stored, "{\"type\": \"FeatureCollection\"}");
}

#[test]
fn test_literal_inputs_submitted_as_job() {
    let temp_dir = workdir();
    let config = config_for(temp_dir.path());

    let mut distance = LiteralInput::new("distance", Some(LiteralType::Float));
    distance.handle_mut().set_value("10.5").unwrap();
    let mut dissolve = LiteralInput::new("dissolve", Some(LiteralType::Boolean));
    dissolve.handle_mut().set_value("TRUE").unwrap();

    let job = [&distance, &dissolve].into_iter().fold(
        JobDescription::new("buffer", &config.server.workdir),
        |job, input| {
            let value = input.handle().value().unwrap();
            job.with_input(input.identifier(), value.to_string())
        },
    );

    let processing = SlurmProcessing::from_config(&config, RecordingRunner::default());
    let script = processing.start(&job).unwrap();

    let submitted = processing.runner().scripts.lock();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0], (script.clone(), "cluster.example.org".to_string()));

    let content = fs::read_to_string(&script).unwrap();
    assert!(content.contains(&format!("#SBATCH -J {}\n", job.uuid)));

    let dumped: Vec<_> = fs::read_dir(&config.server.workdir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .collect();
    assert_eq!(dumped.len(), 1);
    let loaded = JobDescription::load(&dumped[0]).unwrap();
    assert_eq!(loaded.inputs["distance"], "10.5");
    assert_eq!(loaded.inputs["dissolve"], "true");
}

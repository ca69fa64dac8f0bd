//! Slurm batch submission.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use super::{JobDescription, JobRunner};
use crate::config::Config;
use crate::error::{InoutError, Result};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_ENV: &str = "wps";
const DEFAULT_PREFIX: &str = "/opt/conda";

fn render_submit_script(pid: Uuid, env: &str, prefix: &Path, filename: &Path) -> String {
    format!(
        "#!/bin/bash\n\
         #SBATCH -e /tmp/{pid}.err\n\
         #SBATCH -o /tmp/{pid}.out\n\
         #SBATCH -J {pid}\n\
         #SBATCH --time=00:30:00\n\
         #set -eo pipefail -o nounset\n\
         export PATH=\"{prefix}/bin:$PATH\"\n\
         source activate {env};launch \"{filename}\"\n",
        prefix = prefix.display(),
        filename = filename.display(),
    )
}

/// Runs jobs on a Slurm cluster through a [`JobRunner`].
#[derive(Debug)]
pub struct SlurmProcessing<R: JobRunner> {
    workdir: PathBuf,
    host: String,
    env: String,
    prefix: PathBuf,
    runner: R,
}

impl<R: JobRunner> SlurmProcessing<R> {
    pub fn new(workdir: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            workdir: workdir.into(),
            host: DEFAULT_HOST.to_string(),
            env: DEFAULT_ENV.to_string(),
            prefix: PathBuf::from(DEFAULT_PREFIX),
            runner,
        }
    }

    /// Workdir from `server.workdir`, host from `extra.host`.
    pub fn from_config(config: &Config, runner: R) -> Self {
        let processing = Self::new(&config.server.workdir, runner);
        match &config.extra.host {
            Some(host) => processing.with_host(host),
            None => processing,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Conda environment activated before launching.
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    /// Installation prefix whose `bin` is put on `PATH`.
    pub fn with_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Write the sbatch script for `job_id` into a `slurm_*.submit` file in the workdir.
    pub fn build_submit_file(&self, job_id: Uuid, dump_file: &Path) -> Result<PathBuf> {
        fs::create_dir_all(&self.workdir).map_err(|e| InoutError::filesystem(&self.workdir, e))?;
        let mut temp = tempfile::Builder::new()
            .prefix("slurm_")
            .suffix(".submit")
            .tempfile_in(&self.workdir)
            .map_err(|e| InoutError::filesystem(&self.workdir, e))?;

        let script = render_submit_script(job_id, &self.env, &self.prefix, dump_file);
        temp.as_file_mut()
            .write_all(script.as_bytes())
            .map_err(|e| InoutError::filesystem(temp.path(), e))?;

        let (_, path) = temp
            .keep()
            .map_err(|e| InoutError::filesystem(&self.workdir, e.error))?;
        debug!("Wrote submit file {}", path.display());
        Ok(path)
    }

    /// Dump `job`, write its submit script and hand the script to the runner.
    ///
    /// Returns the submit script path.
    pub fn start(&self, job: &JobDescription) -> Result<PathBuf> {
        let dump_file = job.dump(&self.workdir)?;
        let submit_file = self.build_submit_file(job.uuid, &dump_file)?;
        info!("Starting slurm job {} on {}", job.uuid, self.host);
        self.runner.submit(&submit_file, &self.host)?;
        Ok(submit_file)
    }
}

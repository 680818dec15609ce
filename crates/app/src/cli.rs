//! Command line arguments

use std::path::PathBuf;

use assay_domain::PropertySource;
use assay_domain::config::keys;
use assay_infrastructure::ProcessOverrides;
use assay_infrastructure::adapters::DEFAULT_CONFIG_DIR;
use clap::{Parser, ValueEnum};

/// Run the REST and GraphQL API checks.
#[derive(Debug, Parser)]
#[command(name = "assay", author, version, about, long_about = None)]
pub struct Cli {
    /// Active environment (dev, staging, prod or any overlay name)
    #[arg(long, value_name = "NAME")]
    pub env: Option<String>,

    /// Directory holding the .properties files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_CONFIG_DIR)]
    pub config_dir: PathBuf,

    /// Configuration override; only env, api.*, graphql.* and automation.* keys apply
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub define: Vec<String>,

    /// Skip the rest of a suite after its first failing check
    #[arg(long)]
    pub fail_fast: bool,

    /// Suites to run
    #[arg(value_enum, default_value_t = Target::All)]
    pub target: Target,
}

/// Which suites to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// JSONPlaceholder posts and users
    Rest,
    /// SpaceX GraphQL API
    Graphql,
    /// Both suites
    All,
}

impl Target {
    /// Returns true if the REST suite runs.
    #[must_use]
    pub const fn includes_rest(self) -> bool {
        matches!(self, Self::Rest | Self::All)
    }

    /// Returns true if the GraphQL suite runs.
    #[must_use]
    pub const fn includes_graphql(self) -> bool {
        matches!(self, Self::Graphql | Self::All)
    }
}

impl Cli {
    /// Override candidates: process environment, then `-D` definitions,
    /// then `--env`.
    #[must_use]
    pub fn overrides(&self) -> PropertySource {
        self.overrides_from(ProcessOverrides::new().with_env())
    }

    fn overrides_from(&self, base: ProcessOverrides) -> PropertySource {
        let overrides = base.with_definitions(&self.define);
        let overrides = match &self.env {
            Some(env) => overrides.with(keys::ENV, env.as_str()),
            None => overrides,
        };
        overrides.into_source()
    }
}

use collscope_core::{AnalysisUnit, CollscopeConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaTarget {
    /// Analysis unit files
    Unit,
    /// ~/.collscope/config.json
    Config,
}

pub fn run(target: SchemaTarget) -> Result<(), Box<dyn std::error::Error>> {
    let schema = match target {
        SchemaTarget::Unit => schemars::schema_for!(AnalysisUnit),
        SchemaTarget::Config => schemars::schema_for!(CollscopeConfig),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

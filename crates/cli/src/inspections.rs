use collscope_api::models::InspectionId;
use collscope_core::CollscopeConfig;
use nu_ansi_term::Color;
use std::path::PathBuf;

pub fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = CollscopeConfig::load(config.as_deref())?;

    for id in InspectionId::ALL {
        let state = if config.analysis.is_enabled(id) {
            Color::Green.paint("on ")
        } else {
            Color::DarkGray.paint("off")
        };
        println!(
            "{} {:<36} {}",
            state,
            Color::LightBlue.bold().paint(id.as_str()),
            id.description()
        );
    }
    Ok(())
}

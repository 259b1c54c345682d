//! Implementation of the `fabrik computer` command.
//!
//! Responsibility: fill missing hardware fields from config, hand the raw
//! type tag to the core factory, and display the product. Whether a tag is
//! valid is decided by the core, not here.

use tracing::{debug, instrument};

use fabrik_core::{
    application::ComputerService,
    domain::{Computer, ComputerRecord, ComputerSpec},
};

use crate::{
    cli::{ComputerArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `fabrik computer` command.
#[instrument(skip_all, fields(kind = %args.kind))]
pub fn execute(args: ComputerArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let spec = resolve_spec(args.ram, args.hdd, args.cpu, &config);
    debug!(%spec, "Hardware resolved");

    let computer = ComputerService::new().assemble(&args.kind, &spec)?;

    if output.format() == OutputFormat::Json {
        output.json(&ComputerRecord::from(computer.as_ref()))?;
    } else {
        output.success(&summary(computer.as_ref()))?;
    }

    Ok(())
}

/// Flags win; anything omitted comes from `[defaults]`.
fn resolve_spec(
    ram: Option<String>,
    hdd: Option<String>,
    cpu: Option<String>,
    config: &AppConfig,
) -> ComputerSpec {
    ComputerSpec::new(
        ram.unwrap_or_else(|| config.defaults.ram.clone()),
        hdd.unwrap_or_else(|| config.defaults.hdd.clone()),
        cpu.unwrap_or_else(|| config.defaults.cpu.clone()),
    )
}

fn summary(computer: &dyn Computer) -> String {
    format!("Built {}: {}", computer.kind(), computer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabrik_core::domain::ComputerFactory;

    #[test]
    fn flags_override_defaults() {
        let cfg = AppConfig::default();
        let spec = resolve_spec(Some("64GB".into()), None, Some("Xeon".into()), &cfg);
        assert_eq!(spec.ram, "64GB");
        assert_eq!(spec.hdd, cfg.defaults.hdd);
        assert_eq!(spec.cpu, "Xeon");
    }

    #[test]
    fn summary_names_canonical_kind() {
        let pc = ComputerFactory::get_computer("pC", "16GB", "512GB", "i7").unwrap();
        assert_eq!(summary(pc.as_ref()), "Built PC: RAM=16GB, HDD=512GB, CPU=i7");
    }
}

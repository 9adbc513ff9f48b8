//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write;

use firgen_core::{SignatureCatalog, signatures};

use super::{Cli, CliError, CliResult, EmitTarget, ExitCode};
use crate::backend::DirectorySink;
use crate::catalog_file::CatalogFile;
use crate::config::GeneratorConfig;
use crate::errors::GenError;
use crate::pipeline::{self, ContractEntry, StaleReason};

/// Catalog and configuration resolved from the command line.
#[derive(Debug)]
pub struct Inputs {
    pub catalog: SignatureCatalog,
    pub config: GeneratorConfig,
}

/// Resolve the catalog and configuration.
///
/// Precedence for the family stem: `--family`, then the catalog file, then the default.
pub fn load_inputs(cli: &Cli) -> CliResult<Inputs> {
    let mut config = GeneratorConfig::new().with_output_dir(&cli.output_dir);

    let catalog = if let Some(path) = &cli.catalog {
        let file = CatalogFile::load(path)?;
        if let Some(family) = &file.family {
            config = config.with_family(family.clone());
        }
        file.catalog()?
    } else if let Some(codes) = &cli.signatures {
        SignatureCatalog::from_codes(codes.as_slice()).map_err(GenError::from)?
    } else {
        SignatureCatalog::builtin().map_err(GenError::from)?
    };

    if let Some(family) = &cli.family {
        config = config.with_family(family.clone());
    }
    config.validate()?;

    tracing::debug!(signatures = catalog.len(), family = %config.family, "inputs resolved");
    Ok(Inputs { catalog, config })
}

/// Write both artifacts into the output directory.
pub fn generate_artifacts(inputs: &Inputs) -> CliResult<ExitCode> {
    let mut sink = DirectorySink::new(&inputs.config.output_dir);
    let paths = pipeline::generate(&inputs.catalog, &inputs.config, &mut sink)?;
    for path in paths {
        println!("{}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

/// Fail if any artifact on disk differs from a fresh render.
pub fn check_artifacts(inputs: &Inputs) -> CliResult<ExitCode> {
    let stale = pipeline::check(&inputs.catalog, &inputs.config)?;
    if stale.is_empty() {
        println!("artifacts in {} are up to date", inputs.config.output_dir.display());
        return Ok(ExitCode::SUCCESS);
    }

    let mut msg = String::new();
    for s in &stale {
        let reason = match s.reason {
            StaleReason::Missing => "missing",
            StaleReason::Outdated => "out of date",
        };
        let _ = writeln!(msg, "{}: {}", s.path.display(), reason);
    }
    msg.push_str("run firgen to regenerate");
    Err(CliError::failure(msg))
}

/// Print one artifact to stdout.
pub fn emit_artifact(inputs: &Inputs, target: EmitTarget) -> CliResult<ExitCode> {
    let [header, implementation] = pipeline::render(&inputs.catalog, &inputs.config)?;
    let artifact = match target {
        EmitTarget::Header => header,
        EmitTarget::Impl => implementation,
    };
    print!("{}", artifact.contents());
    Ok(ExitCode::SUCCESS)
}

/// Print the catalog as a table.
pub fn list_signatures(inputs: &Inputs) -> CliResult<ExitCode> {
    print!("{}", format_listing(&inputs.catalog));
    Ok(ExitCode::SUCCESS)
}

/// Print the registry entry points the generated layer needs.
pub fn print_contract(inputs: &Inputs) -> CliResult<ExitCode> {
    let contract = pipeline::registry_contract(&inputs.catalog, &inputs.config.names());
    print!("{}", format_contract(&contract));
    Ok(ExitCode::SUCCESS)
}

/// One row per signature: code, input, output and tap types.
///
/// Codes that do not follow `IOT` show `-` for input and output.
pub fn format_listing(catalog: &SignatureCatalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:<12} {:<12} {}", "code", "input", "output", "tap");
    for d in catalog {
        let input = signatures::input_type(d.code()).unwrap_or("-");
        let output = signatures::output_type(d.code()).unwrap_or("-");
        let _ = writeln!(out, "{:<8} {:<12} {:<12} {}", d.code(), input, output, d.tap_type());
    }
    out
}

/// Two C++ prototypes per signature, in catalog order.
pub fn format_contract(contract: &[ContractEntry]) -> String {
    let mut out = String::new();
    for c in contract {
        let _ = writeln!(
            out,
            "{} *{} (const std::vector<{}> &taps);",
            c.filter_type, c.create_entry, c.tap_type
        );
        let _ = writeln!(out, "void {} (std::vector<{}> *info);", c.info_entry, c.info_record);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use firgen_core::SignatureDescriptor;

    fn inputs(args: &[&str]) -> CliResult<Inputs> {
        let mut argv = vec!["firgen"];
        argv.extend_from_slice(args);
        load_inputs(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_default_inputs_use_builtin_catalog() {
        let inputs = inputs(&[]).unwrap();
        assert_eq!(inputs.catalog, SignatureCatalog::builtin().unwrap());
        assert_eq!(inputs.config.family, "gr_fir");
    }

    #[test]
    fn test_signature_flag() {
        let inputs = inputs(&["--signatures", "fff,ccf", "--family", "dsp_fir"]).unwrap();
        let codes: Vec<_> = inputs.catalog.codes().collect();
        assert_eq!(codes, vec!["fff", "ccf"]);
        assert_eq!(inputs.config.family, "dsp_fir");
    }

    #[test]
    fn test_unknown_signature_flag_fails() {
        let err = inputs(&["--signatures", "ccc,qqq"]).unwrap_err();
        assert!(err.message.contains("unknown signature `qqq`"));
    }

    #[test]
    fn test_bad_family_fails() {
        assert!(inputs(&["--family", "9lives"]).is_err());
    }

    #[test]
    fn test_listing() {
        let catalog = SignatureCatalog::from_descriptors(vec![
            SignatureDescriptor::from_code("fsf").unwrap(),
            SignatureDescriptor::explicit("sf", "float").unwrap(),
        ])
        .unwrap();
        let listing = format_listing(&catalog);
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "fsf      float        short        float");
        assert_eq!(lines[2], "sf       -            -            float");
    }

    #[test]
    fn test_contract_format() {
        let catalog = SignatureCatalog::from_codes(&["ccf"]).unwrap();
        let contract = pipeline::registry_contract(&catalog, &GeneratorConfig::default().names());
        assert_eq!(
            format_contract(&contract),
            "gr_fir_ccf *create_gr_fir_ccf (const std::vector<float> &taps);\n\
             void get_gr_fir_ccf_info (std::vector<gr_fir_ccf_info> *info);\n"
        );
    }
}

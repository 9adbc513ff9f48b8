//! Implementation artifact emitter (`gr_fir_util.cc`)
//!
//! Every generated function is a single forwarding call into the registry named by the configured
//! [`RegistryBinding`]. No caching, no validation, no accumulation: the registry owns all selection logic.

use firgen_core::{SignatureCatalog, SignatureDescriptor};

use super::artifact::{Artifact, ArtifactEmitter};
use super::license_fragment;
use super::naming::SymbolNames;
use super::source_writer::SourceWriter;
use crate::config::{GeneratorConfig, RegistryBinding};

pub struct ImplementationEmitter<'a> {
    catalog: &'a SignatureCatalog,
    names: &'a SymbolNames,
    registry: RegistryBinding,
    license: &'a str,
}

impl<'a> ImplementationEmitter<'a> {
    pub fn new(catalog: &'a SignatureCatalog, names: &'a SymbolNames, config: &'a GeneratorConfig) -> Self {
        Self {
            catalog,
            names,
            registry: config.registry_binding(),
            license: &config.license,
        }
    }

    fn includes(&self) -> String {
        let mut w = SourceWriter::new();
        w.blank_line();
        w.line("#ifdef HAVE_CONFIG_H");
        w.line("#include <config.h>");
        w.line("#endif");
        w.line(&format!("#include <{}>", self.names.header_file()));
        w.line(&format!("#include <{}>", self.registry.header));
        w.blank_line();
        w.line("// Each entry point below makes exactly one call into the registry");
        w.line(&format!(
            "// returned by {}, which picks the implementation.",
            self.registry.accessor
        ));
        w.blank_line();
        w.line("// --- constructors ---");
        w.finish()
    }

    fn create_definition(&self, d: &SignatureDescriptor) -> String {
        let create = self.names.create_entry(d.code());
        let mut w = SourceWriter::new();
        w.blank_line();
        w.function_def(
            &format!("{} *", self.names.filter_type(d.code())),
            &format!(
                "{}::{} (const std::vector<{}> &taps)",
                self.names.container(),
                create,
                d.tap_type()
            ),
            |w| w.line(&format!("return {}->{} (taps);", self.registry.accessor, create)),
        );
        w.finish()
    }

    fn info_section(&self) -> String {
        let mut w = SourceWriter::new();
        w.blank_line();
        w.line("// --- info gatherers ---");
        w.finish()
    }

    fn info_definition(&self, d: &SignatureDescriptor) -> String {
        let info = self.names.info_entry(d.code());
        let mut w = SourceWriter::new();
        w.blank_line();
        w.function_def(
            "void",
            &format!(
                "{}::{} (std::vector<{}> *info)",
                self.names.container(),
                info,
                self.names.info_record(d.code())
            ),
            |w| w.line(&format!("{}->{} (info);", self.registry.accessor, info)),
        );
        w.finish()
    }
}

impl ArtifactEmitter for ImplementationEmitter<'_> {
    fn file_name(&self) -> String {
        self.names.implementation_file()
    }

    #[tracing::instrument(skip_all, fields(signatures = self.catalog.len()))]
    fn emit(&self) -> Artifact {
        let mut artifact = Artifact::new(self.file_name());
        artifact.push(license_fragment(self.license));
        artifact.push(self.includes());
        for d in self.catalog {
            artifact.push(self.create_definition(d));
        }
        artifact.push(self.info_section());
        for d in self.catalog {
            artifact.push(self.info_definition(d));
        }
        artifact
    }
}

//! Interface artifact emitter (`gr_fir_util.h`)
//!
//! Layout, in order:
//! 1. License banner
//! 2. "Generated file" warning, include guard, family documentation, includes
//! 3. Per signature: forward declaration of the filter type, then its info record
//! 4. The aggregate container: every creation entry, then every info entry
//! 5. Include guard close
//!
//! Regions 3 and 4 each walk the catalog in declaration order, the same order the implementation emitter uses.

use firgen_core::elements::ELEMENT_TYPES;
use firgen_core::{SignatureCatalog, SignatureDescriptor};

use super::artifact::{Artifact, ArtifactEmitter};
use super::license_fragment;
use super::naming::SymbolNames;
use super::source_writer::SourceWriter;
use crate::config::{GENERATOR_NAME, GeneratorConfig};

pub struct HeaderEmitter<'a> {
    catalog: &'a SignatureCatalog,
    names: &'a SymbolNames,
    config: &'a GeneratorConfig,
}

impl<'a> HeaderEmitter<'a> {
    pub fn new(catalog: &'a SignatureCatalog, names: &'a SymbolNames, config: &'a GeneratorConfig) -> Self {
        Self { catalog, names, config }
    }

    fn preamble(&self) -> String {
        let guard = self.names.include_guard();
        let placeholder = self.names.filter_placeholder();
        let mut w = SourceWriter::new();

        w.blank_line();
        w.block_comment(
            "/*",
            &format!(
                "WARNING: This file is automatically generated by {}.\n\nAny changes made to this file will be overwritten.",
                GENERATOR_NAME
            ),
        );
        w.blank_line();
        w.line(&format!("#ifndef {}", guard));
        w.line(&format!("#define {}", guard));
        w.blank_line();

        let element_set = ELEMENT_TYPES
            .iter()
            .map(|t| format!("'{}' ({})", t.code, t.canonical))
            .collect::<Vec<_>>()
            .join(", ");
        w.block_comment(
            "/*!",
            &format!(
                "\\brief Factory entry points for {p} filters.\n\
                 \n\
                 Each create_* entry returns the fastest {p} implementation\n\
                 available on this platform, as selected by the runtime registry.\n\
                 The rest of the system should create {p}'s through here.\n\
                 \n\
                 The trailing suffix has the form _IOT: I codes the input type,\n\
                 O the output type and T the tap type, each one of\n\
                 {set}.",
                p = placeholder,
                set = element_set
            ),
        );
        w.blank_line();
        w.line("#include <vector>");
        w.line(&format!("#include <{}>", self.config.types_header));
        w.blank_line();
        w.line(&format!(
            "// info records returned by get_{}_info, one per signature",
            placeholder
        ));
        w.blank_line();
        w.finish()
    }

    /// Forward declaration plus info record for one signature.
    fn signature_group(&self, d: &SignatureDescriptor) -> String {
        let filter = self.names.filter_type(d.code());
        let mut w = SourceWriter::new();

        w.line(&format!("class {};", filter));
        w.blank_line();
        // Field order is ABI: name first, creator second.
        w.struct_def(&self.names.info_record(d.code()), |w| {
            w.line("const char *name;  // implementation label, e.g. \"generic\", \"SSE\", \"3DNow!\"");
            w.line(&format!(
                "{} *(*create)(const std::vector<{}> &taps);",
                filter,
                d.tap_type()
            ));
        });
        w.blank_line();
        w.finish()
    }

    fn container_open(&self) -> String {
        let mut w = SourceWriter::new();
        w.line(&format!("struct {} {{", self.names.container()));
        w.blank_line();
        w.indent();
        w.line(&format!(
            "// create the fastest available {}.",
            self.names.filter_placeholder()
        ));
        w.blank_line();
        w.finish()
    }

    fn create_declaration(&self, d: &SignatureDescriptor) -> String {
        member(&format!(
            "static {} *{} (const std::vector<{}> &taps);",
            self.names.filter_type(d.code()),
            self.names.create_entry(d.code()),
            d.tap_type()
        ))
    }

    fn info_banner(&self) -> String {
        let mut w = SourceWriter::new();
        w.blank_line();
        w.indent();
        w.lines(&format!(
            "// Describe every {} implementation linked into this image,\n\
             // for benchmarking and testing. The caller passes a valid pointer\n\
             // to a vector, which is filled with one record per implementation.",
            self.names.filter_placeholder()
        ));
        w.blank_line();
        w.finish()
    }

    fn info_declaration(&self, d: &SignatureDescriptor) -> String {
        member(&format!(
            "static void {} (std::vector<{}> *info);",
            self.names.info_entry(d.code()),
            self.names.info_record(d.code())
        ))
    }

    fn closing(&self) -> String {
        let mut w = SourceWriter::new();
        w.blank_line();
        w.line("};");
        w.blank_line();
        w.line(&format!("#endif /* {} */", self.names.include_guard()));
        w.finish()
    }
}

impl ArtifactEmitter for HeaderEmitter<'_> {
    fn file_name(&self) -> String {
        self.names.header_file()
    }

    #[tracing::instrument(skip_all, fields(signatures = self.catalog.len()))]
    fn emit(&self) -> Artifact {
        let mut artifact = Artifact::new(self.file_name());
        artifact.push(license_fragment(&self.config.license));
        artifact.push(self.preamble());
        for d in self.catalog {
            artifact.push(self.signature_group(d));
        }
        artifact.push(self.container_open());
        for d in self.catalog {
            artifact.push(self.create_declaration(d));
        }
        artifact.push(self.info_banner());
        for d in self.catalog {
            artifact.push(self.info_declaration(d));
        }
        artifact.push(self.closing());
        artifact
    }
}

/// One container member line.
fn member(text: &str) -> String {
    let mut w = SourceWriter::new();
    w.indent();
    w.line(text);
    w.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn emit(catalog: &SignatureCatalog) -> String {
        let config = GeneratorConfig::default();
        let names = config.names();
        HeaderEmitter::new(catalog, &names, &config).emit().contents()
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack.find(needle).unwrap_or_else(|| panic!("`{needle}` not found"))
    }

    #[test]
    fn test_file_name() {
        let config = GeneratorConfig::default();
        let names = config.names();
        let catalog = SignatureCatalog::builtin().unwrap();
        assert_eq!(HeaderEmitter::new(&catalog, &names, &config).file_name(), "gr_fir_util.h");
    }

    #[test]
    fn test_guard_wraps_everything_after_license() {
        let text = emit(&SignatureCatalog::builtin().unwrap());
        let open = position(&text, "#ifndef INCLUDED_GR_FIR_UTIL_H\n#define INCLUDED_GR_FIR_UTIL_H\n");
        assert!(position(&text, "automatically generated by firgen") < open);
        assert!(text.ends_with("#endif /* INCLUDED_GR_FIR_UTIL_H */\n"));
    }

    #[test]
    fn test_info_record_layout() {
        let text = emit(&SignatureCatalog::from_codes(&["ccf"]).unwrap());
        assert!(text.contains(
            "struct gr_fir_ccf_info {\n  const char *name;  // implementation label, e.g. \"generic\", \"SSE\", \"3DNow!\"\n  gr_fir_ccf *(*create)(const std::vector<float> &taps);\n};\n"
        ));
    }

    #[test]
    fn test_records_precede_container() {
        let text = emit(&SignatureCatalog::builtin().unwrap());
        let container = position(&text, "struct gr_fir_util {");
        for code in ["ccc", "ccf", "fcc", "fff", "scc", "fsf"] {
            assert!(position(&text, &format!("class gr_fir_{code};")) < container);
            assert!(position(&text, &format!("struct gr_fir_{code}_info {{")) < container);
        }
    }

    #[test]
    fn test_forward_declaration_precedes_its_record() {
        let text = emit(&SignatureCatalog::builtin().unwrap());
        assert!(position(&text, "class gr_fir_scc;") < position(&text, "struct gr_fir_scc_info {"));
        assert!(position(&text, "struct gr_fir_fff_info {") < position(&text, "class gr_fir_scc;"));
    }

    #[test]
    fn test_create_entries_before_info_entries() {
        let text = emit(&SignatureCatalog::builtin().unwrap());
        let last_create = position(&text, "create_gr_fir_fsf (");
        let first_info = position(&text, "get_gr_fir_ccc_info (");
        assert!(last_create < first_info);
        assert!(text.contains("  static gr_fir_fcc *create_gr_fir_fcc (const std::vector<gr_complex> &taps);\n"));
        assert!(text.contains("  static void get_gr_fir_fcc_info (std::vector<gr_fir_fcc_info> *info);\n"));
    }

    #[test]
    fn test_element_set_documented() {
        let text = emit(&SignatureCatalog::builtin().unwrap());
        assert!(text.contains(" * 's' (short), 'i' (int), 'f' (float), 'c' (gr_complex).\n"));
    }

    #[test]
    fn test_empty_catalog_is_still_well_formed() {
        let text = emit(&SignatureCatalog::from_codes::<&str>(&[]).unwrap());
        assert!(text.contains("struct gr_fir_util {"));
        assert!(!text.contains("class gr_fir_"));
        assert!(text.ends_with("#endif /* INCLUDED_GR_FIR_UTIL_H */\n"));
    }
}

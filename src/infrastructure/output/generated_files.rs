//! Output path computation and the generated-file set handed to protoc

use std::path::PathBuf;

use crate::generation::utils::lower_first;
use crate::generation::{Artifact, FileNaming, PluginOptions};

/// Extension of every generated file
pub const SOURCE_EXTENSION: &str = "rs";

/// Computes `<output_dir>/<base name>.rs` for a service.
///
/// `declared_name` is the service name as written in the `.proto` file and
/// `service_name` the derived one with its `Service` suffix removed. The
/// path is joined as-is; both inputs come from trusted configuration and
/// descriptors.
pub fn emit_path(declared_name: &str, service_name: &str, options: &PluginOptions) -> PathBuf {
    let base = match options.file_naming {
        FileNaming::Lowercase => service_name.to_lowercase(),
        FileNaming::LowerCamel => lower_first(declared_name),
    };
    options
        .output_dir
        .join(format!("{base}.{SOURCE_EXTENSION}"))
}

/// Files produced during a run, in registration order.
///
/// Duplicate paths are kept as registered; protoc decides what to do with
/// them.
#[derive(Debug, Default)]
pub struct GeneratedFiles {
    artifacts: Vec<Artifact>,
}

impl GeneratedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `path`
    pub fn emit(&mut self, path: PathBuf, content: String) {
        tracing::debug!(path = %path.display(), bytes = content.len(), "Registered generated file");
        self.artifacts.push(Artifact { path, content });
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::PackageNaming;

    fn options(file_naming: FileNaming) -> PluginOptions {
        PluginOptions {
            template_file: PathBuf::from("t.tera"),
            output_dir: PathBuf::from("out"),
            package_name: "pkg".to_string(),
            package_naming: PackageNaming::StripPrefix,
            file_naming,
        }
    }

    #[test]
    fn test_emit_path_lowercase() {
        let path = emit_path("OrderService", "Order", &options(FileNaming::Lowercase));
        assert_eq!(path, PathBuf::from("out/order.rs"));

        let path = emit_path("UserAccountService", "UserAccount", &options(FileNaming::Lowercase));
        assert_eq!(path, PathBuf::from("out/useraccount.rs"));
    }

    #[test]
    fn test_emit_path_lower_camel() {
        let path = emit_path("OrderService", "Order", &options(FileNaming::LowerCamel));
        assert_eq!(path, PathBuf::from("out/orderService.rs"));
    }

    #[test]
    fn test_emit_path_empty_service_name() {
        let path = emit_path("Service", "", &options(FileNaming::Lowercase));
        assert_eq!(path, PathBuf::from("out/.rs"));
    }

    #[test]
    fn test_emit_path_nested_output_dir() {
        let mut options = options(FileNaming::Lowercase);
        options.output_dir = PathBuf::from("src/gen/registry");

        let path = emit_path("BillingService", "Billing", &options);
        assert_eq!(path, PathBuf::from("src/gen/registry/billing.rs"));
    }

    #[test]
    fn test_generated_files_keep_order_and_duplicates() {
        let mut files = GeneratedFiles::new();
        assert!(files.is_empty());

        files.emit(PathBuf::from("out/b.rs"), "b".to_string());
        files.emit(PathBuf::from("out/a.rs"), "a".to_string());
        files.emit(PathBuf::from("out/b.rs"), "b2".to_string());

        assert_eq!(files.len(), 3);
        let artifacts = files.into_artifacts();
        assert_eq!(artifacts[0].path, PathBuf::from("out/b.rs"));
        assert_eq!(artifacts[1].path, PathBuf::from("out/a.rs"));
        assert_eq!(artifacts[2].content, "b2");
    }
}

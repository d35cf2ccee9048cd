//! Per-service naming data handed to the template.
//!
//! Each service gets a fresh [`ServiceRecord`]; the template sees its fields
//! as top-level variables (`{{ service_name }}`, `{{ proto_package_name }}` ...).

use serde::Serialize;

use crate::generation::{PackageNaming, PluginOptions, ProtoFile, ProtoService};

/// Suffix removed from declared service names
pub const SERVICE_SUFFIX: &str = "Service";

/// Package prefixes removed under [`PackageNaming::StripPrefix`], in order
pub const PROTO_PACKAGE_PREFIXES: [&str; 2] = ["proto_", "proto."];

/// Template data for a single service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub package_name: String,
    pub service_name: String,
    pub proto_package_name: String,
    /// Only set under [`PackageNaming::PathAware`]; left out of the template
    /// context entirely otherwise, so templates referencing it fail loudly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto_import_path: Option<String>,
}

impl ServiceRecord {
    /// Derive the naming data for `service` declared in `file`
    pub fn derive(file: &ProtoFile, service: &ProtoService, options: &PluginOptions) -> Self {
        let (proto_package_name, proto_import_path) = match options.package_naming {
            PackageNaming::StripPrefix => (strip_proto_prefix(&file.package).to_string(), None),
            PackageNaming::PathAware => (file.package.clone(), Some(file.import_path.clone())),
        };

        Self {
            package_name: options.package_name.clone(),
            service_name: strip_service_suffix(&service.name).to_string(),
            proto_package_name,
            proto_import_path,
        }
    }
}

/// Removes one trailing `Service`, if present
pub fn strip_service_suffix(name: &str) -> &str {
    name.strip_suffix(SERVICE_SUFFIX).unwrap_or(name)
}

/// Removes the first matching prefix of [`PROTO_PACKAGE_PREFIXES`]; at most
/// one prefix is ever stripped.
pub fn strip_proto_prefix(package: &str) -> &str {
    PROTO_PACKAGE_PREFIXES
        .iter()
        .find_map(|prefix| package.strip_prefix(prefix))
        .unwrap_or(package)
}

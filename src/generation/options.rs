//! Plugin options parsed from the protoc parameter string.
//!
//! protoc forwards everything passed through `--service-registry_opt` as a
//! single comma separated string:
//!
//! ```text
//! template_file=templates/registry.rs.tera,output_dir=src/registry,package_name=registry
//! ```
//!
//! Entries without an `=` and keys this plugin does not know are skipped, so
//! options meant for other tools sharing the same `_opt` flag do not break the
//! run. There is no escaping: a value cannot contain `,` or `=`.
//!
//! # Example
//!
//! ```rust
//! use service_registry_gen::generation::{FileNaming, PackageNaming, PluginOptions};
//!
//! let options = PluginOptions::parse("template_file=registry.tera,output_dir=out").unwrap();
//! assert_eq!(options.template_file.to_str(), Some("registry.tera"));
//! assert_eq!(options.output_dir.to_str(), Some("out"));
//! assert_eq!(options.package_name, "local_service_center");
//! assert_eq!(options.package_naming, PackageNaming::StripPrefix);
//! assert_eq!(options.file_naming, FileNaming::Lowercase);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::generation::GenerationError;

/// Directory and package used when the parameter string does not set them
pub const DEFAULT_OUTPUT_DIR: &str = "local_service_center";
pub const DEFAULT_PACKAGE_NAME: &str = "local_service_center";

/// How `proto_package_name` is derived from a file's protobuf package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageNaming {
    /// Strip a leading `proto_` or, failing that, `proto.` from the package.
    ///
    /// Only the prefix goes; the rest keeps its dots, so `proto.shop.v1`
    /// becomes `shop.v1`, which is not a Rust identifier. Templates that
    /// need an identifier should use a single-segment package such as
    /// `proto_shop` or apply a Tera filter (`replace(from=".", to="_")`).
    #[default]
    StripPrefix,
    /// Use the package verbatim and also expose `proto_import_path`
    PathAware,
}

impl PackageNaming {
    /// Returns the parameter value selecting this policy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StripPrefix => "strip_prefix",
            Self::PathAware => "path_aware",
        }
    }
}

impl fmt::Display for PackageNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageNaming {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strip_prefix" => Ok(Self::StripPrefix),
            "path_aware" => Ok(Self::PathAware),
            other => Err(GenerationError::Config(format!(
                "unknown package_naming '{other}', expected strip_prefix or path_aware"
            ))),
        }
    }
}

/// How the output file name is derived from a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileNaming {
    /// Derived service name, fully lower-cased: `OrderService` -> `order.rs`
    #[default]
    Lowercase,
    /// Declared service name with its first character lower-cased:
    /// `OrderService` -> `orderService.rs`
    LowerCamel,
}

impl FileNaming {
    /// Returns the parameter value selecting this policy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::LowerCamel => "lower_camel",
        }
    }
}

impl fmt::Display for FileNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileNaming {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowercase" => Ok(Self::Lowercase),
            "lower_camel" => Ok(Self::LowerCamel),
            other => Err(GenerationError::Config(format!(
                "unknown file_naming '{other}', expected lowercase or lower_camel"
            ))),
        }
    }
}

/// Configuration for a single plugin run.
///
/// Built once from the parameter string and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOptions {
    /// Template rendered once per service; always non-empty
    pub template_file: PathBuf,

    /// Directory prefix of every generated file
    pub output_dir: PathBuf,

    /// Package name injected into the template as `package_name`
    pub package_name: String,

    pub package_naming: PackageNaming,

    pub file_naming: FileNaming,
}

impl PluginOptions {
    /// Parse a `key=value,key=value` parameter string
    pub fn parse(param: &str) -> Result<Self, GenerationError> {
        if param.is_empty() {
            return Err(GenerationError::Config(
                "missing required parameter".to_string(),
            ));
        }

        let mut template_file = String::new();
        let mut output_dir = DEFAULT_OUTPUT_DIR.to_string();
        let mut package_name = DEFAULT_PACKAGE_NAME.to_string();
        let mut package_naming = PackageNaming::default();
        let mut file_naming = FileNaming::default();

        for entry in param.split(',') {
            let Some((key, value)) = entry.split_once('=') else {
                continue;
            };
            let value = value.trim();

            match key.trim() {
                "template_file" => template_file = value.to_string(),
                "output_dir" => output_dir = value.to_string(),
                "package_name" => package_name = value.to_string(),
                "package_naming" => package_naming = value.parse()?,
                "file_naming" => file_naming = value.parse()?,
                other => tracing::debug!(key = %other, "Ignoring unknown plugin parameter"),
            }
        }

        if template_file.is_empty() {
            return Err(GenerationError::Config(
                "template_file is required".to_string(),
            ));
        }

        Ok(Self {
            template_file: PathBuf::from(template_file),
            output_dir: PathBuf::from(output_dir),
            package_name,
            package_naming,
            file_naming,
        })
    }
}

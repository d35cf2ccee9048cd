//! Application layer - wires the protoc boundary to the generation domain

pub mod errors;
pub mod generate;

pub use errors::*;
pub use generate::*;

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
    use prost_types::{FileDescriptorProto, ServiceDescriptorProto};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn request(parameter: Option<String>) -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: vec!["orders.proto".to_string()],
            parameter,
            proto_file: vec![FileDescriptorProto {
                name: Some("orders.proto".to_string()),
                package: Some("proto_orders".to_string()),
                service: vec![ServiceDescriptorProto {
                    name: Some("OrderService".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn template(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_execute_success() {
        let tmpl = template("pub struct {{ service_name }}In{{ proto_package_name }};");
        let parameter = format!("template_file={}", tmpl.path().display());

        let response = GeneratePluginUseCase::default().execute(&request(Some(parameter)), None);

        assert!(response.error.is_none());
        assert_eq!(response.file.len(), 1);
        assert_eq!(
            response.file[0].name.as_deref(),
            Some("local_service_center/order.rs")
        );
        assert_eq!(
            response.file[0].content.as_deref(),
            Some("pub struct OrderInorders;\n")
        );
    }

    #[test]
    fn test_execute_path_aware_keyword_package() {
        let tmpl = template("pub use {{ proto_import_path }}::{{ service_name }}Client;");
        let parameter = format!(
            "template_file={},package_naming=path_aware",
            tmpl.path().display()
        );
        let mut request = request(Some(parameter));
        request.proto_file[0].package = Some("google.type".to_string());

        let response = GeneratePluginUseCase::default().execute(&request, None);

        assert!(response.error.is_none(), "{:?}", response.error);
        assert_eq!(
            response.file[0].content.as_deref(),
            Some("pub use google::r#type::OrderClient;\n")
        );
    }

    #[test]
    fn test_execute_missing_parameter_is_error_response() {
        let response = GeneratePluginUseCase::default().execute(&request(None), None);

        assert!(response.file.is_empty());
        assert!(
            response
                .error
                .as_deref()
                .unwrap()
                .contains("missing required parameter")
        );
    }

    #[test]
    fn test_execute_parameter_override() {
        let tmpl = template("pub struct {{ service_name }};");
        let parameter = format!("template_file={},output_dir=gen", tmpl.path().display());

        let response = GeneratePluginUseCase::default()
            .execute(&request(Some("output_dir=ignored".to_string())), Some(&parameter));

        assert!(response.error.is_none());
        assert_eq!(response.file[0].name.as_deref(), Some("gen/order.rs"));
    }

    #[test]
    fn test_run_reads_and_writes_protocol_bytes() {
        let tmpl = template("pub struct {{ service_name }};");
        let parameter = format!("template_file={}", tmpl.path().display());
        let input = request(Some(parameter)).encode_to_vec();
        let mut output = Vec::new();

        GeneratePluginUseCase::default()
            .run(input.as_slice(), &mut output, None)
            .unwrap();

        let response = CodeGeneratorResponse::decode(output.as_slice()).unwrap();
        assert_eq!(response.file.len(), 1);
    }

    #[test]
    fn test_run_fails_on_undecodable_input() {
        let mut output = Vec::new();
        let err = GeneratePluginUseCase::default()
            .run(&[0xff, 0xff, 0xff][..], &mut output, None)
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ProtocolError(_)));
        assert!(output.is_empty());
    }
}

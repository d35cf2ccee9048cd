//! String transformation utilities for code generation
//!
//! Identifier helpers shared by the naming deriver, the file emitter and the
//! protoc adapter.

use heck::ToSnakeCase;

/// Lower-cases the first character of `s`, leaving the rest untouched.
///
/// # Examples
/// ```
/// use service_registry_gen::generation::utils::lower_first;
///
/// assert_eq!(lower_first("OrderService"), "orderService");
/// assert_eq!(lower_first("HTTPGateway"), "hTTPGateway");
/// assert_eq!(lower_first(""), "");
/// ```
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Identifiers that cannot be raw and get a trailing `_` instead of `r#`
const NON_RAW_KEYWORDS: [&str; 4] = ["self", "super", "crate", "Self"];

/// Strict and reserved keywords across Rust editions
const RUST_KEYWORDS: [&str; 48] = [
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Converts one package segment into a Rust module identifier the way
/// prost-build does: snake_case, then keyword escaping.
///
/// # Examples
/// ```
/// use service_registry_gen::generation::utils::module_ident;
///
/// assert_eq!(module_ident("OrdersV1"), "orders_v1");
/// assert_eq!(module_ident("type"), "r#type");
/// assert_eq!(module_ident("self"), "self_");
/// ```
pub fn module_ident(segment: &str) -> String {
    let ident = segment.to_snake_case();
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Converts a protobuf package into the Rust module path prost-build places
/// its types under.
///
/// # Examples
/// ```
/// use service_registry_gen::generation::utils::package_module_path;
///
/// assert_eq!(package_module_path("acme.orders.v1"), "acme::orders::v1");
/// assert_eq!(package_module_path("google.type"), "google::r#type");
/// assert_eq!(package_module_path("orders"), "orders");
/// assert_eq!(package_module_path(""), "");
/// ```
pub fn package_module_path(package: &str) -> String {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(module_ident)
        .collect::<Vec<_>>()
        .join("::")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Order"), "order");
        assert_eq!(lower_first("order"), "order");
        assert_eq!(lower_first("Ümlaut"), "ümlaut");
        assert_eq!(lower_first("X"), "x");
    }

    #[test]
    fn test_package_module_path_ignores_empty_segments() {
        assert_eq!(package_module_path(".acme..orders."), "acme::orders");
        assert_eq!(package_module_path("proto_orders"), "proto_orders");
    }

    #[test]
    fn test_package_module_path_escapes_keywords() {
        assert_eq!(package_module_path("google.type"), "google::r#type");
        assert_eq!(package_module_path("acme.async.mod"), "acme::r#async::r#mod");
        assert_eq!(package_module_path("acme.self.v1"), "acme::self_::v1");
        assert_eq!(package_module_path("acme.Self"), "acme::self_");
    }

    #[test]
    fn test_package_module_path_snake_cases_segments() {
        assert_eq!(package_module_path("Acme.OrderBook.V1"), "acme::order_book::v1");
        assert_eq!(package_module_path("acme.orderBook"), "acme::order_book");
    }
}

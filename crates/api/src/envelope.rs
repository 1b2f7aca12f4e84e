//! SOAP 1.1 request envelope writer.

use std::borrow::Cow;

use heck::ToLowerCamelCase;
use quick_xml::escape::escape;
use serde_json::Value;

use crate::SoapRequest;

const SOAP_ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Prefix bound to the SOAP envelope namespace.
pub const ENVELOPE_PREFIX: &str = "soapenv";
/// Prefix bound to the service namespace; qualifies the operation element.
pub const NAMESPACE_PREFIX: &str = "ns";
/// Prefix bound to the service's shared objects namespace.
pub const SHARED_PREFIX: &str = "shar";

/// Render the request envelope for `request`.
///
/// Message keys are written as given (`shar:productId`). Nested objects and
/// arrays become child and repeated elements; their snake_case keys are
/// converted to lowerCamelCase and inherit the parent's prefix. `null` values
/// are omitted.
pub fn build_envelope(request: &SoapRequest<'_>) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push_str(&format!(
        r#"<{ENVELOPE_PREFIX}:Envelope xmlns:{ENVELOPE_PREFIX}="{SOAP_ENVELOPE_NAMESPACE}" xmlns:{NAMESPACE_PREFIX}="{}" xmlns:{SHARED_PREFIX}="{}">"#,
        escape(request.service.namespace),
        escape(request.service.shared_namespace),
    ));
    xml.push_str(&format!("<{ENVELOPE_PREFIX}:Header/><{ENVELOPE_PREFIX}:Body>"));
    xml.push_str(&format!("<{NAMESPACE_PREFIX}:{}>", request.operation));
    for (name, value) in request.message {
        write_element(&mut xml, name, value);
    }
    xml.push_str(&format!("</{NAMESPACE_PREFIX}:{}>", request.operation));
    xml.push_str(&format!("</{ENVELOPE_PREFIX}:Body></{ENVELOPE_PREFIX}:Envelope>"));
    xml
}

fn write_element(xml: &mut String, name: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                write_element(xml, name, item);
            }
        }
        Value::Object(children) => {
            xml.push_str(&format!("<{name}>"));
            for (key, child) in children {
                write_element(xml, &child_name(name, key), child);
            }
            xml.push_str(&format!("</{name}>"));
        }
        Value::String(text) => xml.push_str(&format!("<{name}>{}</{name}>", escape(text.as_str()))),
        Value::Bool(flag) => xml.push_str(&format!("<{name}>{flag}</{name}>")),
        Value::Number(number) => xml.push_str(&format!("<{name}>{number}</{name}>")),
    }
}

fn child_name<'a>(parent: &str, key: &'a str) -> Cow<'a, str> {
    if key.contains(':') {
        return Cow::Borrowed(key);
    }
    let local = key.to_lower_camel_case();
    match parent.split_once(':') {
        Some((prefix, _)) => Cow::Owned(format!("{prefix}:{local}")),
        None => Cow::Owned(local),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promostandards_types::{Message, ServiceConfig, ServiceKind};
    use serde_json::json;
    use url::Url;

    fn service() -> ServiceConfig {
        ServiceConfig::new(
            ServiceKind::ProductData,
            Url::parse("https://supplier.example.com/pds").expect("url"),
        )
    }

    #[test]
    fn envelope_declares_namespaces_and_wraps_operation() {
        let service = service();
        let mut message = Message::new();
        message.insert("shar:wsVersion".into(), json!("2.0.0"));
        message.insert("shar:isSellable".into(), json!(true));
        let xml = build_envelope(&SoapRequest {
            service: &service,
            operation: "GetProductSellableRequest",
            action: "getProductSellable",
            message: &message,
        });

        assert!(xml.contains(r#"xmlns:ns="http://www.promostandards.org/WSDL/ProductDataService/1.0.0/""#));
        assert!(xml.contains(r#"xmlns:shar="http://www.promostandards.org/WSDL/ProductDataService/1.0.0/SharedObjects/""#));
        assert!(xml.contains(
            "<ns:GetProductSellableRequest><shar:wsVersion>2.0.0</shar:wsVersion><shar:isSellable>true</shar:isSellable></ns:GetProductSellableRequest>"
        ));
    }

    #[test]
    fn nested_values_become_prefixed_camel_case_children() {
        let service = service();
        let mut message = Message::new();
        message.insert(
            "shar:filter".into(),
            json!({ "part_id_array": { "part_id": ["P-1", "P-2"] } }),
        );
        let xml = build_envelope(&SoapRequest {
            service: &service,
            operation: "GetInventoryLevelsRequest",
            action: "getInventoryLevels",
            message: &message,
        });

        assert!(xml.contains(
            "<shar:filter><shar:partIdArray><shar:partId>P-1</shar:partId><shar:partId>P-2</shar:partId></shar:partIdArray></shar:filter>"
        ));
    }

    #[test]
    fn null_fields_are_omitted_and_text_is_escaped() {
        let service = service();
        let mut message = Message::new();
        message.insert("shar:password".into(), Value::Null);
        message.insert("shar:id".into(), json!("acme & <sons>"));
        let xml = build_envelope(&SoapRequest {
            service: &service,
            operation: "GetProductRequest",
            action: "getProduct",
            message: &message,
        });

        assert!(!xml.contains("password"));
        assert!(xml.contains("<shar:id>acme &amp; &lt;sons&gt;</shar:id>"));
    }
}

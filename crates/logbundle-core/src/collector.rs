//! Declaration collection
//!
//! Turns the interface elements handed over by the host into bundle
//! declarations. Collection never fails; invalid combinations are left for
//! the validator to reject.

use crate::codegen::naming::package_of;
use crate::model::{AnnotationSet, BundleDeclaration, InterfaceElement, MethodDeclaration, MethodElement};
use tracing::debug;

/// Collect one bundle per interface carrying the bundle marker, in discovery order.
pub fn collect_bundles(interfaces: &[InterfaceElement]) -> Vec<BundleDeclaration> {
    interfaces.iter().filter_map(collect_bundle).collect()
}

/// Collect a single interface, or `None` if it is not a bundle.
pub fn collect_bundle(interface: &InterfaceElement) -> Option<BundleDeclaration> {
    let Some(marker) = &interface.log_bundle else {
        debug!(interface = %interface.name, "skipping interface without bundle marker");
        return None;
    };

    let namespace = interface
        .namespace
        .clone()
        .unwrap_or_else(|| package_of(&interface.name).to_string());

    let methods = interface
        .methods
        .iter()
        .filter_map(|method| collect_method(&interface.name, method))
        .collect::<Vec<_>>();

    debug!(
        interface = %interface.name,
        project_code = %marker.project_code,
        methods = methods.len(),
        "collected bundle"
    );

    Some(BundleDeclaration {
        qualified_name: interface.name.clone(),
        namespace,
        project_code: marker.project_code.clone(),
        methods,
    })
}

fn collect_method(interface: &str, method: &MethodElement) -> Option<MethodDeclaration> {
    let annotations = AnnotationSet {
        message: method.message.clone(),
        log_message: method.log_message.clone(),
        get_logger: method.get_logger.clone(),
    };

    if annotations.is_empty() {
        debug!(interface, method = %method.name, "method carries no message annotation");
        return None;
    }

    Some(MethodDeclaration {
        name: method.name.clone(),
        return_type: method.returns.clone(),
        parameters: method.parameters.clone(),
        annotations,
    })
}

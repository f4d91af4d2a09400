//! Kubernetes recommended labels shared by all operator-managed resources.
//!
//! See <https://kubernetes.io/docs/concepts/overview/working-with-objects/common-labels/>

use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;

/// The application name.
pub const NAME_LABEL: &str = "app.kubernetes.io/name";
/// The component within the architecture, e.g. "module" or "workspace".
pub const COMPONENT_LABEL: &str = "app.kubernetes.io/component";
/// The higher-level application this resource belongs to.
pub const PART_OF_LABEL: &str = "app.kubernetes.io/part-of";
/// The tool managing the resource.
pub const MANAGED_BY_LABEL: &str = "app.kubernetes.io/managed-by";
/// The current version of the application.
pub const VERSION_LABEL: &str = "app.kubernetes.io/version";

/// Fixed `part-of` value shared across all OtterScale operators.
pub const SYSTEM: &str = "otterscale-system";
/// `managed-by` value for this operator.
pub const OPERATOR: &str = "operator-template";

/// Base set of recommended labels for an operator-managed resource.
///
/// The version label is omitted when `version` is empty, since an empty version carries no
/// meaning.
/// Domain-specific labels are added by the caller on the returned map.
pub fn standard(name: &str, component: &str, version: &str) -> BTreeMap<String, String> {
    let mut labels = selector_labels(name, component);
    if !version.is_empty() {
        labels.insert(VERSION_LABEL.into(), version.into());
    }
    labels
}

// selector_labels must stay stable across upgrades; selectors on workloads are immutable
pub fn selector_labels(name: &str, component: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (NAME_LABEL.into(), name.into()),
        (COMPONENT_LABEL.into(), component.into()),
        (PART_OF_LABEL.into(), SYSTEM.into()),
        (MANAGED_BY_LABEL.into(), OPERATOR.into()),
    ])
}

pub fn label_selector(name: &str, component: &str) -> LabelSelector {
    LabelSelector {
        match_labels: Some(selector_labels(name, component)),
        match_expressions: None,
    }
}

/// Textual form of a set of labels, as accepted by list and watch calls.
pub fn selector_string(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{k}={v}")) // environment=production
        .collect::<Vec<_>>()
        .join(",")
}

/// Selects every resource managed by this operator.
pub fn managed_by_selector() -> String {
    selector_string(&BTreeMap::from([(MANAGED_BY_LABEL.to_string(), OPERATOR.to_string())]))
}

/// Selects the resources of one component, across versions.
pub fn component_selector(name: &str, component: &str) -> String {
    selector_string(&selector_labels(name, component))
}

use super::*;
use std::error::Error;

#[test]
fn leptos_config_error_is_kept_as_source() {
    let err = HostError::from(LeptosConfigError::ConfigSectionNotFound);
    assert!(matches!(err, HostError::Leptos(LeptosConfigError::ConfigSectionNotFound)));
    assert_eq!(
        err.to_string(),
        "leptos configuration: package.metadata.leptos section missing from Cargo.toml"
    );
    let source = err.source().expect("typed source");
    assert!(source.downcast_ref::<LeptosConfigError>().is_some());
}

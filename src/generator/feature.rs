use tracing::{info, warn};

use super::components::ComponentKind;
use super::render::GeneratedArtifact;
use super::Generator;
use crate::error::{Result, ScaffoldError};

/// Components produced by [`Generator::generate_feature`], in order.
pub const FEATURE_COMPONENTS: [ComponentKind; 6] = [
    ComponentKind::Model,
    ComponentKind::Service,
    ComponentKind::Controller,
    ComponentKind::Route,
    ComponentKind::Test,
    ComponentKind::Example,
];

/// Components produced by [`Generator::generate_resource`], in order.
pub const RESOURCE_COMPONENTS: [ComponentKind; 4] = [
    ComponentKind::Controller,
    ComponentKind::Model,
    ComponentKind::Router,
    ComponentKind::Service,
];

/// Outcome of a collect-all run: what was written and what failed.
#[derive(Debug, Default)]
pub struct ResourceReport {
    pub artifacts: Vec<GeneratedArtifact>,
    pub failures: Vec<(ComponentKind, ScaffoldError)>,
}

impl ResourceReport {
    /// `true` when no component failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Generator {
    /// Generate model, service, controller, route, test and example for one resource.
    ///
    /// Fail-fast: the first component error is returned unchanged and the
    /// remaining components are not attempted. Files already written stay.
    pub fn generate_feature(&self, raw_name: &str, package: &str) -> Result<Vec<GeneratedArtifact>> {
        let mut artifacts = Vec::with_capacity(FEATURE_COMPONENTS.len());
        for kind in FEATURE_COMPONENTS {
            artifacts.push(self.generate(kind, raw_name, package)?);
        }
        info!(name = raw_name, count = artifacts.len(), "generated feature");
        Ok(artifacts)
    }

    /// Generate controller, model, router and service for one resource.
    ///
    /// Collect-all: every component is attempted; failures are logged and
    /// recorded in the report instead of stopping the run.
    pub fn generate_resource(&self, raw_name: &str, package: &str) -> ResourceReport {
        let mut report = ResourceReport::default();
        for kind in RESOURCE_COMPONENTS {
            match self.generate(kind, raw_name, package) {
                Ok(artifact) => report.artifacts.push(artifact),
                Err(err) => {
                    warn!(%kind, name = raw_name, error = %err, "component generation failed");
                    report.failures.push((kind, err));
                }
            }
        }
        report
    }
}

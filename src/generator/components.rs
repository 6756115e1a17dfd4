use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use super::context::{FieldMap, ModelContext, ResourceContext, RouterContext, ServiceContext};
use super::render::{render_template, GeneratedArtifact};
use super::Generator;
use crate::error::{Result, ScaffoldError};
use crate::naming::ResourceName;

/// The component kinds a single resource can be scaffolded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Controller,
    Model,
    Route,
    Router,
    Service,
    Test,
    Example,
}

impl ComponentKind {
    /// Every kind, in descriptor-table order.
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Controller,
        ComponentKind::Model,
        ComponentKind::Route,
        ComponentKind::Router,
        ComponentKind::Service,
        ComponentKind::Test,
        ComponentKind::Example,
    ];

    /// Lower-case name, as used on the command line and in template paths.
    pub fn as_str(self) -> &'static str {
        self.descriptor().template
    }

    /// Static layout entry for this kind.
    pub fn descriptor(self) -> &'static ComponentDescriptor {
        match self {
            ComponentKind::Controller => &DESCRIPTORS[0],
            ComponentKind::Model => &DESCRIPTORS[1],
            ComponentKind::Route => &DESCRIPTORS[2],
            ComponentKind::Router => &DESCRIPTORS[3],
            ComponentKind::Service => &DESCRIPTORS[4],
            ComponentKind::Test => &DESCRIPTORS[5],
            ComponentKind::Example => &DESCRIPTORS[6],
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ComponentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| format!("unknown component kind '{s}'"))
    }
}

/// Where a component kind lands and which fields its template sees.
pub struct ComponentDescriptor {
    pub kind: ComponentKind,
    /// Output directory under the output root
    pub dir: &'static str,
    /// Appended to the lower-cased resource name
    pub file_suffix: &'static str,
    /// Directory and file stem under `component/`
    pub template: &'static str,
    pub fields: fn(&ResourceName, &str) -> Box<dyn FieldMap>,
}

impl ComponentDescriptor {
    /// e.g. `user_controller.go`
    pub fn file_name(&self, name: &ResourceName) -> String {
        format!("{}{}", name.file_stem(), self.file_suffix)
    }
}

fn model_fields(name: &ResourceName, package: &str) -> Box<dyn FieldMap> {
    Box::new(ModelContext::new(name, package))
}

fn resource_fields(name: &ResourceName, package: &str) -> Box<dyn FieldMap> {
    Box::new(ResourceContext::new(name, package))
}

fn service_fields(name: &ResourceName, package: &str) -> Box<dyn FieldMap> {
    Box::new(ServiceContext::new(name, package))
}

fn router_fields(name: &ResourceName, package: &str) -> Box<dyn FieldMap> {
    Box::new(RouterContext::new(name, package))
}

static DESCRIPTORS: [ComponentDescriptor; 7] = [
    ComponentDescriptor {
        kind: ComponentKind::Controller,
        dir: "controllers",
        file_suffix: "_controller.go",
        template: "controller",
        fields: resource_fields,
    },
    ComponentDescriptor {
        kind: ComponentKind::Model,
        dir: "models",
        file_suffix: ".go",
        template: "model",
        fields: model_fields,
    },
    ComponentDescriptor {
        kind: ComponentKind::Route,
        dir: "routes",
        file_suffix: "_routes.go",
        template: "route",
        fields: resource_fields,
    },
    ComponentDescriptor {
        kind: ComponentKind::Router,
        dir: "routers",
        file_suffix: "_router.go",
        template: "router",
        fields: router_fields,
    },
    ComponentDescriptor {
        kind: ComponentKind::Service,
        dir: "services",
        file_suffix: "_service.go",
        template: "service",
        fields: service_fields,
    },
    ComponentDescriptor {
        kind: ComponentKind::Test,
        dir: "tests",
        file_suffix: "_test.go",
        template: "test",
        fields: resource_fields,
    },
    ComponentDescriptor {
        kind: ComponentKind::Example,
        dir: "examples",
        file_suffix: "_example.go",
        template: "example",
        fields: resource_fields,
    },
];

impl Generator {
    /// Output path a component of `kind` would be written to for `name`.
    pub fn component_path(&self, kind: ComponentKind, name: &ResourceName) -> PathBuf {
        let descriptor = kind.descriptor();
        self.config
            .output_root
            .join(descriptor.dir)
            .join(descriptor.file_name(name))
    }

    /// Render one component for `raw_name`.
    ///
    /// # Errors
    ///
    /// `Invalid` for a name with no identifier characters, `Conflict` if the
    /// component file already exists, otherwise whatever the renderer reports.
    pub fn generate(
        &self,
        kind: ComponentKind,
        raw_name: &str,
        package: &str,
    ) -> Result<GeneratedArtifact> {
        let name = ResourceName::new(raw_name)?;
        let descriptor = kind.descriptor();
        let output = self.component_path(kind, &name);

        if output.exists() {
            return Err(ScaffoldError::Conflict { path: output });
        }

        let template = self.config.component_template(descriptor.template);
        let fields = (descriptor.fields)(&name, package);
        debug!(%kind, name = name.pascal(), output = %output.display(), "generating component");
        render_template(&template, &output, &fields)
    }

    /// [`Generator::generate`] with [`ComponentKind::Controller`].
    pub fn generate_controller(&self, raw_name: &str, package: &str) -> Result<GeneratedArtifact> {
        self.generate(ComponentKind::Controller, raw_name, package)
    }

    /// [`Generator::generate`] with [`ComponentKind::Model`].
    pub fn generate_model(&self, raw_name: &str, package: &str) -> Result<GeneratedArtifact> {
        self.generate(ComponentKind::Model, raw_name, package)
    }

    /// [`Generator::generate`] with [`ComponentKind::Route`].
    pub fn generate_route(&self, raw_name: &str, package: &str) -> Result<GeneratedArtifact> {
        self.generate(ComponentKind::Route, raw_name, package)
    }

    /// [`Generator::generate`] with [`ComponentKind::Router`].
    pub fn generate_router(&self, raw_name: &str, package: &str) -> Result<GeneratedArtifact> {
        self.generate(ComponentKind::Router, raw_name, package)
    }

    /// [`Generator::generate`] with [`ComponentKind::Service`].
    pub fn generate_service(&self, raw_name: &str, package: &str) -> Result<GeneratedArtifact> {
        self.generate(ComponentKind::Service, raw_name, package)
    }

    /// [`Generator::generate`] with [`ComponentKind::Test`].
    pub fn generate_test(&self, raw_name: &str, package: &str) -> Result<GeneratedArtifact> {
        self.generate(ComponentKind::Test, raw_name, package)
    }

    /// [`Generator::generate`] with [`ComponentKind::Example`].
    pub fn generate_example(&self, raw_name: &str, package: &str) -> Result<GeneratedArtifact> {
        self.generate(ComponentKind::Example, raw_name, package)
    }
}

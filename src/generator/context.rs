//! Typed field records handed to templates.
//!
//! One record per component family. Templates only ever see the flat
//! string map produced by [`FieldMap::fields`].

use std::collections::BTreeMap;

use crate::naming::ResourceName;

/// Anything that can be flattened into the key → value map a template renders against.
pub trait FieldMap {
    fn fields(&self) -> BTreeMap<&'static str, String>;
}

/// Fields for `model` templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelContext {
    pub name: String,
    pub table_name: String,
    pub var_name: String,
    pub package: String,
}

impl ModelContext {
    /// Derive the fields from an already-validated name.
    pub fn new(name: &ResourceName, package: &str) -> Self {
        Self {
            name: name.pascal().to_string(),
            table_name: name.table_name(),
            var_name: name.var_name(),
            package: package.to_string(),
        }
    }
}

impl FieldMap for ModelContext {
    fn fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Name", self.name.clone()),
            ("TableName", self.table_name.clone()),
            ("VarName", self.var_name.clone()),
            ("Package", self.package.clone()),
        ])
    }
}

/// Fields for `controller`, `route`, `test` and `example` templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContext {
    pub name: String,
    pub plural_name: String,
    /// URL slug, e.g. `orders`
    pub resource_name: String,
    pub package: String,
}

impl ResourceContext {
    pub fn new(name: &ResourceName, package: &str) -> Self {
        Self {
            name: name.pascal().to_string(),
            plural_name: name.plural(),
            resource_name: name.slug(),
            package: package.to_string(),
        }
    }
}

impl FieldMap for ResourceContext {
    fn fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Name", self.name.clone()),
            ("PluralName", self.plural_name.clone()),
            ("ResourceName", self.resource_name.clone()),
            ("Package", self.package.clone()),
        ])
    }
}

/// Fields for `service` templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceContext {
    pub name: String,
    pub var_name: String,
    pub package: String,
}

impl ServiceContext {
    pub fn new(name: &ResourceName, package: &str) -> Self {
        Self {
            name: name.pascal().to_string(),
            var_name: name.var_name(),
            package: package.to_string(),
        }
    }
}

impl FieldMap for ServiceContext {
    fn fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Name", self.name.clone()),
            ("VarName", self.var_name.clone()),
            ("Package", self.package.clone()),
        ])
    }
}

/// Fields for `router` templates. Note the slug key is `Resource`, not `ResourceName`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterContext {
    pub name: String,
    pub plural_name: String,
    pub resource: String,
    pub var_name: String,
    pub package: String,
}

impl RouterContext {
    pub fn new(name: &ResourceName, package: &str) -> Self {
        Self {
            name: name.pascal().to_string(),
            plural_name: name.plural(),
            resource: name.slug(),
            var_name: name.var_name(),
            package: package.to_string(),
        }
    }
}

impl FieldMap for RouterContext {
    fn fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Name", self.name.clone()),
            ("PluralName", self.plural_name.clone()),
            ("Resource", self.resource.clone()),
            ("VarName", self.var_name.clone()),
            ("Package", self.package.clone()),
        ])
    }
}

/// Fields for every file in the project template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: String,
    pub module: String,
    pub version: String,
}

impl FieldMap for ProjectContext {
    fn fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Name", self.name.clone()),
            ("Module", self.module.clone()),
            ("Version", self.version.clone()),
        ])
    }
}

impl<T: FieldMap + ?Sized> FieldMap for Box<T> {
    fn fields(&self) -> BTreeMap<&'static str, String> {
        (**self).fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(map: &dyn FieldMap) -> Vec<&'static str> {
        map.fields().into_keys().collect()
    }

    #[test]
    fn test_model_fields() {
        let name = ResourceName::new("user").unwrap();
        let ctx = ModelContext::new(&name, "myapp");
        let fields = ctx.fields();
        assert_eq!(fields["Name"], "User");
        assert_eq!(fields["TableName"], "users");
        assert_eq!(fields["VarName"], "user");
        assert_eq!(fields["Package"], "myapp");
    }

    #[test]
    fn test_resource_fields_use_slug_and_plural() {
        let name = ResourceName::new("city").unwrap();
        let fields = ResourceContext::new(&name, "app").fields();
        assert_eq!(fields["PluralName"], "Cities");
        assert_eq!(fields["ResourceName"], "citys");
    }

    #[test]
    fn test_key_sets_per_kind() {
        let name = ResourceName::new("Order").unwrap();
        assert_eq!(
            keys(&ServiceContext::new(&name, "app")),
            vec!["Name", "Package", "VarName"]
        );
        assert_eq!(
            keys(&RouterContext::new(&name, "app")),
            vec!["Name", "Package", "PluralName", "Resource", "VarName"]
        );
    }
}

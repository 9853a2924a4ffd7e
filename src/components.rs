//! UI kit component registry
//!
//! Components are registered by name once, while the application is being
//! assembled. The finished registry is immutable and owned by the `WebApp`.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// NHS design system components used by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    ActionLink,
    BackLink,
    Button,
    Card,
    CardGroup,
    CardGroupItem,
    Checkboxes,
    CheckboxItem,
    Details,
    ErrorMessage,
    ErrorSummary,
    Expander,
    Fieldset,
    FormGroup,
    GridRow,
    GridItem,
    Header,
    Heading,
    Hint,
    InsetText,
    Label,
    Main,
    Select,
    SummaryList,
    SummaryListRow,
    Table,
    Tag,
    TextInput,
    WarningCallout,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 29] = [
        ComponentKind::ActionLink,
        ComponentKind::BackLink,
        ComponentKind::Button,
        ComponentKind::Card,
        ComponentKind::CardGroup,
        ComponentKind::CardGroupItem,
        ComponentKind::Checkboxes,
        ComponentKind::CheckboxItem,
        ComponentKind::Details,
        ComponentKind::ErrorMessage,
        ComponentKind::ErrorSummary,
        ComponentKind::Expander,
        ComponentKind::Fieldset,
        ComponentKind::FormGroup,
        ComponentKind::GridRow,
        ComponentKind::GridItem,
        ComponentKind::Header,
        ComponentKind::Heading,
        ComponentKind::Hint,
        ComponentKind::InsetText,
        ComponentKind::Label,
        ComponentKind::Main,
        ComponentKind::Select,
        ComponentKind::SummaryList,
        ComponentKind::SummaryListRow,
        ComponentKind::Table,
        ComponentKind::Tag,
        ComponentKind::TextInput,
        ComponentKind::WarningCallout,
    ];

    /// Registered tag name, e.g. `nhs-summary-list-row`
    pub fn tag_name(&self) -> String {
        let mut tag = String::from("nhs");
        for c in format!("{:?}", self).chars() {
            if c.is_ascii_uppercase() {
                tag.push('-');
            }
            tag.push(c.to_ascii_lowercase());
        }
        tag
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub name: String,
    pub kind: ComponentKind,
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            name: kind.tag_name(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, Component>,
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    components: BTreeMap<String, Component>,
    duplicate: Option<String>,
}

impl RegistryBuilder {
    /// Register a component. A repeated name is reported by `build`.
    pub fn register(mut self, component: Component) -> Self {
        if self.components.contains_key(&component.name) {
            self.duplicate.get_or_insert_with(|| component.name.clone());
        } else {
            self.components.insert(component.name.clone(), component);
        }
        self
    }

    pub fn build(self) -> Result<ComponentRegistry> {
        if let Some(name) = self.duplicate {
            return Err(Error::DuplicateComponent(name));
        }
        tracing::debug!("Registered {} components", self.components.len());
        Ok(ComponentRegistry {
            components: self.components,
        })
    }
}

impl ComponentRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The full NHS kit registration
    pub fn nhs_kit() -> Result<Self> {
        ComponentKind::ALL
            .iter()
            .fold(Self::builder(), |builder, kind| {
                builder.register(Component::new(*kind))
            })
            .build()
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components ordered by name
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(ComponentKind::Button.tag_name(), "nhs-button");
        assert_eq!(ComponentKind::SummaryListRow.tag_name(), "nhs-summary-list-row");
        assert_eq!(ComponentKind::WarningCallout.tag_name(), "nhs-warning-callout");
    }

    #[test]
    fn test_nhs_kit() {
        let registry = ComponentRegistry::nhs_kit().unwrap();
        assert_eq!(registry.len(), 29);
        assert!(registry.contains("nhs-card-group-item"));
        assert_eq!(
            registry.get("nhs-inset-text").map(|c| c.kind),
            Some(ComponentKind::InsetText)
        );
        assert!(registry.get("nhs-carousel").is_none());

        let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = ComponentRegistry::builder()
            .register(Component::new(ComponentKind::Tag))
            .register(Component::new(ComponentKind::Table))
            .register(Component::new(ComponentKind::Tag))
            .build();
        match result {
            Err(Error::DuplicateComponent(name)) => assert_eq!(name, "nhs-tag"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ComponentRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
    }
}

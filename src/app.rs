//! Application assembly
//!
//! Everything the dashboard needs at startup (components, routes and the
//! dev-server settings) is collected into one immutable `WebApp`.

use crate::components::ComponentRegistry;
use crate::config::DevServerConfig;
use crate::error::Result;
use crate::routes::{self, Route, RouteMatch};
use crate::text::{EmptyTokens, TitleCase};

#[derive(Debug, Clone)]
pub struct WebApp {
    pub components: ComponentRegistry,
    pub config: DevServerConfig,
    labels: TitleCase,
}

impl WebApp {
    /// Assemble the app with the NHS kit registered
    pub fn assemble(config: DevServerConfig) -> Result<Self> {
        config.validate()?;
        let components = ComponentRegistry::nhs_kit()?;
        tracing::info!(
            "Assembled app: {} components, {} routes, {} proxy rules",
            components.len(),
            routes::ROUTES.len(),
            config.proxy.len()
        );
        Ok(Self {
            components,
            config,
            labels: TitleCase::default(),
        })
    }

    pub fn with_label_policy(mut self, policy: EmptyTokens) -> Self {
        self.labels = TitleCase::with_policy(policy);
        self
    }

    pub fn routes(&self) -> &'static [Route] {
        routes::ROUTES
    }

    pub fn navigate(&self, location: &str) -> Option<RouteMatch> {
        routes::resolve(location)
    }

    /// Render a backend field name or enum value as a display label
    pub fn label(&self, raw: &str) -> String {
        self.labels.apply(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProxyRule;
    use crate::error::Error;
    use crate::routes::View;

    #[test]
    fn test_assemble_default() {
        let app = WebApp::assemble(DevServerConfig::default()).unwrap();
        assert_eq!(app.components.len(), 29);
        assert_eq!(app.routes().len(), 3);
        assert_eq!(app.navigate("#/records").unwrap().route.view, View::Records);
        assert_eq!(app.label("DISCHARGE_DATE"), "Discharge Date");
    }

    #[test]
    fn test_label_policy() {
        let app = WebApp::assemble(DevServerConfig::default())
            .unwrap()
            .with_label_policy(EmptyTokens::Collapse);
        assert_eq!(app.label("__risk__score"), "Risk Score");
    }

    #[test]
    fn test_assemble_rejects_invalid_config() {
        let config = DevServerConfig {
            proxy: vec![ProxyRule {
                prefix: "/api".to_string(),
                target: "ftp://backend".to_string(),
                secure: false,
            }],
            ..DevServerConfig::default()
        };
        assert!(matches!(
            WebApp::assemble(config),
            Err(Error::InvalidConfig(_))
        ));
    }
}

//! Hash-router route table
//!
//! Three views are reachable: the patient listing at `/`, the records view at
//! `/records` and the per-patient forecast at `/forecast/:patientId`. The table
//! is static; matching strips the `#` used by hash history, any query string
//! and a trailing slash before comparing segments.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Records,
    Forecast,
}

#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub view: View,
    /// Route params are passed to the view as props
    pub props: bool,
}

pub const ROUTES: &[Route] = &[
    Route {
        name: "home",
        path: "/",
        view: View::Home,
        props: false,
    },
    Route {
        name: "records",
        path: "/records",
        view: View::Records,
        props: false,
    },
    Route {
        name: "forecast",
        path: "/forecast/:patientId",
        view: View::Forecast,
        props: true,
    },
];

/// A resolved location
#[derive(Debug, Clone, Serialize)]
pub struct RouteMatch {
    pub route: &'static Route,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl Route {
    /// Names of the `:param` segments in this route's path
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> {
        segments(self.path).filter_map(|s| s.strip_prefix(':'))
    }

    fn matches(&'static self, path: &str) -> Option<RouteMatch> {
        let mut params = BTreeMap::new();
        let mut pattern = segments(self.path);
        let mut actual = segments(path);

        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => break,
                (Some(p), Some(a)) => {
                    if let Some(name) = p.strip_prefix(':') {
                        params.insert(name.to_string(), a.to_string());
                    } else if p != a {
                        return None;
                    }
                }
                _ => return None,
            }
        }

        Some(RouteMatch {
            route: self,
            params,
        })
    }

    /// Build the hash link for this route, filling `:param` segments from `params`.
    pub fn href(&self, params: &BTreeMap<String, String>) -> Result<String> {
        let mut link = String::from("#");
        for segment in segments(self.path) {
            link.push('/');
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value = params.get(name).ok_or_else(|| Error::MissingRouteParam {
                        route: self.name.to_string(),
                        param: name.to_string(),
                    })?;
                    if value.is_empty() || value.contains(['/', '?', '#']) {
                        return Err(Error::InvalidArgument(format!(
                            "'{}' is not a valid value for '{}'",
                            value, name
                        )));
                    }
                    link.push_str(value);
                }
                None => link.push_str(segment),
            }
        }
        if link == "#" {
            link.push('/');
        }
        Ok(link)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn normalize(location: &str) -> &str {
    let location = location.strip_prefix('#').unwrap_or(location);
    match location.find('?') {
        Some(idx) => &location[..idx],
        None => location,
    }
}

/// Resolve a location (`/records`, `#/forecast/42?tab=risk`) to its route.
pub fn resolve(location: &str) -> Option<RouteMatch> {
    let path = normalize(location);
    let found = ROUTES.iter().find_map(|route| route.matches(path));
    if found.is_none() {
        tracing::debug!("No route for location: {}", location);
    }
    found
}

pub fn route_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(resolve("/").unwrap().route.view, View::Home);
        assert_eq!(resolve("").unwrap().route.view, View::Home);
        assert_eq!(resolve("#/").unwrap().route.view, View::Home);
        assert_eq!(resolve("/records").unwrap().route.view, View::Records);
        assert_eq!(resolve("#/records/").unwrap().route.view, View::Records);
        assert_eq!(resolve("/records?page=2").unwrap().route.name, "records");
    }

    #[test]
    fn test_forecast_param() {
        let m = resolve("#/forecast/P-00042?tab=risk").unwrap();
        assert_eq!(m.route.view, View::Forecast);
        assert!(m.route.props);
        assert_eq!(m.param("patientId"), Some("P-00042"));
        assert_eq!(m.params.len(), 1);
    }

    #[test]
    fn test_unmatched() {
        assert!(resolve("/forecast").is_none());
        assert!(resolve("/forecast/1/extra").is_none());
        assert!(resolve("/unknown").is_none());
        assert!(resolve("#/record").is_none());
    }

    #[test]
    fn test_href_round_trip() {
        let forecast = route_by_name("forecast").unwrap();
        assert_eq!(forecast.param_names().collect::<Vec<_>>(), vec!["patientId"]);

        let mut params = BTreeMap::new();
        params.insert("patientId".to_string(), "1234".to_string());
        let link = forecast.href(&params).unwrap();
        assert_eq!(link, "#/forecast/1234");
        assert_eq!(resolve(&link).unwrap().param("patientId"), Some("1234"));

        let home = route_by_name("home").unwrap();
        assert_eq!(home.href(&BTreeMap::new()).unwrap(), "#/");
        assert_eq!(
            route_by_name("records").unwrap().href(&BTreeMap::new()).unwrap(),
            "#/records"
        );
    }

    #[test]
    fn test_href_errors() {
        let forecast = route_by_name("forecast").unwrap();
        assert!(matches!(
            forecast.href(&BTreeMap::new()),
            Err(Error::MissingRouteParam { .. })
        ));

        let mut params = BTreeMap::new();
        params.insert("patientId".to_string(), "a/b".to_string());
        assert!(matches!(forecast.href(&params), Err(Error::InvalidArgument(_))));
        assert!(route_by_name("settings").is_none());
    }
}

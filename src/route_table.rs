use std::{collections::HashSet, fs, path::Path, slice};

use crate::{
    models::RouteDescriptor,
    policy::{LOGIN_ROUTE, REDIRECT_TARGETS, SIGNED_IN_LANDING_ROUTE},
};

/// First path segments owned by the API and documentation routers. Page routes under
/// them would never pass through the navigation guard.
pub const RESERVED_SEGMENTS: [&str; 4] = ["health", "api", "api-docs", "swagger-ui"];

/// RouteTableError
///
/// Configuration errors detected while a route table is loaded. Any of these aborts
/// startup; none of them can surface during a navigation.
#[derive(Debug, thiserror::Error)]
pub enum RouteTableError {
    #[error("route `{name}` sets both requiresAuth and isLogged")]
    ConflictingAccessFlags { name: String },
    #[error("route name `{name}` is declared more than once")]
    DuplicateName { name: String },
    #[error("route path `{path}` is declared by both `{first}` and `{second}`")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },
    #[error("route at position {index} has an empty name")]
    EmptyName { index: usize },
    #[error("route `{name}` has invalid path `{path}`: {reason}")]
    InvalidPath {
        name: String,
        path: String,
        reason: &'static str,
    },
    #[error("redirect target route `{name}` is not declared")]
    MissingRedirectTarget { name: &'static str },
    #[error("redirect target route `{name}` redirects to itself")]
    RedirectLoop { name: &'static str },
    #[error("failed to read route table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse route table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// RouteTable
///
/// The validated, ordered set of navigable destinations. Construction is the only place
/// descriptors are checked, so holding a `RouteTable` means every invariant holds.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteTableError> {
        let mut names = HashSet::new();
        let mut paths: Vec<(String, &str)> = Vec::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            if route.name.trim().is_empty() {
                return Err(RouteTableError::EmptyName { index });
            }
            if route.requires_auth && route.is_logged {
                return Err(RouteTableError::ConflictingAccessFlags {
                    name: route.name.clone(),
                });
            }
            validate_pattern(route)?;

            if !names.insert(route.name.as_str()) {
                return Err(RouteTableError::DuplicateName {
                    name: route.name.clone(),
                });
            }

            let canonical = canonical_pattern(&route.path);
            if let Some((_, first)) = paths.iter().find(|(path, _)| *path == canonical) {
                return Err(RouteTableError::DuplicatePath {
                    path: normalize(&route.path).to_string(),
                    first: (*first).to_string(),
                    second: route.name.clone(),
                });
            }
            paths.push((canonical, route.name.as_str()));
        }

        if let Some(missing) = REDIRECT_TARGETS
            .into_iter()
            .find(|target| !names.contains(target))
        {
            return Err(RouteTableError::MissingRedirectTarget { name: missing });
        }
        for target in REDIRECT_TARGETS {
            if let Some(route) = routes.iter().find(|route| route.name == target) {
                // `login` is where anonymous visitors land and `about` is where signed-in
                // ones land, so neither may reject the visitor it receives.
                let loops = (target == LOGIN_ROUTE && route.requires_auth)
                    || (target == SIGNED_IN_LANDING_ROUTE && route.is_logged);
                if loops {
                    return Err(RouteTableError::RedirectLoop { name: target });
                }
                if segments(&route.path).any(|segment| segment.starts_with(':')) {
                    return Err(RouteTableError::InvalidPath {
                        name: route.name.clone(),
                        path: route.path.clone(),
                        reason: "redirect targets cannot take parameters",
                    });
                }
            }
        }

        Ok(Self { routes })
    }

    /// Parses a JSON array of descriptors and validates it.
    pub fn from_json(json: &str) -> Result<Self, RouteTableError> {
        let routes: Vec<RouteDescriptor> = serde_json::from_str(json)?;
        Self::new(routes)
    }

    /// Reads and validates a JSON route table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RouteTableError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RouteTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Finds the first route, in table order, whose pattern matches a concrete path.
    /// A query string or fragment on `path` is ignored.
    pub fn resolve(&self, path: &str) -> Option<&RouteDescriptor> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.routes
            .iter()
            .find(|route| pattern_matches(&route.path, path))
    }

    pub fn iter(&self) -> slice::Iter<'_, RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    /// The SPA's built-in routes: two public pages and the two anonymous-only auth pages.
    fn default() -> Self {
        Self {
            routes: vec![
                RouteDescriptor::new("home", "/"),
                RouteDescriptor::new("about", "/about"),
                RouteDescriptor::new("login", "/login")
                    .anonymous_only()
                    .without_navbar(),
                RouteDescriptor::new("register", "/register")
                    .anonymous_only()
                    .without_navbar(),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDescriptor;
    type IntoIter = slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_pattern(route: &RouteDescriptor) -> Result<(), RouteTableError> {
    let invalid = |reason| RouteTableError::InvalidPath {
        name: route.name.clone(),
        path: route.path.clone(),
        reason,
    };

    if !route.path.starts_with('/') {
        return Err(invalid("must start with `/`"));
    }
    if route.path.contains(['?', '#']) {
        return Err(invalid("must not contain a query or fragment"));
    }
    // Only a single trailing slash is forgiven; `//` must not collapse into the root.
    let body = route.path.strip_suffix('/').unwrap_or(route.path.as_str());
    let declared = body.strip_prefix('/').unwrap_or(body);
    if route.path != "/" && declared.split('/').any(str::is_empty) {
        return Err(invalid("contains an empty segment"));
    }
    if segments(body).any(|segment| segment == ":") {
        return Err(invalid("contains an unnamed parameter"));
    }
    if segments(body)
        .next()
        .is_some_and(|first| RESERVED_SEGMENTS.contains(&first))
    {
        return Err(invalid("is reserved for the API and documentation routes"));
    }
    Ok(())
}

/// Strips a single trailing slash, leaving the root path alone.
fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(stripped) => stripped,
    }
}

/// Normalized pattern with every parameter name erased, so `/listings/:id` and
/// `/listings/:slug` compare equal.
fn canonical_pattern(path: &str) -> String {
    let normalized = normalize(path);
    if normalized == "/" {
        return normalized.to_string();
    }
    segments(normalized)
        .map(|segment| if segment.starts_with(':') { ":" } else { segment })
        .fold(String::new(), |mut acc, segment| {
            acc.push('/');
            acc.push_str(segment);
            acc
        })
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_start_matches('/').split('/')
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern = normalize(pattern);
    let path = normalize(path);
    if pattern == "/" || path == "/" {
        return pattern == path;
    }

    let mut expected = segments(pattern);
    let mut actual = segments(path);
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(want), Some(got)) => {
                let matched = if want.starts_with(':') {
                    !got.is_empty()
                } else {
                    want == got
                };
                if !matched {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

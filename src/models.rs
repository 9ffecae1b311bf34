use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

// --- Listing Domain Schema ---

/// Property
///
/// A single property listing as the SPA consumes it. This is a passive schema:
/// the field names are kept identical to the wire shape the frontend already uses,
/// which is why the serde renames below break Rust casing conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct Property {
    #[serde(rename = "PropertyId")]
    pub property_id: String,
    #[serde(rename = "PropertyInfo")]
    pub property_info: PropertyInfo,
}

/// PropertyInfo
///
/// Descriptive attributes of a listing. `area` and `price` are fractional; room
/// counts are whole numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct PropertyInfo {
    pub vendorname: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Type")]
    pub property_type: String,
    #[serde(rename = "Area")]
    pub area: f64,
    #[serde(rename = "Bedrooms")]
    pub bedrooms: u32,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: u32,
    #[serde(rename = "Garages")]
    pub garages: u32,
    #[serde(rename = "Neighborhood")]
    pub neighborhood: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

// --- Navigation Schemas ---

/// RouteDescriptor
///
/// Static record describing one navigable destination and its access requirements.
/// Descriptors are only trusted once they have passed through `RouteTable::new`,
/// which rejects a descriptor setting both `requires_auth` and `is_logged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// Unique identifier, also the redirect target vocabulary (`login`, `about`, ...).
    pub name: String,
    /// Path pattern. Segments starting with `:` match any single segment.
    #[schema(example = "/listings/:id")]
    pub path: String,
    /// Navigation is forbidden without a session token.
    #[serde(default)]
    pub requires_auth: bool,
    /// Navigation is forbidden *with* a session token (anonymous-only routes).
    #[serde(default)]
    pub is_logged: bool,
    /// Presentation hint for the SPA. Ignored by the access policy.
    #[serde(default)]
    pub hide_navbar: bool,
}

impl RouteDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn authenticated_only(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn anonymous_only(mut self) -> Self {
        self.is_logged = true;
        self
    }

    pub fn without_navbar(mut self) -> Self {
        self.hide_navbar = true;
        self
    }
}

/// OutcomeKind
///
/// Wire discriminant of a navigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Proceed,
    Redirect,
}

/// NavigationResponse
///
/// Output of `GET /api/navigation`. The redirect fields are present only when
/// `outcome` is `redirect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    /// Name of the route the request resolved to.
    pub target: String,
    pub outcome: OutcomeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub redirect_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub redirect_path: Option<String>,
}

/// PageView
///
/// What a guarded page path answers with once navigation has been allowed.
/// Rendering itself is left to the SPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub name: String,
    pub path: String,
    pub hide_navbar: bool,
}

impl From<&RouteDescriptor> for PageView {
    fn from(route: &RouteDescriptor) -> Self {
        Self {
            name: route.name.clone(),
            path: route.path.clone(),
            hide_navbar: route.hide_navbar,
        }
    }
}

// --- Error Schema ---

/// ErrorBody
///
/// JSON shape of every handler rejection: a human-readable message, a stable
/// machine-readable code, and free-form context about the failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ErrorBody {
    pub message: String,
    #[schema(example = "ROUTE_NOT_FOUND")]
    pub code: String,
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

/// Router Module Index
///
/// Splits the HTTP surface by how access is enforced. API routes are open and decide
/// per request; page routes sit behind the navigation guard layer.

/// Routes accessible to everyone: health, route table and navigation queries.
pub mod public;

/// Page paths declared in the route table, protected by `navigation_guard`.
pub mod pages;

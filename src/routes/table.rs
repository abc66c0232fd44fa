//! The route table and its resolver.
//!
//! Paths are split into segments and tried against [`ROUTES`] in order. The first match wins.

use crate::model::ProductId;
use tracing::debug;

/// Page responsibilities a route can map to. Rendering them is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ProductList,
    ProductCreate,
    ProductDetail,
    ProductEdit,
    NotFound,
}

impl Page {
    /// Route name, for pages that have one.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Page::ProductList => Some("products-list"),
            Page::ProductCreate => Some("products-create"),
            Page::ProductDetail => Some("products-detail"),
            Page::ProductEdit => Some("products-edit"),
            Page::NotFound => None,
        }
    }

    /// Whether the page renders inside the main layout. Only the `/products` children do.
    pub fn uses_main_layout(self) -> bool {
        !matches!(self, Page::NotFound)
    }

    /// Whether the page needs an `:id` parameter.
    pub fn takes_id(self) -> bool {
        matches!(self, Page::ProductDetail | Page::ProductEdit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Redirect(&'static str),
    Page(Page),
}

/// One row of the route table. `:id` in a pattern captures one path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub target: RouteTarget,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        pattern: "/",
        target: RouteTarget::Redirect("/products"),
    },
    RouteDef {
        pattern: "/products/create",
        target: RouteTarget::Page(Page::ProductCreate),
    },
    RouteDef {
        pattern: "/products/:id/edit",
        target: RouteTarget::Page(Page::ProductEdit),
    },
    RouteDef {
        pattern: "/products/:id",
        target: RouteTarget::Page(Page::ProductDetail),
    },
    RouteDef {
        pattern: "/products",
        target: RouteTarget::Page(Page::ProductList),
    },
];

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Normalized final path (after any redirect).
    pub path: String,
    pub page: Page,
    /// Set for detail and edit pages.
    pub id: Option<ProductId>,
    /// Normalized original path when a redirect was followed.
    pub redirected_from: Option<String>,
}

/// Resolves `path` against [`ROUTES`]. Never fails: unmatched paths resolve to [`Page::NotFound`].
pub fn resolve(path: &str) -> ResolvedRoute {
    let segments = segments(path);
    let resolved = resolve_segments(&segments, true);
    debug!(path, page = ?resolved.page, id = ?resolved.id, "Resolved route");
    resolved
}

fn segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn join(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

fn resolve_segments(segments: &[&str], follow_redirect: bool) -> ResolvedRoute {
    for def in ROUTES {
        let Some(captured) = match_pattern(def.pattern, segments) else {
            continue;
        };

        match def.target {
            RouteTarget::Redirect(target) if follow_redirect => {
                let mut resolved = resolve_segments(&self::segments(target), false);
                resolved.redirected_from = Some(join(segments));
                return resolved;
            }
            RouteTarget::Redirect(_) => break,
            RouteTarget::Page(page) => {
                let id = match captured {
                    Some(raw) => match raw.parse::<ProductId>() {
                        Ok(id) => Some(id),
                        Err(_) => break,
                    },
                    None => None,
                };
                return ResolvedRoute {
                    path: join(segments),
                    page,
                    id,
                    redirected_from: None,
                };
            }
        }
    }

    ResolvedRoute {
        path: join(segments),
        page: Page::NotFound,
        id: None,
        redirected_from: None,
    }
}

/// Matches one pattern. `Some(capture)` on success, where `capture` is the `:id` segment if any.
fn match_pattern<'a>(pattern: &str, segments: &[&'a str]) -> Option<Option<&'a str>> {
    let parts = self::segments(pattern);
    if parts.len() != segments.len() {
        return None;
    }

    let mut captured = None;
    for (part, segment) in parts.iter().zip(segments) {
        if part.starts_with(':') {
            captured = Some(*segment);
        } else if !part.eq_ignore_ascii_case(segment) {
            return None;
        }
    }
    Some(captured)
}

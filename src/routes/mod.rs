//! # Route Table
//!
//! A static mapping from URL paths to the pages that consume the product store.
//! There is no logic here beyond path matching, one redirect, and a catch-all.
//!
//! | Path                 | Name              | Page                |
//! |----------------------|-------------------|---------------------|
//! | `/`                  |                   | redirect `/products`|
//! | `/products`          | `products-list`   | [`Page::ProductList`]   |
//! | `/products/create`   | `products-create` | [`Page::ProductCreate`] |
//! | `/products/:id/edit` | `products-edit`   | [`Page::ProductEdit`]   |
//! | `/products/:id`      | `products-detail` | [`Page::ProductDetail`] |
//! | anything else        |                   | [`Page::NotFound`]      |
//!
//! Entries are tried in table order, so `create` wins over `:id`.

mod table;

pub use table::{resolve, Page, ResolvedRoute, RouteDef, RouteTarget, ROUTES};

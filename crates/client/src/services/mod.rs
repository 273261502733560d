//! Per-resource endpoint methods.
//!
//! Each module contributes one `impl ApiClient` block covering one backend
//! resource, one method per endpoint. The modules hold no state of their own;
//! everything goes through the shared transport in `http`.

mod addresses;
mod analytics;
mod cart;
mod categories;
mod inventory;
mod orders;
mod products;
mod reviews;
mod users;

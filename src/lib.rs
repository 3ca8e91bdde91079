//! Client facade for a remote gift-list (wish list / registry) backend.
//!
//! The backend's endpoints are uneven: some answer JSON, some answer raw
//! HTML fragments, and logical failures ride on HTTP 200 with localized
//! flags and phrases. This crate hides all of that behind one orchestrator,
//! [`client::GiftLists`], which normalizes every response into a uniform
//! [`outcome::Outcome`] and collapses multi-step operations ("create a
//! list, then add items") into single logical calls.
//!
//! Operations
//! ----------
//! - `get_prods` / `get_list` — one list's items, optionally with totals
//! - `get_lists` / `get_list_name` — the user's lists
//! - `add_item` / `add_items` / `add_items_new_list` — item submission,
//!   reusing or creating the target list in one round trip
//! - `new_list` — fast creation (backend derives the URL from the name)
//! - `create_full_list` / `edit_full_list` — complex creation / editing
//! - `delete_list`, `remove_item`, `update_prod_quantity`
//! - `send_to_cart`, `get_buyed_quantity`
//! - `share_list`, `save_address`, `link_addresses`
//! - `search`
//!
//! The HTTP transport and HTML querying are injected capabilities
//! ([`transport::HttpTransport`], [`document::DocumentQuery`]); production
//! implementations over `reqwest` and `scraper` are provided.

pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod items;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod transport;
pub mod urls;
pub mod utils;

pub use client::{
    AddItemOptions, AddressLinkReport, AddressRecipient, GiftLists, PreSubmitHook, ShareConfig,
    ShareFriend,
};
pub use config::{ConfigPatch, Endpoints, GiftListConfig};
pub use document::{DocumentQuery, DomNode, ScraperQuery};
pub use error::GiftListError;
pub use items::ItemSelection;
pub use model::{
    AddItemsReceipt, ImageMeta, ItemsSummary, ListDetail, ListItem, ListStats, ListSummary,
    QuantityUpdate, SearchHit,
};
pub use outcome::{FailureKind, Outcome};
pub use transport::{HttpTransport, RequestBody, ReqwestTransport, TransportError};

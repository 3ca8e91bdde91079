//! Operation orchestrator.
//!
//! One [`GiftLists`] instance owns an injected transport, an injected
//! document-query capability and its own configuration. Every public
//! operation issues the network call(s) it needs, runs raw responses through
//! the normalizer / extractors, and produces exactly one
//! [`Outcome`](crate::outcome::Outcome):
//!
//! - classified backend failures come back as `Ok(Outcome::Failure { .. })`,
//!   never as `Err` and never as a panic out of async code;
//! - transport failures are folded into `Outcome::Failure` with
//!   [`FailureKind::Transport`] on every path except the complex create/edit
//!   submit, which surfaces them as [`GiftListError::Transport`];
//! - missing required configuration is reported as
//!   [`GiftListError::MissingConfig`] before any request is issued.
//!
//! No operation retries, caches, or supports cancellation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures::future::join_all;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::{ConfigPatch, Endpoints, GiftListConfig};
use crate::document::DocumentQuery;
use crate::error::{GiftListError, Result};
use crate::extract;
use crate::items::ItemSelection;
use crate::model::{
    json_string, json_u32, AddItemsReceipt, ListDetail, ListItem, ListStats, ListSummary,
    QuantityUpdate, SearchHit,
};
use crate::outcome::{classify, classify_text, FailureKind, Outcome};
use crate::transport::{HttpTransport, RequestBody, TransportError};
use crate::urls;
use crate::utils;

const LOG: &str = "giftlists";

/// Image-size / page-size constants the backend expects on item fetches.
/// The backend ignores the page size, it is sent for compatibility.
const PRODS_IMG_SIZE: u32 = 3;
const PRODS_PAGE_SIZE: u32 = 100;
const STATS_IMG_SIZE: u32 = 1;

/// Confirmation phrases the delete endpoint buries in its HTML answer.
/// "Already deleted" counts as deleted.
const DELETE_CONFIRMATIONS: [&str; 2] = ["foi excluida", "lista já excluida"];

/// Confirmation phrase of the share-mail endpoint.
const SHARE_CONFIRMATION: &str = "Indicação enviada com sucesso";

/// Options for adding a single item. An explicit record, so call sites name
/// what they override instead of relying on argument position.
#[derive(Debug, Clone)]
pub struct AddItemOptions {
    /// Quantity to add, 1 by default.
    pub quantity: u32,
    /// Whether to add to the existing quantity (backend default) or replace
    /// it. `None` leaves the decision to the backend default.
    pub add_to_quantity: Option<bool>,
}

impl Default for AddItemOptions {
    fn default() -> Self {
        Self {
            quantity: 1,
            add_to_quantity: None,
        }
    }
}

/// One share recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFriend {
    pub name: String,
    pub email: String,
}

/// Input for [`GiftLists::share_list`].
#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub list_id: String,
    pub from_name: String,
    pub from_email: String,
    /// Custom message, empty by default.
    pub message: String,
    pub friends: Vec<ShareFriend>,
}

/// One recipient of the address fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecipient {
    pub email: String,
    /// Address record the recipient gets linked to.
    pub address_name: String,
}

/// Aggregate result of [`GiftLists::link_addresses`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressLinkReport {
    pub saved: u32,
    /// Recipients skipped without a request (invalid e-mail).
    pub skipped: u32,
    pub failed: u32,
}

/// Hook run before the complex create/edit submit. Reserved for address
/// linking; the default is no hook, which completes immediately.
#[async_trait]
pub trait PreSubmitHook: Send + Sync {
    async fn run(&self) -> anyhow::Result<()>;
}

enum ListTarget {
    Existing { id: String },
    New { name: String, type_id: String },
}

/// The gift-list client facade.
pub struct GiftLists {
    transport: Arc<dyn HttpTransport>,
    documents: Arc<dyn DocumentQuery>,
    config: RwLock<GiftListConfig>,
    endpoints: Endpoints,
    pre_submit: Option<Arc<dyn PreSubmitHook>>,
}

impl GiftLists {
    pub fn new(transport: Arc<dyn HttpTransport>, documents: Arc<dyn DocumentQuery>) -> Self {
        Self::with_config(transport, documents, GiftListConfig::default())
    }

    pub fn with_config(
        transport: Arc<dyn HttpTransport>,
        documents: Arc<dyn DocumentQuery>,
        config: GiftListConfig,
    ) -> Self {
        Self {
            transport,
            documents,
            config: RwLock::new(config),
            endpoints: Endpoints::default(),
            pre_submit: None,
        }
    }

    /// Installs the pre-submit hook run ahead of complex create/edit.
    pub fn set_pre_submit_hook(&mut self, hook: Arc<dyn PreSubmitHook>) {
        self.pre_submit = Some(hook);
    }

    // ---- configuration access -------------------------------------------

    fn cfg(&self) -> GiftListConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn get_config(&self) -> GiftListConfig {
        self.cfg()
    }

    /// Overlays the given fields onto the current configuration. Takes
    /// effect for every subsequently issued request.
    pub fn set_config(&self, patch: ConfigPatch) {
        self.config
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .merge(patch);
    }

    pub fn get_list_types(&self) -> Option<Vec<String>> {
        self.cfg().list_type_ids
    }

    pub fn set_list_types(&self, list_types: Vec<String>) {
        self.set_config(ConfigPatch {
            list_type_ids: Some(list_types),
            ..Default::default()
        });
    }

    pub fn get_default_list_type(&self) -> Option<String> {
        self.cfg().def_list_type_id
    }

    pub fn set_default_list_type(&self, list_type: impl Into<String>) {
        self.set_config(ConfigPatch {
            def_list_type_id: Some(list_type.into()),
            ..Default::default()
        });
    }

    pub fn get_store_name(&self) -> Option<String> {
        self.cfg().store_name
    }

    pub fn set_store_name(&self, name: impl Into<String>) {
        self.set_config(ConfigPatch {
            store_name: Some(name.into()),
            ..Default::default()
        });
    }

    // ---- shared plumbing ------------------------------------------------

    fn transport_failure<T>(op: &str, err: TransportError) -> Outcome<T> {
        warn!(target: LOG, operation = op, error = %err, "transport failure");
        let raw = match err {
            TransportError::Status { body, .. } => body,
            TransportError::Network(message) => message,
        };
        Outcome::failure(FailureKind::Transport, Some(raw))
    }

    fn classified<T>(kind: FailureKind, raw: &str) -> Outcome<T> {
        debug!(target: LOG, ?kind, "backend reported failure");
        Outcome::failure(kind, Some(raw.to_string()))
    }

    /// Backend ids arrive as numbers or strings; requests echo them back in
    /// their numeric form when possible.
    fn id_value(id: &str) -> Value {
        match id.parse::<i64>() {
            Ok(n) => json!(n),
            Err(_) => json!(id),
        }
    }

    // ---- list fetches ---------------------------------------------------

    /// All of the user's lists for the given list-type ids, falling back to
    /// the configured `list_type_ids`.
    ///
    /// A "not logged in" answer (which this endpoint delivers as bare HTML)
    /// is a classified failure, not an error and not an empty vec.
    pub async fn get_lists(
        &self,
        type_ids: Option<Vec<String>>,
    ) -> Result<Outcome<Vec<ListSummary>>> {
        let config = self.cfg();
        let type_ids = match type_ids {
            Some(ids) => ids,
            None => config
                .list_type_ids
                .clone()
                .ok_or(GiftListError::MissingConfig("listTypeIDs"))?,
        };
        let url = urls::resolve(
            self.endpoints.get_lists,
            &[("typeIDs", type_ids.join(","))],
        );
        debug!(target: LOG, %url, "fetching lists");

        let body = match self.transport.get(&url).await {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("get_lists", err)),
        };
        if let Some(kind) = classify_text(&body, self.documents.as_ref()) {
            return Ok(Self::classified(kind, &body));
        }
        Ok(Outcome::Success(extract::user_lists(
            &body,
            self.documents.as_ref(),
            &config,
        )))
    }

    /// All items of one list.
    pub async fn get_prods(&self, list_id: &str) -> Result<Outcome<Vec<ListItem>>> {
        let url = urls::resolve(
            self.endpoints.get_prods,
            &[
                ("listID", list_id.to_string()),
                ("imgSize", PRODS_IMG_SIZE.to_string()),
                ("pageSize", PRODS_PAGE_SIZE.to_string()),
            ],
        );
        debug!(target: LOG, %url, "fetching list items");

        let body = match self.transport.get(&url).await {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("get_prods", err)),
        };
        if let Some(kind) = classify_text(&body, self.documents.as_ref()) {
            return Ok(Self::classified(kind, &body));
        }
        let parsed: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(_) => return Ok(Self::classified(FailureKind::Unknown, &body)),
        };
        let items = parsed
            .get("Items")
            .and_then(Value::as_array)
            .map(|records| {
                records
                    .iter()
                    .map(|r| ListItem::from_record(r, self.documents.as_ref()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(Outcome::Success(items))
    }

    /// Like [`get_prods`](Self::get_prods), plus the items aggregate.
    pub async fn get_list(&self, list_id: &str) -> Result<Outcome<ListDetail>> {
        Ok(match self.get_prods(list_id).await? {
            Outcome::Success(items) => {
                let summary = utils::items_summary(&items);
                Outcome::Success(ListDetail { items, summary })
            }
            Outcome::Failure { kind, raw } => Outcome::Failure { kind, raw },
        })
    }

    /// Display name of one list, resolved through the get-lists fetch.
    pub async fn get_list_name(&self, list_id: &str) -> Result<Outcome<String>> {
        Ok(match self.get_lists(None).await? {
            Outcome::Success(lists) => match lists.into_iter().find(|l| l.id == list_id) {
                Some(list) => Outcome::Success(list.name),
                None => Outcome::Failure {
                    kind: FailureKind::ListUnknown,
                    raw: None,
                },
            },
            Outcome::Failure { kind, raw } => Outcome::Failure { kind, raw },
        })
    }

    // ---- create-or-reuse-then-submit family -----------------------------

    /// Common submit for "add items to existing list" and "add items to a
    /// brand-new list": one POST, outcome projected into a receipt.
    async fn add_handler(
        &self,
        items: ItemSelection,
        target: ListTarget,
        add_to_quantity: Option<bool>,
    ) -> Result<Outcome<AddItemsReceipt>> {
        let config = self.cfg();
        let mut data = json!({
            "CheckedItems": items.tokens(),
            "AddToQuantity": add_to_quantity.unwrap_or(true),
        });

        let (url, is_new_list, list_name) = match &target {
            ListTarget::Existing { id } => {
                data["GiftListId"] = Self::id_value(id);
                (self.endpoints.add_items, false, String::new())
            }
            ListTarget::New { name, type_id } => {
                data["GiftListName"] = json!(name);
                data["GiftListTypeId"] = Self::id_value(type_id);
                (self.endpoints.add_items_new_list, true, name.clone())
            }
        };
        debug!(target: LOG, %url, new_list = is_new_list, "submitting items");

        let body = match self.transport.post(url, RequestBody::Json(data)).await {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("add_items", err)),
        };
        let response: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(_) => return Ok(Self::classified(FailureKind::Unknown, &body)),
        };
        if let Some(kind) = classify(&response, self.documents.as_ref()) {
            return Ok(Self::classified(kind, &body));
        }

        let id = json_string(response.get("GiftListId"));
        Ok(Outcome::Success(AddItemsReceipt {
            list: ListSummary {
                url: urls::list_url(&config, &id),
                id,
                name: list_name,
            },
            is_new_list,
            existing_skus: json_u32(response.get("ExistingSkus")),
            inserted_skus: json_u32(response.get("InsertedSkus")),
        }))
    }

    /// Adds items to an existing list. `items` is either a sku sequence
    /// (one of each) or an ordered sku→quantity mapping.
    pub async fn add_items(
        &self,
        list_id: &str,
        items: impl Into<ItemSelection>,
        add_to_quantity: Option<bool>,
    ) -> Result<Outcome<AddItemsReceipt>> {
        self.add_handler(
            items.into(),
            ListTarget::Existing {
                id: list_id.to_string(),
            },
            add_to_quantity,
        )
        .await
    }

    /// Adds a single item to an existing list.
    pub async fn add_item(
        &self,
        list_id: &str,
        sku: &str,
        options: AddItemOptions,
    ) -> Result<Outcome<AddItemsReceipt>> {
        let mut items = indexmap::IndexMap::new();
        items.insert(sku.to_string(), options.quantity);
        self.add_items(list_id, items, options.add_to_quantity).await
    }

    /// Creates a list and seeds it with items in one round trip.
    pub async fn add_items_new_list(
        &self,
        items: impl Into<ItemSelection>,
        list_name: &str,
        type_id: Option<String>,
        add_to_quantity: Option<bool>,
    ) -> Result<Outcome<AddItemsReceipt>> {
        let type_id = self.require_type_id(type_id)?;
        self.add_handler(
            items.into(),
            ListTarget::New {
                name: list_name.to_string(),
                type_id,
            },
            add_to_quantity,
        )
        .await
    }

    fn require_type_id(&self, type_id: Option<String>) -> Result<String> {
        match type_id.or(self.cfg().def_list_type_id) {
            Some(id) => Ok(id),
            None => Err(GiftListError::MissingConfig("defListTypeID")),
        }
    }

    /// Fast list creation. The backend derives the list URL from the name,
    /// which therefore needs at least one alphanumeric character; that rule
    /// is the caller's to check (see [`utils::valid_name`]), this layer
    /// submits the name as given.
    pub async fn new_list(
        &self,
        name: &str,
        type_id: Option<String>,
    ) -> Result<Outcome<AddItemsReceipt>> {
        let config = self.cfg();
        let type_id = self.require_type_id(type_id)?;
        let form = vec![
            ("GiftListName".to_string(), name.to_string()),
            ("GiftListTypeId".to_string(), type_id),
        ];
        debug!(target: LOG, list_name = name, "creating list");

        let body = match self
            .transport
            .post(self.endpoints.add_items_new_list, RequestBody::Form(form))
            .await
        {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("new_list", err)),
        };
        let response: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(_) => return Ok(Self::classified(FailureKind::Unknown, &body)),
        };
        if let Some(kind) = classify(&response, self.documents.as_ref()) {
            return Ok(Self::classified(kind, &body));
        }
        let id = json_string(response.get("GiftListId"));
        Ok(Outcome::Success(AddItemsReceipt {
            list: ListSummary {
                url: urls::list_url(&config, &id),
                id,
                name: name.to_string(),
            },
            is_new_list: true,
            existing_skus: json_u32(response.get("ExistingSkus")),
            inserted_skus: json_u32(response.get("InsertedSkus")),
        }))
    }

    // ---- two-phase submit -----------------------------------------------

    /// Complex create/edit: pre-submit hook first, then the POST of the
    /// caller-serialized form.
    ///
    /// Success detection is ambiguous by backend design and kept as-is: a
    /// numeric body is "created, body is the new id"; an empty body while
    /// editing is "edited"; anything else is failure. Unlike every other
    /// operation, a transport failure here propagates as `Err` instead of a
    /// normalized outcome.
    async fn edit_create_full_list(
        &self,
        form: Vec<(String, String)>,
        editing: bool,
    ) -> Result<Outcome<Option<String>>> {
        if let Some(hook) = &self.pre_submit {
            if let Err(err) = hook.run().await {
                warn!(target: LOG, error = %err, "pre-submit hook failed");
                return Ok(Outcome::failure(FailureKind::Unknown, Some(err.to_string())));
            }
        }

        let body = self
            .transport
            .post(self.endpoints.create_edit_list, RequestBody::Form(form))
            .await?;
        let trimmed = body.trim();
        if !trimmed.is_empty() && trimmed.parse::<f64>().is_ok() {
            return Ok(Outcome::Success(Some(trimmed.to_string())));
        }
        if trimmed.is_empty() && editing {
            return Ok(Outcome::Success(None));
        }
        Ok(Self::classified(FailureKind::Unknown, &body))
    }

    /// Creates a list from structured form data. On success the payload is
    /// the new list id.
    pub async fn create_full_list(
        &self,
        form: Vec<(String, String)>,
    ) -> Result<Outcome<Option<String>>> {
        self.edit_create_full_list(form, false).await
    }

    /// Edits a list from structured form data. On success the payload is
    /// `None` (the backend answers with an empty body).
    pub async fn edit_full_list(
        &self,
        form: Vec<(String, String)>,
    ) -> Result<Outcome<Option<String>>> {
        self.edit_create_full_list(form, true).await
    }

    // ---- single-request operations --------------------------------------

    /// Deletes a list. "Already deleted" counts as success; no distinction
    /// is made between "not found" and "forbidden".
    pub async fn delete_list(&self, list_id: &str) -> Result<Outcome<()>> {
        let url = urls::resolve(
            self.endpoints.delete_list,
            &[("listID", list_id.to_string())],
        );
        debug!(target: LOG, %url, "deleting list");

        let body = match self.transport.post(&url, RequestBody::Empty).await {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("delete_list", err)),
        };
        if DELETE_CONFIRMATIONS.iter().any(|p| body.contains(p)) {
            Ok(Outcome::Success(()))
        } else {
            Ok(Self::classified(FailureKind::Unknown, &body))
        }
    }

    /// Sets a product's desired quantity.
    pub async fn update_prod_quantity(
        &self,
        list_id: &str,
        sku: &str,
        quantity: u32,
    ) -> Result<Outcome<QuantityUpdate>> {
        let url = urls::resolve(
            self.endpoints.change_prod_amount,
            &[
                ("listID", list_id.to_string()),
                ("prodSku", sku.to_string()),
                ("prodQuantity", quantity.to_string()),
            ],
        );
        debug!(target: LOG, %url, "updating quantity");

        let body = match self.transport.post(&url, RequestBody::Empty).await {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("update_prod_quantity", err)),
        };
        let response: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(_) => return Ok(Self::classified(FailureKind::Unknown, &body)),
        };
        if let Some(kind) = classify(&response, self.documents.as_ref()) {
            return Ok(Self::classified(kind, &body));
        }
        Ok(Outcome::Success(QuantityUpdate {
            amount: response.get("Amount").and_then(Value::as_i64).unwrap_or(0),
            operation: json_string(response.get("Operation")),
        }))
    }

    /// Removes a product: a quantity update to zero.
    pub async fn remove_item(&self, list_id: &str, sku: &str) -> Result<Outcome<QuantityUpdate>> {
        self.update_prod_quantity(list_id, sku, 0).await
    }

    /// Sends a full list to the cart. The payload is the raw backend body.
    pub async fn send_to_cart(&self, list_id: &str) -> Result<Outcome<String>> {
        let url = urls::resolve(
            self.endpoints.send_to_cart,
            &[("listID", list_id.to_string())],
        );
        debug!(target: LOG, %url, "sending list to cart");

        Ok(match self.transport.post(&url, RequestBody::Empty).await {
            Ok(body) => Outcome::Success(body),
            Err(err) => Self::transport_failure("send_to_cart", err),
        })
    }

    /// Total and purchased item counts, scraped from the statistics
    /// fragment.
    pub async fn get_buyed_quantity(&self, list_id: &str) -> Result<Outcome<ListStats>> {
        let url = urls::resolve(
            self.endpoints.get_stats,
            &[
                ("listID", list_id.to_string()),
                ("imgSize", STATS_IMG_SIZE.to_string()),
                ("orderURL", "false".to_string()),
            ],
        );
        debug!(target: LOG, %url, "fetching statistics");

        let body = match self.transport.get(&url).await {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("get_buyed_quantity", err)),
        };
        if let Some(kind) = classify_text(&body, self.documents.as_ref()) {
            return Ok(Self::classified(kind, &body));
        }
        Ok(Outcome::Success(extract::list_stats(
            &body,
            self.documents.as_ref(),
        )))
    }

    // ---- sharing --------------------------------------------------------

    /// Shares a list by e-mail through the backend's mail template.
    pub async fn share_list(&self, share: ShareConfig) -> Result<Outcome<()>> {
        let friends_xml = format!(
            "<FriendsReferred>{};</FriendsReferred>",
            share
                .friends
                .iter()
                .map(|f| format!(
                    "<Friend><Name>{}</Name><Email>{}</Email></Friend>",
                    f.name, f.email
                ))
                .collect::<String>()
        );
        let form = vec![
            ("YourName".to_string(), share.from_name),
            ("YourEmail".to_string(), share.from_email),
            ("Message".to_string(), share.message),
            (
                "FriendsReferred".to_string(),
                utils::encode_uri(&friends_xml),
            ),
        ];
        let url = urls::resolve(
            self.endpoints.share_by_email,
            &[("listID", share.list_id.clone())],
        );
        debug!(target: LOG, %url, "sharing list");

        let body = match self.transport.post(&url, RequestBody::Form(form)).await {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("share_list", err)),
        };
        if body.contains(SHARE_CONFIRMATION) {
            Ok(Outcome::Success(()))
        } else {
            Ok(Self::classified(FailureKind::Unknown, &body))
        }
    }

    /// Creates one address record linked to a recipient e-mail. Requires
    /// `storeName` to be configured.
    pub async fn save_address(&self, email: &str, address_name: &str) -> Result<Outcome<()>> {
        if self.cfg().store_name.is_none() {
            return Err(GiftListError::MissingConfig("storeName"));
        }
        let form = vec![
            ("userId".to_string(), email.to_string()),
            ("addressName".to_string(), address_name.to_string()),
        ];
        let body = match self
            .transport
            .post(self.endpoints.save_address, RequestBody::Form(form))
            .await
        {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("save_address", err)),
        };
        if let Ok(response) = serde_json::from_str::<Value>(&body) {
            if let Some(kind) = classify(&response, self.documents.as_ref()) {
                return Ok(Self::classified(kind, &body));
            }
        }
        Ok(Outcome::Success(()))
    }

    /// Links every valid recipient to its address record, concurrently.
    ///
    /// Fan-in contract: recipients with an invalid e-mail are skipped
    /// without a request; the operation completes exactly once, after every
    /// issued request has finished, in any completion order. Zero
    /// recipients complete immediately.
    pub async fn link_addresses(
        &self,
        recipients: &[AddressRecipient],
    ) -> Result<Outcome<AddressLinkReport>> {
        if self.cfg().store_name.is_none() {
            return Err(GiftListError::MissingConfig("storeName"));
        }

        let mut report = AddressLinkReport::default();
        let mut pending = Vec::new();
        for recipient in recipients {
            if utils::is_email(&recipient.email) {
                pending.push(self.save_address(&recipient.email, &recipient.address_name));
            } else {
                report.skipped += 1;
            }
        }
        debug!(
            target: LOG,
            requests = pending.len(),
            skipped = report.skipped,
            "linking addresses"
        );

        for result in join_all(pending).await {
            match result {
                Ok(outcome) if outcome.is_success() => report.saved += 1,
                _ => report.failed += 1,
            }
        }
        Ok(Outcome::Success(report))
    }

    // ---- search ---------------------------------------------------------

    /// Gift-list search. `query` must be a JSON object; every key is
    /// namespaced with `giftlistsearch` before posting. A non-object query
    /// completes on the failure branch without touching the network.
    pub async fn search(&self, query: &Value) -> Result<Outcome<Vec<SearchHit>>> {
        let Some(map) = query.as_object() else {
            return Ok(Outcome::failure(
                FailureKind::Unknown,
                Some("No se pasaron parametros.".to_string()),
            ));
        };
        let form: Vec<(String, String)> = map
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (format!("giftlistsearch{key}"), value)
            })
            .collect();
        debug!(target: LOG, params = form.len(), "searching lists");

        let body = match self
            .transport
            .post(self.endpoints.search, RequestBody::Form(form))
            .await
        {
            Ok(body) => body,
            Err(err) => return Ok(Self::transport_failure("search", err)),
        };
        Ok(Outcome::Success(extract::search_hits(
            &body,
            self.documents.as_ref(),
        )))
    }
}

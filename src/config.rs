//! Client configuration: list-type identifiers, store name and URL path
//! prefixes, plus the backend endpoint table.
//!
//! The configuration is an explicitly constructed value owned by a single
//! [`crate::client::GiftLists`] instance. Independent client instances carry
//! independent configurations and never interfere with each other.

use serde::{Deserialize, Serialize};

/// Endpoint path templates consumed by the orchestrator.
///
/// Placeholders are written `{{name}}` and substituted through
/// [`crate::urls::resolve`]. The paths are part of the backend contract and
/// are kept verbatim.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Add items to an existing list.
    pub add_items: &'static str,
    /// Fast list-create, optionally seeded with items.
    pub add_items_new_list: &'static str,
    /// Complex list create / edit.
    pub create_edit_list: &'static str,
    pub delete_list: &'static str,
    /// All of the user's lists, per list-type id.
    pub get_lists: &'static str,
    /// All of a list's items.
    pub get_prods: &'static str,
    pub change_prod_amount: &'static str,
    /// Address record creation, used by the share fan-out.
    pub save_address: &'static str,
    pub share_by_email: &'static str,
    pub send_to_cart: &'static str,
    pub search: &'static str,
    /// Totals / purchased statistics for one list.
    pub get_stats: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            add_items: "/no-cache/giftlistv2/skutolist",
            add_items_new_list: "/no-cache/giftlistv2/skutonewlist",
            create_edit_list: "/no-cache/giftlistv2/save/",
            delete_list: "/no-cache/giftlistv2/delete/list/{{listID}}",
            get_lists: "/no-cache/giftlistv2/getinsertsku/{{typeIDs}}/list",
            get_prods: "/no-cache/giftlistv2/getskulist/{{listID}}/{{imgSize}}/{{pageSize}}/true",
            change_prod_amount:
                "/no-cache/giftlistv2/changewishedamount/{{listID}}/{{prodSku}}/{{prodQuantity}}",
            save_address: "/no-cache/giftlistv2/address/save/",
            share_by_email: "/giftlistv2/SendShareMail/{{listID}}",
            send_to_cart: "/no-cache/giftlistv2/sendtocart/{{listID}}",
            search: "/no-cache/giftlistv2/search/",
            get_stats: "/no-cache/giftlistv2/getstatistics/{{listID}}/{{imgSize}}/{{orderURL}}",
        }
    }
}

/// User-tunable configuration.
///
/// `lists_path` / `list_path` default to the storefront conventions; the
/// rest must be supplied before the operations that need them run. The
/// orchestrator validates presence and fails fast with
/// [`crate::error::GiftListError::MissingConfig`] before any network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftListConfig {
    /// Every list-type id available, used to fetch all of the user's lists.
    pub list_type_ids: Option<Vec<String>>,
    /// Default list type for creating a new list.
    pub def_list_type_id: Option<String>,
    /// Store account name, required for address records.
    pub store_name: Option<String>,
    /// Path for the lists page.
    pub lists_path: String,
    /// Path for a single list page.
    pub list_path: String,
}

impl Default for GiftListConfig {
    fn default() -> Self {
        Self {
            list_type_ids: None,
            def_list_type_id: None,
            store_name: None,
            lists_path: "/giftlist".to_string(),
            list_path: "/giftlist/product".to_string(),
        }
    }
}

/// Partial configuration overlay, mirroring the granular setters: only the
/// fields actually given replace the current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub list_type_ids: Option<Vec<String>>,
    pub def_list_type_id: Option<String>,
    pub store_name: Option<String>,
    pub lists_path: Option<String>,
    pub list_path: Option<String>,
}

impl GiftListConfig {
    pub fn merge(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.list_type_ids {
            self.list_type_ids = Some(v);
        }
        if let Some(v) = patch.def_list_type_id {
            self.def_list_type_id = Some(v);
        }
        if let Some(v) = patch.store_name {
            self.store_name = Some(v);
        }
        if let Some(v) = patch.lists_path {
            self.lists_path = v;
        }
        if let Some(v) = patch.list_path {
            self.list_path = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_storefront_paths() {
        let cfg = GiftListConfig::default();
        assert_eq!(cfg.lists_path, "/giftlist");
        assert_eq!(cfg.list_path, "/giftlist/product");
        assert!(cfg.def_list_type_id.is_none());
    }

    #[test]
    fn merge_overlays_only_given_fields() {
        let mut cfg = GiftListConfig::default();
        cfg.store_name = Some("acme".into());
        cfg.merge(ConfigPatch {
            def_list_type_id: Some("7".into()),
            ..Default::default()
        });
        assert_eq!(cfg.def_list_type_id.as_deref(), Some("7"));
        assert_eq!(cfg.store_name.as_deref(), Some("acme"));
        assert_eq!(cfg.lists_path, "/giftlist");
    }
}

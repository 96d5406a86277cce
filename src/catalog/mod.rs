//! The read-only service and checklist catalogs.
//!
//! Supplied to the core at startup; [`ServiceCatalog::standard`] builds the
//! practice's built-in catalog. The catalog also hosts the two pieces of
//! derivation logic that depend on it: recovering a catalog key from a
//! persisted display name, and instantiating fresh checklist templates.
use std::collections::HashMap;

use crate::domain::checklist::ChecklistItem;
use crate::domain::service::ServiceCategory;
use crate::domain::types::ServiceKey;

mod data;

/// One entry of a category's service list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub key: ServiceKey,
    pub label: String,
    /// Free-text entries ("Lain-lain …") store a user-supplied name instead
    /// of the fixed label. By convention each category has exactly one.
    pub is_free_text: bool,
}

/// Ordered checklist template for one service key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistTemplate {
    items: Vec<(String, String)>,
}

impl ChecklistTemplate {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(id, label)| (id.into(), label.into()))
                .collect(),
        }
    }

    /// Fresh, independently-owned instantiation with every step unchecked.
    pub fn instantiate(&self) -> Vec<ChecklistItem> {
        self.items
            .iter()
            .map(|(id, label)| ChecklistItem::unchecked(id, label))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
struct CategoryCatalog {
    services: Vec<ServiceDefinition>,
    checklists: HashMap<ServiceKey, ChecklistTemplate>,
}

/// Lookup table mapping each category to its ordered service definitions and
/// their checklist templates. Read-only after construction.
#[derive(Clone, Debug)]
pub struct ServiceCatalog {
    ppat: CategoryCatalog,
    notaris: CategoryCatalog,
}

impl ServiceCatalog {
    /// The built-in catalog of the practice: 17 PPAT and 14 NOTARIS services
    /// with their checklist templates.
    pub fn standard() -> Self {
        data::standard_catalog()
    }

    /// Builds a catalog from explicit definitions; templates are keyed by
    /// service key. Keys without a template resolve to the category default.
    pub fn new(
        definitions: impl IntoIterator<Item = (ServiceCategory, ServiceDefinition)>,
        templates: impl IntoIterator<Item = (ServiceCategory, ServiceKey, ChecklistTemplate)>,
    ) -> Self {
        let mut catalog = Self {
            ppat: CategoryCatalog::default(),
            notaris: CategoryCatalog::default(),
        };
        for (category, definition) in definitions {
            catalog.category_mut(category).services.push(definition);
        }
        for (category, key, template) in templates {
            catalog.category_mut(category).checklists.insert(key, template);
        }
        catalog
    }

    fn category(&self, category: ServiceCategory) -> &CategoryCatalog {
        match category {
            ServiceCategory::Ppat => &self.ppat,
            ServiceCategory::Notaris => &self.notaris,
        }
    }

    fn category_mut(&mut self, category: ServiceCategory) -> &mut CategoryCatalog {
        match category {
            ServiceCategory::Ppat => &mut self.ppat,
            ServiceCategory::Notaris => &mut self.notaris,
        }
    }

    /// Ordered service definitions of a category.
    pub fn services(&self, category: ServiceCategory) -> &[ServiceDefinition] {
        &self.category(category).services
    }

    /// Looks a definition up by its catalog key.
    pub fn find_by_key(
        &self,
        category: ServiceCategory,
        key: &ServiceKey,
    ) -> Option<&ServiceDefinition> {
        self.services(category)
            .iter()
            .find(|definition| &definition.key == key)
    }

    /// The category's single free-text entry.
    pub fn free_text_service(&self, category: ServiceCategory) -> Option<&ServiceDefinition> {
        self.services(category)
            .iter()
            .find(|definition| definition.is_free_text)
    }

    /// Recovers the catalog key a persisted client record was created from.
    ///
    /// Records store only a display name (plus, for free-text services, the
    /// user-supplied name), so edits must re-derive the key to detect whether
    /// the underlying service changed. Layered, first match wins:
    ///
    /// 1. a non-free-text entry whose label equals `name` exactly;
    /// 2. the free-text entry, when `custom_name` equals `name` or `name`
    ///    equals the entry's own label;
    /// 3. any entry whose label equals `name`.
    ///
    /// Returns `None` when nothing matches. Known limitation: a free-text
    /// name that happens to equal another entry's fixed label resolves to
    /// that fixed entry via step 1.
    pub fn resolve_service_key(
        &self,
        category: ServiceCategory,
        name: &str,
        custom_name: Option<&str>,
    ) -> Option<ServiceKey> {
        let services = self.services(category);

        if let Some(definition) = services
            .iter()
            .find(|definition| !definition.is_free_text && definition.label == name)
        {
            return Some(definition.key.clone());
        }

        if let Some(free_text) = self.free_text_service(category) {
            if custom_name.is_some_and(|custom| custom == name) || name == free_text.label {
                return Some(free_text.key.clone());
            }
        }

        services
            .iter()
            .find(|definition| definition.label == name)
            .map(|definition| definition.key.clone())
    }

    /// Instantiates a fresh, all-unchecked checklist for the given service.
    ///
    /// Never fails: keys without a specific template degrade to the
    /// category's single-step default. Each call yields an independently
    /// owned sequence.
    pub fn checklist_for(&self, category: ServiceCategory, key: &ServiceKey) -> Vec<ChecklistItem> {
        match self.category(category).checklists.get(key) {
            Some(template) => template.instantiate(),
            None => Self::default_checklist(category),
        }
    }

    /// The single-step fallback template of a category.
    pub fn default_checklist(category: ServiceCategory) -> Vec<ChecklistItem> {
        vec![ChecklistItem::unchecked(
            format!("{}_selesai", category.prefix()),
            "Selesai",
        )]
    }
}

/// Derives the canonical catalog key for a service label: lower-cased, runs
/// of non-alphanumeric characters collapsed to `_`, prefixed with the
/// category (`"Jual Beli"` → `ppat_jual_beli`, `"IMB (PBG) / HAKI"` →
/// `notaris_imb_pbg_haki`).
pub fn service_slug(category: ServiceCategory, label: &str) -> ServiceKey {
    let lower = label.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut pending_separator = false;
    for ch in lower.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator {
                slug.push('_');
                pending_separator = false;
            }
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }
    // The category prefix keeps the key non-empty even for degenerate labels.
    ServiceKey::new(format!("{}_{slug}", category.prefix())).expect("prefixed slug is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_match_the_persisted_key_scheme() {
        let cases = [
            (ServiceCategory::Ppat, "Jual Beli", "ppat_jual_beli"),
            (
                ServiceCategory::Ppat,
                "Pemecahan / Penggabungan Sertipikat",
                "ppat_pemecahan_penggabungan_sertipikat",
            ),
            (
                ServiceCategory::Notaris,
                "IMB (PBG) / HAKI",
                "notaris_imb_pbg_haki",
            ),
            (ServiceCategory::Notaris, "Sewa-Menyewa", "notaris_sewa_menyewa"),
            (
                ServiceCategory::Ppat,
                "Lain-lain PPAT",
                "ppat_lain_lain_ppat",
            ),
        ];
        for (category, label, expected) in cases {
            assert_eq!(service_slug(category, label).as_str(), expected);
        }
    }

    #[test]
    fn reconciler_prefers_fixed_entries() {
        let catalog = ServiceCatalog::standard();
        let key = catalog
            .resolve_service_key(ServiceCategory::Ppat, "Jual Beli", None)
            .unwrap();
        assert_eq!(key.as_str(), "ppat_jual_beli");
    }

    #[test]
    fn reconciler_recovers_free_text_entries() {
        let catalog = ServiceCatalog::standard();

        // custom name equals the stored display name
        let key = catalog
            .resolve_service_key(ServiceCategory::Ppat, "Balik Nama", Some("Balik Nama"))
            .unwrap();
        assert_eq!(key.as_str(), "ppat_lain_lain_ppat");

        // record stored the free-text entry's own label
        let key = catalog
            .resolve_service_key(ServiceCategory::Notaris, "Lain-lain Notaris", None)
            .unwrap();
        assert_eq!(key.as_str(), "notaris_lain_lain_notaris");
    }

    #[test]
    fn reconciler_returns_none_for_unknown_names() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(
            catalog.resolve_service_key(ServiceCategory::Ppat, "Tidak Ada", None),
            None
        );
    }

    #[test]
    fn reconciler_round_trips_every_catalog_entry() {
        let catalog = ServiceCatalog::standard();
        for category in ServiceCategory::ALL {
            for definition in catalog.services(category) {
                let (name, custom) = if definition.is_free_text {
                    ("Sesuatu Khusus", Some("Sesuatu Khusus"))
                } else {
                    (definition.label.as_str(), None)
                };
                let resolved = catalog
                    .resolve_service_key(category, name, custom)
                    .unwrap_or_else(|| panic!("no key for {}", definition.label));
                assert_eq!(resolved, definition.key);
            }
        }
    }

    #[test]
    fn checklists_instantiate_unchecked_and_fresh() {
        let catalog = ServiceCatalog::standard();
        let key = ServiceKey::new("ppat_jual_beli").unwrap();
        let first = catalog.checklist_for(ServiceCategory::Ppat, &key);
        assert_eq!(first.len(), 10);
        assert!(first.iter().all(|item| !item.checked));

        let mut second = catalog.checklist_for(ServiceCategory::Ppat, &key);
        second[0].checked = true;
        let third = catalog.checklist_for(ServiceCategory::Ppat, &key);
        assert!(!third[0].checked);
    }

    #[test]
    fn unknown_keys_degrade_to_the_category_default() {
        let catalog = ServiceCatalog::standard();
        let key = ServiceKey::new("ppat_roya").unwrap();
        let checklist = catalog.checklist_for(ServiceCategory::Ppat, &key);
        assert_eq!(checklist.len(), 1);
        assert_eq!(checklist[0].id, "ppat_selesai");
        assert_eq!(checklist[0].label, "Selesai");
    }
}

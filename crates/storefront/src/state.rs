//! Application state for one running storefront.

use std::sync::Arc;

use tracing::{debug, instrument};

use encantado_core::ProductId;

use crate::cart::CartError;
use crate::catalog::{Catalog, ProductSelection};
use crate::config::StorefrontConfig;
use crate::session::SessionStore;

/// Options picked on a product page before pressing "add to cart".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToCart {
    pub product_id: ProductId,
    pub quantity: u32,
    pub color: Option<String>,
    pub size: Option<String>,
    pub note: Option<String>,
}

impl AddToCart {
    /// One unit of a product with nothing chosen yet.
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: 1,
            color: None,
            size: None,
            note: None,
        }
    }
}

/// Catalog, configuration and the shopper's session.
///
/// The catalog and config are read-only and shared via `Arc`; cloning an
/// `AppState` copies the session.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    session: SessionStore,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create state with the seeded catalog and a fresh session.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(config, Catalog::seeded())
    }

    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        let session = SessionStore::from_config(&config);
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
            session,
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// Validate a product page selection and add it to the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownProduct` for an id not in the catalog, or
    /// the selection's own error when options are missing or invalid.
    #[instrument(skip(self, request), fields(product_id = %request.product_id))]
    pub fn add_product(&mut self, request: AddToCart) -> Result<(), CartError> {
        let product = self
            .inner
            .catalog
            .product(&request.product_id)
            .ok_or_else(|| CartError::UnknownProduct(request.product_id.clone()))?;

        let mut selection = ProductSelection::new(product).quantity(request.quantity);
        if let Some(color) = request.color {
            selection = selection.color(color);
        }
        if let Some(size) = request.size {
            selection = selection.size(size);
        }
        if let Some(note) = request.note {
            selection = selection.note(note);
        }

        let item = selection.into_cart_item()?;
        debug!(quantity = item.quantity, "Adding product to cart");
        self.session.add_to_cart(item);
        Ok(())
    }

    /// Add one unit straight from a listing card, with no options chosen.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownProduct` for an id not in the catalog.
    #[instrument(skip(self))]
    pub fn quick_add(&mut self, product_id: &ProductId) -> Result<(), CartError> {
        let item = self
            .inner
            .catalog
            .product(product_id)
            .ok_or_else(|| CartError::UnknownProduct(product_id.clone()))?
            .to_cart_item(1);
        debug!("Quick add to cart");
        self.session.add_to_cart(item);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(StorefrontConfig::defaults().unwrap())
    }

    fn topo_bolo() -> AddToCart {
        AddToCart {
            color: Some("Rosa".to_string()),
            size: Some("Pequeno (8cm)".to_string()),
            ..AddToCart::new("2")
        }
    }

    #[test]
    fn test_add_product() {
        let mut state = state();
        state.add_product(topo_bolo()).unwrap();
        state.add_product(topo_bolo()).unwrap();

        let cart = state.session().cart();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut state = state();
        let request = AddToCart {
            product_id: ProductId::new("404"),
            ..topo_bolo()
        };
        assert_eq!(
            state.add_product(request),
            Err(CartError::UnknownProduct(ProductId::new("404")))
        );
        assert!(state.session().cart().is_empty());
    }

    #[test]
    fn test_add_requires_options() {
        let mut state = state();
        assert_eq!(
            state.add_product(AddToCart::new("2")),
            Err(CartError::MissingOption("color"))
        );
    }

    #[test]
    fn test_quick_add_skips_options() {
        let mut state = state();
        state.quick_add(&ProductId::new("3")).unwrap();
        state.quick_add(&ProductId::new("9")).unwrap();
        state.quick_add(&ProductId::new("3")).unwrap();

        let cart = state.session().cart();
        assert_eq!(cart.items().len(), 2);
        let floral = cart.get(&ProductId::new("3")).unwrap();
        assert_eq!(floral.quantity, 2);
        assert_eq!(floral.customization, None);
        assert_eq!(cart.get(&ProductId::new("9")).unwrap().quantity, 1);
    }

    #[test]
    fn test_quick_add_unknown_product() {
        let mut state = state();
        assert_eq!(
            state.quick_add(&ProductId::new("404")),
            Err(CartError::UnknownProduct(ProductId::new("404")))
        );
        assert!(state.session().cart().is_empty());
    }

    #[test]
    fn test_clone_shares_catalog_not_session() {
        let mut state = state();
        let snapshot = state.clone();
        state.add_product(topo_bolo()).unwrap();

        assert!(snapshot.session().cart().is_empty());
        assert!(std::ptr::eq(state.catalog(), snapshot.catalog()));
    }
}

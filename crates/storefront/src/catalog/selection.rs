//! Product page option picker.

use crate::cart::CartError;
use crate::models::{CartItem, Product};

/// Color, size, quantity and personalization chosen on a product page.
///
/// ```
/// use encantado_storefront::catalog::{Catalog, ProductSelection};
/// use encantado_core::ProductId;
///
/// let catalog = Catalog::seeded();
/// let product = catalog.product(&ProductId::new("1")).unwrap();
/// let item = ProductSelection::new(product)
///     .color("Branco")
///     .size("Médio (12cm)")
///     .quantity(2)
///     .into_cart_item()
///     .unwrap();
/// assert_eq!(item.customization.as_deref(), Some("Cor: branco, Tamanho: Médio (12cm)"));
/// ```
#[derive(Debug, Clone)]
pub struct ProductSelection<'a> {
    product: &'a Product,
    quantity: u32,
    color: Option<String>,
    size: Option<String>,
    note: Option<String>,
}

impl<'a> ProductSelection<'a> {
    /// Start a selection with quantity 1 and nothing chosen.
    #[must_use]
    pub const fn new(product: &'a Product) -> Self {
        Self {
            product,
            quantity: 1,
            color: None,
            size: None,
            note: None,
        }
    }

    #[must_use]
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Free-text personalization. Blank text is ignored.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = (!note.trim().is_empty()).then_some(note);
        self
    }

    /// Build the cart line.
    ///
    /// # Errors
    ///
    /// Fails if color or size is missing or not offered by the product, or if
    /// the quantity is 0.
    pub fn into_cart_item(self) -> Result<CartItem, CartError> {
        let color = required("color", self.color, &self.product.colors)?;
        let size = required("size", self.size, &self.product.sizes)?;
        if self.quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let mut customization = format!("Cor: {color}, Tamanho: {size}");
        if let Some(note) = self.note {
            customization.push_str(", Personalização: ");
            customization.push_str(note.trim());
        }

        let mut item = self.product.to_cart_item(self.quantity);
        item.customization = Some(customization);
        Ok(item)
    }
}

/// A non-blank choice. When the product lists options, the listed spelling is
/// returned.
fn required(
    option: &'static str,
    value: Option<String>,
    offered: &[String],
) -> Result<String, CartError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(CartError::MissingOption(option))?;

    if offered.is_empty() {
        return Ok(value);
    }
    offered
        .iter()
        .find(|o| o.eq_ignore_ascii_case(&value))
        .cloned()
        .ok_or(CartError::InvalidOption { option, value })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use encantado_core::ProductId;

    use super::*;
    use crate::catalog::Catalog;

    fn topo(catalog: &Catalog) -> &Product {
        catalog.product(&ProductId::new("1")).unwrap()
    }

    #[test]
    fn test_customization_with_note() {
        let catalog = Catalog::seeded();
        let item = ProductSelection::new(topo(&catalog))
            .color("rosa")
            .size("Grande (15cm)")
            .note("  Noivos: Ana & João ")
            .into_cart_item()
            .unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(
            item.customization.as_deref(),
            Some("Cor: rosa, Tamanho: Grande (15cm), Personalização: Noivos: Ana & João")
        );
    }

    #[test]
    fn test_blank_note_is_dropped() {
        let catalog = Catalog::seeded();
        let item = ProductSelection::new(topo(&catalog))
            .color("branco")
            .size("Pequeno (8cm)")
            .note("   ")
            .into_cart_item()
            .unwrap();
        assert_eq!(
            item.customization.as_deref(),
            Some("Cor: branco, Tamanho: Pequeno (8cm)")
        );
    }

    #[test]
    fn test_customization_uses_listed_spelling() {
        let catalog = Catalog::seeded();
        let item = ProductSelection::new(topo(&catalog))
            .color(" ROSA ")
            .size("GRANDE (15cm)")
            .into_cart_item()
            .unwrap();
        assert_eq!(
            item.customization.as_deref(),
            Some("Cor: rosa, Tamanho: Grande (15cm)")
        );
    }

    #[test]
    fn test_missing_color_and_size() {
        let catalog = Catalog::seeded();
        assert_eq!(
            ProductSelection::new(topo(&catalog))
                .size("Médio (12cm)")
                .into_cart_item(),
            Err(CartError::MissingOption("color"))
        );
        assert_eq!(
            ProductSelection::new(topo(&catalog))
                .color("rosa")
                .size(" ")
                .into_cart_item(),
            Err(CartError::MissingOption("size"))
        );
    }

    #[test]
    fn test_unoffered_color() {
        let catalog = Catalog::seeded();
        let result = ProductSelection::new(topo(&catalog))
            .color("verde")
            .size("Médio (12cm)")
            .into_cart_item();
        assert!(matches!(
            result,
            Err(CartError::InvalidOption { option: "color", .. })
        ));
    }

    #[test]
    fn test_zero_quantity() {
        let catalog = Catalog::seeded();
        let result = ProductSelection::new(topo(&catalog))
            .color("rosa")
            .size("Médio (12cm)")
            .quantity(0)
            .into_cart_item();
        assert_eq!(result, Err(CartError::ZeroQuantity));
    }
}

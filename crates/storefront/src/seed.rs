//! Built-in demo data: the test account, its order history and the catalog.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use encantado_core::{AddressId, Email, OrderId, OrderStatus, ProductId, UserId};

use crate::models::{Address, CartItem, Category, Order, Product, Promotion, User};

/// Email of the built-in test account.
pub const DEMO_EMAIL: &str = "ana.silva@email.com";

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/200/200";
const IMAGE_WEDDING: &str = "/assets/product-wedding.jpg";
const IMAGE_DECORATION: &str = "/assets/product-decoration.jpg";
const IMAGE_BABY: &str = "/assets/product-baby.jpg";
const IMAGE_CHRISTMAS: &str = "/assets/product-christmas.jpg";

/// The test account's saved home address.
#[must_use]
pub fn demo_address() -> Address {
    Address {
        id: AddressId::new("1"),
        name: "Casa".to_string(),
        street: "Rua das Flores".to_string(),
        number: "123".to_string(),
        complement: Some("Apt 45".to_string()),
        neighborhood: "Jardim Primavera".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        zip_code: "01234-567".to_string(),
    }
}

/// The test account profile (Ana Silva), logging in as `email`.
#[must_use]
pub fn demo_user(email: Email) -> User {
    User {
        id: UserId::new("1"),
        name: "Ana Silva".to_string(),
        email,
        phone: Some("(11) 99999-9999".to_string()),
        addresses: vec![demo_address()],
    }
}

fn line(
    id: &str,
    name: &str,
    unit_price: Decimal,
    quantity: u32,
    category: &str,
    customization: Option<&str>,
) -> CartItem {
    CartItem {
        product_id: ProductId::new(id),
        name: name.to_string(),
        unit_price,
        quantity,
        image: PLACEHOLDER_IMAGE.to_string(),
        category: category.to_string(),
        customization: customization.map(str::to_string),
    }
}

/// Order history shown for the test account.
#[must_use]
pub fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("PED001"),
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default(),
            status: OrderStatus::Delivered,
            total: Decimal::new(8990, 2),
            items: vec![
                line(
                    "1",
                    "Topo de Bolo Casal",
                    Decimal::new(4500, 2),
                    1,
                    "casamento",
                    Some("Vestido branco, terno azul"),
                ),
                line(
                    "2",
                    "Lembrancinha Coração",
                    Decimal::new(450, 2),
                    10,
                    "casamento",
                    None,
                ),
            ],
            address: demo_address(),
        },
        Order {
            id: OrderId::new("PED002"),
            date: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap_or_default(),
            status: OrderStatus::Processing,
            total: Decimal::new(12_550, 2),
            items: vec![line(
                "3",
                "Kit Festa Infantil",
                Decimal::new(12_550, 2),
                1,
                "infantil",
                Some("Tema Unicórnio, nome: Sofia"),
            )],
            address: demo_address(),
        },
    ]
}

fn category(slug: &str, title: &str, description: &str) -> Category {
    Category {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Category pages. The first entry (`decoracao`) is the fallback for unknown slugs.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        category(
            "decoracao",
            "Decoração",
            "Peças únicas para decorar sua casa com charme e personalidade",
        ),
        category(
            "presentes",
            "Presentes",
            "Presentes especiais para momentos únicos",
        ),
        category(
            "personalizados",
            "Personalizados",
            "Criamos peças exclusivas do jeito que você sonhou",
        ),
        category(
            "casamento",
            "Casamento",
            "Lembrancinhas e decorações para o dia mais especial",
        ),
        category(
            "infantil",
            "Infantil",
            "Alegria e diversão em cada peça para os pequenos",
        ),
        category("natal", "Natal", "Magia natalina em cada detalhe"),
    ]
}

struct ProductSeed<'a> {
    id: &'a str,
    name: &'a str,
    price: Decimal,
    original_price: Option<Decimal>,
    image: &'a str,
    category: &'a str,
    rating: u8,
    colors: &'a [&'a str],
    themes: &'a [&'a str],
    is_new: bool,
    is_best_seller: bool,
}

impl ProductSeed<'_> {
    fn build(&self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            price: self.price,
            original_price: self.original_price,
            image: self.image.to_string(),
            category: self.category.to_string(),
            rating: self.rating,
            colors: self.colors.iter().map(|c| (*c).to_string()).collect(),
            themes: self.themes.iter().map(|t| (*t).to_string()).collect(),
            sizes: ["Pequeno (8cm)", "Médio (12cm)", "Grande (15cm)"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            is_new: self.is_new,
            is_best_seller: self.is_best_seller,
        }
    }
}

/// Products listed on category pages, in relevance order.
#[must_use]
pub fn products() -> Vec<Product> {
    [
        ProductSeed {
            id: "1",
            name: "Topo de Bolo Casal Personalizado",
            price: Decimal::new(4500, 2),
            original_price: Some(Decimal::new(5500, 2)),
            image: IMAGE_WEDDING,
            category: "casamento",
            rating: 5,
            colors: &["branco", "rosa"],
            themes: &["casamento", "romântico"],
            is_new: false,
            is_best_seller: true,
        },
        ProductSeed {
            id: "2",
            name: "Kit Decoração Infantil Unicórnio",
            price: Decimal::new(8990, 2),
            original_price: None,
            image: IMAGE_BABY,
            category: "infantil",
            rating: 5,
            colors: &["rosa", "roxo", "branco"],
            themes: &["unicórnio", "infantil"],
            is_new: true,
            is_best_seller: false,
        },
        ProductSeed {
            id: "3",
            name: "Enfeites de Mesa Floral",
            price: Decimal::new(3200, 2),
            original_price: None,
            image: IMAGE_DECORATION,
            category: "decoracao",
            rating: 4,
            colors: &["verde", "rosa", "amarelo"],
            themes: &["floral", "primavera"],
            is_new: false,
            is_best_seller: true,
        },
        ProductSeed {
            id: "4",
            name: "Coleção Natal Encantado",
            price: Decimal::new(6750, 2),
            original_price: Some(Decimal::new(8500, 2)),
            image: IMAGE_CHRISTMAS,
            category: "natal",
            rating: 5,
            colors: &["vermelho", "verde", "dourado"],
            themes: &["natal", "inverno"],
            is_new: false,
            is_best_seller: false,
        },
        ProductSeed {
            id: "5",
            name: "Lembrancinha Borboleta",
            price: Decimal::new(850, 2),
            original_price: None,
            image: IMAGE_DECORATION,
            category: "lembrancinha",
            rating: 4,
            colors: &["azul", "rosa"],
            themes: &["natureza", "delicado"],
            is_new: true,
            is_best_seller: false,
        },
        ProductSeed {
            id: "6",
            name: "Porta-Retrato Família",
            price: Decimal::new(2890, 2),
            original_price: None,
            image: IMAGE_DECORATION,
            category: "decoracao",
            rating: 4,
            colors: &["bege", "marrom"],
            themes: &["família", "clássico"],
            is_new: false,
            is_best_seller: true,
        },
    ]
    .iter()
    .map(ProductSeed::build)
    .collect()
}

struct PromotionSeed<'a> {
    product: ProductSeed<'a>,
    discount_percent: u8,
    review_count: u32,
    limited_time: bool,
}

#[allow(clippy::too_many_arguments)]
const fn promo(
    id: &'static str,
    name: &'static str,
    price: Decimal,
    original: Decimal,
    image: &'static str,
    category: &'static str,
    rating: u8,
) -> ProductSeed<'static> {
    ProductSeed {
        id,
        name,
        price,
        original_price: Some(original),
        image,
        category,
        rating,
        colors: &[],
        themes: &[],
        is_new: false,
        is_best_seller: false,
    }
}

/// Products on the promotions page.
#[must_use]
pub fn promotions() -> Vec<Promotion> {
    [
        PromotionSeed {
            product: ProductSeed {
                is_best_seller: true,
                ..promo(
                    "1",
                    "Topo de Bolo Casal Personalizado",
                    Decimal::new(4500, 2),
                    Decimal::new(5500, 2),
                    IMAGE_WEDDING,
                    "casamento",
                    5,
                )
            },
            discount_percent: 18,
            review_count: 47,
            limited_time: true,
        },
        PromotionSeed {
            product: promo(
                "4",
                "Coleção Natal Encantado",
                Decimal::new(6750, 2),
                Decimal::new(8500, 2),
                IMAGE_CHRISTMAS,
                "natal",
                5,
            ),
            discount_percent: 21,
            review_count: 32,
            limited_time: true,
        },
        PromotionSeed {
            product: ProductSeed {
                is_best_seller: true,
                ..promo(
                    "8",
                    "Kit Festa Completo",
                    Decimal::new(12_000, 2),
                    Decimal::new(15_000, 2),
                    IMAGE_BABY,
                    "infantil",
                    5,
                )
            },
            discount_percent: 20,
            review_count: 28,
            limited_time: false,
        },
        PromotionSeed {
            product: promo(
                "9",
                "Lembrancinha Trio Especial",
                Decimal::new(2490, 2),
                Decimal::new(3500, 2),
                IMAGE_DECORATION,
                "lembrancinha",
                4,
            ),
            discount_percent: 29,
            review_count: 15,
            limited_time: true,
        },
        PromotionSeed {
            product: ProductSeed {
                is_best_seller: true,
                ..promo(
                    "10",
                    "Decoração Mesa Romântica",
                    Decimal::new(8990, 2),
                    Decimal::new(11_000, 2),
                    IMAGE_DECORATION,
                    "decoracao",
                    5,
                )
            },
            discount_percent: 18,
            review_count: 22,
            limited_time: false,
        },
        PromotionSeed {
            product: promo(
                "11",
                "Kit Baby Shower Deluxe",
                Decimal::new(15_600, 2),
                Decimal::new(19_500, 2),
                IMAGE_BABY,
                "infantil",
                5,
            ),
            discount_percent: 20,
            review_count: 19,
            limited_time: true,
        },
    ]
    .iter()
    .map(|seed| Promotion {
        product: seed.product.build(),
        discount_percent: seed.discount_percent,
        review_count: seed.review_count,
        limited_time: seed.limited_time,
        best_seller: seed.product.is_best_seller,
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_orders_reference_demo_address() {
        let address = demo_address();
        assert!(demo_orders().iter().all(|order| order.address == address));
    }

    #[test]
    fn test_product_ids_unique() {
        let products = products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_promotions_are_on_sale() {
        assert!(promotions().iter().all(|p| p.product.is_on_sale()));
    }

    #[test]
    fn test_demo_user_uses_given_email() {
        let user = demo_user(Email::parse(DEMO_EMAIL).unwrap());
        assert_eq!(user.email.as_str(), DEMO_EMAIL);
        assert_eq!(user.addresses.len(), 1);
    }
}

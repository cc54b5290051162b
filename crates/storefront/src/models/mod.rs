//! Domain models for the storefront.
//!
//! Plain data records. Behavior over them lives in [`crate::cart`],
//! [`crate::catalog`], [`crate::checkout`] and [`crate::session`].

pub mod cart_item;
pub mod order;
pub mod preferences;
pub mod product;
pub mod user;

pub use cart_item::CartItem;
pub use order::Order;
pub use preferences::NotificationPreferences;
pub use product::{Category, Product, Promotion};
pub use user::{Address, NewUser, User};

//! External Adapters for the Shopping Domain
//!
//! Items sometimes arrive from an external product catalogue that uses its
//! own schema. The adapters here translate those records into [`Item`]s
//! before they enter a list.
//!
//! # Available Adapters
//!
//! - **ItemAdapter**: converts an [`ExternalItem`] into an [`Item`]
//!
//! # Usage
//!
//! ```rust
//! use domain_shopping::adapters::{ExternalItem, ItemAdapter};
//! use core_kernel::ItemId;
//!
//! let external = ExternalItem::new("ext123", "Яблука", 5, 12.0);
//! let item = ItemAdapter::new(external).to_item(ItemId::new(3));
//!
//! assert_eq!(item.id, ItemId::new(3));
//! assert_eq!(item.name, "Яблука");
//! ```
//!
//! [`Item`]: crate::item::Item

pub mod external_catalog;

pub use external_catalog::{ExternalItem, ItemAdapter};

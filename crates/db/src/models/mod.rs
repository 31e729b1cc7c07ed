//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Structural validation that does not need the database lives on the DTOs
//! (`validate` methods) so handlers can reject bad input with field-keyed
//! errors before touching a connection.

pub mod ape_class;
pub mod carousel_item;
pub mod event;
pub mod house_team;
pub mod page;
pub mod page_widget;
pub mod person;
pub mod video;
pub mod widget;

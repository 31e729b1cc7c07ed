//! Join entity binding widgets to pages with an explicit sort order.

use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `page_widgets` join table.
///
/// (page, widget) pairs are unique; within a page no two rows share a sort
/// order (enforced by check-then-bump at write time).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageWidget {
    pub id: DbId,
    pub page_id: DbId,
    pub widget_id: DbId,
    pub sort_order: i32,
}

/// DTO for attaching a widget to a page.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachWidget {
    pub widget_id: DbId,
    /// Omitted: the widget lands after the page's current maximum.
    pub sort_order: Option<i32>,
}

/// DTO for reordering an attached widget.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderWidget {
    pub sort_order: i32,
}

//! View item use case.

use rewear_domain::ClothingItem;

use crate::error::ApplicationResult;
use crate::ports::CatalogGateway;

/// Use case for loading a single item's detail view data.
///
/// Anonymous access is allowed; the caller decides what actions to
/// offer based on the session state.
pub struct ViewItem<C: CatalogGateway> {
    catalog: C,
}

impl<C: CatalogGateway> ViewItem<C> {
    /// Creates a new `ViewItem` use case.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Fetches the item by id.
    ///
    /// # Errors
    ///
    /// Returns an error when the item does not exist or the catalog
    /// call fails.
    pub async fn execute(&self, item_id: &str) -> ApplicationResult<ClothingItem> {
        let item = self.catalog.fetch_item(item_id).await?;
        Ok(item)
    }
}

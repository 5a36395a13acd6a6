//! Resolved project layout for one scaffold run.
//!
//! [`ProjectLayout`] is derived deterministically from [`ServiceParameters`]
//! plus filesystem conventions. It only *computes* paths; existence checks
//! happen in the layout resolver and directory creation is deferred to the
//! file writer at write time.
//!
//! Conventions (entity `SalesOrder`, plural `SalesOrders` / `sales-orders`):
//!
//! ```text
//! <root>/<Core>/SalesOrders/Dto/Request/CreateSalesOrderRequest.cs
//! <root>/<Core>/SalesOrders/Dto/Request/UpdateSalesOrderRequest.cs
//! <root>/<Core>/SalesOrders/Dto/Response/SalesOrderResponse.cs
//! <root>/<Core>/SalesOrders/Interfaces/ISalesOrderService.cs
//! <root>/<WebApi>/Controllers/SalesOrdersController.cs
//! <root>/<ClientApp>/src/app/sales-orders/components/pages/...
//! <root>/<ClientApp>/src/app/app.routes.ts          (merge target)
//! ```

use std::path::PathBuf;

use crate::domain::entities::params::ServiceParameters;

/// Absolute (root-joined) paths for every logical project and the
/// conventional subfolders the generator writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    core_root: PathBuf,
    api_root: PathBuf,
    frontend_root: PathBuf,
    entity_plural_pascal: String,
    entity_plural_kebab: String,
}

impl ProjectLayout {
    /// Compute the layout for the run's entity. Pure path arithmetic.
    pub fn derive(params: &ServiceParameters) -> Self {
        let root = params.src_root();
        Self {
            core_root: root.join(params.core_project()),
            api_root: root.join(params.api_project()),
            frontend_root: root.join(params.frontend_project()),
            entity_plural_pascal: params.entity().plural_pascal().to_string(),
            entity_plural_kebab: params.entity().plural_kebab().to_string(),
        }
    }

    pub fn core_root(&self) -> &PathBuf {
        &self.core_root
    }

    pub fn api_root(&self) -> &PathBuf {
        &self.api_root
    }

    pub fn frontend_root(&self) -> &PathBuf {
        &self.frontend_root
    }

    /// `<core>/<EntityPlural>` - the per-entity feature folder.
    pub fn core_feature_dir(&self) -> PathBuf {
        self.core_root.join(&self.entity_plural_pascal)
    }

    pub fn dto_request_dir(&self) -> PathBuf {
        self.core_feature_dir().join("Dto").join("Request")
    }

    pub fn dto_response_dir(&self) -> PathBuf {
        self.core_feature_dir().join("Dto").join("Response")
    }

    pub fn interfaces_dir(&self) -> PathBuf {
        self.core_feature_dir().join("Interfaces")
    }

    pub fn controllers_dir(&self) -> PathBuf {
        self.api_root.join("Controllers")
    }

    /// `<frontend>/src/app/<entity-plural-kebab>` - the Angular feature tree.
    pub fn frontend_feature_dir(&self) -> PathBuf {
        self.frontend_root
            .join("src")
            .join("app")
            .join(&self.entity_plural_kebab)
    }

    pub fn components_pages_dir(&self) -> PathBuf {
        self.frontend_feature_dir().join("components").join("pages")
    }

    /// The application routes file the route fragment merges into.
    pub fn routes_file(&self) -> PathBuf {
        self.frontend_root
            .join("src")
            .join("app")
            .join("app.routes.ts")
    }
}

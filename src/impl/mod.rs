// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod config;
    pub(crate) mod datasources {
        pub(crate) mod csv_workbook_store;
        pub(crate) mod memory_workbook_store;
        pub(crate) mod spreadsheet_store;
    }
    pub(crate) mod models {
        pub(crate) mod date_cell_model;
        pub(crate) mod expense_row_model;
        pub(crate) mod header_model;
        pub(crate) mod money_cell_model;
        pub(crate) mod project_row_model;
        pub(crate) mod user_row_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod workbook_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod expense;
        pub(crate) mod project;
        pub(crate) mod snapshot;
        pub(crate) mod status;
        pub(crate) mod user;
    }
    pub(crate) mod logic {
        pub(crate) mod auth;
        pub(crate) mod id_allocator;
        pub(crate) mod reconcile;
        pub(crate) mod row_locator;
    }
    pub(crate) mod repositories {
        pub(crate) mod workbook_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod tracker_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod date_fmt;
    pub(crate) mod money_fmt;
    pub(crate) mod report_printer;
    pub(crate) mod screens;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::expense::*;
        pub use crate::domain::entities::project::*;
        pub use crate::domain::entities::snapshot::*;
        pub use crate::domain::entities::status::*;
        pub use crate::domain::entities::user::*;
    }

    pub mod stores {
        pub use crate::data::datasources::csv_workbook_store::*;
        pub use crate::data::datasources::memory_workbook_store::*;
        pub use crate::data::datasources::spreadsheet_store::*;
    }

    pub mod config {
        pub use crate::data::config::*;
    }

    pub mod screens {
        pub use crate::presentation::screens::*;
    }
}

// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod payments_datasource;
        pub(crate) mod work_days_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod ingest_policy;
        pub(crate) mod iso_date_model;
        pub(crate) mod money_amount_model;
        pub(crate) mod raw_record_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod month_bucket;
        pub(crate) mod payment;
        pub(crate) mod reports;
        pub(crate) mod salary_ledger;
        pub(crate) mod salary_records;
        pub(crate) mod user;
        pub(crate) mod work_day;
    }
    pub(crate) mod logic {
        pub(crate) mod cumulative_balance;
        pub(crate) mod ledger_impl;
        pub(crate) mod month_key_impl;
        pub(crate) mod monthly_grouper;
        pub(crate) mod report_projector;
        #[cfg(test)]
        pub(crate) mod test_fixtures;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod ledger_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod ledger_printer;
    pub(crate) mod month_fmt;
    pub(crate) mod utils;
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
        pub use crate::domain::entities::month_bucket::*;
        pub use crate::domain::entities::payment::*;
        pub use crate::domain::entities::reports::*;
        pub use crate::domain::entities::salary_ledger::*;
        pub use crate::domain::entities::salary_records::*;
        pub use crate::domain::entities::user::*;
        pub use crate::domain::entities::work_day::*;
    }

    /// The aggregation stages on their own, for callers that hold typed
    /// records already. `SalaryLedger::build` chains them.
    pub mod engine {
        pub use crate::domain::logic::cumulative_balance::{compute_cumulative, fill_gaps};
        pub use crate::domain::logic::monthly_grouper::group;
        pub use crate::domain::logic::report_projector::ReportProjector;
    }
}

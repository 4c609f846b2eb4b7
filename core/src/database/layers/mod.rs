pub(crate) mod account;
pub(crate) mod controller_id;
pub(crate) mod ledger_log;
pub(crate) mod transaction;

mod utils;

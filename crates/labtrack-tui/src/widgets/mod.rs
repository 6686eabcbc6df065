//! Custom widget components

mod create_form;
mod header;
mod input;
mod key_hints;
mod login_form;
mod stats;
mod test_table;

pub use create_form::CreateForm;
pub use header::{MainHeader, APP_TITLE};
pub use key_hints::KeyHints;
pub use login_form::{LoginForm, DEMO_PASSWORD, DEMO_USERNAME};
pub use stats::StatsCards;
pub use test_table::{TestTable, EMPTY_TEXT, LOADING_TEXT, NO_MATCH_TEXT, NO_RESULT};

pub mod common_toast;
pub mod cookie_consent;
pub mod data_table;
pub mod footer;
pub mod form_field;
pub mod layout;
pub mod nav;
pub mod page_header;
pub mod sports_card;
pub mod tournament_card;

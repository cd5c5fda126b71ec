pub mod get_gender_comparison;
pub mod get_macro_balance;
pub mod get_overview;

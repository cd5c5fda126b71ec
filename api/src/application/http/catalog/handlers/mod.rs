pub mod get_diseases;
pub mod get_purposes;
pub mod get_symptoms;
pub mod list_nutrients;

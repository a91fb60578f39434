pub mod ambiguity;
pub mod dict;
pub mod pages;
pub mod settings;
pub mod user_dict;

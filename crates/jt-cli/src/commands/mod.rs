pub mod config_ops;
pub mod custom_ops;
pub mod dict_ops;
pub mod sim;

pub mod binding;
pub mod policy;

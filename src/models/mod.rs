pub mod chat;
pub mod fragment;

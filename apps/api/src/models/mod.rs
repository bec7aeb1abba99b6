pub mod catalog;
pub mod contact;
pub mod icon;
pub mod profile;

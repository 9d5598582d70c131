//! CRM entity model
//!
//! Contacts, companies and deals with their list-response containers. Each
//! type registers its fields statically through [`Entity::schema`](crate::Entity::schema).

mod company;
mod contact;
mod deal;

pub use company::{Company, CompanyList};
pub use contact::{Contact, ContactList};
pub use deal::{Deal, DealList};

pub use super::addresses::Entity as Addresses;
pub use super::customers::Entity as Customers;
pub use super::fish::Entity as Fish;
pub use super::orders::Entity as Orders;

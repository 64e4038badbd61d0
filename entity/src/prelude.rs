pub use super::booking::Entity as Booking;
pub use super::country::Entity as Country;
pub use super::hotel::Entity as Hotel;
pub use super::hotel_admin::Entity as HotelAdmin;
pub use super::user::Entity as User;

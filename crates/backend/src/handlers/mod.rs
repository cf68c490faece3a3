pub mod a001_room;
pub mod a002_booking;
pub mod a003_facility;
pub mod a004_user;
pub mod response;
